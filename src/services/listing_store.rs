use chrono::{NaiveDate, Utc};

use crate::models::{CatalogEntry, CityListing};

/// Ordered collection of listings. Insertion order is display order.
#[derive(Debug, Clone, Default)]
pub struct ListingStore {
    listings: Vec<CityListing>,
    last_issued_id: i64,
}

impl ListingStore {
    pub fn new(listings: Vec<CityListing>) -> Self {
        ListingStore {
            listings,
            last_issued_id: 0,
        }
    }

    pub fn as_slice(&self) -> &[CityListing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&CityListing> {
        self.listings.iter().find(|l| l.id == id)
    }

    /// True if some listing has the entry's exact `(city, state)`.
    pub fn contains_place(&self, entry: &CatalogEntry) -> bool {
        self.listings.iter().any(|l| l.is_for(entry))
    }

    /// Appends a pending listing for `entry`, dated today (UTC).
    pub fn add(&mut self, entry: &CatalogEntry) -> &CityListing {
        self.add_on(entry, Utc::now().date_naive())
    }

    pub fn add_on(&mut self, entry: &CatalogEntry, added_date: NaiveDate) -> &CityListing {
        let id = self.next_id(Utc::now().timestamp_millis());
        self.listings.push(CityListing::from_catalog(id, entry, added_date));
        let idx = self.listings.len() - 1;
        &self.listings[idx]
    }

    /// Removes and returns the listing with `id`; `None` if there is none.
    pub fn remove(&mut self, id: &str) -> Option<CityListing> {
        let idx = self.listings.iter().position(|l| l.id == id)?;
        Some(self.listings.remove(idx))
    }

    // Millisecond timestamps, bumped past the last issued value and past any
    // id already present so two adds in the same millisecond stay distinct.
    fn next_id(&mut self, now_millis: i64) -> String {
        let mut candidate = now_millis.max(self.last_issued_id + 1);
        while self.get(&candidate.to_string()).is_some() {
            candidate += 1;
        }
        self.last_issued_id = candidate;
        candidate.to_string()
    }
}
