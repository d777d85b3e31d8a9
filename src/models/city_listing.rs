use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::catalog_entry::{CatalogEntry, Coordinates};

/// Lifecycle tag of a listing. Nothing in the app moves a listing between
/// statuses; new listings always start as `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingStatus {
    Pending,
    Active,
    Review,
}

impl ListingStatus {
    /// Parse from the string value used in JSON and config.
    pub fn from_str(s: &str) -> Option<ListingStatus> {
        match s {
            "pending" => Some(ListingStatus::Pending),
            "active" => Some(ListingStatus::Active),
            "review" => Some(ListingStatus::Review),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ListingStatus::Pending => "pending",
            ListingStatus::Active => "active",
            ListingStatus::Review => "review",
        }
    }

    /// Badge text shown next to a listing.
    pub fn label(&self) -> &'static str {
        match self {
            ListingStatus::Pending => "Pending",
            ListingStatus::Active => "Active",
            ListingStatus::Review => "Review",
        }
    }

    pub fn all() -> &'static [ListingStatus] {
        &[ListingStatus::Active, ListingStatus::Review, ListingStatus::Pending]
    }
}

/// A city currently tracked for the business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityListing {
    pub id: String,
    pub city: String,
    pub state: String,
    pub status: ListingStatus,
    /// Serialized as `YYYY-MM-DD`.
    pub added_date: NaiveDate,
    pub coordinates: Coordinates,
}

impl CityListing {
    /// New listing for a catalog entry. Always `Pending`.
    pub fn from_catalog(id: String, entry: &CatalogEntry, added_date: NaiveDate) -> Self {
        CityListing {
            id,
            city: entry.city.clone(),
            state: entry.state.clone(),
            status: ListingStatus::Pending,
            added_date,
            coordinates: entry.coordinates,
        }
    }

    pub fn is_for(&self, entry: &CatalogEntry) -> bool {
        entry.is_same_place(&self.city, &self.state)
    }

    pub fn label(&self) -> String {
        format!("{}, {}", self.city, self.state)
    }
}
