use serde::Serialize;

use crate::models::city_listing::{CityListing, ListingStatus};

/// Per-status listing counts for the summary cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StatusSummary {
    pub active: usize,
    pub review: usize,
    pub pending: usize,
}

impl StatusSummary {
    pub fn from_listings(listings: &[CityListing]) -> Self {
        listings.iter().fold(StatusSummary::default(), |mut acc, l| {
            match l.status {
                ListingStatus::Active => acc.active += 1,
                ListingStatus::Review => acc.review += 1,
                ListingStatus::Pending => acc.pending += 1,
            }
            acc
        })
    }

    pub fn count(&self, status: ListingStatus) -> usize {
        match status {
            ListingStatus::Active => self.active,
            ListingStatus::Review => self.review,
            ListingStatus::Pending => self.pending,
        }
    }

    pub fn total(&self) -> usize {
        self.active + self.review + self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::sample_listings;

    #[test]
    fn sample_counts() {
        let summary = StatusSummary::from_listings(&sample_listings());
        assert_eq!(summary, StatusSummary { active: 2, review: 1, pending: 1 });
        assert_eq!(summary.total(), 4);
    }

    #[test]
    fn empty_is_all_zero() {
        let summary = StatusSummary::from_listings(&[]);
        assert_eq!(summary.total(), 0);
        assert_eq!(summary.count(ListingStatus::Active), 0);
    }
}
