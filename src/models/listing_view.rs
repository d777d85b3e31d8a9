use crate::models::CityListing;
use crate::utils::{format_added_date, status_badge_class};

/// A listing row as the dashboard template renders it.
pub struct ListingView {
    pub id: String,
    pub label: String,
    pub status_label: &'static str,
    pub status_class: &'static str,
    pub added_display: String,
}

impl From<&CityListing> for ListingView {
    fn from(listing: &CityListing) -> Self {
        ListingView {
            id: listing.id.clone(),
            label: listing.label(),
            status_label: listing.status.label(),
            status_class: status_badge_class(listing.status),
            added_display: format_added_date(listing.added_date),
        }
    }
}
