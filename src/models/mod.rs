pub mod add_city_modal;
pub mod app_state;
pub mod business;
pub mod candidate_view;
pub mod catalog_entry;
pub mod city_listing;
pub mod intent;
pub mod listing_view;
pub mod stat_card;
pub mod status_summary;

pub use add_city_modal::AddCityModal;
pub use app_state::AppState;
pub use business::{Business, BusinessField};
pub use candidate_view::CandidateView;
pub use catalog_entry::{CatalogEntry, Coordinates};
pub use city_listing::{CityListing, ListingStatus};
pub use intent::Intent;
pub use listing_view::ListingView;
pub use stat_card::StatCard;
pub use status_summary::StatusSummary;
