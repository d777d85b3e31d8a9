//! Built-in catalog and sample session data.

use chrono::NaiveDate;

use crate::models::{Business, CatalogEntry, CityListing, Coordinates, ListingStatus};

/// The fixed set of cities the add-city dialog offers, in display order.
pub fn us_cities() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new("Miami", "FL", 25.7617, -80.1918),
        CatalogEntry::new("Seattle", "WA", 47.6062, -122.3321),
        CatalogEntry::new("Denver", "CO", 39.7392, -104.9903),
        CatalogEntry::new("Boston", "MA", 42.3601, -71.0589),
        CatalogEntry::new("Phoenix", "AZ", 33.4484, -112.074),
        CatalogEntry::new("San Francisco", "CA", 37.7749, -122.4194),
        CatalogEntry::new("Atlanta", "GA", 33.749, -84.388),
        CatalogEntry::new("Dallas", "TX", 32.7767, -96.797),
        CatalogEntry::new("Portland", "OR", 45.5152, -122.6784),
        CatalogEntry::new("Austin", "TX", 30.2672, -97.7431),
    ]
}

fn sample(id: &str, city: &str, state: &str, status: ListingStatus, (y, m, d): (i32, u32, u32), lat: f64, lng: f64) -> CityListing {
    CityListing {
        id: id.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        status,
        added_date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
        coordinates: Coordinates { lat, lng },
    }
}

/// Listings a fresh session starts with under the `sample` seed.
pub fn sample_listings() -> Vec<CityListing> {
    vec![
        sample("1", "New York", "NY", ListingStatus::Active, (2024, 1, 15), 40.7128, -74.006),
        sample("2", "Los Angeles", "CA", ListingStatus::Active, (2024, 1, 20), 34.0522, -118.2437),
        sample("3", "Chicago", "IL", ListingStatus::Review, (2024, 2, 1), 41.8781, -87.6298),
        sample("4", "Houston", "TX", ListingStatus::Pending, (2024, 2, 10), 29.7604, -95.3698),
    ]
}

pub fn sample_business() -> Business {
    Business {
        name: "Artisan Coffee Co.".into(),
        category: "Coffee Shop".into(),
        phone: "(555) 123-4567".into(),
        website: "artisancoffee.com".into(),
    }
}
