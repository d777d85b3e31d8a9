use serde::{Deserialize, Serialize};

/// Latitude/longitude pair copied verbatim from the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A city the add-city dialog can offer. Catalog entries are read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub city: String,
    pub state: String,
    pub coordinates: Coordinates,
}

impl CatalogEntry {
    pub fn new(city: &str, state: &str, lat: f64, lng: f64) -> Self {
        CatalogEntry {
            city: city.to_string(),
            state: state.to_string(),
            coordinates: Coordinates { lat, lng },
        }
    }

    /// Exact, case-sensitive comparison on the stored names.
    pub fn is_same_place(&self, city: &str, state: &str) -> bool {
        self.city == city && self.state == state
    }

    /// "Miami, FL"
    pub fn label(&self) -> String {
        format!("{}, {}", self.city, self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_joins_city_and_state() {
        let entry = CatalogEntry::new("San Francisco", "CA", 37.7749, -122.4194);
        assert_eq!(entry.label(), "San Francisco, CA");
    }

    #[test]
    fn same_place_is_case_sensitive() {
        let entry = CatalogEntry::new("Miami", "FL", 25.7617, -80.1918);
        assert!(entry.is_same_place("Miami", "FL"));
        assert!(!entry.is_same_place("miami", "FL"));
        assert!(!entry.is_same_place("Miami", "fl"));
    }
}
