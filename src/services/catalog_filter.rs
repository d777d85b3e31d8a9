use serde::Serialize;

use crate::models::{CatalogEntry, CityListing};

/// Why a candidate list came back empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyCandidates {
    /// A search is active and nothing matched it.
    NoMatches,
    /// No search, and every catalog city is already listed.
    AllAdded,
}

impl EmptyCandidates {
    pub fn message(&self) -> &'static str {
        match self {
            EmptyCandidates::NoMatches => "No matching cities found",
            EmptyCandidates::AllAdded => "All available cities have been added",
        }
    }
}

/// Result of filtering the catalog for the add-city dialog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidates {
    pub entries: Vec<CatalogEntry>,
    pub empty: Option<EmptyCandidates>,
}

/// Catalog entries that are not yet listed and whose city or state contains
/// `query`, ignoring case. Catalog order is preserved.
///
/// Always derived from the listings passed in; callers must not cache the
/// result across listing changes.
pub fn filter_catalog(catalog: &[CatalogEntry], listings: &[CityListing], query: &str) -> Candidates {
    let needle = query.to_lowercase();
    let entries: Vec<CatalogEntry> = catalog
        .iter()
        .filter(|c| !listings.iter().any(|l| l.is_for(c)))
        .filter(|c| c.city.to_lowercase().contains(&needle) || c.state.to_lowercase().contains(&needle))
        .cloned()
        .collect();
    let empty = if !entries.is_empty() {
        None
    } else if query.is_empty() {
        Some(EmptyCandidates::AllAdded)
    } else {
        Some(EmptyCandidates::NoMatches)
    };
    Candidates { entries, empty }
}
