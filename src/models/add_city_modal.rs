use serde::Serialize;

use crate::models::catalog_entry::CatalogEntry;

/// Transient state of the add-city dialog.
///
/// `Closed` carries nothing: closing always discards the search text and
/// the selection, so reopening starts clean.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AddCityModal {
    #[default]
    Closed,
    Open {
        query: String,
        selected: Option<CatalogEntry>,
    },
}

impl AddCityModal {
    pub fn opened() -> Self {
        AddCityModal::Open {
            query: String::new(),
            selected: None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, AddCityModal::Open { .. })
    }

    /// Current search text; empty while closed.
    pub fn query(&self) -> &str {
        match self {
            AddCityModal::Open { query, .. } => query,
            AddCityModal::Closed => "",
        }
    }

    pub fn selected(&self) -> Option<&CatalogEntry> {
        match self {
            AddCityModal::Open { selected, .. } => selected.as_ref(),
            AddCityModal::Closed => None,
        }
    }
}
