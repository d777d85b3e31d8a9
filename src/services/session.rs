use std::sync::Arc;

use serde::Serialize;

use crate::error::SessionError;
use crate::models::{
    AddCityModal, Business, BusinessField, CatalogEntry, CityListing, Intent, StatusSummary,
};
use crate::services::catalog_filter::{filter_catalog, Candidates};
use crate::services::listing_store::ListingStore;

/// Initial state a new session is seeded from.
#[derive(Debug, Clone)]
pub struct SessionSeed {
    pub catalog: Arc<[CatalogEntry]>,
    pub listings: Vec<CityListing>,
    pub business: Business,
}

/// What a successfully applied intent changed, for flash messages and logs.
#[derive(Debug, Clone, PartialEq)]
pub enum Applied {
    Added(CityListing),
    Removed(CityListing),
    /// `remove-city` named an id that is not listed.
    NothingRemoved,
    EditToggled { editing: bool },
    Updated,
}

/// All mutable state of one running dashboard.
#[derive(Debug, Clone)]
pub struct Session {
    catalog: Arc<[CatalogEntry]>,
    listings: ListingStore,
    business: Business,
    editing_business: bool,
    modal: AddCityModal,
}

/// Serializable view of a session, served as JSON.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot<'a> {
    pub listings: &'a [CityListing],
    pub business: &'a Business,
    pub editing_business: bool,
    pub summary: StatusSummary,
    pub modal: &'a AddCityModal,
    pub candidates: Option<Candidates>,
}

impl Session {
    pub fn new(seed: &SessionSeed) -> Self {
        Session {
            catalog: Arc::clone(&seed.catalog),
            listings: ListingStore::new(seed.listings.clone()),
            business: seed.business.clone(),
            editing_business: false,
            modal: AddCityModal::Closed,
        }
    }

    pub fn listings(&self) -> &[CityListing] {
        self.listings.as_slice()
    }

    pub fn business(&self) -> &Business {
        &self.business
    }

    pub fn is_editing_business(&self) -> bool {
        self.editing_business
    }

    pub fn modal(&self) -> &AddCityModal {
        &self.modal
    }

    pub fn summary(&self) -> StatusSummary {
        StatusSummary::from_listings(self.listings.as_slice())
    }

    /// Catalog entries the dialog offers right now. Recomputed on every call.
    pub fn candidates(&self) -> Candidates {
        filter_catalog(&self.catalog, self.listings.as_slice(), self.modal.query())
    }

    pub fn snapshot(&self) -> SessionSnapshot<'_> {
        SessionSnapshot {
            listings: self.listings.as_slice(),
            business: &self.business,
            editing_business: self.editing_business,
            summary: self.summary(),
            modal: &self.modal,
            candidates: self.modal.is_open().then(|| self.candidates()),
        }
    }

    // ── Add-city dialog ─────────────────────────────────────────────────────

    /// Opens the dialog with empty search text and no selection, whatever
    /// state it was in.
    pub fn open_modal(&mut self) {
        self.modal = AddCityModal::opened();
    }

    /// Cancel: closes without touching listings.
    pub fn close_modal(&mut self) {
        self.modal = AddCityModal::Closed;
    }

    pub fn set_query(&mut self, text: String) -> Result<(), SessionError> {
        match &mut self.modal {
            AddCityModal::Open { query, .. } => {
                *query = text;
                Ok(())
            }
            AddCityModal::Closed => Err(SessionError::ModalClosed),
        }
    }

    /// Selects a catalog entry. Selection replaces any previous one and
    /// selecting the current entry again keeps it selected.
    pub fn select(&mut self, city: &str, state: &str) -> Result<&CatalogEntry, SessionError> {
        if !self.modal.is_open() {
            return Err(SessionError::ModalClosed);
        }
        let entry = self
            .catalog
            .iter()
            .find(|c| c.is_same_place(city, state))
            .cloned()
            .ok_or_else(|| SessionError::NotInCatalog {
                city: city.to_string(),
                state: state.to_string(),
            })?;
        if self.listings.contains_place(&entry) {
            return Err(SessionError::AlreadyListed {
                city: entry.city,
                state: entry.state,
            });
        }
        match &mut self.modal {
            AddCityModal::Open { selected, .. } => Ok(&*selected.insert(entry)),
            AddCityModal::Closed => Err(SessionError::ModalClosed),
        }
    }

    /// Adds the selected entry as a pending listing and closes the dialog.
    pub fn confirm_add(&mut self) -> Result<CityListing, SessionError> {
        let entry = self.modal.selected().cloned().ok_or(SessionError::NothingSelected)?;
        let added = self.listings.add(&entry).clone();
        self.modal = AddCityModal::Closed;
        Ok(added)
    }

    pub fn remove_listing(&mut self, id: &str) -> Option<CityListing> {
        self.listings.remove(id)
    }

    // ── Business card ───────────────────────────────────────────────────────

    /// Flips between display and edit mode. Returns the new mode.
    pub fn toggle_edit(&mut self) -> bool {
        self.editing_business = !self.editing_business;
        self.editing_business
    }

    pub fn update_field(&mut self, field: BusinessField, value: String) {
        self.business.set(field, value);
    }

    pub fn update_field_named(&mut self, name: &str, value: String) -> Result<(), SessionError> {
        let field = BusinessField::from_str(name).ok_or_else(|| SessionError::UnknownField(name.to_string()))?;
        self.update_field(field, value);
        Ok(())
    }

    /// Applies one intent. On `Err` nothing changed.
    pub fn apply(&mut self, intent: Intent) -> Result<Applied, SessionError> {
        match intent {
            Intent::OpenModal => {
                self.open_modal();
                Ok(Applied::Updated)
            }
            Intent::CloseModal => {
                self.close_modal();
                Ok(Applied::Updated)
            }
            Intent::Search { query } => self.set_query(query).map(|_| Applied::Updated),
            Intent::Select { city, state } => self.select(&city, &state).map(|_| Applied::Updated),
            Intent::AddCity => self.confirm_add().map(Applied::Added),
            Intent::RemoveCity { id } => Ok(self
                .remove_listing(&id)
                .map(Applied::Removed)
                .unwrap_or(Applied::NothingRemoved)),
            Intent::ToggleEdit => Ok(Applied::EditToggled {
                editing: self.toggle_edit(),
            }),
            Intent::UpdateField { field, value } => self.update_field_named(&field, value).map(|_| Applied::Updated),
        }
    }
}
