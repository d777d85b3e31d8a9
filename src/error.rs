//! Error types for session intents
use thiserror::Error;

/// Reasons an intent is rejected. A rejected intent leaves the session
/// exactly as it was; the HTML surface treats every variant as a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Modal intents arrived while the add-city dialog is closed
    #[error("the add-city dialog is not open")]
    ModalClosed,

    /// Confirm arrived with no catalog entry selected
    #[error("no city is selected")]
    NothingSelected,

    /// Selection named a place the catalog does not offer
    #[error("{city}, {state} is not in the catalog")]
    NotInCatalog { city: String, state: String },

    /// Selection named a place that is already listed
    #[error("{city}, {state} is already listed")]
    AlreadyListed { city: String, state: String },

    /// Field update named something other than name/category/phone/website
    #[error("unknown business field: {0}")]
    UnknownField(String),
}
