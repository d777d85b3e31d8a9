use serde::Deserialize;

/// A discrete user action against a session.
///
/// HTML form handlers and the JSON intent endpoint both funnel into
/// [`crate::services::Session::apply`] through this type.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Intent {
    OpenModal,
    CloseModal,
    Search { query: String },
    Select { city: String, state: String },
    AddCity,
    RemoveCity { id: String },
    ToggleEdit,
    /// `field` is the raw field name; unknown names are rejected by the session.
    UpdateField { field: String, value: String },
}
