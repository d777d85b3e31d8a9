use axum::{
    extract::{Form, State},
    response::{IntoResponse, Redirect},
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::models::{AppState, BusinessField, Intent};
use crate::services::with_session;

use super::helpers::{apply_and_redirect, resolve_session};

/// Submitted edit form. Absent fields are left as they are.
#[derive(Debug, Default, Deserialize)]
pub struct BusinessForm {
    pub name: Option<String>,
    pub category: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
}

impl BusinessForm {
    fn into_updates(self) -> Vec<(BusinessField, String)> {
        [
            (BusinessField::Name, self.name),
            (BusinessField::Category, self.category),
            (BusinessField::Phone, self.phone),
            (BusinessField::Website, self.website),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
        .collect()
    }
}

/// Writes whatever the edit form carried along with another action, so
/// leaving the page mid-edit keeps the typed values. Returns the jar to
/// hand on to the action.
pub fn keep_pending_edits(state: &AppState, jar: CookieJar, edits: BusinessForm) -> CookieJar {
    let updates = edits.into_updates();
    if updates.is_empty() {
        return jar;
    }
    let (jar, sid) = resolve_session(state, jar);
    with_session(state, &sid, |session| {
        for (field, value) in updates {
            session.update_field(field, value);
        }
    });
    jar
}

#[derive(Deserialize)]
pub struct FieldForm {
    pub field: String,
    #[serde(default)]
    pub value: String,
}

/// POST /business/edit: flip between display and edit mode.
pub async fn business_toggle_edit(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    apply_and_redirect(&state, jar, Intent::ToggleEdit)
}

/// POST /business/save: write the submitted fields, then leave edit mode.
/// Saving while not editing only writes the fields.
pub async fn business_save(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<BusinessForm>,
) -> impl IntoResponse {
    let jar = keep_pending_edits(&state, jar, form);
    let (jar, sid) = resolve_session(&state, jar);
    with_session(&state, &sid, |session| {
        if session.is_editing_business() {
            session.toggle_edit();
        }
    });
    (jar, Redirect::to("/")).into_response()
}

/// POST /business/field: update a single field by name.
pub async fn business_field(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<FieldForm>,
) -> impl IntoResponse {
    apply_and_redirect(
        &state,
        jar,
        Intent::UpdateField {
            field: form.field,
            value: form.value,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_submitted_fields_become_updates() {
        let form = BusinessForm {
            name: None,
            category: None,
            phone: Some("(555) 999-0000".into()),
            website: Some(String::new()),
        };
        assert_eq!(
            form.into_updates(),
            vec![
                (BusinessField::Phone, "(555) 999-0000".to_string()),
                (BusinessField::Website, String::new()),
            ]
        );
    }
}
