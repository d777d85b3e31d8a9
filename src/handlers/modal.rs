use axum::{
    extract::{Form, State},
    response::IntoResponse,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::models::{AppState, Intent};

use super::business::{keep_pending_edits, BusinessForm};
use super::helpers::apply_and_redirect;

#[derive(Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub q: String,
}

#[derive(Deserialize)]
pub struct SelectForm {
    pub city: String,
    pub state: String,
}

/// POST /modal/open. While the business editor is open the button submits
/// the edit form, so its fields arrive here too.
pub async fn modal_open(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(edits): Form<BusinessForm>,
) -> impl IntoResponse {
    let jar = keep_pending_edits(&state, jar, edits);
    apply_and_redirect(&state, jar, Intent::OpenModal)
}

/// POST /modal/close: backdrop or close control.
pub async fn modal_close(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    apply_and_redirect(&state, jar, Intent::CloseModal)
}

/// POST /modal/search
pub async fn modal_search(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<SearchForm>,
) -> impl IntoResponse {
    apply_and_redirect(&state, jar, Intent::Search { query: form.q })
}

/// POST /modal/select
pub async fn modal_select(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<SelectForm>,
) -> impl IntoResponse {
    apply_and_redirect(
        &state,
        jar,
        Intent::Select {
            city: form.city,
            state: form.state,
        },
    )
}

/// POST /modal/confirm
pub async fn modal_confirm(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    apply_and_redirect(&state, jar, Intent::AddCity)
}
