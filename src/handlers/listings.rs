use axum::{
    extract::{Form, Path, State},
    response::IntoResponse,
};
use axum_extra::extract::cookie::CookieJar;

use crate::models::{AppState, Intent};

use super::business::{keep_pending_edits, BusinessForm};
use super::helpers::apply_and_redirect;

/// POST /listings/:id/remove: unknown ids are ignored. Carries pending
/// business edits like `/modal/open`.
pub async fn listing_remove(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<String>,
    Form(edits): Form<BusinessForm>,
) -> impl IntoResponse {
    let jar = keep_pending_edits(&state, jar, edits);
    apply_and_redirect(&state, jar, Intent::RemoveCity { id })
}
