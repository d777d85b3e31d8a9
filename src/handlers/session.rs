use axum::{
    extract::State,
    response::{IntoResponse, Redirect},
};
use axum_extra::extract::cookie::{Cookie, CookieJar};

use crate::config::SESSION_COOKIE;
use crate::models::AppState;
use crate::services::discard_session;

use super::helpers::session_id_from_jar;

/// POST /session/reset: throw the session away; the next page load seeds
/// a fresh one.
pub async fn session_reset(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    if let Some(sid) = session_id_from_jar(&jar) {
        if discard_session(&state, &sid) {
            tracing::info!(live_sessions = state.session_count(), "Session discarded");
        }
    }
    let mut removal = Cookie::from(SESSION_COOKIE);
    removal.set_path("/");
    let cleared = jar.remove(removal);
    (cleared, Redirect::to("/")).into_response()
}
