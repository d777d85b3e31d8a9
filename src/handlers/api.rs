use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::extract::cookie::CookieJar;
use serde_json::{json, Value};

use crate::models::{AppState, Intent};
use crate::services::{with_session, Session};

use super::helpers::{read_session, resolve_session};

fn to_json(session: &Session) -> Value {
    serde_json::to_value(session.snapshot()).unwrap_or(Value::Null)
}

fn snapshot_json(state: &AppState, sid: &str) -> Value {
    with_session(state, sid, |s| to_json(s)).unwrap_or(Value::Null)
}

/// GET /api/state: JSON view of the caller's session, or of a freshly
/// seeded one for callers without a session.
pub async fn api_state_get(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let (_, body) = read_session(&state, &jar, to_json);
    Json(body)
}

/// POST /api/intents: apply one tagged intent and return the new state.
/// Rejected intents answer 422 and leave the session unchanged.
pub async fn api_intent_post(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(intent): Json<Intent>,
) -> Response {
    let (jar, sid) = resolve_session(&state, jar);
    tracing::debug!(?intent, "API intent");
    let outcome = with_session(&state, &sid, |s| s.apply(intent));
    match outcome {
        Some(Ok(applied)) => {
            tracing::debug!(?applied, "API intent applied");
            (jar, Json(snapshot_json(&state, &sid))).into_response()
        }
        Some(Err(e)) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            jar,
            Json(json!({ "error": e.to_string() })),
        )
            .into_response(),
        None => (
            StatusCode::CONFLICT,
            jar,
            Json(json!({ "error": "session no longer exists" })),
        )
            .into_response(),
    }
}
