use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde_json::Value;

use crate::config::SESSION_COOKIE;
use crate::models::{AppState, Intent};
use crate::services::{ensure_session, with_session, Applied, Session};
use crate::templates::BaseTemplate;

pub fn session_id_from_jar(jar: &CookieJar) -> Option<String> {
    jar.get(SESSION_COOKIE).map(|c| c.value().to_string())
}

/// Resolves the caller's session, starting a new one if the cookie is
/// missing or stale. The returned jar carries the new cookie when one was
/// issued and must be part of the response. Only mutating handlers call
/// this; reads go through [`read_session`].
pub fn resolve_session(state: &AppState, jar: CookieJar) -> (CookieJar, String) {
    let existing = session_id_from_jar(&jar);
    let (sid, created) = ensure_session(state, existing.as_deref());
    if !created {
        return (jar, sid);
    }
    (jar.add(session_cookie(sid.clone())), sid)
}

/// Runs `f` against the caller's live session, or against a throwaway
/// seeded one when there is none. Never registers a session.
pub fn read_session<R>(state: &AppState, jar: &CookieJar, f: impl Fn(&Session) -> R) -> (Option<String>, R) {
    if let Some(sid) = session_id_from_jar(jar) {
        if let Some(out) = with_session(state, &sid, |s| f(&*s)) {
            return (Some(sid), out);
        }
    }
    (None, f(&Session::new(&state.seed)))
}

pub fn session_cookie(sid: String) -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE, sid);
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie
}

pub fn push_flash(state: &AppState, sid: &str, message: String) {
    state.lock_flashes().entry(sid.to_string()).or_default().push(message);
}

pub fn take_flash_messages(state: &AppState, sid: &str) -> Vec<String> {
    state.lock_flashes().remove(sid).unwrap_or_default()
}

#[derive(Default)]
pub struct TemplateGlobals {
    pub base_url: String,
    pub flash_messages: Vec<String>,
    pub has_flash_messages: bool,
}

/// Globals for a page render. Visitors without a session have no flashes.
pub fn build_template_globals(state: &AppState, sid: Option<&str>) -> TemplateGlobals {
    let flash_messages = sid.map(|sid| take_flash_messages(state, sid)).unwrap_or_default();
    let has_flash_messages = !flash_messages.is_empty();
    TemplateGlobals {
        base_url: state.public_base_url.clone(),
        flash_messages,
        has_flash_messages,
    }
}

pub fn inject_context(html: String, context: Value) -> Response {
    // Exposes page state to scripts that want to enhance the page.
    let context_str = serde_json::to_string(&context).unwrap_or_else(|_| "{}".into());
    let inject = format!(
        r#"<script>window.__APP_CONTEXT__ = {};</script></body>"#,
        context_str
    );
    Html(html.replace("</body>", &inject)).into_response()
}

pub fn render_template<T: askama::Template + BaseTemplate>(t: T, context: Value) -> Response {
    let flashes = t.flash_messages().len();
    match t.render() {
        Ok(body) => {
            tracing::debug!(flashes, base_url = t.base_url(), "Rendered page");
            inject_context(body, context)
        }
        Err(e) => {
            tracing::error!(%e, "Template render error");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

/// Flash text for intents worth announcing.
pub fn flash_for(applied: &Applied) -> Option<String> {
    match applied {
        Applied::Added(listing) => Some(format!("Added {}", listing.label())),
        Applied::Removed(listing) => Some(format!("Removed {}", listing.label())),
        _ => None,
    }
}

/// Applies `intent` to the caller's session and redirects back to the
/// dashboard. Rejected intents are dropped without a user-facing error.
pub fn apply_and_redirect(state: &AppState, jar: CookieJar, intent: Intent) -> Response {
    let (jar, sid) = resolve_session(state, jar);
    let outcome = with_session(state, &sid, |session| session.apply(intent));
    match outcome {
        Some(Ok(applied)) => {
            match &applied {
                Applied::Added(l) => tracing::info!(id = %l.id, city = %l.city, state = %l.state, "Listing added"),
                Applied::Removed(l) => tracing::info!(id = %l.id, city = %l.city, state = %l.state, "Listing removed"),
                _ => {}
            }
            if let Some(msg) = flash_for(&applied) {
                push_flash(state, &sid, msg);
            }
        }
        Some(Err(e)) => tracing::debug!(%e, "Ignoring rejected intent"),
        None => tracing::debug!("Session vanished before intent could be applied"),
    }
    (jar, Redirect::to("/")).into_response()
}
