use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::http::HeaderValue;
use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::models::AppState;

// Embed the default stylesheet in the binary
pub const DEFAULT_STYLESHEET: &str = include_str!("../static/styles.css");

pub fn build_router(state: AppState) -> Router {
    // Always serve styles.css - use custom if provided, otherwise use embedded default
    let stylesheet_content = state
        .custom_css
        .clone()
        .unwrap_or_else(|| DEFAULT_STYLESHEET.to_string());

    let assets = Router::new()
        .route(
            "/static/styles.css",
            get(move || {
                let css = stylesheet_content.clone();
                async move { ([(CONTENT_TYPE, "text/css")], css) }
            }),
        )
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("public, max-age=3600"),
        ));

    Router::new()
        .route("/", get(handlers::dashboard::dashboard_get))
        .route("/modal/open", post(handlers::modal::modal_open))
        .route("/modal/close", post(handlers::modal::modal_close))
        .route("/modal/search", post(handlers::modal::modal_search))
        .route("/modal/select", post(handlers::modal::modal_select))
        .route("/modal/confirm", post(handlers::modal::modal_confirm))
        .route("/listings/:id/remove", post(handlers::listings::listing_remove))
        .route("/business/edit", post(handlers::business::business_toggle_edit))
        .route("/business/save", post(handlers::business::business_save))
        .route("/business/field", post(handlers::business::business_field))
        .route("/session/reset", post(handlers::session::session_reset))
        .route("/api/state", get(handlers::api::api_state_get))
        .route("/api/intents", post(handlers::api::api_intent_post))
        .merge(assets)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                // Pages reflect live session state.
                .layer(SetResponseHeaderLayer::if_not_present(
                    CACHE_CONTROL,
                    HeaderValue::from_static("no-store"),
                )),
        )
        .with_state(state)
}
