use axum::{extract::State, response::IntoResponse};
use axum_extra::extract::cookie::CookieJar;

use crate::models::{AppState, Business, CandidateView, ListingView, StatCard, StatusSummary};
use crate::services::{EmptyCandidates, Session};
use crate::templates::DashboardTemplate;

use super::helpers::{build_template_globals, read_session, render_template, TemplateGlobals};

/// Owned copy of what the dashboard shows, taken under the session lock.
pub struct DashboardView {
    pub business: Business,
    pub editing_business: bool,
    pub summary: StatusSummary,
    pub listings: Vec<ListingView>,
    pub modal_open: bool,
    pub search_query: String,
    pub candidates: Vec<CandidateView>,
    pub empty: Option<EmptyCandidates>,
    pub selected_label: Option<String>,
}

impl DashboardView {
    pub fn from_session(session: &Session) -> Self {
        let modal = session.modal();
        let selected = modal.selected();
        let (candidates, empty) = if modal.is_open() {
            let result = session.candidates();
            let views = result
                .entries
                .iter()
                .map(|c| CandidateView {
                    city: c.city.clone(),
                    state: c.state.clone(),
                    is_selected: selected == Some(c),
                })
                .collect();
            (views, result.empty)
        } else {
            (Vec::new(), None)
        };
        DashboardView {
            business: session.business().clone(),
            editing_business: session.is_editing_business(),
            summary: session.summary(),
            listings: session.listings().iter().map(ListingView::from).collect(),
            modal_open: modal.is_open(),
            search_query: modal.query().to_string(),
            candidates,
            empty,
            selected_label: selected.map(|c| c.label()),
        }
    }

    /// Text of the confirm button in the add-city dialog.
    pub fn confirm_label(&self) -> String {
        match &self.selected_label {
            Some(label) => format!("Add {}", label),
            None => "Add Selected City".to_string(),
        }
    }
}

/// GET /. Renders the whole widget: business card, summary, listings and, when
/// open, the add-city dialog.
pub async fn dashboard_get(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let (sid, view) = read_session(&state, &jar, DashboardView::from_session);
    let TemplateGlobals { base_url, flash_messages, has_flash_messages } =
        build_template_globals(&state, sid.as_deref());
    let context = serde_json::json!({
        "baseUrl": base_url,
        "summary": view.summary,
        "modalOpen": view.modal_open,
    });
    let confirm_label = view.confirm_label();
    render_template(
        DashboardTemplate {
            base_url,
            flash_messages,
            has_flash_messages,
            business: &view.business,
            editing_business: view.editing_business,
            stats: StatCard::from_summary(&view.summary),
            listing_count: view.listings.len(),
            listings: view.listings,
            modal_open: view.modal_open,
            search_query: view.search_query,
            candidates: view.candidates,
            empty_message: view.empty.map(|e| e.message()),
            confirm_label,
            can_confirm: view.selected_label.is_some(),
        },
        context,
    )
}
