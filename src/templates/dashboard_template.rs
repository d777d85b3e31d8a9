use askama::Template;

use crate::models::{Business, CandidateView, ListingView, StatCard};

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate<'a> {
    pub base_url: String,
    pub flash_messages: Vec<String>,
    pub has_flash_messages: bool,

    pub business: &'a Business,
    pub editing_business: bool,
    pub stats: Vec<StatCard>,
    pub listings: Vec<ListingView>,
    pub listing_count: usize,

    pub modal_open: bool,
    pub search_query: String,
    pub candidates: Vec<CandidateView>,
    pub empty_message: Option<&'static str>,
    pub confirm_label: String,
    pub can_confirm: bool,
}

crate::impl_base_template!(DashboardTemplate<'_>);
