//! MultiList: manage the cities a business lists itself in.
//!
//! All state is in memory. Each browser session owns a [`services::Session`]
//! holding its listings, business profile and add-city dialog; the axum
//! handlers render it with askama templates.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod seed;
pub mod services;
pub mod templates;
pub mod utils;
