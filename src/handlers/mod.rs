pub mod api;
pub mod business;
pub mod dashboard;
pub mod helpers;
pub mod listings;
pub mod modal;
pub mod session;
