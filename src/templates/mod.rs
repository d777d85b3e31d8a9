// Base template trait for the shared layout
pub mod base_template;
pub use base_template::BaseTemplate;

pub mod dashboard_template;
pub use dashboard_template::DashboardTemplate;
