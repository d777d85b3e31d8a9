// Display formatting
pub mod date_formatter;
pub mod status_formatter;

pub use date_formatter::format_added_date;
pub use status_formatter::status_badge_class;
