use chrono::NaiveDate;

/// "Jan 15, 2024"
pub fn format_added_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}
