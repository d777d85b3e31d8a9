use crate::models::ListingStatus;

/// CSS class of the status badge on a listing row.
pub fn status_badge_class(status: ListingStatus) -> &'static str {
    match status {
        ListingStatus::Active => "badge badge-active",
        ListingStatus::Review => "badge badge-review",
        ListingStatus::Pending => "badge badge-pending",
    }
}
