use crate::models::{ListingStatus, StatusSummary};

/// One of the three summary count cards.
pub struct StatCard {
    pub label: &'static str,
    pub value: usize,
    pub dot_class: &'static str,
}

impl StatCard {
    /// Cards in display order: Active, In Review, Pending.
    pub fn from_summary(summary: &StatusSummary) -> Vec<StatCard> {
        [
            (ListingStatus::Active, "Active", "dot-active"),
            (ListingStatus::Review, "In Review", "dot-review"),
            (ListingStatus::Pending, "Pending", "dot-pending"),
        ]
        .into_iter()
        .map(|(status, label, dot_class)| StatCard {
            label,
            value: summary.count(status),
            dot_class,
        })
        .collect()
    }
}
