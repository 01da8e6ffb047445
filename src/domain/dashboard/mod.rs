//! Dashboard module - The single aggregation point for summary cards.

mod summary;

pub use summary::DashboardSummary;
