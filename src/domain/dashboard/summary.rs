//! The dashboard summary - aggregated counters for one user.
//!
//! Every presentation surface (summary cards, project list header,
//! timeline sidebar) reads from this one aggregation; none recomputes
//! counts on its own.

use serde::Serialize;

use crate::domain::project::Project;
use crate::domain::quote::Quote;
use crate::domain::timeline::average_project_duration;

/// Aggregated counters over a user's quotes and projects.
///
/// Re-derivable at any time from the raw collections; nothing here is
/// persisted independently.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_quotes: usize,
    pub approved_quotes: usize,
    pub pending_quotes: usize,
    pub total_projects: usize,
    pub completed_projects: usize,
    pub active_projects: usize,
    /// Sum of project budgets, amount only; the portal displays each
    /// user's figures in their own billing currency.
    pub total_budget: f64,
    /// Mean actual duration in days over completed projects, None when
    /// no project qualifies.
    pub average_project_duration_days: Option<f64>,
}

impl DashboardSummary {
    /// Aggregates the collections without mutating them.
    ///
    /// Empty slices are fine and produce a zeroed summary; callers with
    /// no data at all pass empty slices rather than skipping the call.
    pub fn from_collections(quotes: &[Quote], projects: &[Project]) -> Self {
        Self {
            total_quotes: quotes.len(),
            approved_quotes: quotes.iter().filter(|q| q.status.is_approved()).count(),
            pending_quotes: quotes.iter().filter(|q| q.status.is_pending()).count(),
            total_projects: projects.len(),
            completed_projects: projects.iter().filter(|p| p.is_completed()).count(),
            active_projects: projects.iter().filter(|p| p.is_active()).count(),
            total_budget: projects.iter().map(|p| p.budget).sum(),
            average_project_duration_days: average_project_duration(projects),
        }
    }
}
