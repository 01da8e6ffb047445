//! Project entity.
//!
//! Created externally when a quote is converted; status changes are
//! admin-driven and arrive through the backend. This core derives
//! progress and dates from what it reads, it never sets them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Currency, Money, Percentage, ProjectId, UserId};
use crate::domain::lifecycle::{progress_percentage, ProjectStatus, ReportedStatus};

/// A project as the backend stores it.
///
/// Field names round-trip the persisted wire format unchanged (`status`
/// carries one of the ten lifecycle values, `progress` an integer
/// 0-100). `stored_progress` is only authoritative while the project
/// sits in a side state or an unrecognized status; otherwise progress is
/// derived from the lifecycle position via [`Project::progress`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub user_id: UserId,
    pub name: String,
    pub status: ReportedStatus,
    #[serde(rename = "progress")]
    pub stored_progress: Percentage,
    pub budget: f64,
    pub currency: Currency,
    pub start_date: Option<NaiveDate>,
    pub estimated_end_date: Option<NaiveDate>,
    pub actual_end_date: Option<NaiveDate>,
}

impl Project {
    /// The completion percentage shown everywhere in the portal.
    pub fn progress(&self) -> Percentage {
        progress_percentage(&self.status, self.stored_progress)
    }

    /// The budget as a displayable amount.
    pub fn budget_money(&self) -> Money {
        Money::new(self.budget, self.currency)
    }

    /// Returns true while the project counts toward active work.
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Returns true once the project reached COMPLETED.
    pub fn is_completed(&self) -> bool {
        self.status.known() == Some(ProjectStatus::Completed)
    }

    /// Actual duration in days, available only for completed projects
    /// with both dates on record. Projects missing either date yield
    /// None and are excluded from averages, not counted as zero.
    pub fn completed_duration_days(&self) -> Option<i64> {
        if !self.is_completed() {
            return None;
        }
        let start = self.start_date?;
        let end = self.actual_end_date?;
        Some((end - start).num_days())
    }
}
