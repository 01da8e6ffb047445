//! The timeline estimator.
//!
//! Plain calendar-day arithmetic over the stage table: no business-day
//! logic, no weekend skipping, no timezone normalization.

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::domain::foundation::{Percentage, ProjectId};
use crate::domain::lifecycle::{
    classify, ProjectStatus, ReportedStatus, StageState, StageTable,
};
use crate::domain::project::Project;

/// Projects the date a stage is expected to be reached.
///
/// Accumulates the nominal duration of every stage from ordinal 0
/// through `ordinal` inclusive and adds it to `start`. Returns None for
/// an ordinal outside the table (or a date overflow); callers with no
/// start date on record must not call this with a fabricated one.
pub fn estimated_date_for_stage(start: NaiveDate, ordinal: u8) -> Option<NaiveDate> {
    StageTable::stage_at(ordinal)?;
    let days: u32 = StageTable::all()
        .iter()
        .filter(|stage| stage.ordinal <= ordinal)
        .map(|stage| stage.estimated_days)
        .sum();
    start.checked_add_days(Days::new(days as u64))
}

/// One row of the timeline widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleStep {
    pub ordinal: u8,
    pub status: ProjectStatus,
    pub label: &'static str,
    pub estimated_days: u32,
    pub state: StageState,
    pub projected_date: Option<NaiveDate>,
}

/// The full timeline view for one project.
///
/// Derived in one place and shared by every consumer (summary card,
/// detail view, timeline widget) so their dates can never disagree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSchedule {
    pub project_id: ProjectId,
    pub status: ReportedStatus,
    pub progress: Percentage,
    /// False when the project has no start date; every projected date
    /// is then None rather than defaulted to today.
    pub projection_available: bool,
    pub steps: Vec<ScheduleStep>,
}

impl ProjectSchedule {
    /// Builds the schedule for a project.
    pub fn for_project(project: &Project) -> Self {
        let steps = StageTable::all()
            .iter()
            .map(|stage| ScheduleStep {
                ordinal: stage.ordinal,
                status: stage.status,
                label: stage.label,
                estimated_days: stage.estimated_days,
                state: classify(stage, &project.status),
                projected_date: project
                    .start_date
                    .and_then(|start| estimated_date_for_stage(start, stage.ordinal)),
            })
            .collect();

        Self {
            project_id: project.id,
            status: project.status.clone(),
            progress: project.progress(),
            projection_available: project.start_date.is_some(),
            steps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Currency, Percentage, UserId};

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn project(status: ReportedStatus, start_date: Option<NaiveDate>) -> Project {
        Project {
            id: ProjectId::new(),
            user_id: UserId::new("user-1").unwrap(),
            name: "Storefront build".to_string(),
            status,
            stored_progress: Percentage::new(30),
            budget: 65_000.0,
            currency: Currency::Mxn,
            start_date,
            estimated_end_date: None,
            actual_end_date: None,
        }
    }

    #[test]
    fn development_lands_nineteen_days_in() {
        // cumulative 0 + 1 + 3 + 15 through ordinal 3
        let date = estimated_date_for_stage(start(), 3).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 20).unwrap());
    }

    #[test]
    fn first_stage_projects_the_start_date_itself() {
        assert_eq!(estimated_date_for_stage(start(), 0), Some(start()));
    }

    #[test]
    fn projected_dates_never_precede_the_start_date() {
        for stage in StageTable::all() {
            let date = estimated_date_for_stage(start(), stage.ordinal).unwrap();
            assert!(date >= start());
        }
    }

    #[test]
    fn projected_dates_are_monotonically_non_decreasing() {
        let mut last = start();
        for stage in StageTable::all() {
            let date = estimated_date_for_stage(start(), stage.ordinal).unwrap();
            assert!(date >= last);
            last = date;
        }
    }

    #[test]
    fn out_of_range_ordinal_yields_none() {
        assert_eq!(estimated_date_for_stage(start(), 8), None);
    }

    #[test]
    fn completed_projects_twenty_nine_days_in() {
        // full table: 0+1+3+15+5+3+2+0 = 29
        let date = estimated_date_for_stage(start(), 7).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 30).unwrap());
    }

    #[test]
    fn schedule_joins_classification_and_dates() {
        let schedule =
            ProjectSchedule::for_project(&project(ProjectStatus::Testing.into(), Some(start())));
        assert!(schedule.projection_available);
        assert_eq!(schedule.steps.len(), 8);
        assert_eq!(schedule.steps[4].state, StageState::Current);
        assert_eq!(schedule.steps[0].state, StageState::Completed);
        assert_eq!(schedule.steps[7].state, StageState::Pending);
        assert_eq!(
            schedule.steps[3].projected_date,
            Some(NaiveDate::from_ymd_opt(2024, 1, 20).unwrap())
        );
        assert_eq!(schedule.progress.value(), 63);
    }

    #[test]
    fn schedule_without_start_date_has_no_projections() {
        let schedule =
            ProjectSchedule::for_project(&project(ProjectStatus::Planning.into(), None));
        assert!(!schedule.projection_available);
        assert!(schedule.steps.iter().all(|s| s.projected_date.is_none()));
        // classification still works without dates
        assert_eq!(schedule.steps[2].state, StageState::Current);
    }

    #[test]
    fn schedule_for_on_hold_project_highlights_nothing() {
        let schedule =
            ProjectSchedule::for_project(&project(ProjectStatus::OnHold.into(), Some(start())));
        assert!(schedule
            .steps
            .iter()
            .all(|s| s.state == StageState::Pending));
        // stored progress passes through
        assert_eq!(schedule.progress.value(), 30);
    }
}
