//! GetProjectScheduleHandler - Builds the timeline view for a project.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::foundation::ProjectId;
use crate::domain::timeline::ProjectSchedule;
use crate::ports::{GatewayError, ProjectReader};

/// Query identifying the project to schedule.
#[derive(Debug, Clone, Copy)]
pub struct GetProjectScheduleQuery {
    pub project_id: ProjectId,
}

/// Why the schedule could not be produced.
#[derive(Debug, Clone, Error)]
pub enum ScheduleError {
    #[error("Project not found: {0}")]
    NotFound(ProjectId),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Handler producing the per-stage timeline for one project.
pub struct GetProjectScheduleHandler {
    projects: Arc<dyn ProjectReader>,
}

impl GetProjectScheduleHandler {
    pub fn new(projects: Arc<dyn ProjectReader>) -> Self {
        Self { projects }
    }

    pub async fn handle(
        &self,
        query: GetProjectScheduleQuery,
    ) -> Result<ProjectSchedule, ScheduleError> {
        let projects = self.projects.list_projects().await?;
        let project = projects
            .iter()
            .find(|p| p.id == query.project_id)
            .ok_or(ScheduleError::NotFound(query.project_id))?;
        Ok(ProjectSchedule::for_project(project))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::NaiveDate;

    use crate::domain::foundation::{Currency, Percentage, UserId};
    use crate::domain::lifecycle::{ProjectStatus, StageState};
    use crate::domain::project::Project;

    struct MockProjectReader {
        projects: Vec<Project>,
    }

    #[async_trait]
    impl ProjectReader for MockProjectReader {
        async fn list_projects(&self) -> Result<Vec<Project>, GatewayError> {
            Ok(self.projects.clone())
        }
    }

    fn project(id: ProjectId, start: Option<NaiveDate>) -> Project {
        Project {
            id,
            user_id: UserId::new("user-1").unwrap(),
            name: "App build".to_string(),
            status: ProjectStatus::Development.into(),
            stored_progress: Percentage::ZERO,
            budget: 85_000.0,
            currency: Currency::Mxn,
            start_date: start,
            estimated_end_date: None,
            actual_end_date: None,
        }
    }

    #[tokio::test]
    async fn builds_the_schedule_for_the_requested_project() {
        let id = ProjectId::new();
        let start = NaiveDate::from_ymd_opt(2024, 1, 1);
        let reader = Arc::new(MockProjectReader {
            projects: vec![project(ProjectId::new(), None), project(id, start)],
        });
        let handler = GetProjectScheduleHandler::new(reader);

        let schedule = handler
            .handle(GetProjectScheduleQuery { project_id: id })
            .await
            .unwrap();
        assert_eq!(schedule.project_id, id);
        assert!(schedule.projection_available);
        assert_eq!(schedule.steps[3].state, StageState::Current);
        assert_eq!(
            schedule.steps[3].projected_date,
            NaiveDate::from_ymd_opt(2024, 1, 20)
        );
    }

    #[tokio::test]
    async fn missing_project_is_reported_not_defaulted() {
        let reader = Arc::new(MockProjectReader { projects: vec![] });
        let handler = GetProjectScheduleHandler::new(reader);

        let result = handler
            .handle(GetProjectScheduleQuery {
                project_id: ProjectId::new(),
            })
            .await;
        assert!(matches!(result, Err(ScheduleError::NotFound(_))));
    }

    #[tokio::test]
    async fn schedule_without_start_date_reports_projection_unavailable() {
        let id = ProjectId::new();
        let reader = Arc::new(MockProjectReader {
            projects: vec![project(id, None)],
        });
        let handler = GetProjectScheduleHandler::new(reader);

        let schedule = handler
            .handle(GetProjectScheduleQuery { project_id: id })
            .await
            .unwrap();
        assert!(!schedule.projection_available);
        assert!(schedule.steps.iter().all(|s| s.projected_date.is_none()));
    }
}
