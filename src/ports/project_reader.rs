//! Read-only port for project queries.

use async_trait::async_trait;

use crate::domain::project::Project;

use super::GatewayError;

/// Read-only port for the projects endpoint.
#[async_trait]
pub trait ProjectReader: Send + Sync {
    /// Lists the user's projects (`GET /projects`).
    async fn list_projects(&self) -> Result<Vec<Project>, GatewayError>;
}
