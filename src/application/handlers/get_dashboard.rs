//! GetDashboardHandler - Builds the summary counters for one user.

use std::sync::Arc;

use crate::domain::dashboard::DashboardSummary;
use crate::ports::{GatewayError, ProjectReader, QuoteGateway};

/// Handler producing the dashboard summary.
///
/// Fetches fresh snapshots of both collections and aggregates them in
/// one place; every summary card reads from the result instead of
/// counting on its own.
pub struct GetDashboardHandler {
    quotes: Arc<dyn QuoteGateway>,
    projects: Arc<dyn ProjectReader>,
}

impl GetDashboardHandler {
    pub fn new(quotes: Arc<dyn QuoteGateway>, projects: Arc<dyn ProjectReader>) -> Self {
        Self { quotes, projects }
    }

    pub async fn handle(&self) -> Result<DashboardSummary, GatewayError> {
        let quotes = self.quotes.list_quotes().await?;
        let projects = self.projects.list_projects().await?;
        Ok(DashboardSummary::from_collections(&quotes, &projects))
    }
}
