//! Port for submitting and listing quotes.

use async_trait::async_trait;

use crate::domain::quote::{Quote, QuoteSubmission};

use super::GatewayError;

/// Write/read port for the quotes endpoints.
///
/// The backend scopes both calls to the authenticated user; this core
/// never sees anyone else's quotes.
#[async_trait]
pub trait QuoteGateway: Send + Sync {
    /// Submits a new quote request (`POST /quotes`).
    async fn submit_quote(&self, submission: &QuoteSubmission) -> Result<Quote, GatewayError>;

    /// Lists the user's quotes (`GET /quotes`).
    async fn list_quotes(&self) -> Result<Vec<Quote>, GatewayError>;
}
