//! SubmitQuoteHandler - Validates and submits a quote request.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::foundation::{Currency, ValidationError};
use crate::domain::pricing::QuoteSelection;
use crate::domain::quote::{ContactInfo, Quote, QuoteSubmission};
use crate::ports::{GatewayError, QuoteGateway};

/// Command carrying the form state to submit.
///
/// Borrowed from the caller's state: nothing here is consumed, so a
/// failed submission leaves the selection intact for a manual retry.
#[derive(Debug, Clone)]
pub struct SubmitQuoteCommand {
    pub selection: QuoteSelection,
    pub contact: ContactInfo,
    pub currency: Currency,
}

/// Why a submission did not go through.
#[derive(Debug, Clone, Error)]
pub enum SubmitQuoteError {
    /// Caught client-side; no network call was made.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The backend call failed; the user may retry as-is.
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Handler for quote submission.
pub struct SubmitQuoteHandler {
    gateway: Arc<dyn QuoteGateway>,
}

impl SubmitQuoteHandler {
    pub fn new(gateway: Arc<dyn QuoteGateway>) -> Self {
        Self { gateway }
    }

    /// Validates the form and posts the quote.
    ///
    /// Validation runs before the network call, so invalid input never
    /// leaves the client. No automatic retries happen on failure.
    pub async fn handle(&self, command: &SubmitQuoteCommand) -> Result<Quote, SubmitQuoteError> {
        let submission = QuoteSubmission::from_selection(
            &command.selection,
            command.contact.clone(),
            command.currency,
        )?;
        let quote = self.gateway.submit_quote(&submission).await?;
        Ok(quote)
    }
}
