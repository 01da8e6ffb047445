//! Wire DTOs for the backend endpoints.
//!
//! The entity types already serialize with the persisted field names,
//! so responses reuse them directly; this module adds the request
//! payloads and the `{ success, data?, error? }` envelope.

pub use crate::domain::notification::Notification;
pub use crate::domain::project::Project;
pub use crate::domain::quote::Quote;
pub use crate::ports::NotificationBatch;

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{AddOnKind, ServiceCategory, TierLevel};
use crate::domain::foundation::{Currency, NotificationId};
use crate::domain::notification::NotificationAction;
use crate::domain::quote::{ContactInfo, QuoteSubmission};
use crate::ports::GatewayError;

/// Body of `POST /quotes`.
///
/// The tier travels as `option` on submission even though the backend
/// stores it as `packageType`; both names are part of the wire contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitQuoteRequest {
    pub service: ServiceCategory,
    pub option: TierLevel,
    pub addons: Vec<AddOnKind>,
    pub timeline: u32,
    pub total_price: f64,
    pub contact_info: ContactInfo,
    pub currency: Currency,
}

impl From<&QuoteSubmission> for SubmitQuoteRequest {
    fn from(submission: &QuoteSubmission) -> Self {
        Self {
            service: submission.service,
            option: submission.tier,
            addons: submission.add_ons.clone(),
            timeline: submission.timeline_days,
            total_price: submission.total_price,
            contact_info: submission.contact.clone(),
            currency: submission.currency,
        }
    }
}

/// Body of `POST /notifications`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationActionRequest {
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<NotificationId>,
}

impl From<NotificationAction> for NotificationActionRequest {
    fn from(action: NotificationAction) -> Self {
        Self {
            action: action.as_wire().to_string(),
            id: action.target(),
        }
    }
}

/// The `{ success, data?, error? }` envelope wrapping most responses.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Unwraps an envelope that must carry data on success.
    pub fn into_result(self) -> Result<T, GatewayError> {
        if !self.success {
            return Err(GatewayError::Backend(
                self.error.unwrap_or_else(|| "unspecified error".to_string()),
            ));
        }
        self.data
            .ok_or_else(|| GatewayError::decode("envelope reported success without data"))
    }

    /// Unwraps a list envelope, treating absent data as an empty
    /// collection rather than an error.
    pub fn into_list(self) -> Result<T, GatewayError>
    where
        T: Default,
    {
        if !self.success {
            return Err(GatewayError::Backend(
                self.error.unwrap_or_else(|| "unspecified error".to_string()),
            ));
        }
        Ok(self.data.unwrap_or_default())
    }
}
