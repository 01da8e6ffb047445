//! Port for the notification endpoints.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::notification::{Notification, NotificationAction};

use super::GatewayError;

/// The notification list plus its unread counter, as one snapshot.
///
/// The backend returns both together so the bell badge and the list can
/// never disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NotificationBatch {
    pub notifications: Vec<Notification>,
    pub unread_count: u32,
}

/// Port for reading and acting on notifications.
#[async_trait]
pub trait NotificationGateway: Send + Sync {
    /// Fetches the current batch (`GET /notifications`).
    async fn list_notifications(&self) -> Result<NotificationBatch, GatewayError>;

    /// Applies an action and returns the updated batch
    /// (`POST /notifications`).
    async fn apply_action(
        &self,
        action: NotificationAction,
    ) -> Result<NotificationBatch, GatewayError>;
}
