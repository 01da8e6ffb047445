//! UpdateNotificationsHandler - Applies bell-menu actions.

use std::sync::Arc;

use crate::domain::notification::NotificationAction;
use crate::ports::{GatewayError, NotificationBatch, NotificationGateway};

/// Command carrying one user action on the notification list.
#[derive(Debug, Clone, Copy)]
pub struct UpdateNotificationsCommand {
    pub action: NotificationAction,
}

/// Handler for mark-read/delete actions, single or bulk.
pub struct UpdateNotificationsHandler {
    gateway: Arc<dyn NotificationGateway>,
}

impl UpdateNotificationsHandler {
    pub fn new(gateway: Arc<dyn NotificationGateway>) -> Self {
        Self { gateway }
    }

    /// Applies the action and returns the fresh batch so badge and list
    /// update from the same snapshot.
    pub async fn handle(
        &self,
        command: UpdateNotificationsCommand,
    ) -> Result<NotificationBatch, GatewayError> {
        self.gateway.apply_action(command.action).await
    }
}
