//! ListNotificationsHandler - Fetches the bell-menu snapshot.

use std::sync::Arc;

use crate::ports::{GatewayError, NotificationBatch, NotificationGateway};

/// Handler for reading the notification list and unread badge.
pub struct ListNotificationsHandler {
    gateway: Arc<dyn NotificationGateway>,
}

impl ListNotificationsHandler {
    pub fn new(gateway: Arc<dyn NotificationGateway>) -> Self {
        Self { gateway }
    }

    pub async fn handle(&self) -> Result<NotificationBatch, GatewayError> {
        self.gateway.list_notifications().await
    }
}
