//! Portal notifications.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::NotificationId;

/// A notification shown in the portal's bell menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: NotificationId,
    pub title: String,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

/// A user action on the notification list, sent to `POST /notifications`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationAction {
    MarkRead(NotificationId),
    MarkAllRead,
    Delete(NotificationId),
    DeleteAll,
}

impl NotificationAction {
    /// Wire value of the `action` field.
    pub fn as_wire(&self) -> &'static str {
        match self {
            NotificationAction::MarkRead(_) => "mark-read",
            NotificationAction::MarkAllRead => "mark-all-read",
            NotificationAction::Delete(_) => "delete",
            NotificationAction::DeleteAll => "delete-all",
        }
    }

    /// Target id, if the action addresses a single notification.
    pub fn target(&self) -> Option<NotificationId> {
        match self {
            NotificationAction::MarkRead(id) | NotificationAction::Delete(id) => Some(*id),
            NotificationAction::MarkAllRead | NotificationAction::DeleteAll => None,
        }
    }
}
