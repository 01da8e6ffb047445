//! In-memory backend for tests and offline development.
//!
//! Deterministic, synchronous state behind the same ports the HTTP
//! adapter implements. Not for production: lock poisoning panics via
//! `.expect()`, which is acceptable in test code only.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::RwLock;

use crate::domain::foundation::{QuoteId, UserId};
use crate::domain::notification::{Notification, NotificationAction};
use crate::domain::project::Project;
use crate::domain::quote::{Quote, QuoteStatus, QuoteSubmission};
use crate::ports::{
    GatewayError, NotificationBatch, NotificationGateway, ProjectReader, QuoteGateway,
};

/// In-memory implementation of every backend port.
///
/// Seed it with fixtures, point handlers at it, and assert on the
/// results; `set_failure` makes every call fail until cleared, for
/// error-path tests.
pub struct InMemoryBackend {
    user_id: UserId,
    quotes: RwLock<Vec<Quote>>,
    projects: RwLock<Vec<Project>>,
    notifications: RwLock<Vec<Notification>>,
    failure: RwLock<Option<GatewayError>>,
}

impl InMemoryBackend {
    /// Creates an empty backend owned by a fixed test user.
    pub fn new() -> Self {
        Self {
            user_id: UserId::new("in-memory-user").expect("static id is non-empty"),
            quotes: RwLock::new(Vec::new()),
            projects: RwLock::new(Vec::new()),
            notifications: RwLock::new(Vec::new()),
            failure: RwLock::new(None),
        }
    }

    /// Adds a stored quote.
    pub fn seed_quote(&self, quote: Quote) {
        self.quotes.write().expect("quotes lock poisoned").push(quote);
    }

    /// Adds a stored project.
    pub fn seed_project(&self, project: Project) {
        self.projects
            .write()
            .expect("projects lock poisoned")
            .push(project);
    }

    /// Adds a stored notification.
    pub fn seed_notification(&self, notification: Notification) {
        self.notifications
            .write()
            .expect("notifications lock poisoned")
            .push(notification);
    }

    /// Makes every subsequent call fail with `error`; pass None to
    /// restore normal behavior.
    pub fn set_failure(&self, error: Option<GatewayError>) {
        *self.failure.write().expect("failure lock poisoned") = error;
    }

    /// Number of stored quotes (for test assertions).
    pub fn quote_count(&self) -> usize {
        self.quotes.read().expect("quotes lock poisoned").len()
    }

    fn check_failure(&self) -> Result<(), GatewayError> {
        match &*self.failure.read().expect("failure lock poisoned") {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    fn batch(&self) -> NotificationBatch {
        let notifications = self
            .notifications
            .read()
            .expect("notifications lock poisoned")
            .clone();
        let unread_count = notifications.iter().filter(|n| !n.read).count() as u32;
        NotificationBatch {
            notifications,
            unread_count,
        }
    }
}

impl Default for InMemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuoteGateway for InMemoryBackend {
    async fn submit_quote(&self, submission: &QuoteSubmission) -> Result<Quote, GatewayError> {
        self.check_failure()?;
        let quote = Quote {
            id: QuoteId::new(),
            user_id: self.user_id.clone(),
            service_type: submission.service,
            package_type: submission.tier,
            add_ons: submission
                .add_ons
                .iter()
                .map(|kind| kind.as_slug().to_string())
                .collect(),
            timeline_days: submission.timeline_days,
            total_price: submission.total_price,
            currency: submission.currency,
            status: QuoteStatus::Pending,
            created_at: Utc::now(),
        };
        self.seed_quote(quote.clone());
        Ok(quote)
    }

    async fn list_quotes(&self) -> Result<Vec<Quote>, GatewayError> {
        self.check_failure()?;
        Ok(self.quotes.read().expect("quotes lock poisoned").clone())
    }
}

#[async_trait]
impl ProjectReader for InMemoryBackend {
    async fn list_projects(&self) -> Result<Vec<Project>, GatewayError> {
        self.check_failure()?;
        Ok(self.projects.read().expect("projects lock poisoned").clone())
    }
}

#[async_trait]
impl NotificationGateway for InMemoryBackend {
    async fn list_notifications(&self) -> Result<NotificationBatch, GatewayError> {
        self.check_failure()?;
        Ok(self.batch())
    }

    async fn apply_action(
        &self,
        action: NotificationAction,
    ) -> Result<NotificationBatch, GatewayError> {
        self.check_failure()?;
        {
            let mut notifications = self
                .notifications
                .write()
                .expect("notifications lock poisoned");
            match action {
                NotificationAction::MarkRead(id) => {
                    if let Some(n) = notifications.iter_mut().find(|n| n.id == id) {
                        n.read = true;
                    }
                }
                NotificationAction::MarkAllRead => {
                    for n in notifications.iter_mut() {
                        n.read = true;
                    }
                }
                NotificationAction::Delete(id) => {
                    notifications.retain(|n| n.id != id);
                }
                NotificationAction::DeleteAll => notifications.clear(),
            }
        }
        Ok(self.batch())
    }
}
