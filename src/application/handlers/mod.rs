//! Operation handlers.
//!
//! Each handler is invoked explicitly by the portal controller when the
//! user acts or a view loads; nothing recomputes implicitly inside
//! rendering code. Handlers take a full snapshot of their inputs and
//! return fresh values, so overlapping invocations are independent and
//! the caller simply keeps the most recent result.

mod get_dashboard;
mod get_project_schedule;
mod list_notifications;
mod price_quote;
mod submit_quote;
mod update_notifications;

pub use get_dashboard::GetDashboardHandler;
pub use get_project_schedule::{GetProjectScheduleHandler, GetProjectScheduleQuery, ScheduleError};
pub use list_notifications::ListNotificationsHandler;
pub use price_quote::{PricePreview, PriceQuoteHandler, PriceQuoteQuery};
pub use submit_quote::{SubmitQuoteCommand, SubmitQuoteError, SubmitQuoteHandler};
pub use update_notifications::{UpdateNotificationsCommand, UpdateNotificationsHandler};
