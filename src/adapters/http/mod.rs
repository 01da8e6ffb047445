//! HTTP adapter for the backend collaborator.

mod client;
pub mod dto;

pub use client::BackendClient;
pub use dto::{ApiEnvelope, NotificationActionRequest, SubmitQuoteRequest};
