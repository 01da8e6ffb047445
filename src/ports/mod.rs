//! Ports - async traits for the backend collaborator.
//!
//! The relational backend is external; everything this core knows about
//! it goes through these traits. Adapters implement them over HTTP (or
//! in memory for tests).

mod error;
mod notification_gateway;
mod project_reader;
mod quote_gateway;

pub use error::GatewayError;
pub use notification_gateway::{NotificationBatch, NotificationGateway};
pub use project_reader::ProjectReader;
pub use quote_gateway::QuoteGateway;
