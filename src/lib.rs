//! Studio Portal - Quote pricing and project lifecycle core
//!
//! This crate implements the pricing calculator, the project lifecycle
//! state machine, the timeline estimator, and the dashboard aggregation
//! shared by every view of the studio client portal. Persistence, auth,
//! and rendering live in external collaborators reached over HTTP.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
