//! Adapters - concrete implementations of the ports.
//!
//! `http` talks to the real backend; `memory` backs tests and offline
//! development with deterministic in-process state.

pub mod http;
pub mod memory;
