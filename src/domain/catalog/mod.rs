//! Catalog module - Static service/tier/add-on reference data.
//!
//! The catalog is built once at startup and never mutated. Everything the
//! pricing engine needs (base prices, add-on prices, nominal delivery
//! estimates) comes from here.

mod addon;
#[allow(clippy::module_inception)]
mod catalog;
mod service;
mod tier;

pub use addon::{AddOn, AddOnCategory, AddOnKind};
pub use catalog::Catalog;
pub use service::{Complexity, ServiceCategory};
pub use tier::{ServiceTier, TierLevel};
