//! Service tier definitions.
//!
//! A tier is a named pricing/feature bundle within a service category.
//! Tiers are reference data: created at build time, never mutated.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Complexity, ServiceCategory};

/// Tier level within a service category.
///
/// Serialized with the wire values stored in the `packageType` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TierLevel {
    Startup,
    Business,
    Enterprise,
    Custom,
}

impl TierLevel {
    /// All levels in ascending price order.
    pub const ALL: [TierLevel; 4] = [
        TierLevel::Startup,
        TierLevel::Business,
        TierLevel::Enterprise,
        TierLevel::Custom,
    ];

    /// Returns the display name for this level.
    pub fn display_name(&self) -> &'static str {
        match self {
            TierLevel::Startup => "Startup",
            TierLevel::Business => "Business",
            TierLevel::Enterprise => "Enterprise",
            TierLevel::Custom => "Custom",
        }
    }

    /// Returns the wire value stored in `packageType`.
    pub fn as_slug(&self) -> &'static str {
        match self {
            TierLevel::Startup => "startup",
            TierLevel::Business => "business",
            TierLevel::Enterprise => "enterprise",
            TierLevel::Custom => "custom",
        }
    }

    /// Parses a wire `packageType` value.
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|l| l.as_slug() == slug)
    }
}

impl fmt::Display for TierLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A pricing/feature bundle within a service category.
///
/// `base_price` is in whole currency units (MXN reference prices);
/// `delivery_days` is the nominal delivery estimate shown next to the
/// tier, not a commitment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceTier {
    pub category: ServiceCategory,
    pub level: TierLevel,
    pub base_price: u32,
    pub delivery_days: u32,
    pub complexity: Complexity,
    pub included_features: &'static [&'static str],
    pub optional_features: &'static [&'static str],
}

impl ServiceTier {
    /// Returns a stable identifier combining category and level,
    /// e.g. `web-development/business`.
    pub fn slug(&self) -> String {
        format!("{}/{}", self.category.as_slug(), self.level.as_slug())
    }
}
