//! Add-on definitions.
//!
//! An add-on is an optional flat-priced extra stacked onto a tier's base
//! price. Reference data, never mutated.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The add-ons the studio offers.
///
/// Serialized with the wire values stored in the `addons` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AddOnKind {
    Seo,
    Copywriting,
    LogoDesign,
    Maintenance,
    HostingSetup,
    Analytics,
}

impl AddOnKind {
    /// All add-ons in display order.
    pub const ALL: [AddOnKind; 6] = [
        AddOnKind::Seo,
        AddOnKind::Copywriting,
        AddOnKind::LogoDesign,
        AddOnKind::Maintenance,
        AddOnKind::HostingSetup,
        AddOnKind::Analytics,
    ];

    /// Returns the wire value used in the `addons` array.
    pub fn as_slug(&self) -> &'static str {
        match self {
            AddOnKind::Seo => "seo",
            AddOnKind::Copywriting => "copywriting",
            AddOnKind::LogoDesign => "logo-design",
            AddOnKind::Maintenance => "maintenance",
            AddOnKind::HostingSetup => "hosting-setup",
            AddOnKind::Analytics => "analytics",
        }
    }

    /// Parses a wire add-on value.
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.as_slug() == slug)
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            AddOnKind::Seo => "SEO Package",
            AddOnKind::Copywriting => "Copywriting",
            AddOnKind::LogoDesign => "Logo Design",
            AddOnKind::Maintenance => "Monthly Maintenance",
            AddOnKind::HostingSetup => "Hosting Setup",
            AddOnKind::Analytics => "Analytics Setup",
        }
    }
}

impl fmt::Display for AddOnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Grouping tag used to cluster add-ons in the quote form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddOnCategory {
    Marketing,
    Content,
    Design,
    Operations,
}

/// An optional flat-priced extra.
///
/// `price` is in whole currency units, same scale as tier base prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddOn {
    pub kind: AddOnKind,
    pub price: u32,
    pub category: AddOnCategory,
}
