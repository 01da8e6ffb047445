//! Service categories offered by the studio.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A service category, the top level of the catalog.
///
/// Serialized with the wire values stored in the `serviceType` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceCategory {
    WebDevelopment,
    Ecommerce,
    MobileApp,
    Branding,
}

impl ServiceCategory {
    /// All categories in display order.
    pub const ALL: [ServiceCategory; 4] = [
        ServiceCategory::WebDevelopment,
        ServiceCategory::Ecommerce,
        ServiceCategory::MobileApp,
        ServiceCategory::Branding,
    ];

    /// Returns the display name for this category.
    pub fn display_name(&self) -> &'static str {
        match self {
            ServiceCategory::WebDevelopment => "Web Development",
            ServiceCategory::Ecommerce => "E-commerce",
            ServiceCategory::MobileApp => "Mobile App",
            ServiceCategory::Branding => "Branding",
        }
    }

    /// Returns the wire value stored in `serviceType`.
    pub fn as_slug(&self) -> &'static str {
        match self {
            ServiceCategory::WebDevelopment => "web-development",
            ServiceCategory::Ecommerce => "ecommerce",
            ServiceCategory::MobileApp => "mobile-app",
            ServiceCategory::Branding => "branding",
        }
    }

    /// Parses a wire `serviceType` value.
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_slug() == slug)
    }
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Complexity band of a tier, used for display and staffing hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Basic,
    Intermediate,
    Advanced,
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Complexity::Basic => "Basic",
            Complexity::Intermediate => "Intermediate",
            Complexity::Advanced => "Advanced",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_serializes_to_kebab_case() {
        assert_eq!(
            serde_json::to_string(&ServiceCategory::WebDevelopment).unwrap(),
            "\"web-development\""
        );
        assert_eq!(
            serde_json::to_string(&ServiceCategory::MobileApp).unwrap(),
            "\"mobile-app\""
        );
    }

    #[test]
    fn category_deserializes_from_kebab_case() {
        let c: ServiceCategory = serde_json::from_str("\"ecommerce\"").unwrap();
        assert_eq!(c, ServiceCategory::Ecommerce);
    }

    #[test]
    fn slug_round_trips_for_every_category() {
        for category in ServiceCategory::ALL {
            assert_eq!(ServiceCategory::from_slug(category.as_slug()), Some(category));
        }
    }

    #[test]
    fn from_slug_rejects_unknown_value() {
        assert_eq!(ServiceCategory::from_slug("consulting"), None);
    }

    #[test]
    fn complexity_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Complexity::Intermediate).unwrap(),
            "\"intermediate\""
        );
    }
}
