//! Quote entity and the submission payload built from a selection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::catalog::{AddOnKind, ServiceCategory, TierLevel};
use crate::domain::foundation::{Currency, QuoteId, UserId, ValidationError};
use crate::domain::pricing::QuoteSelection;

/// Review status of a submitted quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl QuoteStatus {
    /// Returns true once the studio has approved the quote.
    pub fn is_approved(&self) -> bool {
        matches!(self, QuoteStatus::Approved)
    }

    /// Returns true while the quote awaits review.
    pub fn is_pending(&self) -> bool {
        matches!(self, QuoteStatus::Pending)
    }
}

impl fmt::Display for QuoteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            QuoteStatus::Pending => "Pending",
            QuoteStatus::Approved => "Approved",
            QuoteStatus::Rejected => "Rejected",
        };
        write!(f, "{}", s)
    }
}

/// A quote as the backend stores it.
///
/// Field names round-trip the persisted wire format unchanged
/// (`serviceType`, `packageType`, `timeline`, `totalPrice`, `currency`).
/// Add-ons are kept as the stored slugs; typed add-ons only matter while
/// a price is being computed, which happens before submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: QuoteId,
    pub user_id: UserId,
    pub service_type: ServiceCategory,
    pub package_type: TierLevel,
    #[serde(rename = "addons")]
    pub add_ons: Vec<String>,
    #[serde(rename = "timeline")]
    pub timeline_days: u32,
    pub total_price: f64,
    pub currency: Currency,
    pub status: QuoteStatus,
    pub created_at: DateTime<Utc>,
}

/// Contact details captured on the quote form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub phone: Option<String>,
}

impl ContactInfo {
    /// Validates the details before any network call is made.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if self.email.trim().is_empty() {
            return Err(ValidationError::empty_field("email"));
        }
        let at = self.email.find('@');
        let valid = matches!(at, Some(pos) if pos > 0 && self.email[pos + 1..].contains('.'));
        if !valid {
            return Err(ValidationError::invalid_format(
                "email",
                "expected name@domain.tld",
            ));
        }
        Ok(())
    }
}

/// The payload sent to `POST /quotes`.
///
/// Built from a completed [`QuoteSelection`]; construction fails rather
/// than submitting an unpriceable or unreachable request.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteSubmission {
    pub service: ServiceCategory,
    pub tier: TierLevel,
    pub add_ons: Vec<AddOnKind>,
    pub timeline_days: u32,
    pub total_price: f64,
    pub contact: ContactInfo,
    pub currency: Currency,
}

impl QuoteSubmission {
    /// Builds a submission from the current selection.
    ///
    /// The total is computed here, from the same engine every display
    /// call site uses, so the submitted price can never drift from the
    /// one previewed.
    pub fn from_selection(
        selection: &QuoteSelection,
        contact: ContactInfo,
        currency: Currency,
    ) -> Result<Self, ValidationError> {
        contact.validate()?;
        let tier = selection
            .tier_level()
            .ok_or_else(|| ValidationError::no_tier_selected("quote submission"))?;
        Ok(Self {
            service: selection.category(),
            tier,
            add_ons: selection.add_ons(),
            timeline_days: selection.timeline_days(),
            total_price: selection.total(),
            contact,
            currency,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::AddOnKind;

    fn contact() -> ContactInfo {
        ContactInfo {
            name: "Ana Torres".to_string(),
            email: "ana@example.com".to_string(),
            company: Some("Torres y Asociados".to_string()),
            phone: None,
        }
    }

    fn ready_selection() -> QuoteSelection {
        let mut selection = QuoteSelection::new(ServiceCategory::WebDevelopment);
        selection.select_tier(TierLevel::Business);
        selection.toggle_add_on(AddOnKind::Seo);
        selection.toggle_add_on(AddOnKind::LogoDesign);
        selection.set_timeline(10).unwrap();
        selection
    }

    #[test]
    fn quote_serializes_with_wire_field_names() {
        let quote = Quote {
            id: "550e8400-e29b-41d4-a716-446655440000".parse().unwrap(),
            user_id: UserId::new("user-1").unwrap(),
            service_type: ServiceCategory::WebDevelopment,
            package_type: TierLevel::Business,
            add_ons: vec!["seo".to_string()],
            timeline_days: 30,
            total_price: 53_000.0,
            currency: Currency::Mxn,
            status: QuoteStatus::Pending,
            created_at: "2024-03-01T12:00:00Z".parse().unwrap(),
        };
        let json = serde_json::to_value(&quote).unwrap();
        assert_eq!(json["serviceType"], "web-development");
        assert_eq!(json["packageType"], "business");
        assert_eq!(json["timeline"], 30);
        assert_eq!(json["totalPrice"], 53_000.0);
        assert_eq!(json["currency"], "MXN");
        assert_eq!(json["status"], "pending");
        assert_eq!(json["addons"][0], "seo");
    }

    #[test]
    fn quote_round_trips_through_json() {
        let quote = Quote {
            id: QuoteId::new(),
            user_id: UserId::new("user-2").unwrap(),
            service_type: ServiceCategory::Branding,
            package_type: TierLevel::Startup,
            add_ons: vec![],
            timeline_days: 14,
            total_price: 12_000.0,
            currency: Currency::Usd,
            status: QuoteStatus::Approved,
            created_at: Utc::now(),
        };
        let json = serde_json::to_string(&quote).unwrap();
        let back: Quote = serde_json::from_str(&json).unwrap();
        assert_eq!(back, quote);
    }

    #[test]
    fn contact_info_requires_name_and_email() {
        let mut c = contact();
        c.name = "  ".to_string();
        assert!(matches!(
            c.validate(),
            Err(ValidationError::EmptyField { .. })
        ));

        let mut c = contact();
        c.email = String::new();
        assert!(matches!(
            c.validate(),
            Err(ValidationError::EmptyField { .. })
        ));
    }

    #[test]
    fn contact_info_rejects_malformed_email() {
        for email in ["no-at-sign", "@leading.at", "user@nodot"] {
            let mut c = contact();
            c.email = email.to_string();
            assert!(
                matches!(c.validate(), Err(ValidationError::InvalidFormat { .. })),
                "{} should be rejected",
                email
            );
        }
    }

    #[test]
    fn submission_carries_the_engine_total() {
        let submission =
            QuoteSubmission::from_selection(&ready_selection(), contact(), Currency::Mxn).unwrap();
        assert!((submission.total_price - 84_500.0).abs() < 1e-9);
        assert_eq!(submission.tier, TierLevel::Business);
        assert_eq!(submission.timeline_days, 10);
    }

    #[test]
    fn submission_requires_a_tier() {
        let selection = QuoteSelection::new(ServiceCategory::MobileApp);
        let result = QuoteSubmission::from_selection(&selection, contact(), Currency::Mxn);
        assert!(matches!(
            result,
            Err(ValidationError::NoTierSelected { .. })
        ));
    }

    #[test]
    fn submission_rejects_invalid_contact_before_reading_the_selection() {
        let mut bad = contact();
        bad.email = "nope".to_string();
        let result = QuoteSubmission::from_selection(&ready_selection(), bad, Currency::Mxn);
        assert!(result.is_err());
    }
}
