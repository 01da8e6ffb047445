//! Project status enums and the wire-preserving wrapper.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Status of a project, exactly as the backend stores it.
///
/// The first eight variants are the canonical ordered stages; `OnHold`
/// and `Cancelled` are side states that do not participate in
/// index-based comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    QuoteReceived,
    QuoteApproved,
    Planning,
    Development,
    Testing,
    Review,
    Delivery,
    Completed,
    OnHold,
    Cancelled,
}

impl ProjectStatus {
    /// Every status the backend may store.
    pub const ALL: [ProjectStatus; 10] = [
        ProjectStatus::QuoteReceived,
        ProjectStatus::QuoteApproved,
        ProjectStatus::Planning,
        ProjectStatus::Development,
        ProjectStatus::Testing,
        ProjectStatus::Review,
        ProjectStatus::Delivery,
        ProjectStatus::Completed,
        ProjectStatus::OnHold,
        ProjectStatus::Cancelled,
    ];

    /// Returns the persisted wire value, e.g. `QUOTE_RECEIVED`.
    pub fn as_wire(&self) -> &'static str {
        match self {
            ProjectStatus::QuoteReceived => "QUOTE_RECEIVED",
            ProjectStatus::QuoteApproved => "QUOTE_APPROVED",
            ProjectStatus::Planning => "PLANNING",
            ProjectStatus::Development => "DEVELOPMENT",
            ProjectStatus::Testing => "TESTING",
            ProjectStatus::Review => "REVIEW",
            ProjectStatus::Delivery => "DELIVERY",
            ProjectStatus::Completed => "COMPLETED",
            ProjectStatus::OnHold => "ON_HOLD",
            ProjectStatus::Cancelled => "CANCELLED",
        }
    }

    /// Parses a persisted wire value.
    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.as_wire() == value)
    }

    /// Returns the label shown in the portal.
    pub fn display_label(&self) -> &'static str {
        match self {
            ProjectStatus::QuoteReceived => "Quote Received",
            ProjectStatus::QuoteApproved => "Quote Approved",
            ProjectStatus::Planning => "Planning",
            ProjectStatus::Development => "Development",
            ProjectStatus::Testing => "Testing",
            ProjectStatus::Review => "Review",
            ProjectStatus::Delivery => "Delivery",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::OnHold => "On Hold",
            ProjectStatus::Cancelled => "Cancelled",
        }
    }

    /// Returns true for the two states outside the canonical ordering.
    pub fn is_side_state(&self) -> bool {
        matches!(self, ProjectStatus::OnHold | ProjectStatus::Cancelled)
    }

    /// Returns true once the project can no longer advance.
    pub fn is_settled(&self) -> bool {
        matches!(self, ProjectStatus::Completed | ProjectStatus::Cancelled)
    }

    /// Returns true while the project still counts as active work.
    pub fn is_active(&self) -> bool {
        !self.is_settled()
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_label())
    }
}

/// A status as reported by the backend, unknown values preserved.
///
/// Data problems must stay visible: a wire value outside the ten known
/// statuses is carried verbatim, round-trips unchanged, and is never
/// coerced into a canonical state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ReportedStatus {
    Known(ProjectStatus),
    Unrecognized(String),
}

impl ReportedStatus {
    /// Parses a wire value, keeping unrecognized input verbatim.
    pub fn parse(value: impl Into<String>) -> Self {
        let raw = value.into();
        match ProjectStatus::from_wire(&raw) {
            Some(status) => ReportedStatus::Known(status),
            None => ReportedStatus::Unrecognized(raw),
        }
    }

    /// The known status, if the wire value was recognized.
    pub fn known(&self) -> Option<ProjectStatus> {
        match self {
            ReportedStatus::Known(status) => Some(*status),
            ReportedStatus::Unrecognized(_) => None,
        }
    }

    /// The wire value, byte-for-byte what the backend sent.
    pub fn as_wire_str(&self) -> &str {
        match self {
            ReportedStatus::Known(status) => status.as_wire(),
            ReportedStatus::Unrecognized(raw) => raw,
        }
    }

    /// Label for display; unrecognized values are shown as-is so the
    /// data problem surfaces instead of masquerading as a real stage.
    pub fn display_label(&self) -> &str {
        match self {
            ReportedStatus::Known(status) => status.display_label(),
            ReportedStatus::Unrecognized(raw) => raw,
        }
    }

    /// Returns true while the project counts as active work; an
    /// unrecognized status is neither completed nor cancelled, so it
    /// stays active.
    pub fn is_active(&self) -> bool {
        match self {
            ReportedStatus::Known(status) => status.is_active(),
            ReportedStatus::Unrecognized(_) => true,
        }
    }
}

impl From<ProjectStatus> for ReportedStatus {
    fn from(status: ProjectStatus) -> Self {
        ReportedStatus::Known(status)
    }
}

impl fmt::Display for ReportedStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_label())
    }
}

impl Serialize for ReportedStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_wire_str())
    }
}

impl<'de> Deserialize<'de> for ReportedStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(ReportedStatus::parse(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_values_round_trip_for_every_status() {
        for status in ProjectStatus::ALL {
            assert_eq!(ProjectStatus::from_wire(status.as_wire()), Some(status));
        }
    }

    #[test]
    fn serde_matches_the_wire_values() {
        assert_eq!(
            serde_json::to_string(&ProjectStatus::QuoteReceived).unwrap(),
            "\"QUOTE_RECEIVED\""
        );
        let status: ProjectStatus = serde_json::from_str("\"ON_HOLD\"").unwrap();
        assert_eq!(status, ProjectStatus::OnHold);
    }

    #[test]
    fn side_states_are_exactly_on_hold_and_cancelled() {
        let side: Vec<ProjectStatus> = ProjectStatus::ALL
            .into_iter()
            .filter(|s| s.is_side_state())
            .collect();
        assert_eq!(side, vec![ProjectStatus::OnHold, ProjectStatus::Cancelled]);
    }

    #[test]
    fn settled_states_are_completed_and_cancelled() {
        assert!(ProjectStatus::Completed.is_settled());
        assert!(ProjectStatus::Cancelled.is_settled());
        assert!(ProjectStatus::OnHold.is_active());
        assert!(ProjectStatus::Development.is_active());
    }

    #[test]
    fn reported_status_parses_known_values() {
        assert_eq!(
            ReportedStatus::parse("DEVELOPMENT"),
            ReportedStatus::Known(ProjectStatus::Development)
        );
    }

    #[test]
    fn reported_status_preserves_unknown_values() {
        let status = ReportedStatus::parse("ARCHIVED");
        assert_eq!(status, ReportedStatus::Unrecognized("ARCHIVED".to_string()));
        assert_eq!(status.as_wire_str(), "ARCHIVED");
        assert_eq!(status.display_label(), "ARCHIVED");
        assert_eq!(status.known(), None);
    }

    #[test]
    fn unknown_status_counts_as_active() {
        assert!(ReportedStatus::parse("ARCHIVED").is_active());
    }

    #[test]
    fn reported_status_serde_round_trips_unknown_values() {
        let status = ReportedStatus::parse("SOMETHING_NEW");
        let json = serde_json::to_string(&status).unwrap();
        assert_eq!(json, "\"SOMETHING_NEW\"");
        let back: ReportedStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, status);
    }

    #[test]
    fn reported_status_serde_round_trips_known_values() {
        let status = ReportedStatus::Known(ProjectStatus::Testing);
        let json = serde_json::to_string(&status).unwrap();
        assert_eq!(json, "\"TESTING\"");
        let back: ReportedStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, status);
    }
}
