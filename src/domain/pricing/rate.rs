//! Timeline rate - the delivery-timeline price modifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Price modifier derived from the requested delivery timeline.
///
/// Requests under 14 days carry a rush surcharge; requests over 60 days
/// earn an extended-timeline discount. The mapping is total: every
/// possible day count falls into exactly one rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimelineRate {
    Rush,
    Standard,
    Extended,
}

impl TimelineRate {
    /// Classifies a requested timeline in days.
    pub fn from_days(timeline_days: u32) -> Self {
        if timeline_days < 14 {
            TimelineRate::Rush
        } else if timeline_days > 60 {
            TimelineRate::Extended
        } else {
            TimelineRate::Standard
        }
    }

    /// Returns the multiplier applied to the running total.
    pub fn multiplier(&self) -> f64 {
        match self {
            TimelineRate::Rush => 1.30,
            TimelineRate::Standard => 1.0,
            TimelineRate::Extended => 0.90,
        }
    }

    /// Returns the label shown next to the computed price.
    pub fn display_name(&self) -> &'static str {
        match self {
            TimelineRate::Rush => "Rush delivery",
            TimelineRate::Standard => "Standard delivery",
            TimelineRate::Extended => "Extended timeline",
        }
    }
}

impl fmt::Display for TimelineRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
