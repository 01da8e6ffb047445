//! Progress derivation from the lifecycle position.

use crate::domain::foundation::Percentage;

use super::{ReportedStatus, StageTable};

/// Derives the completion percentage for a project.
///
/// Canonical stages derive progress from their position: stage `i` of 8
/// is `round(100 * (i + 1) / 8)` percent. Side states and unrecognized
/// statuses have no position, so the externally stored value passes
/// through unchanged - frozen for ON_HOLD, voided-as-stored for
/// CANCELLED.
pub fn progress_percentage(status: &ReportedStatus, stored: Percentage) -> Percentage {
    match status.known().and_then(StageTable::ordinal_of) {
        Some(ordinal) => Percentage::from_ratio(ordinal as u32 + 1, StageTable::COUNT as u32),
        None => stored,
    }
}
