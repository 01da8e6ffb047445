//! StageTable - Centralized ordering for the canonical lifecycle stages.
//!
//! The progression is:
//!
//! 1. QuoteReceived → 2. QuoteApproved → 3. Planning → 4. Development →
//! 5. Testing → 6. Review → 7. Delivery → 8. Completed
//!
//! Each stage carries an explicit `ordinal` rather than relying on its
//! position in the array, so reordering the definition table cannot
//! silently change business semantics; `table_ordinals_match_positions`
//! pins the two in agreement.

use serde::Serialize;

use super::ProjectStatus;

/// One row of the canonical lifecycle table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LifecycleStage {
    /// Position in the canonical ordering, 0-based.
    pub ordinal: u8,
    pub status: ProjectStatus,
    /// Nominal duration in days, used for projection only.
    pub estimated_days: u32,
    pub label: &'static str,
}

/// Central location for stage ordering logic.
///
/// All ordering-related queries go through this type; no call site
/// compares statuses by hand.
pub struct StageTable;

impl StageTable {
    /// Number of canonical stages.
    pub const COUNT: u8 = 8;

    /// The canonical lifecycle table.
    pub const STAGES: [LifecycleStage; 8] = [
        LifecycleStage {
            ordinal: 0,
            status: ProjectStatus::QuoteReceived,
            estimated_days: 0,
            label: "Quote Received",
        },
        LifecycleStage {
            ordinal: 1,
            status: ProjectStatus::QuoteApproved,
            estimated_days: 1,
            label: "Quote Approved",
        },
        LifecycleStage {
            ordinal: 2,
            status: ProjectStatus::Planning,
            estimated_days: 3,
            label: "Planning",
        },
        LifecycleStage {
            ordinal: 3,
            status: ProjectStatus::Development,
            estimated_days: 15,
            label: "Development",
        },
        LifecycleStage {
            ordinal: 4,
            status: ProjectStatus::Testing,
            estimated_days: 5,
            label: "Testing",
        },
        LifecycleStage {
            ordinal: 5,
            status: ProjectStatus::Review,
            estimated_days: 3,
            label: "Review",
        },
        LifecycleStage {
            ordinal: 6,
            status: ProjectStatus::Delivery,
            estimated_days: 2,
            label: "Delivery",
        },
        LifecycleStage {
            ordinal: 7,
            status: ProjectStatus::Completed,
            estimated_days: 0,
            label: "Completed",
        },
    ];

    /// Returns all stages in canonical order.
    pub fn all() -> &'static [LifecycleStage; 8] {
        &Self::STAGES
    }

    /// Returns the ordinal of a status, or None for the side states,
    /// which have no position in the ordering.
    pub fn ordinal_of(status: ProjectStatus) -> Option<u8> {
        Self::stage_for(status).map(|stage| stage.ordinal)
    }

    /// Returns the stage at an ordinal, or None if out of range.
    pub fn stage_at(ordinal: u8) -> Option<&'static LifecycleStage> {
        Self::all().iter().find(|stage| stage.ordinal == ordinal)
    }

    /// Returns the stage row for a status, or None for the side states.
    pub fn stage_for(status: ProjectStatus) -> Option<&'static LifecycleStage> {
        Self::all().iter().find(|stage| stage.status == status)
    }
}
