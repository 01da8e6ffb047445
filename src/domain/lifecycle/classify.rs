//! Stage classification for the step-by-step progress widget.

use serde::Serialize;

use super::{LifecycleStage, ReportedStatus, StageTable};

/// How a canonical stage relates to a project's current status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StageState {
    Completed,
    Current,
    Pending,
}

/// Classifies one stage relative to the project's current status.
///
/// When the current status has no ordinal - a side state or an
/// unrecognized value - every stage is `Pending`: the widget highlights
/// nothing rather than guessing a position.
pub fn classify(stage: &LifecycleStage, current: &ReportedStatus) -> StageState {
    let current_ordinal = current.known().and_then(StageTable::ordinal_of);
    match current_ordinal {
        Some(ordinal) => {
            if stage.ordinal < ordinal {
                StageState::Completed
            } else if stage.ordinal == ordinal {
                StageState::Current
            } else {
                StageState::Pending
            }
        }
        None => StageState::Pending,
    }
}

/// Classifies the whole table in canonical order.
pub fn classify_all(current: &ReportedStatus) -> Vec<(&'static LifecycleStage, StageState)> {
    StageTable::all()
        .iter()
        .map(|stage| (stage, classify(stage, current)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::lifecycle::ProjectStatus;

    #[test]
    fn canonical_status_partitions_with_exactly_one_current() {
        for status in ProjectStatus::ALL.into_iter().filter(|s| !s.is_side_state()) {
            let states = classify_all(&status.into());
            let current = states
                .iter()
                .filter(|(_, s)| *s == StageState::Current)
                .count();
            assert_eq!(current, 1, "{:?} must have exactly one current stage", status);
            assert_eq!(states.len(), 8);
        }
    }

    #[test]
    fn stages_before_current_are_completed_and_after_are_pending() {
        let states = classify_all(&ProjectStatus::Testing.into());
        let expected = [
            StageState::Completed, // QuoteReceived
            StageState::Completed, // QuoteApproved
            StageState::Completed, // Planning
            StageState::Completed, // Development
            StageState::Current,   // Testing
            StageState::Pending,   // Review
            StageState::Pending,   // Delivery
            StageState::Pending,   // Completed
        ];
        for ((_, actual), expected) in states.iter().zip(expected) {
            assert_eq!(*actual, expected);
        }
    }

    #[test]
    fn first_stage_has_nothing_completed() {
        let states = classify_all(&ProjectStatus::QuoteReceived.into());
        assert_eq!(states[0].1, StageState::Current);
        assert!(states[1..].iter().all(|(_, s)| *s == StageState::Pending));
    }

    #[test]
    fn completed_project_has_everything_before_the_last_stage_completed() {
        let states = classify_all(&ProjectStatus::Completed.into());
        assert!(states[..7].iter().all(|(_, s)| *s == StageState::Completed));
        assert_eq!(states[7].1, StageState::Current);
    }

    #[test]
    fn side_states_classify_every_stage_as_pending() {
        for status in [ProjectStatus::OnHold, ProjectStatus::Cancelled] {
            let states = classify_all(&status.into());
            assert!(states.iter().all(|(_, s)| *s == StageState::Pending));
        }
    }

    #[test]
    fn unrecognized_status_classifies_every_stage_as_pending() {
        let states = classify_all(&ReportedStatus::parse("MYSTERY_STATE"));
        assert!(states.iter().all(|(_, s)| *s == StageState::Pending));
    }
}
