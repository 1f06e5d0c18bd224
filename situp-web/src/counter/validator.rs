//! Full-repetition validation
//!
//! Runs when the subject lands back in `Down`. Two gates:
//! 1. Range of motion: recent angles must span at least the configured range.
//! 2. Sequence: recent stage changes must contain
//!    `Down → (TransitionUp | Up) → Up → (TransitionDown | Down)`.
//!
//! A rejected cycle is not retried; the subject has to do another one.

use super::history::StageHistory;
use super::smoother::{AngleSmoother, ANGLE_HISTORY_CAPACITY};
use super::stage::Stage;

/// Stage-change events needed before the sequence gate can pass
pub const MIN_STAGE_EVENTS: usize = 4;

/// Stage-change events scanned for the cycle pattern
pub const SEQUENCE_WINDOW: usize = 5;

/// Outcome of validating one completed cycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RepVerdict {
    Valid,
    /// Recent angles never spread far enough apart
    ShallowMotion,
    /// Stage changes do not show a visit to `Up` between two downs
    IncompleteSequence,
}

impl RepVerdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, RepVerdict::Valid)
    }
}

/// Validate a cycle that just ended in `Down`
pub fn validate_repetition(
    stages: &StageHistory,
    angles: &AngleSmoother,
    min_range_of_motion: f32,
) -> RepVerdict {
    if stages.len() < MIN_STAGE_EVENTS {
        return RepVerdict::IncompleteSequence;
    }

    if !has_range_of_motion(angles, min_range_of_motion) {
        return RepVerdict::ShallowMotion;
    }

    if contains_cycle(&stages.recent(SEQUENCE_WINDOW)) {
        RepVerdict::Valid
    } else {
        RepVerdict::IncompleteSequence
    }
}

/// Boolean form of [`validate_repetition`]
pub fn is_valid_repetition(
    stages: &StageHistory,
    angles: &AngleSmoother,
    min_range_of_motion: f32,
) -> bool {
    validate_repetition(stages, angles, min_range_of_motion).is_valid()
}

/// Range gate over the most recent samples. No samples, no range.
fn has_range_of_motion(angles: &AngleSmoother, min_range_of_motion: f32) -> bool {
    match angles.extent(ANGLE_HISTORY_CAPACITY) {
        Some((lo, hi)) => hi - lo >= min_range_of_motion,
        None => false,
    }
}

/// Scan every offset of the window for the down-up-down pattern
fn contains_cycle(window: &[Stage]) -> bool {
    window.windows(4).any(|w| {
        w[0] == Stage::Down
            && matches!(w[1], Stage::TransitionUp | Stage::Up)
            && w[2] == Stage::Up
            && matches!(w[3], Stage::TransitionDown | Stage::Down)
    })
}
