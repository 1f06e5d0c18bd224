//! Sit-up stages and angle-based stage classification
//!
//! Between the up and down thresholds the angle alone is ambiguous, so the
//! previous stage decides the direction of travel.

use super::config::Thresholds;

/// Discretized phase of the sit-up cycle
///
/// "Not yet classified" is `Option<Stage>::None` at the call sites.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    Down,
    TransitionUp,
    Up,
    TransitionDown,
    Unknown,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Down => "down",
            Stage::TransitionUp => "transition_up",
            Stage::Up => "up",
            Stage::TransitionDown => "transition_down",
            Stage::Unknown => "unknown",
        }
    }

    /// Stages from which reaching `Down` completes a cycle
    pub fn is_descending(&self) -> bool {
        matches!(self, Stage::Up | Stage::TransitionDown)
    }
}

/// Classify a smoothed angle given where the subject was last frame
///
/// - angle > down threshold → `Down`
/// - angle < up threshold → `Up`
/// - dead zone after `Down` → `TransitionUp`
/// - dead zone after `Up` → `TransitionDown`
/// - otherwise the previous stage persists (`Unknown` if there was none)
pub fn next_stage(angle: f32, previous: Option<Stage>, thresholds: &Thresholds) -> Stage {
    if angle > thresholds.down_angle {
        Stage::Down
    } else if angle < thresholds.up_angle {
        Stage::Up
    } else {
        match previous {
            Some(Stage::Down) if angle < thresholds.down_angle => Stage::TransitionUp,
            Some(Stage::Up) if angle > thresholds.up_angle => Stage::TransitionDown,
            Some(stage) => stage,
            None => Stage::Unknown,
        }
    }
}
