//! Counter module - sit-up repetition counting
//!
//! Re-exports only. All logic in submodules.

mod config;
mod smoother;
mod stage;
mod history;
mod validator;
mod feedback;
mod rep_counter;

pub use config::Thresholds;
pub use smoother::{AngleSmoother, ANGLE_HISTORY_CAPACITY};
pub use stage::{Stage, next_stage};
pub use history::{StageHistory, STAGE_HISTORY_CAPACITY};
pub use validator::{
    RepVerdict, validate_repetition, is_valid_repetition,
    MIN_STAGE_EVENTS, SEQUENCE_WINDOW,
};
pub use feedback::Feedback;
pub use rep_counter::{RepCounter, FrameUpdate, FrameResult, CounterStats};
