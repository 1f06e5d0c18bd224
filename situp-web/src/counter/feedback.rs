//! User-facing feedback for each frame

use std::fmt;

use super::stage::Stage;

/// Advisory, success or corrective message attached to a frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feedback {
    /// No complete shoulder-hip-knee triple on either side
    NotPositioned,
    /// Triple present but the angle could not be measured
    LandmarksUnclear,
    /// A repetition was accepted; carries the new total
    Counted(u32),
    /// A cycle ended without reaching full range
    GoFurther,
    /// Advisory for the current stage
    Stage(Stage),
}

impl Feedback {
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feedback::NotPositioned => {
                f.write_str("Position yourself for sit-ups: lie down with knees bent")
            }
            Feedback::LandmarksUnclear => f.write_str("Cannot detect body landmarks clearly"),
            Feedback::Counted(n) => write!(f, "Excellent! Sit-up #{} counted ✓", n),
            Feedback::GoFurther => f.write_str("Almost there! Go all the way up for full rep"),
            Feedback::Stage(stage) => f.write_str(match stage {
                Stage::Down => "Ready - now sit up!",
                Stage::TransitionUp => "Keep going up...",
                Stage::Up => "Good! Now go back down",
                Stage::TransitionDown => "Going down...",
                Stage::Unknown => "",
            }),
        }
    }
}
