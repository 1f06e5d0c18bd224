//! JS-facing snapshots of counter output

use wasm_bindgen::prelude::*;

use crate::counter::{CounterStats, FrameUpdate, RepVerdict};

/// Result of one processed landmark buffer
#[wasm_bindgen]
#[derive(Clone, Debug)]
pub struct FrameReport {
    count: u32,
    stage: Option<String>,
    angle: Option<f32>,
    valid_position: bool,
    has_landmarks: bool,
    counted: bool,
    rejected: bool,
    message: String,
}

impl FrameReport {
    pub fn new(update: &FrameUpdate, has_landmarks: bool) -> Self {
        Self {
            count: update.count,
            stage: update.stage.map(|s| s.as_str().to_string()),
            angle: update.angle,
            valid_position: update.valid_position,
            has_landmarks,
            counted: update.counted(),
            rejected: matches!(update.verdict, Some(v) if v != RepVerdict::Valid),
            message: update.message(),
        }
    }
}

#[wasm_bindgen]
impl FrameReport {
    #[wasm_bindgen(getter)]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Stage name, undefined before the first measurable frame
    #[wasm_bindgen(getter)]
    pub fn stage(&self) -> Option<String> {
        self.stage.clone()
    }

    /// Smoothed torso angle in degrees, undefined when not measured
    #[wasm_bindgen(getter)]
    pub fn angle(&self) -> Option<f32> {
        self.angle
    }

    #[wasm_bindgen(getter)]
    pub fn valid_position(&self) -> bool {
        self.valid_position
    }

    #[wasm_bindgen(getter)]
    pub fn has_landmarks(&self) -> bool {
        self.has_landmarks
    }

    /// True on the frame a rep was accepted
    #[wasm_bindgen(getter)]
    pub fn counted(&self) -> bool {
        self.counted
    }

    /// True on the frame a cycle ended but failed validation
    #[wasm_bindgen(getter)]
    pub fn rejected(&self) -> bool {
        self.rejected
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

/// Counter statistics for the UI
#[wasm_bindgen(js_name = CounterStats)]
#[derive(Clone, Debug)]
pub struct StatsReport {
    total_count: u32,
    current_stage: Option<String>,
    angle_history_length: usize,
    stage_history_length: usize,
}

impl From<CounterStats> for StatsReport {
    fn from(stats: CounterStats) -> Self {
        Self {
            total_count: stats.total_count,
            current_stage: stats.current_stage.map(|s| s.as_str().to_string()),
            angle_history_length: stats.angle_history_length,
            stage_history_length: stats.stage_history_length,
        }
    }
}

#[wasm_bindgen(js_class = CounterStats)]
impl StatsReport {
    #[wasm_bindgen(getter)]
    pub fn total_count(&self) -> u32 {
        self.total_count
    }

    #[wasm_bindgen(getter)]
    pub fn current_stage(&self) -> Option<String> {
        self.current_stage.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn angle_history_length(&self) -> usize {
        self.angle_history_length
    }

    #[wasm_bindgen(getter)]
    pub fn stage_history_length(&self) -> usize {
        self.stage_history_length
    }
}
