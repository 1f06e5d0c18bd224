//! Sit-up Counter Web - rep counting over MediaPipe Pose landmarks
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules

use wasm_bindgen::prelude::*;

// ============================================================================
// CONSOLE LOGGING
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => ($crate::log(&format_args!($($t)*).to_string()))
}

pub mod counter;
pub mod pose;
mod bridge;


// Re-export wasm_bindgen functions for JS access
pub use bridge::{
    process_landmarks, reset_counter, get_counter_stats,
    set_counter_thresholds, set_min_visibility,
    BridgeError, FrameReport, StatsReport,
};
pub use counter::{RepCounter, Stage, Thresholds};
pub use pose::{JointMap, JointName, Landmark, MediaPipePose, PoseEstimator};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}
