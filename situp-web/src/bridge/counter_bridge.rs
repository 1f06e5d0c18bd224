//! Counter entry points for JavaScript
//!
//! JS runs MediaPipe Pose and passes each frame's landmarks here. One
//! counter instance lives in thread-local storage (WASM is single-threaded).

use wasm_bindgen::prelude::*;
use std::cell::RefCell;

use crate::counter::{RepCounter, Thresholds};
use crate::pose::MediaPipePose;
use super::error::{BridgeError, check_buffer};
use super::report::{FrameReport, StatsReport};

thread_local! {
    static COUNTER: RefCell<RepCounter<MediaPipePose>> =
        RefCell::new(RepCounter::new(MediaPipePose::new()));
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Process one frame of landmarks
///
/// `data` is a flat Float32Array: 33 × (x, y, z) or 33 × (x, y, z, visibility),
/// or empty when MediaPipe found nobody.
#[wasm_bindgen]
pub fn process_landmarks(data: &[f32]) -> Result<FrameReport, JsValue> {
    if let Err(err) = check_buffer(data) {
        web_sys::console::warn_1(&format!("{:?}", err).into());
        return Err(err.into());
    }

    let report = COUNTER.with(|counter_cell| {
        let mut counter = counter_cell.borrow_mut();
        let result = counter.process_frame(data);
        FrameReport::new(&result.update, result.landmarks.is_some())
    });

    if report.counted() {
        console_log!("✅ Sit-up #{} counted", report.count());
    } else if report.rejected() {
        console_log!("⚠️ Partial sit-up rejected (count stays {})", report.count());
    }

    Ok(report)
}

/// Clear count, stage and histories
#[wasm_bindgen]
pub fn reset_counter() {
    COUNTER.with(|counter_cell| counter_cell.borrow_mut().reset());
    console_log!("🔄 Sit-up counter reset");
}

/// Current totals and history sizes
#[wasm_bindgen]
pub fn get_counter_stats() -> StatsReport {
    COUNTER.with(|counter_cell| counter_cell.borrow().stats().into())
}

/// Tune stage thresholds (degrees). History is kept.
#[wasm_bindgen]
pub fn set_counter_thresholds(down: f32, up: f32, min_range: f32) -> Result<(), JsValue> {
    let thresholds = Thresholds::new(down, up, min_range)
        .ok_or(BridgeError::InvalidThresholds { down, up, min_range })?;

    COUNTER.with(|counter_cell| counter_cell.borrow_mut().set_thresholds(thresholds));
    console_log!("Thresholds: down>{}° up<{}° range>={}°", down, up, min_range);
    Ok(())
}

/// Minimum MediaPipe visibility for a joint to be used (0-1)
#[wasm_bindgen]
pub fn set_min_visibility(min_visibility: f32) -> Result<(), JsValue> {
    if !(0.0..=1.0).contains(&min_visibility) {
        return Err(BridgeError::InvalidVisibility(min_visibility).into());
    }

    COUNTER.with(|counter_cell| {
        counter_cell
            .borrow_mut()
            .estimator_mut()
            .set_min_visibility(min_visibility);
    });
    Ok(())
}
