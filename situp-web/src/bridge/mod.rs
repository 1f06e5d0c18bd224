//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod error;
mod report;
mod counter_bridge;

pub use error::BridgeError;
pub use report::{FrameReport, StatsReport};
pub use counter_bridge::{
    process_landmarks,
    reset_counter,
    get_counter_stats,
    set_counter_thresholds,
    set_min_visibility,
};
