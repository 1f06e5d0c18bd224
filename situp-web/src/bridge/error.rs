//! Caller contract violations surfaced to JavaScript

use wasm_bindgen::prelude::*;

use crate::pose::{VALUES_XYZ, VALUES_XYZV};

/// Errors raised when JS passes input the counter cannot accept
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BridgeError {
    InvalidBufferLength(usize),
    InvalidThresholds { down: f32, up: f32, min_range: f32 },
    InvalidVisibility(f32),
}

impl From<BridgeError> for JsValue {
    fn from(err: BridgeError) -> Self {
        match err {
            BridgeError::InvalidBufferLength(len) => JsValue::from_str(&format!(
                "Invalid landmark data length: {} (expected 0, {} or {})",
                len, VALUES_XYZ, VALUES_XYZV
            )),
            BridgeError::InvalidThresholds { down, up, min_range } => JsValue::from_str(&format!(
                "Invalid thresholds: down={} up={} min_range={} (need up < down, min_range >= 0)",
                down, up, min_range
            )),
            BridgeError::InvalidVisibility(v) => JsValue::from_str(&format!(
                "Invalid visibility floor: {} (expected 0-1)",
                v
            )),
        }
    }
}

/// Accept an empty buffer (no pose) or a full MediaPipe buffer
pub fn check_buffer(data: &[f32]) -> Result<(), BridgeError> {
    match data.len() {
        0 | VALUES_XYZ | VALUES_XYZV => Ok(()),
        len => Err(BridgeError::InvalidBufferLength(len)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_lengths() {
        assert!(check_buffer(&[]).is_ok());
        assert!(check_buffer(&[0.0; VALUES_XYZ]).is_ok());
        assert!(check_buffer(&[0.0; VALUES_XYZV]).is_ok());
        assert_eq!(check_buffer(&[0.0; 98]), Err(BridgeError::InvalidBufferLength(98)));
    }
}
