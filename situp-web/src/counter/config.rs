//! Counter thresholds

/// Angle thresholds in degrees
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Thresholds {
    /// Above this the subject is lying down
    pub down_angle: f32,
    /// Below this the subject is sitting up
    pub up_angle: f32,
    /// Minimum max-min spread of recent angles for a rep to count
    pub min_range_of_motion: f32,
}

impl Thresholds {
    pub fn new(down_angle: f32, up_angle: f32, min_range_of_motion: f32) -> Option<Self> {
        let t = Self { down_angle, up_angle, min_range_of_motion };
        t.is_valid().then_some(t)
    }

    /// Sit-up preset, lenient enough for a phone camera at floor level
    pub fn for_situps() -> Self {
        Self {
            down_angle: 140.0,
            up_angle: 70.0,
            min_range_of_motion: 50.0,
        }
    }

    /// Finite, non-negative range, and the up threshold strictly below down
    pub fn is_valid(&self) -> bool {
        self.down_angle.is_finite()
            && self.up_angle.is_finite()
            && self.min_range_of_motion.is_finite()
            && self.min_range_of_motion >= 0.0
            && self.up_angle < self.down_angle
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::for_situps()
    }
}
