//! Named joints and the per-frame joint map
//!
//! The pose provider hands over a mapping from joint name to coordinate.
//! Only the six joints forming the two torso triples matter for sit-ups.

use std::collections::HashMap;

/// Body side of a joint triple
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Lookup order for torso extraction: left first, right as fallback
    pub const PREFERRED: [Side; 2] = [Side::Left, Side::Right];
}

/// Joints the counter knows how to read
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum JointName {
    LeftShoulder,
    RightShoulder,
    LeftHip,
    RightHip,
    LeftKnee,
    RightKnee,
}

impl JointName {
    /// (shoulder, hip, knee) for one side
    pub fn triple(side: Side) -> [JointName; 3] {
        match side {
            Side::Left => [JointName::LeftShoulder, JointName::LeftHip, JointName::LeftKnee],
            Side::Right => [JointName::RightShoulder, JointName::RightHip, JointName::RightKnee],
        }
    }
}

/// A single landmark point (normalized image coordinates)
///
/// 2-D providers leave `z` at 0.0.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Landmark {
    pub x: f32,  // 0-1 normalized
    pub y: f32,  // 0-1 normalized
    pub z: f32,  // Relative depth
}

impl Landmark {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn planar(x: f32, y: f32) -> Self {
        Self { x, y, z: 0.0 }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// Shoulder, hip and knee of one side
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JointTriple {
    pub side: Side,
    pub shoulder: Landmark,
    pub hip: Landmark,
    pub knee: Landmark,
}

impl JointTriple {
    /// Whether every coordinate is usable for angle computation
    pub fn is_well_formed(&self) -> bool {
        self.shoulder.is_finite() && self.hip.is_finite() && self.knee.is_finite()
    }
}

/// Joint name → coordinate for the current frame
///
/// Empty or partial when detection failed. The counter only reads it.
#[derive(Clone, Debug, Default)]
pub struct JointMap {
    joints: HashMap<JointName, Landmark>,
}

impl JointMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: JointName, landmark: Landmark) {
        self.joints.insert(name, landmark);
    }

    pub fn get(&self, name: JointName) -> Option<Landmark> {
        self.joints.get(&name).copied()
    }

    pub fn contains(&self, name: JointName) -> bool {
        self.joints.contains_key(&name)
    }

    pub fn len(&self) -> usize {
        self.joints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.joints.is_empty()
    }

    /// True when shoulder, hip and knee of `side` are all present
    pub fn has_triple(&self, side: Side) -> bool {
        JointName::triple(side).iter().all(|j| self.contains(*j))
    }

    /// Shoulder, hip and knee of `side`, if all three were detected
    pub fn triple(&self, side: Side) -> Option<JointTriple> {
        let [shoulder, hip, knee] = JointName::triple(side);
        Some(JointTriple {
            side,
            shoulder: self.get(shoulder)?,
            hip: self.get(hip)?,
            knee: self.get(knee)?,
        })
    }
}

impl FromIterator<(JointName, Landmark)> for JointMap {
    fn from_iter<I: IntoIterator<Item = (JointName, Landmark)>>(iter: I) -> Self {
        Self { joints: iter.into_iter().collect() }
    }
}

/// Check that the subject is positioned for sit-ups
///
/// A complete triple on either side is enough. Posture itself (lying
/// horizontally, knees bent) is not checked.
pub fn is_valid_position(joints: &JointMap) -> bool {
    Side::PREFERRED.iter().any(|side| joints.has_triple(*side))
}
