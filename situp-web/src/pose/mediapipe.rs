//! MediaPipe BlazePose landmark buffer
//!
//! JavaScript runs the pose model and hands over a flat Float32Array:
//! - 33 landmarks × 3 values (x, y, z), or
//! - 33 landmarks × 4 values (x, y, z, visibility)
//! An empty buffer means no person was detected this frame.

use super::estimator::PoseEstimator;
use super::joints::{JointMap, JointName, Landmark};

// ============================================================================
// LANDMARK INDICES (MediaPipe Pose - 33 total)
// ============================================================================

pub const LANDMARK_COUNT: usize = 33;
pub const LEFT_SHOULDER: usize = 11;
pub const RIGHT_SHOULDER: usize = 12;
pub const LEFT_HIP: usize = 23;
pub const RIGHT_HIP: usize = 24;
pub const LEFT_KNEE: usize = 25;
pub const RIGHT_KNEE: usize = 26;

/// Buffer length without visibility
pub const VALUES_XYZ: usize = LANDMARK_COUNT * 3;

/// Buffer length with visibility
pub const VALUES_XYZV: usize = LANDMARK_COUNT * 4;

/// Joints below this visibility are treated as undetected
pub const DEFAULT_MIN_VISIBILITY: f32 = 0.5;

/// MediaPipe index for each joint the counter reads
const JOINT_INDICES: [(JointName, usize); 6] = [
    (JointName::LeftShoulder, LEFT_SHOULDER),
    (JointName::RightShoulder, RIGHT_SHOULDER),
    (JointName::LeftHip, LEFT_HIP),
    (JointName::RightHip, RIGHT_HIP),
    (JointName::LeftKnee, LEFT_KNEE),
    (JointName::RightKnee, RIGHT_KNEE),
];

/// One frame of decoded landmarks
#[derive(Clone, Debug)]
pub struct PoseLandmarks {
    pub points: [Landmark; LANDMARK_COUNT],
    /// Per-landmark visibility, `None` when the buffer carried none
    pub visibility: Option<[f32; LANDMARK_COUNT]>,
}

impl PoseLandmarks {
    /// Decode a flat buffer. `None` for empty or wrongly-sized input.
    pub fn from_flat(data: &[f32]) -> Option<Self> {
        let stride = match data.len() {
            VALUES_XYZ => 3,
            VALUES_XYZV => 4,
            _ => return None,
        };

        let mut points = [Landmark::default(); LANDMARK_COUNT];
        let mut visibility = [1.0; LANDMARK_COUNT];

        for (i, chunk) in data.chunks_exact(stride).enumerate() {
            points[i] = Landmark::new(chunk[0], chunk[1], chunk[2]);
            if stride == 4 {
                visibility[i] = chunk[3];
            }
        }

        Some(Self {
            points,
            visibility: (stride == 4).then_some(visibility),
        })
    }

    /// Visibility of a landmark; 1.0 when the buffer had none
    pub fn visibility(&self, index: usize) -> f32 {
        self.visibility.map_or(1.0, |v| v[index])
    }
}

/// Pose estimator over MediaPipe landmark buffers
pub struct MediaPipePose {
    /// Minimum visibility for a joint to appear in the key-point map
    min_visibility: f32,
}

impl MediaPipePose {
    pub fn new() -> Self {
        Self {
            min_visibility: DEFAULT_MIN_VISIBILITY,
        }
    }

    /// Set visibility floor (0-1)
    pub fn set_min_visibility(&mut self, min_visibility: f32) {
        self.min_visibility = min_visibility;
    }

    pub fn min_visibility(&self) -> f32 {
        self.min_visibility
    }
}

impl Default for MediaPipePose {
    fn default() -> Self {
        Self::new()
    }
}

impl PoseEstimator for MediaPipePose {
    type Frame = [f32];
    type Landmarks = PoseLandmarks;

    fn landmarks(&mut self, frame: &[f32]) -> Option<PoseLandmarks> {
        PoseLandmarks::from_flat(frame)
    }

    fn key_points(&self, landmarks: Option<&PoseLandmarks>) -> JointMap {
        let Some(landmarks) = landmarks else {
            return JointMap::new();
        };

        JOINT_INDICES
            .iter()
            .filter(|(_, index)| landmarks.visibility(*index) >= self.min_visibility)
            .map(|(joint, index)| (*joint, landmarks.points[*index]))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::Side;

    fn flat_with_visibility(visible: f32) -> Vec<f32> {
        let mut data = vec![0.0; VALUES_XYZV];
        for i in 0..LANDMARK_COUNT {
            data[i * 4] = i as f32 / 100.0;
            data[i * 4 + 1] = 0.5;
            data[i * 4 + 3] = visible;
        }
        data
    }

    #[test]
    fn test_empty_buffer_means_no_pose() {
        let mut pose = MediaPipePose::new();
        assert!(pose.landmarks(&[]).is_none());
        assert!(pose.key_points(None).is_empty());
    }

    #[test]
    fn test_xyz_buffer_maps_all_joints() {
        let mut data = vec![0.0; VALUES_XYZ];
        data[LEFT_HIP * 3] = 0.42;
        data[LEFT_HIP * 3 + 1] = 0.61;

        let mut pose = MediaPipePose::new();
        let landmarks = pose.landmarks(&data).unwrap();
        assert!(landmarks.visibility.is_none());

        let joints = pose.key_points(Some(&landmarks));
        assert_eq!(joints.len(), 6);
        let hip = joints.get(JointName::LeftHip).unwrap();
        assert!((hip.x - 0.42).abs() < 1e-6);
        assert!((hip.y - 0.61).abs() < 1e-6);
    }

    #[test]
    fn test_low_visibility_joints_are_dropped() {
        let mut data = flat_with_visibility(0.9);
        data[RIGHT_KNEE * 4 + 3] = 0.1;

        let mut pose = MediaPipePose::new();
        let landmarks = pose.landmarks(&data).unwrap();
        let joints = pose.key_points(Some(&landmarks));

        assert_eq!(joints.len(), 5);
        assert!(joints.has_triple(Side::Left));
        assert!(!joints.has_triple(Side::Right));
    }

    #[test]
    fn test_visibility_floor_is_configurable() {
        let data = flat_with_visibility(0.3);
        let mut pose = MediaPipePose::new();
        let landmarks = pose.landmarks(&data).unwrap();
        assert!(pose.key_points(Some(&landmarks)).is_empty());

        pose.set_min_visibility(0.2);
        assert_eq!(pose.key_points(Some(&landmarks)).len(), 6);
    }

    #[test]
    fn test_wrong_length_is_rejected() {
        assert!(PoseLandmarks::from_flat(&[0.0; 50]).is_none());
    }
}
