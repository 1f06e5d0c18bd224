//! Pose module - boundary to the pose-estimation provider
//!
//! Re-exports only. All logic in submodules.

mod joints;
mod angles;
mod estimator;
mod mediapipe;

pub use joints::{JointMap, JointName, JointTriple, Landmark, Side, is_valid_position};
pub use angles::calculate_joint_angle;
pub use estimator::PoseEstimator;
pub use mediapipe::{
    MediaPipePose, PoseLandmarks,
    LANDMARK_COUNT, VALUES_XYZ, VALUES_XYZV, DEFAULT_MIN_VISIBILITY,
    LEFT_SHOULDER, RIGHT_SHOULDER, LEFT_HIP, RIGHT_HIP, LEFT_KNEE, RIGHT_KNEE,
};
