//! Pose-estimation provider seam
//!
//! Landmark extraction and the geometric angle are delegated to whatever
//! model produced the frame. The counter only sees this trait.

use super::angles::calculate_joint_angle;
use super::joints::{JointMap, Landmark};

/// Provider of landmarks, named key points and joint angles
pub trait PoseEstimator {
    /// Input the provider understands (image, landmark buffer, ...)
    type Frame: ?Sized;

    /// Raw landmarks as the provider represents them
    type Landmarks;

    /// Detect landmarks in a frame. `None` when no person was found.
    fn landmarks(&mut self, frame: &Self::Frame) -> Option<Self::Landmarks>;

    /// Map landmarks to named joints. Empty or partial on weak detection.
    fn key_points(&self, landmarks: Option<&Self::Landmarks>) -> JointMap;

    /// Angle in degrees at `vertex`
    fn angle(&self, a: &Landmark, vertex: &Landmark, c: &Landmark) -> f32 {
        calculate_joint_angle(a, vertex, c)
    }
}
