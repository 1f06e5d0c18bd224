//! Three-point joint angle using dot product
//!
//! Angle at the vertex between the vectors vertex→a and vertex→c.
//! Planar: depth from a monocular pose model is too noisy to include.

use nalgebra::Vector2;

use super::joints::Landmark;

/// Vectors shorter than this give no usable direction
const MIN_SEGMENT: f32 = 1e-4;

/// Calculate the angle at `vertex` in degrees
///
/// Uses dot product formula: cos(θ) = (v1 · v2) / (|v1| × |v2|)
///
/// For the torso (shoulder, hip, knee):
/// - ~180° = lying flat, legs extended
/// - ~45° = sitting up against bent knees
///
/// Returns NaN when either segment is degenerate or a coordinate is not
/// finite, so callers can treat the frame as unmeasurable.
pub fn calculate_joint_angle(a: &Landmark, vertex: &Landmark, c: &Landmark) -> f32 {
    let v1 = Vector2::new(a.x - vertex.x, a.y - vertex.y);
    let v2 = Vector2::new(c.x - vertex.x, c.y - vertex.y);

    let mag1 = v1.norm();
    let mag2 = v2.norm();

    if !(mag1 >= MIN_SEGMENT && mag2 >= MIN_SEGMENT) {
        return f32::NAN;
    }

    let cos_angle = (v1.dot(&v2) / (mag1 * mag2)).clamp(-1.0, 1.0);
    cos_angle.acos().to_degrees()
}
