//! Local frames for tube cross-sections.

use glam::Vec3;

/// Fixed, non axis-aligned reference used to derive a ring's side vector.
///
/// Any fixed offset works; it only has to stay the same between frames so
/// that rings do not twist.
pub const SIDE_REFERENCE: Vec3 = Vec3::new(0.123564, 0.34675, 0.756892);

/// Used instead of [`SIDE_REFERENCE`] when the tangent is parallel to it.
const FALLBACK_REFERENCE: Vec3 = Vec3::new(0.756892, -0.123564, 0.34675);

/// Tangent for leading points that have no tangent of their own.
pub(crate) const DEFAULT_TANGENT: Vec3 = Vec3::Y;

/// Squared cross-product length below which the tangent counts as parallel.
const PARALLEL_EPSILON: f32 = 1e-6;

/// Orthonormal frame of one ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingFrame {
    /// Tangent of the centerline.
    pub forward: Vec3,
    /// First axis of the ring plane (angle 0).
    pub side: Vec3,
    /// Second axis of the ring plane (angle pi/2).
    pub up: Vec3,
}

impl RingFrame {
    /// Builds a frame around a unit tangent.
    pub fn from_forward(forward: Vec3) -> Self {
        let side = forward.cross(forward + SIDE_REFERENCE);
        let side = if side.length_squared() > PARALLEL_EPSILON {
            side.normalize()
        } else {
            forward.cross(forward + FALLBACK_REFERENCE).normalize_or_zero()
        };
        let up = forward.cross(side).normalize_or_zero();
        Self { forward, side, up }
    }

    /// Frame of the centerline point at `index`, as used for the tube ring.
    ///
    /// A point without a tangent of its own (coincident with or folded back
    /// onto its neighbours) takes the tangent of the nearest earlier point
    /// that has one, or `+Y` if there is none. Returns `None` if `index` is
    /// out of range.
    pub fn at(positions: &[Vec3], index: usize) -> Option<Self> {
        if index >= positions.len() {
            return None;
        }
        let forward = (0..=index)
            .rev()
            .map(|i| centerline_tangent(positions, i))
            .find(|tangent| *tangent != Vec3::ZERO)
            .unwrap_or(DEFAULT_TANGENT);
        Some(Self::from_forward(forward))
    }
}

/// Average of the unit directions to the previous and next point.
///
/// End points only have one neighbour. Zero when the neighbours coincide
/// with the point or cancel out.
pub(crate) fn centerline_tangent(positions: &[Vec3], index: usize) -> Vec3 {
    let mut forward = Vec3::ZERO;
    if index > 0 {
        forward += (positions[index] - positions[index - 1]).normalize_or_zero();
    }
    if index + 1 < positions.len() {
        forward += (positions[index + 1] - positions[index]).normalize_or_zero();
    }
    forward.normalize_or_zero()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_orthonormal(frame: RingFrame) {
        assert!((frame.forward.length() - 1.0).abs() < 1e-5);
        assert!((frame.side.length() - 1.0).abs() < 1e-5);
        assert!((frame.up.length() - 1.0).abs() < 1e-5);
        assert!(frame.forward.dot(frame.side).abs() < 1e-5);
        assert!(frame.forward.dot(frame.up).abs() < 1e-5);
        assert!(frame.side.dot(frame.up).abs() < 1e-5);
    }

    #[test]
    fn test_frame_is_orthonormal() {
        for forward in [Vec3::X, Vec3::Y, Vec3::Z, Vec3::NEG_Z, Vec3::ONE.normalize()] {
            assert_orthonormal(RingFrame::from_forward(forward));
        }
    }

    #[test]
    fn test_frame_parallel_to_reference() {
        let frame = RingFrame::from_forward(SIDE_REFERENCE.normalize());
        assert_orthonormal(frame);
    }

    #[test]
    fn test_tangent_at_ends_uses_single_neighbour() {
        let path = [Vec3::ZERO, Vec3::X, Vec3::new(1.0, 1.0, 0.0)];
        assert_eq!(centerline_tangent(&path, 0), Vec3::X);
        assert_eq!(centerline_tangent(&path, 2), Vec3::Y);
    }

    #[test]
    fn test_tangent_averages_neighbours() {
        let path = [Vec3::ZERO, Vec3::X, Vec3::new(1.0, 1.0, 0.0)];
        let expected = Vec3::new(1.0, 1.0, 0.0).normalize();
        assert!(centerline_tangent(&path, 1).distance(expected) < 1e-6);
    }

    #[test]
    fn test_frame_at_out_of_range() {
        assert!(RingFrame::at(&[Vec3::ZERO, Vec3::X], 2).is_none());
    }

    #[test]
    fn test_frame_at_collapsed_point() {
        let frame = RingFrame::at(&[Vec3::ONE, Vec3::ONE], 0).unwrap();
        assert_eq!(frame.forward, Vec3::Y);
        assert_orthonormal(frame);
    }

    #[test]
    fn test_frame_at_folded_point_reuses_earlier_tangent() {
        let path = [Vec3::ZERO, Vec3::X, Vec3::ZERO];
        assert_eq!(RingFrame::at(&path, 1).unwrap().forward, Vec3::X);
        assert_eq!(RingFrame::at(&path, 2).unwrap().forward, Vec3::NEG_X);
    }
}
