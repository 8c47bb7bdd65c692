use glam::{Quat, Vec3};

use crate::math::{self, RotationOrder};

/// Per-bone rotational clamp, applied after a chain solve. Bounds are
/// degrees per Euler axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationConstraint {
    pub min_degrees: Vec3,
    pub max_degrees: Vec3,
}

impl RotationConstraint {
    pub fn new(min_degrees: Vec3, max_degrees: Vec3) -> Self {
        Self {
            min_degrees,
            max_degrees,
        }
    }

    /// Symmetric bounds: each axis clamped to `[-degrees, +degrees]`.
    pub fn symmetric(degrees: Vec3) -> Self {
        Self {
            min_degrees: -degrees,
            max_degrees: degrees,
        }
    }

    /// Clamps each Euler axis of `rotation` independently, decomposed in
    /// `order`.
    pub fn clamp(&self, rotation: Quat, order: RotationOrder) -> Quat {
        math::clamp_euler(
            rotation,
            order,
            Vec3::new(
                self.min_degrees.x.to_radians(),
                self.min_degrees.y.to_radians(),
                self.min_degrees.z.to_radians(),
            ),
            Vec3::new(
                self.max_degrees.x.to_radians(),
                self.max_degrees.y.to_radians(),
                self.max_degrees.z.to_radians(),
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::EulerRot;

    #[test]
    fn clamp_limits_out_of_range_axes() {
        let constraint = RotationConstraint::symmetric(Vec3::splat(45.0));
        let wide = Quat::from_rotation_x(120f32.to_radians());

        let clamped = constraint.clamp(wide, RotationOrder::Xyz);
        let (x, _, _) = clamped.to_euler(EulerRot::XYZ);
        assert!((x - 45f32.to_radians()).abs() < 1e-4);
    }

    #[test]
    fn clamp_leaves_in_range_rotations_alone() {
        let constraint = RotationConstraint::new(Vec3::splat(-90.0), Vec3::splat(90.0));
        let q = Quat::from_rotation_y(0.5);
        assert!(constraint.clamp(q, RotationOrder::Xyz).angle_between(q) < 1e-4);
    }
}
