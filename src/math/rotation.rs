use glam::{EulerRot, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Euler decomposition order for rotation snapshots and per-bone clamps.
///
/// Source rigs disagree on this, so it travels with the data instead of
/// being baked into the solvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RotationOrder {
    #[default]
    #[serde(rename = "XYZ")]
    Xyz,
    #[serde(rename = "XZY")]
    Xzy,
    #[serde(rename = "YXZ")]
    Yxz,
    #[serde(rename = "YZX")]
    Yzx,
    #[serde(rename = "ZXY")]
    Zxy,
    #[serde(rename = "ZYX")]
    Zyx,
}

impl RotationOrder {
    pub fn euler(self) -> EulerRot {
        match self {
            RotationOrder::Xyz => EulerRot::XYZ,
            RotationOrder::Xzy => EulerRot::XZY,
            RotationOrder::Yxz => EulerRot::YXZ,
            RotationOrder::Yzx => EulerRot::YZX,
            RotationOrder::Zxy => EulerRot::ZXY,
            RotationOrder::Zyx => EulerRot::ZYX,
        }
    }
}

/// Rotation that maps `axis` onto `direction`. Both inputs may be
/// unnormalized; degenerate inputs yield the identity.
pub fn aim(axis: Vec3, direction: Vec3) -> Quat {
    let from = axis.normalize_or_zero();
    let to = direction.normalize_or_zero();

    if from.length_squared() < 0.0001 || to.length_squared() < 0.0001 {
        return Quat::IDENTITY;
    }

    Quat::from_rotation_arc(from, to)
}

/// Clamps each Euler axis of `rotation` independently to `[min, max]`
/// radians, decomposing and rebuilding in the given order.
pub fn clamp_euler(rotation: Quat, order: RotationOrder, min: Vec3, max: Vec3) -> Quat {
    let (a, b, c) = rotation.to_euler(order.euler());
    Quat::from_euler(
        order.euler(),
        a.clamp(min.x, max.x),
        b.clamp(min.y, max.y),
        c.clamp(min.z, max.z),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

    #[test]
    fn aim_maps_axis_onto_direction() {
        let q = aim(Vec3::Y, Vec3::X);
        assert!((q * Vec3::Y - Vec3::X).length() < 1e-5);

        let q = aim(Vec3::Y, Vec3::new(1.0, 1.0, 0.0));
        let rotated = q * Vec3::Y;
        let expected = Vec3::new(1.0, 1.0, 0.0).normalize();
        assert!((rotated - expected).length() < 1e-5);
    }

    #[test]
    fn aim_handles_degenerate_inputs() {
        assert_eq!(aim(Vec3::ZERO, Vec3::X), Quat::IDENTITY);
        assert_eq!(aim(Vec3::Y, Vec3::ZERO), Quat::IDENTITY);
    }

    #[test]
    fn aim_handles_opposite_direction() {
        let q = aim(Vec3::Y, Vec3::NEG_Y);
        assert!((q * Vec3::Y - Vec3::NEG_Y).length() < 1e-4);
    }

    #[test]
    fn clamp_euler_limits_each_axis() {
        let q = Quat::from_rotation_z(FRAC_PI_2);
        let clamped = clamp_euler(
            q,
            RotationOrder::Xyz,
            Vec3::splat(-FRAC_PI_4),
            Vec3::splat(FRAC_PI_4),
        );
        let (_, _, z) = clamped.to_euler(EulerRot::XYZ);
        assert!((z - FRAC_PI_4).abs() < 1e-5);
    }

    #[test]
    fn clamp_euler_passes_in_range_rotation_through() {
        let q = Quat::from_rotation_x(0.3);
        let clamped = clamp_euler(q, RotationOrder::Xyz, Vec3::splat(-1.0), Vec3::splat(1.0));
        assert!(q.angle_between(clamped) < 1e-5);
    }

    #[test]
    fn rotation_order_serializes_as_convention_string() {
        let json = serde_json::to_string(&RotationOrder::Zxy).unwrap();
        assert_eq!(json, "\"ZXY\"");
        let back: RotationOrder = serde_json::from_str("\"YXZ\"").unwrap();
        assert_eq!(back, RotationOrder::Yxz);
    }
}
