use glam::{Mat4, Quat, Vec3};

/// Rigid transform (position + rotation). Bones never scale: rest lengths
/// are fixed at capture time, so no scale component is carried.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.position)
    }

    /// Composes `self * child`: the child transform expressed in this
    /// transform's parent space.
    pub fn mul_transform(&self, child: &Self) -> Self {
        Self {
            position: self.transform_point(child.position),
            rotation: self.rotation * child.rotation,
        }
    }

    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.rotation * point + self.position
    }

    pub fn transform_direction(&self, direction: Vec3) -> Vec3 {
        self.rotation * direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn compose_applies_parent_rotation_to_child_offset() {
        let parent = Transform::new(Vec3::new(1.0, 0.0, 0.0), Quat::from_rotation_z(FRAC_PI_2));
        let child = Transform::from_position(Vec3::new(0.0, 1.0, 0.0));

        // Rotating +Y by 90 degrees around Z lands on -X, offset by the parent.
        let world = parent.mul_transform(&child);
        assert!((world.position - Vec3::new(0.0, 0.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn identity_is_neutral() {
        let t = Transform::new(Vec3::new(2.0, 3.0, 4.0), Quat::from_rotation_y(0.7));
        let composed = Transform::IDENTITY.mul_transform(&t);
        assert!((composed.position - t.position).length() < 1e-6);
        assert!(composed.rotation.angle_between(t.rotation) < 1e-6);
    }
}
