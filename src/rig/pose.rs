use std::collections::HashMap;

use glam::Quat;
use serde::{Deserialize, Serialize};

use super::keypoints::KeypointMap;
use super::skeleton::Skeleton;
use crate::math::RotationOrder;

/// One entry of a pose snapshot: a keypoint position, or a bone's local
/// rotation as Euler angles in radians tagged with their decomposition
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JointSnapshot {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    #[serde(
        rename = "rotationOrder",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub rotation_order: Option<RotationOrder>,
}

/// Plain-object pose snapshot exchanged with the host's persistence layer.
/// The crate accepts and emits these without caring how they are stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PoseSnapshot {
    entries: HashMap<String, JointSnapshot>,
}

impl PoseSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, entry: JointSnapshot) {
        self.entries.insert(name.to_string(), entry);
    }

    pub fn get(&self, name: &str) -> Option<&JointSnapshot> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &JointSnapshot)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn from_keypoints(keypoints: &KeypointMap) -> Self {
        let entries = keypoints
            .iter()
            .map(|(name, p)| {
                (
                    name.to_string(),
                    JointSnapshot {
                        x: p.x,
                        y: p.y,
                        z: p.z,
                        rotation_order: None,
                    },
                )
            })
            .collect();
        Self { entries }
    }

    pub fn apply_to_keypoints(&self, keypoints: &mut KeypointMap) {
        for (name, entry) in &self.entries {
            keypoints.set(name, glam::Vec3::new(entry.x, entry.y, entry.z));
        }
    }

    /// Captures every bone's local rotation, decomposed in `order`.
    pub fn from_skeleton(skeleton: &Skeleton, order: RotationOrder) -> Self {
        let entries = skeleton
            .bones()
            .map(|bone| {
                let (x, y, z) = bone.local.rotation.to_euler(order.euler());
                (
                    bone.name.clone(),
                    JointSnapshot {
                        x,
                        y,
                        z,
                        rotation_order: Some(order),
                    },
                )
            })
            .collect();
        Self { entries }
    }

    /// Applies stored rotations to matching bones. Names absent from the
    /// skeleton are skipped; entries without an order decode as XYZ.
    pub fn apply_to_skeleton(&self, skeleton: &mut Skeleton) {
        for (name, entry) in &self.entries {
            let order = entry.rotation_order.unwrap_or_default();
            let rotation = Quat::from_euler(order.euler(), entry.x, entry.y, entry.z);
            skeleton.set_local_rotation(name, rotation);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn keypoint_snapshot_round_trips() {
        let mut keypoints = KeypointMap::new();
        keypoints.set("wrist", Vec3::new(1.0, 2.0, 3.0));
        keypoints.set("elbow", Vec3::new(0.5, 1.0, 0.0));

        let snapshot = PoseSnapshot::from_keypoints(&keypoints);
        let mut restored = KeypointMap::new();
        snapshot.apply_to_keypoints(&mut restored);

        assert_eq!(restored, keypoints);
    }

    #[test]
    fn skeleton_snapshot_round_trips_rotations() {
        let mut skeleton = Skeleton::new();
        skeleton.add_bone("spine", None, Vec3::ZERO, 1.0);
        skeleton.add_bone("neck", Some("spine"), Vec3::Y, 0.5);
        skeleton.set_local_rotation("neck", Quat::from_euler(glam::EulerRot::XYZ, 0.2, 0.4, -0.1));

        let snapshot = PoseSnapshot::from_skeleton(&skeleton, RotationOrder::Xyz);

        let mut other = Skeleton::new();
        other.add_bone("spine", None, Vec3::ZERO, 1.0);
        other.add_bone("neck", Some("spine"), Vec3::Y, 0.5);
        snapshot.apply_to_skeleton(&mut other);

        let original = skeleton.local_rotation("neck").unwrap();
        let restored = other.local_rotation("neck").unwrap();
        assert!(original.angle_between(restored) < 1e-4);
    }

    #[test]
    fn snapshot_serializes_as_plain_objects() {
        let mut snapshot = PoseSnapshot::new();
        snapshot.insert(
            "head",
            JointSnapshot {
                x: 0.1,
                y: 0.2,
                z: 0.3,
                rotation_order: Some(RotationOrder::Zxy),
            },
        );

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["head"]["rotationOrder"], "ZXY");
        assert!((json["head"]["x"].as_f64().unwrap() - 0.1).abs() < 1e-6);

        let back: PoseSnapshot = serde_json::from_value(json).unwrap();
        assert_eq!(back.get("head").unwrap().rotation_order, Some(RotationOrder::Zxy));
    }

    #[test]
    fn position_entries_omit_the_rotation_order_field() {
        let mut keypoints = KeypointMap::new();
        keypoints.set("hip", Vec3::ZERO);
        let json = serde_json::to_value(PoseSnapshot::from_keypoints(&keypoints)).unwrap();
        assert!(json["hip"].get("rotationOrder").is_none());
    }

    #[test]
    fn unknown_names_are_skipped_on_apply() {
        let mut snapshot = PoseSnapshot::new();
        snapshot.insert(
            "ghost",
            JointSnapshot {
                x: 1.0,
                y: 0.0,
                z: 0.0,
                rotation_order: None,
            },
        );

        let mut skeleton = Skeleton::new();
        skeleton.add_bone("spine", None, Vec3::ZERO, 1.0);
        snapshot.apply_to_skeleton(&mut skeleton);
        assert!(skeleton.local_rotation("spine").unwrap().angle_between(Quat::IDENTITY) < 1e-6);
    }
}
