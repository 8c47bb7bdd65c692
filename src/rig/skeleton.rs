use std::collections::HashMap;

use glam::{Quat, Vec3};

use super::node::{Node, NodeKind};
use crate::math::Transform;

/// One character's joint hierarchy. Owns every node; lifecycle follows the
/// loaded model (created on load, dropped on unload).
#[derive(Debug, Clone)]
pub struct Skeleton {
    nodes: Vec<Node>,
    index: HashMap<String, usize>,
    bone_axis: Vec3,
}

impl Default for Skeleton {
    fn default() -> Self {
        Self::new()
    }
}

impl Skeleton {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            // Rest-pose direction a bone points with identity rotation.
            bone_axis: Vec3::Y,
        }
    }

    /// Skeleton whose source rig uses a different rest-pose axis convention.
    pub fn with_bone_axis(axis: Vec3) -> Self {
        Self {
            bone_axis: axis,
            ..Self::new()
        }
    }

    pub fn bone_axis(&self) -> Vec3 {
        self.bone_axis
    }

    pub fn set_bone_axis(&mut self, axis: Vec3) {
        self.bone_axis = axis;
    }

    /// Adds a bone under `parent`. Returns the node index, or `None` if the
    /// name is taken or the parent does not exist.
    pub fn add_bone(
        &mut self,
        name: &str,
        parent: Option<&str>,
        local_position: Vec3,
        rest_length: f32,
    ) -> Option<usize> {
        self.add_node(name, parent, local_position, NodeKind::Bone { rest_length })
    }

    /// Adds non-bone scene structure (grouping null, attachment socket).
    pub fn add_group(
        &mut self,
        name: &str,
        parent: Option<&str>,
        local_position: Vec3,
    ) -> Option<usize> {
        self.add_node(name, parent, local_position, NodeKind::Group)
    }

    fn add_node(
        &mut self,
        name: &str,
        parent: Option<&str>,
        local_position: Vec3,
        kind: NodeKind,
    ) -> Option<usize> {
        if self.index.contains_key(name) {
            return None;
        }
        let parent_index = match parent {
            Some(p) => Some(*self.index.get(p)?),
            None => None,
        };

        let idx = self.nodes.len();
        self.nodes.push(Node {
            name: name.to_string(),
            parent: parent_index,
            local: Transform::from_position(local_position),
            kind,
        });
        self.index.insert(name.to_string(), idx);
        Some(idx)
    }

    pub fn node(&self, name: &str) -> Option<&Node> {
        self.index.get(name).map(|&i| &self.nodes[i])
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn bones(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.is_bone())
    }

    pub fn bone_names(&self) -> Vec<&str> {
        self.bones().map(|n| n.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// First child of `name` in insertion order, if any. Drives
    /// end-effector offset derivation for chain tips.
    pub fn first_child_of(&self, name: &str) -> Option<&Node> {
        let idx = self.index_of(name)?;
        self.nodes.iter().find(|n| n.parent == Some(idx))
    }

    pub fn rest_length(&self, name: &str) -> Option<f32> {
        self.node(name).and_then(Node::rest_length)
    }

    pub fn world_transform(&self, name: &str) -> Option<Transform> {
        self.index_of(name).map(|i| self.world_transform_at(i))
    }

    pub fn world_position(&self, name: &str) -> Option<Vec3> {
        self.world_transform(name).map(|t| t.position)
    }

    pub fn world_rotation(&self, name: &str) -> Option<Quat> {
        self.index_of(name).map(|i| self.world_rotation_at(i))
    }

    pub(crate) fn world_transform_at(&self, index: usize) -> Transform {
        let mut chain = vec![index];
        let mut current = index;
        while let Some(parent) = self.nodes[current].parent {
            chain.push(parent);
            current = parent;
        }

        chain
            .iter()
            .rev()
            .fold(Transform::IDENTITY, |acc, &i| {
                acc.mul_transform(&self.nodes[i].local)
            })
    }

    pub(crate) fn world_rotation_at(&self, index: usize) -> Quat {
        let mut rotation = self.nodes[index].local.rotation;
        let mut current = index;
        while let Some(parent) = self.nodes[current].parent {
            rotation = self.nodes[parent].local.rotation * rotation;
            current = parent;
        }
        rotation
    }

    pub fn local_rotation(&self, name: &str) -> Option<Quat> {
        self.node(name).map(|n| n.local.rotation)
    }

    pub fn set_local_rotation(&mut self, name: &str, rotation: Quat) -> bool {
        match self.index.get(name) {
            Some(&i) => {
                self.nodes[i].local.rotation = rotation;
                true
            }
            None => false,
        }
    }

    pub fn set_local_position(&mut self, name: &str, position: Vec3) -> bool {
        match self.index.get(name) {
            Some(&i) => {
                self.nodes[i].local.position = position;
                true
            }
            None => false,
        }
    }

    /// Re-captures every bone's rest length from the distance to its first
    /// child in the current pose. Bones without children keep their length.
    pub fn recalibrate_rest_lengths(&mut self) {
        let updates: Vec<(usize, f32)> = self
            .nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.is_bone())
            .filter_map(|(i, n)| {
                let child = self.first_child_of(&n.name)?;
                Some((i, child.local.position.length()))
            })
            .collect();

        for (i, length) in updates {
            if let NodeKind::Bone { rest_length } = &mut self.nodes[i].kind {
                *rest_length = length;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn two_bone_arm() -> Skeleton {
        let mut s = Skeleton::new();
        s.add_bone("upper", None, Vec3::ZERO, 1.0);
        s.add_bone("lower", Some("upper"), Vec3::Y, 1.0);
        s
    }

    #[test]
    fn world_position_composes_parent_transforms() {
        let mut s = two_bone_arm();
        assert_eq!(s.world_position("lower"), Some(Vec3::Y));

        s.set_local_rotation("upper", Quat::from_rotation_z(-FRAC_PI_2));
        let lower = s.world_position("lower").unwrap();
        assert!((lower - Vec3::X).length() < 1e-5);
    }

    #[test]
    fn duplicate_names_and_missing_parents_are_rejected() {
        let mut s = two_bone_arm();
        assert!(s.add_bone("upper", None, Vec3::ZERO, 1.0).is_none());
        assert!(s.add_bone("hand", Some("nope"), Vec3::Y, 0.5).is_none());
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn groups_are_excluded_from_bone_iteration() {
        let mut s = Skeleton::new();
        s.add_group("armature", None, Vec3::ZERO);
        s.add_bone("spine", Some("armature"), Vec3::ZERO, 1.0);
        assert_eq!(s.bone_names(), vec!["spine"]);
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn first_child_follows_insertion_order() {
        let mut s = two_bone_arm();
        s.add_bone("thumb", Some("lower"), Vec3::Y * 0.3, 0.3);
        s.add_bone("index", Some("lower"), Vec3::Y * 0.4, 0.4);
        assert_eq!(s.first_child_of("lower").unwrap().name, "thumb");
        assert!(s.first_child_of("index").is_none());
    }
}
