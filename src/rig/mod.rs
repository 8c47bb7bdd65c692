//! Skeleton data model module
//!
//! Owns the node hierarchy, the freeform keypoint map, and the plain-object
//! pose snapshots exchanged with the host application's persistence layer.

mod character;
mod keypoints;
mod node;
mod pose;
mod skeleton;

pub use character::Rig;
pub use keypoints::KeypointMap;
pub use node::{Node, NodeKind};
pub use pose::{JointSnapshot, PoseSnapshot};
pub use skeleton::Skeleton;
