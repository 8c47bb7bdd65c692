use glam::Vec3;
use thiserror::Error;

use crate::math::RotationOrder;
use crate::rig::Skeleton;

/// Chain construction is a setup-time programmer action; malformed input
/// fails fast instead of degrading at solve time.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChainError {
    #[error("chain requires at least 2 bones, got {count}")]
    TooFewBones { count: usize },
    #[error("bone '{0}' not found in skeleton")]
    UnknownBone(String),
}

/// Ordered run of bones from a root toward an end effector, with the
/// per-solve budget and the cached effector offset.
#[derive(Debug, Clone)]
pub struct Chain {
    pub(crate) bones: Vec<String>,
    pub(crate) effector_offset: Vec3,
    pub(crate) tolerance: f32,
    pub(crate) max_iterations: u32,
    pub(crate) rotation_order: RotationOrder,
}

impl Chain {
    pub fn builder() -> ChainBuilder {
        ChainBuilder::new()
    }

    pub fn bone_names(&self) -> impl Iterator<Item = &str> {
        self.bones.iter().map(String::as_str)
    }

    pub fn bone_count(&self) -> usize {
        self.bones.len()
    }

    pub fn effector_offset(&self) -> Vec3 {
        self.effector_offset
    }

    pub fn tolerance(&self) -> f32 {
        self.tolerance
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    pub fn rotation_order(&self) -> RotationOrder {
        self.rotation_order
    }
}

pub struct ChainBuilder {
    bones: Vec<String>,
    tolerance: f32,
    max_iterations: u32,
    rotation_order: RotationOrder,
}

impl ChainBuilder {
    pub fn new() -> Self {
        Self {
            bones: Vec::new(),
            tolerance: 0.01,
            max_iterations: 10,
            rotation_order: RotationOrder::default(),
        }
    }

    pub fn bone(mut self, name: &str) -> Self {
        self.bones.push(name.to_string());
        self
    }

    pub fn bones<'a>(mut self, names: impl IntoIterator<Item = &'a str>) -> Self {
        self.bones.extend(names.into_iter().map(str::to_string));
        self
    }

    pub fn tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn rotation_order(mut self, order: RotationOrder) -> Self {
        self.rotation_order = order;
        self
    }

    /// Validates the bone run against `skeleton` and derives the
    /// end-effector offset: the last bone's first child if it has one,
    /// else that bone's own local offset.
    pub fn build(self, skeleton: &Skeleton) -> Result<Chain, ChainError> {
        if self.bones.len() < 2 {
            return Err(ChainError::TooFewBones {
                count: self.bones.len(),
            });
        }
        for name in &self.bones {
            let node = skeleton
                .node(name)
                .ok_or_else(|| ChainError::UnknownBone(name.clone()))?;
            if !node.is_bone() {
                return Err(ChainError::UnknownBone(name.clone()));
            }
        }

        let last = self.bones.last().expect("validated non-empty");
        let effector_offset = match skeleton.first_child_of(last) {
            Some(child) => child.local.position,
            None => skeleton
                .node(last)
                .expect("validated above")
                .local
                .position,
        };

        Ok(Chain {
            bones: self.bones,
            effector_offset,
            tolerance: self.tolerance,
            max_iterations: self.max_iterations,
            rotation_order: self.rotation_order,
        })
    }
}

impl Default for ChainBuilder {
    fn default() -> Self {
        Self::new()
    }
}
