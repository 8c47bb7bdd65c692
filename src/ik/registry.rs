use std::collections::HashMap;

use glam::{Quat, Vec3};

use super::chain::{Chain, ChainError};
use super::constraint::RotationConstraint;
use super::solver::FabrikSolver;
use crate::math;
use crate::rig::Skeleton;

// Degenerate zero-length bones would collapse FABRIK directions.
const MIN_BONE_LENGTH: f32 = 0.1;

/// Named chains for one skeleton. Every accessor is total: unknown names
/// yield `false`, `None`, or an empty result, since chains come and go
/// over the UI lifecycle.
#[derive(Debug, Default)]
pub struct ChainRegistry {
    chains: HashMap<String, Chain>,
    constraints: HashMap<String, RotationConstraint>,
}

impl ChainRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a chain with the default iteration budget. Use
    /// [`Chain::builder`] with [`insert`](Self::insert) for custom budgets.
    pub fn create_chain(
        &mut self,
        skeleton: &Skeleton,
        name: &str,
        bones: &[&str],
    ) -> Result<(), ChainError> {
        let chain = Chain::builder().bones(bones.iter().copied()).build(skeleton)?;
        self.insert(name, chain);
        Ok(())
    }

    pub fn insert(&mut self, name: &str, chain: Chain) {
        log::debug!("registered chain '{name}' with {} bones", chain.bone_count());
        self.chains.insert(name.to_string(), chain);
    }

    /// Records a rotational clamp for `bone`, applied after every solve
    /// that poses it.
    pub fn set_constraint(&mut self, bone: &str, min_degrees: Vec3, max_degrees: Vec3) {
        self.constraints
            .insert(bone.to_string(), RotationConstraint::new(min_degrees, max_degrees));
    }

    pub fn constraint(&self, bone: &str) -> Option<&RotationConstraint> {
        self.constraints.get(bone)
    }

    /// Drives the chain's end effector toward `target`, writing bone
    /// rotations into `skeleton`.
    ///
    /// Returns `true` iff the solve converged within tolerance. The
    /// best-effort pose is applied either way: an unreachable target
    /// stretches the chain straight at it, and an exhausted iteration
    /// budget keeps the closest pose found.
    pub fn solve(&self, skeleton: &mut Skeleton, name: &str, target: Vec3) -> bool {
        let Some(chain) = self.chains.get(name) else {
            log::debug!("solve requested for unknown chain '{name}'");
            return false;
        };
        let Some(mut positions) = Self::joint_positions(skeleton, chain) else {
            return false;
        };

        let lengths: Vec<f32> = positions
            .windows(2)
            .map(|w| w[0].distance(w[1]).max(MIN_BONE_LENGTH))
            .collect();

        let result = FabrikSolver::solve(
            &mut positions,
            &lengths,
            target,
            chain.tolerance,
            chain.max_iterations,
        );
        if !result.converged {
            log::trace!(
                "chain '{name}' stopped {:.4} from target after {} iterations",
                result.final_distance,
                result.iterations
            );
        }

        self.apply_rotations(skeleton, chain, &positions);
        result.converged
    }

    /// World positions of every chain joint, root first, end effector
    /// last. `None` if the skeleton no longer has one of the bones.
    fn joint_positions(skeleton: &Skeleton, chain: &Chain) -> Option<Vec<Vec3>> {
        let mut positions = Vec::with_capacity(chain.bones.len() + 1);
        for bone in &chain.bones {
            positions.push(skeleton.world_position(bone)?);
        }

        let last = chain.bones.last()?;
        let tip = skeleton
            .world_transform(last)?
            .transform_point(chain.effector_offset);
        positions.push(tip);
        Some(positions)
    }

    /// Converts the solved joint-position array into local bone rotations,
    /// root first so each child sees its parent's updated orientation.
    fn apply_rotations(&self, skeleton: &mut Skeleton, chain: &Chain, positions: &[Vec3]) {
        let axis = skeleton.bone_axis();

        for (i, bone) in chain.bones.iter().enumerate() {
            let dir = positions[i + 1] - positions[i];
            if dir.length_squared() < 1e-8 {
                continue;
            }

            let world = math::aim(axis, dir);
            let parent_rotation = skeleton
                .node(bone)
                .and_then(|n| n.parent)
                .map(|p| skeleton.world_rotation_at(p))
                .unwrap_or(Quat::IDENTITY);

            let mut local = parent_rotation.inverse() * world;
            if let Some(constraint) = self.constraints.get(bone) {
                local = constraint.clamp(local, chain.rotation_order);
            }
            skeleton.set_local_rotation(bone, local);
        }
    }

    pub fn chain(&self, name: &str) -> Option<&Chain> {
        self.chains.get(name)
    }

    pub fn chain_names(&self) -> Vec<&str> {
        self.chains.keys().map(String::as_str).collect()
    }

    /// Bone names of a chain, empty for an unknown name.
    pub fn chain_bone_names(&self, name: &str) -> Vec<&str> {
        self.chains
            .get(name)
            .map(|c| c.bone_names().collect())
            .unwrap_or_default()
    }

    pub fn remove_chain(&mut self, name: &str) -> bool {
        self.chains.remove(name).is_some()
    }

    pub fn clear(&mut self) {
        self.chains.clear();
        self.constraints.clear();
    }

    pub fn len(&self) -> usize {
        self.chains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    /// Current world position of a chain's end effector, `None` for an
    /// unknown chain or a skeleton that lost the tip bone.
    pub fn end_effector_position(&self, skeleton: &Skeleton, name: &str) -> Option<Vec3> {
        let chain = self.chains.get(name)?;
        let last = chain.bones.last()?;
        Some(
            skeleton
                .world_transform(last)?
                .transform_point(chain.effector_offset),
        )
    }
}
