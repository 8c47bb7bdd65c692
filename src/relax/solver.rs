use glam::Vec3;

use super::lengths::LengthTable;
use super::priority::PriorityTable;
use crate::rig::KeypointMap;

// Edge vectors shorter than this have no usable direction.
const MIN_EDGE_LENGTH: f32 = 1e-5;

/// Priority-weighted distance-constraint relaxer for freeform keypoint
/// graphs.
///
/// Never errors: missing joints, zero-length edges, and unregistered pairs
/// all mean "no constraint applies". The pass cap bounds per-event cost,
/// not residual error.
#[derive(Debug, Clone)]
pub struct RelaxSolver {
    edges: Vec<(String, String)>,
    lengths: LengthTable,
    priorities: PriorityTable,
    max_passes: u32,
    tolerance: f32,
}

impl Default for RelaxSolver {
    fn default() -> Self {
        Self {
            edges: Vec::new(),
            lengths: LengthTable::new(),
            priorities: PriorityTable::new(),
            max_passes: 5,
            tolerance: 0.01,
        }
    }
}

impl RelaxSolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_priorities(mut self, priorities: PriorityTable) -> Self {
        self.priorities = priorities;
        self
    }

    pub fn set_priority(&mut self, name: &str, rank: i32) {
        self.priorities.set(name, rank);
    }

    /// Registers a bone connection. Its target length comes from the next
    /// `capture_lengths` call or an explicit `set_bone_length`.
    pub fn add_edge(&mut self, a: &str, b: &str) {
        self.edges.push((a.to_string(), b.to_string()));
    }

    pub fn edges(&self) -> &[(String, String)] {
        &self.edges
    }

    /// Stores the current distance of every registered edge as its target
    /// length. Called once per skeleton, or again on explicit
    /// recalibration; never during dragging.
    pub fn capture_lengths(&mut self, keypoints: &KeypointMap) {
        let mut captured = 0usize;
        for (a, b) in &self.edges {
            let (Some(pa), Some(pb)) = (keypoints.get(a), keypoints.get(b)) else {
                continue;
            };
            self.lengths.set(a, b, pa.distance(pb));
            captured += 1;
        }
        log::trace!("captured {captured} of {} edge lengths", self.edges.len());
    }

    pub fn bone_length(&self, a: &str, b: &str) -> Option<f32> {
        self.lengths.get(a, b)
    }

    pub fn set_bone_length(&mut self, a: &str, b: &str, length: f32) {
        self.lengths.set(a, b, length);
    }

    /// Writes `new_position` into `moved_joint`, then relaxes the graph
    /// back toward its captured lengths. A pass that changes nothing ends
    /// the loop early; otherwise all passes run.
    pub fn apply_constraints(
        &self,
        keypoints: &mut KeypointMap,
        moved_joint: &str,
        new_position: Vec3,
    ) {
        keypoints.set(moved_joint, new_position);

        for _ in 0..self.max_passes {
            if !self.relax_pass(keypoints) {
                break;
            }
        }
    }

    /// One sweep over all edges. Returns whether any joint moved.
    fn relax_pass(&self, keypoints: &mut KeypointMap) -> bool {
        let mut changed = false;

        for (a, b) in &self.edges {
            let Some(target) = self.lengths.get(a, b) else {
                continue;
            };
            let (Some(pa), Some(pb)) = (keypoints.get(a), keypoints.get(b)) else {
                continue;
            };

            let delta = pb - pa;
            let current = delta.length();
            if current < MIN_EDGE_LENGTH {
                continue;
            }

            let error = target - current;
            if error.abs() <= self.tolerance {
                continue;
            }

            let direction = delta / current;
            let rank_a = self.priorities.rank(a);
            let rank_b = self.priorities.rank(b);

            if rank_a > rank_b {
                keypoints.set(b, pa + direction * target);
            } else if rank_b > rank_a {
                keypoints.set(a, pb - direction * target);
            } else {
                // Equal rank: split the signed error between both ends.
                keypoints.set(a, pa - direction * (error * 0.5));
                keypoints.set(b, pb + direction * (error * 0.5));
            }
            changed = true;
        }

        changed
    }
}
