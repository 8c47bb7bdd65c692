//! Solver mode selection
//!
//! Graph relaxation and chain FABRIK are two strategies for the same
//! abstract problem: satisfy geometric constraints given a moved control
//! point. The calling layer picks a mode per rig and drives it through one
//! entry point without knowing which solver sits behind it.

use glam::Vec3;

use crate::ik::ChainRegistry;
use crate::relax::RelaxSolver;
use crate::rig::Rig;

#[derive(Debug)]
pub enum PoseSolver {
    /// Freeform keypoint graph relaxed toward captured edge lengths.
    Relaxation(RelaxSolver),
    /// Named rigid chains solved with FABRIK.
    ChainIk(ChainRegistry),
}

impl PoseSolver {
    /// Routes one interaction event: `control` names the dragged keypoint
    /// in relaxation mode, or the target chain in chain-IK mode.
    ///
    /// Returns `false` only for chain solves that failed to converge or
    /// could not run; relaxation has no failure signal.
    pub fn drive(&mut self, rig: &mut Rig, control: &str, target: Vec3) -> bool {
        match self {
            PoseSolver::Relaxation(solver) => {
                solver.apply_constraints(&mut rig.keypoints, control, target);
                true
            }
            PoseSolver::ChainIk(registry) => registry.solve(&mut rig.skeleton, control, target),
        }
    }

    pub fn as_relaxation(&self) -> Option<&RelaxSolver> {
        match self {
            PoseSolver::Relaxation(solver) => Some(solver),
            PoseSolver::ChainIk(_) => None,
        }
    }

    pub fn as_relaxation_mut(&mut self) -> Option<&mut RelaxSolver> {
        match self {
            PoseSolver::Relaxation(solver) => Some(solver),
            PoseSolver::ChainIk(_) => None,
        }
    }

    pub fn as_chain_ik(&self) -> Option<&ChainRegistry> {
        match self {
            PoseSolver::Relaxation(_) => None,
            PoseSolver::ChainIk(registry) => Some(registry),
        }
    }

    pub fn as_chain_ik_mut(&mut self) -> Option<&mut ChainRegistry> {
        match self {
            PoseSolver::Relaxation(_) => None,
            PoseSolver::ChainIk(registry) => Some(registry),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rig::Skeleton;

    #[test]
    fn relaxation_mode_relaxes_the_dragged_keypoint() {
        let mut solver = RelaxSolver::new();
        solver.add_edge("hip", "knee");
        solver.set_priority("hip", 10);

        let mut rig = Rig::default();
        rig.keypoints.set("hip", Vec3::ZERO);
        rig.keypoints.set("knee", Vec3::NEG_Y);

        let mut mode = PoseSolver::Relaxation(solver);
        mode.as_relaxation_mut().unwrap().capture_lengths(&rig.keypoints);

        // Dragging the knee inward: the hip holds, the knee settles back
        // onto the captured length along the drag direction.
        assert!(mode.drive(&mut rig, "knee", Vec3::new(0.5, -0.5, 0.0)));
        assert_eq!(rig.keypoints.get("hip"), Some(Vec3::ZERO));
        let knee = rig.keypoints.get("knee").unwrap();
        assert!((knee.length() - 1.0).abs() < 1e-5);
        assert!((knee.normalize() - Vec3::new(0.5, -0.5, 0.0).normalize()).length() < 1e-5);
    }

    #[test]
    fn chain_mode_reports_solver_outcome() {
        let mut skeleton = Skeleton::new();
        skeleton.add_bone("upper", None, Vec3::ZERO, 1.0);
        skeleton.add_bone("lower", Some("upper"), Vec3::Y, 1.0);

        let mut registry = ChainRegistry::new();
        registry.create_chain(&skeleton, "arm", &["upper", "lower"]).unwrap();

        let mut rig = Rig::new(skeleton);
        let mut mode = PoseSolver::ChainIk(registry);

        assert!(mode.drive(&mut rig, "arm", Vec3::new(1.0, 1.0, 0.0)));
        assert!(!mode.drive(&mut rig, "missing-chain", Vec3::ONE));
    }
}
