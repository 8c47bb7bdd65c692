//! # posekit
//!
//! Skeletal pose constraint and inverse kinematics engine for interactive
//! character posing: drag a joint or give an end effector a target, and a
//! pose satisfying rigid-length bone constraints comes back within one
//! interaction event.
//!
//! ## Features
//! - Priority-weighted distance-constraint relaxation for freeform joint
//!   graphs (stick-figure mode)
//! - FABRIK (Forward And Backward Reaching Inverse Kinematics) chain
//!   solver with per-bone Euler clamps and graceful unreachable-target
//!   degradation
//! - Bone-depth classification with a visibility threshold for progressive
//!   manipulator disclosure on deep rigs
//! - Plain-object pose snapshots for an external persistence layer
//!
//! ## Example
//! ```rust,ignore
//! use glam::Vec3;
//! use posekit::ik::ChainRegistry;
//! use posekit::rig::Skeleton;
//!
//! let mut skeleton = Skeleton::new();
//! skeleton.add_bone("upper-arm", None, Vec3::ZERO, 1.0);
//! skeleton.add_bone("forearm", Some("upper-arm"), Vec3::Y, 1.0);
//!
//! let mut chains = ChainRegistry::new();
//! chains.create_chain(&skeleton, "left-arm", &["upper-arm", "forearm"])?;
//!
//! let converged = chains.solve(&mut skeleton, "left-arm", Vec3::new(1.0, 1.0, 0.0));
//! println!("converged: {converged}");
//! ```

pub mod depth;
pub mod ik;
pub mod math;
pub mod relax;
pub mod rig;
pub mod solver;

pub use depth::DepthClassifier;
pub use ik::{Chain, ChainBuilder, ChainError, ChainRegistry, FabrikSolver, RotationConstraint, SolveResult};
pub use math::{RotationOrder, Transform};
pub use relax::{LengthTable, PriorityTable, RelaxSolver};
pub use rig::{JointSnapshot, KeypointMap, Node, NodeKind, PoseSnapshot, Rig, Skeleton};
pub use solver::PoseSolver;
