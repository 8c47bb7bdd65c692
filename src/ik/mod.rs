//! Chain inverse-kinematics module
//!
//! Named chains of rigid bones solved against a target with FABRIK, then
//! converted back into per-bone rotations.

mod chain;
mod constraint;
mod registry;
mod solver;

pub use chain::{Chain, ChainBuilder, ChainError};
pub use constraint::RotationConstraint;
pub use registry::ChainRegistry;
pub use solver::{FabrikSolver, SolveResult};
