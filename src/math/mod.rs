//! Math utilities module
//!
//! Provides convenient re-exports from glam plus the rigid-transform and
//! rotation helpers shared by the solvers.

mod rotation;
mod transform;

pub use rotation::{aim, clamp_euler, RotationOrder};
pub use transform::Transform;

// Re-export commonly used glam types
pub use glam::{EulerRot, Mat4, Quat, Vec3};
