//! Bone-depth classification module
//!
//! Ranks bones by hop distance from the skeleton root and filters which of
//! them currently expose an interactive manipulator. A level-of-detail
//! control for deep rigs, not a correctness mechanism.

mod classifier;

pub use classifier::DepthClassifier;
