use super::keypoints::KeypointMap;
use super::skeleton::Skeleton;

/// One posable character: the bone hierarchy the chain solver drives plus
/// the freeform keypoint graph the relaxation solver drives. Either side
/// may be empty depending on the character's mode.
#[derive(Debug, Clone, Default)]
pub struct Rig {
    pub skeleton: Skeleton,
    pub keypoints: KeypointMap,
}

impl Rig {
    pub fn new(skeleton: Skeleton) -> Self {
        Self {
            skeleton,
            keypoints: KeypointMap::new(),
        }
    }

    pub fn with_keypoints(skeleton: Skeleton, keypoints: KeypointMap) -> Self {
        Self { skeleton, keypoints }
    }
}
