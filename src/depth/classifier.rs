use std::collections::HashMap;

use crate::rig::Skeleton;

/// Computes each bone's distance in bone-hops from the root and exposes a
/// threshold deciding which bones currently show a manipulator. Rigs with
/// many terminal bones (fingers, facial bones) would otherwise present an
/// overwhelming number of handles at once.
#[derive(Debug, Clone, Default)]
pub struct DepthClassifier {
    depths: HashMap<String, u32>,
    visible: HashMap<String, bool>,
    max_depth: u32,
    limit: u32,
}

impl DepthClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Walks every bone's ancestor chain, counting only ancestors that are
    /// themselves bones; non-bone scene structure contributes nothing.
    /// Previous results are discarded and every bone starts visible.
    pub fn compute_depths(&mut self, skeleton: &Skeleton) {
        self.depths.clear();
        self.max_depth = 0;

        for (index, node) in skeleton.nodes().iter().enumerate() {
            if !node.is_bone() {
                continue;
            }

            let mut depth = 0u32;
            let mut current = index;
            while let Some(parent) = skeleton.nodes()[current].parent {
                if skeleton.nodes()[parent].is_bone() {
                    depth += 1;
                }
                current = parent;
            }

            self.max_depth = self.max_depth.max(depth);
            self.depths.insert(node.name.clone(), depth);
        }

        self.limit = self.max_depth;
        self.refresh_visibility();
    }

    /// Clamps `limit` to `[0, max_depth]` and recomputes visibility: a
    /// bone's manipulator shows iff its depth is at or under the limit.
    pub fn set_depth_limit(&mut self, limit: u32) {
        self.limit = limit.min(self.max_depth);
        self.refresh_visibility();
    }

    fn refresh_visibility(&mut self) {
        self.visible = self
            .depths
            .iter()
            .map(|(name, &depth)| (name.clone(), depth <= self.limit))
            .collect();
    }

    pub fn depth_limit(&self) -> u32 {
        self.limit
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    pub fn bone_depths(&self) -> &HashMap<String, u32> {
        &self.depths
    }

    /// Whether `bone` currently exposes a manipulator. Unknown names are
    /// hidden.
    pub fn is_visible(&self, bone: &str) -> bool {
        self.visible.get(bone).copied().unwrap_or(false)
    }
}
