use crate::math::Transform;

/// What a hierarchy node contributes to posing.
///
/// Loaded models carry structure that is not bone: grouping nulls, mesh
/// anchors, attachment sockets. Those participate in transforms but are
/// invisible to the depth classifier and never solved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeKind {
    /// Rigid segment. The rest length is captured from the reference pose
    /// and stays fixed unless the skeleton is explicitly recalibrated.
    Bone { rest_length: f32 },
    /// Non-bone scene structure.
    Group,
}

#[derive(Debug, Clone)]
pub struct Node {
    pub name: String,
    pub parent: Option<usize>,
    pub local: Transform,
    pub kind: NodeKind,
}

impl Node {
    pub fn is_bone(&self) -> bool {
        matches!(self.kind, NodeKind::Bone { .. })
    }

    pub fn rest_length(&self) -> Option<f32> {
        match self.kind {
            NodeKind::Bone { rest_length } => Some(rest_length),
            NodeKind::Group => None,
        }
    }
}
