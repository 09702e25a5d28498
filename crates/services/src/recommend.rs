use journey_core::model::{LearningNode, LearningPath};

/// The node to suggest next: unlocked and not completed, preferring the
/// path's recommended order and falling back to path order.
#[must_use]
pub fn next_recommended(path: &LearningPath) -> Option<&LearningNode> {
    path.recommended_order
        .iter()
        .find_map(|id| path.nodes.iter().find(|node| &node.id == id && node.is_available()))
        .or_else(|| path.nodes.iter().find(|node| node.is_available()))
}
