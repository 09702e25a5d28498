use serde::{Deserialize, Serialize};

use crate::model::ids::{NodeId, PathId};
use crate::model::node::LearningNode;

/// An ordered, curated track of learning nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPath {
    pub id: PathId,
    pub title: String,
    pub description: String,
    pub nodes: Vec<LearningNode>,
    pub total_progress: f64,
    /// Tie-break preference for the next step. May omit or repeat ids.
    pub recommended_order: Vec<NodeId>,
}

impl LearningPath {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        nodes: Vec<LearningNode>,
        recommended_order: &[&str],
    ) -> Self {
        let mut path = Self {
            id: PathId::new(id),
            title: title.into(),
            description: description.into(),
            nodes,
            total_progress: 0.0,
            recommended_order: recommended_order.iter().copied().map(NodeId::new).collect(),
        };
        path.total_progress = path.completion_percent();
        path
    }

    #[must_use]
    pub fn node(&self, id: &str) -> Option<&LearningNode> {
        self.nodes.iter().find(|node| node.id == id)
    }

    #[must_use]
    pub fn node_by_path(&self, path: &str) -> Option<&LearningNode> {
        self.nodes.iter().find(|node| node.path == path)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.nodes.iter().filter(|node| node.is_completed).count()
    }

    /// True when the path has nodes and every one of them is completed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.nodes.is_empty() && self.completed_count() == self.nodes.len()
    }

    /// `completed / total * 100`, or 0 for an empty path.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn completion_percent(&self) -> f64 {
        if self.nodes.is_empty() {
            return 0.0;
        }
        self.completed_count() as f64 / self.nodes.len() as f64 * 100.0
    }
}
