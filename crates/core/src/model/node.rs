use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::ids::NodeId;

/// Symbolic icon reference.
///
/// The model never holds a renderable element; view layers map these to
/// whatever glyph or SVG they draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconId {
    Brain,
    PuzzlePiece,
    StackSimple,
    Books,
    Users,
    CheckCircle,
    Star,
    TrendUp,
    Target,
    Path,
    Trophy,
    Sparkle,
    GraduationCap,
}

/// Difficulty tier of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which stored record tracks a node's progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Tracked by a per-page analytics record.
    Topic,
    /// Tracked by the global quiz progress record.
    Quiz,
}

/// A single learning topic on a path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningNode {
    pub id: NodeId,
    pub title: String,
    pub description: String,
    pub icon: IconId,
    pub difficulty: Difficulty,
    pub estimated_time: String,
    pub prerequisites: Vec<NodeId>,
    pub skills: Vec<String>,
    pub completion_rate: f64,
    pub is_completed: bool,
    pub is_unlocked: bool,
    pub path: String,
    pub kind: NodeKind,
}

impl LearningNode {
    /// Build a node in its pristine state: nothing completed, unlocked only
    /// when it has no prerequisites.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<NodeId>,
        title: impl Into<String>,
        description: impl Into<String>,
        icon: IconId,
        difficulty: Difficulty,
        estimated_time: impl Into<String>,
        prerequisites: &[&str],
        skills: &[&str],
        path: impl Into<String>,
    ) -> Self {
        let prerequisites: Vec<NodeId> = prerequisites.iter().copied().map(NodeId::new).collect();
        let is_unlocked = prerequisites.is_empty();
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            icon,
            difficulty,
            estimated_time: estimated_time.into(),
            prerequisites,
            skills: skills.iter().map(|s| (*s).to_owned()).collect(),
            completion_rate: 0.0,
            is_completed: false,
            is_unlocked,
            path: path.into(),
            kind: NodeKind::Topic,
        }
    }

    /// Mark this node as tracked by quiz progress.
    #[must_use]
    pub fn as_quiz(mut self) -> Self {
        self.kind = NodeKind::Quiz;
        self
    }

    #[must_use]
    pub fn has_prerequisites(&self) -> bool {
        !self.prerequisites.is_empty()
    }

    #[must_use]
    pub fn is_quiz(&self) -> bool {
        self.kind == NodeKind::Quiz
    }

    /// Unlocked but not yet completed.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.is_unlocked && !self.is_completed
    }
}
