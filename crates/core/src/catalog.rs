//! Built-in learning paths.

use crate::model::{Difficulty, IconId, LearningNode, LearningPath};

/// Node shown as the current page when the caller does not name one.
pub const DEFAULT_CURRENT_NODE: &str = "core-concepts";

/// The beginner's track, in its pristine (nothing completed) state.
#[must_use]
pub fn beginner_path() -> LearningPath {
    let nodes = vec![
        LearningNode::new(
            "core-concepts",
            "Core Concepts",
            "Fundamental AI agent concepts",
            IconId::Brain,
            Difficulty::Beginner,
            "25-30 min",
            &[],
            &["Agent Lifecycle", "Communication Patterns", "Protocol Basics"],
            "/",
        ),
        LearningNode::new(
            "azure-services",
            "Azure Services",
            "Cloud AI service integration",
            IconId::StackSimple,
            Difficulty::Intermediate,
            "20-25 min",
            &["core-concepts"],
            &["Service Integration", "API Usage", "Cloud Architecture"],
            "/azure-services",
        ),
        LearningNode::new(
            "references",
            "References",
            "Essential documentation and resources",
            IconId::Books,
            Difficulty::Beginner,
            "15-20 min",
            &[],
            &["Documentation Navigation", "Resource Discovery"],
            "/references",
        ),
        LearningNode::new(
            "community",
            "Community",
            "Connect and share with others",
            IconId::Users,
            Difficulty::Beginner,
            "10-15 min",
            &[],
            &["Community Engagement", "Knowledge Sharing"],
            "/community",
        ),
        LearningNode::new(
            "agent-patterns",
            "Agent Patterns",
            "Implementation patterns and best practices",
            IconId::PuzzlePiece,
            Difficulty::Advanced,
            "35-40 min",
            &["core-concepts", "azure-services"],
            &["Pattern Implementation", "Best Practices", "Code Examples"],
            "/patterns",
        ),
        LearningNode::new(
            "quiz",
            "Knowledge Quiz",
            "Test your understanding with adaptive quizzes",
            IconId::GraduationCap,
            Difficulty::Beginner,
            "15-20 min",
            &[],
            &["Knowledge Assessment", "Concept Validation", "Progress Tracking"],
            "/quiz",
        )
        .as_quiz(),
    ];

    LearningPath::new(
        "beginner-path",
        "Beginner's Journey",
        "Start your AI agent learning adventure",
        nodes,
        &[
            "core-concepts",
            "azure-services",
            "references",
            "community",
            "agent-patterns",
            "quiz",
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NodeKind;

    #[test]
    fn beginner_path_has_six_nodes_with_unique_ids() {
        let path = beginner_path();
        assert_eq!(path.len(), 6);
        let mut ids: Vec<_> = path.nodes.iter().map(|n| n.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn only_quiz_node_is_quiz_kind() {
        let path = beginner_path();
        let quiz: Vec<_> = path
            .nodes
            .iter()
            .filter(|n| n.kind == NodeKind::Quiz)
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(quiz, vec!["quiz"]);
    }

    #[test]
    fn prerequisites_reference_known_nodes() {
        let path = beginner_path();
        for node in &path.nodes {
            for prereq in &node.prerequisites {
                assert!(path.node(prereq.as_str()).is_some(), "{prereq} unknown");
            }
        }
    }

    #[test]
    fn default_current_node_exists() {
        assert!(beginner_path().node(DEFAULT_CURRENT_NODE).is_some());
    }
}
