//! Deriving node completion and unlock state from stored progress.

use std::collections::{HashMap, HashSet};

use journey_core::model::{LearningPath, NodeId, NodeKind, PageAnalytics, QuizProgress};
use storage::repository::{ProgressKey, ProgressStore};

/// Minimum stored completion rate for a topic to count as completed.
pub const TOPIC_COMPLETION_THRESHOLD: f64 = 80.0;
/// Minimum number of quiz attempts for the quiz node to count as completed.
pub const QUIZ_MIN_ATTEMPTS: usize = 3;
/// Minimum average score for the quiz node to count as completed.
pub const QUIZ_MIN_AVERAGE: f64 = 70.0;

/// Parsed progress records for one derivation pass.
///
/// A node with no entry has no usable record, whether it was never written or
/// could not be parsed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProgressSnapshot {
    pub page_analytics: HashMap<NodeId, PageAnalytics>,
    pub quiz: Option<QuizProgress>,
}

impl ProgressSnapshot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_page(mut self, id: &str, rate: f64) -> Self {
        self.page_analytics
            .insert(NodeId::new(id), PageAnalytics::with_completion_rate(rate));
        self
    }

    #[must_use]
    pub fn with_quiz(mut self, quiz: QuizProgress) -> Self {
        self.quiz = Some(quiz);
        self
    }
}

/// Read every record the path needs from `store`.
///
/// Never fails: unreadable or malformed records are logged and left out of
/// the snapshot.
pub async fn load_snapshot(store: &dyn ProgressStore, path: &LearningPath) -> ProgressSnapshot {
    let mut snapshot = ProgressSnapshot::new();
    let mut quiz_read = false;

    for node in &path.nodes {
        match node.kind {
            NodeKind::Topic => {
                let key = ProgressKey::PageAnalytics(node.id.clone());
                if let Some(raw) = read_raw(store, &key).await {
                    match PageAnalytics::parse(&raw) {
                        Ok(record) => {
                            snapshot.page_analytics.insert(node.id.clone(), record);
                        }
                        Err(err) => {
                            tracing::warn!(%key, error = %err, "ignoring malformed page analytics");
                        }
                    }
                }
            }
            NodeKind::Quiz if !quiz_read => {
                quiz_read = true;
                let key = ProgressKey::QuizProgress;
                if let Some(raw) = read_raw(store, &key).await {
                    match QuizProgress::parse(&raw) {
                        Ok(progress) => snapshot.quiz = Some(progress),
                        Err(err) => {
                            tracing::warn!(%key, error = %err, "ignoring malformed quiz progress");
                        }
                    }
                }
            }
            NodeKind::Quiz => {}
        }
    }

    snapshot
}

async fn read_raw(store: &dyn ProgressStore, key: &ProgressKey) -> Option<String> {
    match store.get_progress(key).await {
        Ok(raw) => raw,
        Err(err) => {
            tracing::warn!(%key, error = %err, "progress store read failed");
            None
        }
    }
}

/// Apply `snapshot` to a copy of `template`.
///
/// Completion is settled for every node first; unlock flags are computed
/// afterwards from the finished completion set, so the result does not depend
/// on node order.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn derive_path(template: &LearningPath, snapshot: &ProgressSnapshot) -> LearningPath {
    let mut path = template.clone();

    for node in &mut path.nodes {
        match node.kind {
            NodeKind::Quiz => {
                if let Some(quiz) = &snapshot.quiz {
                    let attempts = quiz.attempt_count();
                    node.is_completed =
                        attempts >= QUIZ_MIN_ATTEMPTS && quiz.average_score() >= QUIZ_MIN_AVERAGE;
                    node.completion_rate =
                        (attempts as f64 / quiz.total_quizzes().max(1.0) * 100.0).min(100.0);
                }
            }
            NodeKind::Topic => {
                if let Some(record) = snapshot.page_analytics.get(&node.id) {
                    node.completion_rate = record.completion_rate();
                    node.is_completed = node.completion_rate >= TOPIC_COMPLETION_THRESHOLD;
                }
            }
        }
    }

    let completed: HashSet<NodeId> = path
        .nodes
        .iter()
        .filter(|node| node.is_completed)
        .map(|node| node.id.clone())
        .collect();

    for node in &mut path.nodes {
        node.is_unlocked = match node.kind {
            NodeKind::Quiz => true,
            NodeKind::Topic => node
                .prerequisites
                .iter()
                .all(|prereq| completed.contains(prereq)),
        };
    }

    path.total_progress = path.completion_percent();
    tracing::debug!(
        path = %path.id,
        completed = completed.len(),
        total = path.len(),
        "derived path progress"
    );
    path
}
