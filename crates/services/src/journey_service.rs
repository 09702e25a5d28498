use std::sync::Arc;

use journey_core::catalog::beginner_path;
use journey_core::model::{Achievement, LearningNode, LearningPath, QuizProgress};
use storage::repository::ProgressStore;

use crate::achievements::derive_achievements;
use crate::progress::{ProgressSnapshot, derive_path, load_snapshot};
use crate::recommend::next_recommended;

/// Everything the journey map shows for one opening.
#[derive(Debug, Clone, PartialEq)]
pub struct JourneyOverview {
    pub path: LearningPath,
    pub quiz: Option<QuizProgress>,
    pub achievements: Vec<Achievement>,
}

impl JourneyOverview {
    /// Derive the overview from an already-loaded snapshot. Pure.
    #[must_use]
    pub fn derive(template: &LearningPath, snapshot: &ProgressSnapshot) -> Self {
        let path = derive_path(template, snapshot);
        let achievements = derive_achievements(&path, snapshot.quiz.as_ref());
        Self {
            path,
            quiz: snapshot.quiz.clone(),
            achievements,
        }
    }

    #[must_use]
    pub fn next_recommended(&self) -> Option<&LearningNode> {
        next_recommended(&self.path)
    }
}

/// Reads progress from an injected store and produces journey overviews.
///
/// Holds no derived state; every call re-reads the store.
#[derive(Clone)]
pub struct JourneyService {
    store: Arc<dyn ProgressStore>,
    template: LearningPath,
}

impl JourneyService {
    #[must_use]
    pub fn new(store: Arc<dyn ProgressStore>, template: LearningPath) -> Self {
        Self { store, template }
    }

    /// Service over the built-in beginner path.
    #[must_use]
    pub fn with_default_path(store: Arc<dyn ProgressStore>) -> Self {
        Self::new(store, beginner_path())
    }

    #[must_use]
    pub fn template(&self) -> &LearningPath {
        &self.template
    }

    /// Load fresh progress and derive the overview.
    ///
    /// Store failures and malformed records degrade to "no data" for the
    /// affected node, so this always produces an overview.
    pub async fn overview(&self) -> JourneyOverview {
        let snapshot = load_snapshot(self.store.as_ref(), &self.template).await;
        JourneyOverview::derive(&self.template, &snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::repository::{InMemoryProgressStore, ProgressKey};

    #[tokio::test]
    async fn overview_reflects_latest_store_contents() {
        let store = Arc::new(InMemoryProgressStore::new());
        let service = JourneyService::with_default_path(store.clone());

        let before = service.overview().await;
        assert!(before.achievements.is_empty());
        assert_eq!(
            before.next_recommended().map(|n| n.id.as_str()),
            Some("core-concepts")
        );

        store
            .put_progress(&ProgressKey::page("core-concepts"), r#"{"completionRate": 100}"#)
            .await
            .unwrap();

        let after = service.overview().await;
        assert!(after.path.node("core-concepts").unwrap().is_completed);
        assert!(after.path.node("azure-services").unwrap().is_unlocked);
        assert_eq!(after.achievements.len(), 1);
        assert_eq!(
            after.next_recommended().map(|n| n.id.as_str()),
            Some("azure-services")
        );
    }
}
