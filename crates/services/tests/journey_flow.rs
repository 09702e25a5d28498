use std::sync::Arc;

use journey_core::model::{AchievementKind, PageAnalytics, QuizAttempt, QuizProgress};
use services::{AppServices, JourneyService};
use storage::repository::{ProgressKey, ProgressStore, Storage, StorageError};

struct FailingStore;

#[async_trait::async_trait]
impl ProgressStore for FailingStore {
    async fn get_progress(&self, _key: &ProgressKey) -> Result<Option<String>, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn put_progress(&self, _key: &ProgressKey, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn remove_progress(&self, _key: &ProgressKey) -> Result<(), StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }
}

#[tokio::test]
async fn unreadable_store_yields_template_overview() {
    let service = JourneyService::with_default_path(Arc::new(FailingStore));
    let overview = service.overview().await;

    assert_eq!(&overview.path, service.template());
    assert!(overview.quiz.is_none());
    assert!(overview.achievements.is_empty());
}

#[tokio::test]
async fn sqlite_backed_journey_derives_progress() {
    let services = AppServices::new_sqlite("sqlite:file:memdb_journey_flow?mode=memory&cache=shared")
        .await
        .expect("services");
    // Second handle onto the same shared in-memory database, acting as the tracker.
    let tracker = Storage::sqlite("sqlite:file:memdb_journey_flow?mode=memory&cache=shared")
        .await
        .expect("tracker storage");

    for (id, rate) in [
        ("core-concepts", 100.0),
        ("azure-services", 85.0),
        ("references", 40.0),
    ] {
        let record = PageAnalytics::with_completion_rate(rate).to_json().unwrap();
        tracker
            .progress
            .put_progress(&ProgressKey::page(id), &record)
            .await
            .unwrap();
    }
    let quiz = QuizProgress::new(
        vec![
            QuizAttempt::scored(100.0),
            QuizAttempt::scored(94.0),
            QuizAttempt::scored(91.0),
        ],
        3,
        95.0,
    );
    tracker
        .progress
        .put_progress(&ProgressKey::QuizProgress, &quiz.to_json().unwrap())
        .await
        .unwrap();

    let overview = services.journey().overview().await;
    let path = &overview.path;

    assert_eq!(path.completed_count(), 3);
    assert!((path.total_progress - 50.0).abs() < 1e-9);
    assert!(path.node("agent-patterns").unwrap().is_unlocked);
    assert!(path.node("quiz").unwrap().is_completed);

    let kinds: Vec<_> = overview.achievements.iter().map(|a| a.kind).collect();
    assert_eq!(
        kinds,
        vec![
            AchievementKind::FirstSteps,
            AchievementKind::LearningStreak,
            AchievementKind::QuizTaker,
            AchievementKind::HighAchiever,
            AchievementKind::PerfectScore,
        ]
    );
    assert_eq!(
        overview.next_recommended().map(|n| n.id.as_str()),
        Some("references")
    );
}
