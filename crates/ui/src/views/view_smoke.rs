use journey_core::Canvas;
use journey_core::catalog::beginner_path;
use journey_core::model::{QuizAttempt, QuizProgress};
use services::{JourneyOverview, ProgressSnapshot};
use storage::repository::{InMemoryProgressStore, ProgressKey, ProgressStore};

use super::test_harness::{render_body, setup_map_harness};
use crate::vm::JourneyMapVm;

fn vm_for(snapshot: &ProgressSnapshot, current: &str) -> JourneyMapVm {
    let overview = JourneyOverview::derive(&beginner_path(), snapshot);
    JourneyMapVm::build(&overview, current, &Canvas::default())
}

#[tokio::test(flavor = "current_thread")]
async fn hidden_map_renders_nothing() {
    let mut harness = setup_map_harness(InMemoryProgressStore::new(), false, None);
    harness.rebuild();
    harness.settle().await;
    let html = harness.render();
    assert!(!html.contains("Learning Journey Map"), "unexpected map in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn visible_map_renders_fresh_journey() {
    let mut harness = setup_map_harness(InMemoryProgressStore::new(), true, None);
    harness.rebuild();
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Learning Journey Map"), "missing title in {html}");
    assert!(html.contains("0%"), "missing progress in {html}");
    assert!(html.contains("Recommended Next Step"), "missing next step in {html}");
    assert!(html.contains("Continue Learning"), "missing cta in {html}");
    assert!(html.contains("node-current"), "missing current ring in {html}");
    assert!(!html.contains("achievements"), "unexpected achievements in {html}");
    for title in ["Core Concepts", "Azure Services", "Knowledge Quiz"] {
        assert!(html.contains(title), "missing {title} in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn visible_map_reads_stored_progress() {
    let store = InMemoryProgressStore::new();
    store
        .put_progress(&ProgressKey::page("core-concepts"), r#"{"completionRate": 100}"#)
        .await
        .unwrap();
    store
        .put_progress(&ProgressKey::page("community"), r#"{"completionRate": 82}"#)
        .await
        .unwrap();
    store
        .put_progress(&ProgressKey::page("references"), "{broken")
        .await
        .unwrap();

    let mut harness = setup_map_harness(store, true, Some("community"));
    harness.rebuild();
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("33%"), "missing progress in {html}");
    assert!(html.contains("1 achievements"), "missing badge count in {html}");
    assert!(html.contains("First Steps"), "missing badge in {html}");
    assert!(html.contains("node-completed"), "missing completed node in {html}");
}

#[test]
fn body_marks_locked_nodes() {
    let html = render_body(vm_for(&ProgressSnapshot::new(), "core-concepts"), None);
    assert!(html.contains("node-locked"), "missing locked node in {html}");
    assert!(
        html.contains("journey-detail-placeholder"),
        "missing placeholder in {html}"
    );
    assert!(html.contains("stroke-dasharray"), "missing connections in {html}");
}

#[test]
fn body_shows_hovered_quiz_details() {
    let snapshot = ProgressSnapshot::new().with_quiz(QuizProgress::new(
        vec![
            QuizAttempt::scored(100.0),
            QuizAttempt::scored(90.0),
            QuizAttempt::scored(95.0),
        ],
        3,
        95.0,
    ));
    let html = render_body(vm_for(&snapshot, "quiz"), Some("quiz"));

    assert!(html.contains("95% avg score"), "missing average in {html}");
    assert!(html.contains("3 quizzes taken"), "missing count in {html}");
    assert!(html.contains("Concept Validation"), "missing skill in {html}");
    assert!(html.contains("Perfect Score"), "missing badge in {html}");
    assert!(!html.contains("journey-detail-placeholder"), "placeholder shown in {html}");
}

#[test]
fn body_hover_on_topic_has_no_quiz_stats() {
    let html = render_body(vm_for(&ProgressSnapshot::new(), ""), Some("agent-patterns"));
    assert!(html.contains("Implementation patterns and best practices"));
    assert!(html.contains("advanced"));
    assert!(!html.contains("avg score"), "unexpected quiz stats in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn hover_shows_detail_and_is_gone_after_navigating_away() {
    let mut harness = setup_map_harness(InMemoryProgressStore::new(), true, None);
    harness.rebuild();
    harness.settle().await;

    harness.hover(Some("references"));
    let html = harness.render();
    assert!(html.contains("node-hovered"), "missing hover ring in {html}");
    assert!(
        html.contains("Essential documentation and resources"),
        "missing detail in {html}"
    );

    harness.click_node("references");
    harness.settle().await;
    assert_eq!(harness.navigations(), vec!["/references".to_string()]);
    assert!(!harness.render().contains("Learning Journey Map"));

    harness.set_visible(true);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Learning Journey Map"), "map did not reopen: {html}");
    assert!(
        html.contains("journey-detail-placeholder"),
        "stale detail after reopen: {html}"
    );
    assert!(!html.contains("node-hovered"), "stale hover ring in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn hover_is_dropped_when_map_is_hidden() {
    let mut harness = setup_map_harness(InMemoryProgressStore::new(), true, None);
    harness.rebuild();
    harness.settle().await;

    harness.hover(Some("community"));
    harness.set_visible(false);
    harness.settle().await;
    harness.set_visible(true);
    harness.settle().await;

    let html = harness.render();
    assert!(
        html.contains("journey-detail-placeholder"),
        "stale detail after reopen: {html}"
    );
    assert!(!html.contains("Connect and share with others"), "stale detail in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn clicking_a_locked_node_does_not_navigate() {
    let mut harness = setup_map_harness(InMemoryProgressStore::new(), true, None);
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert_eq!(html.matches(r#"aria-disabled="true""#).count(), 2, "in {html}");

    harness.click_node("azure-services");
    harness.click_node("agent-patterns");
    assert!(harness.navigations().is_empty());
    assert!(harness.render().contains("Learning Journey Map"));

    harness.click_node("quiz");
    assert_eq!(harness.navigations(), vec!["/quiz".to_string()]);
}
