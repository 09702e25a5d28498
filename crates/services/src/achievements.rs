use journey_core::model::{Achievement, AchievementKind, LearningPath, QuizProgress};

/// Score an attempt needs to count toward "High Achiever".
pub const HIGH_SCORE: f64 = 90.0;

/// Badges earned on `path` and, when present, the quiz record.
///
/// Each threshold is checked on its own; the result is in display order.
#[must_use]
pub fn derive_achievements(path: &LearningPath, quiz: Option<&QuizProgress>) -> Vec<Achievement> {
    let completed = path.completed_count();
    let mut earned = Vec::new();

    if completed >= 1 {
        earned.push(AchievementKind::FirstSteps);
    }
    if completed >= 3 {
        earned.push(AchievementKind::LearningStreak);
    }
    if path.is_complete() {
        earned.push(AchievementKind::JourneyComplete);
    }

    if let Some(quiz) = quiz {
        if quiz.attempt_count() >= 1 {
            earned.push(AchievementKind::QuizTaker);
        }
        if quiz.count_scoring_at_least(HIGH_SCORE) >= 3 {
            earned.push(AchievementKind::HighAchiever);
        }
        if quiz.perfect_count() >= 1 {
            earned.push(AchievementKind::PerfectScore);
        }
    }

    earned.into_iter().map(Achievement::of).collect()
}
