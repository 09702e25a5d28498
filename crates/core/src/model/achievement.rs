use serde::{Deserialize, Serialize};

use crate::model::node::IconId;

/// Badges that can be derived from progress. Order matches display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AchievementKind {
    FirstSteps,
    LearningStreak,
    JourneyComplete,
    QuizTaker,
    HighAchiever,
    PerfectScore,
}

/// A derived, non-persistent badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Achievement {
    pub kind: AchievementKind,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: IconId,
}

impl Achievement {
    #[must_use]
    pub fn of(kind: AchievementKind) -> Self {
        let (title, description, icon) = match kind {
            AchievementKind::FirstSteps => {
                ("First Steps", "Completed your first section", IconId::Star)
            }
            AchievementKind::LearningStreak => {
                ("Learning Streak", "Completed 3 sections", IconId::TrendUp)
            }
            AchievementKind::JourneyComplete => {
                ("Journey Complete", "Mastered all sections", IconId::Trophy)
            }
            AchievementKind::QuizTaker => {
                ("Quiz Taker", "Completed your first quiz", IconId::GraduationCap)
            }
            AchievementKind::HighAchiever => {
                ("High Achiever", "Scored 90%+ on 3 quizzes", IconId::Target)
            }
            AchievementKind::PerfectScore => {
                ("Perfect Score", "Achieved 100% on a quiz", IconId::Sparkle)
            }
        };
        Self {
            kind,
            title,
            description,
            icon,
        }
    }
}
