use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressParseError {
    #[error("malformed progress record: {0}")]
    Json(#[from] serde_json::Error),
}

/// Per-page analytics record, stored as JSON under `page-analytics-<node id>`.
///
/// Only `completionRate` is read; other fields written by the tracker are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageAnalytics {
    #[serde(default)]
    completion_rate: Option<f64>,
}

impl PageAnalytics {
    #[must_use]
    pub fn with_completion_rate(rate: f64) -> Self {
        Self {
            completion_rate: Some(rate),
        }
    }

    /// Parse a stored JSON record.
    ///
    /// # Errors
    ///
    /// Returns `ProgressParseError` if the payload is not a JSON object of the
    /// expected shape.
    pub fn parse(raw: &str) -> Result<Self, ProgressParseError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Completion percentage clamped to `0..=100`; a missing value reads as 0.
    #[must_use]
    pub fn completion_rate(&self) -> f64 {
        self.completion_rate.unwrap_or(0.0).clamp(0.0, 100.0)
    }

    /// # Errors
    ///
    /// Returns `ProgressParseError` if serialization fails.
    pub fn to_json(&self) -> Result<String, ProgressParseError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// A single finished quiz attempt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuizAttempt {
    #[serde(default)]
    pub score: Option<f64>,
}

impl QuizAttempt {
    #[must_use]
    pub fn scored(score: f64) -> Self {
        Self { score: Some(score) }
    }

    #[must_use]
    pub fn scored_at_least(&self, threshold: f64) -> bool {
        self.score.is_some_and(|score| score >= threshold)
    }

    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_perfect(&self) -> bool {
        self.score.is_some_and(|score| score == 100.0)
    }
}

/// Global quiz progress record, stored as JSON under `quiz-progress`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizProgress {
    #[serde(default)]
    completed_quizzes: Option<Vec<QuizAttempt>>,
    #[serde(default)]
    total_quizzes: Option<f64>,
    #[serde(default)]
    average_score: Option<f64>,
}

impl QuizProgress {
    #[must_use]
    pub fn new(completed_quizzes: Vec<QuizAttempt>, total_quizzes: u32, average_score: f64) -> Self {
        Self {
            completed_quizzes: Some(completed_quizzes),
            total_quizzes: Some(f64::from(total_quizzes)),
            average_score: Some(average_score),
        }
    }

    /// Parse a stored JSON record.
    ///
    /// # Errors
    ///
    /// Returns `ProgressParseError` if the payload is not a JSON object of the
    /// expected shape.
    pub fn parse(raw: &str) -> Result<Self, ProgressParseError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// # Errors
    ///
    /// Returns `ProgressParseError` if serialization fails.
    pub fn to_json(&self) -> Result<String, ProgressParseError> {
        Ok(serde_json::to_string(self)?)
    }

    #[must_use]
    pub fn completed_quizzes(&self) -> &[QuizAttempt] {
        self.completed_quizzes.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn attempt_count(&self) -> usize {
        self.completed_quizzes().len()
    }

    #[must_use]
    pub fn total_quizzes(&self) -> f64 {
        self.total_quizzes.unwrap_or(0.0)
    }

    #[must_use]
    pub fn average_score(&self) -> f64 {
        self.average_score.unwrap_or(0.0)
    }

    #[must_use]
    pub fn count_scoring_at_least(&self, threshold: f64) -> usize {
        self.completed_quizzes()
            .iter()
            .filter(|attempt| attempt.scored_at_least(threshold))
            .count()
    }

    #[must_use]
    pub fn perfect_count(&self) -> usize {
        self.completed_quizzes()
            .iter()
            .filter(|attempt| attempt.is_perfect())
            .count()
    }
}
