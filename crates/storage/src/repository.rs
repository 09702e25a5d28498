use async_trait::async_trait;
use journey_core::model::NodeId;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Logical key of a stored progress record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProgressKey {
    /// Per-page analytics, written by the page tracker for one node.
    PageAnalytics(NodeId),
    /// The single global quiz progress record.
    QuizProgress,
}

impl ProgressKey {
    pub const QUIZ_PROGRESS: &'static str = "quiz-progress";
    pub const PAGE_ANALYTICS_PREFIX: &'static str = "page-analytics-";

    #[must_use]
    pub fn page(id: impl Into<NodeId>) -> Self {
        Self::PageAnalytics(id.into())
    }

    /// The flat string key the record lives under.
    #[must_use]
    pub fn storage_key(&self) -> String {
        match self {
            ProgressKey::PageAnalytics(id) => format!("{}{id}", Self::PAGE_ANALYTICS_PREFIX),
            ProgressKey::QuizProgress => Self::QUIZ_PROGRESS.to_owned(),
        }
    }
}

impl fmt::Display for ProgressKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.storage_key())
    }
}

/// Key/value store holding raw JSON progress records.
///
/// Readers get the payload untouched; parsing and tolerance of malformed data
/// belong to the caller.
#[async_trait]
pub trait ProgressStore: Send + Sync {
    /// Fetch the raw record stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read. A missing key is
    /// `Ok(None)`, not an error.
    async fn get_progress(&self, key: &ProgressKey) -> Result<Option<String>, StorageError>;

    /// Store or replace the raw record under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    async fn put_progress(&self, key: &ProgressKey, value: &str) -> Result<(), StorageError>;

    /// Delete the record under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    async fn remove_progress(&self, key: &ProgressKey) -> Result<(), StorageError>;
}

/// Simple in-memory store for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryProgressStore {
    records: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryProgressStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl ProgressStore for InMemoryProgressStore {
    async fn get_progress(&self, key: &ProgressKey) -> Result<Option<String>, StorageError> {
        let guard = self
            .records
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(&key.storage_key()).cloned())
    }

    async fn put_progress(&self, key: &ProgressKey, value: &str) -> Result<(), StorageError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.storage_key(), value.to_owned());
        Ok(())
    }

    async fn remove_progress(&self, key: &ProgressKey) -> Result<(), StorageError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.remove(&key.storage_key());
        Ok(())
    }
}

/// The progress store the app reads from, as a trait object so SQLite and the
/// in-memory store are interchangeable.
#[derive(Clone)]
pub struct Storage {
    pub progress: Arc<dyn ProgressStore>,
}
