use std::sync::Arc;

use storage::repository::Storage;

use crate::error::AppServicesError;
use crate::journey_service::JourneyService;

/// Assembles app-facing services over one storage backend.
#[derive(Clone)]
pub struct AppServices {
    journey: Arc<JourneyService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(db_url: &str) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_storage(&storage))
    }

    #[must_use]
    pub fn from_storage(storage: &Storage) -> Self {
        let journey = Arc::new(JourneyService::with_default_path(Arc::clone(
            &storage.progress,
        )));
        Self { journey }
    }

    #[must_use]
    pub fn journey(&self) -> Arc<JourneyService> {
        Arc::clone(&self.journey)
    }
}
