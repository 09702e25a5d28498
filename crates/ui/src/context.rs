use std::sync::Arc;

use services::JourneyService;

pub trait UiApp: Send + Sync {
    fn journey(&self) -> Arc<JourneyService>;
}

#[derive(Clone)]
pub struct AppContext {
    journey: Arc<JourneyService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            journey: app.journey(),
        }
    }

    #[must_use]
    pub fn journey(&self) -> Arc<JourneyService> {
        Arc::clone(&self.journey)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
