use std::sync::Arc;

use services::{LessonBackend, SpeechService};

/// What the UI needs from the composition root: the backend boundary and the
/// speech trigger.
pub trait UiApp: Send + Sync {
    fn backend(&self) -> Arc<dyn LessonBackend>;
    fn speech(&self) -> Arc<SpeechService>;
}

#[derive(Clone)]
pub struct AppContext {
    backend: Arc<dyn LessonBackend>,
    speech: Arc<SpeechService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            backend: app.backend(),
            speech: app.speech(),
        }
    }

    #[must_use]
    pub fn backend(&self) -> Arc<dyn LessonBackend> {
        Arc::clone(&self.backend)
    }

    #[must_use]
    pub fn speech(&self) -> Arc<SpeechService> {
        Arc::clone(&self.speech)
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
