use std::sync::Arc;

use quiz_core::model::SessionState;
use services::QuizService;

pub trait UiApp: Send + Sync {
    fn quiz_service(&self) -> Arc<QuizService>;

    /// Session hydrated before launch.
    fn initial_session(&self) -> SessionState;
}

#[derive(Clone)]
pub struct AppContext {
    quiz: Arc<QuizService>,
    initial_session: SessionState,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            quiz: app.quiz_service(),
            initial_session: app.initial_session(),
        }
    }

    #[must_use]
    pub fn quiz_service(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }

    #[must_use]
    pub fn initial_session(&self) -> SessionState {
        self.initial_session.clone()
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
