use std::sync::Arc;

use quiz_core::model::{Exam, ExamRegistry, SessionState};
use quiz_core::{QuizAction, Transition};
use storage::repository::KeyValueRepository;

use crate::error::QuizServiceError;
use crate::persistence::SessionPersistence;

/// A state transition as seen by subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionChange {
    pub previous: SessionState,
    pub current: SessionState,
    pub transition: Transition,
}

impl SessionChange {
    #[must_use]
    pub fn is_noop(&self) -> bool {
        !self.transition.changed && !self.transition.session_reset
    }
}

/// Front door for the quiz: hydration, action dispatch and persistence.
///
/// `apply` is synchronous and pure with respect to storage; `persist` is the
/// subscriber that writes a change back. `dispatch` chains both.
pub struct QuizService {
    registry: Arc<ExamRegistry>,
    persistence: Arc<SessionPersistence>,
}

impl QuizService {
    #[must_use]
    pub fn new(registry: Arc<ExamRegistry>, repo: Arc<dyn KeyValueRepository>) -> Self {
        Self {
            registry,
            persistence: Arc::new(SessionPersistence::new(repo)),
        }
    }

    #[must_use]
    pub fn registry(&self) -> &ExamRegistry {
        &self.registry
    }

    #[must_use]
    pub fn persistence(&self) -> Arc<SessionPersistence> {
        Arc::clone(&self.persistence)
    }

    /// The exam the session is currently on.
    #[must_use]
    pub fn exam(&self, state: &SessionState) -> &Exam {
        self.registry.get_or_default(state.current_quiz())
    }

    /// One-shot startup hydration.
    pub async fn hydrate(&self) -> SessionState {
        let state = self.persistence.load_session(&self.registry).await;
        tracing::info!(
            quiz = %state.current_quiz(),
            page = state.current_page(),
            answered = state.answered_count(),
            submitted = state.is_submitted(),
            "session hydrated"
        );
        state
    }

    /// Apply `action` to `state` without touching storage.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Engine` for an unknown quiz key or question
    /// id; `state` is left unchanged.
    pub fn apply(
        &self,
        state: &mut SessionState,
        action: QuizAction,
    ) -> Result<SessionChange, QuizServiceError> {
        tracing::debug!(?action, "applying quiz action");
        let previous = state.clone();
        let transition = state.apply(action, &self.registry)?;
        Ok(SessionChange {
            previous,
            current: state.clone(),
            transition,
        })
    }

    /// Write a change back to storage. Never fails.
    pub async fn persist(&self, change: &SessionChange) {
        if change.is_noop() {
            return;
        }
        self.persistence.sync(change).await;
    }

    /// Apply and persist in one step.
    ///
    /// # Errors
    ///
    /// Same as [`QuizService::apply`].
    pub async fn dispatch(
        &self,
        state: &mut SessionState,
        action: QuizAction,
    ) -> Result<Transition, QuizServiceError> {
        let change = self.apply(state, action)?;
        self.persist(&change).await;
        Ok(change.transition)
    }

    /// Drop persisted progress for the next launch; theme and quiz survive.
    pub async fn clear_saved_progress(&self) {
        self.persistence.clear_session().await;
    }
}
