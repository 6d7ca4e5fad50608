use std::sync::Arc;

use quiz_core::model::ExamRegistry;
use storage::question_bank::QuestionBankSource;
use storage::repository::Storage;

use crate::error::AppServicesError;
use crate::quiz_service::QuizService;

/// Assembles app-facing services from a storage backend and a question bank.
#[derive(Clone)]
pub struct AppServices {
    quiz: Arc<QuizService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization or loading the
    /// question bank fails.
    pub async fn new_sqlite(
        db_url: &str,
        source: &QuestionBankSource,
    ) -> Result<Self, AppServicesError> {
        let registry = source.load()?;
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_parts(Arc::new(registry), &storage))
    }

    /// Build services over an existing storage and registry.
    #[must_use]
    pub fn from_parts(registry: Arc<ExamRegistry>, storage: &Storage) -> Self {
        let quiz = Arc::new(QuizService::new(registry, Arc::clone(&storage.kv)));
        Self { quiz }
    }

    #[must_use]
    pub fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }
}
