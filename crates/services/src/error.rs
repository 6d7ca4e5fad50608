//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::EngineError;
use storage::question_bank::QuestionBankError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by `QuizService`.
///
/// Persistence failures never show up here; they are logged and dropped.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizServiceError {
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    QuestionBank(#[from] QuestionBankError),
}
