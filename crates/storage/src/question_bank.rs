//! Loading of static exam documents into an [`ExamRegistry`].
//!
//! Each document is a JSON file of the shape
//! `{ examTitle, examDescription, sections: [{ questions: [...] }] }`.
//! The registry key of a file is its stem (`dsa.json` -> `dsa`).

use std::path::{Path, PathBuf};

use quiz_core::model::{Exam, ExamError, ExamRegistry, ParseIdError, QuizKey, RegistryError};
use thiserror::Error;

/// Key of the exam compiled into the binary.
pub const SAMPLE_QUIZ_KEY: &str = "sample";

const SAMPLE_QUIZ_JSON: &str = include_str!("../data/sample_quiz.json");

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuestionBankError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("quiz {key} is not valid JSON: {source}")]
    Parse {
        key: QuizKey,
        #[source]
        source: serde_json::Error,
    },

    #[error("quiz {key} is invalid: {source}")]
    InvalidExam {
        key: QuizKey,
        #[source]
        source: ExamError,
    },

    #[error("cannot derive a quiz key from {path}")]
    InvalidKey {
        path: PathBuf,
        #[source]
        source: ParseIdError,
    },

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Where the exams come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionBankSource {
    /// The sample exam bundled with the application.
    Bundled,
    /// Every `*.json` file of a directory, ordered by key.
    Directory(PathBuf),
    /// One exam file (single-quiz mode).
    File(PathBuf),
}

impl QuestionBankSource {
    /// Load and validate the exams of this source.
    ///
    /// # Errors
    ///
    /// Returns `QuestionBankError` if a file cannot be read or parsed, an
    /// exam fails validation, or no exam is found.
    pub fn load(&self) -> Result<ExamRegistry, QuestionBankError> {
        let registry = match self {
            QuestionBankSource::Bundled => bundled_registry()?,
            QuestionBankSource::Directory(dir) => load_dir(dir)?,
            QuestionBankSource::File(path) => {
                let (key, exam) = load_file(path)?;
                ExamRegistry::single(key, exam)
            }
        };
        tracing::info!(source = ?self, quizzes = registry.len(), "question bank loaded");
        Ok(registry)
    }
}

/// Parse and validate one exam document.
///
/// # Errors
///
/// Returns `QuestionBankError::Parse` for malformed JSON and
/// `QuestionBankError::InvalidExam` when the exam breaks a structural rule.
pub fn parse_exam(key: &QuizKey, json: &str) -> Result<Exam, QuestionBankError> {
    let exam: Exam = serde_json::from_str(json).map_err(|source| QuestionBankError::Parse {
        key: key.clone(),
        source,
    })?;
    exam.validate()
        .map_err(|source| QuestionBankError::InvalidExam {
            key: key.clone(),
            source,
        })
}

/// The single bundled sample exam.
///
/// # Errors
///
/// Only fails if the bundled document is broken.
pub fn bundled_registry() -> Result<ExamRegistry, QuestionBankError> {
    let key = QuizKey::new(SAMPLE_QUIZ_KEY).map_err(|source| QuestionBankError::InvalidKey {
        path: PathBuf::from(SAMPLE_QUIZ_KEY),
        source,
    })?;
    let exam = parse_exam(&key, SAMPLE_QUIZ_JSON)?;
    Ok(ExamRegistry::single(key, exam))
}

/// Read one exam file; the key is the file stem.
///
/// # Errors
///
/// See [`QuestionBankError`].
pub fn load_file(path: &Path) -> Result<(QuizKey, Exam), QuestionBankError> {
    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let key = QuizKey::new(stem).map_err(|source| QuestionBankError::InvalidKey {
        path: path.to_path_buf(),
        source,
    })?;
    let json = std::fs::read_to_string(path).map_err(|source| QuestionBankError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let exam = parse_exam(&key, &json)?;
    Ok((key, exam))
}

/// Load every `*.json` exam of `dir`, ordered by key.
///
/// # Errors
///
/// Fails on the first unreadable or invalid file, or when the directory
/// holds no exam.
pub fn load_dir(dir: &Path) -> Result<ExamRegistry, QuestionBankError> {
    let io_err = |source| QuestionBankError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            paths.push(path);
        }
    }

    let mut entries = paths
        .iter()
        .map(|path| load_file(path))
        .collect::<Result<Vec<_>, _>>()?;
    entries.sort_by(|(left, _), (right, _)| left.cmp(right));

    Ok(ExamRegistry::new(entries)?)
}
