use thiserror::Error;

use crate::model::exam::Exam;
use crate::model::ids::QuizKey;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RegistryError {
    #[error("registry needs at least one exam")]
    Empty,

    #[error("quiz key {0} is registered twice")]
    DuplicateKey(QuizKey),
}

/// Fixed, ordered set of exams available to the application.
///
/// The first entry is the default quiz. A single-entry registry is the
/// single-quiz variant of the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamRegistry {
    entries: Vec<(QuizKey, Exam)>,
}

impl ExamRegistry {
    /// # Errors
    ///
    /// Returns `RegistryError` if `entries` is empty or a key repeats.
    pub fn new(entries: Vec<(QuizKey, Exam)>) -> Result<Self, RegistryError> {
        if entries.is_empty() {
            return Err(RegistryError::Empty);
        }
        for (idx, (key, _)) in entries.iter().enumerate() {
            if entries[..idx].iter().any(|(other, _)| other == key) {
                return Err(RegistryError::DuplicateKey(key.clone()));
            }
        }
        Ok(Self { entries })
    }

    #[must_use]
    pub fn single(key: QuizKey, exam: Exam) -> Self {
        Self {
            entries: vec![(key, exam)],
        }
    }

    #[must_use]
    pub fn default_key(&self) -> &QuizKey {
        &self.entries[0].0
    }

    #[must_use]
    pub fn get(&self, key: &QuizKey) -> Option<&Exam> {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, exam)| exam)
    }

    #[must_use]
    pub fn contains(&self, key: &QuizKey) -> bool {
        self.get(key).is_some()
    }

    /// Exam for `key`, falling back to the default entry.
    #[must_use]
    pub fn get_or_default(&self, key: &QuizKey) -> &Exam {
        self.get(key).unwrap_or(&self.entries[0].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&QuizKey, &Exam)> {
        self.entries.iter().map(|(key, exam)| (key, exam))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn is_single(&self) -> bool {
        self.entries.len() == 1
    }
}
