use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::QuestionId;
use crate::model::question::{Question, QuestionError};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExamError {
    #[error("exam has no questions")]
    NoQuestions,

    #[error("question {id} is invalid: {source}")]
    InvalidQuestion {
        id: QuestionId,
        #[source]
        source: QuestionError,
    },

    #[error("question id {id} appears more than once")]
    DuplicateQuestionId { id: QuestionId },
}

//
// ─── SECTION ───────────────────────────────────────────────────────────────────
//

/// An ordered group of questions inside an exam.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    questions: Vec<Question>,
}

impl Section {
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}

//
// ─── EXAM ──────────────────────────────────────────────────────────────────────
//

/// One quiz: title, description and its sections.
///
/// Paging runs over the flattened question list: every section's questions in
/// section order, then in-section order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exam {
    exam_title: String,
    exam_description: String,
    sections: Vec<Section>,
}

impl Exam {
    /// Builds a validated exam.
    ///
    /// # Errors
    ///
    /// Returns `ExamError` if the flattened list is empty, a question is
    /// malformed, or an id repeats.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        sections: Vec<Section>,
    ) -> Result<Self, ExamError> {
        Self {
            exam_title: title.into(),
            exam_description: description.into(),
            sections,
        }
        .validate()
    }

    /// Validates a deserialized exam document.
    ///
    /// # Errors
    ///
    /// Same as [`Exam::new`].
    pub fn validate(self) -> Result<Self, ExamError> {
        let mut seen = HashSet::new();
        for question in self.questions() {
            question
                .clone()
                .validate()
                .map_err(|source| ExamError::InvalidQuestion {
                    id: question.id(),
                    source,
                })?;
            if !seen.insert(question.id()) {
                return Err(ExamError::DuplicateQuestionId { id: question.id() });
            }
        }
        if seen.is_empty() {
            return Err(ExamError::NoQuestions);
        }
        Ok(self)
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.exam_title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.exam_description
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// The flattened question list in paging order.
    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.sections.iter().flat_map(|section| section.questions.iter())
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.sections.iter().map(|section| section.questions.len()).sum()
    }

    #[must_use]
    pub fn question_at(&self, page: usize) -> Option<&Question> {
        self.questions().nth(page)
    }

    #[must_use]
    pub fn contains_question(&self, id: QuestionId) -> bool {
        self.questions().any(|question| question.id() == id)
    }

    /// Index of the last page; 0 for an empty list.
    #[must_use]
    pub fn last_page(&self) -> usize {
        self.question_count().saturating_sub(1)
    }
}
