use std::collections::HashMap;

use crate::model::exam::Exam;
use crate::model::ids::{QuestionId, QuizKey};
use crate::model::theme::Theme;

/// Chosen option index per answered question.
///
/// Keys are present only for answered questions.
pub type Answers = HashMap<QuestionId, usize>;

/// In-memory quiz progress. Authoritative during a live session.
///
/// Only `SessionState::apply` mutates it; persistence observes the
/// resulting changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub(crate) current_quiz: QuizKey,
    pub(crate) answers: Answers,
    pub(crate) current_page: usize,
    pub(crate) submitted: bool,
    pub(crate) theme: Theme,
}

impl SessionState {
    /// A fresh session on `quiz` with the given theme.
    #[must_use]
    pub fn new(current_quiz: QuizKey, theme: Theme) -> Self {
        Self {
            current_quiz,
            answers: Answers::new(),
            current_page: 0,
            submitted: false,
            theme,
        }
    }

    /// Rehydrate a session from persisted parts, restoring the invariants
    /// against `exam`: unknown question ids are dropped and the page is
    /// clamped into range.
    #[must_use]
    pub fn from_persisted(
        current_quiz: QuizKey,
        exam: &Exam,
        mut answers: Answers,
        current_page: usize,
        submitted: bool,
        theme: Theme,
    ) -> Self {
        answers.retain(|id, _| exam.contains_question(*id));
        Self {
            current_quiz,
            answers,
            current_page: current_page.min(exam.last_page()),
            submitted,
            theme,
        }
    }

    #[must_use]
    pub fn current_quiz(&self) -> &QuizKey {
        &self.current_quiz
    }

    #[must_use]
    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    #[must_use]
    pub fn answer_for(&self, id: QuestionId) -> Option<usize> {
        self.answers.get(&id).copied()
    }

    #[must_use]
    pub fn is_answered(&self, id: QuestionId) -> bool {
        self.answers.contains_key(&id)
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub(crate) fn reset_progress(&mut self) {
        self.answers.clear();
        self.current_page = 0;
        self.submitted = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Question, Section};

    fn exam() -> Exam {
        let questions = (1..=3)
            .map(|id| {
                Question::new(
                    QuestionId::new(id),
                    format!("Q{id}"),
                    vec!["a".into(), "b".into()],
                    0,
                    None,
                )
                .unwrap()
            })
            .collect();
        Exam::new("Exam", "", vec![Section::new(questions)]).unwrap()
    }

    #[test]
    fn from_persisted_drops_foreign_ids_and_clamps_page() {
        let answers = Answers::from([(QuestionId::new(2), 1), (QuestionId::new(99), 0)]);
        let state = SessionState::from_persisted(
            QuizKey::new("q").unwrap(),
            &exam(),
            answers,
            40,
            false,
            Theme::DarkCyan,
        );

        assert_eq!(state.answered_count(), 1);
        assert_eq!(state.answer_for(QuestionId::new(2)), Some(1));
        assert!(!state.is_answered(QuestionId::new(99)));
        assert_eq!(state.current_page(), 2);
        assert_eq!(state.theme(), Theme::DarkCyan);
    }
}
