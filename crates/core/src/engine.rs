use thiserror::Error;

use crate::model::{Exam, ExamRegistry, QuestionId, QuizKey, SessionState, Theme};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EngineError {
    #[error("quiz {0} is not in the registry")]
    UnknownQuiz(QuizKey),

    #[error("question {0} is not part of the active quiz")]
    UnknownQuestion(QuestionId),
}

//
// ─── ACTIONS ───────────────────────────────────────────────────────────────────
//

/// Everything a user can do to a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizAction {
    /// Record or overwrite the chosen option. The index is not checked
    /// against the option count.
    SelectAnswer {
        question_id: QuestionId,
        option: usize,
    },
    /// Jump to a page; out-of-range requests saturate at the nearest bound.
    GoToPage(i64),
    Next,
    Prev,
    /// Primary button / Enter on an option: next page, or submit on the last one.
    Confirm,
    Submit,
    /// Jump to the first unanswered question, or page 0 if all are answered.
    FirstUnanswered,
    Restart,
    LoadQuiz(QuizKey),
    SetTheme(Theme),
}

/// What an applied action did to the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Transition {
    /// Some field of the state differs from before.
    pub changed: bool,
    /// Answers, page and submission were wiped (restart or quiz switch).
    pub session_reset: bool,
    /// The session entered results mode with this action.
    pub submitted: bool,
}

impl Transition {
    const UNCHANGED: Self = Self {
        changed: false,
        session_reset: false,
        submitted: false,
    };

    const fn changed(changed: bool) -> Self {
        Self {
            changed,
            session_reset: false,
            submitted: false,
        }
    }

    const RESET: Self = Self {
        changed: true,
        session_reset: true,
        submitted: false,
    };
}

//
// ─── STATE TRANSITIONS ─────────────────────────────────────────────────────────
//

impl SessionState {
    /// Apply one action. This is the only way a session changes.
    ///
    /// Answering and navigation are ignored once the session is submitted.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::UnknownQuiz` when loading a key outside the
    /// registry and `EngineError::UnknownQuestion` when answering a question
    /// the active exam does not contain. The state is untouched on error.
    pub fn apply(
        &mut self,
        action: QuizAction,
        registry: &ExamRegistry,
    ) -> Result<Transition, EngineError> {
        let exam = registry.get_or_default(&self.current_quiz);

        match action {
            QuizAction::SelectAnswer {
                question_id,
                option,
            } => {
                if !exam.contains_question(question_id) {
                    return Err(EngineError::UnknownQuestion(question_id));
                }
                if self.submitted {
                    return Ok(Transition::UNCHANGED);
                }
                let previous = self.answers.insert(question_id, option);
                Ok(Transition::changed(previous != Some(option)))
            }
            QuizAction::GoToPage(index) => Ok(self.go_to_page(exam, index)),
            QuizAction::Next => Ok(self.go_to_page(exam, self.page_i64().saturating_add(1))),
            QuizAction::Prev => Ok(self.go_to_page(exam, self.page_i64().saturating_sub(1))),
            QuizAction::Confirm => {
                if self.submitted {
                    return Ok(Transition::UNCHANGED);
                }
                if self.current_page >= exam.last_page() {
                    Ok(self.submit())
                } else {
                    Ok(self.go_to_page(exam, self.page_i64().saturating_add(1)))
                }
            }
            QuizAction::Submit => Ok(self.submit()),
            QuizAction::FirstUnanswered => {
                let target = first_unanswered_page(exam, self).unwrap_or(0);
                Ok(self.go_to_page(exam, i64::try_from(target).unwrap_or(i64::MAX)))
            }
            QuizAction::Restart => {
                self.reset_progress();
                Ok(Transition::RESET)
            }
            QuizAction::LoadQuiz(key) => {
                if !registry.contains(&key) {
                    return Err(EngineError::UnknownQuiz(key));
                }
                self.current_quiz = key;
                self.reset_progress();
                Ok(Transition::RESET)
            }
            QuizAction::SetTheme(theme) => {
                let changed = self.theme != theme;
                self.theme = theme;
                Ok(Transition::changed(changed))
            }
        }
    }

    fn go_to_page(&mut self, exam: &Exam, index: i64) -> Transition {
        if self.submitted {
            return Transition::UNCHANGED;
        }
        let page = clamp_page(index, exam.last_page());
        let changed = page != self.current_page;
        self.current_page = page;
        Transition::changed(changed)
    }

    fn submit(&mut self) -> Transition {
        if self.submitted {
            return Transition::UNCHANGED;
        }
        self.submitted = true;
        Transition {
            changed: true,
            session_reset: false,
            submitted: true,
        }
    }

    fn page_i64(&self) -> i64 {
        i64::try_from(self.current_page).unwrap_or(i64::MAX)
    }

    /// Whether the current page is the last one of `exam`.
    #[must_use]
    pub fn is_last_page(&self, exam: &Exam) -> bool {
        self.current_page >= exam.last_page()
    }
}

/// `index` saturated into `0..=last`.
#[must_use]
pub fn clamp_page(index: i64, last: usize) -> usize {
    if index <= 0 {
        return 0;
    }
    usize::try_from(index).map_or(last, |page| page.min(last))
}

/// Paging index of the first question without a recorded answer.
#[must_use]
pub fn first_unanswered_page(exam: &Exam, state: &SessionState) -> Option<usize> {
    exam.questions()
        .position(|question| !state.is_answered(question.id()))
}
