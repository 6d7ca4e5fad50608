use quiz_core::QuizAction;
use quiz_core::model::{Exam, QuestionId, SessionState};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub index: usize,
    pub text: String,
    pub checked: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuestionMarkerVm {
    pub question_id: QuestionId,
    pub page: usize,
    pub answered: bool,
    pub current: bool,
}

impl QuestionMarkerVm {
    #[must_use]
    pub fn class(self) -> &'static str {
        match (self.answered, self.current) {
            (true, true) => "answered current",
            (true, false) => "answered",
            (false, true) => "unanswered current",
            (false, false) => "unanswered",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        if self.answered {
            "Answered. Click to jump."
        } else {
            "Unanswered. Click to jump."
        }
    }

    #[must_use]
    pub fn jump(self) -> QuizAction {
        QuizAction::GoToPage(i64::try_from(self.page).unwrap_or(i64::MAX))
    }
}

/// Everything the question screen renders for the current page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizPageVm {
    pub title: String,
    pub description: String,
    pub page: usize,
    pub total: usize,
    pub answered: usize,
    pub question_id: QuestionId,
    pub prompt: String,
    pub options: Vec<OptionVm>,
    pub is_first: bool,
    pub is_last: bool,
    pub markers: Vec<QuestionMarkerVm>,
}

impl QuizPageVm {
    /// `None` only if the page has no question, which a validated exam rules out.
    #[must_use]
    pub fn build(exam: &Exam, state: &SessionState) -> Option<Self> {
        let page = state.current_page();
        let question = exam.question_at(page)?;
        let chosen = state.answer_for(question.id());

        let options = question
            .options()
            .iter()
            .enumerate()
            .map(|(index, text)| OptionVm {
                index,
                text: text.clone(),
                checked: chosen == Some(index),
            })
            .collect();

        let markers = exam
            .questions()
            .enumerate()
            .map(|(idx, item)| QuestionMarkerVm {
                question_id: item.id(),
                page: idx,
                answered: state.is_answered(item.id()),
                current: idx == page,
            })
            .collect();

        Some(Self {
            title: exam.title().to_string(),
            description: exam.description().to_string(),
            page,
            total: exam.question_count(),
            answered: state.answered_count(),
            question_id: question.id(),
            prompt: question.prompt().to_string(),
            options,
            is_first: page == 0,
            is_last: state.is_last_page(exam),
            markers,
        })
    }

    #[must_use]
    pub fn progress_label(&self) -> String {
        format!("{} / {}", self.page + 1, self.total)
    }

    /// Width of the progress bar, in percent.
    #[must_use]
    pub fn progress_percent(&self) -> usize {
        if self.total == 0 {
            return 0;
        }
        (self.page + 1) * 100 / self.total
    }

    #[must_use]
    pub fn primary_label(&self) -> &'static str {
        if self.is_last { "Submit Quiz" } else { "Next →" }
    }
}
