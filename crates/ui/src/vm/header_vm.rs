use quiz_core::model::{ExamRegistry, SessionState, Theme};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizChoiceVm {
    pub key: String,
    pub title: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderVm {
    pub current_quiz: String,
    pub quiz_choices: Vec<QuizChoiceVm>,
    pub theme: Theme,
}

impl HeaderVm {
    #[must_use]
    pub fn build(registry: &ExamRegistry, state: &SessionState) -> Self {
        let quiz_choices = registry
            .iter()
            .map(|(key, exam)| QuizChoiceVm {
                key: key.as_str().to_string(),
                title: exam.title().to_string(),
            })
            .collect();
        Self {
            current_quiz: state.current_quiz().as_str().to_string(),
            quiz_choices,
            theme: state.theme(),
        }
    }

    /// Single-quiz builds have nothing to choose from.
    #[must_use]
    pub fn show_quiz_selector(&self) -> bool {
        self.quiz_choices.len() > 1
    }
}
