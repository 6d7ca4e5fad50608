use quiz_core::grade;
use quiz_core::model::{Exam, QuestionId, SessionState};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultItemVm {
    pub question_id: QuestionId,
    pub prompt: String,
    /// `None` when the question was skipped.
    pub user_answer: Option<String>,
    pub is_correct: bool,
    /// Shown only for wrong or missing answers.
    pub correct_answer: Option<String>,
    pub explanation: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub title: String,
    pub score: usize,
    pub total: usize,
    pub items: Vec<ResultItemVm>,
}

impl ResultsVm {
    #[must_use]
    pub fn build(exam: &Exam, state: &SessionState) -> Self {
        let result = grade(exam.questions(), state.answers());
        let items = result
            .items
            .iter()
            .map(|item| {
                let question = item.question;
                let user_answer = item.user_option().map(str::to_string).or_else(|| {
                    item.user_answer
                        .map(|idx| format!("Option {}", idx + 1))
                });
                ResultItemVm {
                    question_id: question.id(),
                    prompt: question.prompt().to_string(),
                    user_answer,
                    is_correct: item.is_correct,
                    correct_answer: (!item.is_correct)
                        .then(|| question.correct_option().to_string()),
                    explanation: question.explanation().map(str::to_string),
                }
            })
            .collect();

        Self {
            title: exam.title().to_string(),
            score: result.score,
            total: result.total,
            items,
        }
    }
}
