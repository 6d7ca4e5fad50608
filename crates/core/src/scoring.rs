use crate::model::{Answers, Question};

/// Number of questions whose recorded answer equals the correct option.
///
/// Unanswered questions never count. The result lies in `0..=questions.len()`
/// and does not depend on the iteration order of `answers`.
pub fn compute_score<'a>(
    questions: impl IntoIterator<Item = &'a Question>,
    answers: &Answers,
) -> usize {
    questions
        .into_iter()
        .filter(|question| {
            answers
                .get(&question.id())
                .is_some_and(|chosen| question.is_correct(*chosen))
        })
        .count()
}

/// Per-question outcome shown on the results screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionResult<'a> {
    pub question: &'a Question,
    pub user_answer: Option<usize>,
    pub is_correct: bool,
}

impl QuestionResult<'_> {
    /// Text of the chosen option; `None` when unanswered or out of range.
    #[must_use]
    pub fn user_option(&self) -> Option<&str> {
        self.user_answer.and_then(|idx| self.question.option(idx))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamResult<'a> {
    pub score: usize,
    pub total: usize,
    pub items: Vec<QuestionResult<'a>>,
}

/// Grade every question in paging order.
pub fn grade<'a>(
    questions: impl IntoIterator<Item = &'a Question>,
    answers: &Answers,
) -> ExamResult<'a> {
    let items: Vec<QuestionResult<'a>> = questions
        .into_iter()
        .map(|question| {
            let user_answer = answers.get(&question.id()).copied();
            QuestionResult {
                question,
                user_answer,
                is_correct: user_answer.is_some_and(|idx| question.is_correct(idx)),
            }
        })
        .collect();
    let score = items.iter().filter(|item| item.is_correct).count();

    ExamResult {
        score,
        total: items.len(),
        items,
    }
}
