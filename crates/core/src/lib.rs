#![forbid(unsafe_code)]

pub mod engine;
pub mod model;
pub mod scoring;

pub use engine::{EngineError, QuizAction, Transition};
pub use scoring::{ExamResult, QuestionResult, compute_score, grade};
