mod exam;
mod ids;
mod question;
mod registry;
mod session;
mod theme;

pub use exam::{Exam, ExamError, Section};
pub use ids::{ParseIdError, QuestionId, QuizKey};
pub use question::{Question, QuestionError};
pub use registry::{ExamRegistry, RegistryError};
pub use session::{Answers, SessionState};
pub use theme::{Theme, UnknownThemeError};
