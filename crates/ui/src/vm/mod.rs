mod header_vm;
mod quiz_vm;
mod results_vm;

pub use header_vm::{HeaderVm, QuizChoiceVm};
pub use quiz_vm::{OptionVm, QuestionMarkerVm, QuizPageVm};
pub use results_vm::{ResultItemVm, ResultsVm};
