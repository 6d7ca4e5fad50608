mod header;
mod quiz;
mod quiz_page;
mod results;
mod scripts;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use header::AppHeader;
pub use quiz::QuizView;
pub use quiz_page::{QUIZ_LOADED_NOTICE, QuizPage};
pub use results::ResultsView;
