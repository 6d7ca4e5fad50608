use std::sync::Arc;

use dioxus::prelude::Key;
use quiz_core::QuizAction;
use quiz_core::model::{QuestionId, Theme};
use storage::repository::{InMemoryRepository, KeyValueRepository, StorageError};

use super::QUIZ_LOADED_NOTICE;
use super::quiz::confirm_on_enter;
use super::test_harness::{
    quiz_key, setup_view_harness, setup_view_harness_with_repo, single_quiz_registry,
    two_quiz_registry,
};

fn select(id: u64, option: usize) -> QuizAction {
    QuizAction::SelectAnswer {
        question_id: QuestionId::new(id),
        option,
    }
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_first_question() {
    let (mut harness, _repo) = setup_view_harness(two_quiz_registry()).await;
    harness.rebuild();
    let html = harness.render();

    for expected in [
        "Quiz Application",
        "Discrete Mathematics",
        "Data Structures",
        "Load Quiz",
        "theme-light-blue",
        "1 / 3",
        "Question number 1?",
        "Alpha 1",
        "Gamma 1",
        "Next →",
        "Overview",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert!(!html.contains("Submit Quiz"), "unexpected submit in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn answering_and_paging_updates_view_and_storage() {
    let (mut harness, repo) = setup_view_harness(two_quiz_registry()).await;
    harness.rebuild();

    harness.dispatch(select(1, 2));
    harness.dispatch(QuizAction::Next);
    harness.drive_async().await;

    let session = harness.session();
    assert_eq!(session.answer_for(QuestionId::new(1)), Some(2));
    assert_eq!(session.current_page(), 1);

    let html = harness.render();
    assert!(html.contains("2 / 3"), "missing progress in {html}");
    assert!(html.contains("Question number 2?"), "missing prompt in {html}");

    assert_eq!(
        repo.get("quiz_answers").await.unwrap().as_deref(),
        Some(r#"{"1":2}"#)
    );
    assert_eq!(
        repo.get("quiz_current_page").await.unwrap().as_deref(),
        Some("1")
    );
}

#[tokio::test(flavor = "current_thread")]
async fn confirm_on_last_page_shows_results() {
    let (mut harness, repo) = setup_view_harness(two_quiz_registry()).await;
    harness.rebuild();

    harness.dispatch(select(1, 0));
    harness.dispatch(select(2, 2));
    harness.dispatch(QuizAction::GoToPage(2));
    harness.dispatch(QuizAction::Confirm);
    harness.drive_async().await;

    let session = harness.session();
    assert!(session.is_submitted());
    assert_eq!(session.current_page(), 2);

    let html = harness.render();
    for expected in [
        "Results - Discrete Mathematics",
        "out of 3",
        "Correct",
        "Wrong",
        "— No answer —",
        "Note:",
        "Sets are unordered.",
        "Beta 2",
        "Retake Quiz",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert_eq!(
        repo.get("quiz_submitted").await.unwrap().as_deref(),
        Some("true")
    );
}

#[tokio::test(flavor = "current_thread")]
async fn enter_on_an_option_confirms() {
    assert_eq!(confirm_on_enter(&Key::Enter), Some(QuizAction::Confirm));
    assert_eq!(confirm_on_enter(&Key::Tab), None);
    assert_eq!(confirm_on_enter(&Key::Character(" ".into())), None);

    let (mut harness, _repo) = setup_view_harness(two_quiz_registry()).await;
    harness.rebuild();

    harness.dispatch(select(1, 0));
    let action = confirm_on_enter(&Key::Enter).unwrap();
    harness.dispatch(action);
    assert_eq!(harness.session().current_page(), 1);

    harness.dispatch(QuizAction::GoToPage(2));
    let action = confirm_on_enter(&Key::Enter).unwrap();
    harness.dispatch(action);
    assert!(harness.session().is_submitted());
    assert!(harness.render().contains("Retake Quiz"));
}

#[tokio::test(flavor = "current_thread")]
async fn retake_returns_to_a_fresh_quiz() {
    let (mut harness, repo) = setup_view_harness(two_quiz_registry()).await;
    harness.rebuild();

    harness.dispatch(QuizAction::SetTheme(Theme::DarkBw));
    harness.dispatch(select(3, 2));
    harness.dispatch(QuizAction::Submit);
    harness.dispatch(QuizAction::Restart);
    harness.drive_async().await;

    let session = harness.session();
    assert!(session.answers().is_empty());
    assert_eq!(session.current_page(), 0);
    assert!(!session.is_submitted());
    assert_eq!(session.theme(), Theme::DarkBw);

    let html = harness.render();
    assert!(html.contains("1 / 3"), "missing progress in {html}");
    assert!(html.contains("theme-dark-bw"), "missing theme class in {html}");
    assert_eq!(repo.get("quiz_answers").await.unwrap().as_deref(), Some("{}"));
    assert_eq!(
        repo.get("theme").await.unwrap().as_deref(),
        Some("\"theme-dark-bw\"")
    );
}

#[tokio::test(flavor = "current_thread")]
async fn load_quiz_switches_exam_and_shows_notice() {
    let (mut harness, repo) = setup_view_harness(two_quiz_registry()).await;
    harness.rebuild();

    harness.dispatch(select(1, 1));
    harness.dispatch(QuizAction::LoadQuiz(quiz_key("dsa")));
    harness.drive_async().await;

    let session = harness.session();
    assert_eq!(session.current_quiz(), &quiz_key("dsa"));
    assert!(session.answers().is_empty());

    let html = harness.render();
    assert!(html.contains(QUIZ_LOADED_NOTICE), "missing notice in {html}");
    assert!(html.contains("1 / 2"), "missing progress in {html}");
    assert!(html.contains("Lists and trees"), "missing description in {html}");
    assert_eq!(
        repo.get("current_quiz").await.unwrap().as_deref(),
        Some("\"dsa\"")
    );
}

#[tokio::test(flavor = "current_thread")]
async fn unknown_quiz_leaves_session_untouched() {
    let (mut harness, _repo) = setup_view_harness(two_quiz_registry()).await;
    harness.rebuild();

    harness.dispatch(select(1, 1));
    harness.dispatch(QuizAction::LoadQuiz(quiz_key("missing")));

    let session = harness.session();
    assert_eq!(session.current_quiz(), &quiz_key("discrete"));
    assert_eq!(session.answer_for(QuestionId::new(1)), Some(1));
    assert!(!harness.render().contains(QUIZ_LOADED_NOTICE));
}

#[tokio::test(flavor = "current_thread")]
async fn single_quiz_build_hides_selector() {
    let (mut harness, _repo) = setup_view_harness(single_quiz_registry()).await;
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Only Exam"), "missing title in {html}");
    assert!(!html.contains("Load Quiz"), "selector should be hidden in {html}");
    assert!(html.contains("Light Blue"), "theme picker missing in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn hydrated_submitted_session_opens_on_results() {
    let repo = InMemoryRepository::new();
    repo.set("current_quiz", "\"discrete\"").await.unwrap();
    repo.set("quiz_answers", r#"{"1":0,"2":2,"3":2}"#).await.unwrap();
    repo.set("quiz_submitted", "true").await.unwrap();

    let mut harness =
        setup_view_harness_with_repo(two_quiz_registry(), Arc::new(repo.clone())).await;
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Results - Discrete Mathematics"), "missing results in {html}");
    assert!(html.contains("out of 3"), "missing total in {html}");
    assert!(html.contains(r#"score-number">2<"#), "wrong score in {html}");
}

struct FailingRepo;

#[async_trait::async_trait]
impl KeyValueRepository for FailingRepo {
    async fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn remove(&self, _keys: &[&str]) -> Result<(), StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn storage_failures_never_reach_the_view() {
    let mut harness =
        setup_view_harness_with_repo(two_quiz_registry(), Arc::new(FailingRepo)).await;
    harness.rebuild();

    harness.dispatch(select(1, 0));
    harness.dispatch(QuizAction::Next);
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("2 / 3"), "missing progress in {html}");
    assert!(!html.contains("Something went wrong"), "unexpected error in {html}");
    assert_eq!(harness.session().answer_for(QuestionId::new(1)), Some(0));
}
