use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::QuizAction;
use quiz_core::model::{
    Exam, ExamRegistry, Question, QuestionId, QuizKey, Section, SessionState,
};
use services::QuizService;
use storage::repository::{InMemoryRepository, KeyValueRepository};

use crate::context::{UiApp, build_app_context};
use crate::views::QuizPage;
use super::quiz_page::QuizTestHandles;

#[derive(Clone)]
struct TestApp {
    quiz: Arc<QuizService>,
    initial: SessionState,
}

impl UiApp for TestApp {
    fn quiz_service(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }

    fn initial_session(&self) -> SessionState {
        self.initial.clone()
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    handles: QuizTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn QuizHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { QuizPage {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: QuizTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(Duration::from_millis(50), self.dom.wait_for_work()).await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Fire an action through the page's dispatcher, then flush the render.
    pub fn dispatch(&mut self, action: QuizAction) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(action));
        drive_dom(&mut self.dom);
    }

    pub fn session(&self) -> SessionState {
        let session = self.handles.session();
        self.dom.in_runtime(|| session.read().clone())
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

fn question(id: u64, correct: usize, explanation: Option<&str>) -> Question {
    Question::new(
        QuestionId::new(id),
        format!("Question number {id}?"),
        vec![
            format!("Alpha {id}"),
            format!("Beta {id}"),
            format!("Gamma {id}"),
        ],
        correct,
        explanation.map(str::to_string),
    )
    .expect("valid question")
}

pub fn quiz_key(raw: &str) -> QuizKey {
    QuizKey::new(raw).expect("valid quiz key")
}

/// Two exams: "discrete" (ids 1..=3, correct 0/1/2) and "dsa" (ids 1..=2).
pub fn two_quiz_registry() -> ExamRegistry {
    let discrete = Exam::new(
        "Discrete Mathematics",
        "Sets and logic",
        vec![
            Section::new(vec![
                question(1, 0, Some("Sets are unordered.")),
                question(2, 1, None),
            ]),
            Section::new(vec![question(3, 2, None)]),
        ],
    )
    .expect("valid exam");
    let dsa = Exam::new(
        "Data Structures",
        "Lists and trees",
        vec![Section::new(vec![question(1, 1, None), question(2, 0, None)])],
    )
    .expect("valid exam");

    ExamRegistry::new(vec![(quiz_key("discrete"), discrete), (quiz_key("dsa"), dsa)])
        .expect("valid registry")
}

pub fn single_quiz_registry() -> ExamRegistry {
    let exam = Exam::new(
        "Only Exam",
        "Single quiz build",
        vec![Section::new(vec![question(7, 0, None), question(8, 1, None)])],
    )
    .expect("valid exam");
    ExamRegistry::single(quiz_key("only"), exam)
}

pub async fn setup_view_harness(registry: ExamRegistry) -> (ViewHarness, InMemoryRepository) {
    let repo = InMemoryRepository::new();
    let harness = setup_view_harness_with_repo(registry, Arc::new(repo.clone())).await;
    (harness, repo)
}

pub async fn setup_view_harness_with_repo(
    registry: ExamRegistry,
    repo: Arc<dyn KeyValueRepository>,
) -> ViewHarness {
    let quiz = Arc::new(QuizService::new(Arc::new(registry), repo));
    let initial = quiz.hydrate().await;
    let handles = QuizTestHandles::default();

    let app = Arc::new(TestApp { quiz, initial });
    let dom = VirtualDom::new_with_props(
        QuizHarness,
        ViewHarnessProps {
            app,
            handles: handles.clone(),
        },
    );

    ViewHarness { dom, handles }
}
