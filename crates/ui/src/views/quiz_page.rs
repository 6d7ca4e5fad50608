use std::time::Duration;

use dioxus::document::eval;
use dioxus::prelude::*;

use quiz_core::QuizAction;
#[cfg(test)]
use quiz_core::model::SessionState;

use crate::context::AppContext;
use crate::vm::{HeaderVm, QuizPageVm, ResultsVm};

use super::header::AppHeader;
use super::quiz::QuizView;
use super::results::ResultsView;
use super::scripts::SCROLL_TO_TOP_SCRIPT;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

pub const QUIZ_LOADED_NOTICE: &str = "Quiz data is loaded.";

const NOTICE_TTL: Duration = Duration::from_secs(3);

enum Body {
    Quiz(QuizPageVm),
    Results(ResultsVm),
    Empty,
}

/// Root of the quiz screen: owns the session signal and the dispatcher.
///
/// Every user action goes through `dispatch`, which applies it synchronously
/// and hands the resulting change to a spawned persistence task.
#[component]
pub fn QuizPage() -> Element {
    let ctx = use_context::<AppContext>();
    let quiz = ctx.quiz_service();
    let session = use_signal(|| ctx.initial_session());
    // Generation of the visible "loaded" notice; `None` hides it.
    let notice = use_signal(|| None::<u64>);
    let notice_seq = use_signal(|| 0_u64);

    let dispatch = {
        let quiz = quiz.clone();
        use_callback(move |action: QuizAction| {
            let mut session = session;
            let mut notice = notice;
            let mut notice_seq = notice_seq;
            let loads_quiz = matches!(action, QuizAction::LoadQuiz(_));

            let mut next = session.read().clone();
            let change = match quiz.apply(&mut next, action) {
                Ok(change) => change,
                Err(err) => {
                    tracing::warn!(error = %err, "quiz action rejected");
                    return;
                }
            };

            if !change.is_noop() {
                session.set(next);
            }
            if change.transition.submitted {
                let _ = eval(SCROLL_TO_TOP_SCRIPT);
            }
            if loads_quiz {
                let seq = notice_seq() + 1;
                notice_seq.set(seq);
                notice.set(Some(seq));
                spawn(async move {
                    tokio::time::sleep(NOTICE_TTL).await;
                    if notice() == Some(seq) {
                        notice.set(None);
                    }
                });
            }

            let quiz = quiz.clone();
            spawn(async move {
                quiz.persist(&change).await;
            });
        })
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch, session);
            }
        }
    }

    let (theme_class, header, body) = {
        let state = session.read();
        let exam = quiz.exam(&state);
        let body = if state.is_submitted() {
            Body::Results(ResultsVm::build(exam, &state))
        } else {
            QuizPageVm::build(exam, &state).map_or(Body::Empty, Body::Quiz)
        };
        (
            state.theme().id(),
            HeaderVm::build(quiz.registry(), &state),
            body,
        )
    };
    let notice_text = notice().map(|_| QUIZ_LOADED_NOTICE);

    rsx! {
        div { class: "app-shell {theme_class}", id: "quiz-root",
            AppHeader { vm: header, notice: notice_text, on_action: dispatch }
            match body {
                Body::Quiz(vm) => rsx! {
                    QuizView { vm, on_action: dispatch }
                },
                Body::Results(vm) => rsx! {
                    ResultsView { vm, on_action: dispatch }
                },
                Body::Empty => rsx! {
                    div { class: "container",
                        p { class: "muted", "This quiz has no questions." }
                    }
                },
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizAction>>>>,
    session: Rc<RefCell<Option<Signal<SessionState>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizAction>, session: Signal<SessionState>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.session.borrow_mut() = Some(session);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizAction> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn session(&self) -> Signal<SessionState> {
        (*self.session.borrow()).expect("quiz session registered")
    }
}
