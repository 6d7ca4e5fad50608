use dioxus::prelude::*;

use quiz_core::QuizAction;

use crate::vm::ResultsVm;

#[component]
pub fn ResultsView(vm: ResultsVm, on_action: EventHandler<QuizAction>) -> Element {
    rsx! {
        div { class: "container",
            header { class: "header",
                h1 { "Results - {vm.title}" }
                p { class: "muted", "Your score and per-item corrections" }
            }

            main {
                div { class: "card",
                    div { class: "score",
                        div { class: "score-number", "{vm.score}" }
                        div { class: "score-sub", "out of {vm.total}" }
                    }

                    div { class: "results-list",
                        for item in vm.items.clone() {
                            div { class: "result-item", key: "{item.question_id}",
                                div { class: "result-q",
                                    span { class: "q-id", "Q{item.question_id}." }
                                    " {item.prompt}"
                                }
                                div { class: "result-answers",
                                    div { class: if item.is_correct { "user-answer ok" } else { "user-answer bad" },
                                        strong { "Your answer:" }
                                        " "
                                        if let Some(answer) = item.user_answer.as_deref() {
                                            "{answer}"
                                        } else {
                                            em { "— No answer —" }
                                        }
                                        if item.is_correct {
                                            span { class: "badge correct", "Correct" }
                                        } else {
                                            span { class: "badge wrong", "Wrong" }
                                        }
                                    }
                                    if let Some(correct) = item.correct_answer.as_deref() {
                                        div { class: "correct-answer",
                                            strong { "Correct:" }
                                            " {correct}"
                                        }
                                    }
                                    if let Some(note) = item.explanation.as_deref() {
                                        div { class: "explanation",
                                            strong { "Note:" }
                                            " {note}"
                                        }
                                    }
                                }
                            }
                        }
                    }

                    div { class: "results-actions",
                        button {
                            class: "btn",
                            id: "quiz-retake",
                            r#type: "button",
                            onclick: move |_| on_action.call(QuizAction::Restart),
                            "Retake Quiz"
                        }
                    }
                }
            }
        }
    }
}
