use dioxus::prelude::*;

use quiz_core::QuizAction;

use crate::vm::QuizPageVm;

/// Enter on a focused option acts like the primary button.
pub(crate) fn confirm_on_enter(key: &Key) -> Option<QuizAction> {
    (*key == Key::Enter).then_some(QuizAction::Confirm)
}

#[component]
pub fn QuizView(vm: QuizPageVm, on_action: EventHandler<QuizAction>) -> Element {
    let question_id = vm.question_id;
    let progress_label = vm.progress_label();
    let progress_percent = vm.progress_percent();
    let primary_label = vm.primary_label();

    let on_option_key = move |evt: KeyboardEvent| {
        if let Some(action) = confirm_on_enter(&evt.data.key()) {
            evt.prevent_default();
            on_action.call(action);
        }
    };

    rsx! {
        div { class: "container",
            header { class: "header",
                h1 { "{vm.title}" }
                p { class: "muted", "{vm.description}" }
            }

            main {
                div { class: "card",
                    div { class: "progress",
                        div { class: "progress-bar", style: "width: {progress_percent}%" }
                        div { class: "progress-label", "{progress_label}" }
                    }

                    div { class: "question-block",
                        div { class: "q-title",
                            span { class: "q-id", "Q{question_id}." }
                            span { "{vm.prompt}" }
                        }

                        div { class: "options",
                            for option in vm.options.clone() {
                                label {
                                    key: "{question_id}-{option.index}",
                                    class: if option.checked { "option selected" } else { "option" },
                                    input {
                                        r#type: "radio",
                                        name: "q-{question_id}",
                                        value: "{option.index}",
                                        checked: option.checked,
                                        onchange: move |_| {
                                            on_action.call(QuizAction::SelectAnswer {
                                                question_id,
                                                option: option.index,
                                            });
                                        },
                                        onkeydown: on_option_key,
                                    }
                                    span { class: "option-text", "{option.text}" }
                                }
                            }
                        }

                        div { class: "nav-row",
                            button {
                                class: "btn ghost",
                                id: "quiz-prev",
                                r#type: "button",
                                disabled: vm.is_first,
                                onclick: move |_| on_action.call(QuizAction::Prev),
                                "← Prev"
                            }
                            div { class: "actions",
                                button {
                                    class: "btn outline",
                                    id: "quiz-first-unanswered",
                                    r#type: "button",
                                    title: "Jump to first unanswered",
                                    onclick: move |_| on_action.call(QuizAction::FirstUnanswered),
                                    "First"
                                }
                                button {
                                    class: "btn primary",
                                    id: "quiz-confirm",
                                    r#type: "button",
                                    onclick: move |_| on_action.call(QuizAction::Confirm),
                                    "{primary_label}"
                                }
                            }
                        }
                    }
                }

                aside { class: "sidebar",
                    div { class: "card small",
                        h3 { "Overview" }
                        p { class: "overview-count",
                            strong { "{vm.answered}" }
                            " of "
                            strong { "{vm.total}" }
                            " answered"
                        }
                        ol { class: "mini-q-list",
                            for marker in vm.markers.clone() {
                                li {
                                    key: "{marker.question_id}",
                                    class: "{marker.class()}",
                                    title: "{marker.title()}",
                                    onclick: move |_| on_action.call(marker.jump()),
                                    "{marker.question_id}"
                                }
                            }
                        }
                        div { class: "hint muted",
                            "You can navigate with Prev/Next. Click any number to jump."
                        }
                    }
                }
            }
        }
    }
}
