use dioxus::prelude::*;

use quiz_core::QuizAction;
use quiz_core::model::{QuizKey, Theme};

use crate::vm::HeaderVm;

/// App bar with the quiz selector and the theme picker.
///
/// Picking a quiz only stages it; the switch happens on "Load Quiz".
#[component]
pub fn AppHeader(
    vm: HeaderVm,
    notice: Option<&'static str>,
    on_action: EventHandler<QuizAction>,
) -> Element {
    let mut staged = use_signal(|| vm.current_quiz.clone());
    let staged_key = staged();
    let current_theme = vm.theme;

    let load_staged = move |_: MouseEvent| match QuizKey::new(staged()) {
        Ok(key) => on_action.call(QuizAction::LoadQuiz(key)),
        Err(err) => tracing::warn!(error = %err, "ignoring invalid quiz selection"),
    };

    rsx! {
        header { class: "appheader",
            h1 { "Quiz Application" }
            div { class: "header-controls",
                if vm.show_quiz_selector() {
                    select {
                        class: "btn",
                        id: "quiz-select",
                        title: "Choose a quiz",
                        value: "{staged_key}",
                        onchange: move |evt| staged.set(evt.value()),
                        for choice in vm.quiz_choices.clone() {
                            option {
                                key: "{choice.key}",
                                value: "{choice.key}",
                                selected: choice.key == staged_key,
                                "{choice.title}"
                            }
                        }
                    }
                    button {
                        class: "btn primary",
                        id: "quiz-load",
                        r#type: "button",
                        onclick: load_staged,
                        "Load Quiz"
                    }
                }
                select {
                    class: "btn",
                    id: "theme-select",
                    title: "Theme",
                    value: "{current_theme.id()}",
                    onchange: move |evt| match evt.value().parse::<Theme>() {
                        Ok(theme) => on_action.call(QuizAction::SetTheme(theme)),
                        Err(err) => tracing::warn!(error = %err, "ignoring unknown theme"),
                    },
                    for theme in Theme::ALL {
                        option {
                            key: "{theme.id()}",
                            value: "{theme.id()}",
                            selected: theme == current_theme,
                            "{theme.label()}"
                        }
                    }
                }
            }
            if let Some(message) = notice {
                p { class: "notice", role: "status", "{message}" }
            }
        }
    }
}
