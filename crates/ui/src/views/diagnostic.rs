use dioxus::prelude::*;
use services::{Phase, SessionAction};

use crate::views::state::{dispatch, use_session};
use crate::vm::map_diagnostic;

#[component]
pub fn DiagnosticView() -> Element {
    let store = use_session();
    let vm = match store.read().phase() {
        Phase::Diagnostic(run) => map_diagnostic(run),
        _ => None,
    };
    let Some(vm) = vm else {
        return rsx! {};
    };

    let options = vm.options.iter().map(|option| {
        let index = option.index;
        rsx! {
            button {
                key: "{index}",
                class: "{option.class}",
                onclick: move |_| {
                    dispatch(store, SessionAction::SelectDiagnosticOption(index));
                },
                "{option.text}"
            }
        }
    });

    rsx! {
        div { class: "app-container",
            div { class: "main-card",
                div { class: "header",
                    h1 { "📋 Eingangsdiagnose" }
                    p { "{vm.position_label}" }
                }
                div { class: "progress-bar",
                    div { class: "progress-fill", style: "{vm.bar_style}" }
                }
                div { class: "question-container",
                    div { class: "question-text", "{vm.question}" }
                    div { class: "options-container", {options} }
                }
                div { class: "button-group",
                    button {
                        class: "button",
                        disabled: !vm.can_submit,
                        onclick: move |_| {
                            dispatch(store, SessionAction::SubmitDiagnosticAnswer);
                        },
                        "{vm.submit_label}"
                    }
                }
            }
        }
    }
}
