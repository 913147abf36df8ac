use dioxus::prelude::*;
use services::{Phase, SessionAction};

use crate::views::state::{dispatch, use_session};
use crate::views::tasks::TaskPanel;
use crate::vm::map_runner;

#[component]
pub fn ModuleRunView() -> Element {
    let store = use_session();
    let vm = match store.read().phase() {
        Phase::ModuleRun(run) => map_runner(run),
        _ => None,
    };
    let Some(vm) = vm else {
        return rsx! {};
    };
    let task_key = format!("{}-{}", vm.task.id, vm.position_label);

    rsx! {
        div { class: "app-container",
            div { class: "main-card",
                div { class: "header",
                    h1 { "{vm.title}" }
                    p { "{vm.position_label}" }
                }
                div { class: "progress-bar",
                    div { class: "progress-fill", style: "{vm.bar_style}" }
                }
                TaskPanel { key: "{task_key}", task: vm.task.clone() }
                div { class: "button-group",
                    button {
                        class: "button button-secondary",
                        onclick: move |_| {
                            dispatch(store, SessionAction::LeaveModule);
                        },
                        "Zurück"
                    }
                    if let Some(label) = vm.next_label {
                        button {
                            class: "button",
                            onclick: move |_| {
                                dispatch(store, SessionAction::NextTask);
                            },
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}
