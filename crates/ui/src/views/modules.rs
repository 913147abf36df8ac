use dioxus::prelude::*;
use services::SessionAction;

use crate::views::state::{dispatch, use_session};
use crate::vm::map_module_select;

#[component]
pub fn ModuleSelectView() -> Element {
    let store = use_session();
    let vm = map_module_select(&store.read());

    let badges = vm.badges.iter().map(|badge| {
        rsx! {
            div { key: "{badge}", class: "badge", "{badge}" }
        }
    });

    let cards = vm.cards.iter().map(|card| {
        let module = card.id;
        let progress = card.progress_label.as_ref().map(|label| {
            rsx! {
                div { class: "module-progress", "{label}" }
            }
        });
        rsx! {
            div {
                key: "{module}",
                class: "{card.class}",
                onclick: move |_| {
                    dispatch(store, SessionAction::OpenModule(module));
                },
                div { class: "module-icon", "{card.icon}" }
                h3 { "{card.name}" }
                p { "{card.description}" }
                {progress}
                if card.completed {
                    div { class: "module-badge", "{card.badge}" }
                }
            }
        }
    });

    rsx! {
        div { class: "app-container",
            div { class: "main-card",
                div { class: "header",
                    h1 { "🎓 Deine Lernmodule" }
                    p { "Wähle ein Modul oder fordere dich in der Final-Challenge heraus!" }
                }
                if !vm.badges.is_empty() {
                    div { class: "badges-container", {badges} }
                }
                div { class: "module-selector", {cards} }
                if vm.final_unlocked {
                    div { class: "final-entry",
                        button {
                            class: "button button-large",
                            onclick: move |_| {
                                dispatch(store, SessionAction::StartFinal);
                            },
                            "🏆 Final-Challenge starten!"
                        }
                    }
                }
            }
        }
    }
}
