use dioxus::prelude::*;
use services::SessionAction;

use crate::views::state::{dispatch, use_session};

const LEARNING_GOALS: [&str; 4] = [
    "Wertetabellen verstehen und vervollständigen",
    "Graphen proportionaler Zuordnungen erkennen",
    "Flexible Rechenstrategien entwickeln",
    "Textaufgaben aus dem Alltag lösen",
];

#[component]
pub fn StartView() -> Element {
    let store = use_session();

    rsx! {
        div { class: "app-container",
            div { class: "main-card",
                div { class: "header",
                    h1 { "🎯 Zuordnungen meistern" }
                    p { "Proportionale und antiproportionale Zuordnungen verstehen" }
                    p { class: "audience", "Gymnasium Klasse 7 • 90 Minuten" }
                }
                div { class: "intro",
                    h2 { "Was erwartet dich?" }
                    div { class: "goals",
                        {LEARNING_GOALS.iter().map(|goal| rsx! {
                            p { key: "{goal}", "✓ {goal}" }
                        })}
                    }
                    button {
                        class: "button button-large",
                        onclick: move |_| {
                            dispatch(store, SessionAction::Begin);
                        },
                        "Los geht's! 🚀"
                    }
                }
            }
        }
    }
}
