use dioxus::prelude::*;
use services::{Phase, SessionAction};

use crate::views::state::{dispatch, use_session};
use crate::vm::{FinalSummaryVm, FinalVm, map_final};

#[component]
pub fn FinalChallengeView() -> Element {
    let store = use_session();
    let vm = {
        let session = store.read();
        match session.phase() {
            Phase::Final(run) => map_final(run, &session),
            _ => return rsx! {},
        }
    };

    match vm {
        FinalVm::Running {
            position_label,
            bar_style,
        } => rsx! {
            div { class: "app-container",
                div { class: "main-card",
                    div { class: "header",
                        h1 { "🏆 Final-Challenge" }
                        p { "{position_label}" }
                    }
                    div { class: "progress-bar",
                        div { class: "progress-fill", style: "{bar_style}" }
                    }
                    div { class: "question-container",
                        p { class: "challenge-note", "Challenge läuft... Zeige dein Können! 💪" }
                        div { class: "button-group",
                            button {
                                class: "button",
                                onclick: move |_| {
                                    dispatch(store, SessionAction::SolveFinalProblem);
                                },
                                "Aufgabe gelöst"
                            }
                        }
                    }
                }
            }
        },
        FinalVm::Finished(summary) => rsx! {
            FinalSummaryPanel { summary }
        },
    }
}

#[component]
fn FinalSummaryPanel(summary: FinalSummaryVm) -> Element {
    let store = use_session();

    let badges = summary.badges.iter().map(|badge| {
        rsx! {
            div { key: "{badge}", class: "badge", "{badge}" }
        }
    });
    let reflections = summary.reflections.iter().map(|item| {
        let index = item.index;
        rsx! {
            label { key: "{index}", class: "checkbox-label",
                input {
                    r#type: "checkbox",
                    checked: item.checked,
                    onchange: move |_| {
                        dispatch(store, SessionAction::ToggleReflection(index));
                    },
                }
                " {item.label}"
            }
        }
    });

    rsx! {
        div { class: "app-container",
            div { class: "main-card",
                div { class: "header",
                    h1 { "🎉 Geschafft!" }
                    p { "Du hast die Final-Challenge gemeistert!" }
                }
                div { class: "stats-container",
                    div { class: "stat-card",
                        div { class: "stat-label", "Punkte" }
                        div { class: "stat-value", "{summary.score_label}" }
                    }
                    div { class: "stat-card",
                        div { class: "stat-label", "Module gemeistert" }
                        div { class: "stat-value", "{summary.modules_label}" }
                    }
                    div { class: "stat-card",
                        div { class: "stat-label", "Badges erhalten" }
                        div { class: "stat-value", "{summary.badge_count}" }
                    }
                }
                if !summary.badges.is_empty() {
                    h3 { class: "section-title", "Deine Badges:" }
                    div { class: "badges-container", {badges} }
                }
                div { class: "reflection-form",
                    h3 { "Was hast du gelernt?" }
                    div { class: "checkbox-group", {reflections} }
                }
                div { class: "button-group",
                    button {
                        class: "button button-large",
                        onclick: move |_| {
                            dispatch(store, SessionAction::Restart);
                        },
                        "Nochmal starten 🔄"
                    }
                }
            }
        }
    }
}
