use dioxus::prelude::*;
use services::{CheckOutcome, SessionAction, SessionEvent};

use crate::views::state::{dispatch, use_session};
use crate::vm::{CellVm, HintVm, PairTableVm, TaskBodyVm, TaskVm};

const RETRY_MESSAGE: &str = "Noch nicht richtig. Prüfe deine Antwort und versuche es noch einmal.";

/// Prompt, controls, hints and feedback of the current task.
///
/// Mounted with a per-task key, so the retry notice starts cleared for every
/// task.
#[component]
pub fn TaskPanel(task: TaskVm) -> Element {
    let store = use_session();
    let mut retry = use_signal(|| false);

    let edit = use_callback(move |action: SessionAction| {
        retry.set(false);
        dispatch(store, action);
    });
    let check = use_callback(move |_: ()| {
        if let Some(SessionEvent::TaskChecked(outcome)) = dispatch(store, SessionAction::CheckTask) {
            retry.set(outcome == CheckOutcome::Incorrect);
        }
    });

    let locked = task.locked;
    let body = match &task.body {
        TaskBodyVm::Choice { table, options } => {
            let table = table.clone().map(|table| rsx! { PairTable { table } });
            let options = options.iter().map(|option| {
                let value = option.value.clone();
                rsx! {
                    button {
                        key: "{option.value}",
                        class: "{option.class}",
                        disabled: locked,
                        onclick: move |_| edit.call(SessionAction::SelectOption(value.clone())),
                        "{option.label}"
                    }
                }
            });
            rsx! {
                {table}
                div { class: "options-container", {options} }
            }
        }
        TaskBodyVm::Numeric { input, unit } => rsx! {
            div { class: "numeric-answer",
                input {
                    r#type: "text",
                    class: "input-field",
                    value: "{input}",
                    placeholder: "Deine Antwort",
                    disabled: locked,
                    oninput: move |evt: FormEvent| edit.call(SessionAction::EditInput(evt.value())),
                }
                if let Some(unit) = unit {
                    span { class: "unit", "{unit}" }
                }
            }
        },
        TaskBodyVm::Completion { rows } => rsx! {
            CompletionTable { rows: rows.clone(), locked, edit }
        },
    };

    let hints = task.hints.clone().map(|hints| rsx! { HintBox { hints } });
    let feedback = task.feedback.as_ref().map(|text| {
        rsx! {
            div { class: "feedback success", "{text}" }
        }
    });

    rsx! {
        div { class: "question-container",
            div { class: "question-text", "{task.prompt}" }
            {body}
            {feedback}
            if retry() && !locked {
                div { class: "feedback error", "{RETRY_MESSAGE}" }
            }
            {hints}
            if !locked {
                div { class: "button-group",
                    button {
                        class: "button",
                        disabled: !task.can_check,
                        onclick: move |_| check.call(()),
                        "Prüfen"
                    }
                }
            }
        }
    }
}

#[component]
fn PairTable(table: PairTableVm) -> Element {
    rsx! {
        div { class: "table-container",
            table {
                thead {
                    tr {
                        th { "x" }
                        {table.xs.iter().enumerate().map(|(idx, x)| rsx! { th { key: "{idx}", "{x}" } })}
                    }
                }
                tbody {
                    tr {
                        td { class: "row-label", "y" }
                        {table.ys.iter().enumerate().map(|(idx, y)| rsx! { td { key: "{idx}", "{y}" } })}
                    }
                }
            }
        }
    }
}

#[component]
fn CompletionTable(rows: Vec<Vec<CellVm>>, locked: bool, edit: Callback<SessionAction>) -> Element {
    let rows = rows.iter().enumerate().map(|(row_idx, cells)| {
        let cells = cells.iter().enumerate().map(|(col_idx, cell)| match cell {
            CellVm::Given(text) => rsx! {
                td { key: "{col_idx}", "{text}" }
            },
            CellVm::Blank { key, value, class } => {
                let cell = *key;
                rsx! {
                    td { key: "{col_idx}",
                        input {
                            r#type: "text",
                            class: "{class}",
                            value: "{value}",
                            disabled: locked,
                            oninput: move |evt: FormEvent| edit.call(SessionAction::EditCell(cell, evt.value())),
                        }
                    }
                }
            }
        });
        rsx! {
            tr { key: "{row_idx}", {cells} }
        }
    });

    rsx! {
        div { class: "table-container",
            table {
                tbody { {rows} }
            }
        }
    }
}

#[component]
fn HintBox(hints: HintVm) -> Element {
    let store = use_session();
    let lines = hints.revealed.iter().map(|line| {
        rsx! {
            div { key: "{line.label}", class: "hint-content",
                strong { "{line.label}" }
                " {line.text}"
            }
        }
    });

    rsx! {
        div { class: "hint-system",
            if let Some(label) = &hints.button_label {
                button {
                    class: "hint-button",
                    onclick: move |_| {
                        dispatch(store, SessionAction::RevealHint);
                    },
                    "{label}"
                }
            }
            {lines}
        }
    }
}
