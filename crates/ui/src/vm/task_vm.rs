use quiz_core::model::{CellKey, Relation, Task, TaskAnswer, TaskKind};
use quiz_core::scoring::numeric_matches;
use services::ModuleRun;

use crate::vm::number_fmt::{bar_style, format_number, position_label};

//
// ─── TASK BODY ────────────────────────────────────────────────────────────────
//

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub value: String,
    pub label: String,
    pub class: String,
}

/// Two-row value table of a recognition task.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PairTableVm {
    pub xs: Vec<String>,
    pub ys: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CellVm {
    Given(String),
    Blank {
        key: CellKey,
        value: String,
        class: &'static str,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TaskBodyVm {
    Choice {
        table: Option<PairTableVm>,
        options: Vec<OptionVm>,
    },
    Numeric {
        input: String,
        unit: Option<String>,
    },
    Completion {
        rows: Vec<Vec<CellVm>>,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HintLineVm {
    pub label: String,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HintVm {
    /// Absent once every hint is revealed.
    pub button_label: Option<String>,
    pub revealed: Vec<HintLineVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskVm {
    pub id: String,
    pub kind: TaskKind,
    pub prompt: String,
    pub body: TaskBodyVm,
    pub hints: Option<HintVm>,
    pub feedback: Option<String>,
    pub locked: bool,
    pub can_check: bool,
}

#[must_use]
pub fn map_task(task: &Task, run: &ModuleRun) -> TaskVm {
    let answer = run.answer();
    let locked = run.show_feedback();

    let (prompt, body) = match task {
        Task::TableRecognition(t) => (
            "Welche Zuordnung liegt vor?".to_string(),
            TaskBodyVm::Choice {
                table: Some(PairTableVm {
                    xs: t.data.iter().map(|pair| format_number(pair[0])).collect(),
                    ys: t.data.iter().map(|pair| format_number(pair[1])).collect(),
                }),
                options: relation_options(&Relation::TABLE_OPTIONS, t.correct, answer, locked),
            },
        ),
        Task::SituationAssessment(t) => (
            t.situation.clone(),
            TaskBodyVm::Choice {
                table: None,
                options: relation_options(&Relation::SITUATION_OPTIONS, t.correct, answer, locked),
            },
        ),
        Task::OverlinearizationTrap(t) => {
            let correct = t.correct_value().map(|v| v.to_string()).unwrap_or_default();
            let options = t
                .options
                .iter()
                .map(|opt| {
                    let value = opt.value.to_string();
                    option_vm(value.clone(), value, &correct, answer, locked)
                })
                .collect();
            (
                t.text.clone(),
                TaskBodyVm::Choice {
                    table: None,
                    options,
                },
            )
        }
        Task::Choice(_, t) => {
            let options = t
                .options
                .iter()
                .map(|opt| option_vm(opt.value.clone(), opt.label.clone(), &t.correct, answer, locked))
                .collect();
            (
                t.question.clone(),
                TaskBodyVm::Choice {
                    table: None,
                    options,
                },
            )
        }
        Task::Strategy(_, t) => (
            t.question.clone(),
            TaskBodyVm::Numeric {
                input: answer.input().to_string(),
                unit: None,
            },
        ),
        Task::TextProblem(t) => (
            t.text.clone(),
            TaskBodyVm::Numeric {
                input: answer.input().to_string(),
                unit: t.unit.clone(),
            },
        ),
        Task::TableCompletion(t) => {
            let rows = t
                .data
                .iter()
                .enumerate()
                .map(|(row, cells)| {
                    cells
                        .iter()
                        .enumerate()
                        .map(|(col, cell)| match cell {
                            Some(value) => CellVm::Given(format_number(*value)),
                            None => {
                                let key = CellKey::new(row, col);
                                let raw = answer.cell(key).unwrap_or_default();
                                let class = match (locked, t.expected(key)) {
                                    (false, _) => "input-field",
                                    (true, Some(expected)) if numeric_matches(raw, expected) => {
                                        "input-field correct"
                                    }
                                    (true, _) => "input-field incorrect",
                                };
                                CellVm::Blank {
                                    key,
                                    value: raw.to_string(),
                                    class,
                                }
                            }
                        })
                        .collect()
                })
                .collect();
            (t.description.clone(), TaskBodyVm::Completion { rows })
        }
    };

    TaskVm {
        id: task.id().to_string(),
        kind: task.kind(),
        prompt,
        body,
        hints: map_hints(task, run),
        feedback: locked.then(|| task.success_feedback(answer)),
        locked,
        can_check: run.can_check(),
    }
}

fn relation_options(
    relations: &[Relation],
    correct: Relation,
    answer: &TaskAnswer,
    locked: bool,
) -> Vec<OptionVm> {
    relations
        .iter()
        .map(|relation| {
            option_vm(
                relation.value().to_string(),
                relation.label().to_string(),
                correct.value(),
                answer,
                locked,
            )
        })
        .collect()
}

fn option_vm(
    value: String,
    label: String,
    correct: &str,
    answer: &TaskAnswer,
    locked: bool,
) -> OptionVm {
    let selected = answer.selection() == Some(value.as_str());
    let mut class = String::from("option-button");
    if selected {
        class.push_str(" selected");
    }
    if locked {
        if value == correct {
            class.push_str(" correct");
        } else if selected {
            class.push_str(" incorrect");
        }
    }
    OptionVm {
        value,
        label,
        class,
    }
}

fn map_hints(task: &Task, run: &ModuleRun) -> Option<HintVm> {
    let total = task.hints().len();
    if total == 0 || run.show_feedback() {
        return None;
    }
    let revealed = run
        .revealed_hints()
        .iter()
        .enumerate()
        .map(|(idx, text)| HintLineVm {
            label: format!("Tipp {}:", idx + 1),
            text: text.clone(),
        })
        .collect();
    let button_label = run
        .has_more_hints()
        .then(|| format!("💡 Hilfe anzeigen ({}/{total})", run.hint_level() + 1));
    Some(HintVm {
        button_label,
        revealed,
    })
}

//
// ─── RUNNER ───────────────────────────────────────────────────────────────────
//

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunnerVm {
    pub title: String,
    pub position_label: String,
    pub bar_style: String,
    /// Shown only after a correct check.
    pub next_label: Option<&'static str>,
    pub task: TaskVm,
}

#[must_use]
pub fn map_runner(run: &ModuleRun) -> Option<RunnerVm> {
    let task = run.current_task()?;
    let index = run.current_index();
    let total = run.total();
    let next_label = run.show_feedback().then_some(if run.is_last() {
        "Modul abschließen"
    } else {
        "Nächste Aufgabe"
    });

    Some(RunnerVm {
        title: run.module().title(),
        position_label: position_label("Aufgabe", index, total),
        bar_style: bar_style(index, total),
        next_label,
        task: map_task(task, run),
    })
}
