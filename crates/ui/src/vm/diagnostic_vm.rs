use services::DiagnosticRun;

use crate::vm::number_fmt::{bar_style, position_label};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiagnosticOptionVm {
    pub index: usize,
    pub text: String,
    pub class: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiagnosticVm {
    pub position_label: String,
    pub bar_style: String,
    pub question: String,
    pub options: Vec<DiagnosticOptionVm>,
    pub submit_label: &'static str,
    pub can_submit: bool,
}

/// `None` once the last item has been submitted.
#[must_use]
pub fn map_diagnostic(run: &DiagnosticRun) -> Option<DiagnosticVm> {
    let item = run.current_item()?;
    let index = run.current_index();
    let total = run.total();

    let options = item
        .options
        .iter()
        .enumerate()
        .map(|(idx, option)| DiagnosticOptionVm {
            index: idx,
            text: option.text.clone(),
            class: if run.selected() == Some(idx) {
                "option-button selected"
            } else {
                "option-button"
            },
        })
        .collect();

    Some(DiagnosticVm {
        position_label: position_label("Frage", index, total),
        bar_style: bar_style(index, total),
        question: item.question.clone(),
        options,
        submit_label: if run.is_last() { "Fertig" } else { "Weiter" },
        can_submit: run.selected().is_some(),
    })
}
