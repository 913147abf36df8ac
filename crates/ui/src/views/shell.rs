use dioxus::prelude::*;
use services::Phase;

use crate::views::state::use_session;
use crate::views::{DiagnosticView, FinalChallengeView, ModuleRunView, ModuleSelectView, StartView};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Screen {
    Start,
    Diagnostic,
    ModuleSelect,
    ModuleRun,
    Final,
}

/// Picks the screen for the current session phase.
#[component]
pub fn SessionShell() -> Element {
    let store = use_session();
    let screen = match store.read().phase() {
        Phase::Start => Screen::Start,
        Phase::Diagnostic(_) => Screen::Diagnostic,
        Phase::ModuleSelect => Screen::ModuleSelect,
        Phase::ModuleRun(_) => Screen::ModuleRun,
        Phase::Final(_) => Screen::Final,
    };

    match screen {
        Screen::Start => rsx! { StartView {} },
        Screen::Diagnostic => rsx! { DiagnosticView {} },
        Screen::ModuleSelect => rsx! { ModuleSelectView {} },
        Screen::ModuleRun => rsx! { ModuleRunView {} },
        Screen::Final => rsx! { FinalChallengeView {} },
    }
}
