use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::Content;
use quiz_core::model::{ModuleId, Task};
use services::{Phase, SessionAction, SessionController, SessionEvent};

use crate::views::SessionShell;

#[derive(Props, Clone)]
struct ShellHarnessProps {
    session: SessionController,
}

impl PartialEq for ShellHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ShellHarness(props: ShellHarnessProps) -> Element {
    let session = props.session.clone();
    use_context_provider(move || Signal::new(session));
    rsx! { SessionShell {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Controller over the bundled content with `actions` already applied.
pub fn session_after(actions: impl IntoIterator<Item = SessionAction>) -> SessionController {
    let content = Content::bundled().expect("bundled content");
    let mut session = SessionController::new(Arc::new(content));
    for action in actions {
        let name = action.name();
        session
            .dispatch(action)
            .unwrap_or_else(|err| panic!("{name} rejected: {err}"));
    }
    session
}

/// Diagnostic answered with every option at index 0.
pub fn diagnostic_done() -> Vec<SessionAction> {
    let mut actions = vec![SessionAction::Begin];
    for _ in 0..5 {
        actions.push(SessionAction::SelectDiagnosticOption(0));
        actions.push(SessionAction::SubmitDiagnosticAnswer);
    }
    actions
}

pub fn setup_view_harness(session: SessionController) -> ViewHarness {
    let dom = VirtualDom::new_with_props(ShellHarness, ShellHarnessProps { session });
    ViewHarness { dom }
}

/// Enter the correct answer for the current task without checking it.
pub fn answer_current(session: &mut SessionController) {
    let task = match session.phase() {
        Phase::ModuleRun(run) => run.current_task().cloned().expect("current task"),
        other => panic!("expected module run, got {}", other.name()),
    };
    let actions = match &task {
        Task::TableCompletion(t) => t
            .blank_cells()
            .map(|cell| {
                let value = t.expected(cell).expect("solution value");
                SessionAction::EditCell(cell, value.to_string())
            })
            .collect(),
        Task::Strategy(_, t) => vec![SessionAction::EditInput(t.solution.to_string())],
        Task::TextProblem(t) => vec![SessionAction::EditInput(t.solution.to_string())],
        other => vec![SessionAction::SelectOption(
            other.correct_selection().expect("selection kind"),
        )],
    };
    for action in actions {
        session.dispatch(action).expect("answer accepted");
    }
}

/// Solve the current task and move on.
pub fn solve_current(session: &mut SessionController) -> SessionEvent {
    answer_current(session);
    session.dispatch(SessionAction::CheckTask).expect("check");
    session.dispatch(SessionAction::NextTask).expect("next")
}

pub fn complete_all_modules(session: &mut SessionController) {
    for module in ModuleId::ALL {
        session
            .dispatch(SessionAction::OpenModule(module))
            .expect("open module");
        while !matches!(solve_current(session), SessionEvent::ModuleCompleted { .. }) {}
    }
}
