use std::sync::Arc;

use quiz_core::Content;
use quiz_core::model::{CompletionRecord, ErrorTag, ModuleId, SkillLevel, Task};
use services::{CheckOutcome, Phase, SessionAction, SessionController, SessionError, SessionEvent};

fn controller() -> SessionController {
    SessionController::new(Arc::new(Content::bundled().expect("bundled content")))
}

fn current_task(ctl: &SessionController) -> Task {
    match ctl.phase() {
        Phase::ModuleRun(run) => run.current_task().cloned().expect("current task"),
        other => panic!("expected module run, got {}", other.name()),
    }
}

fn answer_correctly(ctl: &mut SessionController) {
    match current_task(ctl) {
        Task::TableCompletion(task) => {
            for cell in task.blank_cells() {
                let value = task.expected(cell).expect("solution value");
                ctl.dispatch(SessionAction::EditCell(cell, value.to_string()))
                    .expect("edit cell");
            }
        }
        Task::Strategy(_, task) => {
            ctl.dispatch(SessionAction::EditInput(task.solution.to_string()))
                .expect("edit input");
        }
        Task::TextProblem(task) => {
            ctl.dispatch(SessionAction::EditInput(task.solution.to_string()))
                .expect("edit input");
        }
        other => {
            let value = other.correct_selection().expect("selection kind");
            ctl.dispatch(SessionAction::SelectOption(value))
                .expect("select option");
        }
    }
}

fn finish_diagnostic(ctl: &mut SessionController, picks: [usize; 5]) -> SessionEvent {
    ctl.dispatch(SessionAction::Begin).expect("begin");
    let mut last = None;
    for pick in picks {
        ctl.dispatch(SessionAction::SelectDiagnosticOption(pick))
            .expect("select");
        last = Some(ctl.dispatch(SessionAction::SubmitDiagnosticAnswer).expect("submit"));
    }
    last.expect("at least one item")
}

fn complete_module(ctl: &mut SessionController, module: ModuleId) -> CompletionRecord {
    let SessionEvent::ModuleOpened { total, .. } = ctl
        .dispatch(SessionAction::OpenModule(module))
        .expect("open module")
    else {
        panic!("expected module opened");
    };

    let mut last_progress = 0;
    for _ in 0..total {
        answer_correctly(ctl);
        let event = ctl.dispatch(SessionAction::CheckTask).expect("check");
        let SessionEvent::TaskChecked(CheckOutcome::Correct { progress }) = event else {
            panic!("expected correct check for {module}, got {event:?}");
        };
        assert!(progress >= last_progress);
        last_progress = progress;

        match ctl.dispatch(SessionAction::NextTask).expect("next") {
            SessionEvent::TaskAdvanced { .. } => {}
            SessionEvent::ModuleCompleted { module: done, record } => {
                assert_eq!(done, module);
                assert_eq!(last_progress, 100);
                return record;
            }
            other => panic!("unexpected event {other:?}"),
        }
    }
    panic!("module {module} did not complete");
}

#[test]
fn diagnostic_classifies_and_collects_error_tags() {
    let mut ctl = controller();
    let event = finish_diagnostic(&mut ctl, [0, 1, 0, 1, 0]);

    let SessionEvent::DiagnosticCompleted(outcome) = event else {
        panic!("expected diagnostic completion");
    };
    assert_eq!(outcome.correct_count, 3);
    assert_eq!(outcome.level, SkillLevel::Developing);
    assert_eq!(
        ctl.profile().error_patterns(),
        &[ErrorTag::new("additive"), ErrorTag::new("overlinearization")]
    );
    assert_eq!(ctl.phase(), &Phase::ModuleSelect);
}

#[test]
fn every_module_completes_and_unlocks_final() {
    let mut ctl = controller();
    finish_diagnostic(&mut ctl, [0, 1, 0, 0, 1]);
    assert_eq!(ctl.profile().level(), SkillLevel::Advanced);

    for module in ModuleId::ALL {
        assert_eq!(
            ctl.dispatch(SessionAction::StartFinal),
            Err(SessionError::FinalLocked)
        );
        assert_eq!(complete_module(&mut ctl, module), CompletionRecord::FirstCompletion);
        assert_eq!(ctl.progress().get(module), 100);
    }

    assert_eq!(ctl.profile().badges().len(), 4);
    assert!(ctl.can_start_final());

    let SessionEvent::FinalStarted { total } = ctl.dispatch(SessionAction::StartFinal).unwrap()
    else {
        panic!("expected final start");
    };
    assert_eq!(total, 5);
    assert!(ctl.final_summary().is_none());

    for _ in 0..total {
        ctl.dispatch(SessionAction::SolveFinalProblem).unwrap();
    }
    let summary = ctl.final_summary().expect("summary after last problem");
    assert_eq!((summary.score, summary.total), (5, 5));
    assert_eq!((summary.modules_mastered, summary.module_total), (4, 4));
    assert_eq!(summary.badges[0], "🏆 Tabellen-Profi");

    assert_eq!(
        ctl.dispatch(SessionAction::ToggleReflection(0)).unwrap(),
        SessionEvent::ReflectionToggled { index: 0, checked: true }
    );

    ctl.dispatch(SessionAction::Restart).unwrap();
    assert_eq!(ctl.phase(), &Phase::Start);
    assert!(ctl.profile().completed_modules().is_empty());
    assert!(ctl.profile().badges().is_empty());
    assert!(ctl.progress().iter().all(|(_, percent)| percent == 0));
}

#[test]
fn rerunning_a_module_awards_no_second_badge() {
    let mut ctl = controller();
    finish_diagnostic(&mut ctl, [1, 0, 1, 1, 0]);
    assert_eq!(ctl.profile().level(), SkillLevel::Novice);

    assert_eq!(complete_module(&mut ctl, ModuleId::Context), CompletionRecord::FirstCompletion);
    assert_eq!(complete_module(&mut ctl, ModuleId::Context), CompletionRecord::Repeated);
    assert_eq!(ctl.profile().completed_modules(), &[ModuleId::Context]);
    assert_eq!(ctl.profile().badges(), &["🌟 Alltagsprofi".to_string()]);
}

#[test]
fn wrong_answers_keep_task_open_and_progress_unchanged() {
    let mut ctl = controller();
    finish_diagnostic(&mut ctl, [0, 1, 0, 0, 1]);
    ctl.dispatch(SessionAction::OpenModule(ModuleId::Strategies)).unwrap();

    assert_eq!(ctl.dispatch(SessionAction::CheckTask), Err(SessionError::NotReady));
    ctl.dispatch(SessionAction::EditInput("7.49".into())).unwrap();
    assert_eq!(
        ctl.dispatch(SessionAction::CheckTask).unwrap(),
        SessionEvent::TaskChecked(CheckOutcome::Incorrect)
    );
    assert_eq!(
        ctl.dispatch(SessionAction::NextTask),
        Err(SessionError::FeedbackPending)
    );
    assert_eq!(ctl.progress().get(ModuleId::Strategies), 0);

    ctl.dispatch(SessionAction::EditInput("7,495".into())).unwrap();
    let event = ctl.dispatch(SessionAction::CheckTask).unwrap();
    assert!(matches!(event, SessionEvent::TaskChecked(CheckOutcome::Correct { .. })));
    assert_eq!(
        ctl.dispatch(SessionAction::EditInput("1".into())),
        Err(SessionError::InputLocked)
    );
}

#[test]
fn hints_reveal_one_at_a_time() {
    let mut ctl = controller();
    finish_diagnostic(&mut ctl, [0, 1, 0, 0, 1]);
    ctl.dispatch(SessionAction::OpenModule(ModuleId::Tables)).unwrap();

    let hints = current_task(&ctl).hints().len();
    assert!(hints > 0);
    for level in 1..=hints {
        assert_eq!(
            ctl.dispatch(SessionAction::RevealHint).unwrap(),
            SessionEvent::HintRevealed { level }
        );
    }
    assert_eq!(ctl.dispatch(SessionAction::RevealHint), Err(SessionError::NoMoreHints));
}
