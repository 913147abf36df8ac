use quiz_core::model::{CellKey, ModuleId};
use services::{Phase, SessionAction};

use super::test_harness::{
    answer_current, complete_all_modules, diagnostic_done, session_after, setup_view_harness,
    solve_current,
};

fn render(actions: Vec<SessionAction>) -> String {
    let mut harness = setup_view_harness(session_after(actions));
    harness.rebuild();
    harness.render()
}

#[test]
fn start_view_smoke_renders_goals() {
    let html = render(Vec::new());
    assert!(html.contains("Zuordnungen meistern"), "missing title in {html}");
    assert!(html.contains("Flexible Rechenstrategien entwickeln"), "missing goal in {html}");
    assert!(html.contains("Los geht"), "missing start button in {html}");
}

#[test]
fn diagnostic_view_smoke_renders_first_question() {
    let html = render(vec![SessionAction::Begin]);
    assert!(html.contains("Eingangsdiagnose"), "missing header in {html}");
    assert!(html.contains("Frage 1 von 5"), "missing position in {html}");
    assert!(html.contains("Weiter"), "missing submit in {html}");
}

#[test]
fn module_select_view_smoke_lists_modules() {
    let html = render(diagnostic_done());
    for name in ["Tabellen-Detektive", "Graphen-Labor", "Rechen-Strategien", "Kontext-Profis"] {
        assert!(html.contains(name), "missing {name} in {html}");
    }
    assert!(!html.contains("Final-Challenge starten"), "final should be locked in {html}");
    assert!(!html.contains("Fortschritt"), "no progress expected in {html}");
}

#[test]
fn module_select_view_smoke_shows_progress() {
    let mut actions = diagnostic_done();
    actions.push(SessionAction::OpenModule(ModuleId::Strategies));
    actions.push(SessionAction::EditInput("7.5".into()));
    actions.push(SessionAction::CheckTask);
    actions.push(SessionAction::LeaveModule);
    let session = session_after(actions);
    assert_eq!(session.phase(), &Phase::ModuleSelect);

    let mut harness = setup_view_harness(session);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Fortschritt: 14%"), "missing progress in {html}");
}

#[test]
fn runner_view_smoke_renders_recognition_task() {
    let mut actions = diagnostic_done();
    actions.push(SessionAction::OpenModule(ModuleId::Tables));
    let html = render(actions);
    assert!(html.contains("Tabellen-Detektive"), "missing module title in {html}");
    assert!(html.contains("Aufgabe 1 von 9"), "missing position in {html}");
    assert!(html.contains("Welche Zuordnung liegt vor?"), "missing prompt in {html}");
    assert!(html.contains("Keine von beiden"), "missing option in {html}");
    assert!(html.contains("Hilfe anzeigen (1/3)"), "missing hint button in {html}");
    assert!(html.contains("Prüfen"), "missing check button in {html}");
}

#[test]
fn runner_view_smoke_shows_feedback_after_correct_check() {
    let mut actions = diagnostic_done();
    actions.push(SessionAction::OpenModule(ModuleId::Context));
    let mut session = session_after(actions);
    answer_current(&mut session);
    session.dispatch(SessionAction::CheckTask).unwrap();

    let mut harness = setup_view_harness(session);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("feedback success"), "missing feedback in {html}");
    assert!(html.contains("Nächste Aufgabe"), "missing next button in {html}");
    assert!(!html.contains("Prüfen"), "check should be hidden in {html}");
}

#[test]
fn runner_view_smoke_renders_completion_inputs() {
    let mut actions = diagnostic_done();
    actions.push(SessionAction::OpenModule(ModuleId::Tables));
    let mut session = session_after(actions);
    for _ in 0..3 {
        solve_current(&mut session);
    }
    session
        .dispatch(SessionAction::EditCell(CellKey::new(1, 1), "0,8".into()))
        .unwrap();

    let mut harness = setup_view_harness(session);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Aufgabe 4 von 9"), "missing position in {html}");
    assert!(html.contains("input-field"), "missing cell inputs in {html}");
    assert!(html.contains("0,8"), "missing typed value in {html}");
    assert!(html.contains("0,4"), "missing given value in {html}");
}

#[test]
fn final_view_smoke_renders_running_problem() {
    let mut session = session_after(diagnostic_done());
    complete_all_modules(&mut session);
    session.dispatch(SessionAction::StartFinal).unwrap();

    let mut harness = setup_view_harness(session);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Final-Challenge"), "missing header in {html}");
    assert!(html.contains("Aufgabe 1 von 5"), "missing position in {html}");
    assert!(html.contains("Aufgabe gelöst"), "missing solve button in {html}");
}

#[test]
fn final_view_smoke_renders_summary() {
    let mut session = session_after(diagnostic_done());
    complete_all_modules(&mut session);
    session.dispatch(SessionAction::StartFinal).unwrap();
    for _ in 0..5 {
        session.dispatch(SessionAction::SolveFinalProblem).unwrap();
    }
    session.dispatch(SessionAction::ToggleReflection(1)).unwrap();

    let mut harness = setup_view_harness(session);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Geschafft!"), "missing header in {html}");
    assert!(html.contains("5/5"), "missing score in {html}");
    assert!(html.contains("4/4"), "missing modules in {html}");
    assert!(html.contains("Alltagsprofi"), "missing badge in {html}");
    assert!(html.contains("Was hast du gelernt?"), "missing reflection in {html}");
    assert!(html.contains("Nochmal starten"), "missing restart in {html}");
}
