use std::sync::Arc;

use quiz_core::Content;
use quiz_core::model::{CellKey, CompletionRecord, LearnerProfile, ModuleId, ProgressMap};
use quiz_core::scoring::{DiagnosticOutcome, analyze_diagnostic};
use tracing::{debug, info};

use crate::error::SessionError;
use super::diagnostic::{DiagnosticRun, DiagnosticStep};
use super::final_challenge::{FinalChallengeRun, FinalStep, FinalSummary};
use super::module_run::{CheckOutcome, ModuleRun, RunStep};

//
// ─── PHASE ────────────────────────────────────────────────────────────────────
//

/// Where the learner currently is. Each phase owns its transient run state,
/// so leaving a phase drops it.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Phase {
    #[default]
    Start,
    Diagnostic(DiagnosticRun),
    ModuleSelect,
    ModuleRun(ModuleRun),
    Final(FinalChallengeRun),
}

impl Phase {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Start => "start",
            Phase::Diagnostic(_) => "diagnostic",
            Phase::ModuleSelect => "module-select",
            Phase::ModuleRun(_) => "module-run",
            Phase::Final(_) => "final",
        }
    }
}

//
// ─── ACTIONS & EVENTS ─────────────────────────────────────────────────────────
//

/// Everything a view can ask the controller to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    Begin,
    SelectDiagnosticOption(usize),
    SubmitDiagnosticAnswer,
    OpenModule(ModuleId),
    SelectOption(String),
    EditInput(String),
    EditCell(CellKey, String),
    RevealHint,
    CheckTask,
    NextTask,
    LeaveModule,
    StartFinal,
    SolveFinalProblem,
    ToggleReflection(usize),
    Restart,
}

impl SessionAction {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            SessionAction::Begin => "begin",
            SessionAction::SelectDiagnosticOption(_) => "select-diagnostic-option",
            SessionAction::SubmitDiagnosticAnswer => "submit-diagnostic-answer",
            SessionAction::OpenModule(_) => "open-module",
            SessionAction::SelectOption(_) => "select-option",
            SessionAction::EditInput(_) => "edit-input",
            SessionAction::EditCell(_, _) => "edit-cell",
            SessionAction::RevealHint => "reveal-hint",
            SessionAction::CheckTask => "check-task",
            SessionAction::NextTask => "next-task",
            SessionAction::LeaveModule => "leave-module",
            SessionAction::StartFinal => "start-final",
            SessionAction::SolveFinalProblem => "solve-final-problem",
            SessionAction::ToggleReflection(_) => "toggle-reflection",
            SessionAction::Restart => "restart",
        }
    }
}

/// What a successful dispatch changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    DiagnosticStarted { total: usize },
    DiagnosticOptionSelected { index: usize },
    DiagnosticAdvanced { index: usize },
    DiagnosticCompleted(DiagnosticOutcome),
    ModuleOpened { module: ModuleId, total: usize },
    AnswerUpdated,
    HintRevealed { level: usize },
    TaskChecked(CheckOutcome),
    TaskAdvanced { index: usize },
    ModuleCompleted { module: ModuleId, record: CompletionRecord },
    ModuleLeft { module: ModuleId },
    FinalStarted { total: usize },
    FinalProblemSolved { score: usize, finished: bool },
    ReflectionToggled { index: usize, checked: bool },
    Restarted,
}

//
// ─── CONTROLLER ───────────────────────────────────────────────────────────────
//

/// Reducer over the whole learning session.
///
/// Views read state through the getters and change it only through
/// [`SessionController::dispatch`]. Profile and progress live for the whole
/// session; run state lives inside the [`Phase`].
#[derive(Debug, Clone, PartialEq)]
pub struct SessionController {
    content: Arc<Content>,
    phase: Phase,
    profile: LearnerProfile,
    progress: ProgressMap,
}

type Transition = (Phase, Result<SessionEvent, SessionError>);

impl SessionController {
    #[must_use]
    pub fn new(content: Arc<Content>) -> Self {
        Self {
            content,
            phase: Phase::Start,
            profile: LearnerProfile::new(),
            progress: ProgressMap::new(),
        }
    }

    #[must_use]
    pub fn content(&self) -> &Content {
        &self.content
    }

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    #[must_use]
    pub fn profile(&self) -> &LearnerProfile {
        &self.profile
    }

    #[must_use]
    pub fn progress(&self) -> &ProgressMap {
        &self.progress
    }

    #[must_use]
    pub fn can_start_final(&self) -> bool {
        self.profile.all_modules_complete()
    }

    /// Summary of a finished final challenge; `None` in every other state.
    #[must_use]
    pub fn final_summary(&self) -> Option<FinalSummary> {
        match &self.phase {
            Phase::Final(run) if run.is_finished() => {
                Some(FinalSummary::from_profile(run, &self.profile))
            }
            _ => None,
        }
    }

    /// Apply one action.
    ///
    /// A rejected action leaves the controller unchanged.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidAction` when the action does not belong to
    /// the current phase, or the run-specific error of the phase handler.
    pub fn dispatch(&mut self, action: SessionAction) -> Result<SessionEvent, SessionError> {
        if action == SessionAction::Restart {
            self.restart();
            return Ok(SessionEvent::Restarted);
        }

        let phase = std::mem::take(&mut self.phase);
        let (next, result) = match phase {
            Phase::Start => self.on_start(action),
            Phase::Diagnostic(run) => self.on_diagnostic(run, action),
            Phase::ModuleSelect => self.on_module_select(action),
            Phase::ModuleRun(run) => self.on_module_run(run, action),
            Phase::Final(run) => self.on_final(run, action),
        };
        self.phase = next;
        result
    }

    fn restart(&mut self) {
        info!(from = self.phase.name(), "session restarted");
        self.phase = Phase::Start;
        self.profile.reset();
        self.progress.reset();
    }

    fn on_start(&mut self, action: SessionAction) -> Transition {
        match action {
            SessionAction::Begin => {
                match DiagnosticRun::new(self.content.diagnostic_items().to_vec()) {
                    Ok(run) => {
                        let total = run.total();
                        info!(total, "diagnostic started");
                        (
                            Phase::Diagnostic(run),
                            Ok(SessionEvent::DiagnosticStarted { total }),
                        )
                    }
                    Err(err) => (Phase::Start, Err(err)),
                }
            }
            other => rejected(Phase::Start, &other),
        }
    }

    fn on_diagnostic(&mut self, mut run: DiagnosticRun, action: SessionAction) -> Transition {
        match action {
            SessionAction::SelectDiagnosticOption(index) => {
                let result = run
                    .select(index)
                    .map(|()| SessionEvent::DiagnosticOptionSelected { index });
                (Phase::Diagnostic(run), result)
            }
            SessionAction::SubmitDiagnosticAnswer => match run.submit() {
                Ok(DiagnosticStep::Next) => {
                    let index = run.current_index();
                    debug!(index, "diagnostic advanced");
                    (
                        Phase::Diagnostic(run),
                        Ok(SessionEvent::DiagnosticAdvanced { index }),
                    )
                }
                Ok(DiagnosticStep::Finished(answers)) => {
                    let outcome = analyze_diagnostic(&answers);
                    self.profile
                        .set_assessment(outcome.level, outcome.error_patterns.clone());
                    info!(
                        level = outcome.level.as_str(),
                        correct = outcome.correct_count,
                        patterns = outcome.error_patterns.len(),
                        "diagnostic completed"
                    );
                    (
                        Phase::ModuleSelect,
                        Ok(SessionEvent::DiagnosticCompleted(outcome)),
                    )
                }
                Err(err) => (Phase::Diagnostic(run), Err(err)),
            },
            other => rejected(Phase::Diagnostic(run), &other),
        }
    }

    fn on_module_select(&mut self, action: SessionAction) -> Transition {
        match action {
            SessionAction::OpenModule(module) => {
                match ModuleRun::new(module, self.content.module_tasks(module)) {
                    Ok(run) => {
                        let total = run.total();
                        info!(module = module.as_str(), total, "module opened");
                        (
                            Phase::ModuleRun(run),
                            Ok(SessionEvent::ModuleOpened { module, total }),
                        )
                    }
                    Err(err) => (Phase::ModuleSelect, Err(err)),
                }
            }
            SessionAction::StartFinal => {
                if !self.can_start_final() {
                    return (Phase::ModuleSelect, Err(SessionError::FinalLocked));
                }
                let total = self.content.final_problem_count();
                info!(total, "final challenge started");
                (
                    Phase::Final(FinalChallengeRun::new(total)),
                    Ok(SessionEvent::FinalStarted { total }),
                )
            }
            other => rejected(Phase::ModuleSelect, &other),
        }
    }

    fn on_module_run(&mut self, mut run: ModuleRun, action: SessionAction) -> Transition {
        let module = run.module();
        let result = match action {
            SessionAction::SelectOption(value) => {
                run.select_option(value).map(|()| SessionEvent::AnswerUpdated)
            }
            SessionAction::EditInput(raw) => {
                run.set_input(raw).map(|()| SessionEvent::AnswerUpdated)
            }
            SessionAction::EditCell(key, raw) => {
                run.set_cell(key, raw).map(|()| SessionEvent::AnswerUpdated)
            }
            SessionAction::RevealHint => run.reveal_hint().map(|level| {
                debug!(module = module.as_str(), level, "hint revealed");
                SessionEvent::HintRevealed { level }
            }),
            SessionAction::CheckTask => run.check().map(|outcome| {
                debug!(
                    module = module.as_str(),
                    task = run.current_task().map_or("", |task| task.id()),
                    ?outcome,
                    "task checked"
                );
                if let CheckOutcome::Correct { progress } = outcome {
                    self.progress.set(module, progress);
                }
                SessionEvent::TaskChecked(outcome)
            }),
            SessionAction::NextTask => match run.advance() {
                Ok(RunStep::NextTask) => Ok(SessionEvent::TaskAdvanced {
                    index: run.current_index(),
                }),
                Ok(RunStep::ModuleComplete { module, badge }) => {
                    let record = self.profile.record_completion(module, badge);
                    info!(module = module.as_str(), ?record, "module completed");
                    return (
                        Phase::ModuleSelect,
                        Ok(SessionEvent::ModuleCompleted { module, record }),
                    );
                }
                Err(err) => Err(err),
            },
            SessionAction::LeaveModule => {
                info!(module = module.as_str(), "module left");
                return (Phase::ModuleSelect, Ok(SessionEvent::ModuleLeft { module }));
            }
            other => return rejected(Phase::ModuleRun(run), &other),
        };
        (Phase::ModuleRun(run), result)
    }

    fn on_final(&mut self, mut run: FinalChallengeRun, action: SessionAction) -> Transition {
        let result = match action {
            SessionAction::SolveFinalProblem => run.solve().map(|step| {
                let finished = step == FinalStep::Finished;
                if finished {
                    info!(score = run.score(), total = run.total(), "final challenge finished");
                }
                SessionEvent::FinalProblemSolved {
                    score: run.score(),
                    finished,
                }
            }),
            SessionAction::ToggleReflection(index) => run
                .toggle_reflection(index)
                .map(|checked| SessionEvent::ReflectionToggled { index, checked }),
            other => return rejected(Phase::Final(run), &other),
        };
        (Phase::Final(run), result)
    }
}

fn rejected(phase: Phase, action: &SessionAction) -> Transition {
    let err = SessionError::InvalidAction {
        action: action.name(),
        phase: phase.name(),
    };
    (phase, Err(err))
}
