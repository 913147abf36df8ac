//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::ModuleId;

/// Errors emitted by the session controller and its runs.
///
/// A wrong answer is never an error; these only describe actions that are
/// not possible in the current state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("{action} is not available during {phase}")]
    InvalidAction {
        action: &'static str,
        phase: &'static str,
    },
    #[error("diagnostic has no items")]
    EmptyDiagnostic,
    #[error("module {0} has no tasks")]
    EmptyModule(ModuleId),
    #[error("option {index} does not exist")]
    UnknownOption { index: usize },
    #[error("no option selected")]
    NoSelection,
    #[error("answer is not ready to be checked")]
    NotReady,
    #[error("task already solved; inputs are locked")]
    InputLocked,
    #[error("current task has not been solved yet")]
    FeedbackPending,
    #[error("no more hints for this task")]
    NoMoreHints,
    #[error("final challenge is locked until every module is complete")]
    FinalLocked,
    #[error("reflection {index} does not exist")]
    UnknownReflection { index: usize },
    #[error("run already completed")]
    Completed,
}
