#![forbid(unsafe_code)]

pub mod error;
pub mod sessions;

pub use sessions as session;

pub use error::SessionError;

pub use sessions::{
    CheckOutcome, DiagnosticRun, DiagnosticStep, FinalChallengeRun, FinalStep, FinalSummary,
    ModuleRun, Phase, REFLECTION_PROMPTS, RunStep, SessionAction, SessionController, SessionEvent,
};
