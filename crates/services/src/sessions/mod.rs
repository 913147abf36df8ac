mod controller;
mod diagnostic;
mod final_challenge;
mod module_run;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use controller::{Phase, SessionAction, SessionController, SessionEvent};
pub use diagnostic::{DiagnosticRun, DiagnosticStep};
pub use final_challenge::{FinalChallengeRun, FinalStep, FinalSummary, REFLECTION_PROMPTS};
pub use module_run::{CheckOutcome, ModuleRun, RunStep};
