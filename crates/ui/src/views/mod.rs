mod diagnostic;
mod final_challenge;
mod modules;
mod runner;
mod shell;
mod start;
mod state;
mod tasks;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use diagnostic::DiagnosticView;
pub use final_challenge::FinalChallengeView;
pub use modules::ModuleSelectView;
pub use runner::ModuleRunView;
pub use shell::SessionShell;
pub use start::StartView;
pub use state::{SessionStore, dispatch, use_session};
pub use tasks::TaskPanel;
