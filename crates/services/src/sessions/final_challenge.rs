use std::collections::BTreeSet;

use quiz_core::model::{LearnerProfile, ModuleId};

use crate::error::SessionError;

/// Items of the "Was hast du gelernt?" checklist on the final summary.
pub const REFLECTION_PROMPTS: [&str; 5] = [
    "Proportionale Zuordnungen erkennen",
    "Antiproportionale Zuordnungen erkennen",
    "Graphen interpretieren",
    "Verschiedene Rechenstrategien anwenden",
    "Textaufgaben lösen",
];

/// Outcome of resolving one final-challenge problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinalStep {
    Next,
    Finished,
}

/// Snapshot shown once the last problem is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalSummary {
    pub score: usize,
    pub total: usize,
    pub modules_mastered: usize,
    pub module_total: usize,
    pub badges: Vec<String>,
}

impl FinalSummary {
    #[must_use]
    pub fn from_profile(run: &FinalChallengeRun, profile: &LearnerProfile) -> Self {
        Self {
            score: run.score(),
            total: run.total(),
            modules_mastered: profile.completed_modules().len(),
            module_total: ModuleId::ALL.len(),
            badges: profile.badges().to_vec(),
        }
    }
}

/// Fixed-length problem sequence. Each problem is resolved by a single
/// "solved" action; there is no answer to validate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FinalChallengeRun {
    total: usize,
    current: usize,
    score: usize,
    reflections: BTreeSet<usize>,
}

impl FinalChallengeRun {
    #[must_use]
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.current >= self.total
    }

    #[must_use]
    pub fn is_reflected(&self, index: usize) -> bool {
        self.reflections.contains(&index)
    }

    /// Resolve the current problem.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` once every problem is resolved.
    pub fn solve(&mut self) -> Result<FinalStep, SessionError> {
        if self.is_finished() {
            return Err(SessionError::Completed);
        }
        self.score += 1;
        self.current += 1;
        Ok(if self.is_finished() {
            FinalStep::Finished
        } else {
            FinalStep::Next
        })
    }

    /// Flip a checklist item and return its new state.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::UnknownReflection` for an index outside
    /// [`REFLECTION_PROMPTS`] and `SessionError::FeedbackPending` while
    /// problems remain.
    pub fn toggle_reflection(&mut self, index: usize) -> Result<bool, SessionError> {
        if !self.is_finished() {
            return Err(SessionError::FeedbackPending);
        }
        if index >= REFLECTION_PROMPTS.len() {
            return Err(SessionError::UnknownReflection { index });
        }
        if self.reflections.remove(&index) {
            Ok(false)
        } else {
            self.reflections.insert(index);
            Ok(true)
        }
    }
}
