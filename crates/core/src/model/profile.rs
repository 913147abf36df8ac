use serde::{Deserialize, Serialize};

use crate::model::ids::{ErrorTag, ModuleId};

//
// ─── SKILL LEVEL ──────────────────────────────────────────────────────────────
//

/// Starting level derived from the entry diagnostic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Novice,
    #[default]
    Developing,
    Advanced,
}

impl SkillLevel {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SkillLevel::Novice => "novice",
            SkillLevel::Developing => "developing",
            SkillLevel::Advanced => "advanced",
        }
    }
}

//
// ─── LEARNER PROFILE ──────────────────────────────────────────────────────────
//

/// Result of recording a module completion on the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionRecord {
    /// First completion: module marked complete and badge awarded.
    FirstCompletion,
    /// The module was already complete; nothing changed.
    Repeated,
}

/// Per-session learner state.
///
/// `completed_modules` behaves as an insertion-ordered set and `badges` only
/// ever grows; both are cleared by [`LearnerProfile::reset`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LearnerProfile {
    level: SkillLevel,
    error_patterns: Vec<ErrorTag>,
    completed_modules: Vec<ModuleId>,
    badges: Vec<String>,
    streak: u32,
}

impl LearnerProfile {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn level(&self) -> SkillLevel {
        self.level
    }

    #[must_use]
    pub fn error_patterns(&self) -> &[ErrorTag] {
        &self.error_patterns
    }

    #[must_use]
    pub fn completed_modules(&self) -> &[ModuleId] {
        &self.completed_modules
    }

    #[must_use]
    pub fn badges(&self) -> &[String] {
        &self.badges
    }

    /// Always 0: no action increments it yet.
    #[must_use]
    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn set_assessment(&mut self, level: SkillLevel, error_patterns: Vec<ErrorTag>) {
        self.level = level;
        self.error_patterns = error_patterns;
    }

    #[must_use]
    pub fn is_complete(&self, module: ModuleId) -> bool {
        self.completed_modules.contains(&module)
    }

    /// True once every module in [`ModuleId::ALL`] has been completed.
    #[must_use]
    pub fn all_modules_complete(&self) -> bool {
        ModuleId::ALL.iter().all(|module| self.is_complete(*module))
    }

    /// Mark `module` complete and award `badge` on the first completion only.
    pub fn record_completion(&mut self, module: ModuleId, badge: &str) -> CompletionRecord {
        if self.is_complete(module) {
            return CompletionRecord::Repeated;
        }
        self.completed_modules.push(module);
        self.badges.push(badge.to_string());
        CompletionRecord::FirstCompletion
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
