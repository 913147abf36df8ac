use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of one of the four fixed topic modules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleId {
    Tables,
    Graphs,
    Strategies,
    Context,
}

impl ModuleId {
    /// All modules in presentation order.
    pub const ALL: [ModuleId; 4] = [
        ModuleId::Tables,
        ModuleId::Graphs,
        ModuleId::Strategies,
        ModuleId::Context,
    ];

    /// Returns the content key of this module (`tables`, `graphs`, ...).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ModuleId::Tables => "tables",
            ModuleId::Graphs => "graphs",
            ModuleId::Strategies => "strategies",
            ModuleId::Context => "context",
        }
    }

    /// Position of this module in [`ModuleId::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            ModuleId::Tables => 0,
            ModuleId::Graphs => 1,
            ModuleId::Strategies => 2,
            ModuleId::Context => 3,
        }
    }
}

/// Error-pattern tag attached to a wrong diagnostic option (e.g. `sign`).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorTag(String);

impl ErrorTag {
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ErrorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ErrorTag({})", self.0)
    }
}

// ─── Display Implementations ───────────────────────────────────────────────────

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ErrorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ─── FromStr Implementations ───────────────────────────────────────────────────

/// Error type for parsing an identifier from a string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    kind: String,
    raw: String,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse {} from {:?}", self.kind, self.raw)
    }
}

impl std::error::Error for ParseIdError {}

impl ParseIdError {
    pub(crate) fn new(kind: &str, raw: &str) -> Self {
        Self {
            kind: kind.to_string(),
            raw: raw.to_string(),
        }
    }
}

impl FromStr for ModuleId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModuleId::ALL
            .into_iter()
            .find(|module| module.as_str() == s.trim())
            .ok_or_else(|| ParseIdError::new("ModuleId", s))
    }
}
