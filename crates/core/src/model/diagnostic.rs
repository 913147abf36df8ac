use serde::{Deserialize, Serialize};

use crate::model::ids::ErrorTag;

/// One answer option of a diagnostic item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticOption {
    pub text: String,
    #[serde(default)]
    pub correct: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_type: Option<ErrorTag>,
}

/// A single question of the entry diagnostic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticItem {
    pub id: String,
    pub question: String,
    pub options: Vec<DiagnosticOption>,
}

impl DiagnosticItem {
    /// Record the learner's choice of `option` as an answer.
    ///
    /// Returns `None` if the index is out of range.
    #[must_use]
    pub fn answer(&self, option: usize) -> Option<DiagnosticAnswer> {
        let chosen = self.options.get(option)?;
        Some(DiagnosticAnswer {
            id: self.id.clone(),
            correct: chosen.correct,
            error_type: chosen.error_type.clone(),
        })
    }
}

/// Result of answering one diagnostic item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticAnswer {
    pub id: String,
    pub correct: bool,
    pub error_type: Option<ErrorTag>,
}

impl DiagnosticAnswer {
    #[must_use]
    pub fn new(id: impl Into<String>, correct: bool, error_type: Option<ErrorTag>) -> Self {
        Self {
            id: id.into(),
            correct,
            error_type,
        }
    }
}
