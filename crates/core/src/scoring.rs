//! Diagnostic classification and numeric answer comparison.

use crate::model::{DiagnosticAnswer, ErrorTag, SkillLevel};

/// Absolute tolerance for numeric answers (exclusive).
pub const NUMERIC_TOLERANCE: f64 = 0.01;

// Differences are rounded to this many units per 1.0 before comparing, so a
// typed boundary value such as `7.49` against `7.5` counts as exactly 0.01.
const DIFF_SCALE: f64 = 1e9;

/// Level classification and collected error tags of a finished diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticOutcome {
    pub level: SkillLevel,
    pub error_patterns: Vec<ErrorTag>,
    pub correct_count: usize,
}

/// Threshold rule: at most 2 correct is novice, at least 4 is advanced.
#[must_use]
pub fn classify_level(correct_count: usize) -> SkillLevel {
    if correct_count <= 2 {
        SkillLevel::Novice
    } else if correct_count >= 4 {
        SkillLevel::Advanced
    } else {
        SkillLevel::Developing
    }
}

/// Classify a diagnostic run and collect the error tags of wrong answers in
/// answer order.
#[must_use]
pub fn analyze_diagnostic(results: &[DiagnosticAnswer]) -> DiagnosticOutcome {
    let correct_count = results.iter().filter(|r| r.correct).count();
    let error_patterns = results
        .iter()
        .filter(|r| !r.correct)
        .filter_map(|r| r.error_type.clone())
        .collect();

    DiagnosticOutcome {
        level: classify_level(correct_count),
        error_patterns,
        correct_count,
    }
}

/// Parse a learner's raw numeric input.
///
/// Accepts a decimal comma. Returns `None` for empty, unparseable or
/// non-finite input.
#[must_use]
pub fn parse_numeric(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let normalized = trimmed.replace(',', ".");
    normalized.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// `|actual - expected| < NUMERIC_TOLERANCE`, evaluated on the rounded difference.
#[must_use]
pub fn within_tolerance(actual: f64, expected: f64) -> bool {
    let diff = ((actual - expected).abs() * DIFF_SCALE).round();
    diff < (NUMERIC_TOLERANCE * DIFF_SCALE).round()
}

/// Parse `raw` and compare it against `expected`. Unparseable input never matches.
#[must_use]
pub fn numeric_matches(raw: &str, expected: f64) -> bool {
    parse_numeric(raw).is_some_and(|actual| within_tolerance(actual, expected))
}
