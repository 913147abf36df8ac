use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

//
// ─── RELATION ─────────────────────────────────────────────────────────────────
//

/// Classification of a mapping between two quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Relation {
    Proportional,
    Antiproportional,
    None,
    /// Situation that looks proportional but is not (over-linearization).
    FalseOverlinearization,
}

impl Relation {
    /// Options offered for a value table.
    pub const TABLE_OPTIONS: [Relation; 3] = [
        Relation::Proportional,
        Relation::Antiproportional,
        Relation::None,
    ];

    /// Options offered for an everyday situation.
    pub const SITUATION_OPTIONS: [Relation; 4] = [
        Relation::Proportional,
        Relation::Antiproportional,
        Relation::None,
        Relation::FalseOverlinearization,
    ];

    /// Identifying value, also the key used in authored feedback maps.
    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            Relation::Proportional => "proportional",
            Relation::Antiproportional => "antiproportional",
            Relation::None => "none",
            Relation::FalseOverlinearization => "false-overlinearization",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Relation::Proportional => "Proportional",
            Relation::Antiproportional => "Antiproportional",
            Relation::None => "Keine von beiden",
            Relation::FalseOverlinearization => "Falsch (Überlinearisierung)",
        }
    }
}

//
// ─── TASK PAYLOADS ────────────────────────────────────────────────────────────
//

/// Decide which relation a value table shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognitionTask {
    pub id: String,
    /// `(x, y)` pairs, rendered as two table rows.
    pub data: Vec<[f64; 2]>,
    pub correct: Relation,
    #[serde(default)]
    pub hints: Vec<String>,
    /// Keyed by `correct` and by option value.
    #[serde(default)]
    pub feedback: BTreeMap<String, String>,
}

/// Fill the blank (`null`) cells of a value table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionTask {
    pub id: String,
    pub description: String,
    pub data: Vec<Vec<Option<f64>>>,
    pub solution: Vec<Vec<f64>>,
}

impl CompletionTask {
    /// Coordinates of every blank cell, row-major.
    pub fn blank_cells(&self) -> impl Iterator<Item = CellKey> + '_ {
        self.data.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|(_, cell)| cell.is_none())
                .map(move |(col, _)| CellKey::new(row, col))
        })
    }

    #[must_use]
    pub fn expected(&self, cell: CellKey) -> Option<f64> {
        self.solution.get(cell.row)?.get(cell.col).copied()
    }
}

/// Numeric question answered with a calculation strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyTask {
    pub id: String,
    pub question: String,
    pub solution: f64,
    #[serde(default)]
    pub hints: Vec<String>,
}

/// Word problem with a numeric answer and optional unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextProblemTask {
    pub id: String,
    pub text: String,
    pub solution: f64,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub hints: Vec<String>,
}

/// Classify an everyday situation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SituationTask {
    pub id: String,
    pub situation: String,
    pub correct: Relation,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrapOption {
    pub value: i64,
    #[serde(default)]
    pub correct: bool,
}

/// Word problem whose naive linear answer is wrong.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrapTask {
    pub id: String,
    pub text: String,
    pub options: Vec<TrapOption>,
    /// Keyed by the option value rendered as a string.
    #[serde(default)]
    pub feedback: BTreeMap<String, String>,
}

impl TrapTask {
    #[must_use]
    pub fn correct_value(&self) -> Option<i64> {
        self.options.iter().find(|opt| opt.correct).map(|opt| opt.value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub value: String,
    pub label: String,
}

/// Generic single-choice question used by the graph, error-detection and
/// plausibility collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceTask {
    pub id: String,
    pub question: String,
    pub options: Vec<ChoiceOption>,
    pub correct: String,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub hints: Vec<String>,
}

//
// ─── TASK ─────────────────────────────────────────────────────────────────────
//

/// Kind tag attached when a module's task list is assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    TableRecognition,
    TableCompletion,
    ErrorDetection,
    GraphTransformation,
    GraphAsPicture,
    GraphComparison,
    StrategyChoice,
    StrategyMixed,
    Plausibility,
    SituationAssessment,
    SimpleProblem,
    OverlinearizationTrap,
}

impl TaskKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TaskKind::TableRecognition => "table-recognition",
            TaskKind::TableCompletion => "table-completion",
            TaskKind::ErrorDetection => "error-detection",
            TaskKind::GraphTransformation => "graph-transformation",
            TaskKind::GraphAsPicture => "graph-as-picture",
            TaskKind::GraphComparison => "graph-comparison",
            TaskKind::StrategyChoice => "strategy-choice",
            TaskKind::StrategyMixed => "strategy-mixed",
            TaskKind::Plausibility => "plausibility",
            TaskKind::SituationAssessment => "situation-assessment",
            TaskKind::SimpleProblem => "simple-problem",
            TaskKind::OverlinearizationTrap => "overlinearization-trap",
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which strategy sub-collection a numeric strategy task came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    Choice,
    Mixed,
}

/// Which sub-collection a generic choice task came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceKind {
    ErrorDetection,
    GraphTransformation,
    GraphAsPicture,
    GraphComparison,
    Plausibility,
}

/// One quiz item of a module, tagged by kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Task {
    TableRecognition(RecognitionTask),
    TableCompletion(CompletionTask),
    Strategy(StrategyKind, StrategyTask),
    TextProblem(TextProblemTask),
    SituationAssessment(SituationTask),
    OverlinearizationTrap(TrapTask),
    Choice(ChoiceKind, ChoiceTask),
}

impl Task {
    #[must_use]
    pub fn kind(&self) -> TaskKind {
        match self {
            Task::TableRecognition(_) => TaskKind::TableRecognition,
            Task::TableCompletion(_) => TaskKind::TableCompletion,
            Task::Strategy(StrategyKind::Choice, _) => TaskKind::StrategyChoice,
            Task::Strategy(StrategyKind::Mixed, _) => TaskKind::StrategyMixed,
            Task::TextProblem(_) => TaskKind::SimpleProblem,
            Task::SituationAssessment(_) => TaskKind::SituationAssessment,
            Task::OverlinearizationTrap(_) => TaskKind::OverlinearizationTrap,
            Task::Choice(kind, _) => match kind {
                ChoiceKind::ErrorDetection => TaskKind::ErrorDetection,
                ChoiceKind::GraphTransformation => TaskKind::GraphTransformation,
                ChoiceKind::GraphAsPicture => TaskKind::GraphAsPicture,
                ChoiceKind::GraphComparison => TaskKind::GraphComparison,
                ChoiceKind::Plausibility => TaskKind::Plausibility,
            },
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Task::TableRecognition(t) => &t.id,
            Task::TableCompletion(t) => &t.id,
            Task::Strategy(_, t) => &t.id,
            Task::TextProblem(t) => &t.id,
            Task::SituationAssessment(t) => &t.id,
            Task::OverlinearizationTrap(t) => &t.id,
            Task::Choice(_, t) => &t.id,
        }
    }

    /// Authored hints, empty for kinds without a hint system.
    #[must_use]
    pub fn hints(&self) -> &[String] {
        match self {
            Task::TableRecognition(t) => &t.hints,
            Task::Strategy(_, t) => &t.hints,
            Task::TextProblem(t) => &t.hints,
            Task::Choice(_, t) => &t.hints,
            Task::TableCompletion(_)
            | Task::SituationAssessment(_)
            | Task::OverlinearizationTrap(_) => &[],
        }
    }
}

//
// ─── CELL KEY ─────────────────────────────────────────────────────────────────
//

/// Grid coordinate of a completion-table cell, printed as `row-col`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellKey {
    pub row: usize,
    pub col: usize,
}

impl CellKey {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for CellKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.row, self.col)
    }
}

impl std::str::FromStr for CellKey {
    type Err = crate::model::ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = s
            .split_once('-')
            .and_then(|(row, col)| Some(CellKey::new(row.parse().ok()?, col.parse().ok()?)));
        parsed.ok_or_else(|| crate::model::ParseIdError::new("CellKey", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_cells_are_row_major() {
        let task = CompletionTask {
            id: "c".into(),
            description: "Ergänze".into(),
            data: vec![vec![None, Some(4.0)], vec![Some(2.0), None]],
            solution: vec![vec![2.0, 4.0], vec![2.0, 2.0]],
        };
        let blanks: Vec<_> = task.blank_cells().collect();
        assert_eq!(blanks, vec![CellKey::new(0, 0), CellKey::new(1, 1)]);
        assert_eq!(task.expected(CellKey::new(1, 1)), Some(2.0));
        assert_eq!(task.expected(CellKey::new(3, 0)), None);
    }

    #[test]
    fn cell_key_parses_display_form() {
        let key: CellKey = "1-0".parse().unwrap();
        assert_eq!(key, CellKey::new(1, 0));
        assert_eq!(key.to_string(), "1-0");
        assert!("x-1".parse::<CellKey>().is_err());
    }

    #[test]
    fn relation_reads_kebab_case() {
        let relation: Relation = serde_json::from_str("\"false-overlinearization\"").unwrap();
        assert_eq!(relation, Relation::FalseOverlinearization);
        assert_eq!(relation.value(), "false-overlinearization");
    }

    #[test]
    fn strategy_kind_maps_to_tag() {
        let task = Task::Strategy(
            StrategyKind::Mixed,
            StrategyTask {
                id: "s".into(),
                question: "?".into(),
                solution: 1.0,
                hints: Vec::new(),
            },
        );
        assert_eq!(task.kind().as_str(), "strategy-mixed");
    }
}
