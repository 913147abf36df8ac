//! Static content bundle: diagnostic items, module task collections and the
//! final challenge.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{
    ChoiceKind, ChoiceTask, CompletionTask, DiagnosticItem, ModuleId, RecognitionTask, Relation,
    SituationTask, StrategyKind, StrategyTask, Task, TextProblemTask, TrapTask,
};

const BUNDLED_CONTENT: &str = include_str!("../data/content.json");

/// Number of completion tables used by the tables module.
pub const COMPLETION_TASK_LIMIT: usize = 4;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ContentError {
    #[error("failed to read content from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse content: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("diagnostic has no items")]
    EmptyDiagnostic,

    #[error("diagnostic item {id} has no options")]
    ItemWithoutOptions { id: String },

    #[error("diagnostic item {id} has no correct option")]
    ItemWithoutCorrectOption { id: String },

    #[error("module {module} has no tasks")]
    EmptyModule { module: ModuleId },

    #[error("completion task {id}: solution shape does not match data grid")]
    SolutionShape { id: String },

    #[error("task {id}: correct value {correct:?} is not among the options")]
    UnknownCorrectOption { id: String, correct: String },

    #[error("trap task {id} has no correct option")]
    TrapWithoutCorrectOption { id: String },
}

//
// ─── SECTIONS ─────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticSection {
    pub items: Vec<DiagnosticItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TablesSection {
    #[serde(default)]
    pub recognition: Vec<RecognitionTask>,
    #[serde(default)]
    pub completion: Vec<CompletionTask>,
    #[serde(default)]
    pub error_detection: Vec<ChoiceTask>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphsSection {
    #[serde(default)]
    pub transformations: Vec<ChoiceTask>,
    #[serde(default)]
    pub graph_as_picture: Vec<ChoiceTask>,
    #[serde(default)]
    pub comparison: Vec<ChoiceTask>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategiesSection {
    #[serde(default)]
    pub strategy_choice: Vec<StrategyTask>,
    #[serde(default)]
    pub mixed: Vec<StrategyTask>,
    #[serde(default)]
    pub plausibility: Vec<ChoiceTask>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextSection {
    #[serde(default)]
    pub situation_assessment: Vec<SituationTask>,
    #[serde(default)]
    pub simple_problems: Vec<TextProblemTask>,
    #[serde(default)]
    pub overlinearization_traps: Vec<TrapTask>,
}

/// Final challenge problems; only their count drives the challenge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinalChallengeSection {
    #[serde(default)]
    pub problems: Vec<serde_json::Value>,
}

//
// ─── CONTENT ──────────────────────────────────────────────────────────────────
//

/// Read-only content catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    pub diagnostic: DiagnosticSection,
    #[serde(default)]
    pub tables: TablesSection,
    #[serde(default)]
    pub graphs: GraphsSection,
    #[serde(default)]
    pub strategies: StrategiesSection,
    #[serde(default)]
    pub context: ContextSection,
    #[serde(default)]
    pub final_challenge: FinalChallengeSection,
}

impl Content {
    /// The content shipped with the application.
    ///
    /// # Errors
    ///
    /// Returns `ContentError` if the embedded bundle fails to parse or validate.
    pub fn bundled() -> Result<Self, ContentError> {
        Self::from_json_str(BUNDLED_CONTENT)
    }

    /// Parse and validate a JSON bundle.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Parse` for malformed JSON and the structural
    /// variants for content that cannot be played through.
    pub fn from_json_str(raw: &str) -> Result<Self, ContentError> {
        let content: Content = serde_json::from_str(raw)?;
        content.validate()?;
        Ok(content)
    }

    /// Read, parse and validate a JSON bundle from disk.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Io` if the file cannot be read.
    pub fn from_path(path: &Path) -> Result<Self, ContentError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    #[must_use]
    pub fn diagnostic_items(&self) -> &[DiagnosticItem] {
        &self.diagnostic.items
    }

    #[must_use]
    pub fn final_problem_count(&self) -> usize {
        self.final_challenge.problems.len()
    }

    /// Assemble a module's task list by concatenating its sub-collections in
    /// the module's fixed order.
    #[must_use]
    pub fn module_tasks(&self, module: ModuleId) -> Vec<Task> {
        match module {
            ModuleId::Tables => {
                let tables = &self.tables;
                let recognition = tables.recognition.iter().cloned().map(Task::TableRecognition);
                let completion = tables
                    .completion
                    .iter()
                    .take(COMPLETION_TASK_LIMIT)
                    .cloned()
                    .map(Task::TableCompletion);
                let detection = choice_tasks(&tables.error_detection, ChoiceKind::ErrorDetection);
                recognition.chain(completion).chain(detection).collect()
            }
            ModuleId::Graphs => {
                let graphs = &self.graphs;
                choice_tasks(&graphs.transformations, ChoiceKind::GraphTransformation)
                    .chain(choice_tasks(&graphs.graph_as_picture, ChoiceKind::GraphAsPicture))
                    .chain(choice_tasks(&graphs.comparison, ChoiceKind::GraphComparison))
                    .collect()
            }
            ModuleId::Strategies => {
                let strategies = &self.strategies;
                let choice = strategies
                    .strategy_choice
                    .iter()
                    .cloned()
                    .map(|t| Task::Strategy(StrategyKind::Choice, t));
                let mixed = strategies
                    .mixed
                    .iter()
                    .cloned()
                    .map(|t| Task::Strategy(StrategyKind::Mixed, t));
                let plausibility = choice_tasks(&strategies.plausibility, ChoiceKind::Plausibility);
                choice.chain(mixed).chain(plausibility).collect()
            }
            ModuleId::Context => {
                let context = &self.context;
                let situations = context
                    .situation_assessment
                    .iter()
                    .cloned()
                    .map(Task::SituationAssessment);
                let problems = context.simple_problems.iter().cloned().map(Task::TextProblem);
                let traps = context
                    .overlinearization_traps
                    .iter()
                    .cloned()
                    .map(Task::OverlinearizationTrap);
                situations.chain(problems).chain(traps).collect()
            }
        }
    }

    /// Structural checks that every item can be answered and every module finished.
    ///
    /// # Errors
    ///
    /// Returns the first `ContentError` found.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.diagnostic.items.is_empty() {
            return Err(ContentError::EmptyDiagnostic);
        }
        for item in &self.diagnostic.items {
            if item.options.is_empty() {
                return Err(ContentError::ItemWithoutOptions { id: item.id.clone() });
            }
            if !item.options.iter().any(|opt| opt.correct) {
                return Err(ContentError::ItemWithoutCorrectOption { id: item.id.clone() });
            }
        }

        for module in ModuleId::ALL {
            let tasks = self.module_tasks(module);
            if tasks.is_empty() {
                return Err(ContentError::EmptyModule { module });
            }
            for task in &tasks {
                validate_task(task)?;
            }
        }
        Ok(())
    }
}

fn choice_tasks(tasks: &[ChoiceTask], kind: ChoiceKind) -> impl Iterator<Item = Task> + '_ {
    tasks.iter().cloned().map(move |t| Task::Choice(kind, t))
}

fn validate_task(task: &Task) -> Result<(), ContentError> {
    match task {
        Task::TableCompletion(t) => {
            let shape_ok = t.data.len() == t.solution.len()
                && t.data
                    .iter()
                    .zip(&t.solution)
                    .all(|(row, sol)| row.len() == sol.len());
            if !shape_ok {
                return Err(ContentError::SolutionShape { id: t.id.clone() });
            }
        }
        Task::OverlinearizationTrap(t) => {
            if t.correct_value().is_none() {
                return Err(ContentError::TrapWithoutCorrectOption { id: t.id.clone() });
            }
        }
        Task::Choice(_, t) => {
            if !t.options.iter().any(|opt| opt.value == t.correct) {
                return Err(ContentError::UnknownCorrectOption {
                    id: t.id.clone(),
                    correct: t.correct.clone(),
                });
            }
        }
        Task::TableRecognition(t) => {
            if !Relation::TABLE_OPTIONS.contains(&t.correct) {
                return Err(ContentError::UnknownCorrectOption {
                    id: t.id.clone(),
                    correct: t.correct.value().into(),
                });
            }
        }
        Task::Strategy(_, _)
        | Task::TextProblem(_)
        | Task::SituationAssessment(_) => {}
    }
    Ok(())
}
