mod answer;
mod diagnostic;
mod ids;
mod module;
mod profile;
mod progress;
mod task;

pub use answer::TaskAnswer;
pub use diagnostic::{DiagnosticAnswer, DiagnosticItem, DiagnosticOption};
pub use ids::{ErrorTag, ModuleId, ParseIdError};
pub use module::ModuleInfo;
pub use profile::{CompletionRecord, LearnerProfile, SkillLevel};
pub use progress::{ProgressMap, progress_percent};
pub use task::{
    CellKey, ChoiceKind, ChoiceOption, ChoiceTask, CompletionTask, RecognitionTask, Relation,
    SituationTask, StrategyKind, StrategyTask, Task, TaskKind, TextProblemTask, TrapOption,
    TrapTask,
};
