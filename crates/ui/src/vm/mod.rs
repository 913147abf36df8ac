mod diagnostic_vm;
mod final_vm;
mod module_vm;
mod number_fmt;
mod task_vm;

pub use diagnostic_vm::{DiagnosticOptionVm, DiagnosticVm, map_diagnostic};
pub use final_vm::{FinalSummaryVm, FinalVm, ReflectionVm, map_final};
pub use module_vm::{ModuleCardVm, ModuleSelectVm, map_module_select};
pub use number_fmt::format_number;
pub use task_vm::{
    CellVm, HintLineVm, HintVm, OptionVm, PairTableVm, RunnerVm, TaskBodyVm, TaskVm, map_runner,
    map_task,
};
