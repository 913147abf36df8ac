use quiz_core::model::{CellKey, ModuleId, Task, TaskAnswer, progress_percent};

use crate::error::SessionError;

//
// ─── OUTCOMES ─────────────────────────────────────────────────────────────────
//

/// Result of checking the current answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Solved: feedback is visible and the run reports the new percentage.
    Correct { progress: u8 },
    /// Not solved; the learner may edit and check again.
    Incorrect,
}

/// Result of advancing past a solved task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunStep {
    NextTask,
    ModuleComplete {
        module: ModuleId,
        badge: &'static str,
    },
}

//
// ─── MODULE RUN ───────────────────────────────────────────────────────────────
//

/// One pass through a module's task list.
///
/// `completed` counts correct checks in this run; a wrong check neither
/// advances nor counts. Advancing needs visible feedback, so every task must
/// be solved before the next one is shown.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleRun {
    module: ModuleId,
    tasks: Vec<Task>,
    current: usize,
    completed: usize,
    show_feedback: bool,
    answer: TaskAnswer,
    hint_level: usize,
}

impl ModuleRun {
    /// # Errors
    ///
    /// Returns `SessionError::EmptyModule` if `tasks` is empty.
    pub fn new(module: ModuleId, tasks: Vec<Task>) -> Result<Self, SessionError> {
        if tasks.is_empty() {
            return Err(SessionError::EmptyModule(module));
        }
        Ok(Self {
            module,
            tasks,
            current: 0,
            completed: 0,
            show_feedback: false,
            answer: TaskAnswer::new(),
            hint_level: 0,
        })
    }

    #[must_use]
    pub fn module(&self) -> ModuleId {
        self.module
    }

    #[must_use]
    pub fn current_task(&self) -> Option<&Task> {
        self.tasks.get(self.current)
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn completed(&self) -> usize {
        self.completed
    }

    #[must_use]
    pub fn show_feedback(&self) -> bool {
        self.show_feedback
    }

    #[must_use]
    pub fn answer(&self) -> &TaskAnswer {
        &self.answer
    }

    #[must_use]
    pub fn hint_level(&self) -> usize {
        self.hint_level
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.tasks.len()
    }

    /// Hints revealed so far, in authored order.
    #[must_use]
    pub fn revealed_hints(&self) -> &[String] {
        let hints = self.current_task().map_or(&[][..], Task::hints);
        &hints[..self.hint_level.min(hints.len())]
    }

    #[must_use]
    pub fn has_more_hints(&self) -> bool {
        self.current_task()
            .is_some_and(|task| self.hint_level < task.hints().len())
    }

    #[must_use]
    pub fn can_check(&self) -> bool {
        !self.show_feedback
            && self
                .current_task()
                .is_some_and(|task| task.can_check(&self.answer))
    }

    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        progress_percent(self.completed, self.tasks.len())
    }

    /// # Errors
    ///
    /// Returns `SessionError::InputLocked` once the task is solved.
    pub fn select_option(&mut self, value: impl Into<String>) -> Result<(), SessionError> {
        self.ensure_unlocked()?;
        self.answer.select(value);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `SessionError::InputLocked` once the task is solved.
    pub fn set_input(&mut self, raw: impl Into<String>) -> Result<(), SessionError> {
        self.ensure_unlocked()?;
        self.answer.set_input(raw);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `SessionError::InputLocked` once the task is solved.
    pub fn set_cell(&mut self, key: CellKey, raw: impl Into<String>) -> Result<(), SessionError> {
        self.ensure_unlocked()?;
        self.answer.set_cell(key, raw);
        Ok(())
    }

    /// Reveal one more hint and return the new hint level.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoMoreHints` when every hint is already shown and
    /// `SessionError::InputLocked` once the task is solved.
    pub fn reveal_hint(&mut self) -> Result<usize, SessionError> {
        self.ensure_unlocked()?;
        if !self.has_more_hints() {
            return Err(SessionError::NoMoreHints);
        }
        self.hint_level += 1;
        Ok(self.hint_level)
    }

    /// Check the current answer against the task's solution.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InputLocked` if the task is already solved and
    /// `SessionError::NotReady` if the answer is incomplete.
    pub fn check(&mut self) -> Result<CheckOutcome, SessionError> {
        self.ensure_unlocked()?;
        let task = self.current_task().ok_or(SessionError::Completed)?;
        if !task.can_check(&self.answer) {
            return Err(SessionError::NotReady);
        }
        if !task.check(&self.answer) {
            return Ok(CheckOutcome::Incorrect);
        }

        self.completed += 1;
        self.show_feedback = true;
        Ok(CheckOutcome::Correct {
            progress: self.progress_percent(),
        })
    }

    /// Move past the solved task, or finish the module after the last one.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::FeedbackPending` if the current task is unsolved.
    pub fn advance(&mut self) -> Result<RunStep, SessionError> {
        if !self.show_feedback {
            return Err(SessionError::FeedbackPending);
        }
        if self.is_last() {
            return Ok(RunStep::ModuleComplete {
                module: self.module,
                badge: self.module.badge(),
            });
        }

        self.current += 1;
        self.show_feedback = false;
        self.answer = TaskAnswer::new();
        self.hint_level = 0;
        Ok(RunStep::NextTask)
    }

    fn ensure_unlocked(&self) -> Result<(), SessionError> {
        if self.show_feedback {
            Err(SessionError::InputLocked)
        } else {
            Ok(())
        }
    }
}
