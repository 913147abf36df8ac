use std::collections::BTreeMap;

use crate::model::task::CellKey;

/// Tentative answer for the task currently on screen.
///
/// Only the part matching the task kind is read: a selected option value, a
/// single raw numeric input, or raw inputs per blank grid cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskAnswer {
    selection: Option<String>,
    input: String,
    cells: BTreeMap<CellKey, String>,
}

impl TaskAnswer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub fn cell(&self, key: CellKey) -> Option<&str> {
        self.cells.get(&key).map(String::as_str)
    }

    pub fn select(&mut self, value: impl Into<String>) {
        self.selection = Some(value.into());
    }

    pub fn set_input(&mut self, raw: impl Into<String>) {
        self.input = raw.into();
    }

    pub fn set_cell(&mut self, key: CellKey, raw: impl Into<String>) {
        self.cells.insert(key, raw.into());
    }

    /// Builder form used by tests and fixtures.
    #[must_use]
    pub fn with_selection(mut self, value: impl Into<String>) -> Self {
        self.select(value);
        self
    }

    #[must_use]
    pub fn with_input(mut self, raw: impl Into<String>) -> Self {
        self.set_input(raw);
        self
    }

    #[must_use]
    pub fn with_cell(mut self, key: CellKey, raw: impl Into<String>) -> Self {
        self.set_cell(key, raw);
        self
    }
}
