use quiz_core::model::{DiagnosticAnswer, DiagnosticItem};

use crate::error::SessionError;

/// Outcome of submitting the current diagnostic answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticStep {
    /// Moved on to the next item.
    Next,
    /// The last item was answered; carries every answer including the last one.
    Finished(Vec<DiagnosticAnswer>),
}

/// Walks through the diagnostic items in order, one answer per item.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticRun {
    items: Vec<DiagnosticItem>,
    current: usize,
    selected: Option<usize>,
    answers: Vec<DiagnosticAnswer>,
    finished: bool,
}

impl DiagnosticRun {
    /// # Errors
    ///
    /// Returns `SessionError::EmptyDiagnostic` if there are no items.
    pub fn new(items: Vec<DiagnosticItem>) -> Result<Self, SessionError> {
        if items.is_empty() {
            return Err(SessionError::EmptyDiagnostic);
        }
        Ok(Self {
            items,
            current: 0,
            selected: None,
            answers: Vec::new(),
            finished: false,
        })
    }

    #[must_use]
    pub fn current_item(&self) -> Option<&DiagnosticItem> {
        if self.finished {
            return None;
        }
        self.items.get(self.current)
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn answers(&self) -> &[DiagnosticAnswer] {
        &self.answers
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.items.len()
    }

    /// Select an option of the current item. Changing the selection is allowed
    /// until the answer is submitted.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::UnknownOption` for an index outside the item's options.
    pub fn select(&mut self, option: usize) -> Result<(), SessionError> {
        let item = self.current_item().ok_or(SessionError::Completed)?;
        if option >= item.options.len() {
            return Err(SessionError::UnknownOption { index: option });
        }
        self.selected = Some(option);
        Ok(())
    }

    /// Submit the selected option and advance.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoSelection` if nothing is selected and
    /// `SessionError::Completed` once the last item was submitted.
    pub fn submit(&mut self) -> Result<DiagnosticStep, SessionError> {
        let item = self.current_item().ok_or(SessionError::Completed)?;
        let selected = self.selected.ok_or(SessionError::NoSelection)?;
        let answer = item
            .answer(selected)
            .ok_or(SessionError::UnknownOption { index: selected })?;

        self.answers.push(answer);
        self.selected = None;

        if self.is_last() {
            self.finished = true;
            return Ok(DiagnosticStep::Finished(self.answers.clone()));
        }
        self.current += 1;
        Ok(DiagnosticStep::Next)
    }
}
