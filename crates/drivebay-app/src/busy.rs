//! Single-slot busy state
//!
//! At most one fallible unit of work runs at a time. While it runs the UI
//! shows a spinner and ignores input; a failure becomes an [`ErrorAlert`]
//! that stays up until dismissed.

use std::fmt;

/// Kind of work occupying the busy slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusyOperation {
    Import,
    Create,
    Delete,
}

impl BusyOperation {
    /// Spinner text while the work runs
    pub fn progress_label(&self) -> &'static str {
        match self {
            BusyOperation::Import => "Importing drive...",
            BusyOperation::Create => "Creating drive...",
            BusyOperation::Delete => "Removing drives...",
        }
    }

    /// Alert title when the work fails
    pub fn failure_title(&self) -> &'static str {
        match self {
            BusyOperation::Import => "Import Failed",
            BusyOperation::Create => "Create Failed",
            BusyOperation::Delete => "Delete Failed",
        }
    }
}

impl fmt::Display for BusyOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BusyOperation::Import => "import",
            BusyOperation::Create => "create",
            BusyOperation::Delete => "delete",
        };
        f.write_str(name)
    }
}

/// Error waiting for the user to acknowledge it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorAlert {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct BusyState {
    current: Option<BusyOperation>,
    alert: Option<ErrorAlert>,
    /// Animation frame counter for the spinner
    pub animation_frame: u64,
}

impl BusyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.current.is_some()
    }

    pub fn current(&self) -> Option<BusyOperation> {
        self.current
    }

    pub fn alert(&self) -> Option<&ErrorAlert> {
        self.alert.as_ref()
    }

    /// Claim the slot. Returns false if another unit of work holds it.
    pub fn begin(&mut self, operation: BusyOperation) -> bool {
        if let Some(running) = self.current {
            tracing::warn!("Refusing {} while {} is running", operation, running);
            return false;
        }
        self.current = Some(operation);
        self.animation_frame = 0;
        true
    }

    /// Release the slot and record the outcome.
    ///
    /// Completions for an operation that isn't running are ignored.
    pub fn finish(&mut self, operation: BusyOperation, result: Result<(), String>) {
        if self.current != Some(operation) {
            tracing::warn!("Ignoring completion of {} (not running)", operation);
            return;
        }
        self.current = None;
        if let Err(message) = result {
            self.surface_error(operation.failure_title(), message);
        }
    }

    pub fn surface_error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        let alert = ErrorAlert {
            title: title.into(),
            message: message.into(),
        };
        tracing::error!("{}: {}", alert.title, alert.message);
        self.alert = Some(alert);
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn tick(&mut self) {
        if self.is_busy() {
            self.animation_frame = self.animation_frame.wrapping_add(1);
        }
    }
}
