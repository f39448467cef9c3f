//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes
//! - `drives`: Selection, reorder and delete handlers
//! - `dialogs`: Import prompt and create dialog handlers

pub(crate) mod dialogs;
pub(crate) mod drives;
pub(crate) mod keys;
pub(crate) mod update;


use std::path::PathBuf;

use drivebay_core::{DriveDraft, DriveId};

use crate::busy::BusyOperation;
use crate::message::Message;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Run a fallible unit of work off the UI loop.
    ///
    /// The busy slot is already claimed; the task must answer with exactly
    /// one `Message::BusyFinished`.
    RunBusy(BusyTask),
}

/// Configuration mutations that run under the busy contract
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BusyTask {
    /// Import the chosen file
    Import { path: PathBuf },
    /// Materialize a draft from the create dialog
    Create { draft: DriveDraft },
    /// Remove entries by identity, all or nothing
    Delete { ids: Vec<DriveId> },
}

impl BusyTask {
    pub fn operation(&self) -> BusyOperation {
        match self {
            BusyTask::Import { .. } => BusyOperation::Import,
            BusyTask::Create { .. } => BusyOperation::Create,
            BusyTask::Delete { .. } => BusyOperation::Delete,
        }
    }
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
