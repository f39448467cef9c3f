//! Application state (Model in TEA pattern)

use drivebay_core::prelude::*;

use crate::busy::BusyState;
use crate::config::Settings;
use crate::create_dialog::CreateDriveDialogState;
use crate::delete::PendingDelete;
use crate::drive_list::DriveListState;
use crate::file_picker::ImportPromptState;
use crate::store::{ConfigHandle, DriveStore};

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Drive list with selection and key hints
    #[default]
    Normal,

    /// Delete confirmation for the pending selection
    ConfirmDelete,

    /// Create-drive dialog
    CreateDrive,

    /// Path prompt standing in for a file picker
    ImportPrompt,
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// Source of truth for the drive list
    pub config: ConfigHandle,

    pub settings: Settings,

    pub ui_mode: UiMode,

    pub drive_list: DriveListState,

    /// At most one delete awaits confirmation
    pub pending_delete: Option<PendingDelete>,

    /// Open create dialog; `None` once dismissed
    pub create_dialog: Option<CreateDriveDialogState>,

    pub import_prompt: ImportPromptState,

    pub busy: BusyState,

    /// Last configuration revision the UI state was synced to
    pub seen_revision: u64,

    quitting: bool,
}

impl AppState {
    pub fn new(config: ConfigHandle, settings: Settings) -> Self {
        let seen_revision = config.revision();
        let mut state = Self {
            config,
            settings,
            ui_mode: UiMode::Normal,
            drive_list: DriveListState::new(),
            pending_delete: None,
            create_dialog: None,
            import_prompt: ImportPromptState::new(),
            busy: BusyState::new(),
            seen_revision,
            quitting: false,
        };
        state.sync_with_config();
        state
    }

    /// Drive count, or 0 if the configuration cannot be read
    pub fn drive_count(&self) -> usize {
        self.config.read(|c| c.drive_count()).unwrap_or_else(|e| {
            warn!("Cannot read configuration: {}", e);
            0
        })
    }

    /// Re-anchor view state on the current configuration.
    ///
    /// Called after every committed revision.
    pub fn sync_with_config(&mut self) {
        let len = self.drive_count();
        self.drive_list.sync(len);
        self.seen_revision = self.config.revision();
    }

    pub fn request_quit(&mut self) {
        self.quitting = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quitting
    }

    /// Input is blocked while a unit of work runs
    pub fn is_input_blocked(&self) -> bool {
        self.busy.is_busy()
    }
}
