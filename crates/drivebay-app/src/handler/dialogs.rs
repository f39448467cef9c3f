//! Import prompt and create-drive dialog handlers

use drivebay_core::prelude::*;
use drivebay_core::DriveDraft;

use crate::create_dialog::{CreateDriveDialogState, DialogOutcome};
use crate::file_picker::FilePickerResult;
use crate::message::{CreateDialogEdit, Message};
use crate::state::{AppState, UiMode};

use super::drives::run_busy;
use super::{BusyTask, UpdateResult};

// ─────────────────────────────────────────────────────────
// Import
// ─────────────────────────────────────────────────────────

pub fn handle_start_import(state: &mut AppState) -> UpdateResult {
    state.import_prompt.clear();
    state.ui_mode = UiMode::ImportPrompt;
    UpdateResult::none()
}

pub fn handle_prompt_char(state: &mut AppState, c: char) -> UpdateResult {
    state.import_prompt.push_char(c);
    UpdateResult::none()
}

pub fn handle_prompt_backspace(state: &mut AppState) -> UpdateResult {
    state.import_prompt.backspace();
    UpdateResult::none()
}

/// Replace the prompt text (pasted paths). Ignored unless the prompt is open.
pub fn handle_prompt_input(state: &mut AppState, text: String) -> UpdateResult {
    if state.ui_mode != UiMode::ImportPrompt || state.is_input_blocked() {
        return UpdateResult::none();
    }
    state.import_prompt.set_input(text);
    UpdateResult::none()
}

pub fn handle_prompt_submit(state: &mut AppState) -> UpdateResult {
    match state.import_prompt.submit() {
        Some(result) => UpdateResult::message(Message::ImportPicked(result)),
        None => UpdateResult::none(),
    }
}

/// The picker answered: cancel is a silent no-op, failure goes to the
/// alert, a chosen file is imported under the busy slot
pub fn handle_import_picked(state: &mut AppState, result: FilePickerResult) -> UpdateResult {
    state.import_prompt.clear();
    state.ui_mode = UiMode::Normal;

    match result {
        FilePickerResult::Cancelled => {
            debug!("Import cancelled");
            UpdateResult::none()
        }
        FilePickerResult::Failed(message) => {
            state
                .busy
                .surface_error("Import Failed", Error::picker(message).to_string());
            UpdateResult::none()
        }
        FilePickerResult::Chosen(path) => {
            info!("Importing {:?}", path);
            run_busy(state, BusyTask::Import { path })
        }
    }
}

// ─────────────────────────────────────────────────────────
// Create
// ─────────────────────────────────────────────────────────

pub fn handle_start_create(state: &mut AppState) -> UpdateResult {
    let draft = state.settings.defaults.draft();
    state.create_dialog = Some(CreateDriveDialogState::new(draft));
    state.ui_mode = UiMode::CreateDrive;
    UpdateResult::none()
}

pub fn handle_create_edit(state: &mut AppState, edit: CreateDialogEdit) -> UpdateResult {
    let Some(dialog) = state.create_dialog.as_mut() else {
        return UpdateResult::none();
    };
    match edit {
        CreateDialogEdit::FocusNext => dialog.focus_next(),
        CreateDialogEdit::FocusPrevious => dialog.focus_previous(),
        CreateDialogEdit::CycleNext => dialog.cycle_next(),
        CreateDialogEdit::CyclePrevious => dialog.cycle_previous(),
        CreateDialogEdit::ToggleRemovable => dialog.toggle_removable(),
        CreateDialogEdit::Input(c) => dialog.input_char(c),
        CreateDialogEdit::Backspace => dialog.backspace(),
    }
    UpdateResult::none()
}

pub fn handle_create_cancel(state: &mut AppState) -> UpdateResult {
    state.ui_mode = UiMode::Normal;
    if let Some(dialog) = state.create_dialog.take() {
        debug!("Create dialog dismissed: {:?}", dialog.cancel());
    }
    UpdateResult::none()
}

pub fn handle_create_done(state: &mut AppState) -> UpdateResult {
    state.ui_mode = UiMode::Normal;
    match state.create_dialog.take().map(CreateDriveDialogState::done) {
        Some(DialogOutcome::Done(draft)) => {
            UpdateResult::message(Message::CreateDriveFinished { draft })
        }
        Some(DialogOutcome::Cancelled) | None => UpdateResult::none(),
    }
}

pub fn handle_create_finished(state: &mut AppState, draft: DriveDraft) -> UpdateResult {
    run_busy(state, BusyTask::Create { draft })
}
