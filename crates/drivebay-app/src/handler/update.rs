//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;

use super::{dialogs, drives, keys::handle_key, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => {
            state.busy.tick();
            UpdateResult::none()
        }

        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Drive List Messages
        // ─────────────────────────────────────────────────────────
        Message::SelectNext => drives::handle_select_next(state),
        Message::SelectPrevious => drives::handle_select_previous(state),
        Message::SelectFirst => drives::handle_select_first(state),
        Message::SelectLast => drives::handle_select_last(state),
        Message::ToggleMark => drives::handle_toggle_mark(state),
        Message::MoveDrive { from, to } => drives::handle_move_drive(state, from, to),

        // ─────────────────────────────────────────────────────────
        // Delete Messages
        // ─────────────────────────────────────────────────────────
        Message::RequestDelete { indices } => drives::handle_request_delete(state, indices),
        Message::ConfirmDelete => drives::handle_confirm_delete(state),
        Message::CancelDelete => drives::handle_cancel_delete(state),

        // ─────────────────────────────────────────────────────────
        // Import Messages
        // ─────────────────────────────────────────────────────────
        Message::StartImport => dialogs::handle_start_import(state),
        Message::ImportPromptChar(c) => dialogs::handle_prompt_char(state, c),
        Message::ImportPromptBackspace => dialogs::handle_prompt_backspace(state),
        Message::ImportPromptInput { text } => dialogs::handle_prompt_input(state, text),
        Message::ImportPromptSubmit => dialogs::handle_prompt_submit(state),
        Message::ImportPicked(result) => dialogs::handle_import_picked(state, result),

        // ─────────────────────────────────────────────────────────
        // Create Messages
        // ─────────────────────────────────────────────────────────
        Message::StartCreate => dialogs::handle_start_create(state),
        Message::CreateDialog(edit) => dialogs::handle_create_edit(state, edit),
        Message::CreateDialogCancel => dialogs::handle_create_cancel(state),
        Message::CreateDialogDone => dialogs::handle_create_done(state),
        Message::CreateDriveFinished { draft } => dialogs::handle_create_finished(state, draft),

        // ─────────────────────────────────────────────────────────
        // Busy / Configuration Messages
        // ─────────────────────────────────────────────────────────
        Message::BusyFinished { operation, result } => {
            state.busy.finish(operation, result);
            if state.config.revision() != state.seen_revision {
                state.sync_with_config();
            }
            UpdateResult::none()
        }

        Message::DismissAlert => {
            state.busy.dismiss_alert();
            UpdateResult::none()
        }

        Message::ConfigChanged { revision } => {
            if revision != state.seen_revision {
                tracing::debug!("Configuration changed to revision {}", revision);
                state.sync_with_config();
            }
            UpdateResult::none()
        }
    }
}
