//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::{CreateDialogEdit, Message};
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode.
///
/// Ctrl+C quits from anywhere. While busy every other key is dropped; while
/// an error alert is up only dismissal is accepted.
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if key.is_force_quit() {
        return Some(Message::Quit);
    }
    if state.is_input_blocked() {
        return None;
    }
    if state.busy.alert().is_some() {
        return handle_key_alert(key);
    }

    match state.ui_mode {
        UiMode::Normal => handle_key_normal(state, key),
        UiMode::ConfirmDelete => handle_key_confirm_delete(key),
        UiMode::CreateDrive => handle_key_create_dialog(key),
        UiMode::ImportPrompt => handle_key_import_prompt(key),
    }
}

fn handle_key_alert(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Esc => Some(Message::DismissAlert),
        _ => None,
    }
}

fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),

        // Selection
        InputKey::Up | InputKey::Char('k') => Some(Message::SelectPrevious),
        InputKey::Down | InputKey::Char('j') => Some(Message::SelectNext),
        InputKey::Home | InputKey::Char('g') => Some(Message::SelectFirst),
        InputKey::End | InputKey::Char('G') => Some(Message::SelectLast),
        InputKey::Char(' ') => Some(Message::ToggleMark),

        // Reorder the selected entry
        InputKey::Char('K') => {
            let from = state.drive_list.selected;
            (from > 0 && from < state.drive_count()).then_some(Message::MoveDrive {
                from,
                to: from - 1,
            })
        }
        InputKey::Char('J') => {
            let from = state.drive_list.selected;
            (from + 1 < state.drive_count()).then_some(Message::MoveDrive { from, to: from + 1 })
        }

        InputKey::Char('d') | InputKey::Delete => {
            let indices = state.drive_list.delete_targets(state.drive_count());
            (!indices.is_empty()).then_some(Message::RequestDelete { indices })
        }

        InputKey::Char('i') => Some(Message::StartImport),
        InputKey::Char('n') => Some(Message::StartCreate),

        _ => None,
    }
}

fn handle_key_confirm_delete(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('y' | 'Y') | InputKey::Enter => Some(Message::ConfirmDelete),
        InputKey::Char('n' | 'N') | InputKey::Esc => Some(Message::CancelDelete),
        _ => None,
    }
}

fn handle_key_create_dialog(key: InputKey) -> Option<Message> {
    let edit = match key {
        InputKey::Esc => return Some(Message::CreateDialogCancel),
        InputKey::Enter => return Some(Message::CreateDialogDone),

        InputKey::Tab | InputKey::Down => CreateDialogEdit::FocusNext,
        InputKey::BackTab | InputKey::Up => CreateDialogEdit::FocusPrevious,
        InputKey::Right => CreateDialogEdit::CycleNext,
        InputKey::Left => CreateDialogEdit::CyclePrevious,
        InputKey::Char(' ') => CreateDialogEdit::CycleNext,
        InputKey::Char('r') => CreateDialogEdit::ToggleRemovable,
        InputKey::Char(c) if c.is_ascii_digit() => CreateDialogEdit::Input(c),
        InputKey::Backspace => CreateDialogEdit::Backspace,
        _ => return None,
    };
    Some(Message::CreateDialog(edit))
}

fn handle_key_import_prompt(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::ImportPicked(
            crate::file_picker::FilePickerResult::Cancelled,
        )),
        InputKey::Enter => Some(Message::ImportPromptSubmit),
        InputKey::Backspace => Some(Message::ImportPromptBackspace),
        InputKey::CharCtrl('u') => Some(Message::ImportPromptInput {
            text: String::new(),
        }),
        InputKey::Char(c) => Some(Message::ImportPromptChar(c)),
        _ => None,
    }
}
