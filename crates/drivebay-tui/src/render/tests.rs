//! Full-frame rendering tests

use super::*;
use crate::test_utils::{state_with, TestTerminal};
use drivebay_app::busy::BusyOperation;
use drivebay_app::delete::PendingDelete;
use drivebay_app::message::Message;
use drivebay_app::{handler, DriveStore, InputKey};
use drivebay_core::{DriveDraft, InterfaceType};

fn draw(state: &AppState) -> TestTerminal {
    let mut term = TestTerminal::with_size(100, 24);
    term.draw_with(|frame| view(frame, state));
    term
}

#[test]
fn test_empty_configuration() {
    let state = state_with(&[]);
    let term = draw(&state);

    assert!(term.buffer_contains("Test VM"));
    assert!(term.buffer_contains("(0 drives)"));
    assert!(term.buffer_contains("No drives configured"));
    assert!(term.buffer_contains("[q] quit"));
}

#[test]
fn test_list_and_header_agree() {
    let state = state_with(&vec![DriveDraft::default(); 3]);
    let term = draw(&state);

    assert!(term.buffer_contains("(3 drives)"));
    assert!(term.buffer_contains("disk-1.qcow2"));
    assert!(term.buffer_contains("disk-3.qcow2"));
}

#[test]
fn test_view_reflects_committed_change_without_copies() {
    let state = state_with(&vec![DriveDraft::default(); 2]);
    state
        .config
        .transact(|c| c.remove_drive(0))
        .unwrap();

    let term = draw(&state);

    assert!(term.buffer_contains("(1 drive)"));
    assert!(!term.buffer_contains("disk-1.qcow2"));
}

#[test]
fn test_key_hints_can_be_hidden() {
    let mut state = state_with(&[]);
    state.settings.ui.show_key_hints = false;

    let term = draw(&state);

    assert!(!term.buffer_contains("[q] quit"));
}

#[test]
fn test_confirm_delete_overlay() {
    let mut state = state_with(&vec![DriveDraft::default(); 3]);
    state.pending_delete = state
        .config
        .read(|c| PendingDelete::resolve(c, &[0, 2]))
        .unwrap();
    state.ui_mode = UiMode::ConfirmDelete;

    let term = draw(&state);

    assert!(term.buffer_contains("Remove 2 drives?"));
}

#[test]
fn test_create_dialog_overlay() {
    let mut state = state_with(&[]);
    state.settings.defaults.interface = InterfaceType::Scsi;
    handler::update(&mut state, Message::StartCreate);

    let term = draw(&state);

    assert!(term.buffer_contains("New Drive"));
    assert!(term.buffer_contains("SCSI"));
}

#[test]
fn test_import_prompt_overlay() {
    let mut state = state_with(&[]);
    handler::update(&mut state, Message::StartImport);
    for c in "/img/a.iso".chars() {
        handler::update(&mut state, Message::Key(InputKey::Char(c)));
    }

    let term = draw(&state);

    assert!(term.buffer_contains("> /img/a.iso"));
}

#[test]
fn test_busy_spinner_overlay() {
    let mut state = state_with(&[]);
    state.busy.begin(BusyOperation::Create);

    let term = draw(&state);

    assert!(term.buffer_contains("Creating drive..."));
}

#[test]
fn test_alert_overlay() {
    let mut state = state_with(&[]);
    state
        .busy
        .surface_error("Delete Failed", "Configuration 'Test VM' is read-only");

    let term = draw(&state);

    assert!(term.buffer_contains("Delete Failed"));
    assert!(term.buffer_contains("is read-only"));
}

#[test]
fn test_compact_terminal_does_not_panic() {
    let state = state_with(&vec![DriveDraft::default(); 5]);
    let mut term = TestTerminal::compact();
    term.draw_with(|frame| view(frame, &state));

    assert!(term.buffer_contains("drivebay"));
}
