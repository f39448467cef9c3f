//! Integration tests for drive list workflows against a configuration file

use std::fs;
use std::path::Path;

use drivebay::headless::commands::execute;
use drivebay::{open_configuration, HeadlessCommand, HeadlessEvent};
use drivebay_app::actions::execute_busy_task;
use drivebay_app::config::Settings;
use drivebay_app::handler::{self, UpdateAction};
use drivebay_app::message::Message;
use drivebay_app::store::load_vm_config;
use drivebay_app::{AppState, InputKey, UiMode};
use drivebay_core::{DriveDraft, ImageType};
use tempfile::TempDir;

/// Run a message through update, executing busy work inline
fn run(state: &mut AppState, message: Message) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);
        if let Some(UpdateAction::RunBusy(task)) = result.action {
            let operation = task.operation();
            let outcome = execute_busy_task(&state.config, task).map_err(|e| e.to_string());
            handler::update(
                state,
                Message::BusyFinished {
                    operation,
                    result: outcome,
                },
            );
        }
        msg = result.message;
    }
}

fn key(state: &mut AppState, c: char) {
    run(state, Message::Key(InputKey::Char(c)));
}

fn write_image(dir: &Path, name: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, b"image").unwrap();
    path
}

#[test]
fn test_editor_changes_are_saved_to_disk() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("guest.toml");
    let config = open_configuration(&path, &Settings::default()).unwrap();
    let mut state = AppState::new(config, Settings::default());

    // Create a disk with the default draft
    key(&mut state, 'n');
    run(&mut state, Message::Key(InputKey::Enter));

    // Import firmware through the prompt
    let firmware = write_image(temp.path(), "OVMF.fd");
    key(&mut state, 'i');
    run(
        &mut state,
        Message::ImportPromptInput {
            text: firmware.display().to_string(),
        },
    );
    run(&mut state, Message::Key(InputKey::Enter));

    // Move firmware to the front
    run(&mut state, Message::Key(InputKey::End));
    key(&mut state, 'K');

    assert_eq!(state.ui_mode, UiMode::Normal);
    assert!(state.busy.alert().is_none());

    let saved = load_vm_config(&path).unwrap();
    let types: Vec<_> = saved.drives().iter().map(|d| d.image_type).collect();
    assert_eq!(types, vec![ImageType::Bios, ImageType::Disk]);
    assert_eq!(saved.name, "guest");
}

#[test]
fn test_delete_confirmation_persists_removal() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("vm.toml");
    let config = open_configuration(&path, &Settings::default()).unwrap();
    let mut state = AppState::new(config, Settings::default());
    for _ in 0..3 {
        run(
            &mut state,
            Message::CreateDriveFinished {
                draft: DriveDraft::default(),
            },
        );
    }

    // Mark first and last, delete both
    run(&mut state, Message::Key(InputKey::Char(' ')));
    run(&mut state, Message::Key(InputKey::End));
    run(&mut state, Message::Key(InputKey::Char(' ')));
    key(&mut state, 'd');
    assert_eq!(state.ui_mode, UiMode::ConfirmDelete);
    key(&mut state, 'y');

    let saved = load_vm_config(&path).unwrap();
    let ids: Vec<_> = saved.drives().iter().map(|d| d.id.0).collect();
    assert_eq!(ids, vec![2]);
}

#[test]
fn test_read_only_file_rejects_headless_and_tui_changes() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("locked.toml");
    fs::write(&path, "name = \"Locked\"\nread_only = true\n").unwrap();
    let config = open_configuration(&path, &Settings::default()).unwrap();

    let result = tokio_test::block_on(execute(
        &config,
        HeadlessCommand::Create {
            image_type: ImageType::Disk,
            interface: None,
            size: Some(64),
            removable: false,
        },
        &DriveDraft::default(),
    ));
    assert!(result.is_err());

    let mut state = AppState::new(config, Settings::default());
    key(&mut state, 'n');
    run(&mut state, Message::Key(InputKey::Enter));

    let alert = state.busy.alert().expect("create should fail");
    assert_eq!(alert.title, "Create Failed");
    assert!(alert.message.contains("read-only"));
    assert_eq!(state.drive_count(), 0);
}

#[tokio::test]
async fn test_headless_commands_share_the_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("vm.toml");
    let iso = write_image(temp.path(), "install.iso");
    let defaults = DriveDraft::default();

    let config = open_configuration(&path, &Settings::default()).unwrap();
    execute(&config, HeadlessCommand::Import { file: Some(iso) }, &defaults)
        .await
        .unwrap();

    // A second process sees the imported drive
    let reopened = open_configuration(&path, &Settings::default()).unwrap();
    let listed = execute(&reopened, HeadlessCommand::List, &defaults)
        .await
        .unwrap();

    assert!(matches!(
        listed[..],
        [HeadlessEvent::Drive {
            index: 0,
            image_type: ImageType::Cd,
            ..
        }]
    ));
}
