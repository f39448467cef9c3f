//! File picker seam and the import flow built on it
//!
//! A picker answers a [`PickRequest`] with exactly one [`FilePickerResult`].
//! The TUI collects a path with [`ImportPromptState`]; headless callers use
//! [`StdinPicker`]; tests use [`PresetPicker`].

use std::io::BufRead;
use std::path::{Path, PathBuf};

use drivebay_core::prelude::*;
use drivebay_core::DriveId;

use crate::store::{ConfigHandle, DriveStore};

/// Kinds of content a picker may offer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentCategory {
    /// Any file, no filtering
    Item,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickRequest {
    pub allowed: Vec<ContentCategory>,
    pub allow_multiple: bool,
}

impl PickRequest {
    /// One file of unrestricted type (what drive import asks for)
    pub fn any_single_file() -> Self {
        Self {
            allowed: vec![ContentCategory::Item],
            allow_multiple: false,
        }
    }
}

/// Exactly one of chosen, cancelled or failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilePickerResult {
    Chosen(PathBuf),
    Cancelled,
    Failed(String),
}

/// Something that can ask the user for a file
#[trait_variant::make(FilePicker: Send)]
pub trait LocalFilePicker {
    async fn pick(&self, request: &PickRequest) -> FilePickerResult;
}

/// Picker that always answers with a fixed result
#[derive(Debug, Clone)]
pub struct PresetPicker {
    result: FilePickerResult,
}

impl PresetPicker {
    pub fn new(result: FilePickerResult) -> Self {
        Self { result }
    }

    pub fn chosen(path: impl Into<PathBuf>) -> Self {
        Self::new(FilePickerResult::Chosen(path.into()))
    }

    pub fn cancelled() -> Self {
        Self::new(FilePickerResult::Cancelled)
    }
}

impl FilePicker for PresetPicker {
    async fn pick(&self, _request: &PickRequest) -> FilePickerResult {
        self.result.clone()
    }
}

/// Picker reading one path from standard input; an empty line cancels
#[derive(Debug, Clone, Default)]
pub struct StdinPicker;

impl FilePicker for StdinPicker {
    async fn pick(&self, _request: &PickRequest) -> FilePickerResult {
        let line = tokio::task::spawn_blocking(|| {
            let mut line = String::new();
            std::io::stdin().lock().read_line(&mut line).map(|_| line)
        })
        .await;

        match line {
            Ok(Ok(line)) => parse_path_answer(&line),
            Ok(Err(e)) => FilePickerResult::Failed(e.to_string()),
            Err(e) => FilePickerResult::Failed(e.to_string()),
        }
    }
}

/// Turn a typed answer into a picker result.
///
/// Blank input means the user backed out. A leading `~` expands to the home
/// directory.
pub fn parse_path_answer(answer: &str) -> FilePickerResult {
    let answer = answer.trim();
    if answer.is_empty() {
        return FilePickerResult::Cancelled;
    }
    match expand_home(answer) {
        Some(path) => FilePickerResult::Chosen(path),
        None => FilePickerResult::Failed("cannot resolve home directory".to_string()),
    }
}

fn expand_home(answer: &str) -> Option<PathBuf> {
    if answer == "~" {
        return dirs::home_dir();
    }
    match answer.strip_prefix("~/") {
        Some(rest) => dirs::home_dir().map(|home| home.join(rest)),
        None => Some(PathBuf::from(answer)),
    }
}

/// In-app path prompt used by the TUI in place of a native picker
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportPromptState {
    input: String,
}

impl ImportPromptState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    pub fn clear(&mut self) {
        self.input.clear();
    }

    /// Finish the prompt. `None` while the input is blank, so Enter on an
    /// empty prompt does nothing.
    pub fn submit(&self) -> Option<FilePickerResult> {
        if self.input.trim().is_empty() {
            return None;
        }
        Some(parse_path_answer(&self.input))
    }

    pub fn cancel(&self) -> FilePickerResult {
        FilePickerResult::Cancelled
    }
}

/// Import whatever `picker` returns into the configuration.
///
/// Returns `Ok(None)` when the user cancels. The store transaction runs on
/// the blocking pool; a failure leaves the configuration unchanged.
pub async fn import_with_picker<P: FilePicker>(
    picker: &P,
    config: &ConfigHandle,
) -> Result<Option<DriveId>> {
    match picker.pick(&PickRequest::any_single_file()).await {
        FilePickerResult::Cancelled => {
            debug!("Import cancelled in file picker");
            Ok(None)
        }
        FilePickerResult::Failed(message) => Err(Error::picker(message)),
        FilePickerResult::Chosen(path) => {
            let config = config.clone();
            let id = tokio::task::spawn_blocking(move || import_path(&config, &path))
                .await
                .map_err(|e| Error::configuration(format!("import task failed: {}", e)))??;
            Ok(Some(id))
        }
    }
}

/// Import one file in a single configuration transaction
pub fn import_path(config: &ConfigHandle, path: &Path) -> Result<DriveId> {
    config.transact(|c| c.import_drive(path))
}
