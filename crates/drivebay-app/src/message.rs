//! Message types for the application (TEA pattern)

use drivebay_core::DriveDraft;

use crate::busy::BusyOperation;
use crate::file_picker::FilePickerResult;
use crate::input_key::InputKey;

/// Edits applied to the open create-drive dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateDialogEdit {
    FocusNext,
    FocusPrevious,
    CycleNext,
    CyclePrevious,
    ToggleRemovable,
    /// Character typed into the size field
    Input(char),
    Backspace,
}

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit the editor
    Quit,

    // ─────────────────────────────────────────────────────────
    // Drive List Messages
    // ─────────────────────────────────────────────────────────
    SelectNext,
    SelectPrevious,
    SelectFirst,
    SelectLast,
    /// Mark or unmark the selected row for deletion
    ToggleMark,
    /// Move the entry at `from` so it ends up at `to`
    MoveDrive { from: usize, to: usize },

    // ─────────────────────────────────────────────────────────
    // Delete Messages
    // ─────────────────────────────────────────────────────────
    /// Ask for confirmation before removing the entries at `indices`
    RequestDelete { indices: Vec<usize> },
    ConfirmDelete,
    CancelDelete,

    // ─────────────────────────────────────────────────────────
    // Import Messages
    // ─────────────────────────────────────────────────────────
    /// Open the file picker
    StartImport,
    ImportPromptChar(char),
    ImportPromptBackspace,
    /// Replace the prompt text (paste)
    ImportPromptInput { text: String },
    ImportPromptSubmit,
    /// The picker answered
    ImportPicked(FilePickerResult),

    // ─────────────────────────────────────────────────────────
    // Create Messages
    // ─────────────────────────────────────────────────────────
    /// Open the create-drive dialog with a fresh draft
    StartCreate,
    CreateDialog(CreateDialogEdit),
    CreateDialogCancel,
    CreateDialogDone,
    /// The dialog finished with `draft`; materialize it
    CreateDriveFinished { draft: DriveDraft },

    // ─────────────────────────────────────────────────────────
    // Busy / Configuration Messages
    // ─────────────────────────────────────────────────────────
    /// A busy unit of work completed. Errors arrive pre-rendered.
    BusyFinished {
        operation: BusyOperation,
        result: Result<(), String>,
    },
    DismissAlert,
    /// The configuration committed a new revision
    ConfigChanged { revision: u64 },
}
