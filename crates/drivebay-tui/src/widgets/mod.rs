//! Widget components for the drive editor

mod busy_indicator;
mod confirm_delete;
mod create_drive_dialog;
mod drive_list;
mod error_alert;
mod header;
mod import_prompt;
mod key_hints;
pub mod modal_overlay;

pub use busy_indicator::{BusyIndicator, SPINNER};
pub use confirm_delete::ConfirmDeleteDialog;
pub use create_drive_dialog::CreateDriveDialog;
pub use drive_list::DriveList;
pub use error_alert::ErrorAlertDialog;
pub use header::Header;
pub use import_prompt::ImportPrompt;
pub use key_hints::KeyHints;
