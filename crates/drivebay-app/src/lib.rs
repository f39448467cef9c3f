//! drivebay-app - Application state and orchestration for drivebay
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! drive list editor: the VM configuration store, the editor components
//! (drive list, create dialog, import flow, delete confirmation), the
//! single-slot busy executor and application settings. It has no terminal
//! dependencies; `drivebay-tui` renders [`AppState`] and feeds [`Message`]s
//! back in.

pub mod actions;
pub mod busy;
pub mod config;
pub mod create_dialog;
pub mod delete;
pub mod drive_list;
pub mod file_picker;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;
pub mod store;

// Re-export primary types
pub use handler::{BusyTask, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, UiMode};
pub use store::{ConfigHandle, DriveStore, VmConfiguration};
