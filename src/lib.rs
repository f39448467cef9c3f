//! drivebay - terminal editor for virtual machine drive lists
//!
//! The binary launches the TUI from `drivebay-tui`; the [`headless`] module
//! provides the scriptable subcommands.

pub mod headless;
pub mod startup;

pub use headless::{run_headless, HeadlessCommand, HeadlessEvent};
pub use startup::{open_configuration, DEFAULT_VM_CONFIG};
