//! # drivebay-core - Core Domain Types
//!
//! Foundation crate for drivebay. Provides the drive domain types, error
//! handling and logging setup shared by the app and TUI crates.
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`DriveEntry`] - One configured drive (image path, type, interface)
//! - [`DriveId`] - Stable identity of an entry across reorders and removals
//! - [`ImageType`] - Disk, CD, BIOS, kernel, initrd, device tree
//! - [`InterfaceType`] - Bus a disk or CD is attached through
//! - [`DriveDraft`] - Parameters of a drive that has not been created yet
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! ```rust
//! use drivebay_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all drivebay crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use error::{Error, Result, ResultExt};
pub use types::{DriveDraft, DriveEntry, DriveId, ImageType, InterfaceType};
