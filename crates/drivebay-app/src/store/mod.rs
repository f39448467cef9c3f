//! VM configuration store
//!
//! The configuration is the single source of truth for a VM's drive list.
//! Views never cache entries; they re-derive everything from the store and
//! learn about changes through the revision counter on [`ConfigHandle`].
//!
//! - `vm_config`: [`VmConfiguration`], the in-memory drive list and its rules
//! - `handle`: [`ConfigHandle`], shared access with atomic transactions
//! - `persist`: TOML load/save

pub mod handle;
pub mod persist;
pub mod vm_config;

use std::path::Path;

use drivebay_core::{DriveDraft, DriveEntry, DriveId, Result};

pub use handle::ConfigHandle;
pub use persist::{load_or_create_vm_config, load_vm_config, save_vm_config};
pub use vm_config::{infer_image_type, VmConfiguration, MAX_DISK_SIZE_MIB};

/// Operations the drive editor needs from a configuration.
///
/// Mutations are fallible; a failed mutation leaves the store unchanged.
#[cfg_attr(test, mockall::automock)]
pub trait DriveStore {
    /// Number of configured drives
    fn drive_count(&self) -> usize;

    /// Entry at `index`, if in range
    fn drive_at(&self, index: usize) -> Option<DriveEntry>;

    /// Current position of the entry with `id`
    fn index_of(&self, id: DriveId) -> Option<usize>;

    /// Move the entry at `from` so that it ends up at position `to`
    fn move_drive(&mut self, from: usize, to: usize) -> Result<()>;

    /// Remove and return the entry at `at`
    fn remove_drive(&mut self, at: usize) -> Result<DriveEntry>;

    /// Materialize a drive from draft parameters and append it
    fn create_drive(&mut self, draft: &DriveDraft) -> Result<DriveId>;

    /// Attach an existing image file as a new drive
    fn import_drive(&mut self, path: &Path) -> Result<DriveId>;
}
