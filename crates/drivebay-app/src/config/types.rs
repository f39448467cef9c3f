//! Settings types

use drivebay_core::{DriveDraft, InterfaceType};
use serde::{Deserialize, Serialize};

/// Application settings (`config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub defaults: DriveDefaults,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Behavior settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Save the VM configuration after every change. When false, edits
    /// live in memory until the editor exits and are then discarded.
    #[serde(default = "default_true")]
    pub autosave: bool,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self { autosave: true }
    }
}

/// Initial values for the create-drive dialog
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DriveDefaults {
    #[serde(default = "default_disk_size_mib")]
    pub disk_size_mib: u64,

    #[serde(default)]
    pub interface: InterfaceType,
}

impl Default for DriveDefaults {
    fn default() -> Self {
        Self {
            disk_size_mib: default_disk_size_mib(),
            interface: InterfaceType::default(),
        }
    }
}

impl DriveDefaults {
    /// Fresh draft for a new create-drive dialog
    pub fn draft(&self) -> DriveDraft {
        DriveDraft::new(self.interface, self.disk_size_mib)
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Show the interface column for disks and CDs
    #[serde(default = "default_true")]
    pub show_interface: bool,

    /// Show the key hint footer
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            show_interface: true,
            show_key_hints: true,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_disk_size_mib() -> u64 {
    10 * 1024
}
