//! Settings parser for `<config dir>/drivebay/config.toml`

use super::types::Settings;
use drivebay_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "drivebay";

/// Default settings file location, if the platform has a config directory
pub fn settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `path`, falling back to defaults when the file is
/// missing or invalid
pub fn load_settings(path: &Path) -> Settings {
    if !path.exists() {
        debug!("No settings file at {:?}, using defaults", path);
        return Settings::default();
    }

    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", path, e);
            Settings::default()
        }
    }
}

/// Write a commented default settings file if none exists
pub fn init_config_file(path: &Path) -> Result<()> {
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::settings(format!("Failed to create {:?}: {}", parent, e)))?;
    }

    let default_content = r#"# drivebay settings

[behavior]
autosave = true         # Save the VM configuration after every change

[defaults]
disk_size_mib = 10240   # Size offered for new disks
interface = "virtio"    # ide, scsi, sd, mtd, floppy, pflash, virtio, nvme, usb

[ui]
show_interface = true
show_key_hints = true
"#;
    std::fs::write(path, default_content)
        .map_err(|e| Error::settings(format!("Failed to write {:?}: {}", path, e)))?;

    info!("Created default settings at {:?}", path);
    Ok(())
}

/// Save settings to `path` (atomic: temp file, then rename)
pub fn save_settings(path: &Path, settings: &Settings) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::settings(format!("Failed to create {:?}: {}", parent, e)))?;
    }

    let temp_path = path.with_file_name(".config.toml.tmp");
    let content = toml::to_string_pretty(settings)
        .map_err(|e| Error::settings(format!("Failed to serialize settings: {}", e)))?;
    let full_content = format!("# drivebay settings\n\n{}", content);

    std::fs::write(&temp_path, &full_content)
        .map_err(|e| Error::settings(format!("Failed to write temp file: {}", e)))?;
    std::fs::rename(&temp_path, path)
        .map_err(|e| Error::settings(format!("Failed to rename temp file: {}", e)))?;

    info!("Saved settings to {:?}", path);
    Ok(())
}
