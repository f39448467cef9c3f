//! Settings and configuration loading shared by the TUI and headless modes

use std::path::Path;

use drivebay_app::config::{self, Settings};
use drivebay_app::store::load_or_create_vm_config;
use drivebay_app::ConfigHandle;
use drivebay_core::prelude::*;

/// VM configuration opened when no path is given
pub const DEFAULT_VM_CONFIG: &str = "vm.toml";

/// Load app settings, writing a commented default file on first run
pub fn load_app_settings() -> Settings {
    let Some(path) = config::settings_path() else {
        warn!("No config directory on this platform, using default settings");
        return Settings::default();
    };
    if let Err(e) = config::init_config_file(&path) {
        warn!("Could not create default settings: {}", e);
    }
    config::load_settings(&path)
}

/// Open the VM configuration at `path`.
///
/// A missing file starts a new configuration using the settings' default
/// interface. With autosave off, edits stay in memory.
pub fn open_configuration(path: &Path, settings: &Settings) -> Result<ConfigHandle> {
    let is_new = !path.exists();
    let mut vm = load_or_create_vm_config(path)?;
    if is_new {
        vm.default_interface = settings.defaults.interface;
    }

    if settings.behavior.autosave {
        Ok(ConfigHandle::persistent(vm, path))
    } else {
        info!("Autosave disabled, changes to {:?} will not be saved", path);
        Ok(ConfigHandle::in_memory(vm))
    }
}
