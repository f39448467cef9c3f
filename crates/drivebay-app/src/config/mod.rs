//! Application settings for drivebay
//!
//! Supports:
//! - `<config dir>/drivebay/config.toml` - Global settings

pub mod settings;
pub mod types;

pub use settings::{init_config_file, load_settings, save_settings, settings_path};
pub use types::*;
