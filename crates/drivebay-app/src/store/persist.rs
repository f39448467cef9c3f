//! TOML persistence for VM configurations

use std::path::{Path, PathBuf};

use drivebay_core::prelude::*;

use super::VmConfiguration;

const HEADER: &str = "# drivebay VM configuration\n# Drive order is boot/attach order.\n\n";

/// Load a VM configuration from a TOML file
pub fn load_vm_config(path: &Path) -> Result<VmConfiguration> {
    let content = std::fs::read_to_string(path)?;
    let mut config: VmConfiguration = toml::from_str(&content)?;
    config.repair_ids();
    debug!(
        "Loaded '{}' with {} drives from {:?}",
        config.name,
        config.drives().len(),
        path
    );
    Ok(config)
}

/// Load a VM configuration, or start a new one named after the file.
///
/// The file is not written until the first mutation.
pub fn load_or_create_vm_config(path: &Path) -> Result<VmConfiguration> {
    if path.exists() {
        return load_vm_config(path);
    }

    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "Virtual Machine".to_string());
    info!("No configuration at {:?}, starting new VM '{}'", path, name);
    Ok(VmConfiguration::new(name))
}

/// Save a VM configuration atomically (write to temp, then rename)
pub fn save_vm_config(path: &Path, config: &VmConfiguration) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let content = toml::to_string_pretty(config)?;
    let temp_path = temp_path_for(path);

    std::fs::write(&temp_path, format!("{}{}", HEADER, content))
        .with_context(|| format!("Failed to write {}", temp_path.display()))?;
    std::fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to replace {}", path.display()))?;

    debug!("Saved '{}' to {:?}", config.name, path);
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "vm.toml".to_string());
    path.with_file_name(format!(".{}.tmp", file_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delete::{remove_drives, PendingDelete};
    use crate::store::DriveStore;
    use drivebay_core::{DriveDraft, DriveId, ImageType, InterfaceType};
    use tempfile::tempdir;

    #[test]
    fn test_load_or_create_missing_file_uses_stem() {
        let temp = tempdir().unwrap();
        let config = load_or_create_vm_config(&temp.path().join("Debian 12.toml")).unwrap();

        assert_eq!(config.name, "Debian 12");
        assert_eq!(config.drive_count(), 0);
    }

    #[test]
    fn test_save_then_load_preserves_order_and_ids() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("vm.toml");
        let mut config = VmConfiguration::new("Alpine");
        config.create_drive(&DriveDraft::default()).unwrap();
        config
            .create_drive(&DriveDraft {
                image_type: ImageType::Cd,
                interface: InterfaceType::Usb,
                removable: true,
                size_mib: 0,
            })
            .unwrap();
        config.move_drive(1, 0).unwrap();

        save_vm_config(&path, &config).unwrap();
        let loaded = load_vm_config(&path).unwrap();

        assert_eq!(loaded, config);
        assert_eq!(loaded.drive_at(0).unwrap().id, DriveId(2));
        assert!(!temp.path().join(".vm.toml.tmp").exists());
    }

    #[test]
    fn test_saved_file_is_readable_toml() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("vm.toml");
        let mut config = VmConfiguration::new("Alpine");
        config.create_drive(&DriveDraft::default()).unwrap();

        save_vm_config(&path, &config).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();

        assert!(content.starts_with("# drivebay VM configuration"));
        assert!(content.contains("name = \"Alpine\""));
        assert!(content.contains("[[drives]]"));
        assert!(content.contains("image_type = \"disk\""));
    }

    #[test]
    fn test_load_minimal_hand_written_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("vm.toml");
        std::fs::write(
            &path,
            r#"
name = "Hand Written"

[[drives]]
id = 7
image_type = "bios"
image_path = "/firmware/OVMF.fd"
created_at = "2024-01-01T00:00:00Z"
"#,
        )
        .unwrap();

        let mut loaded = load_vm_config(&path).unwrap();

        assert_eq!(loaded.drive_count(), 1);
        assert_eq!(loaded.drive_at(0).unwrap().image_type, ImageType::Bios);
        // next_id defaults to 1 and must be bumped past the existing id
        let id = loaded.create_drive(&DriveDraft::default()).unwrap();
        assert_eq!(id, DriveId(8));
    }

    #[test]
    fn test_load_invalid_toml_fails() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("vm.toml");
        std::fs::write(&path, "name = [unterminated").unwrap();

        assert!(matches!(load_vm_config(&path), Err(Error::TomlParse(_))));
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("machines").join("vm.toml");

        save_vm_config(&path, &VmConfiguration::new("Nested")).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_load_with_repeated_ids_deletes_requested_row() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("vm.toml");
        std::fs::write(
            &path,
            r#"
name = "Duplicated"

[[drives]]
id = 1
image_type = "disk"
image_path = "/a.qcow2"
created_at = "2024-01-01T00:00:00Z"

[[drives]]
id = 1
image_type = "bios"
image_path = "/b.fd"
created_at = "2024-01-01T00:00:00Z"
"#,
        )
        .unwrap();

        let mut config = load_vm_config(&path).unwrap();
        assert_ne!(
            config.drive_at(0).unwrap().id,
            config.drive_at(1).unwrap().id
        );

        let pending = PendingDelete::resolve(&config, &[1]).unwrap();
        remove_drives(&mut config, &pending.ids).unwrap();

        let remaining: Vec<_> = config
            .drives()
            .iter()
            .map(|d| d.image_path.clone())
            .collect();
        assert_eq!(remaining, vec![Some(std::path::PathBuf::from("/a.qcow2"))]);
    }
}
