//! In-memory VM configuration and its drive rules

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use chrono::Utc;
use drivebay_core::prelude::*;
use drivebay_core::{DriveDraft, DriveEntry, DriveId, ImageType, InterfaceType};
use serde::{Deserialize, Serialize};

use super::DriveStore;

/// Largest disk that can be created from the editor (16 TiB)
pub const MAX_DISK_SIZE_MIB: u64 = 16 * 1024 * 1024;

const MIB: u64 = 1024 * 1024;

/// A virtual machine's drive configuration (persisted as TOML)
///
/// Field order matters for TOML output: `drives` is an array of tables and
/// must come after every plain value.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct VmConfiguration {
    /// Display name of the virtual machine
    pub name: String,

    /// Directory new disk images are placed in
    #[serde(default = "default_images_dir")]
    pub images_dir: PathBuf,

    /// Locked configurations reject every mutation
    #[serde(default)]
    pub read_only: bool,

    /// Interface given to imported disks and CDs
    #[serde(default)]
    pub default_interface: InterfaceType,

    #[serde(default = "first_id")]
    next_id: u64,

    #[serde(default)]
    drives: Vec<DriveEntry>,
}

fn default_images_dir() -> PathBuf {
    PathBuf::from("Images")
}

fn first_id() -> u64 {
    1
}

impl Default for VmConfiguration {
    fn default() -> Self {
        Self::new("Virtual Machine")
    }
}

impl VmConfiguration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            images_dir: default_images_dir(),
            read_only: false,
            default_interface: InterfaceType::default(),
            next_id: first_id(),
            drives: Vec::new(),
        }
    }

    /// Drives in boot/attach order
    pub fn drives(&self) -> &[DriveEntry] {
        &self.drives
    }

    pub fn get(&self, id: DriveId) -> Option<&DriveEntry> {
        self.drives.iter().find(|d| d.id == id)
    }

    /// Make every drive id unique and `next_id` larger than every id in use.
    ///
    /// Hand-edited files may carry a stale counter or repeat an id; later
    /// duplicates get fresh ids so lookups by id find exactly one entry.
    pub(crate) fn repair_ids(&mut self) {
        let max_used = self.drives.iter().map(|d| d.id.0).max().unwrap_or(0);
        if self.next_id <= max_used {
            warn!(
                "Configuration '{}' next_id {} is stale, bumping to {}",
                self.name,
                self.next_id,
                max_used + 1
            );
            self.next_id = max_used + 1;
        }

        let mut seen = HashSet::with_capacity(self.drives.len());
        for index in 0..self.drives.len() {
            let id = self.drives[index].id;
            if !seen.insert(id) {
                let fresh = self.allocate_id();
                warn!(
                    "Configuration '{}' repeats drive id {} at position {}, reassigning {}",
                    self.name, id, index, fresh
                );
                self.drives[index].id = fresh;
                seen.insert(fresh);
            }
        }
    }

    fn ensure_writable(&self) -> Result<()> {
        if self.read_only {
            return Err(Error::read_only(&self.name));
        }
        Ok(())
    }

    fn allocate_id(&mut self) -> DriveId {
        let id = DriveId(self.next_id);
        self.next_id += 1;
        id
    }

    fn push_entry(
        &mut self,
        image_type: ImageType,
        interface: Option<InterfaceType>,
        image_path: Option<PathBuf>,
        removable: bool,
        size_mib: Option<u64>,
    ) -> DriveId {
        let id = self.allocate_id();
        self.drives.push(DriveEntry {
            id,
            image_type,
            interface: interface.filter(|_| image_type.has_interface()),
            image_path,
            removable,
            size_mib,
            created_at: Utc::now(),
        });
        id
    }
}

impl DriveStore for VmConfiguration {
    fn drive_count(&self) -> usize {
        self.drives.len()
    }

    fn drive_at(&self, index: usize) -> Option<DriveEntry> {
        self.drives.get(index).cloned()
    }

    fn index_of(&self, id: DriveId) -> Option<usize> {
        self.drives.iter().position(|d| d.id == id)
    }

    fn move_drive(&mut self, from: usize, to: usize) -> Result<()> {
        self.ensure_writable()?;
        let len = self.drives.len();
        if from >= len {
            return Err(Error::index_out_of_range(from, len));
        }
        if to >= len {
            return Err(Error::index_out_of_range(to, len));
        }
        if from != to {
            let entry = self.drives.remove(from);
            self.drives.insert(to, entry);
            debug!("Moved drive from {} to {} in '{}'", from, to, self.name);
        }
        Ok(())
    }

    fn remove_drive(&mut self, at: usize) -> Result<DriveEntry> {
        self.ensure_writable()?;
        if at >= self.drives.len() {
            return Err(Error::index_out_of_range(at, self.drives.len()));
        }
        let removed = self.drives.remove(at);
        debug!("Removed drive {} at {} from '{}'", removed.id, at, self.name);
        Ok(removed)
    }

    fn create_drive(&mut self, draft: &DriveDraft) -> Result<DriveId> {
        self.ensure_writable()?;

        if draft.removable {
            if !draft.image_type.has_interface() {
                return Err(Error::configuration(format!(
                    "{} drives cannot be removable",
                    draft.image_type.label()
                )));
            }
            return Ok(self.push_entry(
                draft.image_type,
                Some(draft.interface),
                None,
                true,
                None,
            ));
        }

        match draft.image_type {
            ImageType::Disk => {
                if draft.size_mib == 0 {
                    return Err(Error::configuration("disk size must be greater than zero"));
                }
                if draft.size_mib > MAX_DISK_SIZE_MIB {
                    return Err(Error::configuration(format!(
                        "disk size {} MiB exceeds the {} MiB limit",
                        draft.size_mib, MAX_DISK_SIZE_MIB
                    )));
                }
                let image_path = self
                    .images_dir
                    .join(format!("disk-{}.qcow2", self.next_id));
                Ok(self.push_entry(
                    ImageType::Disk,
                    Some(draft.interface),
                    Some(image_path),
                    false,
                    Some(draft.size_mib),
                ))
            }
            ImageType::Cd
            | ImageType::Bios
            | ImageType::Kernel
            | ImageType::Initrd
            | ImageType::Dtb => Err(Error::configuration(format!(
                "{} drives must be removable or imported from a file",
                draft.image_type.label()
            ))),
        }
    }

    fn import_drive(&mut self, path: &Path) -> Result<DriveId> {
        self.ensure_writable()?;

        let metadata =
            std::fs::metadata(path).map_err(|e| Error::file_access(path, e.to_string()))?;
        if !metadata.is_file() {
            return Err(Error::file_access(path, "not a regular file"));
        }
        std::fs::File::open(path).map_err(|e| Error::file_access(path, e.to_string()))?;
        let path = path
            .canonicalize()
            .map_err(|e| Error::file_access(path, e.to_string()))?;

        if self
            .drives
            .iter()
            .any(|d| d.image_path.as_deref() == Some(path.as_path()))
        {
            return Err(Error::configuration(format!(
                "{} is already attached to '{}'",
                path.display(),
                self.name
            )));
        }

        let image_type = infer_image_type(&path);
        let size_mib = match image_type {
            ImageType::Disk => Some(metadata.len().div_ceil(MIB)),
            _ => None,
        };
        let interface = self.default_interface;
        let id = self.push_entry(image_type, Some(interface), Some(path), false, size_mib);
        info!("Imported drive {} ({}) into '{}'", id, image_type.label(), self.name);
        Ok(id)
    }
}

/// Guess what an imported file is from its name.
///
/// Anything unrecognized is treated as a disk image.
pub fn infer_image_type(path: &Path) -> ImageType {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "iso" | "cdr" => ImageType::Cd,
        "fd" | "rom" => ImageType::Bios,
        "dtb" => ImageType::Dtb,
        "cpio" => ImageType::Initrd,
        _ if name.starts_with("initrd") || name.starts_with("initramfs") => ImageType::Initrd,
        _ if name.starts_with("vmlinuz") || name.starts_with("bzimage") => ImageType::Kernel,
        _ => ImageType::Disk,
    }
}
