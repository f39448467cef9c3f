//! Domain types for VM drive configuration
//!
//! Defines:
//! - `DriveEntry` - One configured drive attached to a virtual machine
//! - `DriveId` - Stable identity of an entry across reorders
//! - `ImageType` / `InterfaceType` - Closed sets of drive kinds and buses
//! - `DriveDraft` - User-edited, not-yet-committed drive parameters

use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stable identifier assigned by the configuration store.
///
/// Indices shift when entries are removed or moved; ids do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct DriveId(pub u64);

impl fmt::Display for DriveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What a drive image is used for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageType {
    #[default]
    Disk,
    Cd,
    Bios,
    Kernel,
    Initrd,
    Dtb,
}

impl ImageType {
    /// All image types in display order
    pub const ALL: [ImageType; 6] = [
        ImageType::Disk,
        ImageType::Cd,
        ImageType::Bios,
        ImageType::Kernel,
        ImageType::Initrd,
        ImageType::Dtb,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ImageType::Disk => "Disk Image",
            ImageType::Cd => "CD/DVD (ISO) Image",
            ImageType::Bios => "BIOS",
            ImageType::Kernel => "Linux Kernel",
            ImageType::Initrd => "Linux RAM Disk",
            ImageType::Dtb => "Linux Device Tree Binary",
        }
    }

    /// Only disks and optical drives sit on a bus; firmware and boot images don't.
    pub fn has_interface(&self) -> bool {
        match self {
            ImageType::Disk | ImageType::Cd => true,
            ImageType::Bios | ImageType::Kernel | ImageType::Initrd | ImageType::Dtb => false,
        }
    }

    /// Identifier used in configuration files and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageType::Disk => "disk",
            ImageType::Cd => "cd",
            ImageType::Bios => "bios",
            ImageType::Kernel => "kernel",
            ImageType::Initrd => "initrd",
            ImageType::Dtb => "dtb",
        }
    }

    pub fn from_str_id(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
    }

    /// Next type in [`ImageType::ALL`], wrapping around
    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, 1)
    }

    /// Previous type in [`ImageType::ALL`], wrapping around
    pub fn previous(self) -> Self {
        cycle(&Self::ALL, self, Self::ALL.len() - 1)
    }
}

impl fmt::Display for ImageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Bus a disk or optical drive is attached through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InterfaceType {
    Ide,
    Scsi,
    Sd,
    Mtd,
    Floppy,
    Pflash,
    #[default]
    Virtio,
    Nvme,
    Usb,
}

impl InterfaceType {
    pub const ALL: [InterfaceType; 9] = [
        InterfaceType::Ide,
        InterfaceType::Scsi,
        InterfaceType::Sd,
        InterfaceType::Mtd,
        InterfaceType::Floppy,
        InterfaceType::Pflash,
        InterfaceType::Virtio,
        InterfaceType::Nvme,
        InterfaceType::Usb,
    ];

    /// Identifier as written in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            InterfaceType::Ide => "ide",
            InterfaceType::Scsi => "scsi",
            InterfaceType::Sd => "sd",
            InterfaceType::Mtd => "mtd",
            InterfaceType::Floppy => "floppy",
            InterfaceType::Pflash => "pflash",
            InterfaceType::Virtio => "virtio",
            InterfaceType::Nvme => "nvme",
            InterfaceType::Usb => "usb",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InterfaceType::Ide => "IDE",
            InterfaceType::Scsi => "SCSI",
            InterfaceType::Sd => "SD Card",
            InterfaceType::Mtd => "MTD (NAND/NOR)",
            InterfaceType::Floppy => "Floppy",
            InterfaceType::Pflash => "PC System Flash",
            InterfaceType::Virtio => "VirtIO",
            InterfaceType::Nvme => "NVMe",
            InterfaceType::Usb => "USB",
        }
    }

    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, 1)
    }

    pub fn previous(self) -> Self {
        cycle(&Self::ALL, self, Self::ALL.len() - 1)
    }

    /// Parse the configuration-file identifier (case-insensitive)
    pub fn from_str_id(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|i| i.as_str().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for InterfaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn cycle<T: Copy + PartialEq, const N: usize>(all: &[T; N], current: T, step: usize) -> T {
    let pos = all.iter().position(|v| *v == current).unwrap_or(0);
    all[(pos + step) % N]
}

/// One configured drive of a virtual machine
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DriveEntry {
    pub id: DriveId,

    pub image_type: ImageType,

    /// Present only for disk and CD drives
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interface: Option<InterfaceType>,

    /// Absent for removable drives with no media inserted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_path: Option<PathBuf>,

    #[serde(default)]
    pub removable: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_mib: Option<u64>,

    pub created_at: DateTime<Utc>,
}

impl DriveEntry {
    /// Interface worth showing for this entry, if the image type uses one
    pub fn visible_interface(&self) -> Option<InterfaceType> {
        if self.image_type.has_interface() {
            self.interface
        } else {
            None
        }
    }

    /// File name of the backing image, if any
    pub fn image_name(&self) -> Option<String> {
        self.image_path.as_ref().map(|p| {
            p.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| p.display().to_string())
        })
    }
}

/// Parameters for a drive that has not been created yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriveDraft {
    pub image_type: ImageType,
    pub interface: InterfaceType,
    pub removable: bool,
    pub size_mib: u64,
}

impl DriveDraft {
    pub fn new(interface: InterfaceType, size_mib: u64) -> Self {
        Self {
            image_type: ImageType::Disk,
            interface,
            removable: false,
            size_mib,
        }
    }
}

impl Default for DriveDraft {
    fn default() -> Self {
        Self::new(InterfaceType::default(), 10 * 1024)
    }
}
