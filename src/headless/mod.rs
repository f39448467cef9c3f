//! Headless mode - drive list commands with JSON output
//!
//! Each command runs one operation against the VM configuration and prints
//! NDJSON (one JSON object per line) to stdout, so scripts can drive the
//! editor without parsing a terminal UI.
//!
//! # Example Output
//!
//! ```json
//! {"event":"drive","index":0,"id":1,"image_type":"disk","interface":"virtio","image_path":"Images/disk-1.qcow2","removable":false,"size_mib":10240}
//! {"event":"drive_added","id":2,"index":1,"image_type":"cd","timestamp":1704700001000}
//! ```

pub mod commands;

use std::io::{self, Write};
use std::path::PathBuf;

use chrono::Utc;
use drivebay_core::{DriveEntry, DriveId, ImageType, InterfaceType};
use serde::Serialize;
use tracing::error;

pub use commands::{run_headless, HeadlessCommand};

/// Events emitted in headless mode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// One row of `list` output
    Drive {
        index: usize,
        id: DriveId,
        image_type: ImageType,
        #[serde(skip_serializing_if = "Option::is_none")]
        interface: Option<InterfaceType>,
        #[serde(skip_serializing_if = "Option::is_none")]
        image_path: Option<PathBuf>,
        removable: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        size_mib: Option<u64>,
    },

    /// A drive was imported or created
    DriveAdded {
        id: DriveId,
        index: usize,
        image_type: ImageType,
        timestamp: i64,
    },

    DriveMoved {
        from: usize,
        to: usize,
        timestamp: i64,
    },

    DrivesRemoved { count: usize, timestamp: i64 },

    /// The picker was dismissed; nothing changed
    ImportCancelled { timestamp: i64 },

    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Emit this event to stdout as one JSON line
    pub fn emit(&self) {
        let mut stdout = io::stdout().lock();
        if let Err(e) = self.write_to(&mut stdout) {
            error!("Failed to write headless event to stdout: {}", e);
        }
    }

    /// Write this event as one JSON line and flush
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let json = serde_json::to_string(self).map_err(io::Error::other)?;
        writeln!(out, "{}", json)?;
        out.flush()
    }

    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn drive(index: usize, entry: &DriveEntry) -> Self {
        Self::Drive {
            index,
            id: entry.id,
            image_type: entry.image_type,
            interface: entry.visible_interface(),
            image_path: entry.image_path.clone(),
            removable: entry.removable,
            size_mib: entry.size_mib,
        }
    }

    pub fn drive_added(id: DriveId, index: usize, image_type: ImageType) -> Self {
        Self::DriveAdded {
            id,
            index,
            image_type,
            timestamp: Self::now(),
        }
    }

    pub fn drive_moved(from: usize, to: usize) -> Self {
        Self::DriveMoved {
            from,
            to,
            timestamp: Self::now(),
        }
    }

    pub fn drives_removed(count: usize) -> Self {
        Self::DrivesRemoved {
            count,
            timestamp: Self::now(),
        }
    }

    pub fn import_cancelled() -> Self {
        Self::ImportCancelled {
            timestamp: Self::now(),
        }
    }

    pub fn error(message: String, fatal: bool) -> Self {
        Self::Error {
            message,
            fatal,
            timestamp: Self::now(),
        }
    }
}
