//! Headless subcommands

use std::path::PathBuf;

use clap::Subcommand;
use drivebay_app::delete::{remove_drives, PendingDelete};
use drivebay_app::file_picker::{import_with_picker, FilePicker, PresetPicker, StdinPicker};
use drivebay_app::{ConfigHandle, DriveStore};
use drivebay_core::prelude::*;
use drivebay_core::{DriveDraft, ImageType, InterfaceType};

use super::HeadlessEvent;

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum HeadlessCommand {
    /// Print every drive as a JSON line
    List,

    /// Attach an existing image file (read from stdin when omitted)
    Import {
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Create a new drive
    Create {
        /// disk, cd, bios, kernel, initrd or dtb
        #[arg(long = "type", value_name = "TYPE", default_value = "disk", value_parser = parse_image_type)]
        image_type: ImageType,

        /// Bus for disks and CDs (defaults to the settings file)
        #[arg(long, value_parser = parse_interface)]
        interface: Option<InterfaceType>,

        /// Size in MiB for new disk images (defaults to the settings file)
        #[arg(long, value_name = "MIB")]
        size: Option<u64>,

        /// Create an empty removable drive
        #[arg(long)]
        removable: bool,
    },

    /// Move the drive at FROM so it ends up at TO (0-based, as printed by `list`)
    Move { from: usize, to: usize },

    /// Remove the drives at the given positions (0-based)
    Remove {
        #[arg(required = true, value_name = "INDEX")]
        indices: Vec<usize>,
    },
}

fn parse_image_type(s: &str) -> std::result::Result<ImageType, String> {
    ImageType::from_str_id(s).ok_or_else(|| format!("unknown image type '{}'", s))
}

fn parse_interface(s: &str) -> std::result::Result<InterfaceType, String> {
    InterfaceType::from_str_id(s).ok_or_else(|| format!("unknown interface '{}'", s))
}

/// Run one headless command and print its events
pub async fn run_headless(
    config: &ConfigHandle,
    command: HeadlessCommand,
    defaults: &DriveDraft,
) -> Result<()> {
    for event in execute(config, command, defaults).await? {
        event.emit();
    }
    Ok(())
}

/// Run one headless command and return the events it produced
pub async fn execute(
    config: &ConfigHandle,
    command: HeadlessCommand,
    defaults: &DriveDraft,
) -> Result<Vec<HeadlessEvent>> {
    match command {
        HeadlessCommand::List => list_drives(config),
        HeadlessCommand::Import { file: Some(file) } => {
            import(config, &PresetPicker::chosen(file)).await.map(|e| vec![e])
        }
        HeadlessCommand::Import { file: None } => {
            eprintln!("Path of the image to attach (empty line cancels):");
            import(config, &StdinPicker).await.map(|e| vec![e])
        }
        HeadlessCommand::Create {
            image_type,
            interface,
            size,
            removable,
        } => {
            let draft = DriveDraft {
                image_type,
                interface: interface.unwrap_or(defaults.interface),
                removable,
                size_mib: size.unwrap_or(defaults.size_mib),
            };
            create(config, &draft).map(|e| vec![e])
        }
        HeadlessCommand::Move { from, to } => move_drive(config, from, to).map(|e| vec![e]),
        HeadlessCommand::Remove { indices } => remove(config, &indices).map(|e| vec![e]),
    }
}

pub fn list_drives(config: &ConfigHandle) -> Result<Vec<HeadlessEvent>> {
    config.read(|c| {
        c.drives()
            .iter()
            .enumerate()
            .map(|(index, entry)| HeadlessEvent::drive(index, entry))
            .collect()
    })
}

pub async fn import<P: FilePicker>(config: &ConfigHandle, picker: &P) -> Result<HeadlessEvent> {
    match import_with_picker(picker, config).await? {
        Some(id) => added_event(config, id),
        None => Ok(HeadlessEvent::import_cancelled()),
    }
}

pub fn create(config: &ConfigHandle, draft: &DriveDraft) -> Result<HeadlessEvent> {
    let id = config.transact(|c| c.create_drive(draft))?;
    added_event(config, id)
}

pub fn move_drive(config: &ConfigHandle, from: usize, to: usize) -> Result<HeadlessEvent> {
    config.transact(|c| c.move_drive(from, to))?;
    Ok(HeadlessEvent::drive_moved(from, to))
}

pub fn remove(config: &ConfigHandle, indices: &[usize]) -> Result<HeadlessEvent> {
    let pending = config.read(|c| PendingDelete::resolve(c, indices))?;
    let Some(pending) = pending else {
        let len = config.read(|c| c.drive_count())?;
        let index = indices.iter().copied().max().unwrap_or_default();
        return Err(Error::index_out_of_range(index, len));
    };
    let skipped = out_of_range(indices, &pending);
    if !skipped.is_empty() {
        warn!("Ignoring out-of-range indices {:?}", skipped);
    }
    let count = config.transact(|c| remove_drives(c, &pending.ids))?;
    Ok(HeadlessEvent::drives_removed(count))
}

/// Requested indices that did not resolve to a drive, deduplicated
fn out_of_range(indices: &[usize], pending: &PendingDelete) -> Vec<usize> {
    let mut skipped: Vec<usize> = indices
        .iter()
        .copied()
        .filter(|i| !pending.indices.contains(i))
        .collect();
    skipped.sort_unstable();
    skipped.dedup();
    skipped
}

fn added_event(config: &ConfigHandle, id: drivebay_core::DriveId) -> Result<HeadlessEvent> {
    config.read(|c| {
        let index = c.index_of(id)?;
        let entry = c.get(id)?;
        Some(HeadlessEvent::drive_added(id, index, entry.image_type))
    })?
    .ok_or(Error::DriveNotFound { id })
}
