//! Busy task bodies: one configuration transaction each

use drivebay_core::prelude::*;

use crate::delete::remove_drives;
use crate::file_picker::import_path;
use crate::handler::BusyTask;
use crate::store::{ConfigHandle, DriveStore};

/// Apply `task` to the configuration.
///
/// Each task is a single transaction, so a failure part way through (the
/// second of three deletes, say) leaves the configuration as it was.
pub fn execute_busy_task(config: &ConfigHandle, task: BusyTask) -> Result<()> {
    match task {
        BusyTask::Import { path } => {
            let id = import_path(config, &path)?;
            info!("Imported {:?} as drive {}", path, id);
        }
        BusyTask::Create { draft } => {
            let id = config.transact(|c| c.create_drive(&draft))?;
            info!("Created {} drive {}", draft.image_type.label(), id);
        }
        BusyTask::Delete { ids } => {
            let removed = config.transact(|c| remove_drives(c, &ids))?;
            info!("Removed {} drives", removed);
        }
    }
    Ok(())
}
