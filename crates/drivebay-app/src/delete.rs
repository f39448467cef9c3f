//! Pending delete selection and identity-based removal
//!
//! Indices are resolved to [`DriveId`]s when the delete is requested. At
//! confirmation each id is looked up again and removed from wherever it is
//! now, so earlier removals shifting positions cannot make the loop skip or
//! hit the wrong entry.

use drivebay_core::prelude::*;
use drivebay_core::DriveId;

use crate::store::DriveStore;

/// A delete awaiting confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    /// Positions as the user saw them, ascending and deduplicated
    pub indices: Vec<usize>,
    /// Entries those positions referred to
    pub ids: Vec<DriveId>,
}

impl PendingDelete {
    /// Snapshot the entries at `indices`.
    ///
    /// Out-of-range indices are dropped. Returns `None` when nothing is left.
    pub fn resolve<S: DriveStore + ?Sized>(store: &S, indices: &[usize]) -> Option<Self> {
        let mut indices: Vec<usize> = indices.to_vec();
        indices.sort_unstable();
        indices.dedup();

        let count = store.drive_count();
        let (indices, ids): (Vec<usize>, Vec<DriveId>) = indices
            .into_iter()
            .filter(|i| *i < count)
            .filter_map(|i| store.drive_at(i).map(|entry| (i, entry.id)))
            .unzip();

        if ids.is_empty() {
            None
        } else {
            Some(Self { indices, ids })
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Remove each entry in `ids`, stopping at the first failure.
///
/// Returns how many entries were removed. Callers wanting all-or-nothing
/// semantics run this inside a configuration transaction.
pub fn remove_drives<S: DriveStore + ?Sized>(store: &mut S, ids: &[DriveId]) -> Result<usize> {
    let mut removed = 0;
    for &id in ids {
        let index = store.index_of(id).ok_or(Error::DriveNotFound { id })?;
        store.remove_drive(index)?;
        removed += 1;
    }
    debug!("Removed {} drives", removed);
    Ok(removed)
}
