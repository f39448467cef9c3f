//! Drive list view derivation and selection state
//!
//! The list is derived from the configuration on every render. Nothing here
//! holds copies of entries; [`DriveListState`] only tracks which row the user
//! is on and which rows are marked for deletion.

use std::collections::BTreeSet;
use std::iter::Enumerate;
use std::slice;

use drivebay_core::{DriveEntry, DriveId};

use crate::store::VmConfiguration;

/// Shown instead of the list when the configuration has no drives
pub const EMPTY_STATE_MESSAGE: &str = "No drives configured";

/// Hint shown under [`EMPTY_STATE_MESSAGE`]
pub const EMPTY_STATE_HINT: &str = "Press n to create a drive or i to import an image";

/// Display descriptor for one drive entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriveRow {
    pub index: usize,
    pub id: DriveId,
    /// Image path, or a placeholder when the drive has no backing file
    pub path: String,
    pub type_label: &'static str,
    /// Only disk and CD rows carry an interface
    pub interface_label: Option<&'static str>,
    pub removable: bool,
    pub size_mib: Option<u64>,
}

impl DriveRow {
    pub fn from_entry(index: usize, entry: &DriveEntry) -> Self {
        let path = match (&entry.image_path, entry.removable) {
            (Some(path), _) => path.display().to_string(),
            (None, true) => "(no media)".to_string(),
            (None, false) => "(no image)".to_string(),
        };
        Self {
            index,
            id: entry.id,
            path,
            type_label: entry.image_type.label(),
            interface_label: entry.visible_interface().map(|i| i.label()),
            removable: entry.removable,
            size_mib: entry.size_mib,
        }
    }
}

/// Lazy row sequence over a configuration.
///
/// Clone before iterating (or call [`derive_view`] again) to walk the rows
/// a second time.
#[derive(Debug, Clone)]
pub struct DriveRows<'a> {
    entries: Enumerate<slice::Iter<'a, DriveEntry>>,
}

impl Iterator for DriveRows<'_> {
    type Item = DriveRow;

    fn next(&mut self) -> Option<Self::Item> {
        self.entries
            .next()
            .map(|(index, entry)| DriveRow::from_entry(index, entry))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl ExactSizeIterator for DriveRows<'_> {}

/// What the drive list area shows: an empty-state message or a list
#[derive(Debug, Clone)]
pub enum DriveListView<'a> {
    Empty {
        message: &'static str,
        hint: &'static str,
    },
    List(DriveRows<'a>),
}

impl DriveListView<'_> {
    pub fn is_empty(&self) -> bool {
        matches!(self, DriveListView::Empty { .. })
    }
}

/// Derive the list display from the current configuration
pub fn derive_view(config: &VmConfiguration) -> DriveListView<'_> {
    let drives = config.drives();
    if drives.is_empty() {
        DriveListView::Empty {
            message: EMPTY_STATE_MESSAGE,
            hint: EMPTY_STATE_HINT,
        }
    } else {
        DriveListView::List(DriveRows {
            entries: drives.iter().enumerate(),
        })
    }
}

/// Cursor and delete marks for the drive list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriveListState {
    pub selected: usize,
    marked: BTreeSet<usize>,
}

impl DriveListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_next(&mut self, len: usize) {
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }

    pub fn toggle_mark(&mut self, len: usize) {
        if self.selected >= len {
            return;
        }
        if !self.marked.remove(&self.selected) {
            self.marked.insert(self.selected);
        }
    }

    pub fn is_marked(&self, index: usize) -> bool {
        self.marked.contains(&index)
    }

    pub fn marked_count(&self) -> usize {
        self.marked.len()
    }

    /// Rows a delete request applies to: the marked rows, or the selected row
    pub fn delete_targets(&self, len: usize) -> Vec<usize> {
        if !self.marked.is_empty() {
            return self.marked.iter().copied().filter(|i| *i < len).collect();
        }
        if self.selected < len {
            vec![self.selected]
        } else {
            Vec::new()
        }
    }

    /// Re-anchor after the configuration changed.
    ///
    /// Marks refer to positions, which are meaningless once entries moved.
    pub fn sync(&mut self, len: usize) {
        self.marked.clear();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::DriveStore;
    use drivebay_core::{DriveDraft, ImageType, InterfaceType};

    fn config_with(drafts: &[DriveDraft]) -> VmConfiguration {
        let mut config = VmConfiguration::new("Test VM");
        for draft in drafts {
            config.create_drive(draft).unwrap();
        }
        config
    }

    fn removable_cd() -> DriveDraft {
        DriveDraft {
            image_type: ImageType::Cd,
            interface: InterfaceType::Usb,
            removable: true,
            size_mib: 0,
        }
    }

    #[test]
    fn test_row_count_matches_drive_count() {
        for n in 1..5 {
            let config = config_with(&vec![DriveDraft::default(); n]);
            match derive_view(&config) {
                DriveListView::List(rows) => assert_eq!(rows.count(), n),
                DriveListView::Empty { .. } => panic!("expected list for {} drives", n),
            }
        }
    }

    #[test]
    fn test_empty_configuration_renders_empty_state() {
        let config = VmConfiguration::new("Empty");

        let view = derive_view(&config);

        assert!(view.is_empty());
        assert!(matches!(
            view,
            DriveListView::Empty {
                message: EMPTY_STATE_MESSAGE,
                ..
            }
        ));
    }

    #[test]
    fn test_rows_are_restartable() {
        let config = config_with(&[DriveDraft::default(), removable_cd()]);
        let DriveListView::List(rows) = derive_view(&config) else {
            panic!("expected list");
        };

        let first: Vec<_> = rows.clone().collect();
        let second: Vec<_> = rows.collect();

        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn test_rows_report_exact_size() {
        let config = config_with(&vec![DriveDraft::default(); 3]);
        let DriveListView::List(rows) = derive_view(&config) else {
            panic!("expected list");
        };
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn test_row_descriptor_fields() {
        let config = config_with(&[DriveDraft::default(), removable_cd()]);
        let DriveListView::List(rows) = derive_view(&config) else {
            panic!("expected list");
        };
        let rows: Vec<_> = rows.collect();

        assert_eq!(rows[0].path, "Images/disk-1.qcow2");
        assert_eq!(rows[0].type_label, "Disk Image");
        assert_eq!(rows[0].interface_label, Some("VirtIO"));
        assert_eq!(rows[0].size_mib, Some(10240));

        assert_eq!(rows[1].index, 1);
        assert_eq!(rows[1].path, "(no media)");
        assert_eq!(rows[1].interface_label, Some("USB"));
        assert!(rows[1].removable);
    }

    #[test]
    fn test_selection_bounds() {
        let mut list = DriveListState::new();

        list.select_next(3);
        list.select_next(3);
        list.select_next(3);
        assert_eq!(list.selected, 2);

        list.select_previous();
        assert_eq!(list.selected, 1);

        list.select_first();
        list.select_previous();
        assert_eq!(list.selected, 0);

        list.select_last(5);
        assert_eq!(list.selected, 4);

        list.select_last(0);
        assert_eq!(list.selected, 0);
    }

    #[test]
    fn test_delete_targets_prefer_marks() {
        let mut list = DriveListState::new();
        assert_eq!(list.delete_targets(0), Vec::<usize>::new());
        assert_eq!(list.delete_targets(2), vec![0]);

        list.toggle_mark(4);
        list.select_next(4);
        list.select_next(4);
        list.toggle_mark(4);

        assert_eq!(list.delete_targets(4), vec![0, 2]);
        assert_eq!(list.marked_count(), 2);
    }

    #[test]
    fn test_toggle_mark_twice_unmarks() {
        let mut list = DriveListState::new();
        list.toggle_mark(1);
        assert!(list.is_marked(0));
        list.toggle_mark(1);
        assert!(!list.is_marked(0));
    }

    #[test]
    fn test_sync_clamps_selection_and_clears_marks() {
        let mut list = DriveListState::new();
        list.select_last(5);
        list.toggle_mark(5);

        list.sync(2);

        assert_eq!(list.selected, 1);
        assert_eq!(list.marked_count(), 0);
    }
}
