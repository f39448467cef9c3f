//! Create-drive dialog state
//!
//! A pure input collector: it edits a [`DriveDraft`] and nothing else.
//! Validation happens when the configuration materializes the drive.
//!
//! The dialog is consumed by [`CreateDriveDialogState::cancel`] or
//! [`CreateDriveDialogState::done`], so a dismissed dialog cannot be reused;
//! every invocation starts from a fresh instance.

use drivebay_core::{DriveDraft, ImageType};

/// Longest size the size field accepts, in digits
const MAX_SIZE_DIGITS: usize = 9;

/// Editable fields, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CreateField {
    #[default]
    ImageType,
    Interface,
    Removable,
    Size,
}

impl CreateField {
    pub fn label(&self) -> &'static str {
        match self {
            CreateField::ImageType => "Image Type",
            CreateField::Interface => "Interface",
            CreateField::Removable => "Removable",
            CreateField::Size => "Size (MiB)",
        }
    }
}

/// How the dialog was dismissed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome {
    /// Draft discarded, nothing to do
    Cancelled,
    /// Draft finalized and handed to the caller
    Done(DriveDraft),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateDriveDialogState {
    draft: DriveDraft,
    focus: CreateField,
    size_input: String,
}

impl CreateDriveDialogState {
    pub fn new(draft: DriveDraft) -> Self {
        let size_input = if draft.size_mib == 0 {
            String::new()
        } else {
            draft.size_mib.to_string()
        };
        Self {
            draft,
            focus: CreateField::default(),
            size_input,
        }
    }

    pub fn draft(&self) -> &DriveDraft {
        &self.draft
    }

    pub fn focus(&self) -> CreateField {
        self.focus
    }

    pub fn size_input(&self) -> &str {
        &self.size_input
    }

    /// Fields that apply to the current draft
    pub fn visible_fields(&self) -> Vec<CreateField> {
        let mut fields = vec![CreateField::ImageType];
        if self.draft.image_type.has_interface() {
            fields.push(CreateField::Interface);
            fields.push(CreateField::Removable);
        }
        if self.draft.image_type == ImageType::Disk && !self.draft.removable {
            fields.push(CreateField::Size);
        }
        fields
    }

    pub fn focus_next(&mut self) {
        let fields = self.visible_fields();
        let pos = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(pos + 1) % fields.len()];
    }

    pub fn focus_previous(&mut self) {
        let fields = self.visible_fields();
        let pos = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(pos + fields.len() - 1) % fields.len()];
    }

    /// Step the focused field forward (enum fields cycle, toggles flip)
    pub fn cycle_next(&mut self) {
        match self.focus {
            CreateField::ImageType => self.set_image_type(self.draft.image_type.next()),
            CreateField::Interface => self.draft.interface = self.draft.interface.next(),
            CreateField::Removable => self.toggle_removable(),
            CreateField::Size => {}
        }
    }

    pub fn cycle_previous(&mut self) {
        match self.focus {
            CreateField::ImageType => self.set_image_type(self.draft.image_type.previous()),
            CreateField::Interface => self.draft.interface = self.draft.interface.previous(),
            CreateField::Removable => self.toggle_removable(),
            CreateField::Size => {}
        }
    }

    pub fn toggle_removable(&mut self) {
        if self.draft.image_type.has_interface() {
            self.draft.removable = !self.draft.removable;
            self.keep_focus_visible();
        }
    }

    /// Type a character into the size field; anything but digits is ignored
    pub fn input_char(&mut self, c: char) {
        if self.focus != CreateField::Size || !c.is_ascii_digit() {
            return;
        }
        if self.size_input.len() >= MAX_SIZE_DIGITS {
            return;
        }
        if self.size_input == "0" {
            self.size_input.clear();
        }
        self.size_input.push(c);
        self.sync_size();
    }

    pub fn backspace(&mut self) {
        if self.focus == CreateField::Size {
            self.size_input.pop();
            self.sync_size();
        }
    }

    /// Dismiss without producing a drive
    pub fn cancel(self) -> DialogOutcome {
        DialogOutcome::Cancelled
    }

    /// Dismiss and hand over the draft exactly as last edited
    pub fn done(self) -> DialogOutcome {
        DialogOutcome::Done(self.draft)
    }

    fn set_image_type(&mut self, image_type: ImageType) {
        self.draft.image_type = image_type;
        if !image_type.has_interface() {
            self.draft.removable = false;
        }
        self.keep_focus_visible();
    }

    fn keep_focus_visible(&mut self) {
        if !self.visible_fields().contains(&self.focus) {
            self.focus = CreateField::ImageType;
        }
    }

    fn sync_size(&mut self) {
        self.draft.size_mib = self.size_input.parse().unwrap_or(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drivebay_core::InterfaceType;

    fn dialog() -> CreateDriveDialogState {
        CreateDriveDialogState::new(DriveDraft::new(InterfaceType::Virtio, 8192))
    }

    #[test]
    fn test_new_dialog_starts_on_image_type() {
        let dialog = dialog();
        assert_eq!(dialog.focus(), CreateField::ImageType);
        assert_eq!(dialog.size_input(), "8192");
        assert_eq!(
            dialog.visible_fields(),
            vec![
                CreateField::ImageType,
                CreateField::Interface,
                CreateField::Removable,
                CreateField::Size
            ]
        );
    }

    #[test]
    fn test_cancel_discards_draft() {
        let mut dialog = dialog();
        dialog.cycle_next();

        assert_eq!(dialog.cancel(), DialogOutcome::Cancelled);
    }

    #[test]
    fn test_done_returns_last_edited_values() {
        let mut dialog = dialog();
        dialog.focus_next(); // Interface
        dialog.cycle_next(); // Virtio -> Nvme
        dialog.focus_next(); // Removable
        dialog.focus_next(); // Size
        dialog.backspace();
        dialog.backspace();
        dialog.input_char('4');
        dialog.input_char('8');

        let outcome = dialog.done();

        assert_eq!(
            outcome,
            DialogOutcome::Done(DriveDraft {
                image_type: ImageType::Disk,
                interface: InterfaceType::Nvme,
                removable: false,
                size_mib: 8148,
            })
        );
    }

    #[test]
    fn test_size_field_ignores_non_digits() {
        let mut dialog = dialog();
        dialog.focus_previous(); // wraps to Size
        assert_eq!(dialog.focus(), CreateField::Size);

        dialog.input_char('x');
        dialog.input_char('-');

        assert_eq!(dialog.size_input(), "8192");
    }

    #[test]
    fn test_size_field_caps_length() {
        let mut dialog = dialog();
        dialog.focus_previous();
        for _ in 0..20 {
            dialog.input_char('9');
        }
        assert_eq!(dialog.size_input().len(), MAX_SIZE_DIGITS);
    }

    #[test]
    fn test_clearing_size_yields_zero() {
        let mut dialog = dialog();
        dialog.focus_previous();
        for _ in 0..4 {
            dialog.backspace();
        }
        assert_eq!(dialog.draft().size_mib, 0);
    }

    #[test]
    fn test_typing_only_edits_size_field() {
        let mut dialog = dialog();
        dialog.input_char('1');
        assert_eq!(dialog.size_input(), "8192");
    }

    #[test]
    fn test_firmware_type_hides_bus_fields() {
        let mut dialog = dialog();
        dialog.cycle_next(); // Cd
        dialog.cycle_next(); // Bios

        assert_eq!(dialog.draft().image_type, ImageType::Bios);
        assert_eq!(dialog.visible_fields(), vec![CreateField::ImageType]);

        dialog.focus_next();
        assert_eq!(dialog.focus(), CreateField::ImageType);
    }

    #[test]
    fn test_removable_hides_size() {
        let mut dialog = dialog();
        dialog.toggle_removable();

        assert!(dialog.draft().removable);
        assert!(!dialog.visible_fields().contains(&CreateField::Size));
    }

    #[test]
    fn test_switching_to_firmware_clears_removable() {
        let mut dialog = dialog();
        dialog.toggle_removable();
        dialog.cycle_next(); // Cd keeps removable
        assert!(dialog.draft().removable);
        dialog.cycle_next(); // Bios drops it
        assert!(!dialog.draft().removable);
    }

    #[test]
    fn test_focus_resets_when_field_disappears() {
        let mut dialog = dialog();
        dialog.focus_previous(); // Size
        dialog.focus_previous(); // Removable
        dialog.cycle_next(); // toggles removable, Size disappears

        assert_eq!(dialog.focus(), CreateField::Removable);
        assert!(dialog.draft().removable);
    }
}
