//! Create-drive dialog
//!
//! Shows only the fields that apply to the current image type; the focused
//! field is highlighted.

use drivebay_app::create_dialog::{CreateDriveDialogState, CreateField};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use super::modal_overlay;
use crate::theme::{palette, styles};

const LABEL_WIDTH: usize = 12;

pub struct CreateDriveDialog<'a> {
    state: &'a CreateDriveDialogState,
}

impl<'a> CreateDriveDialog<'a> {
    pub fn new(state: &'a CreateDriveDialogState) -> Self {
        Self { state }
    }

    fn value(&self, field: CreateField) -> String {
        let draft = self.state.draft();
        match field {
            CreateField::ImageType => draft.image_type.label().to_string(),
            CreateField::Interface => draft.interface.label().to_string(),
            CreateField::Removable => {
                let value = if draft.removable { "Yes" } else { "No" };
                value.to_string()
            }
            CreateField::Size => format!("{}▏", self.state.size_input()),
        }
    }

    fn field_line(&self, field: CreateField) -> Line<'static> {
        let focused = self.state.focus() == field;
        let (arrow, value_style) = if focused {
            (
                "▸ ",
                Style::default()
                    .fg(palette::ACCENT)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            ("  ", styles::text_primary())
        };
        let value = match field {
            CreateField::ImageType | CreateField::Interface if focused => {
                format!("‹ {} ›", self.value(field))
            }
            _ => self.value(field),
        };
        Line::from(vec![
            Span::styled(arrow, styles::accent()),
            Span::styled(
                format!("{:<width$}", field.label(), width = LABEL_WIDTH),
                styles::text_secondary(),
            ),
            Span::styled(value, value_style),
        ])
    }
}

impl Widget for CreateDriveDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let fields = self.state.visible_fields();
        let height = fields.len() as u16 * 2 + 4;
        let rect = modal_overlay::prepare_modal(buf, area, 52, height);
        let block = styles::modal_block("New Drive", palette::BORDER_ACTIVE);
        let inner = block.inner(rect);
        block.render(rect, buf);

        let mut lines = Vec::with_capacity(fields.len() * 2 + 1);
        for field in fields {
            lines.push(self.field_line(field));
            lines.push(Line::from(""));
        }
        lines.push(Line::from(vec![
            Span::styled("[Enter]", styles::key_hint()),
            Span::styled(" Create   ", styles::text_secondary()),
            Span::styled("[Esc]", styles::key_hint()),
            Span::styled(" Cancel", styles::text_secondary()),
        ]));
        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use drivebay_core::{DriveDraft, InterfaceType};

    #[test]
    fn test_disk_dialog_shows_all_fields() {
        let mut term = TestTerminal::new();
        let state = CreateDriveDialogState::new(DriveDraft::new(InterfaceType::Virtio, 10240));

        term.render_widget(CreateDriveDialog::new(&state), term.area());

        assert!(term.buffer_contains("New Drive"));
        assert!(term.buffer_contains("‹ Disk Image ›"));
        assert!(term.buffer_contains("VirtIO"));
        assert!(term.buffer_contains("Removable"));
        assert!(term.buffer_contains("10240"));
    }

    #[test]
    fn test_firmware_hides_bus_fields() {
        let mut term = TestTerminal::new();
        let mut state = CreateDriveDialogState::new(DriveDraft::default());
        // Disk -> CD -> BIOS
        state.cycle_next();
        state.cycle_next();

        term.render_widget(CreateDriveDialog::new(&state), term.area());

        assert!(term.buffer_contains("BIOS"));
        assert!(!term.buffer_contains("Interface"));
        assert!(!term.buffer_contains("Size (MiB)"));
    }

    #[test]
    fn test_focus_moves_highlight() {
        let mut term = TestTerminal::new();
        let mut state = CreateDriveDialogState::new(DriveDraft::new(InterfaceType::Ide, 512));
        state.focus_next();

        term.render_widget(CreateDriveDialog::new(&state), term.area());

        assert!(term.buffer_contains("‹ IDE ›"));
        assert!(!term.buffer_contains("‹ Disk Image ›"));
    }
}
