//! Delete confirmation dialog

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget, Wrap};

use super::modal_overlay;
use crate::theme::{palette, styles};

pub struct ConfirmDeleteDialog<'a> {
    count: usize,
    /// Image of the first pending entry, shown when only one is pending
    first_name: Option<&'a str>,
}

impl<'a> ConfirmDeleteDialog<'a> {
    pub fn new(count: usize, first_name: Option<&'a str>) -> Self {
        Self { count, first_name }
    }

    fn question(&self) -> String {
        match (self.count, self.first_name) {
            (1, Some(name)) => format!("Remove {}?", name),
            (1, None) => "Remove the selected drive?".to_string(),
            (n, _) => format!("Remove {} drives?", n),
        }
    }
}

impl Widget for ConfirmDeleteDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rect = modal_overlay::prepare_modal(buf, area, 50, 7);
        let block = styles::modal_block("Remove Drives", palette::STATUS_RED);
        let inner = block.inner(rect);
        block.render(rect, buf);

        let lines = vec![
            Line::styled(self.question(), styles::text_primary()),
            Line::styled("Image files are left on disk.", styles::text_muted()),
            Line::from(""),
            Line::from(vec![
                Span::styled("[y]", styles::status_red()),
                Span::styled(" Yes    ", styles::text_secondary()),
                Span::styled("[n]", styles::accent()),
                Span::styled(" No", styles::text_secondary()),
            ]),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
