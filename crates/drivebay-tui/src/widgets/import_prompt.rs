//! Path prompt for importing an existing image

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use super::modal_overlay;
use crate::theme::{palette, styles};

pub struct ImportPrompt<'a> {
    input: &'a str,
}

impl<'a> ImportPrompt<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input }
    }
}

impl Widget for ImportPrompt<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = area.width.saturating_sub(8).clamp(30, 72);
        let rect = modal_overlay::prepare_modal(buf, area, width, 6);
        let block = styles::modal_block("Import Drive", palette::BORDER_ACTIVE);
        let inner = block.inner(rect);
        block.render(rect, buf);

        // Keep the tail of long paths visible next to the cursor
        let room = (inner.width as usize).saturating_sub(3);
        let chars = self.input.chars().count();
        let shown: String = self.input.chars().skip(chars.saturating_sub(room)).collect();

        let lines = vec![
            Line::styled("Path of the image to attach:", styles::text_secondary()),
            Line::from(""),
            Line::from(vec![
                Span::styled("> ", styles::accent()),
                Span::styled(shown, styles::text_primary()),
                Span::styled("▏", styles::accent()),
            ]),
        ];
        Paragraph::new(lines).render(inner, buf);
    }
}
