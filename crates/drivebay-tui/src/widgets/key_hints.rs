//! Footer line listing the keys that work in the current mode

use drivebay_app::UiMode;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::theme::styles;

pub struct KeyHints {
    mode: UiMode,
}

impl KeyHints {
    pub fn new(mode: UiMode) -> Self {
        Self { mode }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.mode {
            UiMode::Normal => &[
                ("↑↓", "select"),
                ("K/J", "move"),
                ("Space", "mark"),
                ("n", "new"),
                ("i", "import"),
                ("d", "delete"),
                ("q", "quit"),
            ],
            UiMode::ConfirmDelete => &[("y", "remove"), ("n", "keep")],
            UiMode::CreateDrive => &[
                ("Tab", "next field"),
                ("←→", "change"),
                ("r", "removable"),
                ("Enter", "create"),
                ("Esc", "cancel"),
            ],
            UiMode::ImportPrompt => &[("Enter", "import"), ("Ctrl+U", "clear"), ("Esc", "cancel")],
        }
    }
}

impl Widget for KeyHints {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::raw(" ")];
        for (key, action) in self.hints() {
            spans.push(Span::styled(format!("[{}]", key), styles::key_hint()));
            spans.push(Span::styled(format!(" {}  ", action), styles::text_secondary()));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
