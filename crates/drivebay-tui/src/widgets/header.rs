//! Title bar: VM name, drive count and lock state

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::theme::styles;

pub struct Header<'a> {
    vm_name: &'a str,
    drive_count: usize,
    read_only: bool,
}

impl<'a> Header<'a> {
    pub fn new(vm_name: &'a str, drive_count: usize, read_only: bool) -> Self {
        Self {
            vm_name,
            drive_count,
            read_only,
        }
    }

    fn count_label(&self) -> String {
        match self.drive_count {
            1 => "1 drive".to_string(),
            n => format!("{} drives", n),
        }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![
            Span::styled(" drivebay ", styles::accent_bold()),
            Span::styled("│ ", styles::text_muted()),
            Span::styled(self.vm_name.to_string(), styles::text_primary()),
            Span::styled(format!("  ({})", self.count_label()), styles::text_secondary()),
        ];
        if self.read_only {
            spans.push(Span::styled("  [read-only]", styles::status_yellow()));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
