//! Spinner shown while a unit of work holds the busy slot

use drivebay_app::busy::BusyOperation;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use super::modal_overlay;
use crate::theme::{palette, styles};

pub const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct BusyIndicator {
    operation: BusyOperation,
    frame: u64,
}

impl BusyIndicator {
    pub fn new(operation: BusyOperation, frame: u64) -> Self {
        Self { operation, frame }
    }

    fn spinner(&self) -> &'static str {
        SPINNER[(self.frame % SPINNER.len() as u64) as usize]
    }
}

impl Widget for BusyIndicator {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rect = modal_overlay::prepare_modal(buf, area, 32, 3);
        let block = styles::modal_block("Working", palette::BORDER_DIM);
        let inner = block.inner(rect);
        block.render(rect, buf);

        let line = Line::from(vec![
            Span::styled(format!("{} ", self.spinner()), styles::accent()),
            Span::styled(self.operation.progress_label(), styles::text_primary()),
        ]);
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_shows_progress_label() {
        let mut term = TestTerminal::new();
        term.render_widget(BusyIndicator::new(BusyOperation::Import, 0), term.area());

        assert!(term.buffer_contains("⠋ Importing drive..."));
    }

    #[test]
    fn test_spinner_wraps() {
        let mut term = TestTerminal::new();
        term.render_widget(BusyIndicator::new(BusyOperation::Delete, 11), term.area());

        assert!(term.buffer_contains("⠙ Removing drives..."));
    }
}
