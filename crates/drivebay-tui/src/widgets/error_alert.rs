//! Modal error alert, dismissed with Enter or Esc

use drivebay_app::busy::ErrorAlert;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget, Wrap};

use super::modal_overlay;
use crate::theme::{palette, styles};

const ALERT_WIDTH: u16 = 56;

pub struct ErrorAlertDialog<'a> {
    alert: &'a ErrorAlert,
}

impl<'a> ErrorAlertDialog<'a> {
    pub fn new(alert: &'a ErrorAlert) -> Self {
        Self { alert }
    }
}

impl Widget for ErrorAlertDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Rough wrapped height of the message inside the borders
        let text_width = ALERT_WIDTH.saturating_sub(4).max(1) as usize;
        let message_lines = self.alert.message.chars().count().div_ceil(text_width).max(1);
        let height = (message_lines as u16).saturating_add(5);

        let rect = modal_overlay::prepare_modal(buf, area, ALERT_WIDTH, height);
        let block = styles::modal_block(&self.alert.title, palette::STATUS_RED);
        let inner = block.inner(rect);
        block.render(rect, buf);

        let [message_area, _, button_area] = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(self.alert.message.as_str())
            .style(styles::text_primary())
            .wrap(Wrap { trim: true })
            .render(message_area, buf);
        Paragraph::new(Line::from(vec![
            Span::styled("[Enter]", styles::key_hint()),
            Span::styled(" OK", styles::text_secondary()),
        ]))
        .alignment(Alignment::Center)
        .render(button_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_alert_shows_title_and_message() {
        let mut term = TestTerminal::new();
        let alert = ErrorAlert {
            title: "Import Failed".to_string(),
            message: "File access error: /tmp/x.img".to_string(),
        };

        term.render_widget(ErrorAlertDialog::new(&alert), term.area());

        assert!(term.buffer_contains("Import Failed"));
        assert!(term.buffer_contains("/tmp/x.img"));
        assert!(term.buffer_contains("[Enter] OK"));
    }
}
