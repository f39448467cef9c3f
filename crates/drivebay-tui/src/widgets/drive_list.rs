//! Drive list panel
//!
//! Rows are derived from the configuration on every draw. The selected row
//! is highlighted and kept in view; marked rows carry a `*`.

use drivebay_app::drive_list::{derive_view, DriveListState, DriveListView, DriveRow};
use drivebay_app::VmConfiguration;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::theme::{palette, styles};

const TYPE_WIDTH: usize = 24;
const INTERFACE_WIDTH: usize = 16;

pub struct DriveList<'a> {
    config: &'a VmConfiguration,
    list: &'a DriveListState,
    show_interface: bool,
}

impl<'a> DriveList<'a> {
    pub fn new(config: &'a VmConfiguration, list: &'a DriveListState) -> Self {
        Self {
            config,
            list,
            show_interface: true,
        }
    }

    pub fn show_interface(mut self, show: bool) -> Self {
        self.show_interface = show;
        self
    }

    fn row_line(&self, row: &DriveRow) -> Line<'static> {
        let selected = row.index == self.list.selected;
        let marked = self.list.is_marked(row.index);

        let marker = match (selected, marked) {
            (true, true) => "▶*",
            (true, false) => "▶ ",
            (false, true) => " *",
            (false, false) => "  ",
        };
        let base = if selected {
            Style::default()
                .bg(palette::SELECTED_BG)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let marker_style = if marked {
            base.fg(palette::MARKED_FG)
        } else {
            base.fg(palette::ACCENT)
        };

        let mut spans = vec![
            Span::styled(marker.to_string(), marker_style),
            Span::styled(format!("{:>3}  ", row.index + 1), base.fg(palette::TEXT_MUTED)),
            Span::styled(
                format!("{:<width$}", row.type_label, width = TYPE_WIDTH),
                base.fg(palette::TEXT_PRIMARY),
            ),
        ];
        if self.show_interface {
            let interface = row.interface_label.unwrap_or("-");
            spans.push(Span::styled(
                format!("{:<width$}", interface, width = INTERFACE_WIDTH),
                base.fg(palette::TEXT_SECONDARY),
            ));
        }
        spans.push(Span::styled(row.path.clone(), base.fg(palette::TEXT_PRIMARY)));
        if let Some(size) = row.size_mib {
            spans.push(Span::styled(
                format!("  {} MiB", size),
                base.fg(palette::TEXT_MUTED),
            ));
        }
        if row.removable {
            spans.push(Span::styled("  [removable]", base.fg(palette::STATUS_YELLOW)));
        }
        Line::from(spans)
    }
}

/// First visible row so that `selected` stays on screen
fn scroll_offset(selected: usize, height: usize) -> usize {
    if height == 0 {
        return 0;
    }
    selected.saturating_sub(height - 1)
}

impl Widget for DriveList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(true).title(" Drives ");
        let inner = block.inner(area);
        block.render(area, buf);

        match derive_view(self.config) {
            DriveListView::Empty { message, hint } => {
                let lines = vec![
                    Line::from(""),
                    Line::styled(message, styles::text_secondary()),
                    Line::styled(hint, styles::text_muted()),
                ];
                Paragraph::new(lines)
                    .alignment(Alignment::Center)
                    .render(inner, buf);
            }
            DriveListView::List(rows) => {
                let height = inner.height as usize;
                let offset = scroll_offset(self.list.selected, height);
                let lines: Vec<Line> = rows
                    .skip(offset)
                    .take(height)
                    .map(|row| self.row_line(&row))
                    .collect();
                Paragraph::new(lines).render(inner, buf);
            }
        }
    }
}
