//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use drivebay_app::{AppState, UiMode};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::theme::{palette, styles};
use crate::widgets;

/// Screen areas for the main view
struct ScreenAreas {
    header: Rect,
    body: Rect,
    footer: Option<Rect>,
}

fn screen_areas(area: Rect, show_footer: bool) -> ScreenAreas {
    if show_footer {
        let [header, body, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(area);
        ScreenAreas {
            header,
            body,
            footer: Some(footer),
        }
    } else {
        let [header, body] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(3)]).areas(area);
        ScreenAreas {
            header,
            body,
            footer: None,
        }
    }
}

/// Render the complete UI (View function in TEA)
///
/// Everything shown is read from the configuration at draw time; the only
/// view state is selection, marks and the open dialog.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = screen_areas(area, state.settings.ui.show_key_hints);

    let drawn = state.config.read(|config| {
        frame.render_widget(
            widgets::Header::new(&config.name, config.drives().len(), config.read_only),
            areas.header,
        );
        frame.render_widget(
            widgets::DriveList::new(config, &state.drive_list)
                .show_interface(state.settings.ui.show_interface),
            areas.body,
        );
    });
    if let Err(e) = drawn {
        let message = Paragraph::new(format!("Configuration unavailable: {}", e))
            .style(styles::status_red())
            .alignment(Alignment::Center);
        frame.render_widget(message, areas.body);
    }

    if let Some(footer) = areas.footer {
        frame.render_widget(widgets::KeyHints::new(state.ui_mode), footer);
    }

    render_mode_overlay(frame, state, area);

    // Busy spinner and error alert sit above any dialog
    if let Some(operation) = state.busy.current() {
        frame.render_widget(
            widgets::BusyIndicator::new(operation, state.busy.animation_frame),
            area,
        );
    }
    if let Some(alert) = state.busy.alert() {
        frame.render_widget(widgets::ErrorAlertDialog::new(alert), area);
    }
}

fn render_mode_overlay(frame: &mut Frame, state: &AppState, area: Rect) {
    match state.ui_mode {
        UiMode::Normal => {}
        UiMode::ConfirmDelete => {
            if let Some(pending) = &state.pending_delete {
                let first_name = pending.ids.first().and_then(|id| {
                    state
                        .config
                        .read(|c| c.get(*id).and_then(|entry| entry.image_name()))
                        .ok()
                        .flatten()
                });
                frame.render_widget(
                    widgets::ConfirmDeleteDialog::new(pending.len(), first_name.as_deref()),
                    area,
                );
            }
        }
        UiMode::CreateDrive => {
            if let Some(dialog) = &state.create_dialog {
                frame.render_widget(widgets::CreateDriveDialog::new(dialog), area);
            }
        }
        UiMode::ImportPrompt => {
            frame.render_widget(widgets::ImportPrompt::new(state.import_prompt.input()), area);
        }
    }
}
