pub mod controls;
pub mod help_overlay;
pub mod settings_view;
pub mod stats_bar;
pub mod status_row;
pub mod task_list;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::{App, View};

/// Main render function — dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    match app.view {
        View::Tasks => {
            // Layout: stats bar (2) | controls (1) | list | status row (1)
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(2),
                    Constraint::Length(1),
                    Constraint::Min(1),
                    Constraint::Length(1),
                ])
                .split(area);

            stats_bar::render_stats_bar(frame, app, chunks[0]);
            controls::render_controls(frame, app, chunks[1]);
            task_list::render_task_list(frame, app, chunks[2]);
            status_row::render_status_row(frame, app, chunks[3]);
        }
        View::Settings => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(area);

            settings_view::render_settings_view(frame, app, chunks[0]);
            status_row::render_status_row(frame, app, chunks[1]);
        }
    }

    // Help overlay (rendered on top of everything)
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, frame.area());
    }
}
