use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode, View};

/// Render the status row (bottom of screen): key hints per mode/view.
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let hint = match (app.mode, app.view) {
        (Mode::Search, _) => "type to filter   Enter keep   Esc clear",
        (Mode::LimitInput, _) => "digits only   Enter save   Esc cancel",
        (Mode::Navigate, View::Tasks) => {
            "j/k move   1-6 filter   / search   o sort   r refresh   i/n/w/s/c bucket   u reopen   Enter open   , settings   ? help   q quit"
        }
        (Mode::Navigate, View::Settings) => "j/k move   h/l change   Enter edit   , back",
    };

    let shown = if hint.len() > width.saturating_sub(2) {
        &hint[..width.saturating_sub(2).min(hint.len())]
    } else {
        hint
    };

    let line = Line::from(Span::styled(
        format!(" {}", shown),
        Style::default().fg(app.theme.dim).bg(bg),
    ));
    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
}
