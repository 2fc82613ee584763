use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode::display_width;

/// Render the controls row: search box, sort order, refresh state.
pub fn render_controls(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let mut spans: Vec<Span> = Vec::new();

    // Search box
    let search = app.panel.search();
    if app.mode == Mode::Search {
        spans.push(Span::styled(
            format!(" /{}", search),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ));
        spans.push(Span::styled(
            "\u{258C}",
            Style::default().fg(app.theme.yellow).bg(bg),
        ));
    } else if search.is_empty() {
        spans.push(Span::styled(
            " / search tasks or paths",
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    } else {
        spans.push(Span::styled(
            format!(" /{}", search),
            Style::default().fg(app.theme.text).bg(bg),
        ));
    }

    // Right side: sort order + last refresh
    let sort = format!("sort: {}", app.panel.sort_by().label());
    let refreshed = match &app.last_refresh {
        Some(at) => format!("refreshed {}", at.format("%H:%M:%S")),
        None => String::new(),
    };
    let right = if refreshed.is_empty() {
        format!("{sort} ")
    } else {
        format!("{sort}  \u{2502}  {refreshed} ")
    };

    let left_width: usize = spans.iter().map(|s| display_width(&s.content)).sum();
    let right_width = display_width(&right);
    let width = area.width as usize;
    if left_width + right_width < width {
        spans.push(Span::styled(
            " ".repeat(width - left_width - right_width),
            Style::default().bg(bg),
        ));
        spans.push(Span::styled(
            right,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        area,
    );
}
