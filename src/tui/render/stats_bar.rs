use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::prefs::Filter;
use crate::tui::app::App;

/// Render the six filter buttons with their counters, plus a separator
/// line underneath.
pub fn render_stats_bar(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    render_buttons(frame, app, chunks[0]);
    render_separator(frame, app, chunks[1]);
}

fn render_buttons(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let stats = app.panel.stats();
    let mut spans: Vec<Span> = vec![Span::styled(" ", Style::default().bg(bg))];

    for (i, filter) in Filter::ALL.into_iter().enumerate() {
        let is_active = app.panel.filter() == filter;
        let label_style = if is_active {
            Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.text).bg(bg)
        };
        let count_style = if is_active {
            Style::default().fg(app.theme.yellow).bg(app.theme.highlight)
        } else {
            Style::default().fg(app.theme.dim).bg(bg)
        };

        // Key hint, label, count: "1 All 42"
        spans.push(Span::styled(
            format!("{} ", i + 1),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
        spans.push(Span::styled(format!(" {} ", filter.label()), label_style));
        spans.push(Span::styled(
            format!(" {}", stats.count(filter)),
            count_style,
        ));
        spans.push(Span::styled("   ", Style::default().bg(bg)));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        area,
    );
}

fn render_separator(frame: &mut Frame, app: &App, area: Rect) {
    let line = "\u{2500}".repeat(area.width as usize);
    frame.render_widget(
        Paragraph::new(line).style(
            Style::default()
                .fg(app.theme.dim)
                .bg(app.theme.background),
        ),
        area,
    );
}
