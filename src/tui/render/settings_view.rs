use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode, SETTING_TASK_LIMIT};

/// Render the settings screen: four rows of label + value.
pub fn render_settings_view(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let prefs = &app.settings_prefs;

    let values = [
        prefs.default_filter.label().to_string(),
        prefs.sort_by.label().to_string(),
        if prefs.show_file_path { "on" } else { "off" }.to_string(),
        prefs.task_limit.to_string(),
    ];
    let labels = [
        "Default view",
        "Sort tasks by",
        "Show file paths",
        "Task limit",
    ];

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        " Settings",
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    for (i, (label, value)) in labels.iter().zip(values.iter()).enumerate() {
        let is_cursor = i == app.settings_cursor;
        let row_bg = if is_cursor { app.theme.highlight } else { bg };

        let editing_limit =
            i == SETTING_TASK_LIMIT && app.mode == Mode::LimitInput;
        let shown_value = if editing_limit {
            format!("{}\u{258C}", app.limit_input)
        } else {
            value.clone()
        };

        let label_style = Style::default()
            .fg(if is_cursor {
                app.theme.text_bright
            } else {
                app.theme.text
            })
            .bg(row_bg);
        let value_style = Style::default()
            .fg(if editing_limit {
                app.theme.yellow
            } else {
                app.theme.cyan
            })
            .bg(row_bg);

        let mut spans = vec![
            Span::styled(format!(" {:<18}", label), label_style),
            Span::styled(format!("\u{2039} {} \u{203A}", shown_value), value_style),
        ];
        if is_cursor {
            let content_width: usize = spans
                .iter()
                .map(|s| crate::util::unicode::display_width(&s.content))
                .sum();
            let width = area.width as usize;
            if content_width < width {
                spans.push(Span::styled(
                    " ".repeat(width - content_width),
                    Style::default().bg(row_bg),
                ));
            }
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Tag your tasks #next, #waiting, or #someday to bucket them;",
        Style::default().fg(app.theme.dim).bg(bg),
    )));
    lines.push(Line::from(Span::styled(
        " untagged open tasks are your inbox. #project and #context mark",
        Style::default().fg(app.theme.dim).bg(bg),
    )));
    lines.push(Line::from(Span::styled(
        " organizational notes that stay out of the inbox view.",
        Style::default().fg(app.theme.dim).bg(bg),
    )));

    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(bg)),
        area,
    );
}
