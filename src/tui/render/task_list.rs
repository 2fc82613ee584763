use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::markup::{MarkdownRenderer, SpanKind};
use crate::tui::app::App;
use crate::util::unicode::{display_width, truncate_to_width};

/// Render the filtered, sorted task list.
pub fn render_task_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;

    if app.visible.is_empty() {
        // Designated empty state: an empty result is never an error
        let empty = Paragraph::new(" No tasks found")
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    let show_path = app.panel.prefs().show_file_path;
    let width = area.width as usize;

    // Build all display lines, remembering which start a task row
    let mut display_lines: Vec<Line> = Vec::new();
    let mut row_starts: Vec<usize> = Vec::new();

    for (row, &task_idx) in app.visible.iter().enumerate() {
        let task = &app.panel.tasks()[task_idx];
        let is_cursor = row == app.cursor;
        let row_bg = if is_cursor { app.theme.highlight } else { bg };

        row_starts.push(display_lines.len());

        if show_path {
            let loc = format!(
                "      {}:{}",
                task.file_path,
                task.position.start.line + 1
            );
            display_lines.push(Line::from(Span::styled(
                truncate_to_width(&loc, width),
                Style::default().fg(app.theme.dim).bg(row_bg),
            )));
        }

        let mut spans: Vec<Span> = Vec::new();
        let marker_style = if task.is_completed() {
            Style::default().fg(app.theme.green).bg(row_bg)
        } else {
            Style::default().fg(app.theme.dim).bg(row_bg)
        };
        spans.push(Span::styled(format!(" [{}] ", task.status), marker_style));

        let text_fg = if task.is_completed() {
            app.theme.dim
        } else if is_cursor {
            app.theme.text_bright
        } else {
            app.theme.text
        };
        // The rendering boundary: task text comes back as styled fragments
        for piece in app.renderer.render_to_markup(&task.text, &task.file_path) {
            let style = match piece.kind {
                SpanKind::Text => {
                    let mut style = Style::default().fg(text_fg).bg(row_bg);
                    if task.is_completed() {
                        style = style.add_modifier(Modifier::CROSSED_OUT);
                    }
                    style
                }
                SpanKind::Tag => Style::default()
                    .fg(app.theme.tag_color(&piece.text))
                    .bg(row_bg),
            };
            spans.push(Span::styled(piece.text, style));
        }

        // Pad the cursor row to full width
        if is_cursor {
            let content_width: usize = spans.iter().map(|s| display_width(&s.content)).sum();
            if content_width < width {
                spans.push(Span::styled(
                    " ".repeat(width - content_width),
                    Style::default().bg(row_bg),
                ));
            }
        }
        display_lines.push(Line::from(spans));
    }

    // Keep the cursor's lines inside the viewport
    let visible_height = area.height as usize;
    let lines_per_row = if show_path { 2 } else { 1 };
    let cursor_start = row_starts[app.cursor.min(row_starts.len() - 1)];
    if cursor_start < app.scroll_offset {
        app.scroll_offset = cursor_start;
    } else if cursor_start + lines_per_row > app.scroll_offset + visible_height {
        app.scroll_offset = cursor_start + lines_per_row - visible_height;
    }

    let lines: Vec<Line> = display_lines
        .into_iter()
        .skip(app.scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(bg)),
        area,
    );
}
