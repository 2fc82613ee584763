use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

const HELP: &[(&str, &str)] = &[
    ("j/k", "move cursor"),
    ("1-6", "filter: all/inbox/next/waiting/someday/completed"),
    ("/", "search tasks and paths"),
    ("o", "cycle sort order"),
    ("r", "refresh from disk"),
    ("i n w s", "move task to inbox/next/waiting/someday"),
    ("c", "complete task"),
    ("u", "reopen completed task"),
    ("Enter", "open task in $EDITOR"),
    (",", "settings"),
    ("q", "quit"),
];

/// Render the help overlay centered over the whole screen.
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let height = (HELP.len() + 4) as u16;
    let width = 64u16.min(area.width.saturating_sub(4));
    let popup = centered(area, width, height);

    frame.render_widget(Clear, popup);

    let mut lines: Vec<Line> = vec![Line::from("")];
    for (key, desc) in HELP {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:>8}  ", key),
                Style::default()
                    .fg(app.theme.yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(desc.to_string(), Style::default().fg(app.theme.text)),
        ]));
    }

    let block = Block::default()
        .title(" keys (any key to close) ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.dim))
        .style(Style::default().bg(app.theme.background));

    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
