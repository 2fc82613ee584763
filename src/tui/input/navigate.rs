use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::prefs::{Filter, SortOrder};
use crate::ops::transition::Target;
use crate::tui::app::{App, Mode, View};

/// Keys for the task view in navigate mode
pub fn handle_tasks(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) | (_, KeyCode::Char('q')) => {
            app.should_quit = true;
        }

        (_, KeyCode::Char('?')) => app.show_help = true,

        // --- Cursor movement ---
        (_, KeyCode::Char('j')) | (_, KeyCode::Down) => {
            if app.cursor + 1 < app.visible.len() {
                app.cursor += 1;
            }
        }
        (_, KeyCode::Char('k')) | (_, KeyCode::Up) => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        (_, KeyCode::Char('g')) | (_, KeyCode::Home) => app.cursor = 0,
        (_, KeyCode::Char('G')) | (_, KeyCode::End) => {
            app.cursor = app.visible.len().saturating_sub(1);
        }

        // --- Filter buttons (1-6, in display order) ---
        (_, KeyCode::Char(c @ '1'..='6')) => {
            let idx = c as usize - '1' as usize;
            app.panel.set_filter(Filter::ALL[idx]);
            app.cursor = 0;
            app.scroll_offset = 0;
            app.rebuild_visible();
        }

        // --- Search / sort / refresh ---
        (_, KeyCode::Char('/')) => app.mode = Mode::Search,
        (_, KeyCode::Char('o')) => {
            app.panel.set_sort(next_sort(app.panel.sort_by()));
            app.rebuild_visible();
        }
        (_, KeyCode::Char('r')) => app.refresh(),

        // --- Status actions on the selected task ---
        (_, KeyCode::Char('i')) => transition_selected(app, Target::Inbox),
        (_, KeyCode::Char('n')) => transition_selected(app, Target::Next),
        (_, KeyCode::Char('w')) => transition_selected(app, Target::Waiting),
        (_, KeyCode::Char('s')) => transition_selected(app, Target::Someday),
        (_, KeyCode::Char('c')) => transition_selected(app, Target::Completed),
        (_, KeyCode::Char('u')) => {
            if let Some(idx) = app.selected_task()
                && app.panel.tasks()[idx].is_completed()
            {
                app.panel.reopen(idx);
                app.rebuild_visible();
            }
        }

        // --- Navigation to source ---
        (_, KeyCode::Enter) => {
            if let Some(idx) = app.selected_task() {
                app.panel.navigate(idx);
            }
        }

        (_, KeyCode::Char(',')) => {
            app.view = View::Settings;
            app.settings_cursor = 0;
        }

        _ => {}
    }
}

/// The five status buttons only exist on open tasks; the completed row
/// offers only reopen.
fn transition_selected(app: &mut App, target: Target) {
    if let Some(idx) = app.selected_task()
        && !app.panel.tasks()[idx].is_completed()
    {
        app.panel.transition(idx, target);
        app.rebuild_visible();
    }
}

fn next_sort(current: SortOrder) -> SortOrder {
    let pos = SortOrder::ALL
        .iter()
        .position(|&s| s == current)
        .unwrap_or(0);
    SortOrder::ALL[(pos + 1) % SortOrder::ALL.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_cycles_through_all_orders() {
        let mut order = SortOrder::Modified;
        let mut seen = Vec::new();
        for _ in 0..SortOrder::ALL.len() {
            order = next_sort(order);
            seen.push(order);
        }
        assert_eq!(order, SortOrder::Modified);
        assert!(seen.contains(&SortOrder::Created));
        assert!(seen.contains(&SortOrder::Alphabetical));
    }
}
