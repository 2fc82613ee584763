use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};
use crate::util::unicode::pop_grapheme;

/// Search mode: every edit filters the list immediately.
pub fn handle_search(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Drop the search entirely
        (_, KeyCode::Esc) => {
            app.mode = Mode::Navigate;
            update_search(app, String::new());
        }

        // Keep the search and go back to navigating
        (_, KeyCode::Enter) => app.mode = Mode::Navigate,

        (_, KeyCode::Backspace) => {
            let mut search = app.panel.search().to_string();
            pop_grapheme(&mut search);
            update_search(app, search);
        }

        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            let mut search = app.panel.search().to_string();
            search.push(c);
            update_search(app, search);
        }

        _ => {}
    }
}

fn update_search(app: &mut App, search: String) {
    app.panel.set_search(search);
    app.cursor = 0;
    app.scroll_offset = 0;
    app.rebuild_visible();
}
