mod navigate;
mod search;
mod settings;

use crossterm::event::{KeyCode, KeyEvent};

use super::app::{App, Mode, View};

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // Help overlay swallows all input
    if app.show_help {
        app.show_help = false;
        return;
    }

    match app.mode {
        Mode::Search => search::handle_search(app, key),
        Mode::LimitInput => settings::handle_limit_input(app, key),
        Mode::Navigate => match app.view {
            View::Tasks => navigate::handle_tasks(app, key),
            View::Settings => settings::handle_settings(app, key),
        },
    }
}
