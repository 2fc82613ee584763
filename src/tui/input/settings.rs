use crossterm::event::{KeyCode, KeyEvent};

use crate::model::prefs::{
    Filter, PrefsPatch, SortOrder, TASK_LIMIT_MAX, TASK_LIMIT_MIN,
};
use crate::tui::app::{
    App, Mode, SETTING_DEFAULT_VIEW, SETTING_ROWS, SETTING_SHOW_PATH, SETTING_SORT,
    SETTING_TASK_LIMIT,
};

/// Keys for the settings screen in navigate mode
pub fn handle_settings(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char(',') | KeyCode::Esc => app.leave_settings(),

        KeyCode::Char('j') | KeyCode::Down => {
            if app.settings_cursor + 1 < SETTING_ROWS {
                app.settings_cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.settings_cursor = app.settings_cursor.saturating_sub(1);
        }

        KeyCode::Char('h') | KeyCode::Left => change_setting(app, -1),
        KeyCode::Char('l') | KeyCode::Right => change_setting(app, 1),

        KeyCode::Enter => {
            if app.settings_cursor == SETTING_TASK_LIMIT {
                app.limit_input = app.settings_prefs.task_limit.to_string();
                app.mode = Mode::LimitInput;
            } else {
                change_setting(app, 1);
            }
        }

        _ => {}
    }
}

/// Typing a new task limit. Digits only; committed value is clamped.
pub fn handle_limit_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.limit_input.clear();
            app.mode = Mode::Navigate;
        }
        KeyCode::Enter => {
            if let Ok(limit) = app.limit_input.parse::<usize>() {
                let limit = limit.clamp(TASK_LIMIT_MIN, TASK_LIMIT_MAX);
                apply_patch(
                    app,
                    PrefsPatch {
                        task_limit: Some(limit),
                        ..Default::default()
                    },
                );
            }
            app.limit_input.clear();
            app.mode = Mode::Navigate;
        }
        KeyCode::Backspace => {
            app.limit_input.pop();
        }
        KeyCode::Char(c) if c.is_ascii_digit() && app.limit_input.len() < 4 => {
            app.limit_input.push(c);
        }
        _ => {}
    }
}

/// Step the selected setting forward or backward.
fn change_setting(app: &mut App, step: i32) {
    let patch = match app.settings_cursor {
        SETTING_DEFAULT_VIEW => PrefsPatch {
            default_filter: Some(cycle(
                &Filter::ALL,
                app.settings_prefs.default_filter,
                step,
            )),
            ..Default::default()
        },
        SETTING_SORT => PrefsPatch {
            sort_by: Some(cycle(&SortOrder::ALL, app.settings_prefs.sort_by, step)),
            ..Default::default()
        },
        SETTING_SHOW_PATH => PrefsPatch {
            show_file_path: Some(!app.settings_prefs.show_file_path),
            ..Default::default()
        },
        SETTING_TASK_LIMIT => {
            let current = app.settings_prefs.task_limit as i64;
            let stepped = (current + step as i64 * 10)
                .clamp(TASK_LIMIT_MIN as i64, TASK_LIMIT_MAX as i64);
            PrefsPatch {
                task_limit: Some(stepped as usize),
                ..Default::default()
            }
        }
        _ => return,
    };
    apply_patch(app, patch);
}

/// Persist a settings change and keep the on-screen record in step.
/// The panel itself only picks the change up on `leave_settings`.
fn apply_patch(app: &mut App, patch: PrefsPatch) {
    if let Err(err) = app.prefs_store.update(&patch) {
        app.log.record("update settings", &err);
        return;
    }
    app.settings_prefs = app.prefs_store.load();
}

fn cycle<T: Copy + PartialEq>(values: &[T], current: T, step: i32) -> T {
    let len = values.len() as i32;
    let pos = values.iter().position(|&v| v == current).unwrap_or(0) as i32;
    let next = (pos + step).rem_euclid(len);
    values[next as usize]
}
