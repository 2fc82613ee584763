use std::io;
use std::time::Duration;

use chrono::{DateTime, Local};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::log::ActivityLog;
use crate::io::prefs_io::PrefsStore;
use crate::io::vault::{VaultIndex, discover_vault};
use crate::io::watcher::VaultWatcher;
use crate::markup::TagHighlighter;
use crate::model::prefs::Preferences;
use crate::panel::Panel;

use super::input;
use super::render;
use super::theme::Theme;

/// Which view is currently displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// The task panel
    Tasks,
    /// The settings screen
    Settings,
}

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Typing in the search box (live filtering)
    Search,
    /// Typing a new task limit in the settings screen
    LimitInput,
}

/// Rows of the settings screen, top to bottom
pub const SETTING_ROWS: usize = 4;
pub const SETTING_DEFAULT_VIEW: usize = 0;
pub const SETTING_SORT: usize = 1;
pub const SETTING_SHOW_PATH: usize = 2;
pub const SETTING_TASK_LIMIT: usize = 3;

/// Main application state
pub struct App {
    pub panel: Panel<VaultIndex>,
    pub prefs_store: PrefsStore,
    pub log: ActivityLog,
    pub renderer: TagHighlighter,
    pub theme: Theme,
    pub view: View,
    pub mode: Mode,
    pub should_quit: bool,
    /// Cursor into `visible`
    pub cursor: usize,
    /// First visible display line of the task list
    pub scroll_offset: usize,
    /// Cached filter/search/sort result (indices into `panel.tasks()`)
    pub visible: Vec<usize>,
    /// Settings screen state: the record as currently persisted
    pub settings_prefs: Preferences,
    pub settings_cursor: usize,
    /// Digit buffer while editing the task limit
    pub limit_input: String,
    pub show_help: bool,
    pub last_refresh: Option<DateTime<Local>>,
}

impl App {
    pub fn new(panel: Panel<VaultIndex>, prefs_store: PrefsStore, log: ActivityLog) -> App {
        let settings_prefs = prefs_store.load();
        App {
            panel,
            prefs_store,
            log,
            renderer: TagHighlighter,
            theme: Theme::default(),
            view: View::Tasks,
            mode: Mode::Navigate,
            should_quit: false,
            cursor: 0,
            scroll_offset: 0,
            visible: Vec::new(),
            settings_prefs,
            settings_cursor: 0,
            limit_input: String::new(),
            show_help: false,
            last_refresh: None,
        }
    }

    /// Recompute the visible list and keep the cursor inside it.
    pub fn rebuild_visible(&mut self) {
        self.visible = self.panel.visible();
        if self.cursor >= self.visible.len() {
            self.cursor = self.visible.len().saturating_sub(1);
        }
    }

    /// Full refresh: re-fetch, re-cap, recount, rebuild the view.
    pub fn refresh(&mut self) {
        self.panel.refresh();
        self.last_refresh = Some(Local::now());
        self.rebuild_visible();
    }

    /// Task index (into `panel.tasks()`) under the cursor, if any.
    pub fn selected_task(&self) -> Option<usize> {
        self.visible.get(self.cursor).copied()
    }

    /// Leave the settings screen: hand the panel a fresh preferences
    /// snapshot, the same way the host re-rendering the panel would.
    pub fn leave_settings(&mut self) {
        self.view = View::Tasks;
        self.mode = Mode::Navigate;
        let prefs = self.prefs_store.load();
        self.settings_prefs = prefs.clone();
        self.panel.reload_prefs(prefs);
        self.last_refresh = Some(Local::now());
        self.cursor = 0;
        self.scroll_offset = 0;
        self.rebuild_visible();
    }
}

/// Run the TUI application
pub fn run(vault_dir: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let vault = match vault_dir {
        Some(dir) => {
            let path = std::path::PathBuf::from(dir);
            if !path.is_dir() {
                return Err(format!("vault directory not found: {dir}").into());
            }
            path
        }
        None => discover_vault(&std::env::current_dir()?),
    };

    let prefs_store = PrefsStore::for_vault(&vault);
    let prefs = prefs_store.load();
    let index = VaultIndex::open(&vault)?;

    let mut app = App::new(
        Panel::new(index, prefs, ActivityLog::for_vault(&vault)),
        prefs_store,
        ActivityLog::for_vault(&vault),
    );
    app.refresh();

    // A vault that can't be watched still works, just without auto-refresh
    let watcher = VaultWatcher::start(&vault).ok();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app, watcher.as_ref());

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    watcher: Option<&VaultWatcher>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        // Disk changes re-fetch through the same path as manual refresh
        if let Some(watcher) = watcher
            && watcher.poll()
        {
            app.refresh();
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
