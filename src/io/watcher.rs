use std::path::{Path, PathBuf};
use std::sync::mpsc;

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::io::vault::SIFT_DIR;

/// Events sent from the file watcher to the TUI event loop.
#[derive(Debug)]
pub enum FileEvent {
    /// One or more markdown files changed on disk.
    Changed(Vec<PathBuf>),
}

/// Recursive watcher over the vault, filtered to markdown changes.
///
/// `.sift/` (settings, activity log) is excluded so the panel's own writes
/// don't trigger refresh loops.
pub struct VaultWatcher {
    _watcher: RecommendedWatcher,
    rx: mpsc::Receiver<FileEvent>,
}

impl VaultWatcher {
    /// Start watching the given vault root. `poll()` should be called each
    /// tick of the event loop.
    pub fn start(root: &Path) -> Result<VaultWatcher, notify::Error> {
        let (tx, rx) = mpsc::channel();
        let root_owned = root.to_path_buf();

        let mut watcher = RecommendedWatcher::new(
            move |result: Result<Event, notify::Error>| {
                let event = match result {
                    Ok(e) => e,
                    Err(_) => return,
                };
                match event.kind {
                    EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_) => {}
                    _ => return,
                }

                let relevant: Vec<PathBuf> = event
                    .paths
                    .into_iter()
                    .filter(|p| is_relevant(p, &root_owned))
                    .collect();

                if !relevant.is_empty() {
                    let _ = tx.send(FileEvent::Changed(relevant));
                }
            },
            Config::default(),
        )?;

        watcher.watch(root, RecursiveMode::Recursive)?;

        Ok(VaultWatcher {
            _watcher: watcher,
            rx,
        })
    }

    /// Drain pending events. Returns true if anything changed since the
    /// last poll.
    pub fn poll(&self) -> bool {
        let mut changed = false;
        while let Ok(FileEvent::Changed(_)) = self.rx.try_recv() {
            changed = true;
        }
        changed
    }
}

/// A path is relevant when it is a markdown file inside the vault but not
/// under `.sift/`.
fn is_relevant(path: &Path, root: &Path) -> bool {
    if !path.starts_with(root) {
        return false;
    }
    if path
        .strip_prefix(root)
        .ok()
        .is_some_and(|rel| rel.components().any(|c| c.as_os_str() == SIFT_DIR))
    {
        return false;
    }
    path.extension().and_then(|e| e.to_str()) == Some("md")
}
