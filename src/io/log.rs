use std::fmt::Display;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::io::vault::SIFT_DIR;

/// Append-only log for errors the panel absorbs.
///
/// Mutation and refresh failures never reach the screen; they land here
/// (`.sift/activity.log`) instead. Logging itself must never fail the
/// caller, so write errors are dropped.
pub struct ActivityLog {
    path: Option<PathBuf>,
}

impl ActivityLog {
    /// Log into the vault's `.sift/` directory.
    pub fn for_vault(root: &Path) -> ActivityLog {
        ActivityLog {
            path: Some(root.join(SIFT_DIR).join("activity.log")),
        }
    }

    /// A log that discards everything (tests, ad-hoc panels).
    pub fn disabled() -> ActivityLog {
        ActivityLog { path: None }
    }

    /// Record one absorbed error with a context label.
    pub fn record(&self, context: &str, err: &dyn Display) {
        let Some(path) = &self.path else {
            return;
        };
        if let Some(dir) = path.parent() {
            let _ = std::fs::create_dir_all(dir);
        }
        let line = format!(
            "[{}] {}: {}\n",
            Utc::now().format("%Y-%m-%dT%H:%M:%SZ"),
            context,
            err
        );
        let _ = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .and_then(|mut file| file.write_all(line.as_bytes()));
    }
}
