use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::io::vault::SIFT_DIR;
use crate::model::prefs::{Preferences, PrefsPatch, TASK_LIMIT_MAX, TASK_LIMIT_MIN};

/// Error type for preference writes. Reads never fail.
#[derive(Debug, thiserror::Error)]
pub enum PrefsError {
    #[error("could not write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Preferences store backed by `.sift/settings.toml` in the vault.
///
/// Loads never fail: a missing file, a missing key, or a malformed value
/// all resolve to the documented defaults. Updates merge into the existing
/// document (preserving unknown keys and formatting) and land atomically.
pub struct PrefsStore {
    path: PathBuf,
}

impl PrefsStore {
    /// Store for the given vault root.
    pub fn for_vault(root: &Path) -> PrefsStore {
        PrefsStore {
            path: root.join(SIFT_DIR).join("settings.toml"),
        }
    }

    #[cfg(test)]
    fn at(path: PathBuf) -> PrefsStore {
        PrefsStore { path }
    }

    /// Read the full preferences record, defaults substituted throughout.
    pub fn load(&self) -> Preferences {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(_) => return Preferences::default(),
        };
        match toml::from_str::<Preferences>(&text) {
            Ok(prefs) => prefs.clamp(),
            Err(_) => Preferences::default(),
        }
    }

    /// Shallow-merge `patch` into the stored record and persist it.
    ///
    /// Only the patch's set fields are rewritten; everything else in the
    /// document survives byte-for-byte. The replace is atomic, so a
    /// concurrent `load` sees either the old or the new record, never a
    /// torn one.
    pub fn update(&self, patch: &PrefsPatch) -> Result<(), PrefsError> {
        if patch.is_empty() {
            return Ok(());
        }
        let text = fs::read_to_string(&self.path).unwrap_or_default();
        // A document that no longer parses is abandoned rather than merged
        // into; the patch lands on a default record instead.
        let mut doc: toml_edit::DocumentMut = text.parse().unwrap_or_default();

        if let Some(filter) = patch.default_filter {
            doc["default_filter"] = toml_edit::value(filter.as_str());
        }
        if let Some(sort) = patch.sort_by {
            doc["sort_by"] = toml_edit::value(sort.as_str());
        }
        if let Some(show) = patch.show_file_path {
            doc["show_file_path"] = toml_edit::value(show);
        }
        if let Some(limit) = patch.task_limit {
            let limit = limit.clamp(TASK_LIMIT_MIN, TASK_LIMIT_MAX);
            doc["task_limit"] = toml_edit::value(limit as i64);
        }

        self.write_atomic(&doc.to_string())
    }

    fn write_atomic(&self, content: &str) -> Result<(), PrefsError> {
        let dir = self.path.parent().unwrap_or(Path::new("."));
        let map_err = |source| PrefsError::WriteError {
            path: self.path.clone(),
            source,
        };
        fs::create_dir_all(dir).map_err(map_err)?;
        let mut tmp = NamedTempFile::new_in(dir).map_err(map_err)?;
        tmp.write_all(content.as_bytes()).map_err(map_err)?;
        tmp.persist(&self.path)
            .map_err(|e| PrefsError::WriteError {
                path: self.path.clone(),
                source: e.error,
            })?;
        Ok(())
    }
}
