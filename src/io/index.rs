use std::path::PathBuf;

use crate::model::task::{Position, Task};

/// Error type for task index operations
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{path} has no line {line}")]
    LineOutOfRange { path: String, line: usize },
    #[error("line {line} of {path} is not a task")]
    NotATask { path: String, line: usize },
    #[error("unknown file: {0}")]
    UnknownFile(String),
}

/// Contract for the task index the panel runs against.
///
/// The panel never touches files itself: it reads snapshots through
/// `all_tasks` and routes every mutation through `set_text`/`set_status`,
/// re-fetching afterward. Snapshot order is unspecified; callers order by
/// `position.start.offset`.
pub trait TaskIndex {
    /// Current snapshot of every tracked task line.
    fn all_tasks(&mut self) -> Result<Vec<Task>, IndexError>;

    /// Replace the text portion of the task line at `position`.
    fn set_text(
        &mut self,
        file_path: &str,
        position: &Position,
        new_text: &str,
    ) -> Result<(), IndexError>;

    /// Replace the checkbox marker of the task line at `position`.
    fn set_status(
        &mut self,
        file_path: &str,
        position: &Position,
        marker: char,
    ) -> Result<(), IndexError>;

    /// Reveal the task's source location. Fire-and-forget; failures are
    /// swallowed by the implementation.
    fn reveal(&self, file_path: &str, position: &Position);
}
