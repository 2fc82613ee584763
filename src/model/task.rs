use serde::{Deserialize, Serialize};

/// Checkbox marker for a completed task
pub const DONE_MARKER: char = 'x';
/// Checkbox marker for an open task
pub const OPEN_MARKER: char = ' ';

/// The three mutually-exclusive GTD status tags
pub const TAG_NEXT: &str = "#next";
pub const TAG_WAITING: &str = "#waiting";
pub const TAG_SOMEDAY: &str = "#someday";
/// Organizational tags that keep a task out of the inbox view
pub const TAG_PROJECT: &str = "#project";
pub const TAG_CONTEXT: &str = "#context";

/// A location within a source file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Loc {
    /// 0-indexed line number
    pub line: usize,
    /// Byte column within the line
    pub col: usize,
    /// Byte offset from the start of the file
    pub offset: usize,
}

/// Start/end location of a task line within its source file.
///
/// `start.offset` doubles as the recency proxy: a larger offset means the
/// line sits later in traversal order, which is the closest thing to a
/// modification time the index can offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Position {
    pub start: Loc,
    pub end: Loc,
}

/// A single task line pulled from the vault index.
///
/// The index owns the underlying file; the panel only holds snapshots and
/// routes mutations back through the index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Line content after the checkbox, including inline tags
    pub text: String,
    /// Checkbox marker character; `'x'` means completed
    pub status: char,
    /// Vault-relative path of the source file
    pub file_path: String,
    /// Location of the task line within its file
    pub position: Position,
}

impl Task {
    pub fn is_completed(&self) -> bool {
        self.status == DONE_MARKER
    }

    /// Identity for in-flight bookkeeping: source file plus start offset.
    pub fn key(&self) -> TaskKey {
        TaskKey {
            file_path: self.file_path.clone(),
            offset: self.position.start.offset,
        }
    }
}

/// Task identity used to guard against overlapping mutations of one line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskKey {
    pub file_path: String,
    pub offset: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task_at(path: &str, offset: usize) -> Task {
        Task {
            text: "Call the plumber".to_string(),
            status: OPEN_MARKER,
            file_path: path.to_string(),
            position: Position {
                start: Loc {
                    line: 3,
                    col: 0,
                    offset,
                },
                end: Loc {
                    line: 3,
                    col: 22,
                    offset: offset + 22,
                },
            },
        }
    }

    #[test]
    fn completed_is_marker_exact() {
        let mut task = task_at("home.md", 10);
        assert!(!task.is_completed());
        task.status = DONE_MARKER;
        assert!(task.is_completed());
        // Any other marker counts as open
        task.status = '-';
        assert!(!task.is_completed());
    }

    #[test]
    fn key_is_path_plus_offset() {
        let a = task_at("home.md", 10);
        let b = task_at("home.md", 10);
        let c = task_at("home.md", 42);
        let d = task_at("work.md", 10);
        assert_eq!(a.key(), b.key());
        assert_ne!(a.key(), c.key());
        assert_ne!(a.key(), d.key());
    }
}
