use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use indexmap::IndexMap;
use walkdir::WalkDir;

use crate::io::index::{IndexError, TaskIndex};
use crate::model::task::{Loc, Position, Task};

/// Name of the per-vault data directory (settings, activity log)
pub const SIFT_DIR: &str = ".sift";

/// Task index over a directory tree of markdown notes.
///
/// Every line of the form `- [ ] text` (also `*` and `+` bullets, any
/// indent, any single marker character) in any `*.md` file is a task.
/// Dot-entries — including the `.sift/` data directory — are skipped.
pub struct VaultIndex {
    root: PathBuf,
    /// Tasks per vault-relative file path, in scan order
    files: IndexMap<String, Vec<Task>>,
}

impl VaultIndex {
    /// Scan the vault once and build the index.
    pub fn open(root: &Path) -> Result<VaultIndex, IndexError> {
        let mut index = VaultIndex {
            root: root.to_path_buf(),
            files: IndexMap::new(),
        };
        index.rescan()?;
        Ok(index)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Number of indexed files (not tasks)
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Re-walk the tree and rebuild the whole index.
    pub fn rescan(&mut self) -> Result<(), IndexError> {
        let mut files = IndexMap::new();
        let walker = WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                entry.depth() == 0
                    || !entry
                        .file_name()
                        .to_str()
                        .is_some_and(|name| name.starts_with('.'))
            });
        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                // Unreadable subtrees are skipped, not fatal
                Err(_) => continue,
            };
            if !entry.file_type().is_file() {
                continue;
            }
            if entry.path().extension().and_then(|e| e.to_str()) != Some("md") {
                continue;
            }
            let rel_path = entry
                .path()
                .strip_prefix(&self.root)
                .unwrap_or(entry.path())
                .to_string_lossy()
                .into_owned();
            let content =
                fs::read_to_string(entry.path()).map_err(|e| IndexError::ReadError {
                    path: entry.path().to_path_buf(),
                    source: e,
                })?;
            files.insert(rel_path.clone(), parse_file(&rel_path, &content));
        }
        self.files = files;
        Ok(())
    }

    /// Rewrite the task line at `position` in `file_path` using `edit`,
    /// verifying it still parses as a task first.
    fn edit_line(
        &mut self,
        file_path: &str,
        position: &Position,
        edit: impl FnOnce(&TaskLine, &str) -> String,
    ) -> Result<(), IndexError> {
        let abs_path = self.root.join(file_path);
        let content = fs::read_to_string(&abs_path).map_err(|e| IndexError::ReadError {
            path: abs_path.clone(),
            source: e,
        })?;
        let had_trailing_newline = content.ends_with('\n');
        let mut lines: Vec<String> = content.lines().map(str::to_string).collect();

        let line_no = position.start.line;
        let line = lines
            .get(line_no)
            .cloned()
            .ok_or_else(|| IndexError::LineOutOfRange {
                path: file_path.to_string(),
                line: line_no,
            })?;
        // The file may have changed underneath us since the snapshot
        let parsed = parse_task_line(&line).ok_or_else(|| IndexError::NotATask {
            path: file_path.to_string(),
            line: line_no,
        })?;

        lines[line_no] = edit(&parsed, &line);

        let mut output = lines.join("\n");
        if had_trailing_newline {
            output.push('\n');
        }
        fs::write(&abs_path, output).map_err(|e| IndexError::WriteError {
            path: abs_path,
            source: e,
        })?;

        // Keep the cached entry in step with the file
        let rel = file_path.to_string();
        let content = lines.join("\n");
        self.files.insert(rel.clone(), parse_file(&rel, &content));
        Ok(())
    }
}

impl TaskIndex for VaultIndex {
    fn all_tasks(&mut self) -> Result<Vec<Task>, IndexError> {
        self.rescan()?;
        Ok(self.files.values().flatten().cloned().collect())
    }

    fn set_text(
        &mut self,
        file_path: &str,
        position: &Position,
        new_text: &str,
    ) -> Result<(), IndexError> {
        self.edit_line(file_path, position, |parsed, line| {
            format!("{}{}", &line[..parsed.text_col], new_text)
        })
    }

    fn set_status(
        &mut self,
        file_path: &str,
        position: &Position,
        marker: char,
    ) -> Result<(), IndexError> {
        self.edit_line(file_path, position, |parsed, line| {
            let mut rewritten = String::with_capacity(line.len());
            rewritten.push_str(&line[..parsed.marker_col]);
            rewritten.push(marker);
            rewritten.push_str(&line[parsed.marker_col + parsed.marker.len_utf8()..]);
            rewritten
        })
    }

    fn reveal(&self, file_path: &str, position: &Position) {
        let Ok(editor) = std::env::var("EDITOR") else {
            return;
        };
        if editor.is_empty() {
            return;
        }
        let path = self.root.join(file_path);
        let _ = Command::new(editor)
            .arg(format!("+{}", position.start.line + 1))
            .arg(&path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
    }
}

/// Byte layout of a parsed checkbox line
struct TaskLine {
    /// Column of the marker character inside the brackets
    marker_col: usize,
    /// Column where the text portion begins
    text_col: usize,
    marker: char,
    text: String,
}

/// Parse one line as a checkbox task: `{indent}{-|*|+} [{c}] {text}`.
fn parse_task_line(line: &str) -> Option<TaskLine> {
    let trimmed = line.trim_start_matches([' ', '\t']);
    let bullet = trimmed.chars().next()?;
    if !matches!(bullet, '-' | '*' | '+') {
        return None;
    }
    let rest = trimmed[bullet.len_utf8()..].strip_prefix(' ')?;
    let rest = rest.strip_prefix('[')?;
    let marker_col = line.len() - rest.len();
    let mut chars = rest.chars();
    let marker = chars.next()?;
    if marker == ']' {
        // `[]` has no marker slot
        return None;
    }
    let rest = chars.as_str().strip_prefix(']')?;
    let text = rest.strip_prefix(' ').unwrap_or(rest);
    let text_col = line.len() - text.len();
    Some(TaskLine {
        marker_col,
        text_col,
        marker,
        text: text.to_string(),
    })
}

/// Parse a whole file into tasks, tracking line starts as byte offsets.
fn parse_file(rel_path: &str, content: &str) -> Vec<Task> {
    let mut tasks = Vec::new();
    let mut offset = 0;
    for (line_no, line) in content.lines().enumerate() {
        if let Some(parsed) = parse_task_line(line) {
            tasks.push(Task {
                text: parsed.text,
                status: parsed.marker,
                file_path: rel_path.to_string(),
                position: Position {
                    start: Loc {
                        line: line_no,
                        col: 0,
                        offset,
                    },
                    end: Loc {
                        line: line_no,
                        col: line.len(),
                        offset: offset + line.len(),
                    },
                },
            });
        }
        offset += line.len() + 1;
    }
    tasks
}

/// Walk up from `start` looking for a directory containing `.sift/`.
/// Falls back to `start` itself when nothing is found.
pub fn discover_vault(start: &Path) -> PathBuf {
    let mut current = start.to_path_buf();
    loop {
        if current.join(SIFT_DIR).is_dir() {
            return current;
        }
        if !current.pop() {
            return start.to_path_buf();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::{DONE_MARKER, OPEN_MARKER};
    use tempfile::TempDir;

    fn write_vault(files: &[(&str, &str)]) -> TempDir {
        let tmp = TempDir::new().unwrap();
        for (name, content) in files {
            let path = tmp.path().join(name);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(path, content).unwrap();
        }
        tmp
    }

    #[test]
    fn scans_checkbox_lines_across_files() {
        let tmp = write_vault(&[
            ("home.md", "# Home\n\n- [ ] Buy milk #next\n- [x] Take out trash\n"),
            ("work.md", "* [ ] Draft report\nplain text line\n+ [-] Odd marker\n"),
        ]);
        let mut index = VaultIndex::open(tmp.path()).unwrap();
        let tasks = index.all_tasks().unwrap();
        assert_eq!(tasks.len(), 4);
        assert_eq!(index.file_count(), 2);

        let texts: Vec<&str> = tasks.iter().map(|t| t.text.as_str()).collect();
        assert!(texts.contains(&"Buy milk #next"));
        assert!(texts.contains(&"Odd marker"));
    }

    #[test]
    fn statuses_and_positions_are_recorded() {
        let content = "# Home\n\n- [ ] Buy milk\n- [x] Done thing\n";
        let tmp = write_vault(&[("home.md", content)]);
        let mut index = VaultIndex::open(tmp.path()).unwrap();
        let tasks = index.all_tasks().unwrap();

        let open = tasks.iter().find(|t| t.text == "Buy milk").unwrap();
        assert_eq!(open.status, OPEN_MARKER);
        assert_eq!(open.position.start.line, 2);
        assert_eq!(open.position.start.offset, content.find("- [ ]").unwrap());
        assert_eq!(open.position.end.offset, open.position.start.offset + "- [ ] Buy milk".len());

        let done = tasks.iter().find(|t| t.text == "Done thing").unwrap();
        assert_eq!(done.status, DONE_MARKER);
        assert!(done.position.start.offset > open.position.start.offset);
    }

    #[test]
    fn ignores_non_markdown_and_hidden_entries() {
        let tmp = write_vault(&[
            ("notes.md", "- [ ] Visible\n"),
            ("notes.txt", "- [ ] Not markdown\n"),
            (".sift/settings.toml", "task_limit = 5\n"),
            (".obsidian/cache.md", "- [ ] Hidden dir\n"),
        ]);
        let mut index = VaultIndex::open(tmp.path()).unwrap();
        let tasks = index.all_tasks().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].text, "Visible");
    }

    #[test]
    fn indented_tasks_and_empty_text_parse() {
        let tmp = write_vault(&[("n.md", "  - [ ] Indented\n- [ ]\n- [] not a task\n")]);
        let mut index = VaultIndex::open(tmp.path()).unwrap();
        let tasks = index.all_tasks().unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].text, "Indented");
        assert_eq!(tasks[1].text, "");
    }

    #[test]
    fn set_text_rewrites_only_the_text_portion() {
        let tmp = write_vault(&[("n.md", "# Title\n- [ ] Buy milk #next\n- [ ] Other\n")]);
        let mut index = VaultIndex::open(tmp.path()).unwrap();
        let tasks = index.all_tasks().unwrap();
        let task = tasks.iter().find(|t| t.text == "Buy milk #next").unwrap();

        index
            .set_text(&task.file_path, &task.position, "Buy milk #waiting")
            .unwrap();

        let content = fs::read_to_string(tmp.path().join("n.md")).unwrap();
        assert_eq!(content, "# Title\n- [ ] Buy milk #waiting\n- [ ] Other\n");
    }

    #[test]
    fn set_status_flips_only_the_marker() {
        let tmp = write_vault(&[("n.md", "- [ ] Buy milk\n")]);
        let mut index = VaultIndex::open(tmp.path()).unwrap();
        let task = index.all_tasks().unwrap().remove(0);

        index
            .set_status(&task.file_path, &task.position, DONE_MARKER)
            .unwrap();
        assert_eq!(
            fs::read_to_string(tmp.path().join("n.md")).unwrap(),
            "- [x] Buy milk\n"
        );

        index
            .set_status(&task.file_path, &task.position, OPEN_MARKER)
            .unwrap();
        assert_eq!(
            fs::read_to_string(tmp.path().join("n.md")).unwrap(),
            "- [ ] Buy milk\n"
        );
    }

    #[test]
    fn mutating_a_vanished_task_line_fails_cleanly() {
        let tmp = write_vault(&[("n.md", "- [ ] Buy milk\n")]);
        let mut index = VaultIndex::open(tmp.path()).unwrap();
        let task = index.all_tasks().unwrap().remove(0);

        // The line is no longer a task by the time the mutation lands
        fs::write(tmp.path().join("n.md"), "just prose now\n").unwrap();
        let err = index
            .set_text(&task.file_path, &task.position, "New text")
            .unwrap_err();
        assert!(matches!(err, IndexError::NotATask { .. }));
        // File untouched
        assert_eq!(
            fs::read_to_string(tmp.path().join("n.md")).unwrap(),
            "just prose now\n"
        );

        fs::write(tmp.path().join("n.md"), "").unwrap();
        let err = index
            .set_status(&task.file_path, &task.position, DONE_MARKER)
            .unwrap_err();
        assert!(matches!(err, IndexError::LineOutOfRange { .. }));
    }

    #[test]
    fn rescan_reflects_on_disk_changes() {
        let tmp = write_vault(&[("n.md", "- [ ] One\n")]);
        let mut index = VaultIndex::open(tmp.path()).unwrap();
        assert_eq!(index.all_tasks().unwrap().len(), 1);

        fs::write(tmp.path().join("n.md"), "- [ ] One\n- [ ] Two\n").unwrap();
        assert_eq!(index.all_tasks().unwrap().len(), 2);
    }

    #[test]
    fn discover_vault_walks_up_to_sift_dir() {
        let tmp = write_vault(&[(".sift/settings.toml", ""), ("sub/deep/n.md", "")]);
        let nested = tmp.path().join("sub/deep");
        assert_eq!(discover_vault(&nested), tmp.path());
    }

    #[test]
    fn discover_vault_falls_back_to_start() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(discover_vault(tmp.path()), tmp.path());
    }
}
