use std::sync::OnceLock;

use regex::Regex;

use crate::io::index::{IndexError, TaskIndex};
use crate::model::task::{DONE_MARKER, OPEN_MARKER, Task};

/// Target bucket for a status transition.
///
/// `Inbox` means "no status tag"; `Completed` also flips the checkbox
/// marker. Reopening a completed task is a separate action (`reopen`)
/// because it touches only the marker, never the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Inbox,
    Next,
    Waiting,
    Someday,
    Completed,
}

impl Target {
    /// Tag appended for this target, if any
    pub fn tag(self) -> Option<&'static str> {
        match self {
            Target::Next => Some("next"),
            Target::Waiting => Some("waiting"),
            Target::Someday => Some("someday"),
            Target::Inbox | Target::Completed => None,
        }
    }

    pub fn parse(s: &str) -> Option<Target> {
        match s {
            "inbox" => Some(Target::Inbox),
            "next" => Some(Target::Next),
            "waiting" => Some(Target::Waiting),
            "someday" => Some(Target::Someday),
            "completed" => Some(Target::Completed),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Target::Inbox => "inbox",
            Target::Next => "next",
            Target::Waiting => "waiting",
            Target::Someday => "someday",
            Target::Completed => "completed",
        }
    }
}

fn status_tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"#(next|waiting|someday)\s*").expect("status tag pattern"))
}

/// Remove every occurrence of the three status tags (and any whitespace
/// trailing each one) from the text, then trim the right edge.
///
/// Substring semantics apply here too: stripping `#next` out of
/// `#nextweek` leaves `week` behind.
pub fn strip_status_tags(text: &str) -> String {
    let stripped = status_tag_re().replace_all(text, "");
    stripped.trim_end().to_string()
}

/// Rewrite the task text for a transition: strip the old status tags and,
/// for the three tagged buckets, append the new one.
pub fn retag(text: &str, target: Target) -> String {
    let stripped = strip_status_tags(text);
    match target.tag() {
        Some(tag) => format!("{stripped} #{tag}"),
        None => stripped,
    }
}

/// Apply a transition through the index: always rewrite the text, and for
/// `Completed` also set the checkbox marker.
///
/// The caller re-fetches on success; on failure nothing local changes.
pub fn apply(index: &mut dyn TaskIndex, task: &Task, target: Target) -> Result<(), IndexError> {
    let new_text = retag(&task.text, target);
    index.set_text(&task.file_path, &task.position, &new_text)?;
    if target == Target::Completed {
        index.set_status(&task.file_path, &task.position, DONE_MARKER)?;
    }
    Ok(())
}

/// Reopen a completed task: restore the open marker, leave text alone.
pub fn reopen(index: &mut dyn TaskIndex, task: &Task) -> Result<(), IndexError> {
    index.set_status(&task.file_path, &task.position, OPEN_MARKER)
}
