use crate::model::prefs::Filter;
use crate::model::task::{TAG_CONTEXT, TAG_NEXT, TAG_PROJECT, TAG_SOMEDAY, TAG_WAITING, Task};

/// Does `task` pass the category predicate for `filter`?
///
/// Tag categories match by plain substring, so `#nextweek` passes the
/// `Next` filter. The `Inbox` display filter is looser than the inbox
/// counter in `ops::stats`: it only requires the absence of `#project`
/// and `#context`, not of every tag.
pub fn category_matches(task: &Task, filter: Filter) -> bool {
    match filter {
        Filter::Inbox => {
            !task.text.contains(TAG_PROJECT)
                && !task.text.contains(TAG_CONTEXT)
                && !task.is_completed()
        }
        Filter::Next => task.text.contains(TAG_NEXT),
        Filter::Waiting => task.text.contains(TAG_WAITING),
        Filter::Someday => task.text.contains(TAG_SOMEDAY),
        Filter::Completed => task.is_completed(),
        Filter::All => true,
    }
}

/// Does `task` match the free-text search?
///
/// `needle` must already be lowercased; both the task text and its file
/// path are searched case-insensitively. An empty needle matches all.
pub fn search_matches(task: &Task, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    task.text.to_lowercase().contains(needle) || task.file_path.to_lowercase().contains(needle)
}

/// Combined predicate: search first, then category.
pub fn matches(task: &Task, filter: Filter, needle: &str) -> bool {
    search_matches(task, needle) && category_matches(task, filter)
}

/// Select the indices of tasks passing both the search and the category
/// predicate, preserving input order for the subsequent sort.
pub fn select(tasks: &[Task], filter: Filter, search: &str) -> Vec<usize> {
    let needle = search.to_lowercase();
    tasks
        .iter()
        .enumerate()
        .filter(|(_, task)| matches(task, filter, &needle))
        .map(|(i, _)| i)
        .collect()
}
