use std::cmp::Ordering;

use crate::model::prefs::SortOrder;
use crate::model::task::Task;

/// Total order over tasks for the given sort setting.
///
/// `Modified` is descending by start offset (the recency proxy: later in
/// the vault counts as fresher), `Created` is the exact reverse, and
/// `Alphabetical` compares text case-insensitively with a raw tiebreak in
/// place of locale collation.
pub fn compare(a: &Task, b: &Task, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Modified => b.position.start.offset.cmp(&a.position.start.offset),
        SortOrder::Created => a.position.start.offset.cmp(&b.position.start.offset),
        SortOrder::Alphabetical => compare_text(&a.text, &b.text),
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Stable-sort a list of indices into `tasks` by the given order.
pub fn apply(tasks: &[Task], visible: &mut [usize], order: SortOrder) {
    visible.sort_by(|&i, &j| compare(&tasks[i], &tasks[j], order));
}

/// Order the full fetch by recency and truncate to the task limit.
///
/// Runs on every fetch, before any filter/search/sort, so the panel only
/// ever operates on the `limit` most recent tasks.
pub fn cap_by_recency(tasks: &mut Vec<Task>, limit: usize) {
    tasks.sort_by(|a, b| b.position.start.offset.cmp(&a.position.start.offset));
    tasks.truncate(limit);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::{Loc, OPEN_MARKER, Position};

    fn task_at(text: &str, offset: usize) -> Task {
        Task {
            text: text.to_string(),
            status: OPEN_MARKER,
            file_path: "notes.md".to_string(),
            position: Position {
                start: Loc {
                    line: 0,
                    col: 0,
                    offset,
                },
                end: Loc {
                    line: 0,
                    col: 0,
                    offset: offset + text.len(),
                },
            },
        }
    }

    fn sample() -> Vec<Task> {
        vec![
            task_at("bravo", 10),
            task_at("Alpha", 30),
            task_at("charlie", 20),
        ]
    }

    #[test]
    fn modified_is_descending_by_offset() {
        let tasks = sample();
        let mut visible = vec![0, 1, 2];
        apply(&tasks, &mut visible, SortOrder::Modified);
        assert_eq!(visible, vec![1, 2, 0]);
    }

    #[test]
    fn created_is_exact_reverse_of_modified() {
        let tasks = sample();
        let mut modified = vec![0, 1, 2];
        apply(&tasks, &mut modified, SortOrder::Modified);
        let mut created = vec![0, 1, 2];
        apply(&tasks, &mut created, SortOrder::Created);
        modified.reverse();
        assert_eq!(created, modified);
    }

    #[test]
    fn alphabetical_ignores_case() {
        let tasks = sample();
        let mut visible = vec![0, 1, 2];
        apply(&tasks, &mut visible, SortOrder::Alphabetical);
        assert_eq!(visible, vec![1, 0, 2]);
    }

    #[test]
    fn alphabetical_is_deterministic_for_case_variants() {
        let tasks = vec![task_at("apple", 0), task_at("Apple", 1)];
        let mut visible = vec![0, 1];
        apply(&tasks, &mut visible, SortOrder::Alphabetical);
        // Uppercase sorts before lowercase on the raw tiebreak
        assert_eq!(visible, vec![1, 0]);
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let tasks = vec![task_at("same", 5), task_at("same", 5), task_at("same", 5)];
        let mut visible = vec![0, 1, 2];
        apply(&tasks, &mut visible, SortOrder::Alphabetical);
        assert_eq!(visible, vec![0, 1, 2]);
    }

    #[test]
    fn sorting_twice_yields_the_same_sequence() {
        let tasks = sample();
        let mut once = vec![0, 1, 2];
        apply(&tasks, &mut once, SortOrder::Alphabetical);
        let mut twice = once.clone();
        apply(&tasks, &mut twice, SortOrder::Alphabetical);
        assert_eq!(once, twice);
    }

    #[test]
    fn cap_keeps_highest_offsets() {
        let mut tasks = vec![
            task_at("a", 1),
            task_at("b", 50),
            task_at("c", 20),
            task_at("d", 40),
            task_at("e", 30),
        ];
        cap_by_recency(&mut tasks, 2);
        let texts: Vec<&str> = tasks.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["b", "d"]);
    }

    #[test]
    fn cap_larger_than_list_is_a_no_op_truncation() {
        let mut tasks = sample();
        cap_by_recency(&mut tasks, 100);
        assert_eq!(tasks.len(), 3);
        // Still reordered by recency
        assert_eq!(tasks[0].position.start.offset, 30);
    }
}
