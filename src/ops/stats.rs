use serde::Serialize;

use crate::model::prefs::Filter;
use crate::model::task::{TAG_NEXT, TAG_SOMEDAY, TAG_WAITING, Task};

/// Per-category counts over the full working set.
///
/// The counters always describe the complete (capped) task list, never the
/// currently filtered view, so they only change when the list itself does.
/// Categories are not mutually exclusive: one task can count toward
/// `next`, `waiting`, and `someday` at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Stats {
    pub all: usize,
    pub inbox: usize,
    pub next: usize,
    pub waiting: usize,
    pub someday: usize,
    pub completed: usize,
}

impl Stats {
    /// Compute all six counters in one pass.
    ///
    /// Note: `inbox` here means "no `#` anywhere and not completed", which
    /// is stricter than the inbox display filter (see `ops::filter`). The
    /// two definitions are kept distinct on purpose.
    pub fn compute(tasks: &[Task]) -> Stats {
        let mut stats = Stats {
            all: tasks.len(),
            ..Stats::default()
        };
        for task in tasks {
            if !task.text.contains('#') && !task.is_completed() {
                stats.inbox += 1;
            }
            // Plain substring match: `#nextweek` counts toward `next`
            if task.text.contains(TAG_NEXT) {
                stats.next += 1;
            }
            if task.text.contains(TAG_WAITING) {
                stats.waiting += 1;
            }
            if task.text.contains(TAG_SOMEDAY) {
                stats.someday += 1;
            }
            if task.is_completed() {
                stats.completed += 1;
            }
        }
        stats
    }

    /// Counter for a given filter button.
    pub fn count(&self, filter: Filter) -> usize {
        match filter {
            Filter::All => self.all,
            Filter::Inbox => self.inbox,
            Filter::Next => self.next,
            Filter::Waiting => self.waiting,
            Filter::Someday => self.someday,
            Filter::Completed => self.completed,
        }
    }
}
