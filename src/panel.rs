use std::collections::HashSet;

use crate::io::index::TaskIndex;
use crate::io::log::ActivityLog;
use crate::model::prefs::{Filter, Preferences, SortOrder};
use crate::model::task::{Task, TaskKey};
use crate::ops::stats::Stats;
use crate::ops::transition::{self, Target};
use crate::ops::{filter, sort};

/// The task panel's explicit state: the capped working set, its counters,
/// and the active filter/search/sort — all owned here, nothing ambient.
///
/// The panel reads a `Preferences` snapshot when constructed (and again on
/// `reload_prefs`, the equivalent of the host re-rendering it); settings
/// changes in between do not reach it.
pub struct Panel<I: TaskIndex> {
    index: I,
    log: ActivityLog,
    prefs: Preferences,
    tasks: Vec<Task>,
    stats: Stats,
    filter: Filter,
    search: String,
    sort_by: SortOrder,
    is_refreshing: bool,
    /// Tasks with a mutation in progress; commands for them are dropped
    /// until the mutation (and its refresh) settles, so two quick status
    /// changes cannot race each other into a lost update.
    in_flight: HashSet<TaskKey>,
}

impl<I: TaskIndex> Panel<I> {
    /// Build a panel seeded from a preferences snapshot. The task list
    /// starts empty; call `refresh` to populate it.
    pub fn new(index: I, prefs: Preferences, log: ActivityLog) -> Panel<I> {
        Panel {
            index,
            log,
            filter: prefs.default_filter,
            sort_by: prefs.sort_by,
            prefs,
            tasks: Vec::new(),
            stats: Stats::default(),
            search: String::new(),
            is_refreshing: false,
            in_flight: HashSet::new(),
        }
    }

    // --- Read side ---

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn sort_by(&self) -> SortOrder {
        self.sort_by
    }

    pub fn prefs(&self) -> &Preferences {
        &self.prefs
    }

    pub fn is_refreshing(&self) -> bool {
        self.is_refreshing
    }

    /// Indices into `tasks()` passing the filter and search, in sort order.
    /// Recomputed on demand; the counters deliberately ignore it.
    pub fn visible(&self) -> Vec<usize> {
        let mut visible = filter::select(&self.tasks, self.filter, &self.search);
        sort::apply(&self.tasks, &mut visible, self.sort_by);
        visible
    }

    // --- State changes ---

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    pub fn set_search(&mut self, search: String) {
        self.search = search;
    }

    pub fn set_sort(&mut self, sort_by: SortOrder) {
        self.sort_by = sort_by;
    }

    /// Re-fetch the full snapshot, cap it by recency, recompute counters.
    /// An index failure keeps the stale list and goes to the activity log.
    pub fn refresh(&mut self) {
        self.is_refreshing = true;
        match self.index.all_tasks() {
            Ok(mut tasks) => {
                sort::cap_by_recency(&mut tasks, self.prefs.task_limit);
                self.tasks = tasks;
                self.stats = Stats::compute(&self.tasks);
            }
            Err(err) => self.log.record("refresh", &err),
        }
        self.is_refreshing = false;
    }

    /// Adopt a fresh preferences snapshot, as if the panel were remounted:
    /// filter and sort reset to the configured defaults, then a refresh
    /// picks up the (possibly changed) task limit.
    pub fn reload_prefs(&mut self, prefs: Preferences) {
        self.filter = prefs.default_filter;
        self.sort_by = prefs.sort_by;
        self.prefs = prefs;
        self.refresh();
    }

    /// Move the task at `task_idx` (an index into `tasks()`) to a new
    /// bucket. A failed mutation is logged and absorbed; a task already in
    /// flight is skipped entirely.
    pub fn transition(&mut self, task_idx: usize, target: Target) {
        let Some(task) = self.tasks.get(task_idx).cloned() else {
            return;
        };
        self.mutate(&task, |index| transition::apply(index, &task, target));
    }

    /// Flip a completed task back to open. Text and tags stay untouched.
    pub fn reopen(&mut self, task_idx: usize) {
        let Some(task) = self.tasks.get(task_idx).cloned() else {
            return;
        };
        self.mutate(&task, |index| transition::reopen(index, &task));
    }

    fn mutate(
        &mut self,
        task: &Task,
        op: impl FnOnce(&mut dyn TaskIndex) -> Result<(), crate::io::index::IndexError>,
    ) {
        let key = task.key();
        if !self.in_flight.insert(key.clone()) {
            // A mutation for this task is already underway
            return;
        }
        match op(&mut self.index) {
            Ok(()) => self.refresh(),
            Err(err) => self.log.record("update task", &err),
        }
        self.in_flight.remove(&key);
    }

    /// Reveal the task's source location. Side-effect only.
    pub fn navigate(&self, task_idx: usize) {
        if let Some(task) = self.tasks.get(task_idx) {
            self.index.reveal(&task.file_path, &task.position);
        }
    }

    #[cfg(test)]
    fn force_in_flight(&mut self, key: TaskKey) {
        self.in_flight.insert(key);
    }
}
