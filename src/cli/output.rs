use serde::Serialize;

use crate::model::task::Task;
use crate::ops::stats::Stats;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson {
    pub text: String,
    pub status: String,
    pub completed: bool,
    pub file_path: String,
    /// 1-based line number, matching the `<file>:<line>` CLI addressing
    pub line: usize,
    pub offset: usize,
}

impl TaskJson {
    pub fn from_task(task: &Task) -> TaskJson {
        TaskJson {
            text: task.text.clone(),
            status: task.status.to_string(),
            completed: task.is_completed(),
            file_path: task.file_path.clone(),
            line: task.position.start.line + 1,
            offset: task.position.start.offset,
        }
    }
}

#[derive(Serialize)]
pub struct ListJson {
    pub filter: String,
    pub sort: String,
    pub tasks: Vec<TaskJson>,
}

#[derive(Serialize)]
pub struct MoveJson {
    pub location: String,
    pub target: String,
    pub text: String,
}

// ---------------------------------------------------------------------------
// Plain-text printers
// ---------------------------------------------------------------------------

/// Print tasks as `[x] text` lines, optionally prefixed by `file:line`.
pub fn print_task_list(tasks: &[Task], visible: &[usize], show_path: bool) {
    if visible.is_empty() {
        println!("no tasks found");
        return;
    }
    for &i in visible {
        let task = &tasks[i];
        if show_path {
            println!(
                "{}:{}  [{}] {}",
                task.file_path,
                task.position.start.line + 1,
                task.status,
                task.text
            );
        } else {
            println!("[{}] {}", task.status, task.text);
        }
    }
}

/// Print the six counters, one per line.
pub fn print_stats(stats: &Stats) {
    println!("all        {}", stats.all);
    println!("inbox      {}", stats.inbox);
    println!("next       {}", stats.next);
    println!("waiting    {}", stats.waiting);
    println!("someday    {}", stats.someday);
    println!("completed  {}", stats.completed);
}
