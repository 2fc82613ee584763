use std::error::Error;
use std::path::{Path, PathBuf};

use crate::cli::commands::{Cli, Commands, ListArgs, MoveArgs, ReopenArgs};
use crate::cli::output;
use crate::io::index::TaskIndex;
use crate::io::log::ActivityLog;
use crate::io::prefs_io::PrefsStore;
use crate::io::vault::{VaultIndex, discover_vault};
use crate::model::prefs::{Filter, SortOrder};
use crate::model::task::Task;
use crate::ops::transition::{self, Target};
use crate::ops::{sort, stats};
use crate::panel::Panel;

/// Resolve the vault root: explicit flag, or walk up from the cwd.
pub fn resolve_vault(flag: Option<&str>) -> Result<PathBuf, Box<dyn Error>> {
    match flag {
        Some(dir) => {
            let path = PathBuf::from(dir);
            if !path.is_dir() {
                return Err(format!("vault directory not found: {dir}").into());
            }
            Ok(path)
        }
        None => Ok(discover_vault(&std::env::current_dir()?)),
    }
}

/// Dispatch a parsed CLI invocation (everything except the bare TUI case).
pub fn dispatch(cli: Cli) -> Result<(), Box<dyn Error>> {
    let vault = resolve_vault(cli.vault.as_deref())?;
    match cli.command {
        Some(Commands::List(args)) => cmd_list(&vault, args, cli.json),
        Some(Commands::Stats) => cmd_stats(&vault, cli.json),
        Some(Commands::Move(args)) => cmd_move(&vault, args, cli.json),
        Some(Commands::Reopen(args)) => cmd_reopen(&vault, args, cli.json),
        None => Ok(()),
    }
}

fn cmd_list(vault: &Path, args: ListArgs, json: bool) -> Result<(), Box<dyn Error>> {
    let prefs = PrefsStore::for_vault(vault).load();
    let index = VaultIndex::open(vault)?;
    let mut panel = Panel::new(index, prefs, ActivityLog::for_vault(vault));
    panel.refresh();

    if let Some(filter) = &args.filter {
        panel.set_filter(Filter::parse(filter));
    }
    if let Some(order) = &args.sort {
        panel.set_sort(SortOrder::parse(order));
    }
    if let Some(search) = args.search {
        panel.set_search(search);
    }

    let visible = panel.visible();
    if json {
        let out = output::ListJson {
            filter: panel.filter().as_str().to_string(),
            sort: panel.sort_by().as_str().to_string(),
            tasks: visible
                .iter()
                .map(|&i| output::TaskJson::from_task(&panel.tasks()[i]))
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        let show_path = args.path || panel.prefs().show_file_path;
        output::print_task_list(panel.tasks(), &visible, show_path);
    }
    Ok(())
}

fn cmd_stats(vault: &Path, json: bool) -> Result<(), Box<dyn Error>> {
    let prefs = PrefsStore::for_vault(vault).load();
    let mut index = VaultIndex::open(vault)?;
    let mut tasks = index.all_tasks()?;
    sort::cap_by_recency(&mut tasks, prefs.task_limit);
    let stats = stats::Stats::compute(&tasks);

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        output::print_stats(&stats);
    }
    Ok(())
}

fn cmd_move(vault: &Path, args: MoveArgs, json: bool) -> Result<(), Box<dyn Error>> {
    let target = Target::parse(&args.target)
        .ok_or_else(|| format!("unknown target: {} (expected inbox, next, waiting, someday, or completed)", args.target))?;
    let mut index = VaultIndex::open(vault)?;
    let task = find_task(&mut index, &args.location)?;

    transition::apply(&mut index, &task, target)?;

    if json {
        let rewritten = find_task(&mut index, &args.location)?;
        let out = output::MoveJson {
            location: args.location,
            target: target.as_str().to_string(),
            text: rewritten.text,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("moved {} to {}", args.location, target.as_str());
    }
    Ok(())
}

fn cmd_reopen(vault: &Path, args: ReopenArgs, json: bool) -> Result<(), Box<dyn Error>> {
    let mut index = VaultIndex::open(vault)?;
    let task = find_task(&mut index, &args.location)?;
    if !task.is_completed() {
        return Err(format!("{} is not completed", args.location).into());
    }

    transition::reopen(&mut index, &task)?;

    if json {
        let reopened = find_task(&mut index, &args.location)?;
        println!(
            "{}",
            serde_json::to_string_pretty(&output::TaskJson::from_task(&reopened))?
        );
    } else {
        println!("reopened {}", args.location);
    }
    Ok(())
}

/// Look up a task by its `<file>:<line>` address (1-based line).
fn find_task(index: &mut VaultIndex, location: &str) -> Result<Task, Box<dyn Error>> {
    let (file, line) = location
        .rsplit_once(':')
        .ok_or_else(|| format!("bad location: {location} (expected <file>:<line>)"))?;
    let line: usize = line
        .parse()
        .map_err(|_| format!("bad line number in: {location}"))?;
    if line == 0 {
        return Err(format!("line numbers start at 1: {location}").into());
    }
    index
        .all_tasks()?
        .into_iter()
        .find(|t| t.file_path == file && t.position.start.line == line - 1)
        .ok_or_else(|| format!("no task at {location}").into())
}
