//! Integration tests for the `sift` CLI.
//!
//! Each test creates a temp vault, runs `sift` as a subprocess, and
//! verifies stdout and/or file contents.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Get the path to the built `sift` binary.
fn sift_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("sift");
    path
}

/// Create a small vault with tasks across two files.
fn create_test_vault(root: &Path) {
    fs::create_dir_all(root.join("notes")).unwrap();
    fs::write(
        root.join("todo.md"),
        "\
# Todo

- [ ] Buy milk #next
- [ ] Wait for quote #waiting
- [ ] Learn sailing #someday
- [ ] Capture idea
- [x] Pay rent
",
    )
    .unwrap();
    fs::write(root.join("notes/journal.md"), "- [ ] Call dentist #next\n").unwrap();
}

fn run_sift(vault: &Path, args: &[&str]) -> std::process::Output {
    Command::new(sift_bin())
        .arg("-C")
        .arg(vault)
        .args(args)
        .output()
        .expect("failed to run sift")
}

fn stdout_of(output: &std::process::Output) -> String {
    assert!(
        output.status.success(),
        "sift failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

// ---------------------------------------------------------------------------
// list
// ---------------------------------------------------------------------------

#[test]
fn list_orders_by_recency_by_default() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    let out = stdout_of(&run_sift(tmp.path(), &["list"]));
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines,
        vec![
            "[x] Pay rent",
            "[ ] Capture idea",
            "[ ] Learn sailing #someday",
            "[ ] Wait for quote #waiting",
            "[ ] Buy milk #next",
            "[ ] Call dentist #next",
        ]
    );
}

#[test]
fn list_filters_by_category() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    let out = stdout_of(&run_sift(tmp.path(), &["list", "--filter", "next"]));
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines, vec!["[ ] Buy milk #next", "[ ] Call dentist #next"]);

    let out = stdout_of(&run_sift(tmp.path(), &["list", "--filter", "completed"]));
    assert_eq!(out.trim(), "[x] Pay rent");
}

#[test]
fn list_searches_text_and_paths() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    let out = stdout_of(&run_sift(tmp.path(), &["list", "--search", "DENTIST"]));
    assert_eq!(out.trim(), "[ ] Call dentist #next");

    // File-path match pulls in every task of that file
    let out = stdout_of(&run_sift(tmp.path(), &["list", "--search", "journal"]));
    assert_eq!(out.trim(), "[ ] Call dentist #next");
}

#[test]
fn list_sorts_alphabetically_on_request() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    let out = stdout_of(&run_sift(tmp.path(), &["list", "--sort", "alphabetical"]));
    let first = out.lines().next().unwrap();
    assert_eq!(first, "[ ] Buy milk #next");
}

#[test]
fn list_json_includes_locations() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    let out = stdout_of(&run_sift(tmp.path(), &["list", "--filter", "waiting", "--json"]));
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed["filter"], "waiting");
    let tasks = parsed["tasks"].as_array().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["text"], "Wait for quote #waiting");
    assert_eq!(tasks[0]["file_path"], "todo.md");
    assert_eq!(tasks[0]["line"], 4);
    assert_eq!(tasks[0]["completed"], false);
}

#[test]
fn list_empty_result_is_not_an_error() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    let out = stdout_of(&run_sift(tmp.path(), &["list", "--search", "zzz-nothing"]));
    assert_eq!(out.trim(), "no tasks found");
}

#[test]
fn list_respects_configured_task_limit() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());
    fs::create_dir_all(tmp.path().join(".sift")).unwrap();
    fs::write(tmp.path().join(".sift/settings.toml"), "task_limit = 2\n").unwrap();

    let out = stdout_of(&run_sift(tmp.path(), &["list"]));
    let lines: Vec<&str> = out.lines().collect();
    // Only the two most recent (highest offset) tasks survive the cap
    assert_eq!(lines, vec!["[x] Pay rent", "[ ] Capture idea"]);
}

// ---------------------------------------------------------------------------
// stats
// ---------------------------------------------------------------------------

#[test]
fn stats_counts_all_categories() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    let out = stdout_of(&run_sift(tmp.path(), &["stats", "--json"]));
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed["all"], 6);
    assert_eq!(parsed["inbox"], 1);
    assert_eq!(parsed["next"], 2);
    assert_eq!(parsed["waiting"], 1);
    assert_eq!(parsed["someday"], 1);
    assert_eq!(parsed["completed"], 1);
}

// ---------------------------------------------------------------------------
// move / reopen
// ---------------------------------------------------------------------------

#[test]
fn move_rewrites_the_status_tag_in_place() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    let out = stdout_of(&run_sift(tmp.path(), &["move", "todo.md:3", "waiting"]));
    assert!(out.contains("moved todo.md:3 to waiting"));

    let content = fs::read_to_string(tmp.path().join("todo.md")).unwrap();
    assert!(content.contains("- [ ] Buy milk #waiting\n"));
    assert!(!content.contains("#next"));
}

#[test]
fn move_to_inbox_strips_all_status_tags() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    stdout_of(&run_sift(tmp.path(), &["move", "todo.md:5", "inbox"]));
    let content = fs::read_to_string(tmp.path().join("todo.md")).unwrap();
    assert!(content.contains("- [ ] Learn sailing\n"));
}

#[test]
fn move_to_completed_flips_the_marker() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    stdout_of(&run_sift(tmp.path(), &["move", "todo.md:6", "completed"]));
    let content = fs::read_to_string(tmp.path().join("todo.md")).unwrap();
    assert!(content.contains("- [x] Capture idea\n"));
}

#[test]
fn move_works_on_nested_files() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    stdout_of(&run_sift(tmp.path(), &["move", "notes/journal.md:1", "someday"]));
    let content = fs::read_to_string(tmp.path().join("notes/journal.md")).unwrap();
    assert_eq!(content, "- [ ] Call dentist #someday\n");
}

#[test]
fn reopen_restores_the_open_marker() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    stdout_of(&run_sift(tmp.path(), &["reopen", "todo.md:7"]));
    let content = fs::read_to_string(tmp.path().join("todo.md")).unwrap();
    // Marker flips back, text untouched
    assert!(content.contains("- [ ] Pay rent\n"));
}

#[test]
fn complete_then_reopen_round_trips() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());
    let before = fs::read_to_string(tmp.path().join("todo.md")).unwrap();

    stdout_of(&run_sift(tmp.path(), &["move", "todo.md:6", "completed"]));
    stdout_of(&run_sift(tmp.path(), &["reopen", "todo.md:6"]));

    let after = fs::read_to_string(tmp.path().join("todo.md")).unwrap();
    assert_eq!(after, before);
}

#[test]
fn move_on_a_non_task_line_fails() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    let out = run_sift(tmp.path(), &["move", "todo.md:1", "next"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("no task at todo.md:1"));
}

#[test]
fn reopen_an_open_task_fails() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    let out = run_sift(tmp.path(), &["reopen", "todo.md:3"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("not completed"));
}

#[test]
fn bad_location_argument_fails() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_vault(tmp.path());

    let out = run_sift(tmp.path(), &["move", "todo.md", "next"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("bad location"));
}
