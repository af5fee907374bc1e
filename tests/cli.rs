//! Integration tests for top-level CLI behavior.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

fn run_taskdeck(args: &[&str]) -> Output {
    let bin = env!("CARGO_BIN_EXE_taskdeck");
    Command::new(bin).args(args).output().expect("failed to run taskdeck binary")
}

/// Runs the interactive menu with the given stdin script.
fn run_menu(file: &str, script: &str) -> Output {
    let bin = env!("CARGO_BIN_EXE_taskdeck");
    let mut child = Command::new(bin)
        .args(["--file", file, "menu"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn taskdeck binary");
    child.stdin.take().expect("stdin piped").write_all(script.as_bytes()).expect("write script");
    child.wait_with_output().expect("failed to wait for taskdeck binary")
}

/// Fresh task-file path in a per-test temp directory.
fn temp_store(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("taskdeck_it_{name}"));
    let _ = std::fs::remove_dir_all(&dir);
    dir.join("tasks.json")
}

fn add_args<'a>(file: &'a str, name: &'a str, tags: &'a str) -> Vec<&'a str> {
    vec![
        "--file", file, "add", "--name", name, "--category", "Errands", "--priority", "Low",
        "--due", "2024-01-01", "--status", "Pending", "--tags", tags,
    ]
}

#[test]
fn add_persists_across_invocations() {
    let file = temp_store("add_view");
    let file = file.to_str().unwrap();

    let output = run_taskdeck(&add_args(file, "Buy milk", "home,shopping"));
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Task added."));

    let output = run_taskdeck(&["--file", file, "view"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("Buy milk: Errands - Priority: Low - Due: 2024-01-01"));
}

#[test]
fn view_empty_store_reports_no_tasks() {
    let file = temp_store("view_empty");
    let output = run_taskdeck(&["--file", file.to_str().unwrap(), "view"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("No tasks yet."));
}

#[test]
fn duplicate_add_fails_with_error() {
    let file = temp_store("dup_add");
    let file = file.to_str().unwrap();

    assert!(run_taskdeck(&add_args(file, "once", "")).status.success());
    let output = run_taskdeck(&add_args(file, "once", ""));
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("already exists"));
}

#[test]
fn search_matches_exact_tag_only() {
    let file = temp_store("search");
    let file = file.to_str().unwrap();

    run_taskdeck(&add_args(file, "Buy milk", "home,shopping"));
    run_taskdeck(&add_args(file, "File taxes", "paperwork"));

    let output = run_taskdeck(&["--file", file, "search", "home"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("Buy milk"));
    assert!(!stdout.contains("File taxes"));

    let output = run_taskdeck(&["--file", file, "search", "hom"]);
    assert!(String::from_utf8_lossy(&output.stdout).contains("No tasks carry tag 'hom'."));
}

#[test]
fn hand_edited_file_with_repeated_tags_lists_task_once() {
    let file = temp_store("repeated_tags");
    std::fs::create_dir_all(file.parent().unwrap()).unwrap();
    std::fs::write(
        &file,
        r#"[{"task_name":"x","category_name":"Misc","priority":"Low","duedate":"2024-01-01","status":"Pending","tags":["home","home"]}]"#,
    )
    .unwrap();

    let output = run_taskdeck(&["--file", file.to_str().unwrap(), "search", "home"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert_eq!(stdout.matches("x: Misc").count(), 1, "output:\n{stdout}");
}

#[test]
fn padded_name_flag_matches_trimmed_name() {
    let file = temp_store("padded_name");
    let file = file.to_str().unwrap();

    let output = run_taskdeck(&add_args(file, " Buy milk ", "home"));
    assert!(output.status.success());

    // The stored identity is the trimmed name, same as a menu-entered one.
    let output = run_taskdeck(&["--file", file, "view"]);
    assert!(String::from_utf8_lossy(&output.stdout).contains("Buy milk: Errands"));

    let output = run_taskdeck(&["--file", file, "delete", "Buy milk"]);
    assert!(String::from_utf8_lossy(&output.stdout).contains("Deleted 'Buy milk'."));
}

#[test]
fn edit_updates_fields_and_persists() {
    let file = temp_store("edit");
    let file = file.to_str().unwrap();

    run_taskdeck(&add_args(file, "Buy milk", "home"));
    let output = run_taskdeck(&["--file", file, "edit", "Buy milk", "--status", "Done"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Task updated."));

    let output = run_taskdeck(&["--file", file, "view"]);
    assert!(String::from_utf8_lossy(&output.stdout).contains("Status: Done"));
}

#[test]
fn delete_missing_task_reports_not_found() {
    let file = temp_store("delete_missing");
    let output = run_taskdeck(&["--file", file.to_str().unwrap(), "delete", "nope"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Task not found."));
}

#[test]
fn one_shot_undo_has_nothing_to_undo() {
    let file = temp_store("undo_oneshot");
    let file = file.to_str().unwrap();

    run_taskdeck(&add_args(file, "Buy milk", ""));
    // A fresh process rebuilds the undo log empty, so the add stays.
    let output = run_taskdeck(&["--file", file, "undo"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Nothing to undo."));

    let output = run_taskdeck(&["--file", file, "view"]);
    assert!(String::from_utf8_lossy(&output.stdout).contains("Buy milk"));
}

#[test]
fn corrupt_task_file_fails_loudly() {
    let file = temp_store("corrupt");
    std::fs::create_dir_all(file.parent().unwrap()).unwrap();
    std::fs::write(&file, "{definitely not json").unwrap();

    let output = run_taskdeck(&["--file", file.to_str().unwrap(), "view"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to parse"));
}

#[test]
fn menu_session_supports_undo_and_saves_on_exit() {
    let file = temp_store("menu_session");
    let file_str = file.to_str().unwrap();

    let script = "1\nBuy milk\nErrands\nLow\n2024-01-01\nPending\nhome,shopping\n\
                  1\nFile taxes\nFinance\nHigh\n2024-04-15\nPending\npaperwork\n\
                  5\n\
                  7\n";
    let output = run_menu(file_str, script);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout.contains("Undid add of 'File taxes'."));
    assert!(stdout.contains("Tasks saved. Goodbye."));

    // Only the surviving task is on disk.
    let contents = std::fs::read_to_string(&file).unwrap();
    assert!(contents.contains("Buy milk"));
    assert!(!contents.contains("File taxes"));
}

#[test]
fn no_subcommand_starts_the_menu() {
    let file = temp_store("menu_default");
    let bin = env!("CARGO_BIN_EXE_taskdeck");
    let mut child = Command::new(bin)
        .args(["--file", file.to_str().unwrap()])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn taskdeck binary");
    child.stdin.take().unwrap().write_all(b"7\n").unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Main Menu:"));
}

#[test]
fn invalid_subcommand_exits_with_error() {
    let output = run_taskdeck(&["nonsense"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("unrecognized subcommand"));
}
