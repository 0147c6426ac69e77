//! End-to-end runs of the `smartplan` binary against a throwaway home.

use std::fs;
use std::path::Path;
use std::process::Command;

const TASKS: &str = r#"[
    {"id": "a", "title": "Fix outage", "priority": "urgent", "status": "todo",
     "estimated_minutes": 60},
    {"id": "b", "title": "Email", "priority": "low", "status": "todo", "estimated_minutes": 10},
    {"id": "c", "title": "Thesis chapter", "priority": "high", "status": "todo",
     "estimated_minutes": 600},
    {"id": "d", "title": "Standup notes", "priority": "medium", "status": "completed",
     "completed_at": "2026-03-02T06:00:00Z"}
]"#;

fn run_cli(home: &Path, args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_smartplan"))
        .args(args)
        .env("SMARTPLAN_HOME", home)
        .env_remove("SMARTPLAN_LOG")
        .output()
        .expect("failed to run smartplan");

    (
        output.status.code().unwrap_or(-1),
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
    )
}

fn setup() -> (tempfile::TempDir, String) {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "timezone = \"Europe/Moscow\"\n",
    )
    .unwrap();
    let tasks = dir.path().join("tasks.json");
    fs::write(&tasks, TASKS).unwrap();
    let tasks = tasks.display().to_string();
    (dir, tasks)
}

#[test]
fn test_plan_json() {
    let (home, tasks) = setup();
    let (code, stdout, stderr) = run_cli(
        home.path(),
        &["plan", "--tasks", &tasks, "--date", "2026-03-02", "--json"],
    );
    assert_eq!(code, 0, "{stderr}");

    let v: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(v["date"], "2026-03-02T12:00:00+03:00");
    let slots = v["slots"].as_array().unwrap();
    assert_eq!(slots.len(), 2);
    assert_eq!(slots[0]["id"], "a");
    assert_eq!(slots[0]["scheduled_start"], "2026-03-02T10:45:00+03:00");
    assert_eq!(v["productivity_score"], 15);
}

#[test]
fn test_plan_text_lists_unscheduled() {
    let (home, tasks) = setup();
    let (code, stdout, _) =
        run_cli(home.path(), &["plan", "--tasks", &tasks, "--date", "2026-03-02"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("# Plan for 2026-03-02"));
    assert!(stdout.contains("Not scheduled today"));
    assert!(stdout.contains("c Thesis chapter"));
}

#[test]
fn test_prioritize_order() {
    let (home, tasks) = setup();
    let (code, stdout, _) = run_cli(home.path(), &["prioritize", "--tasks", &tasks]);
    assert_eq!(code, 0);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("Fix outage"));
    assert!(lines[2].contains("Email"));
}

#[test]
fn test_slots_with_breaks() {
    let (home, _) = setup();
    let (code, focus_only, _) = run_cli(home.path(), &["slots"]);
    assert_eq!(code, 0);
    assert_eq!(focus_only.lines().count(), 6);

    let (_, all, _) = run_cli(home.path(), &["slots", "--all"]);
    assert!(all.lines().count() > 6);
    assert!(all.contains("Break"));
}

#[test]
fn test_analyze_at_instant() {
    let (home, tasks) = setup();
    let (code, stdout, _) = run_cli(
        home.path(),
        &["analyze", "--tasks", &tasks, "--at", "2026-03-02T10:00:00+03:00"],
    );
    assert_eq!(code, 0);
    assert!(stdout.contains("Productivity score: 15/100"));
    assert!(stdout.contains("Выполнено задач сегодня: 1"));
}

#[test]
fn test_reopened_task_scores_zero_in_analyze_and_plan() {
    let (home, _) = setup();
    let reopened = home.path().join("reopened.json");
    fs::write(
        &reopened,
        r#"[{"id": "r", "title": "Reopened", "priority": "urgent", "status": "todo",
             "completed_at": "2026-03-02T06:00:00Z"}]"#,
    )
    .unwrap();
    let reopened = reopened.display().to_string();

    let (code, stdout, _) = run_cli(
        home.path(),
        &["analyze", "--tasks", &reopened, "--at", "2026-03-02T12:00:00+03:00"],
    );
    assert_eq!(code, 0);
    assert!(stdout.contains("Productivity score: 0/100"), "{stdout}");

    let (code, stdout, stderr) = run_cli(
        home.path(),
        &["plan", "--tasks", &reopened, "--date", "2026-03-02", "--json"],
    );
    assert_eq!(code, 0, "{stderr}");
    let v: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(v["productivity_score"], 0);
}

#[test]
fn test_missing_tasks_file_fails() {
    let (home, _) = setup();
    let (code, _, stderr) = run_cli(home.path(), &["plan", "--tasks", "/nonexistent/tasks.json"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("read"));
}
