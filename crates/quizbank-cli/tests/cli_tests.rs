//! CLI integration tests using assert_cmd.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn quizbank(dir: &Path) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("quizbank").unwrap();
    cmd.current_dir(dir)
        .env_remove("QUIZBANK_QUIZ_FILE")
        .env_remove("QUIZBANK_DEFAULT_POINTS")
        .env("HOME", dir);
    cmd
}

/// A temp dir with `quizbank init` already run in it.
fn initialized() -> TempDir {
    let dir = TempDir::new().unwrap();
    quizbank(dir.path()).arg("init").assert().success();
    dir
}

fn prompts(dir: &Path) -> Vec<String> {
    let content = std::fs::read_to_string(dir.join("quiz.toml")).unwrap();
    content
        .lines()
        .filter_map(|l| l.strip_prefix("prompt = "))
        .map(|p| p.trim_matches('"').to_string())
        .collect()
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    quizbank(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created quizbank.toml"))
        .stdout(predicate::str::contains("Created quiz.toml"));

    assert!(dir.path().join("quizbank.toml").exists());
    assert!(dir.path().join("quiz.toml").exists());
}

#[test]
fn init_skips_existing() {
    let dir = initialized();

    quizbank(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn validate_sample_quiz() {
    let dir = initialized();

    quizbank(dir.path())
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("3 questions"))
        .stdout(predicate::str::contains("All quizzes valid"));
}

#[test]
fn validate_reports_warnings() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("broken.toml"),
        r#"
[quiz]
title = "Broken"

[[questions]]
id = "q1"
kind = "multiple_choice"
prompt = "X"
options = ["", "", ""]
"#,
    )
    .unwrap();

    quizbank(dir.path())
        .args(["validate", "--quiz", "broken.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[q1] WARNING"))
        .stdout(predicate::str::contains("1 warning(s) found"));
}

#[test]
fn validate_nonexistent_file() {
    let dir = TempDir::new().unwrap();

    quizbank(dir.path())
        .args(["validate", "--quiz", "nonexistent.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn list_shows_questions_and_total() {
    let dir = initialized();

    quizbank(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("What is the capital of France?"))
        .stdout(predicate::str::contains("3 question(s), 30 total points"));
}

#[test]
fn add_short_answer_appends() {
    let dir = initialized();

    quizbank(dir.path())
        .args([
            "add",
            "--kind",
            "short_answer",
            "--prompt",
            "2+2?",
            "--answer",
            "4",
            "--points",
            "5",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added question q4"))
        .stdout(predicate::str::contains("4 question(s), 35 total points"));

    assert_eq!(prompts(dir.path()).last().map(String::as_str), Some("2+2?"));
}

#[test]
fn add_multiple_choice_with_options() {
    let dir = initialized();

    quizbank(dir.path())
        .args([
            "add", "--prompt", "Largest planet?", "--option", "Mars", "--option", "Jupiter",
            "--answer", "Jupiter",
        ])
        .assert()
        .success();

    let content = std::fs::read_to_string(dir.path().join("quiz.toml")).unwrap();
    assert!(content.contains("Jupiter"));
}

#[test]
fn add_incomplete_multiple_choice_fails() {
    let dir = initialized();

    quizbank(dir.path())
        .args(["add", "--prompt", "X", "--option", "", "--option", "", "--option", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("fill in all answer options"));

    assert_eq!(prompts(dir.path()).len(), 3);
}

#[test]
fn add_essay_with_answer_fails() {
    let dir = initialized();

    quizbank(dir.path())
        .args(["add", "--kind", "essay", "--prompt", "Discuss.", "--answer", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("do not take a correct answer"));
}

#[test]
fn edit_updates_prompt() {
    let dir = initialized();

    quizbank(dir.path())
        .args(["edit", "--id", "q3", "--prompt", "What is DNA short for?"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated question q3"));

    assert_eq!(prompts(dir.path())[2], "What is DNA short for?");
}

#[test]
fn edit_kind_replaces_body() {
    let dir = initialized();

    quizbank(dir.path())
        .args([
            "edit", "--id", "q3", "--kind", "multiple_choice", "--option", "DNA", "--option",
            "RNA", "--answer", "DNA",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated question q3"));

    let content = std::fs::read_to_string(dir.path().join("quiz.toml")).unwrap();
    assert!(content.contains("\"RNA\""));

    quizbank(dir.path())
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("multiple choice: 2 question(s)"));
}

#[test]
fn edit_kind_without_options_fails_validation() {
    let dir = initialized();

    quizbank(dir.path())
        .args(["edit", "--id", "q3", "--kind", "multiple_choice"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("option 1 is empty"));
}

#[test]
fn commands_refuse_quiz_with_incomplete_question() {
    let dir = initialized();
    std::fs::write(
        dir.path().join("quiz.toml"),
        r#"[quiz]
title = "Broken"

[[questions]]
id = "q1"
kind = "multiple_choice"
prompt = ""
options = ["A", ""]
correct_answer = "Z"
"#,
    )
    .unwrap();

    quizbank(dir.path())
        .args(["duplicate", "--id", "q1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid question"));

    quizbank(dir.path())
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("please enter a question"));
}

#[test]
fn list_shows_settings() {
    let dir = initialized();

    quizbank(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Time limit: 30 min"));
}

#[test]
fn edit_without_fields_fails() {
    let dir = initialized();

    quizbank(dir.path())
        .args(["edit", "--id", "q1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nothing to edit"));
}

#[test]
fn remove_twice_fails_second_time() {
    let dir = initialized();

    quizbank(dir.path())
        .args(["remove", "--id", "q2"])
        .assert()
        .success();

    quizbank(dir.path())
        .args(["remove", "--id", "q2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("question not found: q2"));
}

#[test]
fn duplicate_appends_copy() {
    let dir = initialized();

    quizbank(dir.path())
        .args(["duplicate", "--id", "q1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Duplicated question q1 as q4"));

    assert_eq!(
        prompts(dir.path()).last().map(String::as_str),
        Some("What is the capital of France? (Copy)")
    );
}

#[test]
fn move_up_reorders() {
    let dir = initialized();

    quizbank(dir.path())
        .args(["move", "--id", "q2", "--direction", "up"])
        .assert()
        .success()
        .stdout(predicate::str::contains("to position 1"));

    assert_eq!(
        prompts(dir.path())[0],
        "The Earth revolves around the Sun."
    );
}

#[test]
fn move_past_top_is_noop() {
    let dir = initialized();

    quizbank(dir.path())
        .args(["move", "--id", "q1", "--direction", "up"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already at the top"));
}

#[test]
fn preview_markdown_to_stdout() {
    let dir = initialized();

    quizbank(dir.path())
        .arg("preview")
        .assert()
        .success()
        .stdout(predicate::str::contains("# New Quiz"))
        .stdout(predicate::str::contains("- [x] Paris"));
}

#[test]
fn preview_html_writes_to_preview_dir() {
    let dir = initialized();

    quizbank(dir.path())
        .args(["preview", "--format", "html"])
        .assert()
        .success()
        .stdout(predicate::str::contains("HTML preview"));

    assert!(dir.path().join("quizbank-preview/quiz.html").exists());
}

#[test]
fn preview_unknown_format_fails() {
    let dir = initialized();

    quizbank(dir.path())
        .args(["preview", "--format", "pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn help_output() {
    let dir = TempDir::new().unwrap();

    quizbank(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Quiz question bank editor"));
}

#[test]
fn version_output() {
    let dir = TempDir::new().unwrap();

    quizbank(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("quizbank"));
}
