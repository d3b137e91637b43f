use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn problems_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"2+2,4\ncapital of France,Paris\n").unwrap();
    file
}

#[test]
fn test_cli_completes_quiz() {
    let file = problems_file();

    Command::cargo_bin("quiz-runner")
        .unwrap()
        .args(["-time", "60", "-score", "2", "-filename"])
        .arg(file.path())
        .write_stdin("4\nparis\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Q1: 2+2? Correct!"))
        .stdout(predicate::str::contains("You scored 4 out of 4!"))
        .stdout(predicate::str::contains("Time is up!").not());
}

#[test]
fn test_cli_reports_wrong_answer() {
    let file = problems_file();

    Command::cargo_bin("quiz-runner")
        .unwrap()
        .arg(format!("--filename={}", file.path().display()))
        .write_stdin("5\nParis\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Incorrect answer! Correct answer was 4.",
        ))
        .stdout(predicate::str::contains("You scored 5 out of 10!"));
}

#[test]
fn test_cli_missing_file_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("quiz-runner")
        .unwrap()
        .arg("-filename")
        .arg(dir.path().join("missing.csv"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Could not read the problems file"));
}

#[test]
fn test_cli_malformed_row_exits_nonzero() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"2+2,4\nno answer\n").unwrap();

    Command::cargo_bin("quiz-runner")
        .unwrap()
        .arg("-filename")
        .arg(file.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Line 2"));
}

#[test]
fn test_cli_empty_file_scores_zero() {
    let file = NamedTempFile::new().unwrap();

    Command::cargo_bin("quiz-runner")
        .unwrap()
        .arg("-filename")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("You scored 0 out of 0!"))
        .stdout(predicate::str::contains("Q1:").not());
}

#[test]
fn test_cli_inconsistent_columns_exit_nonzero() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"2+2,4\n3+3,6,extra\n").unwrap();

    Command::cargo_bin("quiz-runner")
        .unwrap()
        .arg("-filename")
        .arg(file.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not valid CSV at line 2"));
}
