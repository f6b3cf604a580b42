#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn roster_cmd(data_dir: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("roster"));
    cmd.env("ROSTER_DATA", data_dir.path().as_os_str());
    cmd
}

#[test]
fn test_full_workflow_across_invocations() {
    let data_dir = TempDir::new().unwrap();

    // 1. Add Ana on empty storage
    roster_cmd(&data_dir)
        .write_stdin("1\nAna\n20\n1\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Student added successfully."));

    // 2. Adding a second student with the same ID is rejected
    roster_cmd(&data_dir)
        .write_stdin("1\nBen\n22\n1\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "A student with this ID already exists.",
        ));

    // 3. List renders exactly the one surviving row
    roster_cmd(&data_dir)
        .write_stdin("2\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("All Students:"))
        .stdout(predicate::str::contains("Ana"))
        .stdout(predicate::str::contains("Ben").not());

    // 4. Delete by ID
    roster_cmd(&data_dir)
        .write_stdin("4\n1\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Student deleted successfully."));

    // 5. Storage is empty again
    roster_cmd(&data_dir)
        .write_stdin("2\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No students found."));
}

#[test]
fn test_search_is_case_insensitive_substring() {
    let data_dir = TempDir::new().unwrap();

    roster_cmd(&data_dir)
        .write_stdin("1\nAlice\n20\n1\n1\nalice Smith\n21\n2\n1\nBob\n22\n3\n5\n")
        .assert()
        .success();

    roster_cmd(&data_dir)
        .write_stdin("3\nALI\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 match(es):"))
        .stdout(predicate::str::contains("- Alice (Age: 20, ID: 1)"))
        .stdout(predicate::str::contains("- alice Smith (Age: 21, ID: 2)"))
        .stdout(predicate::str::contains("Bob").not());
}

#[test]
fn test_invalid_choice_redisplays_menu() {
    let data_dir = TempDir::new().unwrap();

    roster_cmd(&data_dir)
        .write_stdin("9\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Invalid choice. Please enter a number between 1 and 5.",
        ))
        .stdout(predicate::str::contains("Exiting. Goodbye!"));
}

#[test]
fn test_eof_on_stdin_exits_cleanly() {
    let data_dir = TempDir::new().unwrap();

    roster_cmd(&data_dir)
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Student Management System"));
}

#[test]
fn test_delete_missing_id_reports_not_found() {
    let data_dir = TempDir::new().unwrap();

    roster_cmd(&data_dir)
        .write_stdin("4\n42\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No student found with that ID."));
}
