use std::fs::{File, create_dir};
use std::io::Cursor;

use tempfile::{TempDir, tempdir};

use rnr::errors::Error;
use rnr::workflow::{RenameOptions, RunOutcome, process_renames};

fn setup() -> TempDir {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let root = temp_dir.path();
    File::create(root.join("old_one.txt")).unwrap();
    File::create(root.join("old_two.txt")).unwrap();
    create_dir(root.join("nested")).unwrap();
    File::create(root.join("nested").join("old_three.txt")).unwrap();
    temp_dir
}

#[test]
fn test_dry_run_changes_nothing() {
    let temp_dir = setup();
    let mut options = RenameOptions::new(temp_dir.path(), "old", "new");
    options.dry_run = true;

    let outcome = process_renames(&options, &mut Cursor::new("")).unwrap();

    assert!(matches!(outcome, RunOutcome::DryRun { planned: 3 }));
    assert_eq!(outcome.exit_code(), 0);
    assert!(temp_dir.path().join("old_one.txt").exists());
    assert!(!temp_dir.path().join("new_one.txt").exists());
}

#[test]
fn test_confirmed_run_renames_recursively() {
    let temp_dir = setup();
    let options = RenameOptions::new(temp_dir.path(), "old", "new");

    let outcome = process_renames(&options, &mut Cursor::new("y\n")).unwrap();

    match &outcome {
        RunOutcome::Applied(result) => {
            assert_eq!(result.success_count, 3);
            assert!(result.is_success());
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(outcome.exit_code(), 0);
    assert!(temp_dir.path().join("new_two.txt").exists());
    assert!(temp_dir.path().join("nested").join("new_three.txt").exists());
}

#[test]
fn test_declined_prompt_cancels() {
    let temp_dir = setup();
    let options = RenameOptions::new(temp_dir.path(), "old", "new");

    for answer in ["n\n", "\n", "sure\n", ""] {
        let outcome = process_renames(&options, &mut Cursor::new(answer)).unwrap();
        assert!(matches!(outcome, RunOutcome::Cancelled), "answer {answer:?}");
        assert_eq!(outcome.exit_code(), 0);
    }
    assert!(temp_dir.path().join("old_one.txt").exists());
}

#[test]
fn test_assume_yes_skips_prompt() {
    let temp_dir = setup();
    let mut options = RenameOptions::new(temp_dir.path(), "old", "new");
    options.assume_yes = true;
    options.recursive = false;

    // No input is available, so reaching the prompt would cancel the run
    let outcome = process_renames(&options, &mut Cursor::new("")).unwrap();

    assert!(matches!(&outcome, RunOutcome::Applied(r) if r.success_count == 2));
    assert!(temp_dir.path().join("nested").join("old_three.txt").exists());
}

#[test]
fn test_no_matches() {
    let temp_dir = setup();
    let options = RenameOptions::new(temp_dir.path(), "absent", "x");

    let outcome = process_renames(&options, &mut Cursor::new("")).unwrap();

    assert!(matches!(outcome, RunOutcome::NoMatches));
    assert_eq!(outcome.exit_code(), 0);
}

#[test]
fn test_conflicts_abort_whole_batch() {
    let temp_dir = setup();
    File::create(temp_dir.path().join("new_one.txt")).unwrap();
    let mut options = RenameOptions::new(temp_dir.path(), "old", "new");
    options.assume_yes = true;

    let err = process_renames(&options, &mut Cursor::new("")).unwrap_err();

    match err {
        Error::Conflict { conflicts } => {
            assert_eq!(conflicts.len(), 1);
            assert_eq!(conflicts[0].destination_name(), "new_one.txt");
        }
        other => panic!("unexpected error: {other}"),
    }
    // Nothing was renamed, not even the pairs without conflicts
    assert!(temp_dir.path().join("old_two.txt").exists());
}

#[test]
fn test_invalid_root() {
    let temp_dir = tempdir().unwrap();
    let options = RenameOptions::new(temp_dir.path().join("missing"), "a", "b");

    let err = process_renames(&options, &mut Cursor::new("")).unwrap_err();
    assert!(matches!(err, Error::InvalidRoot { .. }));
}
