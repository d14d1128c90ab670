// tests/cli.rs

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const DIRTY: &str = "\
TEST.NEW
TEST.NAME:case_1
TEST.IMPORT_FAILURES:
TEST.VALUE:uut.<<GLOBAL>>.gone:1
TEST.END_IMPORT_FAILURES:
TEST.END
";

const CLEAN: &str = "\
TEST.NEW
TEST.NAME:case_1
TEST.END
";

/// Command for the binary with `RUST_LOG` cleared so the default filter applies.
fn cleaner() -> Command {
    let mut cmd = Command::cargo_bin("clean_file_content").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_lists_flags() {
    cleaner()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--no-backup"))
        .stdout(predicate::str::contains("--verbose"))
        .stdout(predicate::str::contains("--recursive"));
}

#[test]
fn test_version() {
    cleaner()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_single_file_is_cleaned_with_backup() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("case.tst");
    fs::write(&file, DIRTY).unwrap();

    cleaner()
        .arg(&file)
        .assert()
        .success()
        .stderr(predicate::str::contains("Found 1 marked block(s)"))
        .stderr(predicate::str::contains("Creating backup"));

    assert_eq!(fs::read_to_string(&file).unwrap(), CLEAN);
    assert_eq!(
        fs::read_to_string(dir.path().join("case.tst.bak")).unwrap(),
        DIRTY
    );
}

#[test]
fn test_no_backup_flag() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("case.tst");
    fs::write(&file, DIRTY).unwrap();

    cleaner().arg("--no-backup").arg(&file).assert().success();

    assert_eq!(fs::read_to_string(&file).unwrap(), CLEAN);
    assert!(!dir.path().join("case.tst.bak").exists());
}

#[test]
fn test_missing_single_file_fails() {
    let dir = TempDir::new().unwrap();

    cleaner()
        .arg(dir.path().join("absent.tst"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("file does not exist"));
}

#[test]
fn test_multiple_files_print_summary_and_fail_on_any_error() {
    let dir = TempDir::new().unwrap();
    let good = dir.path().join("good.tst");
    let also_good = dir.path().join("also_good.tst");
    fs::write(&good, DIRTY).unwrap();
    fs::write(&also_good, CLEAN).unwrap();
    let missing = dir.path().join("missing.tst");

    cleaner()
        .arg("--no-backup")
        .arg(&good)
        .arg(&missing)
        .arg(&also_good)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("=== Results Summary ==="))
        .stdout(predicate::str::contains("Successfully processed: 2 files"))
        .stdout(predicate::str::contains("Failed to process: 1 files"))
        .stdout(predicate::str::contains("missing.tst"));

    assert_eq!(fs::read_to_string(&good).unwrap(), CLEAN);
    assert_eq!(fs::read_to_string(&also_good).unwrap(), CLEAN);
}

#[test]
fn test_multiple_files_all_succeed() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("first.tst");
    let second = dir.path().join("second.tst");
    fs::write(&first, DIRTY).unwrap();
    fs::write(&second, DIRTY).unwrap();

    cleaner()
        .args(["--no-backup"])
        .arg(&first)
        .arg(&second)
        .assert()
        .success()
        .stdout(predicate::str::contains("Failed to process: 0 files"));
}

#[test]
fn test_interactive_quit() {
    cleaner()
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("VectorCAST Test File Content Cleaner"))
        .stdout(predicate::str::contains("Operation cancelled."));
}

#[test]
fn test_interactive_empty_answer() {
    cleaner()
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No file path provided."));
}

#[test]
fn test_interactive_path() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("case.tst");
    fs::write(&file, DIRTY).unwrap();

    cleaner()
        .arg("--no-backup")
        .write_stdin(format!("{}\n", file.display()))
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&file).unwrap(), CLEAN);
}

#[test]
fn test_directory_requires_recursive() {
    let dir = TempDir::new().unwrap();

    cleaner()
        .arg(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("path is not a file"));
}

#[test]
fn test_recursive_directory_with_extension_filter() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("env").join("scripts");
    fs::create_dir_all(&nested).unwrap();
    let script = nested.join("unit.tst");
    let source = dir.path().join("unit.c");
    fs::write(&script, DIRTY).unwrap();
    fs::write(&source, DIRTY).unwrap();

    cleaner()
        .args(["-r", "--ext", "tst"])
        .arg(dir.path())
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&script).unwrap(), CLEAN);
    assert_eq!(fs::read_to_string(&source).unwrap(), DIRTY);
    assert!(nested.join("unit.tst.bak").exists());
}

#[test]
fn test_custom_markers() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("notes.txt");
    fs::write(&file, "keep\nBEGIN-GEN\nstale\nEND-GEN\nkeep too\n").unwrap();

    cleaner()
        .args(["--no-backup", "--start-marker", "BEGIN-GEN", "--end-marker", "END-GEN"])
        .arg(&file)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&file).unwrap(), "keep\nkeep too\n");
}

#[test]
fn test_verbose_logs_configuration() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("case.tst");
    fs::write(&file, CLEAN).unwrap();

    cleaner()
        .arg("--verbose")
        .arg(&file)
        .assert()
        .success()
        .stderr(predicate::str::contains("Resolved configuration"))
        .stderr(predicate::str::contains("No marked blocks found in file"));
}
