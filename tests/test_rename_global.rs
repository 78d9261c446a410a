// Copyright (C) Brian G. Milnes 2025

//! Integration tests for the rename-global binary

use anyhow::Result;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

mod common;
use common::{location, read, write_package};

fn rename_global(cwd: &Path, args: &[&str]) -> Result<Output> {
    Ok(Command::new(env!("CARGO_BIN_EXE_rename-global"))
        .args(args)
        .current_dir(cwd)
        .output()?)
}

#[test]
fn test_auto_with_from_is_usage_error() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let pkg = write_package(&dir.path().join("p"), &[("src/lib.rs", "fn foo() {}\n")])?;

    let output = rename_global(dir.path(), &["--auto", "--from", "foo", &location(&pkg)])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage:"));
    assert!(output.stdout.is_empty());
    assert_eq!(read(&pkg, "src/lib.rs"), "fn foo() {}\n");
    Ok(())
}

#[test]
fn test_no_mode_is_usage_error() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let output = rename_global(dir.path(), &["--from", "foo"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage:"));
    Ok(())
}

#[test]
fn test_auto_end_to_end() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let pkg = write_package(
        &dir.path().join("p"),
        &[("src/lib.rs", "static person_id: i32 = 0;\nfn person_id() {}\n")],
    )?;

    let output = rename_global(dir.path(), &["--auto", &location(&pkg)])?;
    let stdout = String::from_utf8(output.stdout)?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout.contains("Changed:\n\tperson_id -> personID\n"), "stdout: {stdout}");
    assert!(stdout.contains("Summary: 1 packages, 1 files checked, 1 files rewritten"));
    assert!(stdout.contains("Completed in"));
    assert_eq!(read(&pkg, "src/lib.rs"), "static personID: i32 = 0;\nfn personID() {}\n");

    // Nothing left to change on a second run
    let output = rename_global(dir.path(), &["--auto", &location(&pkg)])?;
    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(output.status.code(), Some(0));
    assert!(!stdout.contains("Changed:"));
    assert!(stdout.contains("0 files rewritten"));
    Ok(())
}

#[test]
fn test_exact_end_to_end() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let pkg = write_package(
        &dir.path().join("p"),
        &[("src/lib.rs", "fn foo() {}\nstruct Foo;\nfn foobar() { foo(); }\n")],
    )?;

    let output = rename_global(dir.path(), &["--from", "foo", "--to", "bar", &location(&pkg)])?;
    let stdout = String::from_utf8(output.stdout)?;

    assert_eq!(output.status.code(), Some(0));
    assert!(!stdout.contains("Changed:"));
    assert_eq!(read(&pkg, "src/lib.rs"), "fn bar() {}\nstruct Foo;\nfn foobar() { bar(); }\n");
    Ok(())
}

#[test]
fn test_failure_sets_exit_status_and_keeps_other_rewrites() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let good = write_package(&dir.path().join("good"), &[("src/lib.rs", "fn foo() {}\n")])?;
    let bad = write_package(
        &dir.path().join("bad"),
        &[("src/lib.rs", "fn foo() {}\n"), ("src/broken.rs", "fn foo( {\n")],
    )?;

    let pattern = format!("{}/...", dir.path().display());
    let output = rename_global(dir.path(), &["--from", "foo", "--to", "bar", &pattern])?;
    let stderr = String::from_utf8(output.stderr)?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("broken.rs"), "stderr: {stderr}");
    assert!(stderr.contains("parse error"));
    assert_eq!(read(&good, "src/lib.rs"), "fn bar() {}\n");
    assert_eq!(read(&bad, "src/lib.rs"), "fn bar() {}\n");
    assert_eq!(read(&bad, "src/broken.rs"), "fn foo( {\n");
    Ok(())
}

#[test]
fn test_unwalkable_wildcard_fails_run() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let pkg = write_package(&dir.path().join("p"), &[("src/lib.rs", "fn foo() {}\n")])?;

    let missing = format!("{}/missing/...", dir.path().display());
    let output = rename_global(dir.path(), &["--from", "foo", "--to", "bar", &missing, "p"])?;
    let stderr = String::from_utf8(output.stderr)?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains(&missing), "stderr: {stderr}");
    assert!(!stderr.contains("matched no packages"));
    assert_eq!(read(&pkg, "src/lib.rs"), "fn bar() {}\n");
    Ok(())
}

#[test]
fn test_dry_run_lists_sites() -> Result<()> {
    let dir = tempfile::tempdir()?;
    write_package(&dir.path().join("p"), &[("src/lib.rs", "fn user_id() {}\n")])?;

    let output = rename_global(dir.path(), &["--auto", "--dry-run", "p"])?;
    let stdout = String::from_utf8(output.stdout)?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("DRY RUN MODE"));
    assert!(stdout.contains("p/src/lib.rs:1: user_id -> userID"), "stdout: {stdout}");
    assert!(stdout.contains("1 files would be rewritten"));
    assert_eq!(read(&dir.path().join("p"), "src/lib.rs"), "fn user_id() {}\n");
    Ok(())
}

#[test]
fn test_json_report() -> Result<()> {
    let dir = tempfile::tempdir()?;
    write_package(&dir.path().join("p"), &[("src/lib.rs", "fn user_id() {}\n")])?;

    let output = rename_global(dir.path(), &["--auto", "--json", "p"])?;
    let report: serde_json::Value = serde_json::from_slice(&output.stdout)?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(report["packages"], 1);
    assert_eq!(report["changes"][0]["old"], "user_id");
    assert_eq!(report["changes"][0]["new"], "userID");
    Ok(())
}

#[test]
fn test_log_file_written() -> Result<()> {
    let dir = tempfile::tempdir()?;
    write_package(&dir.path().join("p"), &[("src/lib.rs", "fn user_id() {}\n")])?;

    let output = rename_global(dir.path(), &["--auto", "--log", "--jobs", "2", "p"])?;
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8(output.stdout)?.contains("Log saved to:"));

    let tool_dir = dir.path().join("logs").join("rename-global");
    let day_dir = fs::read_dir(&tool_dir)?.next().expect("dated log directory")?.path();
    let log_path = fs::read_dir(&day_dir)?.next().expect("run log")?.path();
    let log = fs::read_to_string(log_path)?;
    assert!(log.contains("p/src/lib.rs:1: user_id -> userID"));
    assert!(log.contains("=== Run Summary ==="));
    Ok(())
}
