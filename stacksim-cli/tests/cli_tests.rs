//! Integration tests for the stacksim CLI.
//!
//! These tests invoke the `stacksim` binary as a subprocess and check
//! exit codes, stdout, and stderr.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[allow(deprecated)]
fn stacksim() -> Command {
    Command::cargo_bin("stacksim").unwrap()
}

/// Return the absolute path to a test program file.
fn test_program(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/programs")
        .join(name)
}

/// Write a listing into a temp dir and return its path.
fn write_listing(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("test.sim");
    fs::write(&path, content).unwrap();
    path
}

// ---- No-args / help ----

#[test]
fn no_args_prints_usage_and_exits_1() {
    stacksim()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage: stacksim"));
}

#[test]
fn help_flag_exits_0() {
    stacksim()
        .arg("--help")
        .assert()
        .success()
        .stderr(predicate::str::contains("Commands:"));
}

#[test]
fn unknown_command_exits_1() {
    stacksim()
        .arg("frobnicate")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unknown command"));
}

// ---- Run ----

#[test]
fn run_sample_program() {
    stacksim()
        .args(["run", test_program("tenten.sim").to_str().unwrap()])
        .assert()
        .success()
        .stdout("1009\n1010\n");
}

#[test]
fn run_missing_file_exits_1() {
    stacksim()
        .args(["run", "no-such-file.sim"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("cannot read"));
}

#[test]
fn run_bad_opcode_exits_1() {
    let dir = TempDir::new().unwrap();
    let input = write_listing(&dir, "PUSH 1\nJUMP 3\n");
    stacksim()
        .args(["run", input.to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unknown opcode 'JUMP'"));
}

#[test]
fn run_out_of_range_operand_exits_2() {
    let dir = TempDir::new().unwrap();
    let input = write_listing(&dir, "PUSH 2147483648\nSTOP\n");
    stacksim()
        .args(["run", input.to_str().unwrap()])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn run_runtime_failure_exits_3() {
    let dir = TempDir::new().unwrap();
    let input = write_listing(&dir, "PRINT\nSTOP\n");
    stacksim()
        .args(["run", input.to_str().unwrap()])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("runtime error:"));
}

#[test]
fn run_failure_prints_no_partial_output() {
    let dir = TempDir::new().unwrap();
    // Prints 5, then underflows: stdout must stay empty.
    let input = write_listing(&dir, "PUSH 5\nPRINT\nPRINT\n");
    stacksim()
        .args(["run", input.to_str().unwrap()])
        .assert()
        .failure()
        .code(3)
        .stdout("");
}

#[test]
fn run_honors_memory_flag() {
    let dir = TempDir::new().unwrap();
    // CALL 50 is a valid address in the default machine but not in a
    // 10-slot one.
    let input = write_listing(&dir, "CALL 50\nSTOP\n");
    stacksim()
        .args(["run", input.to_str().unwrap(), "--memory", "10"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("invalid address 50"));
}

#[test]
fn run_empty_listing_exits_3() {
    let dir = TempDir::new().unwrap();
    let input = write_listing(&dir, "; nothing but comments\n");
    stacksim()
        .args(["run", input.to_str().unwrap()])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("no instructions"));
}

// ---- Check ----

#[test]
fn check_valid_listing() {
    stacksim()
        .args(["check", test_program("tenten.sim").to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("OK:").and(predicate::str::contains("10 instructions")));
}

#[test]
fn check_does_not_execute() {
    let dir = TempDir::new().unwrap();
    // Would underflow at runtime; check must still pass.
    let input = write_listing(&dir, "PRINT\nSTOP\n");
    stacksim()
        .args(["check", input.to_str().unwrap()])
        .assert()
        .success();
}

#[test]
fn check_rejects_overflowing_listing() {
    let dir = TempDir::new().unwrap();
    let input = write_listing(&dir, "8: PUSH 1\nPRINT\nSTOP\n");
    stacksim()
        .args(["check", input.to_str().unwrap(), "--memory", "10"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("memory overflow"));
}

// ---- Format ----

#[test]
fn format_canonicalizes() {
    let dir = TempDir::new().unwrap();
    let input = write_listing(&dir, "  push 6 ; indented\nstop\n");
    stacksim()
        .args(["format", input.to_str().unwrap()])
        .assert()
        .success()
        .stdout("PUSH 6\nSTOP\n");
}

#[test]
fn format_preserves_address_markers() {
    let dir = TempDir::new().unwrap();
    let input = write_listing(&dir, "50: MULT\nPRINT\n0: PUSH 1\nSTOP\n");
    stacksim()
        .args(["format", input.to_str().unwrap()])
        .assert()
        .success()
        .stdout("50: MULT\nPRINT\n0: PUSH 1\nSTOP\n");
}

// ---- Demo ----

#[test]
fn demo_prints_the_sample_output() {
    stacksim()
        .arg("demo")
        .assert()
        .success()
        .stdout("1009\n1010\n");
}
