//! Drives the `lc` binary as a subprocess to check its CLI surface:
//! exit codes and `--emit` stage output.

use std::fs;

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::tempdir;

#[test]
fn compiling_a_valid_program_exits_zero_and_writes_c() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("ok.l");
    fs::write(&input, "f :: func () -> int { return 1 + 2; }").unwrap();

    Command::cargo_bin("lc")
        .unwrap()
        .arg(&input)
        .assert()
        .success();

    let c = fs::read_to_string(input.with_extension("c")).unwrap();
    assert!(c.contains("return 1 + 2;"));
}

#[test]
fn a_program_with_a_type_error_exits_nonzero_and_prints_a_diagnostic() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("bad.l");
    fs::write(&input, "f :: func () -> int { return true; }").unwrap();

    Command::cargo_bin("lc")
        .unwrap()
        .arg(&input)
        .assert()
        .code(1)
        .stderr(contains("ERROR!"));
}

#[test]
fn missing_input_file_exits_with_the_io_failure_code() {
    Command::cargo_bin("lc")
        .unwrap()
        .arg("/nonexistent/does-not-exist.l")
        .assert()
        .code(2);
}

#[test]
fn emit_c_prints_generated_source_to_stdout_without_writing_a_file() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("emit.l");
    fs::write(&input, "f :: func () {}").unwrap();

    Command::cargo_bin("lc")
        .unwrap()
        .arg(&input)
        .arg("--emit")
        .arg("c")
        .assert()
        .success()
        .stdout(contains("void f() {"));

    assert!(!input.with_extension("c").exists());
}
