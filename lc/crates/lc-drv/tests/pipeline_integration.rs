//! End-to-end pipeline tests: write an L source file, run the full
//! lexer-to-emitter pipeline through [`lc_drv::run`], and check the
//! resulting `.c` file's contents.

use std::fs;

use lc_drv::{Cli, EmitStage};
use tempfile::tempdir;

fn run_with(source: &str, emit: Option<EmitStage>) -> (i32, std::path::PathBuf) {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("program.l");
    fs::write(&input, source).expect("write source");

    let cli = Cli {
        input: input.clone(),
        output: None,
        verbose: false,
        emit,
    };
    let code = lc_drv::run(&cli).expect("pipeline should not hit an I/O error");
    // Keep the tempdir alive for the caller by leaking it; these are
    // short-lived test processes so the directory is cleaned up by the OS.
    std::mem::forget(dir);
    (code, input.with_extension("c"))
}

#[test]
fn well_formed_program_compiles_to_c_and_exits_zero() {
    let (code, output) = run_with("f :: func () -> int { return 42; }", None);
    assert_eq!(code, 0);
    let c = fs::read_to_string(output).expect("output file should exist");
    assert!(c.contains("#include <stdbool.h>"));
    assert!(c.contains("int f() {\n    return 42;\n}\n"));
}

#[test]
fn undeclared_identifier_fails_the_pipeline_without_writing_output() {
    let (code, output) = run_with("f :: func () -> int { return y; }", None);
    assert_eq!(code, 1);
    assert!(!output.exists());
}

#[test]
fn type_error_fails_the_pipeline() {
    let (code, _) = run_with("f :: func () -> int { return true; }", None);
    assert_eq!(code, 1);
}

#[test]
fn parse_error_fails_the_pipeline() {
    let (code, _) = run_with("f :: func ( { }", None);
    assert_eq!(code, 1);
}

#[test]
fn emit_ast_stage_does_not_write_the_c_file() {
    let (code, output) = run_with("f :: func () {}", Some(EmitStage::Ast));
    assert_eq!(code, 0);
    assert!(!output.exists());
}

#[test]
fn emit_tokens_stage_does_not_write_the_c_file() {
    let (code, output) = run_with("f :: func () {}", Some(EmitStage::Tokens));
    assert_eq!(code, 0);
    assert!(!output.exists());
}

#[test]
fn custom_output_path_is_honored() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("prog.l");
    fs::write(&input, "f :: func () {}").expect("write source");
    let output = dir.path().join("custom.c");

    let cli = Cli {
        input,
        output: Some(output.clone()),
        verbose: false,
        emit: None,
    };
    let code = lc_drv::run(&cli).expect("pipeline run");
    assert_eq!(code, 0);
    assert!(output.exists());
}
