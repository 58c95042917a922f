//! Compiler driver: the `lc` binary's orchestration layer. A [`Session`]
//! owns one file's source text and drives it through lexing, parsing,
//! semantic analysis, and C emission in order, stopping at the first
//! phase that reports any diagnostic — mirroring the teacher's
//! `Session`/pipeline-staging split, trimmed to the stages this compiler
//! actually has (no MIR/LIR/codegen-to-assembly).

use std::path::{Path, PathBuf};

use clap::{Parser as ClapParser, ValueEnum};
use thiserror::Error;

/// Command-line surface for the `lc` binary.
#[derive(ClapParser, Debug)]
#[command(name = "lc", about = "Compiles an L source file to C")]
pub struct Cli {
    /// L source file to compile.
    pub input: PathBuf,

    /// Output path for the generated C (default: input with a `.c` extension).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Emit debug-level logging for every pipeline stage.
    #[arg(short, long)]
    pub verbose: bool,

    /// Stop after the named stage and print it to stdout instead of
    /// writing the `.c` output.
    #[arg(long, value_enum)]
    pub emit: Option<EmitStage>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum EmitStage {
    Tokens,
    Ast,
    C,
}

#[derive(Debug, Error)]
pub enum CompileError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("C emission failed: {0}")]
    Emit(#[from] lc_emit::EmitError),
}

/// A single-file compilation session: the source text plus the path it
/// came from, for use in diagnostics and the default output path.
pub struct Session {
    path: PathBuf,
    source: String,
}

/// What a [`Session::compile`] run produced — either an intermediate
/// stage's text (for `--emit`), diagnostics from a failed pass, or the
/// final generated C.
pub enum Outcome<'src> {
    Stage(String),
    Failed(Vec<lc_util::Diagnostic<'src>>),
    Emitted(String),
}

impl Session {
    pub fn load(path: PathBuf) -> Result<Self, CompileError> {
        tracing::debug!(path = %path.display(), "reading source");
        let source = std::fs::read_to_string(&path)?;
        Ok(Self { path, source })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Runs the pipeline, stopping early at `emit_stage` if given.
    pub fn compile(&self, emit_stage: Option<EmitStage>) -> Result<Outcome<'_>, CompileError> {
        if emit_stage == Some(EmitStage::Tokens) {
            tracing::debug!(path = %self.path.display(), "lexing");
            let tokens: Vec<_> = lc_lex::Lexer::new(&self.source).collect();
            let rendered = tokens.iter().map(|t| format!("{:?}", t)).collect::<Vec<_>>().join("\n");
            return Ok(Outcome::Stage(rendered));
        }

        tracing::debug!(path = %self.path.display(), "parsing");
        let parsed = lc_par::Parser::new(&self.source).parse();
        if !parsed.is_ok() {
            return Ok(Outcome::Failed(parsed.diagnostics));
        }

        if emit_stage == Some(EmitStage::Ast) {
            return Ok(Outcome::Stage(format!("{:#?}", parsed.program)));
        }

        tracing::debug!(path = %self.path.display(), "resolving and type-checking");
        let analysis = lc_sem::analyze(&parsed.program, &parsed.arena);
        if !analysis.is_ok() {
            return Ok(Outcome::Failed(analysis.diagnostics));
        }

        tracing::debug!(path = %self.path.display(), "emitting C");
        let c_source = lc_emit::emit(&parsed.program, &parsed.arena)?;
        Ok(Outcome::Emitted(c_source))
    }
}

/// Runs the full pipeline for `cli` and returns the process exit code:
/// `0` on success, `1` if any pass reported diagnostics. I/O and
/// emission failures are returned as `Err` so the caller can exit `2`.
pub fn run(cli: &Cli) -> Result<i32, CompileError> {
    init_tracing(cli.verbose);

    let session = Session::load(cli.input.clone())?;
    match session.compile(cli.emit)? {
        Outcome::Stage(text) => {
            println!("{}", text);
            Ok(0)
        }
        Outcome::Failed(diagnostics) => {
            report(&diagnostics, session.path());
            Ok(1)
        }
        Outcome::Emitted(c_source) => {
            if cli.emit == Some(EmitStage::C) {
                print!("{}", c_source);
                return Ok(0);
            }
            let output_path = cli.output.clone().unwrap_or_else(|| session.path().with_extension("c"));
            std::fs::write(&output_path, &c_source)?;
            tracing::info!(path = %output_path.display(), "wrote output");
            Ok(0)
        }
    }
}

fn report(diagnostics: &[lc_util::Diagnostic<'_>], path: &Path) {
    let file_name = path.display().to_string();
    for diagnostic in diagnostics {
        eprintln!("{}", diagnostic.render(&file_name));
    }
    tracing::warn!(count = diagnostics.len(), "compilation reported diagnostics");
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).without_time().try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(source: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".l").tempfile().unwrap();
        file.write_all(source.as_bytes()).unwrap();
        file
    }

    #[test]
    fn a_clean_program_emits_c() {
        let file = write_temp("f :: func () -> int { return 1; }");
        let session = Session::load(file.path().to_path_buf()).unwrap();
        let outcome = session.compile(None).unwrap();
        match outcome {
            Outcome::Emitted(c) => assert!(c.contains("return 1;")),
            _ => panic!("expected a successful emission"),
        }
    }

    #[test]
    fn a_broken_program_reports_diagnostics_without_panicking() {
        let file = write_temp("f :: func () -> int { return y; }");
        let session = Session::load(file.path().to_path_buf()).unwrap();
        let outcome = session.compile(None).unwrap();
        assert!(matches!(outcome, Outcome::Failed(_)));
    }

    #[test]
    fn loading_a_missing_file_is_an_io_error() {
        let result = Session::load(PathBuf::from("/does/not/exist.l"));
        assert!(result.is_err());
    }
}
