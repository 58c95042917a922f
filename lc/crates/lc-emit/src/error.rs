//! Error type for the C emitter.
//!
//! The emitter is a pure in-memory text-building pass (no files, no
//! external process), so its error surface is small: the only way it can
//! fail is if the formatter itself balks, which `String`'s `Write` impl
//! never does in practice but `write!` still returns a `Result` for.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmitError {
    #[error("failed to format generated C source: {0}")]
    Format(#[from] std::fmt::Error),
}

pub type Result<T> = std::result::Result<T, EmitError>;
