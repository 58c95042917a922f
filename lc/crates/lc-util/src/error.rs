//! Ambient, non-diagnostic failures.
//!
//! Lex/parse/resolution/type errors are [`crate::diagnostic::Diagnostic`]
//! values carried through the pipeline's `Result<_, Vec<Diagnostic>>`
//! returns. This module is for the other kind of failure: reading the input
//! file failed, the source isn't valid UTF-8, and so on. Those aren't about
//! a location in L source, so they get a conventional `thiserror` enum
//! instead.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceLoadError {
    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not valid UTF-8")]
    InvalidUtf8 { path: String },
}
