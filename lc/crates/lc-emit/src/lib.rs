//! C emitter: turns a checked [`lc_par::Program`] into a C translation
//! unit. No I/O of its own — callers decide where the resulting string
//! goes.

mod emitter;
mod error;

pub use emitter::emit;
pub use error::{EmitError, Result};
