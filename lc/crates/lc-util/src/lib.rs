//! Shared primitives used across every compiler stage: source spans,
//! identifier interning, typed-index collections, the expression arena, and
//! diagnostic rendering.

pub mod arena;
pub mod diagnostic;
pub mod error;
pub mod index_vec;
pub mod span;
pub mod symbol;

pub use arena::{Arena, ArenaId};
pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use error::SourceLoadError;
pub use index_vec::{Idx, IndexVec};
pub use span::{span_after, span_between, span_of_token, Span, Spanned};
pub use symbol::Symbol;
