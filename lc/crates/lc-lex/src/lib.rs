//! Lexical analysis for L.
//!
//! Turns a source buffer into a lazy stream of [`Token`]s. There are no
//! comments in L and whitespace is pure separation, so this stage never
//! reports an error of its own: an unrecognized run of characters falls
//! back to an identifier token and is left for the resolver or type checker
//! to reject.

pub mod cursor;
pub mod lexer;
pub mod token;

pub use lexer::Lexer;
pub use token::{Token, TokenKind};
