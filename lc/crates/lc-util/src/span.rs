//! Span module - source location tracking.
//!
//! A [`Span`] pins a range of L source to the line/column pairs and the raw
//! source line text needed to render a caret-underlined diagnostic (see
//! [`crate::diagnostic`]). L compiles a single file at a time, so unlike a
//! multi-file `SourceMap`, a span carries its line text directly rather than
//! an index into a registry of files.
//!
//! # Examples
//!
//! ```
//! use lc_util::span::Span;
//!
//! let tok = Span::single(3, 5, "    x = 1;");
//! assert_eq!(tok.start_line, 3);
//! assert_eq!(tok.start_col, 5);
//! ```

/// A source location span.
///
/// Both endpoints carry the full text of the line they fall on, so the
/// diagnostic renderer never needs to re-read the source buffer: the
/// compiler is single-pass-diagnostic-friendly by construction (spec: "the
/// error-reporting subsystem... is in scope because error quality is the
/// dominant design pressure").
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span<'src> {
    /// 1-based starting line.
    pub start_line: u32,
    /// 1-based starting column.
    pub start_col: u32,
    /// Text of the starting line, without the trailing newline.
    pub start_line_text: &'src str,
    /// 1-based ending line (inclusive).
    pub end_line: u32,
    /// 1-based ending column (inclusive, i.e. the column of the last byte).
    pub end_col: u32,
    /// Text of the ending line, without the trailing newline.
    pub end_line_text: &'src str,
}

impl<'src> Span<'src> {
    /// A span covering a single point (zero-width on one line).
    pub fn single(line: u32, col: u32, line_text: &'src str) -> Self {
        Self {
            start_line: line,
            start_col: col,
            start_line_text: line_text,
            end_line: line,
            end_col: col,
            end_line_text: line_text,
        }
    }

    /// True when the span starts and ends on the same line.
    pub fn is_single_line(&self) -> bool {
        self.start_line == self.end_line
    }
}

/// Anything that carries a [`Span`] — implemented by `lc-lex`'s `Token` so
/// this crate's span builders can accept a token without depending on the
/// token type itself (that dependency runs the other way).
pub trait Spanned<'src> {
    fn span(&self) -> Span<'src>;
}

/// Extract the span carried by a token. A named counterpart to
/// `span_between`/`span_after` so call sites that just need "this token's
/// span" read the same way as the combinators that build new ones.
pub fn span_of_token<'src, T: Spanned<'src>>(tok: &T) -> Span<'src> {
    tok.span()
}

/// Combine two spans into one spanning from `a`'s start to `b`'s end.
///
/// Used to give a parsed construct (e.g. a binary expression) a span that
/// covers its full extent from its leftmost to its rightmost token.
pub fn span_between<'src>(a: Span<'src>, b: Span<'src>) -> Span<'src> {
    Span {
        start_line: a.start_line,
        start_col: a.start_col,
        start_line_text: a.start_line_text,
        end_line: b.end_line,
        end_col: b.end_col,
        end_line_text: b.end_line_text,
    }
}

/// A zero-width span immediately after `span`'s end, for diagnostics about
/// something missing (e.g. "expected `;` after this token").
pub fn span_after(span: Span<'_>) -> Span<'_> {
    Span {
        start_line: span.end_line,
        start_col: span.end_col + 1,
        start_line_text: span.end_line_text,
        end_line: span.end_line,
        end_col: span.end_col + 1,
        end_line_text: span.end_line_text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_point_span_has_equal_endpoints() {
        let s = Span::single(1, 1, "x = 1;");
        assert!(s.is_single_line());
        assert_eq!(s.start_col, s.end_col);
    }

    #[test]
    fn span_between_takes_outer_endpoints() {
        let a = Span::single(2, 1, "x = 1 + 2;");
        let b = Span::single(2, 10, "x = 1 + 2;");
        let combined = span_between(a, b);
        assert_eq!(combined.start_col, 1);
        assert_eq!(combined.end_col, 10);
    }

    #[test]
    fn span_of_token_extracts_the_spanned_impls_span() {
        struct Fake<'src>(Span<'src>);
        impl<'src> Spanned<'src> for Fake<'src> {
            fn span(&self) -> Span<'src> {
                self.0
            }
        }

        let s = Span::single(7, 2, "x;");
        let tok = Fake(s);
        assert_eq!(span_of_token(&tok), s);
    }

    #[test]
    fn span_after_is_zero_width_past_the_end() {
        let s = Span::single(4, 5, "return x");
        let after = span_after(s);
        assert_eq!(after.start_col, 6);
        assert_eq!(after.start_col, after.end_col);
    }
}
