//! Diagnostic rendering.
//!
//! L's only diagnostic severity is an error: the language has no warnings
//! (spec §7 names exactly four error kinds — parse, resolution, type, and
//! I/O — and lexical failures are swallowed into the identifier fallback
//! rather than surfaced). [`Diagnostic`] therefore always renders with the
//! `ERROR!` tag; `kind` exists to let the driver log which pass produced it
//! without inventing a severity axis the language doesn't have.
//!
//! # Examples
//!
//! ```
//! use lc_util::diagnostic::{Diagnostic, DiagnosticKind};
//! use lc_util::span::Span;
//!
//! let span = Span::single(1, 12, "f :: func () -> int { return y; }");
//! let diag = Diagnostic::new(DiagnosticKind::Resolution, "use of undeclared identifier `y`", span);
//! let rendered = diag.render("main.l");
//! assert!(rendered.starts_with("main.l:1:12: ERROR! use of undeclared identifier `y`:"));
//! ```

use crate::span::Span;

/// Which pass raised a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiagnosticKind {
    Parse,
    Resolution,
    Type,
}

impl DiagnosticKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticKind::Parse => "parse",
            DiagnosticKind::Resolution => "resolution",
            DiagnosticKind::Type => "type",
        }
    }
}

/// A single compiler error, anchored at a source [`Span`].
#[derive(Clone, Debug)]
pub struct Diagnostic<'src> {
    pub kind: DiagnosticKind,
    pub message: String,
    pub span: Span<'src>,
}

impl<'src> Diagnostic<'src> {
    pub fn new(kind: DiagnosticKind, message: impl Into<String>, span: Span<'src>) -> Self {
        Self {
            kind,
            message: message.into(),
            span,
        }
    }

    /// Render in the format
    /// `<file>:<line>:<col>: ERROR! <message>:` followed by the offending
    /// source line(s) and a caret underline.
    pub fn render(&self, file_name: &str) -> String {
        let span = &self.span;
        let mut out = format!(
            "{}:{}:{}: ERROR! {}:\n",
            file_name, span.start_line, span.start_col, self.message
        );

        if span.is_single_line() {
            out.push_str(span.start_line_text);
            out.push('\n');
            let start = (span.start_col as usize).saturating_sub(1);
            let width = (span.end_col as usize)
                .saturating_sub(span.start_col as usize)
                .saturating_add(1);
            out.push_str(&" ".repeat(start));
            out.push_str(&"^".repeat(width.max(1)));
        } else {
            out.push_str(&format!("Line {}: {}\n", span.start_line, span.start_line_text));
            out.push_str("...\n");
            out.push_str(&format!("Line {}: {}", span.end_line, span.end_line_text));
        }

        out
    }
}
