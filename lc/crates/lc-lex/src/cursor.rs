//! Character cursor for traversing source code.
//!
//! Tracks byte position, line, and column as it walks source text, and can
//! hand back the full text of the line it's currently on so a [`lc_util::Span`]
//! never needs a second pass over the buffer to find it.

/// A cursor over a source buffer, advancing byte-by-byte while tracking
/// line/column for span construction.
#[derive(Clone)]
pub struct Cursor<'src> {
    source: &'src str,
    lines: Vec<&'src str>,
    position: usize,
    line: u32,
    col: u32,
}

impl<'src> Cursor<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            lines: source.lines().collect(),
            position: 0,
            line: 1,
            col: 1,
        }
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn col(&self) -> u32 {
        self.col
    }

    /// Text of the line the cursor currently sits on, without its newline.
    pub fn current_line_text(&self) -> &'src str {
        self.lines.get((self.line - 1) as usize).copied().unwrap_or("")
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Character at the cursor, or `'\0'` past the end.
    pub fn current_char(&self) -> char {
        self.peek_char(0)
    }

    /// Character `offset` characters ahead of the cursor (0 = current).
    pub fn peek_char(&self, offset: usize) -> char {
        self.source[self.position..].chars().nth(offset).unwrap_or('\0')
    }

    /// Advance past the current character.
    pub fn advance(&mut self) {
        if let Some(c) = self.source[self.position..].chars().next() {
            self.position += c.len_utf8();
            if c == '\n' {
                self.line += 1;
                self.col = 1;
            } else {
                self.col += 1;
            }
        }
    }

    /// Consume `expected` if it's the current character.
    pub fn eat(&mut self, expected: char) -> bool {
        if self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    pub fn skip_whitespace(&mut self) {
        while self.current_char().is_whitespace() {
            self.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_tracks_line_and_column() {
        let mut cur = Cursor::new("ab\ncd");
        cur.advance();
        cur.advance();
        assert_eq!((cur.line(), cur.col()), (1, 3));
        cur.advance();
        assert_eq!((cur.line(), cur.col()), (2, 1));
    }

    #[test]
    fn current_line_text_tracks_the_active_line() {
        let mut cur = Cursor::new("first\nsecond");
        assert_eq!(cur.current_line_text(), "first");
        for _ in 0..6 {
            cur.advance();
        }
        assert_eq!(cur.current_line_text(), "second");
    }

    #[test]
    fn past_the_end_current_char_is_nul() {
        let mut cur = Cursor::new("a");
        cur.advance();
        assert!(cur.is_at_end());
        assert_eq!(cur.current_char(), '\0');
    }
}
