//! String literal scanning.

use super::*;

impl<'a> Lexer<'a> {
    /// Scan a `"..."` literal; the opening quote has already been consumed.
    ///
    /// A backslash escapes the following character, so `\"` does not close the literal and `\\` is a complete
    /// escape. The body is kept verbatim. Literals may span lines.
    pub(super) fn scan_string(&mut self, start: usize) -> Result<(), LexicalError> {
        let body_start = self.current_pos;
        let mut escaped = false;

        loop {
            let Some(c) = self.peek() else {
                return Err(LexicalError::unterminated_string(Span::new(start, start + 1)));
            };
            if chars::is_quote(c) && !escaped {
                break;
            }
            escaped = !escaped && c == '\\';
            self.advance();
        }

        let body = self.source[body_start..self.current_pos].to_string();
        self.advance(); // closing quote
        self.add_token(TokenKind::String(body), start);
        Ok(())
    }
}
