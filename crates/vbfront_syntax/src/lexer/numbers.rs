//! Numeric literal scanning. Only decimal integers exist in this dialect's token set.

use super::*;

impl<'a> Lexer<'a> {
    pub(super) fn scan_number(&mut self, start: usize) -> Result<(), LexicalError> {
        while self.peek().is_some_and(chars::is_digit) {
            self.advance();
        }

        let digits = &self.source[start..self.current_pos];
        let value = digits
            .parse::<i64>()
            .map_err(|_| LexicalError::integer_overflow(digits, Span::new(start, self.current_pos)))?;
        self.add_token(TokenKind::Int(value), start);
        Ok(())
    }
}
