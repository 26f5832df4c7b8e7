//! Operator and punctuation scanning (maximal munch over one or two characters).

use super::*;

impl<'a> Lexer<'a> {
    /// Scan a symbol token whose first character `first` has already been consumed.
    pub(super) fn scan_symbol(&mut self, start: usize, first: char) -> Result<(), LexicalError> {
        let kind = self
            .symbol_kind(first)
            .ok_or_else(|| LexicalError::unrecognized_symbol(first, Span::new(start, self.current_pos)))?;

        if kind == TokenKind::Punctuation(PunctuationId::Comment) {
            self.skip_comment();
        } else {
            self.add_token(kind, start);
        }
        Ok(())
    }

    fn symbol_kind(&mut self, first: char) -> Option<TokenKind> {
        let kind = match first {
            '[' => punct(PunctuationId::LBracket),
            ']' => punct(PunctuationId::RBracket),
            '{' => punct(PunctuationId::LBrace),
            '}' => punct(PunctuationId::RBrace),
            '(' => punct(PunctuationId::LParen),
            ')' => punct(PunctuationId::RParen),
            ',' => punct(PunctuationId::Comma),
            '.' => punct(PunctuationId::Dot),
            ':' => punct(PunctuationId::Colon),
            ';' => punct(PunctuationId::Semicolon),
            '!' => punct(PunctuationId::Bang),
            '\'' => punct(PunctuationId::Comment),
            '\\' => TokenKind::Operator(OperatorId::Backslash),
            '*' => self.operator(OperatorId::Star, &[('=', OperatorId::StarEq)]),
            '/' => self.operator(OperatorId::Slash, &[('=', OperatorId::SlashEq)]),
            '+' => self.operator(OperatorId::Plus, &[('=', OperatorId::PlusEq)]),
            '-' => self.operator(OperatorId::Minus, &[('=', OperatorId::MinusEq)]),
            '^' => self.operator(OperatorId::Caret, &[('=', OperatorId::CaretEq)]),
            '&' => self.operator(OperatorId::Ampersand, &[('=', OperatorId::AmpersandEq)]),
            '=' => TokenKind::Operator(OperatorId::Eq),
            '<' => self.operator(
                OperatorId::Lt,
                &[
                    ('<', OperatorId::ShiftLeft),
                    ('>', OperatorId::NotEq),
                    ('=', OperatorId::LtEq),
                ],
            ),
            '>' => self.operator(
                OperatorId::Gt,
                &[('>', OperatorId::ShiftRight), ('=', OperatorId::GtEq)],
            ),
            _ => return None,
        };
        Some(kind)
    }

    /// Consume the first matching second character from `compounds`, in priority order, or fall back to `simple`.
    fn operator(&mut self, simple: OperatorId, compounds: &[(char, OperatorId)]) -> TokenKind {
        let next = self.peek();
        for &(second, id) in compounds {
            if next == Some(second) {
                self.advance();
                return TokenKind::Operator(id);
            }
        }
        TokenKind::Operator(simple)
    }
}

fn punct(id: PunctuationId) -> TokenKind {
    TokenKind::Punctuation(id)
}
