/// Token-stream helpers.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking/consuming tokens (`peek`, `advance`)
/// - Matching / expecting keywords, operators, and punctuation
/// - Statement boundaries (`skip_newlines`, `skip_statement`, `expect_end_of_statement`)
/// - Error construction (`error_here`)
///
/// The end of the token sequence counts as an end of statement everywhere, so a final line without a line break
/// parses the same as one with it.
impl<'a, 'c> Parser<'a, 'c> {
    // ========================================================================
    // Cursor
    // ========================================================================

    fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Return the current token without consuming it.
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn peek_kind(&self) -> Option<&'a TokenKind> {
        self.peek().map(|t| &t.kind)
    }

    /// Kind of the token at an absolute index (used by the look-ahead classifier).
    fn kind_at(&self, index: usize) -> Option<&'a TokenKind> {
        self.tokens.get(index).map(|t| &t.kind)
    }

    /// Advance to the next token and return the token we just consumed.
    fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    // ========================================================================
    // Matching
    // ========================================================================

    fn check_keyword(&self, id: KeywordId) -> bool {
        self.peek_kind().is_some_and(|k| k.is_keyword(id))
    }

    fn check_punct(&self, id: PunctuationId) -> bool {
        self.peek_kind().is_some_and(|k| k.is_punctuation(id))
    }

    fn check_op(&self, id: OperatorId) -> bool {
        self.peek_kind().is_some_and(|k| k.is_operator(id))
    }

    /// Return `true` at a `Newline` token or at the end of the sequence.
    fn check_end_of_statement(&self) -> bool {
        self.peek_kind().is_none_or(TokenKind::is_end_of_statement)
    }

    fn match_keyword(&mut self, id: KeywordId) -> bool {
        if self.check_keyword(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn match_punct(&mut self, id: PunctuationId) -> bool {
        if self.check_punct(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn match_op(&mut self, id: OperatorId) -> bool {
        if self.check_op(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn match_end_of_statement(&mut self) -> bool {
        if self.check_end_of_statement() {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect_punct(&mut self, id: PunctuationId, construct: Construct, expected: &str) -> Result<Span, SyntaxError> {
        match self.peek() {
            Some(token) if token.kind.is_punctuation(id) => {
                self.pos += 1;
                Ok(token.span)
            }
            _ => Err(self.error_here(construct, expected)),
        }
    }

    fn expect_identifier(&mut self, construct: Construct, expected: &str) -> Result<(Ident, Span), SyntaxError> {
        match self.peek() {
            Some(Token {
                kind: TokenKind::Ident(name),
                span,
            }) => {
                self.pos += 1;
                Ok((name.clone(), *span))
            }
            _ => Err(self.error_here(construct, expected)),
        }
    }

    fn expect_end_of_statement(&mut self, construct: Construct) -> Result<(), SyntaxError> {
        if self.match_end_of_statement() {
            Ok(())
        } else {
            Err(self.error_here(construct, "end of statement"))
        }
    }

    // ========================================================================
    // Statement boundaries
    // ========================================================================

    fn skip_newlines(&mut self) {
        while self.peek_kind().is_some_and(TokenKind::is_end_of_statement) {
            self.pos += 1;
        }
    }

    /// Consume tokens through the next end of statement.
    fn skip_statement(&mut self) {
        while let Some(token) = self.advance() {
            if token.is_end_of_statement() {
                break;
            }
        }
    }

    // ========================================================================
    // Spans and errors
    // ========================================================================

    /// Span of the current token, or an empty span just past the last token at the end of the sequence.
    fn current_span(&self) -> Span {
        match self.peek() {
            Some(token) => token.span,
            None => {
                let end = self.tokens.last().map_or(0, |t| t.span.end);
                Span::new(end, end)
            }
        }
    }

    /// End offset of the last consumed token that is not an end of statement.
    fn last_significant_end(&self) -> usize {
        self.tokens[..self.pos]
            .iter()
            .rev()
            .find(|t| !t.is_end_of_statement())
            .map_or(0, |t| t.span.end)
    }

    /// Span from `start` to the end of the last significant consumed token.
    fn span_from(&self, start: usize) -> Span {
        Span::new(start, self.last_significant_end().max(start))
    }

    fn describe_current(&self) -> String {
        match self.peek_kind() {
            Some(kind) => kind.to_string(),
            None => "end of input".to_string(),
        }
    }

    /// Build a [`SyntaxError`] for `construct` at the current token.
    fn error_here(&self, construct: Construct, expected: &str) -> SyntaxError {
        SyntaxError::new(
            construct,
            self.pos,
            format!("expected {expected}, found {}", self.describe_current()),
            self.current_span(),
        )
    }
}
