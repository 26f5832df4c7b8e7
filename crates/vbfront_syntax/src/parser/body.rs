/// Function bodies.
///
/// A body opens with `(` after the procedure header and runs until `End` followed by the keyword that opened the
/// procedure (`End Function`, `End Sub`, `End Property`). Statements are not parsed here: each line becomes one
/// [`Statement`] holding its raw tokens.
impl<'a, 'c> Parser<'a, 'c> {
    fn compound_statement(&mut self, procedure: Option<ProcedureKind>) -> Result<CompoundStatement, SyntaxError> {
        let start = self.current_span().start;
        self.expect_punct(PunctuationId::LParen, Construct::CompoundStatement, "'(' to open the body")?;

        let mut statements = Vec::new();
        loop {
            self.skip_newlines();
            if self.is_at_end() {
                let expected = match procedure {
                    Some(kind) => format!("'End {kind}'"),
                    None => "'End'".to_string(),
                };
                return Err(self.error_here(Construct::CompoundStatement, &expected));
            }
            if self.at_body_end(procedure) {
                self.pos += 2;
                self.expect_end_of_statement(Construct::CompoundStatement)?;
                break;
            }
            statements.push(self.statement());
        }

        Ok(CompoundStatement {
            statements,
            span: self.span_from(start),
        })
    }

    /// `End` followed by the procedure keyword. Without a known procedure any procedure keyword closes the body.
    fn at_body_end(&self, procedure: Option<ProcedureKind>) -> bool {
        if !self.check_keyword(KeywordId::End) {
            return false;
        }
        match (procedure, self.kind_at(self.pos + 1).and_then(TokenKind::keyword_id)) {
            (Some(kind), Some(id)) => id == kind.keyword(),
            (None, Some(id)) => matches!(id, KeywordId::Function | KeywordId::Sub | KeywordId::Property),
            (_, None) => false,
        }
    }

    /// One logical line of the body, kept as raw tokens.
    fn statement(&mut self) -> Statement {
        let first = self.pos;
        while !self.check_end_of_statement() {
            self.pos += 1;
        }
        let tokens = self.tokens[first..self.pos].to_vec();
        let span = match (tokens.first(), tokens.last()) {
            (Some(head), Some(tail)) => head.span.merge(tail.span),
            _ => self.current_span(),
        };
        self.match_end_of_statement();
        Statement { tokens, span }
    }
}
