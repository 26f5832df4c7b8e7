/// Declaration shape classification.
///
/// Before committing to a production, the parser looks ahead over the current statement to decide what kind of
/// external declaration starts at the cursor:
///
/// 1. Find the presumptive declared name: the first identifier not in the context's declared-name set. Keywords in
///    front of it are remembered (a procedure keyword means a return-type clause may follow the parameters).
/// 2. Skip a `Lib "..."` / `Alias "..."` linkage clause.
/// 3. Without a `(` right after that, it is a data declaration.
/// 4. Otherwise scan to the matching `)` and skip a procedure's `As [New] Type` return clause.
/// 5. A `(` body opener means a function definition; an end of statement means a forward declaration.
///
/// The look-ahead never consumes tokens and never crosses an end of statement.
#[derive(Debug, Clone, PartialEq, Eq)]
enum DeclarationShape {
    FunctionDefinition,
    FunctionDeclaration { name: Ident, name_span: Span },
    Data,
}

impl<'a, 'c> Parser<'a, 'c> {
    fn classify_declaration_shape(&self) -> Result<DeclarationShape, SyntaxError> {
        let mut index = self.pos;
        let mut procedure = false;

        let (name, name_span) = loop {
            let Some(token) = self.tokens.get(index) else {
                return Ok(DeclarationShape::Data);
            };
            match &token.kind {
                TokenKind::Newline => return Ok(DeclarationShape::Data),
                TokenKind::Ident(name) if !self.context.is_declared(name) => break (name.clone(), token.span),
                kind => procedure |= kind.is_procedure_keyword(),
            }
            index += 1;
        };

        index = self.skip_linkage_clause(index + 1);

        if !self.kind_at(index).is_some_and(|k| k.is_punctuation(PunctuationId::LParen)) {
            return Ok(DeclarationShape::Data);
        }
        index = self.matching_paren(index)? + 1;

        if procedure {
            index = self.skip_return_type_clause(index);
        }

        Ok(match self.kind_at(index) {
            Some(kind) if kind.is_punctuation(PunctuationId::LParen) => DeclarationShape::FunctionDefinition,
            None | Some(TokenKind::Newline) => DeclarationShape::FunctionDeclaration { name, name_span },
            Some(_) => DeclarationShape::Data,
        })
    }

    /// Skip any `Lib "name"` and `Alias "name"` pairs starting at `index`.
    fn skip_linkage_clause(&self, mut index: usize) -> usize {
        while self
            .kind_at(index)
            .is_some_and(|k| k.is_keyword(KeywordId::Lib) || k.is_keyword(KeywordId::Alias))
            && matches!(self.kind_at(index + 1), Some(TokenKind::String(_)))
        {
            index += 2;
        }
        index
    }

    /// Index of the `)` that closes the `(` at `open`.
    ///
    /// ## Errors
    /// An `external-declaration` error when the statement ends first.
    fn matching_paren(&self, open: usize) -> Result<usize, SyntaxError> {
        let mut depth = 0usize;
        let mut index = open;

        while let Some(kind) = self.kind_at(index) {
            match kind {
                TokenKind::Punctuation(PunctuationId::LParen) => depth += 1,
                TokenKind::Punctuation(PunctuationId::RParen) => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(index);
                    }
                }
                TokenKind::Newline => break,
                _ => {}
            }
            index += 1;
        }

        let end = self.tokens.get(index).map_or_else(
            || self.tokens.last().map_or(0, |t| t.span.end),
            |t| t.span.start,
        );
        Err(SyntaxError::new(
            Construct::ExternalDeclaration,
            index,
            "unbalanced parentheses: expected ')' before the end of the statement",
            Span::new(self.tokens[open].span.start, end),
        ))
    }

    /// Skip `As [New] Type[.Type]*` starting at `index`, if present.
    fn skip_return_type_clause(&self, index: usize) -> usize {
        if !self.kind_at(index).is_some_and(|k| k.is_keyword(KeywordId::As)) {
            return index;
        }
        let mut index = index + 1;
        if self.kind_at(index).is_some_and(|k| k.is_keyword(KeywordId::New)) {
            index += 1;
        }
        match self.kind_at(index) {
            Some(TokenKind::Keyword(id)) if id.is_builtin_type() => index + 1,
            Some(TokenKind::Ident(_)) => {
                index += 1;
                while self.kind_at(index).is_some_and(|k| k.is_punctuation(PunctuationId::Dot))
                    && matches!(self.kind_at(index + 1), Some(TokenKind::Ident(_)))
                {
                    index += 2;
                }
                index
            }
            _ => index,
        }
    }
}
