/// Declarators, parameter lists, array bounds, type names and initializers.
impl<'a, 'c> Parser<'a, 'c> {
    /// `[Function|Sub|Property [Get|Let|Set]] [declared-name]* name [suffix] [As [New] type]`
    ///
    /// `procedure_header` is set for function definitions: their suffix is a parameter list even without a
    /// procedure keyword. Otherwise only a procedure keyword makes it one, and a data suffix is array bounds.
    fn declarator(&mut self, procedure_header: bool) -> Result<Declarator, SyntaxError> {
        let start = self.current_span().start;
        let procedure = self.procedure_kind();

        let mut qualifiers = Vec::new();
        while let Some(name) = self
            .peek_kind()
            .and_then(TokenKind::ident)
            .filter(|name| self.context.is_declared(name))
        {
            qualifiers.push(name.to_string());
            self.pos += 1;
        }

        let (name, _) = self.expect_identifier(Construct::Declarator, "a declared name")?;

        let suffix = if self.check_punct(PunctuationId::LParen) {
            Some(if procedure_header || procedure.is_some() {
                DeclaratorSuffix::Parameters(self.parameter_list()?)
            } else {
                DeclaratorSuffix::Bounds(self.array_bounds()?)
            })
        } else {
            None
        };

        let type_name = self.as_clause(Construct::Declarator)?;

        Ok(Declarator {
            procedure,
            qualifiers,
            name,
            suffix,
            type_name,
            span: self.span_from(start),
        })
    }

    fn procedure_kind(&mut self) -> Option<ProcedureKind> {
        if self.match_keyword(KeywordId::Function) {
            Some(ProcedureKind::Function)
        } else if self.match_keyword(KeywordId::Sub) {
            Some(ProcedureKind::Sub)
        } else if self.match_keyword(KeywordId::Property) {
            let accessor = if self.match_keyword(KeywordId::Get) {
                Some(PropertyAccessor::Get)
            } else if self.match_keyword(KeywordId::Let) {
                Some(PropertyAccessor::Let)
            } else if self.match_keyword(KeywordId::Set) {
                Some(PropertyAccessor::Set)
            } else {
                None
            };
            Some(ProcedureKind::Property(accessor))
        } else {
            None
        }
    }

    // ========================================================================
    // Parameters
    // ========================================================================

    fn parameter_list(&mut self) -> Result<Vec<Parameter>, SyntaxError> {
        self.expect_punct(PunctuationId::LParen, Construct::Declarator, "'('")?;
        let mut params = Vec::new();

        if self.match_punct(PunctuationId::RParen) {
            return Ok(params);
        }

        loop {
            params.push(self.parameter()?);
            if self.match_punct(PunctuationId::Comma) {
                continue;
            }
            self.expect_punct(PunctuationId::RParen, Construct::Declarator, "',' or ')' in the parameter list")?;
            return Ok(params);
        }
    }

    /// `[ByVal|ByRef|Optional|ParamArray]* name [()] [As type] [= default]`
    fn parameter(&mut self) -> Result<Parameter, SyntaxError> {
        const PARAMETER_MODIFIERS: &[KeywordId] = &[
            KeywordId::ByVal,
            KeywordId::ByRef,
            KeywordId::Optional,
            KeywordId::ParamArray,
        ];

        let start = self.current_span().start;
        let mut modifiers = Vec::new();
        while let Some(id) = self
            .peek_kind()
            .and_then(TokenKind::keyword_id)
            .filter(|id| PARAMETER_MODIFIERS.contains(id))
        {
            self.advance();
            modifiers.push(id);
        }

        let (name, _) = self.expect_identifier(Construct::Declarator, "a parameter name")?;

        let is_array = self.check_punct(PunctuationId::LParen)
            && self.kind_at(self.pos + 1).is_some_and(|k| k.is_punctuation(PunctuationId::RParen));
        if is_array {
            self.pos += 2;
        }

        let type_name = self.as_clause(Construct::Declarator)?;
        let default = if self.match_op(OperatorId::Eq) {
            Some(self.initializer(Construct::Declarator)?)
        } else {
            None
        };

        Ok(Parameter {
            modifiers,
            name,
            is_array,
            type_name,
            default,
            span: self.span_from(start),
        })
    }

    // ========================================================================
    // Array bounds
    // ========================================================================

    /// `()`, `(10)`, `(1 To 10, 5)`
    fn array_bounds(&mut self) -> Result<Vec<ArrayBound>, SyntaxError> {
        self.expect_punct(PunctuationId::LParen, Construct::Declarator, "'('")?;
        let mut bounds = Vec::new();

        if self.match_punct(PunctuationId::RParen) {
            return Ok(bounds);
        }

        loop {
            let first = self.bound_value()?;
            let bound = if self.match_keyword(KeywordId::To) {
                ArrayBound {
                    lower: Some(first),
                    upper: self.bound_value()?,
                }
            } else {
                ArrayBound {
                    lower: None,
                    upper: first,
                }
            };
            bounds.push(bound);

            if self.match_punct(PunctuationId::Comma) {
                continue;
            }
            self.expect_punct(PunctuationId::RParen, Construct::Declarator, "',' or ')' in the array bounds")?;
            return Ok(bounds);
        }
    }

    /// An integer bound, optionally negated.
    fn bound_value(&mut self) -> Result<i64, SyntaxError> {
        let negative = self.match_op(OperatorId::Minus);
        match self.peek_kind() {
            Some(TokenKind::Int(value)) => {
                let value = *value;
                self.advance();
                Ok(if negative { -value } else { value })
            }
            _ => Err(self.error_here(Construct::Declarator, "an integer array bound")),
        }
    }

    // ========================================================================
    // Types
    // ========================================================================

    /// An optional `As [New] type` clause.
    fn as_clause(&mut self, construct: Construct) -> Result<Option<TypeName>, SyntaxError> {
        if self.match_keyword(KeywordId::As) {
            self.type_name(construct).map(Some)
        } else {
            Ok(None)
        }
    }

    fn type_name(&mut self, construct: Construct) -> Result<TypeName, SyntaxError> {
        let start = self.current_span().start;
        let is_new = self.match_keyword(KeywordId::New);

        let kind = match self.peek_kind() {
            Some(TokenKind::Keyword(id)) if id.is_builtin_type() => {
                let id = *id;
                self.advance();
                TypeKind::Builtin(id)
            }
            Some(TokenKind::Ident(_)) => {
                let (first, _) = self.expect_identifier(construct, "a type name")?;
                let mut path = vec![first];
                while self.check_punct(PunctuationId::Dot) {
                    self.advance();
                    let (segment, _) = self.expect_identifier(construct, "a type name after '.'")?;
                    path.push(segment);
                }
                TypeKind::Named(path)
            }
            _ => return Err(self.error_here(construct, "a type name after 'As'")),
        };

        Ok(TypeName {
            is_new,
            kind,
            span: self.span_from(start),
        })
    }

    // ========================================================================
    // Initializers
    // ========================================================================

    /// `declarator [= initializer]`
    fn init_declarator(&mut self) -> Result<InitDeclarator, SyntaxError> {
        let declarator = self.declarator(false)?;
        let initializer = if self.match_op(OperatorId::Eq) {
            Some(self.initializer(Construct::InitializeDeclarator)?)
        } else {
            None
        };

        Ok(InitDeclarator {
            declarator,
            initializer,
        })
    }

    /// Raw tokens up to a top-level `,`, an unmatched `)` or the end of the statement.
    fn initializer(&mut self, construct: Construct) -> Result<Initializer, SyntaxError> {
        let first = self.pos;
        let mut depth = 0usize;

        while let Some(kind) = self.peek_kind() {
            match kind {
                TokenKind::Newline => break,
                TokenKind::Punctuation(PunctuationId::Comma | PunctuationId::RParen) if depth == 0 => break,
                TokenKind::Punctuation(PunctuationId::LParen) => depth += 1,
                TokenKind::Punctuation(PunctuationId::RParen) => depth -= 1,
                _ => {}
            }
            self.pos += 1;
        }

        let tokens = &self.tokens[first..self.pos];
        match (tokens.first(), tokens.last()) {
            (Some(head), Some(tail)) => Ok(Initializer {
                tokens: tokens.to_vec(),
                span: head.span.merge(tail.span),
            }),
            _ => Err(self.error_here(construct, "an initializer after '='")),
        }
    }
}
