/// External declarations: function definitions, forward declarations, data declarations.
///
/// The shape classifier (see `shape.rs`) picks the production; this chunk drives it.
impl<'a, 'c> Parser<'a, 'c> {
    /// Keywords accepted as declaration specifiers.
    const SPECIFIER_KEYWORDS: &'static [KeywordId] = &[
        KeywordId::Dim,
        KeywordId::Const,
        KeywordId::Static,
        KeywordId::Public,
        KeywordId::Private,
        KeywordId::Global,
        KeywordId::Friend,
        KeywordId::Protected,
        KeywordId::Shared,
        KeywordId::ReDim,
        KeywordId::Shadows,
        KeywordId::Overloads,
        KeywordId::Overrides,
        KeywordId::Overridable,
        KeywordId::MustOverride,
        KeywordId::NotOverridable,
        KeywordId::Partial,
        KeywordId::ReadOnly,
        KeywordId::WriteOnly,
        KeywordId::WithEvents,
    ];

    /// Parse one external declaration. Returns `None` for a forward declaration, which produces no node.
    fn external_declaration(&mut self) -> Result<Option<Spanned<ExternalDeclaration>>, SyntaxError> {
        let start = self.current_span().start;
        let shape = self.classify_declaration_shape()?;
        tracing::debug!(index = self.pos, ?shape, "classified external declaration");

        let declaration = match shape {
            DeclarationShape::FunctionDefinition => {
                ExternalDeclaration::FunctionDefinition(self.function_definition()?)
            }
            DeclarationShape::FunctionDeclaration { name, .. } => {
                self.forward_declaration(name, start);
                return Ok(None);
            }
            DeclarationShape::Data => ExternalDeclaration::Declaration(self.declaration()?),
        };

        Ok(Some(Spanned::new(declaration, self.span_from(start))))
    }

    fn function_definition(&mut self) -> Result<FunctionDefinition, SyntaxError> {
        let specifiers = self.declaration_specifiers()?;
        let declarator = self.declarator(true)?;
        let body = self.compound_statement(declarator.procedure)?;

        Ok(FunctionDefinition {
            specifiers,
            declarator,
            body,
        })
    }

    /// A prototype with no body: record it and move past the statement.
    fn forward_declaration(&mut self, name: Ident, start: usize) {
        self.skip_statement();
        let span = self.span_from(start);
        tracing::debug!(name = %name, "surfaced forward declaration");
        self.context.record_forward_declaration(ForwardDeclaration { name, span });
    }

    fn declaration(&mut self) -> Result<Declaration, SyntaxError> {
        let specifiers = self.declaration_specifiers()?;

        if self.check_end_of_statement() {
            return Err(self.error_here(Construct::InitializeDeclarator, "a declarator"));
        }

        let mut initializers = Vec::new();
        loop {
            initializers.push(self.init_declarator()?);
            if self.match_punct(PunctuationId::Comma) {
                continue;
            }
            if self.match_end_of_statement() {
                break;
            }
            return Err(self.error_here(Construct::InitializeDeclarator, "',' or end of statement"));
        }

        Ok(Declaration {
            specifiers,
            initializers,
        })
    }

    // ========================================================================
    // Declaration specifiers
    // ========================================================================

    /// Zero or more specifiers, stopping at the first token that is not one.
    ///
    /// Identifiers in the context's declared-name set count as specifiers, mirroring the shape classifier which
    /// skips them when looking for the declared name.
    ///
    /// ## Errors
    /// A `declaration-specifier` error if that token is a keyword that can neither be a specifier nor start a
    /// declarator (`Option`, `Event`, ...).
    fn declaration_specifiers(&mut self) -> Result<Vec<DeclarationSpecifier>, SyntaxError> {
        let mut specifiers = Vec::new();
        while let Some(specifier) = self.declaration_specifier() {
            specifiers.push(specifier);
        }

        match self.peek_kind() {
            Some(TokenKind::Keyword(KeywordId::Function | KeywordId::Sub | KeywordId::Property)) => {}
            Some(TokenKind::Keyword(_)) => {
                return Err(self.error_here(Construct::DeclarationSpecifier, "a declaration specifier or a declarator"));
            }
            _ => {}
        }
        Ok(specifiers)
    }

    fn declaration_specifier(&mut self) -> Option<DeclarationSpecifier> {
        let token = self.peek()?;
        let kind = match &token.kind {
            TokenKind::Keyword(id) if Self::SPECIFIER_KEYWORDS.contains(id) => SpecifierKind::Keyword(*id),
            TokenKind::Ident(name) if self.context.is_declared(name) => SpecifierKind::DeclaredName(name.clone()),
            _ => return None,
        };
        self.pos += 1;
        Some(DeclarationSpecifier { kind, span: token.span })
    }
}
