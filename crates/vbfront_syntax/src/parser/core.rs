/// Parser core types and entrypoint.
///
/// This chunk defines the [`Parser`] type, its top-level `parse()` loop and the per-parse [`ParseContext`].
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
///   single module while avoiding a single “god file”.
/// - The parser is single-pass and fails fast: the first [`SyntaxError`] aborts the parse.
/// - Most parsing helpers are implemented on `Parser` but split across multiple files.
pub struct Parser<'a, 'c> {
    tokens: &'a [Token],
    pos: usize,
    context: &'c mut ParseContext,
}

impl<'a, 'c> Parser<'a, 'c> {
    /// Create a new parser for a token stream.
    ///
    /// ## Parameters
    /// - `tokens`: Token stream produced by `vbfront_syntax::lexer`.
    /// - `context`: Per-parse state; receives forward declarations.
    pub fn new(tokens: &'a [Token], context: &'c mut ParseContext) -> Self {
        Self {
            tokens,
            pos: 0,
            context,
        }
    }

    /// Parse the entire token stream into a [`TranslationUnit`].
    ///
    /// ## Errors
    /// Returns the first [`SyntaxError`] encountered.
    pub fn parse(mut self) -> Result<TranslationUnit, SyntaxError> {
        let mut declarations = Vec::new();

        loop {
            self.skip_newlines();
            if self.is_at_end() {
                break;
            }

            // Legacy form attribute lines (`Caption = "Form1"`) carry no declarations.
            if matches!(self.peek_kind(), Some(TokenKind::Attribute)) {
                tracing::trace!(index = self.pos, "skipping attribute statement");
                self.skip_statement();
                continue;
            }

            if let Some(declaration) = self.external_declaration()? {
                declarations.push(declaration);
            }
        }

        Ok(TranslationUnit { declarations })
    }
}

/// A `Declare Function ... Lib "..."` style prototype: a procedure header with no body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardDeclaration {
    /// The presumptive declared name found by the shape classifier.
    pub name: Ident,
    /// Span of the whole declaration statement.
    pub span: Span,
}

/// Per-parse state, owned by the caller so that concurrent parses never share anything mutable.
///
/// ## Notes
/// - `declared_names` holds names the shape classifier must skip when looking for the declared name (type names
///   declared earlier, for instance). The parser itself never adds to it; callers may seed it.
/// - Forward declarations produce no AST node. They are collected here instead.
#[derive(Debug, Clone, Default)]
pub struct ParseContext {
    declared_names: HashSet<String>,
    forward_declarations: Vec<ForwardDeclaration>,
}

impl ParseContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context whose declared-name set is pre-populated.
    pub fn with_declared_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            declared_names: names.into_iter().map(Into::into).collect(),
            forward_declarations: Vec::new(),
        }
    }

    pub fn declare_name(&mut self, name: impl Into<String>) {
        self.declared_names.insert(name.into());
    }

    pub fn is_declared(&self, name: &str) -> bool {
        self.declared_names.contains(name)
    }

    /// Forward declarations seen so far, in source order.
    pub fn forward_declarations(&self) -> &[ForwardDeclaration] {
        &self.forward_declarations
    }

    fn record_forward_declaration(&mut self, declaration: ForwardDeclaration) {
        self.forward_declarations.push(declaration);
    }
}
