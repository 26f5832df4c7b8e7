
/// Parse a token stream into a [`TranslationUnit`] with a fresh [`ParseContext`].
///
/// This is the main public entrypoint for parsing. Forward declarations are discarded; use
/// [`parse_with_context`] to observe them.
///
/// ## Parameters
/// - `tokens`: Token stream produced by `vbfront_syntax::lexer`.
///
/// ## Errors
/// Returns the first [`SyntaxError`].
pub fn parse(tokens: &[Token]) -> Result<TranslationUnit, SyntaxError> {
    let mut context = ParseContext::new();
    parse_with_context(tokens, &mut context)
}

/// Parse a token stream using caller-owned per-parse state.
///
/// `context` may be pre-seeded with declared names and receives every forward declaration.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse_with_context(tokens: &[Token], context: &mut ParseContext) -> Result<TranslationUnit, SyntaxError> {
    Parser::new(tokens, context).parse()
}

/// Lex and parse a source string in one step.
pub fn parse_source(source: &str, context: &mut ParseContext) -> Result<TranslationUnit, FrontendError> {
    let tokens = crate::lexer::lex(source)?;
    Ok(parse_with_context(&tokens, context)?)
}
