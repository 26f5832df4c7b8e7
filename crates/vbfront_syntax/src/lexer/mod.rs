//! Lexer for the vbfront BASIC dialect
//!
//! Handles tokenization including:
//! - Reserved words (keywords and legacy form attribute names)
//! - Identifiers, decimal integers and string literals
//! - Operators and punctuation, one or two characters long
//! - Line structure: end-of-statement tokens, `'`/`REM` comments, `_` line continuations
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)
//! - `chars` - Character classes for the dispatch
//! - `strings` - String literal scanning
//! - `numbers` - Integer literal scanning
//! - `symbols` - Operator and punctuation scanning

pub mod chars;
mod numbers;
mod strings;
mod symbols;
pub mod tokens;

pub use tokens::{Token, TokenKind};

use crate::ast::Span;
use crate::diagnostics::LexicalError;
use vbfront_core::lang::keywords::KeywordId;
use vbfront_core::lang::operators::OperatorId;
use vbfront_core::lang::punctuation::PunctuationId;
use vbfront_core::lang::reserved::{self, ReservedWord};

/// Lexer for BASIC source text.
///
/// Converts source text into a stream of tokens. The stream contains no trivia: whitespace and comments are
/// dropped, and runs of line breaks collapse into a single [`TokenKind::Newline`]. A non-empty stream always ends
/// with a `Newline`. There is no end-of-file token.
///
/// A NUL character ends the input; anything after it is ignored.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        let source = source.split('\0').next().unwrap_or_default();
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source code, stopping at the first error.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexicalError> {
        while !self.is_at_end() {
            self.scan_token()?;
        }
        self.end_statement(Span::new(self.current_pos, self.current_pos));
        Ok(self.tokens)
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn is_at_end(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn advance(&mut self) -> Option<char> {
        if let Some((pos, c)) = self.chars.next() {
            self.current_pos = pos + c.len_utf8();
            Some(c)
        } else {
            None
        }
    }

    fn add_token(&mut self, kind: TokenKind, start: usize) {
        self.tokens.push(Token::new(kind, Span::new(start, self.current_pos)));
    }

    /// Emit an end-of-statement token unless the stream is empty or already ends one.
    fn end_statement(&mut self, span: Span) {
        match self.tokens.last() {
            None | Some(Token {
                kind: TokenKind::Newline,
                ..
            }) => {}
            Some(_) => self.tokens.push(Token::new(TokenKind::Newline, span)),
        }
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) -> Result<(), LexicalError> {
        let start = self.current_pos;
        let Some(c) = self.advance() else {
            return Ok(());
        };

        if chars::is_newline(c) {
            self.end_statement(Span::new(start, self.current_pos));
            Ok(())
        } else if chars::is_whitespace(c) {
            Ok(())
        } else if chars::is_quote(c) {
            self.scan_string(start)
        } else if chars::is_symbol_start(c) {
            self.scan_symbol(start, c)
        } else if chars::is_ident_start(c) {
            self.scan_identifier(start);
            Ok(())
        } else if chars::is_digit(c) {
            self.scan_number(start)
        } else {
            Err(LexicalError::invalid_character(c, Span::new(start, self.current_pos)))
        }
    }

    // ========================================================================
    // Identifiers and reserved words
    // ========================================================================

    fn scan_identifier(&mut self, start: usize) {
        while self.peek().is_some_and(chars::is_ident_continue) {
            self.advance();
        }

        let spelling = &self.source[start..self.current_pos];
        if spelling == "_" {
            if let Some(len) = self.line_continuation_len() {
                let end = self.current_pos + len;
                while self.current_pos < end {
                    self.advance();
                }
                return;
            }
        }

        let kind = match reserved::lookup(spelling) {
            Some(ReservedWord::Keyword(KeywordId::Rem)) => {
                self.skip_comment();
                return;
            }
            Some(ReservedWord::Keyword(id)) => TokenKind::Keyword(id),
            Some(ReservedWord::Attribute) => TokenKind::Attribute,
            None => TokenKind::Ident(spelling.to_string()),
        };
        self.add_token(kind, start);
    }

    /// Length of the trailing whitespace and line feed after a `_`, if the `_` ends its line.
    fn line_continuation_len(&self) -> Option<usize> {
        let rest = &self.source[self.current_pos..];
        let after_ws = rest.trim_start_matches(chars::is_whitespace);
        let ws = rest.len() - after_ws.len();

        if after_ws.is_empty() {
            Some(ws)
        } else if after_ws.starts_with('\n') {
            Some(ws + 1)
        } else {
            None
        }
    }

    /// Skip to (not past) the end of the current line.
    fn skip_comment(&mut self) {
        while self.peek().is_some_and(|c| !chars::is_newline(c)) {
            self.advance();
        }
    }
}

/// Convenience function to lex a source string.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, LexicalError> {
    Lexer::new(source).tokenize()
}

// ============================================================================
// TESTS
// ============================================================================
