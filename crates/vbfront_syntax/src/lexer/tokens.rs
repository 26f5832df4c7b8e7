//! Token types for the vbfront lexer.
//!
//! The lexer uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words
//! - `Operator(OperatorId)` for symbolic operators
//! - `Punctuation(PunctuationId)` for punctuation tokens
//!
//! ## Notes
//! - Legacy form attribute names (`Caption`, `StartUpPosition`, ...) are reserved but carry no ID; they lex as
//!   [`TokenKind::Attribute`].
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use std::fmt;

use crate::ast::Span;
use vbfront_core::lang::keywords::{self, KeywordId};
use vbfront_core::lang::operators::{self, OperatorId};
use vbfront_core::lang::punctuation::{self, PunctuationId};

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    // ========== Keyword / operator / punctuation (ID-based) ==========
    Keyword(KeywordId),
    Attribute,
    Operator(OperatorId),
    Punctuation(PunctuationId),

    // ========== Identifiers and Literals ==========
    Ident(String),
    Int(i64),
    /// String body without the quotes; escapes are kept verbatim.
    String(String),

    // ========== Layout ==========
    /// End of a logical statement (one or more line breaks).
    Newline,
}

/// A token with its kind and source span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Keyword(id) => write!(f, "'{}'", keywords::as_str(*id)),
            TokenKind::Attribute => write!(f, "attribute name"),
            TokenKind::Operator(id) => write!(f, "'{}'", operators::as_str(*id)),
            TokenKind::Punctuation(id) => write!(f, "'{}'", punctuation::as_str(*id)),
            TokenKind::Ident(name) => write!(f, "identifier '{name}'"),
            TokenKind::Int(value) => write!(f, "number {value}"),
            TokenKind::String(text) => write!(f, "string \"{text}\""),
            TokenKind::Newline => write!(f, "end of statement"),
        }
    }
}
