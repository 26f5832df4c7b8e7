//! Front-end errors: lexical and syntax failures, rendered through `miette`.
//!
//! Both stages fail fast, so each carries exactly one diagnostic. [`FrontendError`] is what the combined
//! `lex + parse` entrypoints return.

use std::fmt;

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::ast::Span;

impl From<Span> for SourceSpan {
    fn from(span: Span) -> Self {
        (span.start, span.len()).into()
    }
}

// ============================================================================
// Lexical errors
// ============================================================================

/// What went wrong while tokenizing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexicalErrorKind {
    #[error("invalid character '{0}'")]
    InvalidCharacter(char),
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("integer literal {0} does not fit in 64 bits")]
    IntegerOverflow(String),
    #[error("unrecognized symbol '{0}'")]
    UnrecognizedSymbol(char),
}

/// A tokenizer failure, located at the offending character.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{kind} at offset {offset}")]
#[diagnostic(code(vbfront::lex))]
pub struct LexicalError {
    pub kind: LexicalErrorKind,
    /// Byte offset of the offending character (the opening quote for unterminated strings).
    pub offset: usize,
    pub character: char,
    #[label("here")]
    pub span: Span,
}

impl LexicalError {
    pub fn invalid_character(character: char, span: Span) -> Self {
        Self {
            kind: LexicalErrorKind::InvalidCharacter(character),
            offset: span.start,
            character,
            span,
        }
    }

    pub fn unterminated_string(span: Span) -> Self {
        Self {
            kind: LexicalErrorKind::UnterminatedString,
            offset: span.start,
            character: '"',
            span,
        }
    }

    pub fn integer_overflow(digits: &str, span: Span) -> Self {
        Self {
            kind: LexicalErrorKind::IntegerOverflow(digits.to_string()),
            offset: span.start,
            character: digits.chars().next().unwrap_or('0'),
            span,
        }
    }

    pub fn unrecognized_symbol(character: char, span: Span) -> Self {
        Self {
            kind: LexicalErrorKind::UnrecognizedSymbol(character),
            offset: span.start,
            character,
            span,
        }
    }
}

// ============================================================================
// Syntax errors
// ============================================================================

/// The grammar construct that failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Construct {
    DeclarationSpecifier,
    Declarator,
    CompoundStatement,
    InitializeDeclarator,
    ExternalDeclaration,
}

impl Construct {
    pub fn as_str(self) -> &'static str {
        match self {
            Construct::DeclarationSpecifier => "declaration-specifier",
            Construct::Declarator => "declarator",
            Construct::CompoundStatement => "compound-statement",
            Construct::InitializeDeclarator => "initialize-declarator",
            Construct::ExternalDeclaration => "external-declaration",
        }
    }
}

impl fmt::Display for Construct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parser failure: which construct was being parsed and where it broke.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("could not parse {construct} at token {index}: {message}")]
#[diagnostic(code(vbfront::parse))]
pub struct SyntaxError {
    pub construct: Construct,
    /// Index of the offending token in the token sequence (equal to its length at end of input).
    pub index: usize,
    pub message: String,
    #[label("in this {construct}")]
    pub span: Span,
}

impl SyntaxError {
    pub fn new(construct: Construct, index: usize, message: impl Into<String>, span: Span) -> Self {
        Self {
            construct,
            index,
            message: message.into(),
            span,
        }
    }
}

// ============================================================================
// Combined
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum FrontendError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Lexical(#[from] LexicalError),
    #[error(transparent)]
    #[diagnostic(transparent)]
    Syntax(#[from] SyntaxError),
}

impl FrontendError {
    pub fn span(&self) -> Span {
        match self {
            FrontendError::Lexical(err) => err.span,
            FrontendError::Syntax(err) => err.span,
        }
    }
}
