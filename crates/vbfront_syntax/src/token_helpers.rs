//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites and to make it easy
//! to work with ID-based tokens.

use crate::lexer::{Token, TokenKind};
use vbfront_core::lang::keywords::KeywordId;
use vbfront_core::lang::operators::OperatorId;
use vbfront_core::lang::punctuation::PunctuationId;

impl TokenKind {
    /// Return the keyword id, if this is a keyword token.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self {
            TokenKind::Keyword(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    /// Return `true` if this is the given operator.
    pub fn is_operator(&self, id: OperatorId) -> bool {
        matches!(self, TokenKind::Operator(o) if *o == id)
    }

    /// Return `true` if this is the given punctuation.
    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        matches!(self, TokenKind::Punctuation(p) if *p == id)
    }

    pub fn is_end_of_statement(&self) -> bool {
        matches!(self, TokenKind::Newline)
    }

    /// Return `true` for a keyword that opens a procedure header (`Function`, `Sub`, `Property`, `Declare`).
    pub fn is_procedure_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Keyword(KeywordId::Function | KeywordId::Sub | KeywordId::Property | KeywordId::Declare)
        )
    }

    /// Return the identifier name, if this is an identifier token.
    pub fn ident(&self) -> Option<&str> {
        match self {
            TokenKind::Ident(name) => Some(name),
            _ => None,
        }
    }

    /// Text payload of identifier and string tokens.
    pub fn text(&self) -> Option<&str> {
        match self {
            TokenKind::Ident(text) | TokenKind::String(text) => Some(text),
            _ => None,
        }
    }
}

impl Token {
    /// Convenience wrapper for `self.kind.keyword_id()`.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        self.kind.keyword_id()
    }

    /// Convenience wrapper for `self.kind.is_keyword(id)`.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        self.kind.is_keyword(id)
    }

    /// Convenience wrapper for `self.kind.is_punctuation(id)`.
    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        self.kind.is_punctuation(id)
    }

    /// Convenience wrapper for `self.kind.is_end_of_statement()`.
    pub fn is_end_of_statement(&self) -> bool {
        self.kind.is_end_of_statement()
    }
}

/// Render a run of tokens back to compact source-like text (used for raw initializers and statements).
///
/// Tokens are joined with single spaces, except around `.` and before `(`, `)` and `,`.
pub fn render_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    let mut prev: Option<&TokenKind> = None;

    for token in tokens {
        if token.kind.is_end_of_statement() {
            continue;
        }
        let glue = prev.is_none_or(|p| p.is_punctuation(PunctuationId::Dot) || p.is_punctuation(PunctuationId::LParen))
            || token.kind.is_punctuation(PunctuationId::Dot)
            || token.kind.is_punctuation(PunctuationId::RParen)
            || token.kind.is_punctuation(PunctuationId::Comma)
            || (token.kind.is_punctuation(PunctuationId::LParen) && prev.is_some_and(|p| p.ident().is_some()));
        if !glue {
            out.push(' ');
        }
        out.push_str(&token_text(&token.kind));
        prev = Some(&token.kind);
    }
    out
}

fn token_text(kind: &TokenKind) -> String {
    use vbfront_core::lang::{keywords, operators, punctuation};

    match kind {
        TokenKind::Keyword(id) => keywords::as_str(*id).to_string(),
        TokenKind::Attribute => "<attribute>".to_string(),
        TokenKind::Operator(id) => operators::as_str(*id).to_string(),
        TokenKind::Punctuation(id) => punctuation::as_str(*id).to_string(),
        TokenKind::Ident(name) => name.clone(),
        TokenKind::Int(value) => value.to_string(),
        TokenKind::String(text) => format!("\"{text}\""),
        TokenKind::Newline => String::new(),
    }
}
