//! Syntax front end for the vbfront BASIC dialect: lexer, declaration parser, AST, diagnostics.
//!
//! ## Notes
//! - This crate is intentionally “syntax-only”: it recognizes the top-level shape of a translation unit (function
//!   definitions, forward declarations, data declarations). Statement bodies and initializer expressions are kept as
//!   raw token runs.
//! - Vocabulary identity (keywords/operators/punctuation) comes from `vbfront_core::lang` registries.
//! - Both stages fail fast: the first lexical or syntax error aborts the run.
//!
//! ## Examples
//! ```rust
//! use vbfront_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("Dim x As Integer\n").unwrap();
//! let unit = parser::parse(&tokens).unwrap();
//! assert_eq!(unit.declarations.len(), 1);
//! ```

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;
