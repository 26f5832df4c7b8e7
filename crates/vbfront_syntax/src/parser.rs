//! Declaration parser for the vbfront BASIC dialect
//!
//! Converts a token stream into a [`TranslationUnit`]. Each external declaration is first classified by shape
//! (function definition, forward declaration, or data declaration) with a bounded look-ahead, then handed to the
//! matching production.
//!
//! ## Examples
//!
//! ```rust
//! use vbfront_syntax::{lexer, parser};
//!
//! let source = "Public Sub Main() (\n  Beep\nEnd Sub\n";
//! let tokens = lexer::lex(source).unwrap();
//! let unit = parser::parse(&tokens).unwrap();
//! assert_eq!(unit.declarations.len(), 1);
//! ```

use std::collections::HashSet;

use crate::ast::*;
use crate::diagnostics::{Construct, FrontendError, SyntaxError};
use crate::lexer::{Token, TokenKind};
use vbfront_core::lang::keywords::KeywordId;
use vbfront_core::lang::operators::OperatorId;
use vbfront_core::lang::punctuation::PunctuationId;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/shape.rs");
include!("parser/decl.rs");
include!("parser/declarator.rs");
include!("parser/body.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
