//! Language vocabulary registries.
//!
//! This module is the “front door” for language-level vocabulary: reserved keywords, legacy attribute names,
//! symbolic operators, and punctuation.
//!
//! The design goal is to avoid stringly-typed checks scattered across the front end. Callers work with **stable
//! IDs** (e.g. `KeywordId`, `OperatorId`) and look up spellings/metadata via registry tables.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no AST types, no IO, no side effects.
//! - The lexer/parser enforce syntax; registries provide spellings and metadata for shared use (diagnostics,
//!   token dumps).
//!
//! ## Examples
//! ```rust
//! use vbfront_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("Function"), Some(KeywordId::Function));
//! assert_eq!(keywords::as_str(KeywordId::Function), "Function");
//! ```

pub mod keywords;
pub mod operators;
pub mod punctuation;
pub mod reserved;
