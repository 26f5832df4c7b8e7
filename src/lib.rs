#![forbid(unsafe_code)]
//! vbfront: front end for a classic BASIC dialect
//!
//! This crate is the driver: command-line interface, configuration and diagnostic rendering. The tokenizer and the
//! declaration parser live in `vbfront_syntax`; the vocabulary registries in `vbfront_core`.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a bug (logic error), use `.expect("INVARIANT: reason")` with a
//!   clear explanation.

pub mod cli;
pub mod config;

pub use vbfront_syntax::ast;
pub use vbfront_syntax::diagnostics;
pub use vbfront_syntax::lexer;
pub use vbfront_syntax::parser;

pub use config::FrontendConfig;
