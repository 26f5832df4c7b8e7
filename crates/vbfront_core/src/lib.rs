//! Canonical language vocabulary for the vbfront BASIC dialect.
//!
//! This crate is intentionally small and dependency-free. It holds the registries both the tokenizer and the
//! diagnostics layer consult: keywords, the legacy form attribute names, symbolic operators and punctuation.
//!
//! ## Notes
//!
//! - This is a “vocabulary” crate: **no IO**, no mutable global state, and no syntax-tree types.
//! - The only shared state is the reserved-word lookup table, built once and read-only afterwards, which makes it
//!   safe to use from concurrent parses.

pub mod lang;
