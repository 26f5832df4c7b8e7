//! Symbolic operator vocabulary.
//!
//! Word operators (`And`, `Mod`, `IsNot`, ...) are keywords and live in [`crate::lang::keywords`]; this registry
//! only covers the operators spelled with symbols.
//!
//! ## Notes
//! - Every spelling is one or two characters long. The lexer resolves two-character forms by maximal munch.
//!
//! ## Examples
//! ```rust
//! use vbfront_core::lang::operators::{self, OperatorId};
//!
//! assert_eq!(operators::from_str("<>"), Some(OperatorId::NotEq));
//! assert_eq!(operators::as_str(OperatorId::ShiftLeft), "<<");
//! ```

/// Broad grouping for operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorCategory {
    Arithmetic,
    Comparison,
    Shift,
    /// `=` doubles as assignment and equality; the parser decides.
    Assignment,
    CompoundAssignment,
    Concatenation,
}

/// Stable identifier for symbolic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,
    /// `\` (integer division)
    Backslash,
    /// `^` (exponentiation)
    Caret,

    // Concatenation
    Ampersand,

    // Assignment / equality
    Eq,

    // Comparison
    Lt,
    Gt,
    LtEq,
    GtEq,
    NotEq,

    // Shift
    ShiftLeft,
    ShiftRight,

    // Compound assignment
    PlusEq,
    MinusEq,
    StarEq,
    SlashEq,
    CaretEq,
    AmpersandEq,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub canonical: &'static str,
    pub category: OperatorCategory,
}

/// Registry of all symbolic operators.
pub const OPERATORS: &[OperatorInfo] = &[
    info(OperatorId::Plus, "+", OperatorCategory::Arithmetic),
    info(OperatorId::Minus, "-", OperatorCategory::Arithmetic),
    info(OperatorId::Star, "*", OperatorCategory::Arithmetic),
    info(OperatorId::Slash, "/", OperatorCategory::Arithmetic),
    info(OperatorId::Backslash, "\\", OperatorCategory::Arithmetic),
    info(OperatorId::Caret, "^", OperatorCategory::Arithmetic),
    info(OperatorId::Ampersand, "&", OperatorCategory::Concatenation),
    info(OperatorId::Eq, "=", OperatorCategory::Assignment),
    info(OperatorId::Lt, "<", OperatorCategory::Comparison),
    info(OperatorId::Gt, ">", OperatorCategory::Comparison),
    info(OperatorId::LtEq, "<=", OperatorCategory::Comparison),
    info(OperatorId::GtEq, ">=", OperatorCategory::Comparison),
    info(OperatorId::NotEq, "<>", OperatorCategory::Comparison),
    info(OperatorId::ShiftLeft, "<<", OperatorCategory::Shift),
    info(OperatorId::ShiftRight, ">>", OperatorCategory::Shift),
    info(OperatorId::PlusEq, "+=", OperatorCategory::CompoundAssignment),
    info(OperatorId::MinusEq, "-=", OperatorCategory::CompoundAssignment),
    info(OperatorId::StarEq, "*=", OperatorCategory::CompoundAssignment),
    info(OperatorId::SlashEq, "/=", OperatorCategory::CompoundAssignment),
    info(OperatorId::CaretEq, "^=", OperatorCategory::CompoundAssignment),
    info(OperatorId::AmpersandEq, "&=", OperatorCategory::CompoundAssignment),
];

/// Return the canonical spelling for an operator.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).canonical
}

/// Return the category for an operator.
pub fn category(id: OperatorId) -> OperatorCategory {
    info_for(id).category
}

/// Return the full metadata entry for an operator.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS.iter().find(|o| o.id == id).expect("operator info missing")
}

/// Resolve an operator spelling to its identifier.
pub fn from_str(s: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.canonical == s).map(|o| o.id)
}

const fn info(id: OperatorId, canonical: &'static str, category: OperatorCategory) -> OperatorInfo {
    OperatorInfo { id, canonical, category }
}
