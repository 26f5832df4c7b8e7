//! The reserved-word table: every spelling the tokenizer must not treat as a plain identifier.
//!
//! Two vocabularies share the table:
//! - language keywords from [`crate::lang::keywords`], each with its own [`KeywordId`];
//! - legacy form/UI attribute names ([`ATTRIBUTE_NAMES`], e.g. `BackColor`, `Caption`), which all collapse into
//!   the single [`ReservedWord::Attribute`] kind so the parser can skip them.
//!
//! ## Notes
//! - The table is a `HashMap` built once on first use and shared read-only afterwards, so lookups are exact-length,
//!   case-sensitive and independent of registry ordering.
//!
//! ## Examples
//! ```rust
//! use vbfront_core::lang::keywords::KeywordId;
//! use vbfront_core::lang::reserved::{self, ReservedWord};
//!
//! assert_eq!(reserved::lookup("IsNot"), Some(ReservedWord::Keyword(KeywordId::IsNot)));
//! assert_eq!(reserved::lookup("Caption"), Some(ReservedWord::Attribute));
//! assert_eq!(reserved::lookup("Integer2"), None);
//! ```

use std::collections::HashMap;
use std::sync::LazyLock;

use super::keywords::{KEYWORDS, KeywordId};

/// What a reserved spelling resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReservedWord {
    Keyword(KeywordId),
    /// A legacy form/UI attribute name; carries no meaning for the front end.
    Attribute,
}

/// Legacy form designer attribute names.
pub const ATTRIBUTE_NAMES: &[&str] = &[
    "Appearance",
    "AutoRedraw",
    "BackColor",
    "BorderStyle",
    "Caption",
    "ClipControls",
    "ControlBox",
    "DrawMode",
    "DrawStyle",
    "DrawWidth",
    "Enabled",
    "FillColor",
    "FillStyle",
    "Font",
    "FontTransparent",
    "ForeColor",
    "HasDC",
    "Height",
    "HelpContextID",
    "KeyPreview",
    "Left",
    "LinkMode",
    "LinkTopic",
    "MaxButton",
    "MDIChild",
    "MinButton",
    "MouseIcon",
    "MousePointer",
    "Moveable",
    "NegotiateMenu",
    "OLEDropMode",
    "Palette",
    "PaletteMode",
    "Picture",
    "RightToLeft",
    "ScaleHeight",
    "ScaleLeft",
    "ScaleMode",
    "ScaleTop",
    "ScaleWidth",
    "ShowInTaskbar",
    "StartUpPosition",
    "Tag",
    "Top",
    "Visible",
    "WhatsThisButton",
    "Width",
    "WindowState",
];

static TABLE: LazyLock<HashMap<&'static str, ReservedWord>> = LazyLock::new(|| {
    let mut table = HashMap::with_capacity(KEYWORDS.len() + ATTRIBUTE_NAMES.len());
    for info in KEYWORDS {
        table.insert(info.canonical, ReservedWord::Keyword(info.id));
    }
    for &name in ATTRIBUTE_NAMES {
        table.insert(name, ReservedWord::Attribute);
    }
    table
});

/// Resolve a complete identifier-shaped spelling against the table.
///
/// ## Returns
/// - `Some(ReservedWord)` if the whole of `spelling` is reserved.
/// - `None` if it is an ordinary identifier.
pub fn lookup(spelling: &str) -> Option<ReservedWord> {
    TABLE.get(spelling).copied()
}

/// Return `true` if `spelling` is one of the legacy attribute names.
pub fn is_attribute_name(spelling: &str) -> bool {
    matches!(lookup(spelling), Some(ReservedWord::Attribute))
}

/// Number of distinct reserved spellings.
pub fn len() -> usize {
    TABLE.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_every_spelling() {
        assert_eq!(len(), KEYWORDS.len() + ATTRIBUTE_NAMES.len());
    }

    #[test]
    fn test_attribute_lookup() {
        assert!(is_attribute_name("BackColor"));
        assert!(is_attribute_name("WindowState"));
        assert!(!is_attribute_name("Dim"));
        assert!(!is_attribute_name("backcolor"));
    }

    #[test]
    fn test_full_spelling_required_for_attributes() {
        // `StartUpPosition` must not match on its first five characters.
        assert_eq!(lookup("Start"), None);
        assert_eq!(lookup("StartUpPosition"), Some(ReservedWord::Attribute));
        assert_eq!(lookup("Top"), Some(ReservedWord::Attribute));
        assert_eq!(lookup("TopMost"), None);
    }
}
