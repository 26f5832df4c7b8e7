//! Define the reserved keyword vocabulary of the language.
//!
//! This module is the single source of truth for keywords: a stable identifier ([`KeywordId`]) plus a const
//! metadata table ([`KEYWORDS`]) that records canonical spellings and categories.
//!
//! ## Notes
//! - Spellings are **case-sensitive** and matched on their full length (`Integer2` is not `Integer`, `IsNot` is
//!   not `Is`). Lookup goes through [`crate::lang::reserved`], which also knows the legacy form attributes.
//! - This registry is intentionally **pure** (no AST/IO/side effects).
//!
//! ## Examples
//! ```rust
//! use vbfront_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("Dim"), Some(KeywordId::Dim));
//! assert_eq!(keywords::as_str(KeywordId::IsNot), "IsNot");
//! assert_eq!(keywords::from_str("dim"), None);
//! ```

use super::reserved::{self, ReservedWord};

/// Stable identifier for every reserved keyword.
///
/// ## Notes
/// - The canonical spelling is accessible via [`as_str`].
/// - Variants follow the source spelling, except `REM` which is spelled `Rem` here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    AddHandler,
    AddressOf,
    Alias,
    And,
    AndAlso,
    As,
    Boolean,
    ByRef,
    Byte,
    ByVal,
    Call,
    Case,
    Catch,
    CBool,
    CByte,
    CChar,
    CDate,
    CDbl,
    CDec,
    Char,
    CInt,
    Class,
    CLng,
    CObj,
    Const,
    Continue,
    CSByte,
    CShort,
    CSng,
    CStr,
    CType,
    CUInt,
    CULng,
    CUShort,
    Date,
    Decimal,
    Declare,
    Default,
    Delegate,
    Dim,
    DirectCast,
    Do,
    Double,
    Each,
    Else,
    ElseIf,
    End,
    EndIf,
    Enum,
    Erase,
    Error,
    Event,
    Exit,
    False,
    Finally,
    For,
    Friend,
    Function,
    Get,
    GetType,
    GetXMLNamespace,
    Global,
    GoSub,
    GoTo,
    Handles,
    If,
    Implements,
    Imports,
    In,
    Inherits,
    Integer,
    Interface,
    Is,
    IsNot,
    Let,
    Lib,
    Like,
    Long,
    Loop,
    Me,
    Mod,
    Module,
    MustInherit,
    MustOverride,
    MyBase,
    MyClass,
    Namespace,
    Narrowing,
    New,
    Next,
    Not,
    Nothing,
    NotInheritable,
    NotOverridable,
    Object,
    Of,
    On,
    Operator,
    Option,
    Optional,
    Or,
    OrElse,
    Out,
    Overloads,
    Overridable,
    Overrides,
    ParamArray,
    Partial,
    Private,
    Property,
    Protected,
    Public,
    RaiseEvent,
    ReadOnly,
    ReDim,
    Rem,
    RemoveHandler,
    Resume,
    Return,
    SByte,
    Select,
    Set,
    Shadows,
    Shared,
    Short,
    Single,
    Static,
    Step,
    Stop,
    String,
    Structure,
    Sub,
    SyncLock,
    Then,
    Throw,
    To,
    True,
    Try,
    TryCast,
    UInteger,
    ULong,
    UShort,
    Using,
    Variant,
    Wend,
    When,
    While,
    Widening,
    With,
    WithEvents,
    WriteOnly,
    Xor,
}

/// High-level grouping for documentation and diagnostics.
///
/// ## Notes
/// - Categories are metadata only; the parser decides what is legal where.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    /// Branching, looping and block terminators (`If`, `For`, `End`, ...).
    ControlFlow,
    /// Words that introduce or shape a declaration (`Function`, `Declare`, `As`, ...).
    Declaration,
    /// Storage, visibility and inheritance modifiers (`Dim`, `Public`, `ByVal`, ...).
    Modifier,
    /// Builtin type names (`Integer`, `String`, ...).
    Type,
    /// Conversion functions (`CInt`, `CStr`, `DirectCast`, ...).
    Conversion,
    /// Word operators (`And`, `Mod`, `IsNot`, ...).
    Operator,
    /// Literal-like words (`True`, `Nothing`, `Me`, ...).
    Literal,
    /// Standalone statements (`Call`, `Erase`, `REM`, ...).
    Statement,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
}

/// Registry of all keywords.
///
/// ## Notes
/// - The ordering is not semantically meaningful; lookups never scan this table in order.
pub const KEYWORDS: &[KeywordInfo] = &[
    kw(KeywordId::AddHandler, "AddHandler", KeywordCategory::Statement),
    kw(KeywordId::AddressOf, "AddressOf", KeywordCategory::Operator),
    kw(KeywordId::Alias, "Alias", KeywordCategory::Declaration),
    kw(KeywordId::And, "And", KeywordCategory::Operator),
    kw(KeywordId::AndAlso, "AndAlso", KeywordCategory::Operator),
    kw(KeywordId::As, "As", KeywordCategory::Declaration),
    kw(KeywordId::Boolean, "Boolean", KeywordCategory::Type),
    kw(KeywordId::ByRef, "ByRef", KeywordCategory::Modifier),
    kw(KeywordId::Byte, "Byte", KeywordCategory::Type),
    kw(KeywordId::ByVal, "ByVal", KeywordCategory::Modifier),
    kw(KeywordId::Call, "Call", KeywordCategory::Statement),
    kw(KeywordId::Case, "Case", KeywordCategory::ControlFlow),
    kw(KeywordId::Catch, "Catch", KeywordCategory::ControlFlow),
    kw(KeywordId::CBool, "CBool", KeywordCategory::Conversion),
    kw(KeywordId::CByte, "CByte", KeywordCategory::Conversion),
    kw(KeywordId::CChar, "CChar", KeywordCategory::Conversion),
    kw(KeywordId::CDate, "CDate", KeywordCategory::Conversion),
    kw(KeywordId::CDbl, "CDbl", KeywordCategory::Conversion),
    kw(KeywordId::CDec, "CDec", KeywordCategory::Conversion),
    kw(KeywordId::Char, "Char", KeywordCategory::Type),
    kw(KeywordId::CInt, "CInt", KeywordCategory::Conversion),
    kw(KeywordId::Class, "Class", KeywordCategory::Declaration),
    kw(KeywordId::CLng, "CLng", KeywordCategory::Conversion),
    kw(KeywordId::CObj, "CObj", KeywordCategory::Conversion),
    kw(KeywordId::Const, "Const", KeywordCategory::Modifier),
    kw(KeywordId::Continue, "Continue", KeywordCategory::ControlFlow),
    kw(KeywordId::CSByte, "CSByte", KeywordCategory::Conversion),
    kw(KeywordId::CShort, "CShort", KeywordCategory::Conversion),
    kw(KeywordId::CSng, "CSng", KeywordCategory::Conversion),
    kw(KeywordId::CStr, "CStr", KeywordCategory::Conversion),
    kw(KeywordId::CType, "CType", KeywordCategory::Conversion),
    kw(KeywordId::CUInt, "CUInt", KeywordCategory::Conversion),
    kw(KeywordId::CULng, "CULng", KeywordCategory::Conversion),
    kw(KeywordId::CUShort, "CUShort", KeywordCategory::Conversion),
    kw(KeywordId::Date, "Date", KeywordCategory::Type),
    kw(KeywordId::Decimal, "Decimal", KeywordCategory::Type),
    kw(KeywordId::Declare, "Declare", KeywordCategory::Declaration),
    kw(KeywordId::Default, "Default", KeywordCategory::Modifier),
    kw(KeywordId::Delegate, "Delegate", KeywordCategory::Declaration),
    kw(KeywordId::Dim, "Dim", KeywordCategory::Modifier),
    kw(KeywordId::DirectCast, "DirectCast", KeywordCategory::Conversion),
    kw(KeywordId::Do, "Do", KeywordCategory::ControlFlow),
    kw(KeywordId::Double, "Double", KeywordCategory::Type),
    kw(KeywordId::Each, "Each", KeywordCategory::ControlFlow),
    kw(KeywordId::Else, "Else", KeywordCategory::ControlFlow),
    kw(KeywordId::ElseIf, "ElseIf", KeywordCategory::ControlFlow),
    kw(KeywordId::End, "End", KeywordCategory::ControlFlow),
    kw(KeywordId::EndIf, "EndIf", KeywordCategory::ControlFlow),
    kw(KeywordId::Enum, "Enum", KeywordCategory::Declaration),
    kw(KeywordId::Erase, "Erase", KeywordCategory::Statement),
    kw(KeywordId::Error, "Error", KeywordCategory::Statement),
    kw(KeywordId::Event, "Event", KeywordCategory::Declaration),
    kw(KeywordId::Exit, "Exit", KeywordCategory::ControlFlow),
    kw(KeywordId::False, "False", KeywordCategory::Literal),
    kw(KeywordId::Finally, "Finally", KeywordCategory::ControlFlow),
    kw(KeywordId::For, "For", KeywordCategory::ControlFlow),
    kw(KeywordId::Friend, "Friend", KeywordCategory::Modifier),
    kw(KeywordId::Function, "Function", KeywordCategory::Declaration),
    kw(KeywordId::Get, "Get", KeywordCategory::Declaration),
    kw(KeywordId::GetType, "GetType", KeywordCategory::Operator),
    kw(KeywordId::GetXMLNamespace, "GetXMLNamespace", KeywordCategory::Operator),
    kw(KeywordId::Global, "Global", KeywordCategory::Modifier),
    kw(KeywordId::GoSub, "GoSub", KeywordCategory::ControlFlow),
    kw(KeywordId::GoTo, "GoTo", KeywordCategory::ControlFlow),
    kw(KeywordId::Handles, "Handles", KeywordCategory::Declaration),
    kw(KeywordId::If, "If", KeywordCategory::ControlFlow),
    kw(KeywordId::Implements, "Implements", KeywordCategory::Declaration),
    kw(KeywordId::Imports, "Imports", KeywordCategory::Declaration),
    kw(KeywordId::In, "In", KeywordCategory::ControlFlow),
    kw(KeywordId::Inherits, "Inherits", KeywordCategory::Declaration),
    kw(KeywordId::Integer, "Integer", KeywordCategory::Type),
    kw(KeywordId::Interface, "Interface", KeywordCategory::Declaration),
    kw(KeywordId::Is, "Is", KeywordCategory::Operator),
    kw(KeywordId::IsNot, "IsNot", KeywordCategory::Operator),
    kw(KeywordId::Let, "Let", KeywordCategory::Statement),
    kw(KeywordId::Lib, "Lib", KeywordCategory::Declaration),
    kw(KeywordId::Like, "Like", KeywordCategory::Operator),
    kw(KeywordId::Long, "Long", KeywordCategory::Type),
    kw(KeywordId::Loop, "Loop", KeywordCategory::ControlFlow),
    kw(KeywordId::Me, "Me", KeywordCategory::Literal),
    kw(KeywordId::Mod, "Mod", KeywordCategory::Operator),
    kw(KeywordId::Module, "Module", KeywordCategory::Declaration),
    kw(KeywordId::MustInherit, "MustInherit", KeywordCategory::Modifier),
    kw(KeywordId::MustOverride, "MustOverride", KeywordCategory::Modifier),
    kw(KeywordId::MyBase, "MyBase", KeywordCategory::Literal),
    kw(KeywordId::MyClass, "MyClass", KeywordCategory::Literal),
    kw(KeywordId::Namespace, "Namespace", KeywordCategory::Declaration),
    kw(KeywordId::Narrowing, "Narrowing", KeywordCategory::Modifier),
    kw(KeywordId::New, "New", KeywordCategory::Operator),
    kw(KeywordId::Next, "Next", KeywordCategory::ControlFlow),
    kw(KeywordId::Not, "Not", KeywordCategory::Operator),
    kw(KeywordId::Nothing, "Nothing", KeywordCategory::Literal),
    kw(KeywordId::NotInheritable, "NotInheritable", KeywordCategory::Modifier),
    kw(KeywordId::NotOverridable, "NotOverridable", KeywordCategory::Modifier),
    kw(KeywordId::Object, "Object", KeywordCategory::Type),
    kw(KeywordId::Of, "Of", KeywordCategory::Declaration),
    kw(KeywordId::On, "On", KeywordCategory::ControlFlow),
    kw(KeywordId::Operator, "Operator", KeywordCategory::Declaration),
    kw(KeywordId::Option, "Option", KeywordCategory::Statement),
    kw(KeywordId::Optional, "Optional", KeywordCategory::Modifier),
    kw(KeywordId::Or, "Or", KeywordCategory::Operator),
    kw(KeywordId::OrElse, "OrElse", KeywordCategory::Operator),
    kw(KeywordId::Out, "Out", KeywordCategory::Modifier),
    kw(KeywordId::Overloads, "Overloads", KeywordCategory::Modifier),
    kw(KeywordId::Overridable, "Overridable", KeywordCategory::Modifier),
    kw(KeywordId::Overrides, "Overrides", KeywordCategory::Modifier),
    kw(KeywordId::ParamArray, "ParamArray", KeywordCategory::Modifier),
    kw(KeywordId::Partial, "Partial", KeywordCategory::Modifier),
    kw(KeywordId::Private, "Private", KeywordCategory::Modifier),
    kw(KeywordId::Property, "Property", KeywordCategory::Declaration),
    kw(KeywordId::Protected, "Protected", KeywordCategory::Modifier),
    kw(KeywordId::Public, "Public", KeywordCategory::Modifier),
    kw(KeywordId::RaiseEvent, "RaiseEvent", KeywordCategory::Statement),
    kw(KeywordId::ReadOnly, "ReadOnly", KeywordCategory::Modifier),
    kw(KeywordId::ReDim, "ReDim", KeywordCategory::Modifier),
    kw(KeywordId::Rem, "REM", KeywordCategory::Statement),
    kw(KeywordId::RemoveHandler, "RemoveHandler", KeywordCategory::Statement),
    kw(KeywordId::Resume, "Resume", KeywordCategory::ControlFlow),
    kw(KeywordId::Return, "Return", KeywordCategory::ControlFlow),
    kw(KeywordId::SByte, "SByte", KeywordCategory::Type),
    kw(KeywordId::Select, "Select", KeywordCategory::ControlFlow),
    kw(KeywordId::Set, "Set", KeywordCategory::Declaration),
    kw(KeywordId::Shadows, "Shadows", KeywordCategory::Modifier),
    kw(KeywordId::Shared, "Shared", KeywordCategory::Modifier),
    kw(KeywordId::Short, "Short", KeywordCategory::Type),
    kw(KeywordId::Single, "Single", KeywordCategory::Type),
    kw(KeywordId::Static, "Static", KeywordCategory::Modifier),
    kw(KeywordId::Step, "Step", KeywordCategory::ControlFlow),
    kw(KeywordId::Stop, "Stop", KeywordCategory::ControlFlow),
    kw(KeywordId::String, "String", KeywordCategory::Type),
    kw(KeywordId::Structure, "Structure", KeywordCategory::Declaration),
    kw(KeywordId::Sub, "Sub", KeywordCategory::Declaration),
    kw(KeywordId::SyncLock, "SyncLock", KeywordCategory::Statement),
    kw(KeywordId::Then, "Then", KeywordCategory::ControlFlow),
    kw(KeywordId::Throw, "Throw", KeywordCategory::ControlFlow),
    kw(KeywordId::To, "To", KeywordCategory::ControlFlow),
    kw(KeywordId::True, "True", KeywordCategory::Literal),
    kw(KeywordId::Try, "Try", KeywordCategory::ControlFlow),
    kw(KeywordId::TryCast, "TryCast", KeywordCategory::Conversion),
    kw(KeywordId::UInteger, "UInteger", KeywordCategory::Type),
    kw(KeywordId::ULong, "ULong", KeywordCategory::Type),
    kw(KeywordId::UShort, "UShort", KeywordCategory::Type),
    kw(KeywordId::Using, "Using", KeywordCategory::Statement),
    kw(KeywordId::Variant, "Variant", KeywordCategory::Type),
    kw(KeywordId::Wend, "Wend", KeywordCategory::ControlFlow),
    kw(KeywordId::When, "When", KeywordCategory::ControlFlow),
    kw(KeywordId::While, "While", KeywordCategory::ControlFlow),
    kw(KeywordId::Widening, "Widening", KeywordCategory::Modifier),
    kw(KeywordId::With, "With", KeywordCategory::Statement),
    kw(KeywordId::WithEvents, "WithEvents", KeywordCategory::Modifier),
    kw(KeywordId::WriteOnly, "WriteOnly", KeywordCategory::Modifier),
    kw(KeywordId::Xor, "Xor", KeywordCategory::Operator),
];

/// Canonical spelling.
///
/// ## Parameters
/// - `id`: Keyword identifier.
///
/// ## Returns
/// - The canonical spelling for `id`.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Lookup by exact spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if `s` is a keyword.
/// - `None` for identifiers and for legacy attribute names (see [`reserved::lookup`]).
pub fn from_str(s: &str) -> Option<KeywordId> {
    match reserved::lookup(s) {
        Some(ReservedWord::Keyword(id)) => Some(id),
        _ => None,
    }
}

impl KeywordId {
    /// Return `true` for the builtin type names usable after `As`.
    pub fn is_builtin_type(self) -> bool {
        category(self) == KeywordCategory::Type
    }
}

// --- helpers -----------------------------------------------------------------

const fn kw(id: KeywordId, canonical: &'static str, category: KeywordCategory) -> KeywordInfo {
    KeywordInfo { id, canonical, category }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_exact_spelling() {
        assert_eq!(from_str("Integer"), Some(KeywordId::Integer));
        assert_eq!(from_str("Integer2"), None);
        assert_eq!(from_str("Intege"), None);
        assert_eq!(from_str("integer"), None);
    }

    #[test]
    fn test_longer_keyword_not_shadowed_by_prefix() {
        assert_eq!(from_str("Is"), Some(KeywordId::Is));
        assert_eq!(from_str("IsNot"), Some(KeywordId::IsNot));
        assert_eq!(from_str("And"), Some(KeywordId::And));
        assert_eq!(from_str("AndAlso"), Some(KeywordId::AndAlso));
        assert_eq!(from_str("Or"), Some(KeywordId::Or));
        assert_eq!(from_str("OrElse"), Some(KeywordId::OrElse));
    }

    #[test]
    fn test_rem_is_upper_case_only() {
        assert_eq!(from_str("REM"), Some(KeywordId::Rem));
        assert_eq!(from_str("Rem"), None);
        assert_eq!(as_str(KeywordId::Rem), "REM");
    }

    #[test]
    fn test_attribute_names_are_not_keywords() {
        assert_eq!(from_str("Caption"), None);
        assert_eq!(from_str("BackColor"), None);
    }

    #[test]
    fn test_builtin_types() {
        assert!(KeywordId::Integer.is_builtin_type());
        assert!(KeywordId::String.is_builtin_type());
        assert!(!KeywordId::Dim.is_builtin_type());
        assert!(!KeywordId::CInt.is_builtin_type());
    }
}
