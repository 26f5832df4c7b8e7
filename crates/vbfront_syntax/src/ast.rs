//! Abstract Syntax Tree definitions.
//!
//! The tree is deliberately shallow: it models the top level of a translation unit (function definitions and
//! data declarations) down to declarators. Statement bodies and initializer expressions are kept as raw token runs
//! for later passes.

use std::fmt;

use crate::lexer::Token;
use vbfront_core::lang::keywords::{self, KeywordId};

/// Source location span (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A node with source location
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

/// Identifier spelling, exactly as written in the source.
pub type Ident = String;

/// A translation unit is the ordered sequence of its external declarations.
///
/// Forward declarations (`Declare Function ...`) do not appear here; the parser reports them through
/// [`crate::parser::ParseContext::forward_declarations`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TranslationUnit {
    pub declarations: Vec<Spanned<ExternalDeclaration>>,
}

/// Top-level declarations
#[derive(Debug, Clone, PartialEq)]
pub enum ExternalDeclaration {
    FunctionDefinition(FunctionDefinition),
    Declaration(Declaration),
}

// ============================================================================
// Functions
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDefinition {
    pub specifiers: Vec<DeclarationSpecifier>,
    pub declarator: Declarator,
    pub body: CompoundStatement,
}

/// The keyword that introduced a procedure header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcedureKind {
    Function,
    Sub,
    Property(Option<PropertyAccessor>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyAccessor {
    Get,
    Let,
    Set,
}

impl ProcedureKind {
    /// The keyword that must follow `End` to close this procedure's body.
    pub fn keyword(self) -> KeywordId {
        match self {
            ProcedureKind::Function => KeywordId::Function,
            ProcedureKind::Sub => KeywordId::Sub,
            ProcedureKind::Property(_) => KeywordId::Property,
        }
    }
}

impl fmt::Display for ProcedureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", keywords::as_str(self.keyword()))
    }
}

/// A function body: the statements between the body opener and `End <procedure>`.
#[derive(Debug, Clone, PartialEq)]
pub struct CompoundStatement {
    pub statements: Vec<Statement>,
    pub span: Span,
}

/// One unparsed statement (a single logical line).
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub tokens: Vec<Token>,
    pub span: Span,
}

// ============================================================================
// Declarations
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub specifiers: Vec<DeclarationSpecifier>,
    pub initializers: Vec<InitDeclarator>,
}

/// Something in front of a declarator: a storage, visibility or modifier keyword (`Dim`, `Public`, `Const`, ...)
/// or a name the caller registered as already declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationSpecifier {
    pub kind: SpecifierKind,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecifierKind {
    Keyword(KeywordId),
    DeclaredName(Ident),
}

impl DeclarationSpecifier {
    /// The specifier keyword, if this is not a declared name.
    pub fn keyword(&self) -> Option<KeywordId> {
        match &self.kind {
            SpecifierKind::Keyword(id) => Some(*id),
            SpecifierKind::DeclaredName(_) => None,
        }
    }
}

/// A declarator together with its optional `= initializer`.
#[derive(Debug, Clone, PartialEq)]
pub struct InitDeclarator {
    pub declarator: Declarator,
    pub initializer: Option<Initializer>,
}

/// Raw initializer tokens, up to the next top-level `,` or end of statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Initializer {
    pub tokens: Vec<Token>,
    pub span: Span,
}

/// The named entity being declared and its shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Declarator {
    /// Set when the declarator is a procedure header (`Function Foo(...)`).
    pub procedure: Option<ProcedureKind>,
    /// Already-declared names between the procedure keyword and the name (`Function Widget Build()`).
    pub qualifiers: Vec<Ident>,
    pub name: Ident,
    pub suffix: Option<DeclaratorSuffix>,
    /// The `As` clause: variable type or procedure return type.
    pub type_name: Option<TypeName>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeclaratorSuffix {
    /// Procedure parameter list.
    Parameters(Vec<Parameter>),
    /// Array dimensions; empty for a dynamic array (`Dim a() As Integer`).
    Bounds(Vec<ArrayBound>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    /// `ByVal`, `ByRef`, `Optional`, `ParamArray`, in source order.
    pub modifiers: Vec<KeywordId>,
    pub name: Ident,
    /// Written as `name()`.
    pub is_array: bool,
    pub type_name: Option<TypeName>,
    pub default: Option<Initializer>,
    pub span: Span,
}

/// One array dimension: `10` or `1 To 10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayBound {
    pub lower: Option<i64>,
    pub upper: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeName {
    /// `As New Foo`
    pub is_new: bool,
    pub kind: TypeKind,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypeKind {
    Builtin(KeywordId),
    /// A user type, possibly qualified (`Scripting.Dictionary`).
    Named(Vec<Ident>),
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_new {
            write!(f, "New ")?;
        }
        match &self.kind {
            TypeKind::Builtin(id) => write!(f, "{}", keywords::as_str(*id)),
            TypeKind::Named(path) => write!(f, "{}", path.join(".")),
        }
    }
}

impl Declarator {
    /// Parameters of a procedure declarator, or an empty slice.
    pub fn parameters(&self) -> &[Parameter] {
        match &self.suffix {
            Some(DeclaratorSuffix::Parameters(params)) => params,
            _ => &[],
        }
    }
}
