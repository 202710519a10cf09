//! Node and Value Kinds
//!
//! Small `Copy` tags describing what a node is (`NodeKind`) and what
//! Starlark value it evaluates to (`ValueKind`).

use std::fmt;

/// Starlark-equivalent type of an expression.
///
/// References and binary operations carry this explicitly since their value
/// cannot be inspected; for every other expression it is derived from the node.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueKind {
    String,
    Number,
    Boolean,
    List,
    Dictionary,
    Tuple,
    #[default]
    Any,
}

impl ValueKind {
    /// Returns the Starlark type name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "bool",
            Self::List => "list",
            Self::Dictionary => "dict",
            Self::Tuple => "tuple",
            Self::Any => "any",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of a syntax tree node, used to describe where formatting failed.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NodeKind {
    File,
    // Statements
    ExpressionStatement,
    Assignment,
    Load,
    LoadSymbol,
    RawStatement,
    EmptyLine,
    Comment,
    // Expressions
    StringLiteral,
    IntegerLiteral,
    FloatLiteral,
    BooleanLiteral,
    NoneLiteral,
    Reference,
    FunctionCall,
    Argument,
    BinaryOperation,
    ListComprehension,
    DictionaryComprehension,
    ComprehensionFor,
    ComprehensionIf,
    Slice,
    List,
    Tuple,
    Dictionary,
    RawText,
}

impl NodeKind {
    /// Returns a human-readable name for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::ExpressionStatement => "expression statement",
            Self::Assignment => "assignment",
            Self::Load => "load statement",
            Self::LoadSymbol => "load symbol",
            Self::RawStatement => "raw statement",
            Self::EmptyLine => "empty line",
            Self::Comment => "comment",
            Self::StringLiteral => "string literal",
            Self::IntegerLiteral => "integer literal",
            Self::FloatLiteral => "float literal",
            Self::BooleanLiteral => "boolean literal",
            Self::NoneLiteral => "None",
            Self::Reference => "reference",
            Self::FunctionCall => "function call",
            Self::Argument => "argument",
            Self::BinaryOperation => "binary operation",
            Self::ListComprehension => "list comprehension",
            Self::DictionaryComprehension => "dictionary comprehension",
            Self::ComprehensionFor => "`for` clause",
            Self::ComprehensionIf => "`if` clause",
            Self::Slice => "slice",
            Self::List => "list",
            Self::Tuple => "tuple",
            Self::Dictionary => "dictionary",
            Self::RawText => "raw text",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
