//! Statement Types

use crate::expr::Expression;
use crate::kind::NodeKind;

/// Top-level statement of a Starlark file.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Statement {
    /// An expression on its own line, typically a rule or macro call.
    Expression(Expression),

    /// `name = value`
    Assignment(Assignment),

    /// `load("//path:file.bzl", "symbol", alias = "other")`
    Load(LoadStatement),

    /// Pre-formatted text. Each line is indented, nothing else is touched.
    Raw(String),

    /// A blank line.
    EmptyLine,

    /// `# text`, one comment line per line of text.
    Comment(String),
}

impl Statement {
    pub fn assignment(name: impl Into<String>, value: impl Into<Expression>) -> Self {
        Statement::Assignment(Assignment {
            name: name.into(),
            value: value.into(),
        })
    }

    pub fn comment(text: impl Into<String>) -> Self {
        Statement::Comment(text.into())
    }

    pub fn raw(text: impl Into<String>) -> Self {
        Statement::Raw(text.into())
    }

    pub fn node_kind(&self) -> NodeKind {
        match self {
            Statement::Expression(_) => NodeKind::ExpressionStatement,
            Statement::Assignment(_) => NodeKind::Assignment,
            Statement::Load(_) => NodeKind::Load,
            Statement::Raw(_) => NodeKind::RawStatement,
            Statement::EmptyLine => NodeKind::EmptyLine,
            Statement::Comment(_) => NodeKind::Comment,
        }
    }
}

impl From<Expression> for Statement {
    fn from(value: Expression) -> Self {
        Statement::Expression(value)
    }
}

impl From<Assignment> for Statement {
    fn from(value: Assignment) -> Self {
        Statement::Assignment(value)
    }
}

impl From<LoadStatement> for Statement {
    fn from(value: LoadStatement) -> Self {
        Statement::Load(value)
    }
}

/// `name = value`
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    pub name: String,
    pub value: Expression,
}

/// `load(file, symbols...)`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoadStatement {
    /// Label of the loaded file, rendered as a string literal.
    pub file: String,
    pub symbols: Vec<LoadSymbol>,
}

impl LoadStatement {
    pub fn new(file: impl Into<String>, symbols: impl IntoIterator<Item = LoadSymbol>) -> Self {
        LoadStatement {
            file: file.into(),
            symbols: symbols.into_iter().collect(),
        }
    }
}

/// Symbol imported by a load statement, optionally under another name.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoadSymbol {
    pub name: String,
    pub alias: Option<String>,
}

impl LoadSymbol {
    pub fn new(name: impl Into<String>) -> Self {
        LoadSymbol {
            name: name.into(),
            alias: None,
        }
    }

    pub fn aliased(name: impl Into<String>, alias: impl Into<String>) -> Self {
        LoadSymbol {
            name: name.into(),
            alias: Some(alias.into()),
        }
    }
}
