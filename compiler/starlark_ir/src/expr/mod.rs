//! Expression Types
//!
//! Every Starlark expression the formatter knows how to render.
//!
//! # Design Notes
//! - Collections keep insertion order; the formatter emits them as stored.
//! - Children are owned (`Box`/`Vec`), trees are built bottom-up and never
//!   mutated while being formatted.


use crate::argument::Argument;
use crate::kind::{NodeKind, ValueKind};

/// Expression node.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Expression {
    /// String literal: `"text"`, or a triple-quoted block when it spans lines.
    String(String),

    /// Integer literal: `42`
    Integer(i64),

    /// Float literal: `2.5`
    Float(f64),

    /// Boolean literal: `True`, `False`
    Boolean(bool),

    /// `None`
    None,

    /// Named binding: `srcs`, `DEPS`
    Reference(Reference),

    /// Function or method call: `glob(["*.kt"])`, `ctx.actions.run()`
    FunctionCall(FunctionCall),

    /// `left + right`, `left % right`
    BinaryOperation(BinaryOperation),

    /// `[x for x in y]`, `{k: v for k, v in y}`
    Comprehension(Comprehension),

    /// `receiver[start:end:step]`
    Slice(SliceExpression),

    /// `[a, b]`
    List(Vec<Expression>),

    /// `(a, b)`
    Tuple(Vec<Expression>),

    /// `{k: v}`, entries in insertion order.
    Dictionary(Vec<(Expression, Expression)>),

    /// Inline text emitted verbatim, for constructs the tree cannot express.
    Raw(String),
}

impl Expression {
    pub fn string(value: impl Into<String>) -> Self {
        Expression::String(value.into())
    }

    pub fn reference(name: impl Into<String>, kind: ValueKind) -> Self {
        Expression::Reference(Reference::new(name, kind))
    }

    pub fn list(items: impl IntoIterator<Item = Expression>) -> Self {
        Expression::List(items.into_iter().collect())
    }

    pub fn tuple(items: impl IntoIterator<Item = Expression>) -> Self {
        Expression::Tuple(items.into_iter().collect())
    }

    pub fn dictionary(entries: impl IntoIterator<Item = (Expression, Expression)>) -> Self {
        Expression::Dictionary(entries.into_iter().collect())
    }

    pub fn raw(text: impl Into<String>) -> Self {
        Expression::Raw(text.into())
    }

    /// Build `left <operator> right`, typed after the left operand.
    pub fn binary(left: Expression, operator: BinaryOperator, right: Expression) -> Self {
        let kind = left.value_kind();
        Expression::BinaryOperation(BinaryOperation::new(kind, left, operator, right))
    }

    /// The node kind of this expression.
    pub fn node_kind(&self) -> NodeKind {
        match self {
            Expression::String(_) => NodeKind::StringLiteral,
            Expression::Integer(_) => NodeKind::IntegerLiteral,
            Expression::Float(_) => NodeKind::FloatLiteral,
            Expression::Boolean(_) => NodeKind::BooleanLiteral,
            Expression::None => NodeKind::NoneLiteral,
            Expression::Reference(_) => NodeKind::Reference,
            Expression::FunctionCall(_) => NodeKind::FunctionCall,
            Expression::BinaryOperation(_) => NodeKind::BinaryOperation,
            Expression::Comprehension(comprehension) => match comprehension.kind() {
                ComprehensionKind::List => NodeKind::ListComprehension,
                ComprehensionKind::Dictionary => NodeKind::DictionaryComprehension,
            },
            Expression::Slice(_) => NodeKind::Slice,
            Expression::List(_) => NodeKind::List,
            Expression::Tuple(_) => NodeKind::Tuple,
            Expression::Dictionary(_) => NodeKind::Dictionary,
            Expression::Raw(_) => NodeKind::RawText,
        }
    }

    /// The Starlark type this expression evaluates to, as far as the tree knows.
    pub fn value_kind(&self) -> ValueKind {
        match self {
            Expression::String(_) => ValueKind::String,
            Expression::Integer(_) | Expression::Float(_) => ValueKind::Number,
            Expression::Boolean(_) => ValueKind::Boolean,
            Expression::Reference(reference) => reference.kind,
            Expression::BinaryOperation(operation) => operation.kind,
            Expression::Comprehension(comprehension) => match comprehension.kind() {
                ComprehensionKind::List => ValueKind::List,
                ComprehensionKind::Dictionary => ValueKind::Dictionary,
            },
            Expression::Slice(slice) => slice.receiver.value_kind(),
            Expression::List(_) => ValueKind::List,
            Expression::Tuple(_) => ValueKind::Tuple,
            Expression::Dictionary(_) => ValueKind::Dictionary,
            Expression::None | Expression::FunctionCall(_) | Expression::Raw(_) => ValueKind::Any,
        }
    }
}

impl From<&str> for Expression {
    fn from(value: &str) -> Self {
        Expression::String(value.to_owned())
    }
}

impl From<String> for Expression {
    fn from(value: String) -> Self {
        Expression::String(value)
    }
}

impl From<i64> for Expression {
    fn from(value: i64) -> Self {
        Expression::Integer(value)
    }
}

impl From<f64> for Expression {
    fn from(value: f64) -> Self {
        Expression::Float(value)
    }
}

impl From<bool> for Expression {
    fn from(value: bool) -> Self {
        Expression::Boolean(value)
    }
}

impl<T: Into<Expression>> From<Option<T>> for Expression {
    fn from(value: Option<T>) -> Self {
        value.map_or(Expression::None, Into::into)
    }
}

impl From<Reference> for Expression {
    fn from(value: Reference) -> Self {
        Expression::Reference(value)
    }
}

impl From<FunctionCall> for Expression {
    fn from(value: FunctionCall) -> Self {
        Expression::FunctionCall(value)
    }
}

impl From<BinaryOperation> for Expression {
    fn from(value: BinaryOperation) -> Self {
        Expression::BinaryOperation(value)
    }
}

impl From<Comprehension> for Expression {
    fn from(value: Comprehension) -> Self {
        Expression::Comprehension(value)
    }
}

impl From<SliceExpression> for Expression {
    fn from(value: SliceExpression) -> Self {
        Expression::Slice(value)
    }
}

/// A named binding. Carries no value, only its name and declared kind.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reference {
    pub name: String,
    pub kind: ValueKind,
}

impl Reference {
    pub fn new(name: impl Into<String>, kind: ValueKind) -> Self {
        Reference {
            name: name.into(),
            kind,
        }
    }
}

/// Function call, optionally on a receiver: `receiver.name(args)`.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FunctionCall {
    pub name: String,
    pub receiver: Option<Box<Expression>>,
    pub args: Vec<Argument>,
}

impl FunctionCall {
    pub fn new(name: impl Into<String>, args: Vec<Argument>) -> Self {
        FunctionCall {
            name: name.into(),
            receiver: None,
            args,
        }
    }

    /// Method-call form: `receiver.name(args)`.
    pub fn method(receiver: Expression, name: impl Into<String>, args: Vec<Argument>) -> Self {
        FunctionCall {
            name: name.into(),
            receiver: Some(Box::new(receiver)),
            args,
        }
    }
}

/// Operators supported in binary operations.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BinaryOperator {
    /// Concatenation or addition.
    Plus,
    /// String formatting: `"%s-%s" % (a, b)`
    Percent,
}

impl BinaryOperator {
    /// Returns the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Percent => "%",
        }
    }
}

/// `left <operator> right`. Chains nest on the left.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BinaryOperation {
    /// Kind of the operands, and of the result.
    pub kind: ValueKind,
    pub left: Box<Expression>,
    pub operator: BinaryOperator,
    pub right: Box<Expression>,
}

impl BinaryOperation {
    pub fn new(
        kind: ValueKind,
        left: Expression,
        operator: BinaryOperator,
        right: Expression,
    ) -> Self {
        BinaryOperation {
            kind,
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }
}

/// List or dictionary comprehension.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ComprehensionKind {
    List,
    Dictionary,
}

/// What a comprehension produces per iteration.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ComprehensionBody {
    /// List element: `[body for ...]`
    Element(Expression),
    /// Dictionary entry: `{key: value for ...}`
    Entry { key: Expression, value: Expression },
}

/// A `for` or `if` part of a comprehension.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Clause {
    /// `for v1, v2 in iterable`
    For {
        variables: Vec<Expression>,
        iterable: Expression,
    },
    /// `if condition`
    If { condition: Expression },
}

impl Clause {
    pub fn for_in(variables: impl IntoIterator<Item = Expression>, iterable: Expression) -> Self {
        Clause::For {
            variables: variables.into_iter().collect(),
            iterable,
        }
    }

    pub fn if_(condition: Expression) -> Self {
        Clause::If { condition }
    }

    pub fn node_kind(&self) -> NodeKind {
        match self {
            Clause::For { .. } => NodeKind::ComprehensionFor,
            Clause::If { .. } => NodeKind::ComprehensionIf,
        }
    }
}

/// `[body clauses...]` or `{key: value clauses...}`.
///
/// A well-formed comprehension has at least one clause; the formatter rejects
/// an empty clause list.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Comprehension {
    pub body: Box<ComprehensionBody>,
    pub clauses: Vec<Clause>,
}

impl Comprehension {
    pub fn list(body: Expression, clauses: Vec<Clause>) -> Self {
        Comprehension {
            body: Box::new(ComprehensionBody::Element(body)),
            clauses,
        }
    }

    pub fn dictionary(key: Expression, value: Expression, clauses: Vec<Clause>) -> Self {
        Comprehension {
            body: Box::new(ComprehensionBody::Entry { key, value }),
            clauses,
        }
    }

    pub fn kind(&self) -> ComprehensionKind {
        match *self.body {
            ComprehensionBody::Element(_) => ComprehensionKind::List,
            ComprehensionBody::Entry { .. } => ComprehensionKind::Dictionary,
        }
    }
}

/// `receiver[start:end]` or `receiver[start:end:step]`, any bound may be absent.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SliceExpression {
    pub receiver: Box<Expression>,
    pub start: Option<i64>,
    pub end: Option<i64>,
    pub step: Option<i64>,
}

impl SliceExpression {
    pub fn new(
        receiver: Expression,
        start: Option<i64>,
        end: Option<i64>,
        step: Option<i64>,
    ) -> Self {
        SliceExpression {
            receiver: Box::new(receiver),
            start,
            end,
            step,
        }
    }
}
