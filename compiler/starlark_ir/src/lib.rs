//! Starlark IR - Syntax Tree Types
//!
//! The tree model for Starlark documents (BUILD, WORKSPACE, `.bzl`, `.star`):
//! - File roots with canonical names
//! - Statements and expressions
//! - Call arguments and the argument accumulation contract
//! - The element/visitor protocol used by renderers
//!
//! # Design Philosophy
//!
//! - **Closed variant sets**: statements and expressions are enums, consumers
//!   match exhaustively.
//! - **Immutable once built**: trees are assembled bottom-up by builders and
//!   only read afterwards.
//! - **Order is output**: collections and arguments keep insertion order.

mod argument;
mod expr;
mod file;
mod kind;
mod stmt;
pub mod visitor;

pub use argument::{Argument, ArgumentSet};
pub use expr::{
    BinaryOperation, BinaryOperator, Clause, Comprehension, ComprehensionBody, ComprehensionKind,
    Expression, FunctionCall, Reference, SliceExpression,
};
pub use file::{FileKind, StarlarkFile};
pub use kind::{NodeKind, ValueKind};
pub use stmt::{Assignment, LoadStatement, LoadSymbol, Statement};
pub use visitor::{Element, PositionMode, Visitor};
