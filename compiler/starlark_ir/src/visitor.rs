//! Element Visitor Protocol
//!
//! Double dispatch over the syntax tree. Every node implements [`Element`],
//! whose `accept` calls the one [`Visitor`] method for its concrete variant.
//! Each call carries the indentation depth (`position`, in levels), a
//! [`PositionMode`], and a caller-supplied accumulator the visitor renders into.
//!
//! The tree stays immutable during traversal; visitors own any state they need.
//!
//! # Example
//!
//! ```text
//! struct CountCalls;
//!
//! impl Visitor<usize> for CountCalls {
//!     type Error = Infallible;
//!
//!     fn visit_function_call(&mut self, call: &FunctionCall, p: usize, m: PositionMode, acc: &mut usize) -> Result<(), Infallible> {
//!         *acc += 1;
//!         for arg in &call.args {
//!             arg.accept(self, p, m, acc)?;
//!         }
//!         Ok(())
//!     }
//!     // ...
//! }
//! ```

use crate::argument::Argument;
use crate::expr::{
    BinaryOperation, Clause, Comprehension, Expression, FunctionCall, Reference, SliceExpression,
};
use crate::file::StarlarkFile;
use crate::stmt::{Assignment, LoadStatement, LoadSymbol, Statement};

#[cfg(test)]
mod tests;

/// How a node is placed relative to the text before it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PositionMode {
    /// Start on a fresh line, indented to the node's position.
    NewLine,
    /// Continue the current line; no leading indentation.
    ContinueLine,
    /// Force the whole subtree onto one line. Not supported by the formatter.
    SingleLine,
}

/// A visitor over syntax tree nodes rendering into an accumulator `A`.
pub trait Visitor<A: ?Sized> {
    type Error;

    fn visit_file(
        &mut self,
        file: &StarlarkFile,
        position: usize,
        mode: PositionMode,
        acc: &mut A,
    ) -> Result<(), Self::Error>;

    // Statements

    fn visit_expression_statement(
        &mut self,
        expression: &Expression,
        position: usize,
        mode: PositionMode,
        acc: &mut A,
    ) -> Result<(), Self::Error>;

    fn visit_assignment(
        &mut self,
        assignment: &Assignment,
        position: usize,
        mode: PositionMode,
        acc: &mut A,
    ) -> Result<(), Self::Error>;

    fn visit_load(
        &mut self,
        load: &LoadStatement,
        position: usize,
        mode: PositionMode,
        acc: &mut A,
    ) -> Result<(), Self::Error>;

    fn visit_load_symbol(
        &mut self,
        symbol: &LoadSymbol,
        position: usize,
        mode: PositionMode,
        acc: &mut A,
    ) -> Result<(), Self::Error>;

    fn visit_raw_statement(
        &mut self,
        text: &str,
        position: usize,
        mode: PositionMode,
        acc: &mut A,
    ) -> Result<(), Self::Error>;

    fn visit_empty_line(
        &mut self,
        position: usize,
        mode: PositionMode,
        acc: &mut A,
    ) -> Result<(), Self::Error>;

    fn visit_comment(
        &mut self,
        text: &str,
        position: usize,
        mode: PositionMode,
        acc: &mut A,
    ) -> Result<(), Self::Error>;

    // Literals

    fn visit_string(
        &mut self,
        value: &str,
        position: usize,
        mode: PositionMode,
        acc: &mut A,
    ) -> Result<(), Self::Error>;

    fn visit_integer(
        &mut self,
        value: i64,
        position: usize,
        mode: PositionMode,
        acc: &mut A,
    ) -> Result<(), Self::Error>;

    fn visit_float(
        &mut self,
        value: f64,
        position: usize,
        mode: PositionMode,
        acc: &mut A,
    ) -> Result<(), Self::Error>;

    fn visit_boolean(
        &mut self,
        value: bool,
        position: usize,
        mode: PositionMode,
        acc: &mut A,
    ) -> Result<(), Self::Error>;

    fn visit_none(&mut self, position: usize, mode: PositionMode, acc: &mut A)
        -> Result<(), Self::Error>;

    // Expressions

    fn visit_reference(
        &mut self,
        reference: &Reference,
        position: usize,
        mode: PositionMode,
        acc: &mut A,
    ) -> Result<(), Self::Error>;

    fn visit_function_call(
        &mut self,
        call: &FunctionCall,
        position: usize,
        mode: PositionMode,
        acc: &mut A,
    ) -> Result<(), Self::Error>;

    fn visit_argument(
        &mut self,
        argument: &Argument,
        position: usize,
        mode: PositionMode,
        acc: &mut A,
    ) -> Result<(), Self::Error>;

    fn visit_binary_operation(
        &mut self,
        operation: &BinaryOperation,
        position: usize,
        mode: PositionMode,
        acc: &mut A,
    ) -> Result<(), Self::Error>;

    fn visit_comprehension(
        &mut self,
        comprehension: &Comprehension,
        position: usize,
        mode: PositionMode,
        acc: &mut A,
    ) -> Result<(), Self::Error>;

    fn visit_for_clause(
        &mut self,
        variables: &[Expression],
        iterable: &Expression,
        position: usize,
        mode: PositionMode,
        acc: &mut A,
    ) -> Result<(), Self::Error>;

    fn visit_if_clause(
        &mut self,
        condition: &Expression,
        position: usize,
        mode: PositionMode,
        acc: &mut A,
    ) -> Result<(), Self::Error>;

    fn visit_slice(
        &mut self,
        slice: &SliceExpression,
        position: usize,
        mode: PositionMode,
        acc: &mut A,
    ) -> Result<(), Self::Error>;

    fn visit_list(
        &mut self,
        items: &[Expression],
        position: usize,
        mode: PositionMode,
        acc: &mut A,
    ) -> Result<(), Self::Error>;

    fn visit_tuple(
        &mut self,
        items: &[Expression],
        position: usize,
        mode: PositionMode,
        acc: &mut A,
    ) -> Result<(), Self::Error>;

    fn visit_dictionary(
        &mut self,
        entries: &[(Expression, Expression)],
        position: usize,
        mode: PositionMode,
        acc: &mut A,
    ) -> Result<(), Self::Error>;

    fn visit_raw_text(
        &mut self,
        text: &str,
        position: usize,
        mode: PositionMode,
        acc: &mut A,
    ) -> Result<(), Self::Error>;
}

/// A node that can be visited.
pub trait Element {
    /// Dispatch to the visitor method matching this node's variant.
    fn accept<A, V>(
        &self,
        visitor: &mut V,
        position: usize,
        mode: PositionMode,
        acc: &mut A,
    ) -> Result<(), V::Error>
    where
        A: ?Sized,
        V: Visitor<A> + ?Sized;
}

impl Element for StarlarkFile {
    fn accept<A, V>(
        &self,
        visitor: &mut V,
        position: usize,
        mode: PositionMode,
        acc: &mut A,
    ) -> Result<(), V::Error>
    where
        A: ?Sized,
        V: Visitor<A> + ?Sized,
    {
        visitor.visit_file(self, position, mode, acc)
    }
}

impl Element for Statement {
    fn accept<A, V>(
        &self,
        visitor: &mut V,
        position: usize,
        mode: PositionMode,
        acc: &mut A,
    ) -> Result<(), V::Error>
    where
        A: ?Sized,
        V: Visitor<A> + ?Sized,
    {
        match self {
            Statement::Expression(expression) => {
                visitor.visit_expression_statement(expression, position, mode, acc)
            }
            Statement::Assignment(assignment) => {
                visitor.visit_assignment(assignment, position, mode, acc)
            }
            Statement::Load(load) => visitor.visit_load(load, position, mode, acc),
            Statement::Raw(text) => visitor.visit_raw_statement(text, position, mode, acc),
            Statement::EmptyLine => visitor.visit_empty_line(position, mode, acc),
            Statement::Comment(text) => visitor.visit_comment(text, position, mode, acc),
        }
    }
}

impl Element for Expression {
    fn accept<A, V>(
        &self,
        visitor: &mut V,
        position: usize,
        mode: PositionMode,
        acc: &mut A,
    ) -> Result<(), V::Error>
    where
        A: ?Sized,
        V: Visitor<A> + ?Sized,
    {
        match self {
            Expression::String(value) => visitor.visit_string(value, position, mode, acc),
            Expression::Integer(value) => visitor.visit_integer(*value, position, mode, acc),
            Expression::Float(value) => visitor.visit_float(*value, position, mode, acc),
            Expression::Boolean(value) => visitor.visit_boolean(*value, position, mode, acc),
            Expression::None => visitor.visit_none(position, mode, acc),
            Expression::Reference(reference) => {
                visitor.visit_reference(reference, position, mode, acc)
            }
            Expression::FunctionCall(call) => visitor.visit_function_call(call, position, mode, acc),
            Expression::BinaryOperation(operation) => {
                visitor.visit_binary_operation(operation, position, mode, acc)
            }
            Expression::Comprehension(comprehension) => {
                visitor.visit_comprehension(comprehension, position, mode, acc)
            }
            Expression::Slice(slice) => visitor.visit_slice(slice, position, mode, acc),
            Expression::List(items) => visitor.visit_list(items, position, mode, acc),
            Expression::Tuple(items) => visitor.visit_tuple(items, position, mode, acc),
            Expression::Dictionary(entries) => {
                visitor.visit_dictionary(entries, position, mode, acc)
            }
            Expression::Raw(text) => visitor.visit_raw_text(text, position, mode, acc),
        }
    }
}

impl Element for Clause {
    fn accept<A, V>(
        &self,
        visitor: &mut V,
        position: usize,
        mode: PositionMode,
        acc: &mut A,
    ) -> Result<(), V::Error>
    where
        A: ?Sized,
        V: Visitor<A> + ?Sized,
    {
        match self {
            Clause::For {
                variables,
                iterable,
            } => visitor.visit_for_clause(variables, iterable, position, mode, acc),
            Clause::If { condition } => visitor.visit_if_clause(condition, position, mode, acc),
        }
    }
}

/// Implement `Element` for a node type that maps onto a single visitor method.
macro_rules! element_via {
    ($($ty:ty => $method:ident),* $(,)?) => {
        $(
            impl Element for $ty {
                fn accept<A, V>(
                    &self,
                    visitor: &mut V,
                    position: usize,
                    mode: PositionMode,
                    acc: &mut A,
                ) -> Result<(), V::Error>
                where
                    A: ?Sized,
                    V: Visitor<A> + ?Sized,
                {
                    visitor.$method(self, position, mode, acc)
                }
            }
        )*
    };
}

element_via! {
    Assignment => visit_assignment,
    LoadStatement => visit_load,
    LoadSymbol => visit_load_symbol,
    Reference => visit_reference,
    FunctionCall => visit_function_call,
    Argument => visit_argument,
    BinaryOperation => visit_binary_operation,
    Comprehension => visit_comprehension,
    SliceExpression => visit_slice,
}
