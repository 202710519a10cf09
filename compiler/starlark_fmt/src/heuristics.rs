//! Layout Heuristics
//!
//! Pure predicates the formatter consults before rendering a node:
//! whether a collection or argument list collapses onto one line, whether a
//! comprehension breaks, and where blank lines separate top-level statements.

use starlark_ir::{Argument, ComprehensionBody, Expression, Statement};


/// Largest element count, and longest reference name, that still counts as
/// single-line material.
pub const SINGLE_LINE_LENGTH_THRESHOLD: usize = 5;

pub fn is_single_or_empty(count: usize) -> bool {
    count <= 1
}

pub fn is_below_size_threshold(count: usize) -> bool {
    count <= SINGLE_LINE_LENGTH_THRESHOLD
}

/// Numeric and boolean literals, and short references.
pub fn is_simple(expr: &Expression) -> bool {
    match expr {
        Expression::Integer(_) | Expression::Float(_) | Expression::Boolean(_) => true,
        Expression::Reference(reference) => {
            is_below_size_threshold(reference.name.chars().count())
        }
        _ => false,
    }
}

pub fn all_simple<'a>(items: impl IntoIterator<Item = &'a Expression>) -> bool {
    items.into_iter().all(is_simple)
}

/// The shared collapsing rule over any sized run of expressions.
pub fn fits_single_line<'a, I>(items: I) -> bool
where
    I: IntoIterator<Item = &'a Expression>,
    I::IntoIter: ExactSizeIterator,
{
    let items = items.into_iter();
    let count = items.len();
    is_single_or_empty(count) || (is_below_size_threshold(count) && all_simple(items))
}

pub fn list_fits_single_line(items: &[Expression]) -> bool {
    fits_single_line(items)
}

/// Only meaningful for two or more elements: empty and one-element tuples
/// have fixed layouts.
pub fn tuple_fits_single_line(items: &[Expression]) -> bool {
    fits_single_line(items)
}

/// Keys and values must both be simple.
pub fn dictionary_fits_single_line(entries: &[(Expression, Expression)]) -> bool {
    let count = entries.len();
    is_single_or_empty(count)
        || (is_below_size_threshold(count)
            && entries
                .iter()
                .all(|(key, value)| is_simple(key) && is_simple(value)))
}

/// Argument names do not count against the threshold, only values.
pub fn call_fits_single_line(args: &[Argument]) -> bool {
    fits_single_line(args.iter().map(|arg| &arg.value))
}

/// Whether a comprehension puts its body and clauses on separate lines.
pub fn comprehension_breaks(body: &ComprehensionBody) -> bool {
    let element = match body {
        ComprehensionBody::Element(element) => element,
        ComprehensionBody::Entry { value, .. } => value,
    };
    matches!(
        element,
        Expression::BinaryOperation(_) | Expression::Comprehension(_) | Expression::FunctionCall(_)
    )
}

/// Whether a blank line separates `curr` from the statement before it.
///
/// Never before the first statement, after a comment or explicit empty line,
/// or in front of either of those. Otherwise a change of statement kind
/// breaks the group, and so does a repeated call or assignment.
pub fn should_insert_empty_line(prev: Option<&Statement>, curr: &Statement) -> bool {
    let Some(prev) = prev else {
        return false;
    };
    match (prev, curr) {
        (Statement::EmptyLine | Statement::Comment(_), _)
        | (_, Statement::EmptyLine | Statement::Comment(_)) => false,
        (Statement::Expression(_), Statement::Expression(expr)) => {
            matches!(expr, Expression::FunctionCall(_))
        }
        (Statement::Assignment(_), Statement::Assignment(_)) => true,
        _ => prev.node_kind() != curr.node_kind(),
    }
}
