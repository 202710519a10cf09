//! Formatter Core
//!
//! Top-down rendering of a Starlark tree. The [`Printer`] is the visitor: each
//! node renders itself at an indentation depth (`position`) in a
//! [`PositionMode`], recursing into children with the depth and mode the
//! layout rules pick for them.
//!
//! Layout is decided locally per node by the predicates in
//! [`crate::heuristics`]; there is no width measurement pass.
//!
//! # Modules
//!
//! - [`statements`]: file loop, assignments, loads, comments, raw text
//! - [`literals`]: strings, numbers, booleans, references
//! - [`collections`]: lists, tuples, dictionaries, slices
//! - [`calls`]: function calls, arguments, binary operations
//! - [`comprehensions`]: list and dictionary comprehensions

mod calls;
mod collections;
mod comprehensions;
mod literals;
mod statements;

use starlark_ir::{
    Argument, Assignment, BinaryOperation, Comprehension, Element, Expression, FunctionCall,
    LoadStatement, LoadSymbol, NodeKind, PositionMode, Reference, SliceExpression, StarlarkFile,
    Visitor,
};

use crate::context::{FormatConfig, IndentCache};
use crate::emitter::{Emitter, StringEmitter};
use crate::error::FormatError;

/// Formats Starlark trees into canonical source text.
///
/// Holds only configuration. Every call builds its own [`Printer`], so one
/// formatter can be shared freely, across threads included.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodeFormatter {
    config: FormatConfig,
}

impl CodeFormatter {
    /// Create a formatter with the default 4-space indentation.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: FormatConfig) -> Self {
        CodeFormatter { config }
    }

    pub fn config(&self) -> FormatConfig {
        self.config
    }

    /// Format a whole file.
    ///
    /// The result ends with exactly one newline; a file without statements
    /// formats to the empty string.
    ///
    /// # Errors
    ///
    /// Returns a [`FormatError`] when the tree contains a node the formatter
    /// cannot render. Nothing is produced in that case.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(file = file.name(), statements = file.statements.len())
    )]
    pub fn format(&self, file: &StarlarkFile) -> Result<String, FormatError> {
        let mut printer = Printer::new(self.config);
        let mut emitter = StringEmitter::new();
        file.accept(&mut printer, 0, PositionMode::NewLine, &mut emitter)?;
        let output = emitter.finalize();
        tracing::debug!(bytes = output.len(), "formatted file");
        Ok(output)
    }

    /// Format a whole file, appending the result to `acc`.
    ///
    /// `acc` is only written once the file rendered successfully.
    ///
    /// # Errors
    ///
    /// See [`CodeFormatter::format`].
    pub fn format_into<E: Emitter + ?Sized>(
        &self,
        file: &StarlarkFile,
        acc: &mut E,
    ) -> Result<(), FormatError> {
        let output = self.format(file)?;
        acc.emit(&output);
        Ok(())
    }

    /// Format a single node at the given depth and mode.
    ///
    /// No trailing newline is added.
    ///
    /// # Errors
    ///
    /// See [`CodeFormatter::format`].
    pub fn format_element(
        &self,
        element: &impl Element,
        position: usize,
        mode: PositionMode,
    ) -> Result<String, FormatError> {
        let mut printer = Printer::new(self.config);
        let mut emitter = StringEmitter::new();
        element.accept(&mut printer, position, mode, &mut emitter)?;
        Ok(emitter.output())
    }
}

/// Format a file with the default configuration.
///
/// # Errors
///
/// See [`CodeFormatter::format`].
pub fn format_file(file: &StarlarkFile) -> Result<String, FormatError> {
    CodeFormatter::new().format(file)
}

/// The rendering visitor. Lives for one formatting call.
pub struct Printer {
    indents: IndentCache,
}

impl Printer {
    pub fn new(config: FormatConfig) -> Self {
        Printer {
            indents: IndentCache::new(config),
        }
    }

    fn indent<E: Emitter + ?Sized>(&mut self, position: usize, acc: &mut E) {
        acc.emit(self.indents.get(position));
    }

    /// Emit the indentation a node starts with in `mode`.
    fn leading_indent<E: Emitter + ?Sized>(
        &mut self,
        node: NodeKind,
        position: usize,
        mode: PositionMode,
        acc: &mut E,
    ) -> Result<(), FormatError> {
        match mode {
            PositionMode::NewLine => {
                self.indent(position, acc);
                Ok(())
            }
            PositionMode::ContinueLine => Ok(()),
            PositionMode::SingleLine => Err(FormatError::UnsupportedMode { node, position }),
        }
    }

    /// Reject `SingleLine` for nodes that emit no indentation of their own.
    fn check_mode(node: NodeKind, position: usize, mode: PositionMode) -> Result<(), FormatError> {
        match mode {
            PositionMode::SingleLine => Err(FormatError::UnsupportedMode { node, position }),
            PositionMode::NewLine | PositionMode::ContinueLine => Ok(()),
        }
    }

    /// Emit `items` separated by `, ` on the current line.
    fn emit_inline_items<E: Emitter + ?Sized>(
        &mut self,
        items: &[Expression],
        position: usize,
        acc: &mut E,
    ) -> Result<(), FormatError> {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                acc.emit(", ");
            }
            item.accept(self, position, PositionMode::ContinueLine, acc)?;
        }
        Ok(())
    }

    /// Emit `items` one per line at `position + 1`, each with a trailing
    /// comma, then indent back to `position` for the closing bracket.
    fn emit_stacked_items<E: Emitter + ?Sized>(
        &mut self,
        items: &[Expression],
        position: usize,
        acc: &mut E,
    ) -> Result<(), FormatError> {
        acc.emit_newline();
        for item in items {
            item.accept(self, position + 1, PositionMode::NewLine, acc)?;
            acc.emit(",");
            acc.emit_newline();
        }
        self.indent(position, acc);
        Ok(())
    }
}

impl<E: Emitter + ?Sized> Visitor<E> for Printer {
    type Error = FormatError;

    fn visit_file(
        &mut self,
        file: &StarlarkFile,
        position: usize,
        mode: PositionMode,
        acc: &mut E,
    ) -> Result<(), FormatError> {
        self.emit_file(file, position, mode, acc)
    }

    fn visit_expression_statement(
        &mut self,
        expression: &Expression,
        position: usize,
        mode: PositionMode,
        acc: &mut E,
    ) -> Result<(), FormatError> {
        Self::check_mode(NodeKind::ExpressionStatement, position, mode)?;
        expression.accept(self, position, mode, acc)
    }

    fn visit_assignment(
        &mut self,
        assignment: &Assignment,
        position: usize,
        mode: PositionMode,
        acc: &mut E,
    ) -> Result<(), FormatError> {
        self.emit_assignment(assignment, position, mode, acc)
    }

    fn visit_load(
        &mut self,
        load: &LoadStatement,
        position: usize,
        mode: PositionMode,
        acc: &mut E,
    ) -> Result<(), FormatError> {
        self.emit_load(load, position, mode, acc)
    }

    fn visit_load_symbol(
        &mut self,
        symbol: &LoadSymbol,
        position: usize,
        mode: PositionMode,
        acc: &mut E,
    ) -> Result<(), FormatError> {
        self.emit_load_symbol(symbol, position, mode, acc)
    }

    fn visit_raw_statement(
        &mut self,
        text: &str,
        position: usize,
        mode: PositionMode,
        acc: &mut E,
    ) -> Result<(), FormatError> {
        self.emit_raw_statement(text, position, mode, acc)
    }

    fn visit_empty_line(
        &mut self,
        position: usize,
        mode: PositionMode,
        _acc: &mut E,
    ) -> Result<(), FormatError> {
        // The separator newline the file loop emits is the blank line.
        Self::check_mode(NodeKind::EmptyLine, position, mode)
    }

    fn visit_comment(
        &mut self,
        text: &str,
        position: usize,
        mode: PositionMode,
        acc: &mut E,
    ) -> Result<(), FormatError> {
        self.emit_comment(text, position, mode, acc)
    }

    fn visit_string(
        &mut self,
        value: &str,
        position: usize,
        mode: PositionMode,
        acc: &mut E,
    ) -> Result<(), FormatError> {
        self.emit_string(value, position, mode, acc)
    }

    fn visit_integer(
        &mut self,
        value: i64,
        position: usize,
        mode: PositionMode,
        acc: &mut E,
    ) -> Result<(), FormatError> {
        self.emit_integer(value, position, mode, acc)
    }

    fn visit_float(
        &mut self,
        value: f64,
        position: usize,
        mode: PositionMode,
        acc: &mut E,
    ) -> Result<(), FormatError> {
        self.emit_float(value, position, mode, acc)
    }

    fn visit_boolean(
        &mut self,
        value: bool,
        position: usize,
        mode: PositionMode,
        acc: &mut E,
    ) -> Result<(), FormatError> {
        self.emit_boolean(value, position, mode, acc)
    }

    fn visit_none(
        &mut self,
        position: usize,
        mode: PositionMode,
        acc: &mut E,
    ) -> Result<(), FormatError> {
        self.emit_none(position, mode, acc)
    }

    fn visit_reference(
        &mut self,
        reference: &Reference,
        position: usize,
        mode: PositionMode,
        acc: &mut E,
    ) -> Result<(), FormatError> {
        self.emit_reference(reference, position, mode, acc)
    }

    fn visit_function_call(
        &mut self,
        call: &FunctionCall,
        position: usize,
        mode: PositionMode,
        acc: &mut E,
    ) -> Result<(), FormatError> {
        self.emit_function_call(call, position, mode, acc)
    }

    fn visit_argument(
        &mut self,
        argument: &Argument,
        position: usize,
        mode: PositionMode,
        acc: &mut E,
    ) -> Result<(), FormatError> {
        self.emit_argument(argument, position, mode, acc)
    }

    fn visit_binary_operation(
        &mut self,
        operation: &BinaryOperation,
        position: usize,
        mode: PositionMode,
        acc: &mut E,
    ) -> Result<(), FormatError> {
        self.emit_binary_operation(operation, position, mode, acc)
    }

    fn visit_comprehension(
        &mut self,
        comprehension: &Comprehension,
        position: usize,
        mode: PositionMode,
        acc: &mut E,
    ) -> Result<(), FormatError> {
        self.emit_comprehension(comprehension, position, mode, acc)
    }

    fn visit_for_clause(
        &mut self,
        variables: &[Expression],
        iterable: &Expression,
        position: usize,
        mode: PositionMode,
        acc: &mut E,
    ) -> Result<(), FormatError> {
        self.emit_for_clause(variables, iterable, position, mode, acc)
    }

    fn visit_if_clause(
        &mut self,
        condition: &Expression,
        position: usize,
        mode: PositionMode,
        acc: &mut E,
    ) -> Result<(), FormatError> {
        self.emit_if_clause(condition, position, mode, acc)
    }

    fn visit_slice(
        &mut self,
        slice: &SliceExpression,
        position: usize,
        mode: PositionMode,
        acc: &mut E,
    ) -> Result<(), FormatError> {
        self.emit_slice(slice, position, mode, acc)
    }

    fn visit_list(
        &mut self,
        items: &[Expression],
        position: usize,
        mode: PositionMode,
        acc: &mut E,
    ) -> Result<(), FormatError> {
        self.emit_list(items, position, mode, acc)
    }

    fn visit_tuple(
        &mut self,
        items: &[Expression],
        position: usize,
        mode: PositionMode,
        acc: &mut E,
    ) -> Result<(), FormatError> {
        self.emit_tuple(items, position, mode, acc)
    }

    fn visit_dictionary(
        &mut self,
        entries: &[(Expression, Expression)],
        position: usize,
        mode: PositionMode,
        acc: &mut E,
    ) -> Result<(), FormatError> {
        self.emit_dictionary(entries, position, mode, acc)
    }

    fn visit_raw_text(
        &mut self,
        text: &str,
        position: usize,
        mode: PositionMode,
        acc: &mut E,
    ) -> Result<(), FormatError> {
        self.emit_raw_text(text, position, mode, acc)
    }
}
