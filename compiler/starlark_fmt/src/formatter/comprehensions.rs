//! Comprehension Formatting
//!
//! Compact `[x for x in xs if x]` unless the body is itself compound, in
//! which case the body and every clause get their own line one level deeper.

use starlark_ir::{
    Comprehension, ComprehensionBody, ComprehensionKind, Element, Expression, NodeKind,
    PositionMode,
};

use super::Printer;
use crate::emitter::Emitter;
use crate::error::FormatError;
use crate::heuristics::comprehension_breaks;

impl Printer {
    pub(super) fn emit_comprehension<E: Emitter + ?Sized>(
        &mut self,
        comprehension: &Comprehension,
        position: usize,
        mode: PositionMode,
        acc: &mut E,
    ) -> Result<(), FormatError> {
        let (node, open, close) = match comprehension.kind() {
            ComprehensionKind::List => (NodeKind::ListComprehension, "[", "]"),
            ComprehensionKind::Dictionary => (NodeKind::DictionaryComprehension, "{", "}"),
        };
        self.leading_indent(node, position, mode, acc)?;
        if comprehension.clauses.is_empty() {
            return Err(FormatError::EmptyComprehension { node, position });
        }

        acc.emit(open);
        if comprehension_breaks(&comprehension.body) {
            acc.emit_newline();
            self.emit_comprehension_body(
                &comprehension.body,
                position + 1,
                PositionMode::NewLine,
                acc,
            )?;
            for clause in &comprehension.clauses {
                acc.emit_newline();
                clause.accept(self, position + 1, PositionMode::NewLine, acc)?;
            }
            acc.emit_newline();
            self.indent(position, acc);
        } else {
            self.emit_comprehension_body(
                &comprehension.body,
                position,
                PositionMode::ContinueLine,
                acc,
            )?;
            for clause in &comprehension.clauses {
                acc.emit_space();
                clause.accept(self, position, PositionMode::ContinueLine, acc)?;
            }
        }
        acc.emit(close);
        Ok(())
    }

    fn emit_comprehension_body<E: Emitter + ?Sized>(
        &mut self,
        body: &ComprehensionBody,
        position: usize,
        mode: PositionMode,
        acc: &mut E,
    ) -> Result<(), FormatError> {
        match body {
            ComprehensionBody::Element(element) => element.accept(self, position, mode, acc),
            ComprehensionBody::Entry { key, value } => {
                key.accept(self, position, mode, acc)?;
                acc.emit(": ");
                value.accept(self, position, PositionMode::ContinueLine, acc)
            }
        }
    }

    /// `for a, b in iterable`
    pub(super) fn emit_for_clause<E: Emitter + ?Sized>(
        &mut self,
        variables: &[Expression],
        iterable: &Expression,
        position: usize,
        mode: PositionMode,
        acc: &mut E,
    ) -> Result<(), FormatError> {
        self.leading_indent(NodeKind::ComprehensionFor, position, mode, acc)?;
        if variables.is_empty() {
            return Err(FormatError::MissingLoopVariables { position });
        }
        acc.emit("for ");
        self.emit_inline_items(variables, position, acc)?;
        acc.emit(" in ");
        iterable.accept(self, position, PositionMode::ContinueLine, acc)
    }

    pub(super) fn emit_if_clause<E: Emitter + ?Sized>(
        &mut self,
        condition: &Expression,
        position: usize,
        mode: PositionMode,
        acc: &mut E,
    ) -> Result<(), FormatError> {
        self.leading_indent(NodeKind::ComprehensionIf, position, mode, acc)?;
        acc.emit("if ");
        condition.accept(self, position, PositionMode::ContinueLine, acc)
    }
}
