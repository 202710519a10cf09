//! Collection Formatting
//!
//! Lists, tuples and dictionaries either collapse onto one line or stack
//! one element per line with trailing commas, per the collapsing rule.

use starlark_ir::{Element, Expression, NodeKind, PositionMode, SliceExpression};

use super::Printer;
use crate::emitter::Emitter;
use crate::error::FormatError;
use crate::heuristics::{dictionary_fits_single_line, list_fits_single_line, tuple_fits_single_line};

impl Printer {
    pub(super) fn emit_list<E: Emitter + ?Sized>(
        &mut self,
        items: &[Expression],
        position: usize,
        mode: PositionMode,
        acc: &mut E,
    ) -> Result<(), FormatError> {
        self.leading_indent(NodeKind::List, position, mode, acc)?;
        acc.emit("[");
        if list_fits_single_line(items) {
            self.emit_inline_items(items, position, acc)?;
        } else {
            self.emit_stacked_items(items, position, acc)?;
        }
        acc.emit("]");
        Ok(())
    }

    /// `()`, `(x,)`, then the collapsing rule from two elements on.
    pub(super) fn emit_tuple<E: Emitter + ?Sized>(
        &mut self,
        items: &[Expression],
        position: usize,
        mode: PositionMode,
        acc: &mut E,
    ) -> Result<(), FormatError> {
        self.leading_indent(NodeKind::Tuple, position, mode, acc)?;
        acc.emit("(");
        match items {
            [] => {}
            [item] => {
                item.accept(self, position, PositionMode::ContinueLine, acc)?;
                acc.emit(",");
            }
            _ if tuple_fits_single_line(items) => self.emit_inline_items(items, position, acc)?,
            _ => self.emit_stacked_items(items, position, acc)?,
        }
        acc.emit(")");
        Ok(())
    }

    pub(super) fn emit_dictionary<E: Emitter + ?Sized>(
        &mut self,
        entries: &[(Expression, Expression)],
        position: usize,
        mode: PositionMode,
        acc: &mut E,
    ) -> Result<(), FormatError> {
        self.leading_indent(NodeKind::Dictionary, position, mode, acc)?;
        acc.emit("{");

        if dictionary_fits_single_line(entries) {
            for (i, (key, value)) in entries.iter().enumerate() {
                if i > 0 {
                    acc.emit(", ");
                }
                key.accept(self, position, PositionMode::ContinueLine, acc)?;
                acc.emit(": ");
                value.accept(self, position, PositionMode::ContinueLine, acc)?;
            }
        } else {
            acc.emit_newline();
            for (key, value) in entries {
                key.accept(self, position + 1, PositionMode::NewLine, acc)?;
                acc.emit(": ");
                value.accept(self, position + 1, PositionMode::ContinueLine, acc)?;
                acc.emit(",");
                acc.emit_newline();
            }
            self.indent(position, acc);
        }

        acc.emit("}");
        Ok(())
    }

    /// `receiver[start:end]` or `receiver[start:end:step]`.
    pub(super) fn emit_slice<E: Emitter + ?Sized>(
        &mut self,
        slice: &SliceExpression,
        position: usize,
        mode: PositionMode,
        acc: &mut E,
    ) -> Result<(), FormatError> {
        self.leading_indent(NodeKind::Slice, position, mode, acc)?;
        slice
            .receiver
            .accept(self, position, PositionMode::ContinueLine, acc)?;
        acc.emit("[");
        if let Some(start) = slice.start {
            acc.emit(&start.to_string());
        }
        acc.emit(":");
        if let Some(end) = slice.end {
            acc.emit(&end.to_string());
        }
        if let Some(step) = slice.step {
            acc.emit(":");
            acc.emit(&step.to_string());
        }
        acc.emit("]");
        Ok(())
    }
}
