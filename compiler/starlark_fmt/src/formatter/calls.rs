//! Call and Operator Formatting

use starlark_ir::{Argument, BinaryOperation, Element, FunctionCall, NodeKind, PositionMode};

use super::Printer;
use crate::emitter::Emitter;
use crate::error::FormatError;
use crate::heuristics::call_fits_single_line;

impl Printer {
    pub(super) fn emit_function_call<E: Emitter + ?Sized>(
        &mut self,
        call: &FunctionCall,
        position: usize,
        mode: PositionMode,
        acc: &mut E,
    ) -> Result<(), FormatError> {
        self.leading_indent(NodeKind::FunctionCall, position, mode, acc)?;
        if let Some(receiver) = &call.receiver {
            receiver.accept(self, position, PositionMode::ContinueLine, acc)?;
            acc.emit(".");
        }
        acc.emit(&call.name);
        acc.emit("(");

        if call_fits_single_line(&call.args) {
            // Inline arguments stay at the call's depth, so a lone multi-line
            // argument closes its bracket in line with the call.
            for (i, arg) in call.args.iter().enumerate() {
                if i > 0 {
                    acc.emit(", ");
                }
                arg.accept(self, position, PositionMode::ContinueLine, acc)?;
            }
        } else {
            acc.emit_newline();
            for arg in &call.args {
                arg.accept(self, position + 1, PositionMode::NewLine, acc)?;
                acc.emit(",");
                acc.emit_newline();
            }
            self.indent(position, acc);
        }

        acc.emit(")");
        Ok(())
    }

    /// `name = value`, or just `value` when positional or the name is blank.
    pub(super) fn emit_argument<E: Emitter + ?Sized>(
        &mut self,
        argument: &Argument,
        position: usize,
        mode: PositionMode,
        acc: &mut E,
    ) -> Result<(), FormatError> {
        self.leading_indent(NodeKind::Argument, position, mode, acc)?;
        if let Some(name) = argument.name.as_deref().filter(|n| !n.trim().is_empty()) {
            acc.emit(name);
            acc.emit(" = ");
        }
        argument
            .value
            .accept(self, position, PositionMode::ContinueLine, acc)
    }

    /// Left operand in the caller's mode, right operand continues the line.
    /// No parentheses: chains nest to the left and only `+` and `%` exist.
    pub(super) fn emit_binary_operation<E: Emitter + ?Sized>(
        &mut self,
        operation: &BinaryOperation,
        position: usize,
        mode: PositionMode,
        acc: &mut E,
    ) -> Result<(), FormatError> {
        Self::check_mode(NodeKind::BinaryOperation, position, mode)?;
        operation.left.accept(self, position, mode, acc)?;
        acc.emit_space();
        acc.emit(operation.operator.as_symbol());
        acc.emit_space();
        operation
            .right
            .accept(self, position, PositionMode::ContinueLine, acc)
    }
}
