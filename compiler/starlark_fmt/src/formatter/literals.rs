//! Literal Value Formatting
//!
//! Methods for emitting literal values (ints, floats, strings, booleans) and
//! the leaf expressions that print a name or text as-is.

use starlark_ir::{NodeKind, PositionMode, Reference};

use super::statements::split_lines;
use super::Printer;
use crate::emitter::Emitter;
use crate::error::FormatError;

impl Printer {
    /// `"text"`, or a triple-quoted block with one indented line per line
    /// of the value. Content is emitted verbatim.
    pub(super) fn emit_string<E: Emitter + ?Sized>(
        &mut self,
        value: &str,
        position: usize,
        mode: PositionMode,
        acc: &mut E,
    ) -> Result<(), FormatError> {
        self.leading_indent(NodeKind::StringLiteral, position, mode, acc)?;

        if split_lines(value).nth(1).is_none() {
            acc.emit("\"");
            acc.emit(value);
            acc.emit("\"");
            return Ok(());
        }

        acc.emit("\"\"\"");
        acc.emit_newline();
        for line in split_lines(value) {
            if !line.is_empty() {
                self.indent(position, acc);
                acc.emit(line);
            }
            acc.emit_newline();
        }
        self.indent(position, acc);
        acc.emit("\"\"\"");
        Ok(())
    }

    pub(super) fn emit_integer<E: Emitter + ?Sized>(
        &mut self,
        value: i64,
        position: usize,
        mode: PositionMode,
        acc: &mut E,
    ) -> Result<(), FormatError> {
        self.leading_indent(NodeKind::IntegerLiteral, position, mode, acc)?;
        acc.emit(&value.to_string());
        Ok(())
    }

    pub(super) fn emit_float<E: Emitter + ?Sized>(
        &mut self,
        value: f64,
        position: usize,
        mode: PositionMode,
        acc: &mut E,
    ) -> Result<(), FormatError> {
        self.leading_indent(NodeKind::FloatLiteral, position, mode, acc)?;
        acc.emit(&float_literal(value));
        Ok(())
    }

    pub(super) fn emit_boolean<E: Emitter + ?Sized>(
        &mut self,
        value: bool,
        position: usize,
        mode: PositionMode,
        acc: &mut E,
    ) -> Result<(), FormatError> {
        self.leading_indent(NodeKind::BooleanLiteral, position, mode, acc)?;
        acc.emit(if value { "True" } else { "False" });
        Ok(())
    }

    pub(super) fn emit_none<E: Emitter + ?Sized>(
        &mut self,
        position: usize,
        mode: PositionMode,
        acc: &mut E,
    ) -> Result<(), FormatError> {
        self.leading_indent(NodeKind::NoneLiteral, position, mode, acc)?;
        acc.emit("None");
        Ok(())
    }

    pub(super) fn emit_reference<E: Emitter + ?Sized>(
        &mut self,
        reference: &Reference,
        position: usize,
        mode: PositionMode,
        acc: &mut E,
    ) -> Result<(), FormatError> {
        self.leading_indent(NodeKind::Reference, position, mode, acc)?;
        acc.emit(&reference.name);
        Ok(())
    }

    pub(super) fn emit_raw_text<E: Emitter + ?Sized>(
        &mut self,
        text: &str,
        position: usize,
        mode: PositionMode,
        acc: &mut E,
    ) -> Result<(), FormatError> {
        self.leading_indent(NodeKind::RawText, position, mode, acc)?;
        acc.emit(text);
        Ok(())
    }
}

/// Starlark spelling of a float: integral values keep a `.0`, non-finite
/// values go through `float()`.
fn float_literal(value: f64) -> String {
    if value.is_nan() {
        "float(\"nan\")".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "float(\"inf\")".to_string()
        } else {
            "float(\"-inf\")".to_string()
        }
    } else if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
