//! Statement Formatting
//!
//! The file loop with its blank-line grouping, and the statement kinds that
//! only ever appear at statement level.

use starlark_ir::{
    Assignment, Element, LoadStatement, LoadSymbol, NodeKind, PositionMode, StarlarkFile,
    Statement,
};

use super::Printer;
use crate::emitter::Emitter;
use crate::error::FormatError;
use crate::heuristics::should_insert_empty_line;

impl Printer {
    pub(super) fn emit_file<E: Emitter + ?Sized>(
        &mut self,
        file: &StarlarkFile,
        position: usize,
        mode: PositionMode,
        acc: &mut E,
    ) -> Result<(), FormatError> {
        Self::check_mode(NodeKind::File, position, mode)?;

        let mut prev: Option<&Statement> = None;
        for statement in &file.statements {
            if prev.is_some() {
                acc.emit_newline();
            }
            if should_insert_empty_line(prev, statement) {
                acc.emit_newline();
            }
            statement.accept(self, position, mode, acc)?;
            prev = Some(statement);
        }

        if prev.is_some() {
            acc.emit_newline();
        }
        Ok(())
    }

    pub(super) fn emit_assignment<E: Emitter + ?Sized>(
        &mut self,
        assignment: &Assignment,
        position: usize,
        mode: PositionMode,
        acc: &mut E,
    ) -> Result<(), FormatError> {
        match mode {
            PositionMode::NewLine => {}
            PositionMode::ContinueLine => {
                return Err(FormatError::MisplacedStatement {
                    node: NodeKind::Assignment,
                    mode,
                    position,
                });
            }
            PositionMode::SingleLine => {
                return Err(FormatError::UnsupportedMode {
                    node: NodeKind::Assignment,
                    position,
                });
            }
        }

        self.indent(position, acc);
        acc.emit(&assignment.name);
        acc.emit(" = ");
        assignment
            .value
            .accept(self, position, PositionMode::ContinueLine, acc)
    }

    /// `load("file", "a")` for one symbol, one entry per line otherwise.
    pub(super) fn emit_load<E: Emitter + ?Sized>(
        &mut self,
        load: &LoadStatement,
        position: usize,
        mode: PositionMode,
        acc: &mut E,
    ) -> Result<(), FormatError> {
        if load.symbols.is_empty() {
            return Err(FormatError::EmptyLoad {
                file: load.file.clone(),
            });
        }
        self.leading_indent(NodeKind::Load, position, mode, acc)?;

        if let [symbol] = load.symbols.as_slice() {
            acc.emit("load(");
            self.emit_string(&load.file, position, PositionMode::ContinueLine, acc)?;
            acc.emit(", ");
            symbol.accept(self, position, PositionMode::ContinueLine, acc)?;
            acc.emit(")");
            return Ok(());
        }

        acc.emit("load(");
        acc.emit_newline();
        self.emit_string(&load.file, position + 1, PositionMode::NewLine, acc)?;
        acc.emit(",");
        acc.emit_newline();
        for symbol in &load.symbols {
            symbol.accept(self, position + 1, PositionMode::NewLine, acc)?;
            acc.emit(",");
            acc.emit_newline();
        }
        self.indent(position, acc);
        acc.emit(")");
        Ok(())
    }

    pub(super) fn emit_load_symbol<E: Emitter + ?Sized>(
        &mut self,
        symbol: &LoadSymbol,
        position: usize,
        mode: PositionMode,
        acc: &mut E,
    ) -> Result<(), FormatError> {
        self.leading_indent(NodeKind::LoadSymbol, position, mode, acc)?;
        if let Some(alias) = &symbol.alias {
            acc.emit(alias);
            acc.emit(" = ");
        }
        self.emit_string(&symbol.name, position, PositionMode::ContinueLine, acc)
    }

    /// Every line indented; empty lines stay empty.
    pub(super) fn emit_raw_statement<E: Emitter + ?Sized>(
        &mut self,
        text: &str,
        position: usize,
        mode: PositionMode,
        acc: &mut E,
    ) -> Result<(), FormatError> {
        Self::check_mode(NodeKind::RawStatement, position, mode)?;
        for (i, line) in split_lines(text).enumerate() {
            if i > 0 {
                acc.emit_newline();
            }
            if !line.is_empty() {
                self.indent(position, acc);
                acc.emit(line);
            }
        }
        Ok(())
    }

    pub(super) fn emit_comment<E: Emitter + ?Sized>(
        &mut self,
        text: &str,
        position: usize,
        mode: PositionMode,
        acc: &mut E,
    ) -> Result<(), FormatError> {
        Self::check_mode(NodeKind::Comment, position, mode)?;
        for (i, line) in split_lines(text).enumerate() {
            if i > 0 {
                acc.emit_newline();
            }
            self.indent(position, acc);
            if line.is_empty() {
                acc.emit("#");
            } else {
                acc.emit("# ");
                acc.emit(line);
            }
        }
        Ok(())
    }
}

/// Split on `\r\n`, `\n` or a bare `\r`.
///
/// A trailing break yields a final empty line; `""` yields one empty line.
pub(super) fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(text);
    std::iter::from_fn(move || {
        let current = rest?;
        let Some(at) = current.find(['\r', '\n']) else {
            rest = None;
            return Some(current);
        };
        let width = if current[at..].starts_with("\r\n") { 2 } else { 1 };
        rest = Some(&current[at + width..]);
        Some(&current[..at])
    })
}
