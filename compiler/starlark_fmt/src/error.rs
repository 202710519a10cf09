//! Formatting errors.

use starlark_ir::{NodeKind, PositionMode};
use thiserror::Error;

/// A tree the formatter refuses to render.
///
/// Every variant names the offending node and the depth it was reached at,
/// so the subtree can be found without re-running the formatter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// `PositionMode::SingleLine` was requested.
    #[error("single-line mode is not supported (while formatting {node} at position {position})")]
    UnsupportedMode { node: NodeKind, position: usize },

    #[error("{node} at position {position} has no clauses")]
    EmptyComprehension { node: NodeKind, position: usize },

    #[error("`for` clause at position {position} has no loop variables")]
    MissingLoopVariables { position: usize },

    #[error("load of \"{file}\" imports no symbols")]
    EmptyLoad { file: String },

    /// A statement was placed somewhere only expressions may go.
    #[error("{node} must start on a new line but was formatted in {mode:?} mode at position {position}")]
    MisplacedStatement {
        node: NodeKind,
        mode: PositionMode,
        position: usize,
    },
}

impl FormatError {
    /// The kind of node that failed to render.
    pub fn node(&self) -> NodeKind {
        match self {
            FormatError::UnsupportedMode { node, .. }
            | FormatError::EmptyComprehension { node, .. }
            | FormatError::MisplacedStatement { node, .. } => *node,
            FormatError::MissingLoopVariables { .. } => NodeKind::ComprehensionFor,
            FormatError::EmptyLoad { .. } => NodeKind::Load,
        }
    }
}
