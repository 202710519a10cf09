//! Starlark Formatter
//!
//! Renders a [`starlark_ir`] tree into canonical, byte-stable Starlark source.
//!
//! # Architecture
//!
//! A single top-down pass. The [`Printer`] visits every node with its
//! indentation depth and a [`PositionMode`](starlark_ir::PositionMode), and
//! each node picks its own layout:
//!
//! - Collections, tuples, dictionaries and call arguments collapse onto one
//!   line when they are short and simple, else stack one entry per line with
//!   trailing commas.
//! - Comprehensions break when their body is compound.
//! - Top-level statements are grouped with blank lines by kind.
//!
//! # Modules
//!
//! - [`heuristics`]: the layout predicates
//! - [`emitter`]: output abstraction
//! - [`context`]: configuration and the indentation cache
//! - [`formatter`]: the rendering visitor
//!
//! # Example
//!
//! ```
//! use starlark_fmt::format_file;
//! use starlark_ir::{Argument, Expression, FunctionCall, StarlarkFile, Statement};
//!
//! let call = FunctionCall::new(
//!     "android_binary",
//!     vec![
//!         Argument::named("name", "app"),
//!         Argument::named("deps", Expression::list(vec![])),
//!     ],
//! );
//! let file = StarlarkFile::build(false, vec![Statement::Expression(call.into())]);
//!
//! assert_eq!(
//!     format_file(&file).unwrap(),
//!     "android_binary(\n    name = \"app\",\n    deps = [],\n)\n",
//! );
//! ```

pub mod context;
pub mod emitter;
mod error;
pub mod formatter;
pub mod heuristics;

pub use context::{FormatConfig, IndentCache, DEFAULT_INDENT_SIZE};
pub use emitter::{Emitter, StringEmitter};
pub use error::FormatError;
pub use formatter::{format_file, CodeFormatter, Printer};
pub use heuristics::SINGLE_LINE_LENGTH_THRESHOLD;
