//! Starlark File Roots
//!
//! The four root documents and their canonical file names:
//!
//! | Kind | Name |
//! |------|------|
//! | Workspace | `WORKSPACE` / `WORKSPACE.bazel` |
//! | Build | `BUILD` / `BUILD.bazel` |
//! | Bzl | `<name>.bzl` |
//! | Star | `<name>.star` |

#[cfg(test)]
mod tests;

use crate::stmt::Statement;

/// Which kind of Starlark document a file is.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FileKind {
    Workspace,
    Build,
    Bzl,
    Star,
}

/// Root of a syntax tree.
///
/// The name is derived once at construction and cannot be changed afterwards.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StarlarkFile {
    kind: FileKind,
    name: String,
    pub statements: Vec<Statement>,
}

impl StarlarkFile {
    /// A `WORKSPACE` file, with `.bazel` extension when `has_extension` is set.
    pub fn workspace(has_extension: bool, statements: Vec<Statement>) -> Self {
        let name = if has_extension {
            "WORKSPACE.bazel"
        } else {
            "WORKSPACE"
        };
        Self::with_name(FileKind::Workspace, name.to_owned(), statements)
    }

    /// A `BUILD` file, with `.bazel` extension when `has_extension` is set.
    pub fn build(has_extension: bool, statements: Vec<Statement>) -> Self {
        let name = if has_extension { "BUILD.bazel" } else { "BUILD" };
        Self::with_name(FileKind::Build, name.to_owned(), statements)
    }

    /// A `.bzl` module. The suffix is appended unless `name` already has it.
    pub fn bzl(name: impl Into<String>, statements: Vec<Statement>) -> Self {
        Self::with_name(FileKind::Bzl, with_suffix(name.into(), ".bzl"), statements)
    }

    /// A `.star` module. The suffix is appended unless `name` already has it.
    pub fn star(name: impl Into<String>, statements: Vec<Statement>) -> Self {
        Self::with_name(FileKind::Star, with_suffix(name.into(), ".star"), statements)
    }

    fn with_name(kind: FileKind, name: String, statements: Vec<Statement>) -> Self {
        StarlarkFile {
            kind,
            name,
            statements,
        }
    }

    pub fn kind(&self) -> FileKind {
        self.kind
    }

    /// Canonical file name, used by writers to place the file on disk.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Append `suffix` unless `name` already ends with it, ignoring ASCII case.
fn with_suffix(mut name: String, suffix: &str) -> String {
    let has_suffix = name.len() >= suffix.len()
        && name.is_char_boundary(name.len() - suffix.len())
        && name[name.len() - suffix.len()..].eq_ignore_ascii_case(suffix);
    if !has_suffix {
        name.push_str(suffix);
    }
    name
}
