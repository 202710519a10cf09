//! Formatting Context
//!
//! Configuration for a formatting run and the per-call indentation cache.

use rustc_hash::FxHashMap;


/// Spaces per indentation level.
pub const DEFAULT_INDENT_SIZE: usize = 4;

/// Configuration for the formatter.
///
/// Indentation width is the only recognized option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatConfig {
    /// Indentation size in spaces.
    /// Defaults to 4 spaces.
    pub indent_size: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            indent_size: DEFAULT_INDENT_SIZE,
        }
    }
}

impl FormatConfig {
    /// Create a new config with the specified indent size.
    pub fn with_indent_size(indent_size: usize) -> Self {
        Self { indent_size }
    }
}

/// Indentation strings memoized per depth.
///
/// Seeded with depths 0 and 1; deeper levels are built once on first use.
/// One cache lives for exactly one formatting call.
pub struct IndentCache {
    unit: String,
    levels: FxHashMap<usize, String>,
}

impl IndentCache {
    pub fn new(config: FormatConfig) -> Self {
        let unit = " ".repeat(config.indent_size);
        let mut levels = FxHashMap::default();
        levels.insert(0, String::new());
        levels.insert(1, unit.clone());
        IndentCache { unit, levels }
    }

    /// Indentation for `level`.
    pub fn get(&mut self, level: usize) -> &str {
        let unit = &self.unit;
        self.levels.entry(level).or_insert_with(|| {
            tracing::trace!(depth = level, "indent cache miss");
            unit.repeat(level)
        })
    }

    /// Number of depths computed so far.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}
