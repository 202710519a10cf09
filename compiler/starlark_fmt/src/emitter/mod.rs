//! Output Emitter
//!
//! The accumulator the formatter renders into. `StringEmitter` is the
//! in-memory buffer used by every formatting call; callers composing larger
//! outputs can pass any other `Emitter`, such as a plain `String`.


/// Trait for emitting formatted output.
pub trait Emitter {
    /// Emit a text fragment.
    fn emit(&mut self, text: &str);

    /// Emit a newline (Unix-style `\n`).
    fn emit_newline(&mut self) {
        self.emit("\n");
    }

    /// Emit a single space.
    fn emit_space(&mut self) {
        self.emit(" ");
    }
}

/// String-based emitter for in-memory formatting.
#[derive(Default)]
pub struct StringEmitter {
    buffer: String,
}

impl StringEmitter {
    /// Create a new string emitter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the formatted output.
    pub fn output(self) -> String {
        self.buffer
    }

    /// Ensure the output ends with a single newline.
    pub fn ensure_trailing_newline(&mut self) {
        if !self.buffer.ends_with('\n') {
            self.buffer.push('\n');
        }
    }

    /// Remove trailing blank lines, keeping at most one final newline.
    pub fn trim_trailing_blank_lines(&mut self) {
        while self.buffer.ends_with("\n\n") {
            self.buffer.pop();
        }
    }

    /// Finish a file: no trailing blank lines, exactly one final newline.
    ///
    /// Empty output stays empty.
    pub fn finalize(mut self) -> String {
        if self.buffer.is_empty() {
            return self.buffer;
        }
        self.trim_trailing_blank_lines();
        self.ensure_trailing_newline();
        self.buffer
    }
}

impl Emitter for StringEmitter {
    fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn emit_newline(&mut self) {
        self.buffer.push('\n');
    }

    fn emit_space(&mut self) {
        self.buffer.push(' ');
    }
}

impl Emitter for String {
    fn emit(&mut self, text: &str) {
        self.push_str(text);
    }
}
