//! Line-oriented source writer.
//!
//! Wraps an [`Emitter`] and tracks the indentation level so renderers can
//! write one declaration line at a time. Lines are separated, not
//! terminated: the finished text never ends with a newline, which lets
//! callers join fragments with a blank line.

use crate::emitter::{Emitter, StringEmitter};

/// Indentation-aware line writer.
pub struct SourceWriter<E: Emitter = StringEmitter> {
    emitter: E,
    indent_level: usize,
    indent_width: usize,
    has_lines: bool,
}

impl SourceWriter<StringEmitter> {
    /// Create a writer over a fresh string emitter.
    pub fn new(indent_width: usize) -> Self {
        Self::with_emitter(StringEmitter::new(), indent_width)
    }

    /// Finish writing and return the text.
    pub fn finish(self) -> String {
        self.emitter.output()
    }
}

impl<E: Emitter> SourceWriter<E> {
    /// Create a writer over an existing emitter.
    pub fn with_emitter(emitter: E, indent_width: usize) -> Self {
        Self {
            emitter,
            indent_level: 0,
            indent_width,
            has_lines: false,
        }
    }

    /// Start at the given indentation level.
    #[must_use]
    pub fn at_level(mut self, level: usize) -> Self {
        self.indent_level = level;
        self
    }

    pub fn indent_level(&self) -> usize {
        self.indent_level
    }

    /// Increase indentation by one level.
    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decrease indentation by one level.
    pub fn dedent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    /// Write one line at the current indentation. Empty lines carry no indent.
    pub fn line(&mut self, text: &str) {
        if self.has_lines {
            self.emitter.emit_newline();
        }
        if !text.is_empty() {
            self.emitter.emit_indent(self.indent_level * self.indent_width);
            self.emitter.emit(text);
        }
        self.has_lines = true;
    }

    /// Write a line, open a block on it, and indent.
    pub fn open(&mut self, text: &str) {
        self.line(text);
        self.indent();
    }

    /// Dedent and write a closing line.
    pub fn close(&mut self, text: &str) {
        self.dedent();
        self.line(text);
    }

    /// Check if anything has been written.
    pub fn is_empty(&self) -> bool {
        !self.has_lines
    }

    /// Consume the writer, returning its emitter.
    pub fn into_emitter(self) -> E {
        self.emitter
    }
}
