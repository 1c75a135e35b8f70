//! Sinks for generated source text.
//!
//! [`SourceWriter`](crate::writer::SourceWriter) decides what goes on each
//! line; an [`Emitter`] only decides where the characters end up. Besides
//! the owned [`StringEmitter`], a plain `String` is an emitter, so a caller
//! assembling a whole mock file can render fragments straight into its
//! buffer.

/// Destination of generated source.
pub trait Emitter {
    fn emit(&mut self, text: &str);

    /// Generated sources always separate lines with `\n`.
    fn emit_newline(&mut self);

    fn emit_indent(&mut self, spaces: usize);
}

/// Owned buffer for rendering one declaration.
#[derive(Debug, Default)]
pub struct StringEmitter {
    buffer: String,
}

impl StringEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: String::with_capacity(capacity),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Take the rendered text.
    pub fn output(self) -> String {
        self.buffer
    }
}

impl Emitter for StringEmitter {
    fn emit(&mut self, text: &str) {
        self.buffer.emit(text);
    }

    fn emit_newline(&mut self) {
        self.buffer.emit_newline();
    }

    fn emit_indent(&mut self, spaces: usize) {
        self.buffer.emit_indent(spaces);
    }
}

impl Emitter for String {
    fn emit(&mut self, text: &str) {
        self.push_str(text);
    }

    fn emit_newline(&mut self) {
        self.push('\n');
    }

    fn emit_indent(&mut self, spaces: usize) {
        self.extend(std::iter::repeat(' ').take(spaces));
    }
}
