//! Indentation-tracking source builder.

use std::fmt::{self, Write as _};

use crate::{EmitError, GrowableBuffer, Indent};

/// Fluent builder for indented source text.
///
/// Every emitting method returns `&mut Self` so calls chain. The builder
/// tracks an indentation depth but never writes indentation on its own:
/// whatever starts a line of content calls [`indent`](Self::indent) first.
/// The helpers in this crate (`line`, `field`, `if_`, ...) all do so.
///
/// # Example
///
/// ```
/// use srcgen_emit::SourceBuilder;
///
/// let mut builder = SourceBuilder::new();
/// builder
///     .line("class Greeter")
///     .begin_scope()
///     .line("void Hello() { }")
///     .end_scope();
///
/// assert_eq!(
///     builder.build().unwrap(),
///     "class Greeter\n{\n    void Hello() { }\n}\n"
/// );
/// ```
#[derive(Debug)]
pub struct SourceBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: GrowableBuffer,
}

impl SourceBuilder {
    /// Create a builder with four-space indentation.
    pub fn new() -> Self {
        Self::with_indent(Indent::default())
    }

    /// Create a builder with the given indentation unit.
    pub fn with_indent(indent: Indent) -> Self {
        Self::with_buffer(GrowableBuffer::new(), indent)
    }

    /// Create a builder over an existing buffer.
    pub fn with_buffer(buffer: GrowableBuffer, indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer,
        }
    }

    /// Append raw text.
    pub fn append(&mut self, s: &str) -> &mut Self {
        self.buffer.append(s);
        self
    }

    /// Append a single character.
    pub fn append_char(&mut self, c: char) -> &mut Self {
        self.buffer.append_char(c);
        self
    }

    /// Append the `Display` form of a value.
    ///
    /// # Panics
    ///
    /// Panics if the value's `Display` impl returns an error; see
    /// [`try_append_display`](Self::try_append_display).
    pub fn append_display(&mut self, value: impl fmt::Display) -> &mut Self {
        self.append_fmt(format_args!("{value}"))
    }

    /// Append the `Display` form of a value, failing if formatting does.
    pub fn try_append_display(&mut self, value: impl fmt::Display) -> Result<&mut Self, EmitError> {
        self.try_append_fmt(format_args!("{value}"))
    }

    /// Append pre-formatted arguments, as produced by `format_args!`.
    ///
    /// # Panics
    ///
    /// Panics if formatting fails; see [`try_append_fmt`](Self::try_append_fmt).
    pub fn append_fmt(&mut self, args: fmt::Arguments<'_>) -> &mut Self {
        match self.try_append_fmt(args) {
            Ok(builder) => builder,
            Err(err) => panic!("{err}"),
        }
    }

    /// Append pre-formatted arguments, failing if formatting does.
    ///
    /// On failure whatever was written before the error is removed again.
    pub fn try_append_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<&mut Self, EmitError> {
        let len = self.buffer.len();
        if self.buffer.write_fmt(args).is_err() {
            self.buffer.truncate(len);
            return Err(EmitError::Format);
        }
        Ok(self)
    }

    /// Terminate the current line.
    pub fn new_line(&mut self) -> &mut Self {
        self.buffer.append_char('\n');
        self
    }

    /// Write one indentation unit per level of depth.
    pub fn indent(&mut self) -> &mut Self {
        let unit = self.indent.as_str();
        for _ in 0..self.indent_level {
            self.buffer.append(unit);
        }
        self
    }

    /// Write an indented line of text.
    pub fn line(&mut self, s: &str) -> &mut Self {
        self.indent().append(s).new_line()
    }

    /// Increase the indentation depth.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease the indentation depth.
    ///
    /// # Panics
    ///
    /// Panics at depth zero; see [`try_push_dedent`](Self::try_push_dedent).
    pub fn push_dedent(&mut self) -> &mut Self {
        match self.try_push_dedent() {
            Ok(builder) => builder,
            Err(err) => panic!("{err}"),
        }
    }

    /// Decrease the indentation depth, failing at depth zero.
    pub fn try_push_dedent(&mut self) -> Result<&mut Self, EmitError> {
        self.indent_level = self
            .indent_level
            .checked_sub(1)
            .ok_or(EmitError::UnbalancedScope)?;
        Ok(self)
    }

    /// Current indentation depth.
    pub fn indent_level(&self) -> usize {
        self.indent_level
    }

    /// Override the indentation depth.
    pub fn set_indent_level(&mut self, level: usize) -> &mut Self {
        self.indent_level = level;
        self
    }

    /// The indentation unit in use.
    pub fn indent_unit(&self) -> Indent {
        self.indent
    }

    /// Length of the emitted text in bytes.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Whether nothing has been emitted.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Cut the emitted text back to `len` bytes.
    ///
    /// # Panics
    ///
    /// Panics if `len` exceeds the current length or splits a character.
    pub fn set_len(&mut self, len: usize) -> &mut Self {
        match self.try_set_len(len) {
            Ok(builder) => builder,
            Err(err) => panic!("{err}"),
        }
    }

    /// Cut the emitted text back to `len` bytes, failing instead of panicking.
    pub fn try_set_len(&mut self, len: usize) -> Result<&mut Self, EmitError> {
        if len > self.buffer.len() || !self.buffer.as_str().is_char_boundary(len) {
            return Err(EmitError::InvalidLength {
                requested: len,
                len: self.buffer.len(),
            });
        }
        self.buffer.truncate(len);
        Ok(self)
    }

    /// Discard all text and reset the depth to zero.
    pub fn clear(&mut self) -> &mut Self {
        self.buffer.clear();
        self.indent_level = 0;
        self
    }

    /// The text emitted so far.
    pub fn as_str(&self) -> &str {
        self.buffer.as_str()
    }

    /// The text emitted so far, trimmed of surrounding whitespace.
    pub fn to_trim_string(&self) -> String {
        self.buffer.to_trim_string()
    }

    /// Consume the builder and return the generated source.
    ///
    /// Fails if any scope is still open.
    pub fn build(self) -> Result<String, EmitError> {
        if self.indent_level != 0 {
            return Err(EmitError::UnclosedScopes {
                depth: self.indent_level,
            });
        }
        Ok(self.buffer.into_string())
    }

    /// Consume the builder and return the text without checking balance.
    pub fn into_string(self) -> String {
        self.buffer.into_string()
    }
}

impl Default for SourceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SourceBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Write for SourceBuilder {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.buffer.append(s);
        Ok(())
    }
}
