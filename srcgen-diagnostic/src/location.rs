//! Detached source locations.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

/// A zero-based line and column.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct LinePosition {
    pub line: u32,
    pub character: u32,
}

impl LinePosition {
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

/// Displays one-based, as editors and compilers show positions.
impl fmt::Display for LinePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.line + 1, self.character + 1)
    }
}

/// Start and end positions of a region of text.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct LinePositionSpan {
    pub start: LinePosition,
    pub end: LinePosition,
}

impl LinePositionSpan {
    pub fn new(start: LinePosition, end: LinePosition) -> Self {
        Self { start, end }
    }
}

/// A byte range within a file.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct TextSpan {
    pub start: usize,
    pub length: usize,
}

impl TextSpan {
    pub fn new(start: usize, length: usize) -> Self {
        Self { start, length }
    }

    /// Exclusive end offset.
    pub fn end(&self) -> usize {
        self.start + self.length
    }
}

impl From<TextSpan> for miette::SourceSpan {
    fn from(span: TextSpan) -> Self {
        (span.start, span.length).into()
    }
}

/// Something that can report where it sits in a source file.
///
/// Implemented by the host's live syntax handles. Those are tied to a
/// particular parse and must not be kept across runs; convert them to a
/// [`LocationInfo`] instead.
pub trait SourceLocation {
    fn file_path(&self) -> &Path;
    fn text_span(&self) -> TextSpan;
    fn line_span(&self) -> LinePositionSpan;
}

/// A plain-data snapshot of a source location.
///
/// Equal locations compare and hash equal regardless of which parse they
/// were taken from, so values holding them stay cacheable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LocationInfo {
    pub file_path: PathBuf,
    pub text_span: TextSpan,
    pub line_span: LinePositionSpan,
}

impl LocationInfo {
    pub fn new(
        file_path: impl Into<PathBuf>,
        text_span: TextSpan,
        line_span: LinePositionSpan,
    ) -> Self {
        Self {
            file_path: file_path.into(),
            text_span,
            line_span,
        }
    }

    /// Snapshot a live location.
    pub fn from_source(location: &impl SourceLocation) -> Self {
        Self {
            file_path: location.file_path().to_path_buf(),
            text_span: location.text_span(),
            line_span: location.line_span(),
        }
    }
}

impl SourceLocation for LocationInfo {
    fn file_path(&self) -> &Path {
        &self.file_path
    }

    fn text_span(&self) -> TextSpan {
        self.text_span
    }

    fn line_span(&self) -> LinePositionSpan {
        self.line_span
    }
}

impl fmt::Display for LocationInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.file_path.display(), self.line_span.start)
    }
}
