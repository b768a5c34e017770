//! Diagnostic descriptors and severities.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How seriously the host should treat a reported diagnostic.
///
/// Ordered from least to most severe, so a reporting threshold is a plain
/// comparison: `severity >= Severity::Warning`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    /// The unit's output is unusable; its outcome normally carries no value.
    Error,
}

impl Severity {
    /// Lowercase keyword used in rendered diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    pub fn is_error(self) -> bool {
        self == Severity::Error
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Severity> for miette::Severity {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Error => miette::Severity::Error,
            Severity::Warning => miette::Severity::Warning,
            Severity::Info => miette::Severity::Advice,
        }
    }
}

/// Static description of a kind of diagnostic.
///
/// Generators declare one descriptor per condition they report and share
/// it behind an `Arc`. `message_format` may contain a single `{0}`
/// placeholder, filled from the diagnostic's message argument.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiagnosticDescriptor {
    pub id: String,
    pub title: String,
    pub message_format: String,
    pub category: String,
    pub default_severity: Severity,
    pub enabled_by_default: bool,
    pub help: Option<String>,
}

impl DiagnosticDescriptor {
    /// Create an enabled descriptor.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        message_format: impl Into<String>,
        category: impl Into<String>,
        default_severity: Severity,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            message_format: message_format.into(),
            category: category.into(),
            default_severity,
            enabled_by_default: true,
            help: None,
        }
    }

    /// Attach a help text shown alongside rendered diagnostics.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Mark the descriptor as disabled unless explicitly turned on.
    pub fn disabled_by_default(mut self) -> Self {
        self.enabled_by_default = false;
        self
    }

    /// Format the message, substituting `{0}` with `arg` when given.
    pub fn format_message(&self, arg: Option<&str>) -> String {
        match arg {
            Some(arg) => self.message_format.replace("{0}", arg),
            None => self.message_format.clone(),
        }
    }
}
