//! Turning diagnostic records into reported diagnostics.

use std::fmt;

use indexmap::IndexSet;
use thiserror::Error;

use crate::{DiagnosticInfo, LocationInfo, Severity};

/// A diagnostic ready to be handed to the host.
///
/// Rendered from a [`DiagnosticInfo`] at the reporting boundary. Displays
/// in the usual compiler form, `path(line,col): severity ID: message`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}{severity} {id}: {message}", location_prefix(.location))]
pub struct Diagnostic {
    pub id: String,
    pub severity: Severity,
    pub message: String,
    pub category: String,
    pub location: Option<LocationInfo>,
    pub help: Option<String>,
}

fn location_prefix(location: &Option<LocationInfo>) -> String {
    location
        .as_ref()
        .map(|location| format!("{location}: "))
        .unwrap_or_default()
}

impl From<&DiagnosticInfo> for Diagnostic {
    fn from(info: &DiagnosticInfo) -> Self {
        let descriptor = info.descriptor();
        Self {
            id: descriptor.id.clone(),
            severity: descriptor.default_severity,
            message: info.message(),
            category: descriptor.category.clone(),
            location: info.location().cloned(),
            help: descriptor.help.clone(),
        }
    }
}

impl miette::Diagnostic for Diagnostic {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(&self.id))
    }

    fn severity(&self) -> Option<miette::Severity> {
        Some(self.severity.into())
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.help
            .as_ref()
            .map(|help| Box::new(help) as Box<dyn fmt::Display + 'a>)
    }
}

/// Receiver of reported diagnostics.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);

    /// Render and report a record.
    fn report_info(&mut self, info: &DiagnosticInfo) {
        self.report(Diagnostic::from(info));
    }
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Ordered set of diagnostic records.
///
/// Collects the diagnostics of many outcomes, dropping records equal to
/// one already held, and reports them in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticBag {
    items: IndexSet<DiagnosticInfo>,
}

impl DiagnosticBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record. Returns false if an equal record was already present.
    pub fn push(&mut self, info: DiagnosticInfo) -> bool {
        self.items.insert(info)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.items.iter().any(DiagnosticInfo::is_error)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticInfo> {
        self.items.iter()
    }

    /// Report every record to `sink`, emptying the bag.
    pub fn report_to(&mut self, sink: &mut impl DiagnosticSink) {
        let count = self.items.len();
        for info in self.items.drain(..) {
            sink.report_info(&info);
        }
        tracing::debug!(count, "reported diagnostics");
    }
}

impl Extend<DiagnosticInfo> for DiagnosticBag {
    fn extend<I: IntoIterator<Item = DiagnosticInfo>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<'a> Extend<&'a DiagnosticInfo> for DiagnosticBag {
    fn extend<I: IntoIterator<Item = &'a DiagnosticInfo>>(&mut self, iter: I) {
        self.items.extend(iter.into_iter().cloned());
    }
}

impl FromIterator<DiagnosticInfo> for DiagnosticBag {
    fn from_iter<I: IntoIterator<Item = DiagnosticInfo>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
