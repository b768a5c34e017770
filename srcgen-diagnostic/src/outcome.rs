//! Generator results paired with the diagnostics they produced.

use serde::{Deserialize, Serialize};

use crate::DiagnosticInfo;

/// An optional value together with its diagnostics.
///
/// Produced once per unit of generator input and not modified afterwards.
/// `value` is `None` when the unit produced nothing usable, which is
/// usually, but not necessarily, accompanied by an error diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Outcome<T> {
    value: Option<T>,
    diagnostics: Vec<DiagnosticInfo>,
}

impl<T> Outcome<T> {
    pub fn new(value: Option<T>, diagnostics: Vec<DiagnosticInfo>) -> Self {
        Self { value, diagnostics }
    }

    /// A value with no diagnostics.
    pub fn ok(value: T) -> Self {
        Self::new(Some(value), Vec::new())
    }

    /// No value, one diagnostic.
    pub fn failed(diagnostic: DiagnosticInfo) -> Self {
        Self::new(None, vec![diagnostic])
    }

    /// A value produced with a diagnostic attached.
    pub fn with_diagnostic(value: T, diagnostic: DiagnosticInfo) -> Self {
        Self::new(Some(value), vec![diagnostic])
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn diagnostics(&self) -> &[DiagnosticInfo] {
        &self.diagnostics
    }

    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// Whether any diagnostic is an error.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(DiagnosticInfo::is_error)
    }

    /// Transform the value, keeping the diagnostics.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        Outcome {
            value: self.value.map(f),
            diagnostics: self.diagnostics,
        }
    }

    pub fn into_parts(self) -> (Option<T>, Vec<DiagnosticInfo>) {
        (self.value, self.diagnostics)
    }
}

impl<T> From<T> for Outcome<T> {
    fn from(value: T) -> Self {
        Self::ok(value)
    }
}

/// Splitting views over a batch of borrowed outcomes.
pub trait OutcomesExt<'a, T: 'a>: Iterator<Item = &'a Outcome<T>> + Sized {
    /// Every present value, in order.
    fn values(self) -> impl Iterator<Item = &'a T> {
        self.filter_map(Outcome::value)
    }

    /// Every diagnostic, in order, including those of outcomes without a
    /// value.
    fn diagnostics(self) -> impl Iterator<Item = &'a DiagnosticInfo> {
        self.flat_map(|outcome| outcome.diagnostics.iter())
    }
}

impl<'a, T: 'a, I> OutcomesExt<'a, T> for I where I: Iterator<Item = &'a Outcome<T>> {}

/// Split owned outcomes into their values and all of their diagnostics.
pub fn split_outcomes<T>(
    outcomes: impl IntoIterator<Item = Outcome<T>>,
) -> (Vec<T>, Vec<DiagnosticInfo>) {
    let mut values = Vec::new();
    let mut diagnostics = Vec::new();
    for outcome in outcomes {
        let (value, mut found) = outcome.into_parts();
        values.extend(value);
        diagnostics.append(&mut found);
    }
    (values, diagnostics)
}
