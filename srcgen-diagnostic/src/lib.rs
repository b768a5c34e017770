//! Diagnostics for source generators.
//!
//! Generators describe each problem with a [`DiagnosticInfo`]: plain data
//! that is compared by value and carries a detached [`LocationInfo`]
//! rather than a live syntax handle. Results travel as [`Outcome`]s, which
//! pair an optional value with its diagnostics and can be cached across
//! runs with [`OutcomeCache`]. At the reporting boundary records are
//! rendered into [`Diagnostic`]s, which implement [`miette::Diagnostic`].

mod cache;
mod descriptor;
mod info;
mod location;
mod outcome;
mod report;

pub use cache::{Freshness, OutcomeCache};
pub use descriptor::{DiagnosticDescriptor, Severity};
pub use info::DiagnosticInfo;
pub use location::{LinePosition, LinePositionSpan, LocationInfo, SourceLocation, TextSpan};
pub use outcome::{Outcome, OutcomesExt, split_outcomes};
pub use report::{Diagnostic, DiagnosticBag, DiagnosticSink};
