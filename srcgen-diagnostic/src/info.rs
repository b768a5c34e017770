//! Value-comparable diagnostic records.

use std::{collections::BTreeMap, sync::Arc};

use serde::{Deserialize, Serialize};

use crate::{DiagnosticDescriptor, LocationInfo, Severity, SourceLocation};

/// A diagnostic held as plain data.
///
/// Two records are equal when their descriptor, location, message argument
/// and properties are equal, so a record produced by one run compares equal
/// to the same record from the next run.
///
/// ```
/// use std::sync::Arc;
/// use srcgen_diagnostic::{DiagnosticDescriptor, DiagnosticInfo, Severity};
///
/// let descriptor = Arc::new(DiagnosticDescriptor::new(
///     "GEN002",
///     "Unsupported member",
///     "Member '{0}' is not supported",
///     "Usage",
///     Severity::Warning,
/// ));
///
/// let info = DiagnosticInfo::new(Arc::clone(&descriptor)).with_arg("Dispose");
/// assert_eq!(info.message(), "Member 'Dispose' is not supported");
/// assert_eq!(info, DiagnosticInfo::new(descriptor).with_arg("Dispose"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiagnosticInfo {
    descriptor: Arc<DiagnosticDescriptor>,
    location: Option<LocationInfo>,
    message_arg: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    properties: BTreeMap<String, String>,
}

impl DiagnosticInfo {
    /// Create a record with no location, argument or properties.
    pub fn new(descriptor: Arc<DiagnosticDescriptor>) -> Self {
        Self {
            descriptor,
            location: None,
            message_arg: None,
            properties: BTreeMap::new(),
        }
    }

    /// Attach the position of a live source element.
    pub fn at(self, location: &impl SourceLocation) -> Self {
        self.at_location(LocationInfo::from_source(location))
    }

    /// Attach an already detached location.
    pub fn at_location(mut self, location: LocationInfo) -> Self {
        self.location = Some(location);
        self
    }

    /// Set the argument substituted into the descriptor's message.
    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.message_arg = Some(arg.into());
        self
    }

    /// Add a key/value property for downstream fixers.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn descriptor(&self) -> &DiagnosticDescriptor {
        &self.descriptor
    }

    pub fn location(&self) -> Option<&LocationInfo> {
        self.location.as_ref()
    }

    pub fn message_arg(&self) -> Option<&str> {
        self.message_arg.as_deref()
    }

    pub fn properties(&self) -> &BTreeMap<String, String> {
        &self.properties
    }

    pub fn id(&self) -> &str {
        &self.descriptor.id
    }

    pub fn severity(&self) -> Severity {
        self.descriptor.default_severity
    }

    pub fn is_error(&self) -> bool {
        self.severity().is_error()
    }

    /// The formatted message.
    pub fn message(&self) -> String {
        self.descriptor.format_message(self.message_arg.as_deref())
    }
}
