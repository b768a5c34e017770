//! Declared accessibility of types and members.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Access level for types and members.
///
/// Mirrors the levels a host compiler reports for a declared symbol.
/// `NotApplicable` is what the host reports for symbols that carry no
/// accessibility at all (locals, namespaces); it has no keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Accessibility {
    /// No accessibility applies to the symbol.
    NotApplicable,
    /// `private`
    Private,
    /// `private protected`
    ProtectedAndInternal,
    /// `protected`
    Protected,
    /// `internal`
    Internal,
    /// `protected internal`
    ProtectedOrInternal,
    /// `public`
    #[default]
    Public,
}

impl Accessibility {
    /// Canonical keyword phrase for this level.
    ///
    /// Returns `None` for [`Accessibility::NotApplicable`].
    pub fn keyword(self) -> Option<&'static str> {
        match self {
            Self::Public => Some("public"),
            Self::Protected => Some("protected"),
            Self::Private => Some("private"),
            Self::Internal => Some("internal"),
            Self::ProtectedOrInternal => Some("protected internal"),
            Self::ProtectedAndInternal => Some("private protected"),
            Self::NotApplicable => None,
        }
    }

    /// Check if this is public accessibility.
    pub fn is_public(self) -> bool {
        matches!(self, Self::Public)
    }

    /// Check if this is private accessibility.
    pub fn is_private(self) -> bool {
        matches!(self, Self::Private)
    }
}

impl fmt::Display for Accessibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.keyword() {
            Some(keyword) => f.write_str(keyword),
            None => f.write_str("<not applicable>"),
        }
    }
}

/// Error returned when parsing an unknown accessibility phrase.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown accessibility '{0}'")]
pub struct ParseAccessibilityError(pub String);

impl FromStr for Accessibility {
    type Err = ParseAccessibilityError;

    /// Parse a keyword phrase. Runs of whitespace between words are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = s.split_whitespace().collect();
        match words.as_slice() {
            ["public"] => Ok(Self::Public),
            ["protected"] => Ok(Self::Protected),
            ["private"] => Ok(Self::Private),
            ["internal"] => Ok(Self::Internal),
            ["protected", "internal"] | ["internal", "protected"] => {
                Ok(Self::ProtectedOrInternal)
            }
            ["private", "protected"] | ["protected", "private"] => {
                Ok(Self::ProtectedAndInternal)
            }
            _ => Err(ParseAccessibilityError(s.to_string())),
        }
    }
}
