//! Build-time configuration options.
//!
//! Build systems hand generators a flat map of string options. Project
//! properties are exposed under the `build_property.` prefix; [`ConfigOptions`]
//! looks keys up under that prefix and converts the raw strings on demand.

use std::{fmt::Display, str::FromStr};

use indexmap::IndexMap;
use thiserror::Error;

/// Prefix under which build properties are published.
pub const BUILD_PROPERTY_PREFIX: &str = "build_property.";

/// Errors from reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value '{value}' for build property '{key}': {reason}")]
    Invalid {
        key: String,
        value: String,
        reason: String,
    },

    #[error("failed to parse configuration")]
    Parse(#[from] toml::de::Error),
}

/// Ordered raw key/value options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOptions {
    entries: IndexMap<String, String>,
}

impl ConfigOptions {
    /// Create an empty option set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load options from a TOML document.
    ///
    /// Nested tables are flattened into dotted keys, so a
    /// `[build_property]` table yields `build_property.<key>` entries.
    /// Non-string values are stored in their TOML textual form.
    ///
    /// ```
    /// use srcgen_core::ConfigOptions;
    ///
    /// let options = ConfigOptions::from_toml_str(
    ///     "[build_property]\nRootNamespace = \"App\"\nWarningLevel = 4\n",
    /// )
    /// .unwrap();
    /// assert_eq!(options.get::<String>("RootNamespace").unwrap().as_deref(), Some("App"));
    /// assert_eq!(options.get::<u32>("WarningLevel").unwrap(), Some(4));
    /// ```
    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        let table: toml::Table = toml::from_str(src)?;
        let mut options = Self::new();
        options.flatten_table("", &table);
        Ok(options)
    }

    fn flatten_table(&mut self, prefix: &str, table: &toml::Table) {
        for (key, value) in table {
            let full_key = format!("{prefix}{key}");
            match value {
                toml::Value::Table(inner) => self.flatten_table(&format!("{full_key}."), inner),
                toml::Value::String(s) => {
                    self.entries.insert(full_key, s.clone());
                }
                other => {
                    self.entries.insert(full_key, other.to_string());
                }
            }
        }
    }

    /// Insert a raw option under its full key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Raw lookup by full key (no prefix applied).
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Raw lookup of a build property.
    pub fn build_property(&self, key: &str) -> Option<&str> {
        self.raw(&format!("{BUILD_PROPERTY_PREFIX}{key}"))
    }

    /// Read and convert a build property.
    ///
    /// Returns `Ok(None)` if the property is not set. The raw value is
    /// parsed as is, so string options keep their surrounding whitespace;
    /// only when that fails is the trimmed value tried.
    pub fn get<T>(&self, key: &str) -> Result<Option<T>, ConfigError>
    where
        T: FromStr,
        T::Err: Display,
    {
        let Some(value) = self.build_property(key) else {
            return Ok(None);
        };
        value
            .parse::<T>()
            .or_else(|e| match value.trim() {
                trimmed if trimmed.len() < value.len() => trimmed.parse::<T>(),
                _ => Err(e),
            })
            .map(Some)
            .map_err(|e| ConfigError::Invalid {
                key: key.to_string(),
                value: value.to_string(),
                reason: e.to_string(),
            })
    }

    /// Read and convert a build property, falling back to `T::default()`
    /// when it is not set.
    pub fn get_or_default<T>(&self, key: &str) -> Result<T, ConfigError>
    where
        T: FromStr + Default,
        T::Err: Display,
    {
        Ok(self.get(key)?.unwrap_or_default())
    }

    /// Read a boolean build property, accepting `true`/`false` in any case.
    ///
    /// An unset property reads as `false`.
    pub fn get_flag(&self, key: &str) -> Result<bool, ConfigError> {
        let Some(value) = self.build_property(key) else {
            return Ok(false);
        };
        match value.trim() {
            v if v.eq_ignore_ascii_case("true") => Ok(true),
            v if v.eq_ignore_ascii_case("false") || v.is_empty() => Ok(false),
            _ => Err(ConfigError::Invalid {
                key: key.to_string(),
                value: value.to_string(),
                reason: "expected 'true' or 'false'".to_string(),
            }),
        }
    }

    /// Number of stored options.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no options are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for ConfigOptions
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
