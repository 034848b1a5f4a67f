//! Document formats understood by the file helpers.
//!
//! Each [`Format`] pairs a decoder with an encoder from an established serde
//! backend. YAML is always available; TOML requires the `toml` feature.

use std::fmt;
use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};

use crate::options::YamlOptions;

pub(crate) type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Serialization formats supported for reading and writing documents.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum Format {
    /// YAML 1.2, parsed and emitted by `serde-saphyr`.
    Yaml,
    /// JSON, handled by `serde_json`.
    Json,
    /// TOML, handled by the `toml` crate.
    #[cfg(feature = "toml")]
    Toml,
}

impl Format {
    /// Select a format from the extension of `path`.
    ///
    /// Matching ignores ASCII case. Unknown or missing extensions yield
    /// `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use datakit::Format;
    /// use std::path::Path;
    ///
    /// assert_eq!(Format::from_path(Path::new("app.YML")), Some(Format::Yaml));
    /// assert_eq!(Format::from_path(Path::new("notes.txt")), None);
    /// ```
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("yaml" | "yml") => Some(Self::Yaml),
            Some("json") => Some(Self::Json),
            #[cfg(feature = "toml")]
            Some("toml") => Some(Self::Toml),
            _ => None,
        }
    }

    /// Short lowercase name of the format.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Yaml => "yaml",
            Self::Json => "json",
            #[cfg(feature = "toml")]
            Self::Toml => "toml",
        }
    }

    /// Parse `data` into `T`.
    ///
    /// `options` only affects YAML input.
    pub(crate) fn decode<T: DeserializeOwned>(
        self,
        data: &str,
        options: YamlOptions,
    ) -> Result<T, BoxError> {
        match self {
            Self::Yaml => serde_saphyr::from_str_with_options(data, options.to_saphyr())
                .map_err(Into::into),
            Self::Json => serde_json::from_str(data).map_err(Into::into),
            #[cfg(feature = "toml")]
            Self::Toml => toml::from_str(data).map_err(Into::into),
        }
    }

    /// Render `value` as a document string.
    pub(crate) fn encode<T: Serialize>(self, value: &T) -> Result<String, BoxError> {
        match self {
            Self::Yaml => serde_saphyr::to_string(value).map_err(Into::into),
            Self::Json => serde_json::to_string_pretty(value).map_err(Into::into),
            #[cfg(feature = "toml")]
            Self::Toml => toml::to_string(value).map_err(Into::into),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
