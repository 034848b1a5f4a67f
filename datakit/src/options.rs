//! Reader options for YAML documents.

use serde::{Deserialize, Serialize};

/// How the YAML reader treats a key that appears twice in one mapping.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateKeys {
    /// Reject the document.
    #[default]
    Error,
    /// Keep the first occurrence and skip later ones.
    FirstWins,
    /// Keep the last occurrence.
    LastWins,
}

impl From<DuplicateKeys> for serde_saphyr::DuplicateKeyPolicy {
    fn from(policy: DuplicateKeys) -> Self {
        match policy {
            DuplicateKeys::Error => Self::Error,
            DuplicateKeys::FirstWins => Self::FirstWins,
            DuplicateKeys::LastWins => Self::LastWins,
        }
    }
}

/// Options applied when parsing YAML.
///
/// The defaults follow YAML 1.2: only `true` and `false` are booleans, so
/// values such as `yes` or `off` stay strings, and duplicate keys are an
/// error.
///
/// # Examples
///
/// ```rust
/// use datakit::{DuplicateKeys, YamlOptions};
///
/// let lenient = YamlOptions {
///     duplicate_keys: DuplicateKeys::LastWins,
///     ..YamlOptions::default()
/// };
/// assert!(lenient.strict_booleans);
/// ```
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct YamlOptions {
    /// Accept only `true`/`false` as booleans.
    pub strict_booleans: bool,
    /// Policy for repeated mapping keys.
    pub duplicate_keys: DuplicateKeys,
}

impl Default for YamlOptions {
    fn default() -> Self {
        Self {
            strict_booleans: true,
            duplicate_keys: DuplicateKeys::Error,
        }
    }
}

impl YamlOptions {
    pub(crate) fn to_saphyr(self) -> serde_saphyr::Options {
        serde_saphyr::Options {
            strict_booleans: self.strict_booleans,
            duplicate_keys: self.duplicate_keys.into(),
            ..serde_saphyr::Options::default()
        }
    }
}
