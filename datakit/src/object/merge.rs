//! Deep merge for mapping objects.
//!
//! The engine walks the keys of a source value and writes them into a target
//! in place. When the target already holds a recursable value at a key, the
//! two are merged recursively; anything else is overwritten by the source
//! value. Whether a target value is recursable depends on the chosen
//! [`MergeSemantics`].
//!
//! The decision is taken on the *target's* existing value only. A recursion
//! whose source contributes no keys therefore leaves the nested target
//! untouched:
//!
//! ```rust
//! use datakit::deep_merge;
//! use serde_json::json;
//!
//! let mut target = json!({"a": {"x": 1}});
//! deep_merge(&mut target, Some(&json!({"a": 5})))?;
//! assert_eq!(target, json!({"a": {"x": 1}}));
//! # Ok::<_, datakit::DataError>(())
//! ```

use std::borrow::Cow;

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::{DataError, DataResult};

/// Largest run of null padding an index key may open past the end of a
/// sequence target under [`MergeSemantics::ObjectLike`]. Keys further out are
/// a [`DataError::Merge`].
pub const MAX_INDEX_GAP: usize = 1024;

/// Selects which target values the merge engine recurses into.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum MergeSemantics {
    /// Only mappings are recursed into. Null and sequences in the target are
    /// replaced like scalars, and only mapping sources contribute keys.
    #[default]
    Mappings,
    /// Every "object-like" target value is recursed into: mappings,
    /// sequences, and null. Sequence sources contribute their indices as
    /// keys, and string sources contribute one single-character string per
    /// `char` under its index. Index keys write into sequence targets,
    /// padding gaps with null up to [`MAX_INDEX_GAP`] elements. Assigning a
    /// key into null is an error.
    ObjectLike,
}

impl MergeSemantics {
    const fn recurses_into(self, value: &Value) -> bool {
        match self {
            Self::Mappings => matches!(value, Value::Object(_)),
            Self::ObjectLike => matches!(value, Value::Object(_) | Value::Array(_) | Value::Null),
        }
    }

    /// Keys `source` contributes, in iteration order.
    fn entries(self, source: &Value) -> Vec<(Cow<'_, str>, Cow<'_, Value>)> {
        match (self, source) {
            (_, Value::Object(map)) => map
                .iter()
                .map(|(key, value)| (Cow::Borrowed(key.as_str()), Cow::Borrowed(value)))
                .collect(),
            (Self::ObjectLike, Value::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(index, value)| (Cow::Owned(index.to_string()), Cow::Borrowed(value)))
                .collect(),
            (Self::ObjectLike, Value::String(text)) => text
                .chars()
                .enumerate()
                .map(|(index, ch)| {
                    (
                        Cow::Owned(index.to_string()),
                        Cow::Owned(Value::String(ch.to_string())),
                    )
                })
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// Merge `source` into `target` in place and return `target`.
///
/// Uses [`MergeSemantics::Mappings`]. A `None` source is treated as an empty
/// mapping and leaves `target` unchanged. `source` is never modified; values
/// copied out of it are cloned.
///
/// # Errors
///
/// Returns [`DataError::Merge`] when `source` has keys but `target` is not a
/// mapping.
///
/// # Examples
///
/// ```rust
/// use datakit::deep_merge;
/// use serde_json::json;
///
/// let mut target = json!({"a": 1, "b": {"c": 2}});
/// let merged = deep_merge(&mut target, Some(&json!({"b": {"d": 3}})))?;
/// assert_eq!(*merged, json!({"a": 1, "b": {"c": 2, "d": 3}}));
/// # Ok::<_, datakit::DataError>(())
/// ```
pub fn deep_merge<'t>(target: &'t mut Value, source: Option<&Value>) -> DataResult<&'t mut Value> {
    deep_merge_with(target, source, MergeSemantics::default())
}

/// Merge `source` into `target` using the given `semantics`.
///
/// # Errors
///
/// Returns [`DataError::Merge`] when a key must be assigned into a value that
/// cannot hold it: a scalar, null, or (for non-index keys) a sequence. The
/// error names the dotted key path of that value. `target` may already be
/// partially merged when the error is returned.
pub fn deep_merge_with<'t>(
    target: &'t mut Value,
    source: Option<&Value>,
    semantics: MergeSemantics,
) -> DataResult<&'t mut Value> {
    if let Some(layer) = source {
        let mut path = Vec::new();
        merge_into(target, layer, semantics, &mut path)?;
    }
    Ok(target)
}

fn merge_into(
    target: &mut Value,
    source: &Value,
    semantics: MergeSemantics,
    path: &mut Vec<String>,
) -> DataResult<()> {
    for (key, incoming) in semantics.entries(source) {
        assign(target, &key, &incoming, semantics, path)?;
    }
    Ok(())
}

fn assign(
    target: &mut Value,
    key: &str,
    incoming: &Value,
    semantics: MergeSemantics,
    path: &mut Vec<String>,
) -> DataResult<()> {
    match target {
        Value::Object(map) => match map.get_mut(key) {
            Some(slot) => merge_slot(slot, key, incoming, semantics, path),
            None => {
                map.insert(key.to_owned(), incoming.clone());
                Ok(())
            }
        },
        Value::Array(items) if semantics == MergeSemantics::ObjectLike => {
            let index = parse_index(key)
                .filter(|index| *index <= items.len().saturating_add(MAX_INDEX_GAP))
                .ok_or_else(|| DataError::merge(path.as_slice(), "array"))?;
            match items.get_mut(index) {
                Some(slot) => merge_slot(slot, key, incoming, semantics, path),
                None => {
                    items.resize(index, Value::Null);
                    items.push(incoming.clone());
                    Ok(())
                }
            }
        }
        other => Err(DataError::merge(path.as_slice(), kind(other))),
    }
}

fn merge_slot(
    slot: &mut Value,
    key: &str,
    incoming: &Value,
    semantics: MergeSemantics,
    path: &mut Vec<String>,
) -> DataResult<()> {
    if semantics.recurses_into(slot) {
        path.push(key.to_owned());
        merge_into(slot, incoming, semantics, path)?;
        path.pop();
    } else {
        slot.clone_from(incoming);
    }
    Ok(())
}

/// Canonical array index: decimal digits without a leading zero.
fn parse_index(key: &str) -> Option<usize> {
    let canonical = key == "0"
        || (!key.starts_with('0') && !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit()));
    if canonical { key.parse().ok() } else { None }
}

const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Deep merge two typed values through their JSON form.
///
/// Both operands are serialised to [`serde_json::Value`], merged with
/// [`MergeSemantics::Mappings`], and the result is deserialised back into
/// `target`. Fields that serialise to `null` (such as `None`) overwrite the
/// target; mark them `#[serde(skip_serializing_if = "Option::is_none")]` to
/// leave the target untouched instead.
///
/// # Errors
///
/// Returns [`DataError::Convert`] when either value fails to serialise or the
/// merged value no longer fits `T`, and [`DataError::Merge`] when `T`
/// serialises to something other than a mapping.
///
/// # Examples
///
/// ```rust
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, Default, Deserialize, PartialEq, Serialize)]
/// struct Limits {
///     #[serde(skip_serializing_if = "Option::is_none")]
///     cpu: Option<u32>,
///     #[serde(skip_serializing_if = "Option::is_none")]
///     memory: Option<u32>,
/// }
///
/// let mut base = Limits { cpu: Some(2), memory: Some(512) };
/// let patch = Limits { cpu: None, memory: Some(1024) };
/// datakit::merge_typed(&mut base, Some(&patch))?;
/// assert_eq!(base, Limits { cpu: Some(2), memory: Some(1024) });
/// # Ok::<_, datakit::DataError>(())
/// ```
pub fn merge_typed<'t, T>(target: &'t mut T, source: Option<&T>) -> DataResult<&'t mut T>
where
    T: Serialize + DeserializeOwned,
{
    let Some(patch) = source else {
        return Ok(target);
    };
    let mut merged = serde_json::to_value(&*target)?;
    let layer = serde_json::to_value(patch)?;
    deep_merge(&mut merged, Some(&layer))?;
    *target = serde_json::from_value(merged)?;
    Ok(target)
}
