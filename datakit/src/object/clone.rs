//! Deep clone through a serialize/deserialize round trip.

use serde::{Serialize, de::DeserializeOwned};

use crate::DataResult;

/// Produce a structurally independent copy of `value` by serialising it to a
/// [`serde_json::Value`] and deserialising the result.
///
/// Only data representable as JSON survives: values that JSON cannot carry
/// (non-finite floats, maps with non-string keys) make the copy fail rather
/// than silently change. For types that are plain [`Clone`], prefer
/// `clone()`; this helper exists to normalise values through their JSON form.
///
/// # Errors
///
/// Returns [`crate::DataError::Convert`] when `value` cannot be represented
/// as JSON or the JSON form does not deserialise back into `T`.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
///
/// let original = json!({"a": {"b": [1, 2]}});
/// let mut copy = datakit::deep_clone(&original)?;
/// copy["a"]["b"] = json!([]);
/// assert_eq!(original["a"]["b"], json!([1, 2]));
/// # Ok::<_, datakit::DataError>(())
/// ```
pub fn deep_clone<T: Serialize + DeserializeOwned>(value: &T) -> DataResult<T> {
    let snapshot = serde_json::to_value(value)?;
    Ok(serde_json::from_value(snapshot)?)
}
