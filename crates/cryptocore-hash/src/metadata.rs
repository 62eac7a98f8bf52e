use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::HashError;

/// Encode metadata as canonical JSON bytes.
///
/// Object keys are sorted, there is no insignificant whitespace and non-ASCII
/// text is emitted as UTF-8 rather than `\u` escapes. Equal metadata values
/// always produce equal bytes, whatever order their fields were built in.
/// Numbers keep their exact digits, so integers beyond `u64` are not rounded.
pub fn canonical_metadata<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, HashError> {
    let value = sort_keys(serde_json::to_value(value)?);
    Ok(serde_json::to_vec(&value)?)
}

/// Rebuild every object with its keys in ascending order.
fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let sorted: BTreeMap<String, Value> =
                map.into_iter().map(|(k, v)| (k, sort_keys(v))).collect();
            Value::Object(sorted.into_iter().collect())
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}
