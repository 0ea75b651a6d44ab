//! JSON Patch (RFC 6902) support for partial updates.
//!
//! `UpdateDataProductVersion` takes a list of [`JsonPatchOperation`]s. They
//! can be written by hand, generated from a partially filled model with
//! [`as_patch`], or computed from two snapshots of a model with [`diff_patch`].
//!
//! # Example
//!
//! ```rust
//! use data_product_exchange::rest::patch::{as_patch, JsonPatchOperationOp};
//! use data_product_exchange::rest::resources::v1::DataProductVersion;
//!
//! let changes = DataProductVersion {
//!     name: Some("Renamed".to_string()),
//!     ..Default::default()
//! };
//!
//! let patch = as_patch(&changes).unwrap();
//! assert_eq!(patch.len(), 1);
//! assert_eq!(patch[0].op, JsonPatchOperationOp::Add);
//! assert_eq!(patch[0].path, "/name");
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::rest::ServiceError;

/// The operation of a JSON Patch entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonPatchOperationOp {
    /// Add a value (replaces an existing member).
    Add,
    /// Remove a value.
    Remove,
    /// Replace an existing value.
    Replace,
    /// Move a value from `from` to `path`.
    Move,
    /// Copy a value from `from` to `path`.
    Copy,
    /// Check that the value at `path` equals `value`.
    Test,
}

/// A single JSON Patch entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonPatchOperation {
    /// The operation to perform.
    pub op: JsonPatchOperationOp,

    /// JSON Pointer to the target location.
    pub path: String,

    /// JSON Pointer to the source location (`move` and `copy`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,

    /// The value to apply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl JsonPatchOperation {
    /// Creates an `add` operation.
    #[must_use]
    pub fn add(path: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            op: JsonPatchOperationOp::Add,
            path: path.into(),
            from: None,
            value: Some(value.into()),
        }
    }

    /// Creates a `replace` operation.
    #[must_use]
    pub fn replace(path: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            op: JsonPatchOperationOp::Replace,
            path: path.into(),
            from: None,
            value: Some(value.into()),
        }
    }

    /// Creates a `remove` operation.
    #[must_use]
    pub fn remove(path: impl Into<String>) -> Self {
        Self {
            op: JsonPatchOperationOp::Remove,
            path: path.into(),
            from: None,
            value: None,
        }
    }
}

/// Converts the set fields of `model` into `add` operations.
///
/// One operation is emitted per field that serializes to a non-null value,
/// with `path` set to `/<json name>`, in the order the fields serialize
/// (declaration order for derived `Serialize`).
///
/// Only `add` is emitted; the service treats `add` on an existing member as
/// a replacement.
///
/// # Errors
///
/// Returns [`ServiceError::Serialize`] if `model` cannot be serialized.
pub fn as_patch<T: Serialize>(model: &T) -> Result<Vec<JsonPatchOperation>, ServiceError> {
    let value = serde_json::to_value(model).map_err(ServiceError::Serialize)?;

    let Value::Object(map) = value else {
        return Ok(Vec::new());
    };

    Ok(map
        .into_iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(key, value)| JsonPatchOperation::add(pointer(&key), value))
        .collect())
}

/// Computes the operations that turn `original` into `current`.
///
/// Compares the top-level members of both serialized models: new members
/// become `add`, changed members become `replace` and members that are no
/// longer present become `remove`. Nested objects are replaced as a whole.
///
/// # Errors
///
/// Returns [`ServiceError::Serialize`] if either model cannot be serialized.
pub fn diff_patch<T: Serialize>(
    original: &T,
    current: &T,
) -> Result<Vec<JsonPatchOperation>, ServiceError> {
    let original = serde_json::to_value(original).map_err(ServiceError::Serialize)?;
    let current = serde_json::to_value(current).map_err(ServiceError::Serialize)?;

    let (Value::Object(orig_map), Value::Object(curr_map)) = (original, current) else {
        return Ok(Vec::new());
    };

    let mut operations = Vec::new();

    for (key, curr_value) in &curr_map {
        if curr_value.is_null() {
            continue;
        }
        match orig_map.get(key) {
            Some(orig_value) if orig_value.is_null() => {
                operations.push(JsonPatchOperation::add(pointer(key), curr_value.clone()));
            }
            Some(orig_value) => {
                if orig_value != curr_value {
                    operations.push(JsonPatchOperation::replace(
                        pointer(key),
                        curr_value.clone(),
                    ));
                }
            }
            None => {
                operations.push(JsonPatchOperation::add(pointer(key), curr_value.clone()));
            }
        }
    }

    for (key, orig_value) in &orig_map {
        let gone = curr_map.get(key).map_or(true, Value::is_null);
        if gone && !orig_value.is_null() {
            operations.push(JsonPatchOperation::remove(pointer(key)));
        }
    }

    Ok(operations)
}

/// Builds the JSON Pointer for a top-level member.
fn pointer(key: &str) -> String {
    format!("/{}", key.replace('~', "~0").replace('/', "~1"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize, Default, Clone)]
    struct Sample {
        #[serde(skip_serializing_if = "Option::is_none")]
        first: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        second: Option<u32>,
        #[serde(rename = "a/b", skip_serializing_if = "Option::is_none")]
        slashed: Option<bool>,
        third: Option<String>,
    }

    #[test]
    fn test_operation_serialization() {
        let op = JsonPatchOperation::add("/name", "x");
        assert_eq!(
            serde_json::to_value(&op).unwrap(),
            json!({"op": "add", "path": "/name", "value": "x"})
        );

        let op = JsonPatchOperation::remove("/tags");
        assert_eq!(
            serde_json::to_value(&op).unwrap(),
            json!({"op": "remove", "path": "/tags"})
        );
    }

    #[test]
    fn test_as_patch_follows_field_order_and_skips_nulls() {
        let sample = Sample {
            first: Some("one".to_string()),
            second: Some(2),
            slashed: None,
            third: None,
        };

        let patch = as_patch(&sample).unwrap();
        let paths: Vec<&str> = patch.iter().map(|op| op.path.as_str()).collect();
        assert_eq!(paths, vec!["/first", "/second"]);
        assert!(patch.iter().all(|op| op.op == JsonPatchOperationOp::Add));
        assert_eq!(patch[1].value, Some(json!(2)));
    }

    #[test]
    fn test_as_patch_escapes_pointer() {
        let sample = Sample {
            slashed: Some(true),
            ..Default::default()
        };
        let patch = as_patch(&sample).unwrap();
        assert_eq!(patch[0].path, "/a~1b");
    }

    #[test]
    fn test_as_patch_of_empty_model_is_empty() {
        assert!(as_patch(&Sample::default()).unwrap().is_empty());
        assert!(as_patch(&"not an object").unwrap().is_empty());
    }

    #[test]
    fn test_diff_patch() {
        let original = Sample {
            first: Some("one".to_string()),
            second: Some(2),
            ..Default::default()
        };
        let current = Sample {
            first: Some("uno".to_string()),
            third: Some("three".to_string()),
            ..Default::default()
        };

        let patch = diff_patch(&original, &current).unwrap();
        assert_eq!(
            patch,
            vec![
                JsonPatchOperation::replace("/first", "uno"),
                JsonPatchOperation::add("/third", "three"),
                JsonPatchOperation::remove("/second"),
            ]
        );
    }

    #[test]
    fn test_diff_patch_identical_is_empty() {
        let sample = Sample {
            first: Some("one".to_string()),
            ..Default::default()
        };
        assert!(diff_patch(&sample, &sample.clone()).unwrap().is_empty());
    }
}
