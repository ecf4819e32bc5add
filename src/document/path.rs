use serde_json::{Map, Value};
use crate::errors::S2pError;

/// A parsed Scout2 results document. No schema is enforced; values are
/// resolved by key path when a report needs them.
#[derive(Debug, Clone)]
pub struct Document {
    root: Value,
}

impl Document {
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    /// Resolve a key path, failing with `MissingPath` on the first absent key.
    pub fn lookup(&self, path: &[&str]) -> Result<&Value, S2pError> {
        lookup_in(&self.root, path, "")
    }

    /// Resolve a key path that must hold an object.
    pub fn object(&self, path: &[&str]) -> Result<&Map<String, Value>, S2pError> {
        let value = self.lookup(path)?;
        value.as_object().ok_or_else(|| S2pError::UnexpectedType {
            path: path.join("."),
            expected: "object",
        })
    }
}

/// Resolve `path` below `value`. `prefix` is the already-resolved dotted path,
/// used only for error messages.
pub fn lookup_in<'a>(value: &'a Value, path: &[&str], prefix: &str) -> Result<&'a Value, S2pError> {
    let mut current = value;
    let mut resolved = prefix.to_string();
    for key in path {
        if !resolved.is_empty() {
            resolved.push('.');
        }
        resolved.push_str(key);
        current = match current {
            Value::Object(map) => map.get(*key),
            _ => None,
        }
        .ok_or_else(|| S2pError::MissingPath(resolved.clone()))?;
    }
    Ok(current)
}

/// Read `value` as a string, naming `path` if it is some other kind of value.
pub fn expect_str<'a>(value: &'a Value, path: &str) -> Result<&'a str, S2pError> {
    value.as_str().ok_or_else(|| S2pError::UnexpectedType {
        path: path.to_string(),
        expected: "string",
    })
}

pub fn expect_array<'a>(value: &'a Value, path: &str) -> Result<&'a Vec<Value>, S2pError> {
    value.as_array().ok_or_else(|| S2pError::UnexpectedType {
        path: path.to_string(),
        expected: "array",
    })
}
