//! Parser for restaurant catalog files.
//!
//! A catalog is a JSON document in one of two shapes:
//! - `[ {restaurant}, ... ]`
//! - `{ "restaurants": [ {restaurant}, ... ] }`
//!
//! Records are kept as raw `serde_json::Value`s so that validation can
//! report every problem in a record instead of stopping at the first
//! field that fails to deserialize.

use crate::error::{DataLoadError, Result};
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

const UTF8_BOM: char = '\u{feff}';

/// Read and parse a catalog file from disk.
pub fn load_catalog(path: &Path) -> Result<Vec<Value>> {
    let text = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })?;
    parse_catalog(&text, &path.display().to_string())
}

/// Parse catalog text. `origin` is only used in error messages.
pub fn parse_catalog(text: &str, origin: &str) -> Result<Vec<Value>> {
    // Files saved by some editors carry a byte-order mark
    let text = text.strip_prefix(UTF8_BOM).unwrap_or(text);

    let data: Value = serde_json::from_str(text).map_err(|source| DataLoadError::InvalidJson {
        path: origin.to_string(),
        source,
    })?;

    let restaurants = match data {
        Value::Object(mut map) if map.contains_key("restaurants") => {
            map.remove("restaurants").unwrap_or(Value::Null)
        }
        other => other,
    };

    match restaurants {
        Value::Array(records) => Ok(records),
        other => Err(DataLoadError::UnexpectedShape {
            found: json_type_name(&other).to_string(),
        }),
    }
}

/// Name of a JSON value's type, as used in validation messages.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_i64() || n.is_u64() => "int",
        Value::Number(_) => "float",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}
