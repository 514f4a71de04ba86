//! Lenient deserializers for backend payloads.
//!
//! The backend relays model output without a schema, so fields may be missing,
//! `null`, or of the wrong type. None of that is an error here: a field that
//! does not fit decodes as absent and the screen shows a gap.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::ApiError;

/// Decodes a success body. Only a body that is not JSON at all is an error;
/// JSON of the wrong overall shape decodes as an empty result.
pub fn decode_body<T>(body: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned + Default,
{
    let value: Value = serde_json::from_str(body)?;
    Ok(serde_json::from_value(value).unwrap_or_else(|e| {
        log::warn!("Response did not match the expected shape: {}", e);
        T::default()
    }))
}

/// Decodes the field as `T`, or `None` when it is `null` or does not fit.
pub fn loose_option<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    Ok(serde_json::from_value(value)
        .map_err(|e| log::warn!("Dropping malformed field: {}", e))
        .ok())
}

/// Decodes a list element by element, dropping elements that do not fit.
/// `null` is empty; a lone value is read as a one-element list.
pub fn loose_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Null => Vec::new(),
        Value::Array(items) => items,
        single => vec![single],
    };
    Ok(items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}

/// Decodes an object entry by entry, dropping entries that do not fit.
pub fn loose_map<'de, D, T>(deserializer: D) -> Result<HashMap<String, T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let Value::Object(entries) = Value::deserialize(deserializer)? else {
        return Ok(HashMap::new());
    };
    Ok(entries
        .into_iter()
        .filter_map(|(key, value)| match serde_json::from_value(value) {
            Ok(decoded) => Some((key, decoded)),
            Err(e) => {
                log::warn!("Dropping malformed entry {}: {}", key, e);
                None
            }
        })
        .collect())
}

/// Accepts text, numbers and booleans, rendering the latter two as text.
pub fn loose_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    })
}

/// Accepts `3`, `3.0` and `"3"`. Anything else decodes as absent.
pub fn loose_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(number) => number
            .as_u64()
            .or_else(|| number.as_f64().filter(|f| f.fract() == 0.0 && *f >= 0.0).map(|f| f as u64))
            .and_then(|n| u32::try_from(n).ok()),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    })
}
