// Resolved call payloads and JSON field extraction.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Result, SteamError};

/// Result of a successful call: an extracted JSON fragment, or raw XML/VDF text.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(Value),
    Text(String),
}

impl Payload {
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Payload::Json(value) => Some(value),
            Payload::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Payload::Text(text) => Some(text),
            Payload::Json(_) => None,
        }
    }

    pub fn into_json(self) -> Option<Value> {
        match self {
            Payload::Json(value) => Some(value),
            Payload::Text(_) => None,
        }
    }

    pub fn into_text(self) -> Option<String> {
        match self {
            Payload::Text(text) => Some(text),
            Payload::Json(_) => None,
        }
    }

    /// Decode a JSON payload into a typed value. Text payloads are never
    /// parsed and fail with [`SteamError::TextPayload`].
    pub fn deserialize<T: DeserializeOwned>(self) -> Result<T> {
        match self {
            Payload::Json(value) => Ok(serde_json::from_value(value)?),
            Payload::Text(_) => Err(SteamError::TextPayload),
        }
    }
}

/// Walk a dotted path through a JSON document.
///
/// Object segments are looked up by key, array segments by numeric index.
/// A `null` found at the end of the path is returned as-is; a missing
/// segment anywhere is an extraction miss.
pub fn extract(root: Value, path: &str) -> Result<Value> {
    let mut current = root;
    for segment in path.split('.').filter(|s| !s.is_empty()) {
        let next = match &mut current {
            Value::Object(map) => map.remove(segment),
            Value::Array(items) => segment
                .parse::<usize>()
                .ok()
                .filter(|&i| i < items.len())
                .map(|i| items.swap_remove(i)),
            _ => None,
        };
        current = next.ok_or_else(|| SteamError::ExtractionMiss {
            path: path.to_string(),
            missing: segment.to_string(),
        })?;
    }
    Ok(current)
}
