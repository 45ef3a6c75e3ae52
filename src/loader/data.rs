//! Decoding of loader responses.
//!
//! The same algorithm is used by a server-side renderer that consumes a
//! loader's output directly, so both ends must agree on it: a content type
//! containing the media type `application/json` as a whole word yields JSON,
//! anything else (including no content type at all) yields UTF-8 text.

use std::sync::LazyLock;

use http::header::CONTENT_TYPE;
use http::HeaderMap;
use regex::Regex;
use serde::Serialize;

use crate::errors::LoaderError;

// ASCII word boundaries, ASCII case folding
static JSON_CONTENT_TYPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i-u)\bapplication/json\b").expect("JSON content type pattern is valid")
});

/// Decoded body of a loader response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AppData {
    Json(serde_json::Value),
    Text(String),
}

impl AppData {
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            AppData::Json(v) => Some(v),
            AppData::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AppData::Text(t) => Some(t),
            AppData::Json(_) => None,
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, AppData::Json(_))
    }
}

/// Decodes a loader response body according to its `Content-Type`.
///
/// Malformed JSON under a JSON content type is returned as
/// [`LoaderError::Json`] without further interpretation. Text bodies are
/// always read as UTF-8, invalid sequences become U+FFFD.
pub fn extract_data(headers: &HeaderMap, body: &[u8]) -> Result<AppData, LoaderError> {
    let content_type = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok());

    match content_type {
        Some(ct) if is_json_content_type(ct) => {
            Ok(AppData::Json(serde_json::from_slice(body)?))
        }
        _ => Ok(AppData::Text(String::from_utf8_lossy(body).into_owned())),
    }
}

/// True when `content_type` contains `application/json` bounded by non-word
/// characters on both sides. ASCII case-insensitive.
///
/// `application/json; charset=utf-8` matches, `application/jsonp` and
/// `application/vnd.api+json` don't.
pub fn is_json_content_type(content_type: &str) -> bool {
    JSON_CONTENT_TYPE.is_match(content_type)
}
