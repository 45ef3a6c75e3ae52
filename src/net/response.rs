//! Minimal HTTP response model.
//!
//! This struct represents a **fully buffered** HTTP response returned by the
//! network layer. It contains the final URL (after redirects, if the client
//! follows them), status code + reason, response headers, and the raw body bytes.
//!
//! ## Notes
//! - The status is recorded but never interpreted by the loader. A `404` from a
//!   loader endpoint is decoded like any other body.
//! - `headers` is an `http::HeaderMap`, which is **case-insensitive** for
//!   header names.
//!
use http::header::CONTENT_TYPE;
use http::HeaderMap;

/// Simple structure for HTTP responses.
#[derive(Debug)]
pub struct Response {
    /// Final URL of the response (after redirects, if any).
    pub url: url::Url,

    /// Numeric HTTP status code (e.g., `200`, `404`).
    pub status: u16,

    /// Human-readable reason phrase (e.g., `"OK"`, `"Not Found"`).
    ///
    /// May be `"Unknown"` for non-standard codes.
    pub status_text: String,

    /// Response headers as a case-insensitive map.
    pub headers: HeaderMap,

    /// Raw response body bytes.
    pub body: Vec<u8>,
}

impl Response {
    /// Returns the value of header `name` when present and valid visible ASCII.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Returns the declared `Content-Type`, if any.
    pub fn content_type(&self) -> Option<&str> {
        self.headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok())
    }
}
