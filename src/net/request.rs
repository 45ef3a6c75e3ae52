use http::{HeaderMap, Method};
use url::Url;

/// Body attached to an outgoing request.
#[derive(Debug, Default)]
pub enum RequestBody {
    /// No body at all (plain `GET`).
    #[default]
    Empty,
    /// Already serialized body, sent as-is.
    Text(String),
    /// Multipart body. The client generates the boundary and the matching
    /// `Content-Type` header.
    Multipart(reqwest::multipart::Form),
}

/// Outgoing HTTP request, consumed by [`fetch`](super::fetch).
#[derive(Debug)]
pub struct Request {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: RequestBody,
}

impl Request {
    /// Creates a bodyless `GET` request for `url`.
    pub fn get(url: Url) -> Self {
        Self {
            method: Method::GET,
            url,
            headers: HeaderMap::new(),
            body: RequestBody::Empty,
        }
    }
}
