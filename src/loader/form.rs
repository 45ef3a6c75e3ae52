//! Form submissions sent along with a data request.
//!
//! A [`FormSubmit`] is built by the caller when a form is submitted and
//! consumed by exactly one request. It maps onto the outgoing request as:
//!
//! - `application/x-www-form-urlencoded`: body `a=1&b=two+words`, same
//!   `Content-Type`
//! - `multipart/form-data`: one part per [`FormData`] entry,
//!   `Content-Type: multipart/form-data; boundary=...`
//!
//! File entries in a url-encoded submission contribute their file name, the
//! same way an HTML form serializes them.
//!
//! A `get` submission has nowhere to put its fields: the query string of a
//! data request is taken by the loader's own parameters and a `GET` cannot
//! carry a body. Such submissions are rejected with
//! [`FormError::BodyNotAllowed`] before anything is sent.

use std::fmt;
use std::str::FromStr;

use http::header::{HeaderValue, CONTENT_TYPE};
use http::{HeaderMap, Method};
use reqwest::multipart;

use crate::net::RequestBody;

/// HTTP verbs a form can submit with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl FormMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormMethod::Get => "get",
            FormMethod::Post => "post",
            FormMethod::Put => "put",
            FormMethod::Patch => "patch",
            FormMethod::Delete => "delete",
        }
    }

    pub fn to_http(self) -> Method {
        match self {
            FormMethod::Get => Method::GET,
            FormMethod::Post => Method::POST,
            FormMethod::Put => Method::PUT,
            FormMethod::Patch => Method::PATCH,
            FormMethod::Delete => Method::DELETE,
        }
    }
}

impl fmt::Display for FormMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormMethod {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "get" => Ok(FormMethod::Get),
            "post" => Ok(FormMethod::Post),
            "put" => Ok(FormMethod::Put),
            "patch" => Ok(FormMethod::Patch),
            "delete" => Ok(FormMethod::Delete),
            _ => Err(FormError::Method(s.to_string())),
        }
    }
}

/// The two encodings a form body can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormEncType {
    #[default]
    UrlEncoded,
    Multipart,
}

impl FormEncType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormEncType::UrlEncoded => "application/x-www-form-urlencoded",
            FormEncType::Multipart => "multipart/form-data",
        }
    }
}

impl fmt::Display for FormEncType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormEncType {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case(FormEncType::UrlEncoded.as_str()) {
            Ok(FormEncType::UrlEncoded)
        } else if s.eq_ignore_ascii_case(FormEncType::Multipart.as_str()) {
            Ok(FormEncType::Multipart)
        } else {
            Err(FormError::EncType(s.to_string()))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("unsupported form method: {0}")]
    Method(String),
    #[error("unsupported form encoding: {0}")]
    EncType(String),
    #[error("invalid content type for file part: {0}")]
    Mime(String),
    #[error("a {0} submission cannot carry form data")]
    BodyNotAllowed(FormMethod),
}

/// A single form field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormValue {
    Text(String),
    File {
        file_name: String,
        content_type: Option<String>,
        bytes: Vec<u8>,
    },
}

/// Ordered form fields. Names may repeat.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormData {
    entries: Vec<(String, FormValue)>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append<N: Into<String>, V: Into<String>>(&mut self, name: N, value: V) {
        self.entries.push((name.into(), FormValue::Text(value.into())));
    }

    pub fn append_file<N: Into<String>, F: Into<String>>(
        &mut self,
        name: N,
        file_name: F,
        content_type: Option<String>,
        bytes: Vec<u8>,
    ) {
        self.entries.push((
            name.into(),
            FormValue::File {
                file_name: file_name.into(),
                content_type,
                bytes,
            },
        ));
    }

    /// Returns the first text value for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.iter().find_map(|(n, v)| match v {
            FormValue::Text(t) if n == name => Some(t.as_str()),
            _ => None,
        })
    }

    pub fn entries(&self) -> &[(String, FormValue)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `application/x-www-form-urlencoded` serialization of all entries.
    pub fn to_url_encoded(&self) -> String {
        let mut ser = url::form_urlencoded::Serializer::new(String::new());
        for (name, value) in &self.entries {
            match value {
                FormValue::Text(text) => ser.append_pair(name, text),
                FormValue::File { file_name, .. } => ser.append_pair(name, file_name),
            };
        }
        ser.finish()
    }

    /// Converts the entries into a multipart form, one part per entry.
    pub fn into_multipart(self) -> Result<multipart::Form, FormError> {
        let mut form = multipart::Form::new();
        for (name, value) in self.entries {
            form = match value {
                FormValue::Text(text) => form.text(name, text),
                FormValue::File { file_name, content_type, bytes } => {
                    let mut part = multipart::Part::bytes(bytes).file_name(file_name);
                    if let Some(ct) = content_type {
                        part = part.mime_str(&ct).map_err(|_| FormError::Mime(ct))?;
                    }
                    form.part(name, part)
                }
            };
        }
        Ok(form)
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for FormData {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut data = FormData::new();
        for (n, v) in iter {
            data.append(n, v);
        }
        data
    }
}

/// A pending form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSubmit {
    pub method: FormMethod,
    pub enc_type: FormEncType,
    pub data: FormData,
}

impl FormSubmit {
    pub fn new(method: FormMethod, enc_type: FormEncType, data: FormData) -> Self {
        Self { method, enc_type, data }
    }

    /// Splits the submission into the request method, headers and body.
    ///
    /// Multipart bodies get their `Content-Type` (with boundary) from the
    /// multipart encoder instead of the header map.
    pub(crate) fn into_request_parts(
        self,
    ) -> Result<(Method, HeaderMap, RequestBody), FormError> {
        if self.method == FormMethod::Get {
            return Err(FormError::BodyNotAllowed(self.method));
        }

        let method = self.method.to_http();
        let mut headers = HeaderMap::new();

        let body = match self.enc_type {
            FormEncType::UrlEncoded => {
                let value = HeaderValue::from_static(FormEncType::UrlEncoded.as_str());
                headers.insert(CONTENT_TYPE, value);
                RequestBody::Text(self.data.to_url_encoded())
            }
            FormEncType::Multipart => RequestBody::Multipart(self.data.into_multipart()?),
        };

        Ok((method, headers, body))
    }
}
