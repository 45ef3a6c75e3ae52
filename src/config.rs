//! Loader configuration.
//!
//! `LoaderConfig` carries everything the loader would otherwise read from the
//! ambient page: the origin that relative URLs resolve against, plus a few
//! protocol knobs. It provides defaults via [`Default`] and a fluent
//! [`LoaderConfig::builder()`] with validation.
//!
//! # Examples
//!
//! ```rust
//! use remix_data::LoaderConfig;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cfg = LoaderConfig::builder()
//!     .origin("https://shop.example")?
//!     .user_agent("storefront/2.1")
//!     .build()?;
//! assert_eq!(cfg.redirect_header, "X-Remix-Redirect");
//! # Ok(()) }
//! ```
//!
//! # Fields (summary)
//! - `origin`: Page origin, `http` or `https` with a host (default: `http://localhost/`).
//! - `user_agent`: Optional UA string to send with requests.
//! - `redirect_header`: Response header carrying the redirect signal (default: `X-Remix-Redirect`).
//! - `global_route_id`: Route id sent when loading global data (default: `_global`).

use std::fmt;
use url::Url;

pub const DEFAULT_REDIRECT_HEADER: &str = "X-Remix-Redirect";
pub const DEFAULT_GLOBAL_ROUTE_ID: &str = "_global";
const DEFAULT_ORIGIN: &str = "http://localhost/";

#[derive(Debug, Clone)]
pub struct LoaderConfig {
    pub origin: Url,
    pub user_agent: Option<String>,
    pub redirect_header: String,
    pub global_route_id: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            origin: Url::parse(DEFAULT_ORIGIN).expect("default origin is a valid URL"),
            user_agent: None,
            redirect_header: DEFAULT_REDIRECT_HEADER.to_string(),
            global_route_id: DEFAULT_GLOBAL_ROUTE_ID.to_string(),
        }
    }
}

impl LoaderConfig {
    pub fn builder() -> LoaderConfigBuilder {
        LoaderConfigBuilder::default()
    }

    /// Shorthand for a default config bound to `origin`.
    pub fn for_origin(origin: &str) -> Result<Self, LoaderConfigError> {
        Self::builder().origin(origin)?.build()
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoaderConfigBuilder {
    inner: LoaderConfig,
}

impl LoaderConfigBuilder {
    #[inline]
    fn map(mut self, f: impl FnOnce(&mut LoaderConfig)) -> Self {
        f(&mut self.inner);
        self
    }

    /// Parses and sets the page origin. Any path, query or fragment is dropped.
    pub fn origin(self, origin: &str) -> Result<Self, LoaderConfigError> {
        let url = Url::parse(origin)
            .map_err(|_| LoaderConfigError::InvalidOrigin(origin.to_string()))?;
        Ok(self.origin_url(url))
    }

    pub fn origin_url(self, mut url: Url) -> Self {
        url.set_path("/");
        url.set_query(None);
        url.set_fragment(None);
        self.map(|c| c.origin = url)
    }

    pub fn user_agent<S: Into<String>>(self, ua: S) -> Self {
        self.map(|c| c.user_agent = Some(ua.into()))
    }

    pub fn redirect_header<S: Into<String>>(self, name: S) -> Self {
        self.map(|c| c.redirect_header = name.into())
    }

    pub fn global_route_id<S: Into<String>>(self, id: S) -> Self {
        self.map(|c| c.global_route_id = id.into())
    }

    /// Apply multiple changes in one go.
    pub fn with(self, f: impl FnOnce(&mut LoaderConfig)) -> Self {
        self.map(f)
    }

    /// Validate and build the final config.
    pub fn build(self) -> Result<LoaderConfig, LoaderConfigError> {
        validate(&self.inner)?;
        Ok(self.inner)
    }
}

// ---------- Validation ----------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoaderConfigError {
    InvalidOrigin(String),
    InvalidRedirectHeader(String),
    EmptyGlobalRouteId,
}

impl fmt::Display for LoaderConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoaderConfigError::InvalidOrigin(o) => {
                write!(f, "origin {o:?} must be an http(s) URL with a host")
            }
            LoaderConfigError::InvalidRedirectHeader(h) => {
                write!(f, "redirect_header {h:?} is not a valid header name")
            }
            LoaderConfigError::EmptyGlobalRouteId => write!(f, "global_route_id must not be empty"),
        }
    }
}
impl std::error::Error for LoaderConfigError {}

fn validate(c: &LoaderConfig) -> Result<(), LoaderConfigError> {
    if !matches!(c.origin.scheme(), "http" | "https") || c.origin.host_str().is_none() {
        return Err(LoaderConfigError::InvalidOrigin(c.origin.to_string()));
    }
    if http::HeaderName::from_bytes(c.redirect_header.as_bytes()).is_err() {
        return Err(LoaderConfigError::InvalidRedirectHeader(c.redirect_header.clone()));
    }
    if c.global_route_id.is_empty() {
        return Err(LoaderConfigError::EmptyGlobalRouteId);
    }
    Ok(())
}
