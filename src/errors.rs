use url::Url;

use crate::config::LoaderConfigError;
use crate::loader::FormError;

/// Everything a data load can fail with.
///
/// Transport and decoding failures are passed through untouched so callers see
/// the same error the HTTP client or JSON parser produced.
#[derive(Debug, thiserror::Error)]
pub enum LoaderError {
    #[error(transparent)]
    Net(#[from] reqwest::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// The response asked for a redirect but its body could not be decoded.
    #[error("redirect to {location} with undecodable body: {source}")]
    RedirectDecode {
        location: Url,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Invalid form submission: {0}")]
    Form(#[from] FormError),

    #[error("Invalid loader configuration: {0}")]
    Config(#[from] LoaderConfigError),
}

impl LoaderError {
    /// Redirect target the server sent along with a failed load, if any.
    pub fn redirect(&self) -> Option<&Url> {
        match self {
            LoaderError::RedirectDecode { location, .. } => Some(location),
            _ => None,
        }
    }
}
