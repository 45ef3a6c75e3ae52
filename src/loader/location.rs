use url::Url;

/// The router's current location: path plus query string.
///
/// `search` is either empty or starts with `?`, the same shape a browser
/// location exposes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    pub pathname: String,
    pub search: String,
}

impl Location {
    pub fn new<P: Into<String>, S: Into<String>>(pathname: P, search: S) -> Self {
        Self {
            pathname: pathname.into(),
            search: search.into(),
        }
    }

    /// Splits a `path?query#fragment` string. The fragment is discarded since
    /// it is never sent to a server.
    pub fn parse(path: &str) -> Self {
        let path = path.split_once('#').map_or(path, |(p, _)| p);
        match path.find('?') {
            Some(idx) => Self::new(&path[..idx], &path[idx..]),
            None => Self::new(path, ""),
        }
    }

    /// Absolute URL of this location on the page `origin`.
    pub fn to_url(&self, origin: &Url) -> Result<Url, url::ParseError> {
        origin.join(&format!("{}{}", self.pathname, self.search))
    }
}
