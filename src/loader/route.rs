use std::collections::BTreeMap;

/// Parameters extracted by the router from the matched path.
pub type RouteParams = BTreeMap<String, String>;

/// The parts of a route entry the loader needs. Both values are opaque here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRoute {
    pub id: String,
    /// Endpoint serving this route's data. `None` means the route has no loader.
    pub loader_url: Option<String>,
}

impl EntryRoute {
    pub fn new<S: Into<String>>(id: S, loader_url: Option<String>) -> Self {
        Self {
            id: id.into(),
            loader_url,
        }
    }
}
