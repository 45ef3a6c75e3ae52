//! Route data loader.
//!
//! [`DataLoader`] fetches the data for a matched route (or the global data
//! shared by all routes) from the route's loader endpoint. Each call is one
//! request and one response:
//!
//! 1. no endpoint configured: [`LoadOutcome::NoData`], nothing is sent
//! 2. `GET <loader_url>?params=<json>&url=<page url>&id=<route id>`, or the
//!    submission's method and body when a form is submitted
//! 3. the redirect header, when present, is resolved against the origin
//! 4. the body is decoded with [`extract_data`] whatever the status code is
//!
//! Errors from the HTTP client and the JSON parser are returned unchanged,
//! except that a body failing to decode on a redirect response comes back as
//! [`LoaderError::RedirectDecode`] so the target is not lost. Nothing is
//! retried.

mod data;
mod form;
mod location;
mod route;

pub use data::{extract_data, is_json_content_type, AppData};
pub use form::{FormData, FormEncType, FormError, FormMethod, FormSubmit, FormValue};
pub use location::Location;
pub use route::{EntryRoute, RouteParams};

use url::Url;

use crate::config::LoaderConfig;
use crate::errors::LoaderError;
use crate::net::{self, Request};

/// Result of a single data load.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// The route has no loader endpoint; no request was made.
    NoData,
    /// Decoded response body.
    Data(AppData),
    /// The server asked the client to navigate to `location`. The body was
    /// still decoded and is carried along in `data`.
    Redirect { location: Url, data: AppData },
}

impl LoadOutcome {
    /// Decoded body, if a request was made.
    pub fn data(&self) -> Option<&AppData> {
        match self {
            LoadOutcome::NoData => None,
            LoadOutcome::Data(data) | LoadOutcome::Redirect { data, .. } => Some(data),
        }
    }

    pub fn into_data(self) -> Option<AppData> {
        match self {
            LoadOutcome::NoData => None,
            LoadOutcome::Data(data) | LoadOutcome::Redirect { data, .. } => Some(data),
        }
    }

    /// Redirect target, if the response carried one.
    pub fn redirect(&self) -> Option<&Url> {
        match self {
            LoadOutcome::Redirect { location, .. } => Some(location),
            _ => None,
        }
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, LoadOutcome::NoData)
    }
}

/// Fetches route and global data from loader endpoints.
///
/// Cloning is cheap: the underlying [`reqwest::Client`] is reference counted.
/// Concurrent loads share no mutable state.
#[derive(Debug, Clone)]
pub struct DataLoader {
    client: reqwest::Client,
    config: LoaderConfig,
}

impl DataLoader {
    /// Creates a loader with its own HTTP client.
    pub fn new(config: LoaderConfig) -> Result<Self, LoaderError> {
        let mut builder = reqwest::Client::builder();
        if let Some(ua) = &config.user_agent {
            builder = builder.user_agent(ua.as_str());
        }
        Ok(Self::with_client(builder.build()?, config))
    }

    /// Creates a loader on top of an existing client.
    pub fn with_client(client: reqwest::Client, config: LoaderConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Loads the data shared by all routes on the page.
    pub async fn load_global_data(
        &self,
        loader_url: Option<&str>,
        location: &Location,
    ) -> Result<LoadOutcome, LoaderError> {
        self.fetch_data(
            loader_url,
            location,
            &self.config.global_route_id,
            &RouteParams::new(),
            None,
        )
        .await
    }

    /// Loads the data of a single matched route, optionally submitting a form.
    pub async fn load_route_data(
        &self,
        route: &EntryRoute,
        location: &Location,
        params: &RouteParams,
        form: Option<FormSubmit>,
    ) -> Result<LoadOutcome, LoaderError> {
        self.fetch_data(route.loader_url.as_deref(), location, &route.id, params, form)
            .await
    }

    /// Builds the URL a data request for `route_id` is sent to.
    ///
    /// `loader_url` may be absolute or relative to the origin. The query pairs
    /// `params`, `url` and `id` are appended in that order.
    pub fn data_url(
        &self,
        loader_url: &str,
        location: &Location,
        route_id: &str,
        params: &RouteParams,
    ) -> Result<Url, LoaderError> {
        let page_url = location.to_url(&self.config.origin)?;
        let mut url = self.config.origin.join(loader_url)?;

        url.query_pairs_mut()
            .append_pair("params", &serde_json::to_string(params)?)
            .append_pair("url", page_url.as_str())
            .append_pair("id", route_id);

        Ok(url)
    }

    async fn fetch_data(
        &self,
        loader_url: Option<&str>,
        location: &Location,
        route_id: &str,
        params: &RouteParams,
        form: Option<FormSubmit>,
    ) -> Result<LoadOutcome, LoaderError> {
        let Some(loader_url) = loader_url.filter(|u| !u.is_empty()) else {
            log::trace!("route {route_id:?} has no loader, skipping fetch");
            return Ok(LoadOutcome::NoData);
        };

        let url = self.data_url(loader_url, location, route_id, params)?;
        let mut request = Request::get(url);
        if let Some(form) = form {
            let (method, headers, body) = form.into_request_parts()?;
            request.method = method;
            request.headers = headers;
            request.body = body;
        }

        log::debug!("loading data for route {route_id:?}: {} {}", request.method, request.url);
        let response = net::fetch(&self.client, request).await?;
        log::debug!(
            "route {route_id:?} data response from {}: {} {}",
            response.url,
            response.status,
            response.status_text
        );

        // Status is not interpreted, a 404 body is decoded like any other
        let redirect = match response.header(&self.config.redirect_header) {
            Some(target) if !target.is_empty() => Some(self.config.origin.join(target)?),
            _ => None,
        };

        let Some(location) = redirect else {
            return Ok(LoadOutcome::Data(extract_data(&response.headers, &response.body)?));
        };

        log::debug!("route {route_id:?} redirects to {location}");
        match extract_data(&response.headers, &response.body) {
            Ok(data) => Ok(LoadOutcome::Redirect { location, data }),
            Err(LoaderError::Json(source)) => Err(LoaderError::RedirectDecode { location, source }),
            Err(e) => Err(e),
        }
    }
}
