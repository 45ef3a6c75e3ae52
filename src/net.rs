//! Network layer of the loader.
//!
//! A single request goes out, a fully buffered [`Response`] comes back. There is
//! no streaming, no retry and no connection handling beyond what the
//! [`reqwest::Client`] does on its own.

mod fetch;
mod request;
mod response;

pub use fetch::fetch;
pub use request::{Request, RequestBody};
pub use response::Response;
