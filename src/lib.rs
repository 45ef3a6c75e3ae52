pub mod config;
pub mod errors;
pub mod loader;
pub mod net;

pub use config::{LoaderConfig, LoaderConfigError};
pub use errors::LoaderError;
pub use loader::*;
