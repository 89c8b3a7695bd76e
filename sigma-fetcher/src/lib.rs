//! Concurrent random.org fan-out for the sigma service.
//!
//! Draws N independent sets in parallel with all-or-nothing semantics: the
//! first failing draw cancels the rest and the whole batch fails.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod fetcher;
pub mod random_org;
pub mod source;
pub mod wire;

pub use config::{UpstreamConfig, API_KEY_VAR, DEFAULT_ENDPOINT, ENDPOINT_VAR};
pub use error::{FetchError, UpstreamError};
pub use fetcher::BatchFetcher;
pub use random_org::RandomOrgSource;
pub use source::RandomSource;
