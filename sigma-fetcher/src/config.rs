//! Upstream provider configuration.

use std::fmt;
use std::time::Duration;

/// Default random.org JSON-RPC endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.random.org/json-rpc/4/invoke";

/// Environment variable holding the random.org API key.
pub const API_KEY_VAR: &str = "API_KEY";

/// Environment variable overriding [`DEFAULT_ENDPOINT`].
pub const ENDPOINT_VAR: &str = "SIGMA_RANDOM_ORG_ENDPOINT";

const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings for [`RandomOrgSource`](crate::RandomOrgSource).
///
/// Resolved once at startup and injected; the source never reads the
/// environment itself. A missing key is not an error here: it surfaces as
/// [`UpstreamError::Config`](crate::UpstreamError::Config) on every draw.
#[derive(Clone)]
#[non_exhaustive]
pub struct UpstreamConfig {
    /// random.org API key. `None` when unset or empty.
    pub api_key: Option<String>,

    /// Full URL of the JSON-RPC `invoke` endpoint.
    pub endpoint: String,

    /// TCP/TLS connect timeout for the HTTP client.
    pub connect_timeout: Duration,
}

impl UpstreamConfig {
    /// Create a config pointing at the public random.org endpoint.
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|key| !key.is_empty()),
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }

    /// Replace the endpoint URL.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Read [`API_KEY_VAR`] and [`ENDPOINT_VAR`] from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self::new(lookup(API_KEY_VAR));
        match lookup(ENDPOINT_VAR).filter(|url| !url.is_empty()) {
            Some(endpoint) => config.with_endpoint(endpoint),
            None => config,
        }
    }
}

impl fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("endpoint", &self.endpoint)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}
