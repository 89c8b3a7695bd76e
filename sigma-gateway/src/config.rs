//! Gateway listener configuration.

/// Environment variable holding the listen address.
pub const LISTEN_ADDR_VAR: &str = "SIGMA_LISTEN_ADDR";

/// Listen address used when [`LISTEN_ADDR_VAR`] is unset.
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

/// Settings for the HTTP listener.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct GatewayConfig {
    /// `host:port` to bind.
    pub listen_addr: String,
}

impl GatewayConfig {
    /// Read [`LISTEN_ADDR_VAR`] from the process environment.
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
        Self {
            listen_addr: lookup(LISTEN_ADDR_VAR)
                .filter(|addr| !addr.is_empty())
                .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_owned()),
        }
    }
}
