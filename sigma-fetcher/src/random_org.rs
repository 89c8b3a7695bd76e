//! random.org randomness source.
//!
//! One JSON-RPC `generateIntegers` call per draw, over a pooled HTTPS client.
//! Draws are never retried.

use async_trait::async_trait;
use sigma_core::{RandomSet, SetSize};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::source::RandomSource;
use crate::wire::{decode_response, GenerateIntegersRequest};
use crate::{UpstreamConfig, UpstreamError, API_KEY_VAR};

/// [`RandomSource`] backed by the random.org JSON-RPC API.
#[derive(Debug, Clone)]
pub struct RandomOrgSource {
    client: reqwest::Client,
    config: UpstreamConfig,
}

impl RandomOrgSource {
    /// Create a source with its own connection pool.
    ///
    /// # Errors
    /// Returns [`UpstreamError::Config`] if the HTTP client cannot be built
    /// (e.g. the TLS backend fails to initialise).
    pub fn new(config: UpstreamConfig) -> Result<Self, UpstreamError> {
        let client = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| UpstreamError::Config(format!("build HTTP client: {e}")))?;
        Ok(Self { client, config })
    }

    /// The configuration this source was built with.
    #[must_use]
    pub fn config(&self) -> &UpstreamConfig {
        &self.config
    }

    async fn generate_integers(
        &self,
        api_key: &str,
        count: SetSize,
    ) -> Result<RandomSet, UpstreamError> {
        let request_id = Uuid::new_v4().to_string();
        tracing::debug!(%count, %request_id, endpoint = %self.config.endpoint, "requesting integers");

        let request = GenerateIntegersRequest::new(api_key, count, request_id.clone());
        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| UpstreamError::Transport(format!("send request: {e}")))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| UpstreamError::Transport(format!("read response body: {e}")))?;

        if !status.is_success() {
            return Err(UpstreamError::Transport(format!(
                "HTTP {status} from {}",
                self.config.endpoint
            )));
        }

        let set = decode_response(&body, count)?;
        tracing::debug!(%request_id, received = set.len(), "integers received");
        Ok(set)
    }
}

#[async_trait]
impl RandomSource for RandomOrgSource {
    async fn fetch(
        &self,
        count: SetSize,
        cancel: &CancellationToken,
    ) -> Result<RandomSet, UpstreamError> {
        let Some(api_key) = self.config.api_key.as_deref() else {
            return Err(UpstreamError::Config(format!(
                "{API_KEY_VAR} env variable missing"
            )));
        };

        if cancel.is_cancelled() {
            return Err(UpstreamError::Cancelled);
        }

        // Dropping the losing request future closes its connection.
        tokio::select! {
            biased;
            () = cancel.cancelled() => Err(UpstreamError::Cancelled),
            result = self.generate_integers(api_key, count) => result,
        }
    }
}
