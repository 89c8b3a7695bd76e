//! Error types for the gateway crate.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sigma_fetcher::FetchError;

/// Errors that can occur during gateway request handling.
///
/// Responses carry only a status code. Details are logged, never returned,
/// so provider internals do not leak to clients.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// A query parameter is missing or not a valid integer.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The batch fetch failed.
    #[error("batch fetch failed: {0}")]
    Fetch(#[from] FetchError),
}

impl GatewayError {
    /// HTTP status this error maps to.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::InvalidRequest(_) | GatewayError::Fetch(FetchError::TooManySets { .. }) => {
                StatusCode::BAD_REQUEST
            }
            GatewayError::Fetch(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_client_error() {
            tracing::debug!(error = %self, "rejecting request");
        } else {
            tracing::error!(error = %self, "request failed");
        }
        status.into_response()
    }
}
