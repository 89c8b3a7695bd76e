//! Axum route handlers for the sigma gateway API.

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use sigma_core::{BatchResult, SetSize};
use sigma_fetcher::{BatchFetcher, RandomSource};
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;

use crate::error::GatewayError;

// ── Request types ─────────────────────────────────────────────────────────────

/// Raw query of `GET /random/mean`.
///
/// Kept as strings so a missing or non-numeric value becomes a bare 400
/// instead of axum's default rejection body.
#[derive(Debug, Default, Deserialize)]
pub struct MeanQuery {
    /// Number of sets to draw.
    pub requests: Option<String>,
    /// Integers per set.
    pub length: Option<String>,
}

impl MeanQuery {
    /// Parse into `(sets_count, set_size)`.
    ///
    /// # Errors
    /// Returns [`GatewayError::InvalidRequest`] if either parameter is
    /// missing, not a non-negative integer, or `length` is zero.
    pub fn parse(&self) -> Result<(usize, SetSize), GatewayError> {
        let requests = required(self.requests.as_deref(), "requests")?;
        let length = required(self.length.as_deref(), "length")?;

        let sets_count = requests
            .parse::<usize>()
            .map_err(|e| GatewayError::InvalidRequest(format!("requests '{requests}': {e}")))?;
        let set_size = length
            .parse::<u32>()
            .map_err(|e| GatewayError::InvalidRequest(format!("length '{length}': {e}")))
            .and_then(|n| {
                SetSize::new(n).map_err(|e| GatewayError::InvalidRequest(e.to_string()))
            })?;

        Ok((sets_count, set_size))
    }
}

fn required<'a>(value: Option<&'a str>, name: &str) -> Result<&'a str, GatewayError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(GatewayError::InvalidRequest(format!("missing '{name}'"))),
    }
}

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the application router over the given fetcher.
pub fn create_router<S: RandomSource + 'static>(fetcher: Arc<BatchFetcher<S>>) -> Router {
    Router::new()
        .route("/random/mean", get(random_mean::<S>))
        .with_state(fetcher)
        .layer(TraceLayer::new_for_http())
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /random/mean?requests=N&length=M`: draw N sets of M integers and
/// return each set with its standard deviation, followed by the union.
///
/// The batch is cancelled if the client goes away before it completes.
///
/// # Errors
/// Returns [`GatewayError::InvalidRequest`] for bad parameters or an
/// undecodable query string, and [`GatewayError::Fetch`] if the batch fails.
pub async fn random_mean<S: RandomSource + 'static>(
    State(fetcher): State<Arc<BatchFetcher<S>>>,
    query: Result<Query<MeanQuery>, QueryRejection>,
) -> Result<Json<BatchResult>, GatewayError> {
    let Query(query) = query.map_err(|e| GatewayError::InvalidRequest(e.body_text()))?;
    let (sets_count, set_size) = query.parse()?;

    let request_scope = CancellationToken::new();
    let _request_guard = request_scope.clone().drop_guard();

    let result = fetcher
        .fetch_batch(sets_count, set_size, &request_scope)
        .await?;

    tracing::info!(sets_count, %set_size, "batch served");
    Ok(Json(result))
}
