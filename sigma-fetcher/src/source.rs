//! Randomness provider abstraction.
//!
//! Lets the batch fetcher run against random.org in production and against
//! scripted sources in tests without changing the fan-out logic.

use async_trait::async_trait;
use sigma_core::{RandomSet, SetSize};
use tokio_util::sync::CancellationToken;

use crate::UpstreamError;

/// A remote source of random integers.
///
/// Implementations must be `Send + Sync`: one instance is shared by every
/// draw task of a batch.
///
/// # Cancel Safety
/// `fetch` must observe `cancel` at its suspension point and return
/// [`UpstreamError::Cancelled`] promptly once it fires, rather than running
/// the draw to completion.
#[async_trait]
pub trait RandomSource: Send + Sync {
    /// Draw `count` integers in `[1, 100]`.
    ///
    /// # Errors
    /// Returns [`UpstreamError::Config`] if the source is not configured,
    /// [`UpstreamError::Transport`] on network failure,
    /// [`UpstreamError::Protocol`] or [`UpstreamError::Malformed`] on a bad
    /// provider response, and [`UpstreamError::Cancelled`] if `cancel` fires.
    async fn fetch(
        &self,
        count: SetSize,
        cancel: &CancellationToken,
    ) -> Result<RandomSet, UpstreamError>;
}
