//! Error types for the fetcher crate.

/// Errors from a single draw against the randomness provider.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum UpstreamError {
    /// The provider credential is not configured.
    #[error("upstream configuration error: {0}")]
    Config(String),

    /// The request never produced a usable HTTP response.
    #[error("transport error: {0}")]
    Transport(String),

    /// The provider answered with a non-zero JSON-RPC error code.
    #[error("random.org error code: {code} message: {message}")]
    Protocol { code: i64, message: String },

    /// The response body could not be decoded.
    #[error("malformed upstream response: {0}")]
    Malformed(String),

    /// The cancellation token fired before the draw completed.
    #[error("draw cancelled")]
    Cancelled,
}

/// Batch-level failure. Wraps the first error observed across all draws.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum FetchError {
    /// A draw failed; every sibling draw was cancelled.
    #[error("set {set_index} failed: {source}")]
    Upstream {
        set_index: usize,
        #[source]
        source: UpstreamError,
    },

    /// A draw task panicked or was aborted by the runtime.
    #[error("draw task failed: {0}")]
    TaskFailed(String),

    /// The batch is too large to hold its result slots in memory.
    #[error("cannot allocate {sets_count} result slots: {reason}")]
    TooManySets { sets_count: usize, reason: String },

    /// The caller's scope was cancelled before every draw finished.
    #[error("batch cancelled by caller")]
    Cancelled,
}
