//! Parallel batch fetch over a [`RandomSource`].
//!
//! One task per requested set, all-or-nothing: the first failing draw cancels
//! its siblings, and the batch returns only after every task has settled.

use std::sync::Arc;

use sigma_core::{build_results, BatchResult, RandomSet, SetSize};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::{FetchError, RandomSource, UpstreamError};

/// Fans a batch out over a shared [`RandomSource`].
///
/// Fan-out is unbounded: a batch of `n` sets spawns `n` tasks.
pub struct BatchFetcher<S: RandomSource> {
    source: Arc<S>,
}

impl<S: RandomSource + 'static> BatchFetcher<S> {
    /// Create a fetcher that owns `source`.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self::from_shared(Arc::new(source))
    }

    /// Create a fetcher over an already shared source.
    #[must_use]
    pub fn from_shared(source: Arc<S>) -> Self {
        Self { source }
    }

    /// The underlying source.
    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Draw `sets_count` sets of `set_size` integers concurrently.
    ///
    /// Sets are returned in request order regardless of completion order.
    /// Draws run under a child of `parent`; cancelling `parent` aborts the
    /// batch, and so does dropping the returned future.
    ///
    /// # Errors
    /// Returns [`FetchError::Upstream`] wrapping the first draw failure,
    /// [`FetchError::TaskFailed`] if a draw task panicked,
    /// [`FetchError::Cancelled`] if `parent` was cancelled, or
    /// [`FetchError::TooManySets`] if the slots for `sets_count` sets cannot
    /// be allocated. No partial result is ever returned.
    ///
    /// A batch of zero sets succeeds with no draws, even if `parent` is
    /// already cancelled.
    pub async fn fetch_sets(
        &self,
        sets_count: usize,
        set_size: SetSize,
        parent: &CancellationToken,
    ) -> Result<Vec<RandomSet>, FetchError> {
        if sets_count == 0 {
            return Ok(Vec::new());
        }

        // Slot i belongs to task i alone; the slot index travels with the task.
        let mut slots: Vec<Option<RandomSet>> = Vec::new();
        slots
            .try_reserve_exact(sets_count)
            .map_err(|e| FetchError::TooManySets { sets_count, reason: e.to_string() })?;
        slots.resize_with(sets_count, || None);

        let scope = parent.child_token();
        let _scope_guard = scope.clone().drop_guard();

        tracing::debug!(sets_count, %set_size, "dispatching draws");

        let mut tasks = JoinSet::new();
        for set_index in 0..sets_count {
            let source = Arc::clone(&self.source);
            let scope = scope.clone();
            tasks.spawn(async move { (set_index, source.fetch(set_size, &scope).await) });
        }

        let mut first_error: Option<FetchError> = None;
        while let Some(joined) = tasks.join_next().await {
            let failure = match joined {
                Ok((set_index, Ok(set))) => {
                    if let Some(slot) = slots.get_mut(set_index) {
                        *slot = Some(set);
                    }
                    continue;
                }
                // A consequence of cancellation, never its cause.
                Ok((set_index, Err(UpstreamError::Cancelled))) => {
                    tracing::debug!(set_index, "draw cancelled");
                    continue;
                }
                Ok((set_index, Err(source))) => FetchError::Upstream { set_index, source },
                Err(join_error) => FetchError::TaskFailed(join_error.to_string()),
            };

            if first_error.is_none() {
                tracing::warn!(error = %failure, "draw failed, cancelling remaining draws");
                scope.cancel();
                first_error = Some(failure);
            } else {
                tracing::debug!(error = %failure, "ignoring subsequent draw failure");
            }
        }

        if let Some(error) = first_error {
            return Err(error);
        }
        if scope.is_cancelled() {
            return Err(FetchError::Cancelled);
        }

        slots
            .into_iter()
            .enumerate()
            .map(|(set_index, slot)| {
                slot.ok_or_else(|| {
                    FetchError::TaskFailed(format!("set {set_index} finished without a result"))
                })
            })
            .collect()
    }

    /// [`fetch_sets`](Self::fetch_sets) followed by [`build_results`].
    ///
    /// # Errors
    /// Same as [`fetch_sets`](Self::fetch_sets).
    pub async fn fetch_batch(
        &self,
        sets_count: usize,
        set_size: SetSize,
        parent: &CancellationToken,
    ) -> Result<BatchResult, FetchError> {
        let sets = self.fetch_sets(sets_count, set_size, parent).await?;
        Ok(build_results(sets))
    }
}
