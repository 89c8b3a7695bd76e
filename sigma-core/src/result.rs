//! Output shapes returned to HTTP clients.

use serde::{Deserialize, Serialize};

/// A sample paired with its population standard deviation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct ResultItem {
    /// The sample values, in draw order.
    pub data: Vec<u32>,
    /// Population standard deviation of `data`.
    pub stddev: f64,
}

impl ResultItem {
    /// Creates a `ResultItem`.
    #[must_use]
    pub fn new(data: Vec<u32>, stddev: f64) -> Self {
        Self { data, stddev }
    }
}

/// Per-set results in request order, followed by the union entry.
///
/// Serializes as a bare JSON array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BatchResult(Vec<ResultItem>);

impl BatchResult {
    pub(crate) fn from_items(items: Vec<ResultItem>) -> Self {
        Self(items)
    }

    /// All entries; the last one is always the union.
    #[must_use]
    pub fn items(&self) -> &[ResultItem] {
        &self.0
    }

    /// Entries for the individual sets, excluding the union.
    #[must_use]
    pub fn sets(&self) -> &[ResultItem] {
        match self.0.split_last() {
            Some((_, sets)) => sets,
            None => &[],
        }
    }

    /// The entry computed over every set concatenated in request order.
    #[must_use]
    pub fn union(&self) -> Option<&ResultItem> {
        self.0.last()
    }

    /// Number of entries, including the union.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` only for a value never produced by `build_results`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume the result and return its entries.
    #[must_use]
    pub fn into_items(self) -> Vec<ResultItem> {
        self.0
    }
}
