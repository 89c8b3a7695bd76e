//! Population standard deviation and the per-batch fold.

use crate::result::{BatchResult, ResultItem};
use crate::set::RandomSet;

/// Population standard deviation of `values` (divisor is the count, not count - 1).
///
/// An empty slice yields `0.0`. That keeps a zero-set batch serializable: its
/// only entry is an empty union.
///
/// # Complexity
/// O(n), two passes.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn standard_deviation(values: &[u32]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let count = values.len() as f64;
    let sum: u64 = values.iter().copied().map(u64::from).sum();
    let mean = sum as f64 / count;

    let squared_deviations: f64 = values
        .iter()
        .map(|&value| {
            let deviation = f64::from(value) - mean;
            deviation * deviation
        })
        .sum();

    (squared_deviations / count).sqrt()
}

/// Fold fetched sets into one entry per set, in order, plus a trailing union entry.
///
/// The union is the concatenation of every set in the order given.
#[must_use]
pub fn build_results(sets: Vec<RandomSet>) -> BatchResult {
    let total: usize = sets.iter().map(RandomSet::len).sum();
    let mut union = Vec::with_capacity(total);
    let mut items = Vec::with_capacity(sets.len() + 1);

    for set in sets {
        union.extend_from_slice(set.values());
        let stddev = standard_deviation(set.values());
        items.push(ResultItem::new(set.into_inner(), stddev));
    }

    let stddev = standard_deviation(&union);
    items.push(ResultItem::new(union, stddev));
    BatchResult::from_items(items)
}
