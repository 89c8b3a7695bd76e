//! Fuzz target: batch fold over arbitrary sets.
//!
//! The result must always hold one entry per set plus the union, and no
//! standard deviation may be NaN.
#![no_main]

use libfuzzer_sys::fuzz_target;
use sigma_core::{build_results, RandomSet};

fuzz_target!(|data: &[u8]| {
    let sets: Vec<RandomSet> = data
        .chunks(7)
        .map(|chunk| RandomSet::new(chunk.iter().map(|&b| u32::from(b)).collect()))
        .collect();
    let expected = sets.len() + 1;
    let result = build_results(sets);
    assert_eq!(result.len(), expected);
    assert!(result.items().iter().all(|item| !item.stddev.is_nan()));
});
