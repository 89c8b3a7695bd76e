//! Fuzz target: random.org `generateIntegers` response decoder.
//!
//! Arbitrary bytes fed to the decoder must yield `Ok` or an `UpstreamError`,
//! never a panic. The first byte picks the expected set size.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sigma_core::SetSize;

fuzz_target!(|data: &[u8]| {
    let Some((&first, body)) = data.split_first() else {
        return;
    };
    let Ok(count) = SetSize::new(u32::from(first)) else {
        return;
    };
    if let Ok(set) = sigma_fetcher::wire::decode_response(body, count) {
        assert_eq!(set.len(), usize::from(first));
        assert!(set.values().iter().all(|v| (1..=100).contains(v)));
    }
});
