//! Fuzz target: `/random/mean` query parameter parsing.
//!
//! Splits the input into `requests` and `length` at the first NUL byte.
#![no_main]

use libfuzzer_sys::fuzz_target;
use sigma_gateway::routes::MeanQuery;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let (requests, length) = text.split_once('\0').unwrap_or((&*text, ""));
    let query = MeanQuery {
        requests: Some(requests.to_owned()),
        length: Some(length.to_owned()),
    };
    if let Ok((_, set_size)) = query.parse() {
        assert!(set_size.get() >= 1);
    }
});
