#![no_main]

use libfuzzer_sys::fuzz_target;
use review_scorer::parsers::parse_vote_field;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(votes) = parse_vote_field(0, s) {
            assert!(votes.helpful_yes() <= votes.total_vote());
        }
    }
});
