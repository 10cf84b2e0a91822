//! Fuzz target for the edge-list parser.
//!
//! Arbitrary text must parse or fail with `Error::Parse`, never panic.
//!
//! # Running
//!
//! ```bash
//! cd fuzz
//! cargo +nightly fuzz run fuzz_edge_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use graphwalk_core::edge_source::parse_edges;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let _ = parse_edges(input);
    }
});
