//! Fuzz target for the connection URL parser.
//!
//! Feeds arbitrary strings, with and without a known dialect prefix, to the
//! dispatcher to find panics.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_url_parser
//! ```

#![no_main]

use arbitrary::Arbitrary;
use dburl_parser::{DialectKind, parse};
use libfuzzer_sys::fuzz_target;

/// A URL body paired with the dialect prefix to put in front of it.
#[derive(Debug, Arbitrary)]
struct FuzzUrl {
    dialect: u8,
    body: String,
}

fuzz_target!(|input: FuzzUrl| {
    let dialect = match input.dialect % 4 {
        0 => DialectKind::MySql,
        1 => DialectKind::Cassandra,
        2 => DialectKind::Oracle,
        _ => DialectKind::Unknown,
    };
    let url = format!("{}{}", dialect.prefix(), input.body);

    // The parser should never panic, only return errors
    if let Ok(info) = parse(&url) {
        assert_eq!(info.dialect(), DialectKind::detect(&url));
        assert!(!info.hosts().is_empty());
    }
});
