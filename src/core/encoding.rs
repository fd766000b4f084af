// src/core/encoding.rs

// Repair UTF-8 sequences that were stored as Latin-1 code points
// (e.g. "Ã©" for "é") inside an otherwise valid UTF-8 page.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, ScrapeError};

/// Lead byte 0xC2-0xF4 followed by continuation bytes, read as code points.
static MOJIBAKE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\x{c2}-\x{f4}][\x{80}-\x{bf}]+").unwrap());

/// Decode `bytes` as UTF-8, then repair double-encoded runs in place.
pub fn decode_and_repair(bytes: Vec<u8>) -> Result<String> {
    let text = String::from_utf8(bytes)?;
    fix_encoding(&text)
}

/// Re-decode each matching run (Latin-1 encode, UTF-8 decode).
/// Text without such runs comes back unchanged.
pub fn fix_encoding(text: &str) -> Result<String> {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for m in MOJIBAKE.find_iter(text) {
        out.push_str(&text[last..m.start()]);
        // every char in a match is <= U+00F4, so the cast is lossless
        let bytes: Vec<u8> = m.as_str().chars().map(|c| c as u8).collect();
        let fixed = String::from_utf8(bytes)
            .map_err(|_| ScrapeError::Encoding(m.as_str().to_string()))?;
        out.push_str(&fixed);
        last = m.end();
    }
    out.push_str(&text[last..]);
    Ok(out)
}
