//! Fixed-table substring replacement char filter.
//!
//! [`MappingCharFilter`] rewrites every occurrence of a set of substrings,
//! using leftmost-longest matching so overlapping keys behave predictably.
//! Its main use here is repairing French text that went through a
//! UTF-8-read-as-Latin-1 round trip ("Ã©tÃ©" → "été"), via
//! [`MappingCharFilter::french_repair`].

use std::collections::HashMap;

use aho_corasick::{AhoCorasick, MatchKind};

use super::CharFilter;
use crate::error::Result;

/// Known double-encoded sequences in French text, keyed by their form after
/// lowercasing (the normalizer lowercases before repairing).
///
/// Each key is the UTF-8 byte pair/triple of a French character as it
/// appears when those bytes were decoded as cp1252 and then lowercased.
/// Sequences that never occur in well-formed French are safe to rewrite
/// unconditionally; anything not in the table is left untouched.
const FRENCH_REPAIRS: &[(&str, &str)] = &[
    // Lowercase accented letters: 0xC3 followed by the second UTF-8 byte.
    ("ã©", "é"),
    ("ã¨", "è"),
    ("ãª", "ê"),
    ("ã«", "ë"),
    ("ã\u{a0}", "à"),
    ("ã ", "à"),
    ("ã¢", "â"),
    ("ã®", "î"),
    ("ã¯", "ï"),
    ("ã´", "ô"),
    ("ã¹", "ù"),
    ("ã»", "û"),
    ("ã¼", "ü"),
    ("ã§", "ç"),
    // Uppercase accented letters, as seen after lowercasing the mojibake.
    ("ã‰", "é"),
    ("ãˆ", "è"),
    ("ãš", "ê"),
    ("ã€", "à"),
    ("ã‡", "ç"),
    ("ã”", "ô"),
    // The oe ligature: 0xC5 0x93 / 0xC5 0x92.
    ("å“", "œ"),
    ("å’", "œ"),
    // Typographic apostrophe (0xE2 0x80 0x99) and non-breaking space
    // (0xC2 0xA0), both endemic in exported French corpora.
    ("â€™", "'"),
    ("â\u{a0}", " "),
];

/// A char filter that replaces fixed substrings via Aho-Corasick matching.
pub struct MappingCharFilter {
    ac: AhoCorasick,
    replacements: Vec<String>,
}

impl MappingCharFilter {
    /// Create a new mapping filter from a key → replacement table.
    pub fn new(mapping: HashMap<String, String>) -> Result<Self> {
        let mut keys = Vec::with_capacity(mapping.len());
        let mut replacements = Vec::with_capacity(mapping.len());

        for (k, v) in mapping {
            keys.push(k);
            replacements.push(v);
        }

        let ac = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(&keys)
            .map_err(|e| crate::error::ApercuError::Anyhow(anyhow::Error::from(e)))?;

        Ok(Self { ac, replacements })
    }

    /// Create a filter loaded with the built-in French mojibake repairs.
    pub fn french_repair() -> Result<Self> {
        let mapping = FRENCH_REPAIRS
            .iter()
            .map(|&(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self::new(mapping)
    }
}

impl CharFilter for MappingCharFilter {
    fn filter(&self, input: &str) -> String {
        let mut output = String::with_capacity(input.len());
        let mut last_match_end = 0;

        for m in self.ac.find_iter(input) {
            output.push_str(&input[last_match_end..m.start()]);
            output.push_str(&self.replacements[m.pattern().as_usize()]);
            last_match_end = m.end();
        }

        output.push_str(&input[last_match_end..]);
        output
    }

    fn name(&self) -> &'static str {
        "mapping"
    }
}
