//! Text normalizer for raw French documents.
//!
//! This is the first stage of the pipeline. It takes free-form text as it
//! arrives from an export (mixed case, stray digits, punctuation, broken
//! encoding) and produces the clean, single-spaced, lowercase form the
//! tokenizer expects.
//!
//! # Normalization steps
//!
//! Applied in order:
//!
//! 1. Lowercase (Unicode-aware)
//! 2. Repair known double-encoded accented sequences ("ã©" → "é")
//! 3. Remove ASCII punctuation except apostrophes
//! 4. Remove digit characters
//! 5. Collapse whitespace runs to a single space and trim the ends
//!
//! The whole transformation is pure and idempotent: normalizing an already
//! normalized string returns it unchanged. Unrecognized encoding artifacts
//! are left in place rather than aborting the run.
//!
//! # Examples
//!
//! ```
//! use apercu::analysis::normalizer::TextNormalizer;
//!
//! let normalizer = TextNormalizer::new().unwrap();
//! assert_eq!(
//!     normalizer.normalize("L'Ã©tÃ© 2023,  dÃ©jÃ  fini !"),
//!     "l'été déjà fini"
//! );
//! ```

use super::char_filter::CharFilter;
use super::char_filter::mapping::MappingCharFilter;
use crate::error::Result;

/// Punctuation is stripped rather than spaced out, matching how elided
/// forms survive in the source corpora. Apostrophes are the one exception:
/// French clitics ("l'été", "d'accord") must stay attached.
#[inline]
fn is_stripped_punctuation(c: char) -> bool {
    c.is_ascii_punctuation() && c != '\''
}

/// Normalizer for raw French text.
///
/// Construct once and reuse; normalization itself never fails.
pub struct TextNormalizer {
    repair: MappingCharFilter,
}

impl TextNormalizer {
    /// Create a normalizer with the built-in French repair table.
    pub fn new() -> Result<Self> {
        Ok(TextNormalizer {
            repair: MappingCharFilter::french_repair()?,
        })
    }

    /// Normalize a raw document into clean, single-spaced, lowercase text.
    pub fn normalize(&self, input: &str) -> String {
        let lowered = input.to_lowercase();
        let repaired = self.repair.filter(&lowered);

        let mut out = String::with_capacity(repaired.len());
        let mut prev_space = true;

        for c in repaired.chars() {
            if is_stripped_punctuation(c) || c.is_numeric() {
                continue;
            }
            if c.is_whitespace() {
                if !prev_space {
                    out.push(' ');
                    prev_space = true;
                }
            } else {
                out.push(c);
                prev_space = false;
            }
        }

        if out.ends_with(' ') {
            out.pop();
        }

        out
    }
}

impl CharFilter for TextNormalizer {
    fn filter(&self, input: &str) -> String {
        self.normalize(input)
    }

    fn name(&self) -> &'static str {
        "normalizer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(input: &str) -> String {
        TextNormalizer::new().unwrap().normalize(input)
    }

    #[test]
    fn lowercases() {
        assert_eq!(norm("Le Chat NOIR"), "le chat noir");
        assert_eq!(norm("ÉTÉ"), "été");
    }

    #[test]
    fn repairs_double_encoding() {
        assert_eq!(norm("Ã©tÃ© Ã  Paris"), "été à paris");
        assert_eq!(norm("franÃ§ais"), "français");
    }

    #[test]
    fn strips_punctuation_except_apostrophe() {
        assert_eq!(norm("bonjour, le monde !"), "bonjour le monde");
        assert_eq!(norm("l'été"), "l'été");
        assert_eq!(norm("(entre) [crochets] {et} <chevrons>"), "entre crochets et chevrons");
    }

    #[test]
    fn typographic_apostrophe_survives() {
        assert_eq!(norm("l’été"), "l’été");
    }

    #[test]
    fn strips_digits() {
        assert_eq!(norm("en 2023 il y avait 42 chats"), "en il y avait chats");
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(norm("  le   chat\t\nnoir  "), "le chat noir");
    }

    #[test]
    fn empty_and_whitespace_only() {
        assert_eq!(norm(""), "");
        assert_eq!(norm("   \t\n"), "");
        assert_eq!(norm("12, 34! 56?"), "");
    }

    #[test]
    fn punctuation_is_deleted_not_spaced() {
        assert_eq!(norm("noir.le"), "noirle");
    }

    #[test]
    fn unknown_artifacts_left_in_place() {
        let out = norm("donnã…es");
        assert!(out.contains('ã'));
    }

    #[test]
    fn idempotent() {
        let samples = [
            "Le Chat NOIR dort.",
            "L'Ã©tÃ© 2023,  dÃ©jÃ  fini !",
            "  des   espaces\t partout  ",
            "français œuvre ça",
            "",
        ];

        let n = TextNormalizer::new().unwrap();
        for s in samples {
            let once = n.normalize(s);
            let twice = n.normalize(&once);
            assert_eq!(once, twice, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn no_invariant_violations() {
        let out = norm("Un 1er essai,  trÃ¨s  vite ; fini.");
        assert!(!out.contains("  "));
        assert!(!out.chars().any(|c| c.is_numeric()));
        assert!(!out.chars().any(|c| c.is_uppercase()));
        assert!(!out.starts_with(' ') && !out.ends_with(' '));
    }
}
