//! Char filter implementations for text normalization.
//!
//! Char filters pre-process the text string before it is passed to the
//! tokenizer. Token offsets produced downstream refer to the filtered text,
//! not the raw input.
//!
//! # Available Filters
//!
//! - [`mapping::MappingCharFilter`] - Fixed-table substring replacement
//! - [`TextNormalizer`](crate::analysis::normalizer::TextNormalizer) -
//!   Full French text cleanup (lowercase, encoding repair, punctuation and
//!   digit removal, whitespace collapse)

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text and return the filtered text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod mapping;
