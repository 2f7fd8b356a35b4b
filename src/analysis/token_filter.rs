//! Token filter implementations.
//!
//! Token filters transform the token stream produced by a tokenizer. The
//! stream handed to n-gram generation must contain neither stopwords nor
//! punctuation tokens; [`stop::StopFilter`] and
//! [`punctuation::PunctuationFilter`] remove them while preserving the
//! source order of the retained tokens.

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
pub trait TokenFilter: Send + Sync {
    /// Filter the given token stream, returning the transformed stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod punctuation;
pub mod stop;

pub use punctuation::PunctuationFilter;
pub use stop::StopFilter;
