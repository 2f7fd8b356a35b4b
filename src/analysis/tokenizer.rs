//! Tokenizer implementations for text analysis.
//!
//! A tokenizer splits normalized text into an ordered stream of word tokens.
//! Lexical tokenizers ([`RegexTokenizer`], [`WhitespaceTokenizer`],
//! [`UnicodeWordTokenizer`]) split on surface patterns; [`TaggedTokenizer`]
//! wraps an injected linguistic-model capability that supplies stopword and
//! punctuation flags itself.

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual tokenizer modules
pub mod regex;
pub mod tagged;
pub mod unicode_word;
pub mod whitespace;

// Re-export all tokenizers for convenient access
pub use regex::RegexTokenizer;
pub use tagged::{MorphologicalTagger, TaggedTokenizer, TaggedWord};
pub use unicode_word::UnicodeWordTokenizer;
pub use whitespace::WhitespaceTokenizer;
