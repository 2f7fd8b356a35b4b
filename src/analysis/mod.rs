//! Text analysis module for apercu.
//!
//! This module provides the text-processing front end of the pipeline:
//! normalization, tokenization, and token filtering. The architecture is a
//! chain of char filters, a tokenizer, and token filters assembled by an
//! analyzer.

pub mod analyzer;
pub mod char_filter;
pub mod normalizer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::{Analyzer, FrenchAnalyzer, PipelineAnalyzer};
pub use normalizer::TextNormalizer;
pub use token::{Token, TokenStream, TokenType};
pub use token_filter::{PunctuationFilter, StopFilter, TokenFilter};
pub use tokenizer::{
    MorphologicalTagger, RegexTokenizer, TaggedTokenizer, TaggedWord, Tokenizer,
    UnicodeWordTokenizer, WhitespaceTokenizer,
};
