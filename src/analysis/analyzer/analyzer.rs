//! Core analyzer trait definition.
//!
//! An analyzer is the complete text processing front end of the pipeline:
//!
//! ```text
//! Raw Text → Char Filters → Tokenizer → Token Filters → Token Stream
//! ```
//!
//! The stream an analyzer emits is what n-gram generation consumes, so it
//! must already exclude stopword and punctuation tokens while preserving
//! the source order of everything kept.
//!
//! # Available Implementations
//!
//! - [`PipelineAnalyzer`](super::pipeline::PipelineAnalyzer) - Custom char filter + tokenizer + token filter chains
//! - [`FrenchAnalyzer`](super::french::FrenchAnalyzer) - Ready-made French defaults

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// Requires `Send + Sync` so a single analyzer can serve parallel
/// per-document runs.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer.
    fn name(&self) -> &'static str;
}
