//! French text analyzer.
//!
//! The ready-made analyzer for this crate's target corpora: normalization
//! (lowercase, encoding repair, punctuation and digit removal), lexical
//! tokenization that keeps elided forms intact, French stopword removal,
//! and punctuation-token removal.
//!
//! # Examples
//!
//! ```
//! use apercu::analysis::analyzer::analyzer::Analyzer;
//! use apercu::analysis::analyzer::french::FrenchAnalyzer;
//!
//! let analyzer = FrenchAnalyzer::new().unwrap();
//! let tokens: Vec<_> = analyzer.analyze("Le chat NOIR dort.").unwrap().collect();
//!
//! let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, vec!["chat", "noir", "dort"]);
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::normalizer::TextNormalizer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::punctuation::PunctuationFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::regex::RegexTokenizer;
use crate::analysis::tokenizer::tagged::{MorphologicalTagger, TaggedTokenizer};
use crate::error::Result;

/// Analyzer with French defaults.
///
/// The emitted stream contains the retained word tokens only, in source
/// order, ready for n-gram generation.
pub struct FrenchAnalyzer {
    inner: PipelineAnalyzer,
}

impl FrenchAnalyzer {
    /// Create a French analyzer with the default stopword list and the
    /// lexical (regex) tokenizer.
    pub fn new() -> Result<Self> {
        Self::build(Arc::new(RegexTokenizer::new()?), StopFilter::new())
    }

    /// Create a French analyzer with a custom stopword set.
    pub fn with_stop_words(stop_words: HashSet<String>) -> Result<Self> {
        Self::build(
            Arc::new(RegexTokenizer::new()?),
            StopFilter::with_stop_words(stop_words),
        )
    }

    /// Create a French analyzer around a linguistic-model tagger.
    ///
    /// The model's own stop/punctuation flags decide what is dropped; no
    /// static stopword set is consulted.
    pub fn with_tagger(tagger: Arc<dyn MorphologicalTagger>) -> Result<Self> {
        Self::build(
            Arc::new(TaggedTokenizer::new(tagger)),
            StopFilter::with_stop_words(HashSet::new()),
        )
    }

    fn build(tokenizer: Arc<dyn Tokenizer>, stop_filter: StopFilter) -> Result<Self> {
        let inner = PipelineAnalyzer::new(tokenizer)
            .add_char_filter(Arc::new(TextNormalizer::new()?))
            .add_filter(Arc::new(stop_filter))
            .add_filter(Arc::new(PunctuationFilter::new()));

        Ok(FrenchAnalyzer { inner })
    }
}

impl Analyzer for FrenchAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "french"
    }
}
