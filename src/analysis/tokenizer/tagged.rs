//! Tokenizer backed by an injected morphological tagger.
//!
//! A linguistic model (part-of-speech tagger, morphological analyzer) is a
//! heavyweight resource: loading one takes time and memory, and it should be
//! acquired once by the caller and passed in, never loaded behind the
//! pipeline's back. [`TaggedTokenizer`] therefore wraps an
//! `Arc<dyn MorphologicalTagger>` supplied at construction.
//!
//! Unlike the lexical tokenizers, a tagger reports stopword and punctuation
//! status per word itself, so streams produced here carry those flags
//! already set and need no static stopword set downstream.

use std::sync::Arc;

use crate::analysis::token::{Token, TokenStream, TokenType};
use crate::error::Result;

use super::Tokenizer;

/// A single word as segmented and tagged by a linguistic model.
#[derive(Clone, Debug, PartialEq)]
pub struct TaggedWord {
    /// Surface form of the word
    pub text: String,
    /// Byte offset where the word starts in the analyzed text
    pub start_offset: usize,
    /// Byte offset where the word ends in the analyzed text
    pub end_offset: usize,
    /// Whether the model classifies this word as a stopword
    pub is_stop: bool,
    /// Whether the model classifies this word as punctuation
    pub is_punct: bool,
}

/// Capability trait for model-based segmentation and tagging.
///
/// Implementations are expected to be expensive to construct and cheap to
/// call; they must be shareable across threads.
pub trait MorphologicalTagger: Send + Sync {
    /// Segment and tag the given text, in source order.
    fn tag(&self, text: &str) -> Result<Vec<TaggedWord>>;

    /// Get the name of this tagger (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// A tokenizer that delegates segmentation to a [`MorphologicalTagger`].
pub struct TaggedTokenizer {
    tagger: Arc<dyn MorphologicalTagger>,
}

impl TaggedTokenizer {
    /// Create a new tokenizer around an already-initialized tagger.
    pub fn new(tagger: Arc<dyn MorphologicalTagger>) -> Self {
        Self { tagger }
    }
}

impl Tokenizer for TaggedTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();

        for (position, word) in self.tagger.tag(text)?.into_iter().enumerate() {
            let token_type = if word.is_punct {
                TokenType::Punctuation
            } else {
                TokenType::Word
            };
            let mut token = Token::with_offsets(
                word.text,
                position,
                word.start_offset,
                word.end_offset,
            )
            .with_token_type(token_type);
            token.stopped = word.is_stop;
            tokens.push(token);
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "tagged"
    }
}
