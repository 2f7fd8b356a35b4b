//! Punctuation filter implementation.

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::TokenFilter;
use crate::error::Result;

/// A filter that removes tokens consisting solely of punctuation.
///
/// Catches both tokens already classified as punctuation by the tokenizer
/// and unclassified tokens whose text contains nothing but punctuation
/// characters. Word tokens that merely contain an apostrophe ("l'été") are
/// not punctuation and pass through.
#[derive(Clone, Debug, Default)]
pub struct PunctuationFilter;

impl PunctuationFilter {
    /// Create a new punctuation filter.
    pub fn new() -> Self {
        PunctuationFilter
    }

    fn is_punctuation_text(text: &str) -> bool {
        !text.is_empty()
            && text
                .chars()
                .all(|c| c.is_ascii_punctuation() || matches!(c, '’' | '«' | '»' | '“' | '”' | '…'))
    }
}

impl TokenFilter for PunctuationFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter(|token| !token.is_punctuation() && !Self::is_punctuation_text(&token.text))
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "punctuation"
    }
}
