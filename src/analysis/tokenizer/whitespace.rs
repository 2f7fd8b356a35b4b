//! Whitespace tokenizer implementation.

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream, TokenType};
use crate::error::Result;

/// A tokenizer that splits text on whitespace.
///
/// Intended for text that has already been through the normalizer, where
/// whitespace is the only separator left. Punctuation-only tokens are
/// classified so the punctuation filter can drop them.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }

    /// Detect token type based on the content of the word.
    fn detect_token_type(word: &str) -> TokenType {
        if word.is_empty() {
            return TokenType::Other;
        }

        if word.chars().all(|c| c.is_numeric()) {
            return TokenType::Num;
        }

        if word.chars().all(|c| c.is_ascii_punctuation() || c == '’') {
            return TokenType::Punctuation;
        }

        if word.chars().all(|c| c.is_alphanumeric() || c == '\'' || c == '’' || c == '-') {
            return TokenType::Word;
        }

        TokenType::Other
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        let mut position = 0;
        let mut start = None;

        for (i, c) in text.char_indices() {
            if c.is_whitespace() {
                if let Some(s) = start.take() {
                    let word = &text[s..i];
                    tokens.push(
                        Token::with_offsets(word, position, s, i)
                            .with_token_type(Self::detect_token_type(word)),
                    );
                    position += 1;
                }
            } else if start.is_none() {
                start = Some(i);
            }
        }

        if let Some(s) = start {
            let word = &text[s..];
            tokens.push(
                Token::with_offsets(word, position, s, text.len())
                    .with_token_type(Self::detect_token_type(word)),
            );
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}
