//! Stop filter implementation.
//!
//! This module provides a filter that removes common words (stop words) that
//! carry no insight on their own. The default list covers French function
//! words and auxiliary forms; custom lists are supported for other corpora.
//!
//! # Examples
//!
//! ```
//! use apercu::analysis::token_filter::TokenFilter;
//! use apercu::analysis::token_filter::stop::StopFilter;
//! use apercu::analysis::token::Token;
//!
//! let filter = StopFilter::new(); // Uses the default French stop words
//! let tokens = vec![
//!     Token::new("le", 0),
//!     Token::new("chat", 1),
//!     Token::new("noir", 2),
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! // "le" is removed as a stop word
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[0].text, "chat");
//! assert_eq!(result[1].text, "noir");
//! ```

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::TokenFilter;
use crate::error::Result;

/// Default French stop words list.
///
/// French function words plus conjugated forms of "être" and "avoir",
/// matching the standard French stopword resource used by the exports this
/// crate ingests.
const DEFAULT_FRENCH_STOP_WORDS: &[&str] = &[
    "au", "aux", "avec", "ce", "ces", "dans", "de", "des", "du", "elle", "en", "et", "eux", "il",
    "ils", "je", "la", "le", "les", "leur", "lui", "ma", "mais", "me", "même", "mes", "moi", "mon",
    "ne", "nos", "notre", "nous", "on", "ou", "par", "pas", "pour", "qu", "que", "qui", "sa", "se",
    "ses", "son", "sur", "ta", "te", "tes", "toi", "ton", "tu", "un", "une", "vos", "votre",
    "vous", "c", "d", "j", "l", "à", "m", "n", "s", "t", "y", "été", "étée", "étées", "étés",
    "étant", "étante", "étants", "étantes", "suis", "es", "est", "sommes", "êtes", "sont",
    "serai", "seras", "sera", "serons", "serez", "seront", "serais", "serait", "serions",
    "seriez", "seraient", "étais", "était", "étions", "étiez", "étaient", "fus", "fut", "fûmes",
    "fûtes", "furent", "sois", "soit", "soyons", "soyez", "soient", "fusse", "fusses", "fût",
    "fussions", "fussiez", "fussent", "ayant", "ayante", "ayantes", "ayants", "eu", "eue",
    "eues", "eus", "ai", "as", "avons", "avez", "ont", "aurai", "auras", "aura", "aurons",
    "aurez", "auront", "aurais", "aurait", "aurions", "auriez", "auraient", "avais", "avait",
    "avions", "aviez", "avaient", "eut", "eûmes", "eûtes", "eurent", "aie", "aies", "ait",
    "ayons", "ayez", "aient", "eusse", "eusses", "eût", "eussions", "eussiez", "eussent",
];

/// Default French stop words as a HashSet.
pub static DEFAULT_FRENCH_STOP_WORDS_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    DEFAULT_FRENCH_STOP_WORDS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// A filter that removes stop words from the token stream.
///
/// The stream arriving here is normally lowercase already (the normalizer
/// runs first); tokens that still carry uppercase are matched against the
/// set through their lowercase form.
///
/// # Examples
///
/// ## Custom stop words
///
/// ```
/// use apercu::analysis::token_filter::stop::StopFilter;
///
/// let filter = StopFilter::from_words(vec!["rapport", "page"]);
/// assert!(filter.is_stop_word("rapport"));
/// ```
///
/// ## Preserve stopped tokens
///
/// ```
/// use apercu::analysis::token_filter::TokenFilter;
/// use apercu::analysis::token_filter::stop::StopFilter;
/// use apercu::analysis::token::Token;
///
/// // Mark as stopped but don't remove
/// let filter = StopFilter::from_words(vec!["le"]).remove_stopped(false);
/// let tokens = vec![Token::new("le", 0), Token::new("chat", 1)];
///
/// let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
///     .unwrap()
///     .collect();
///
/// assert_eq!(result.len(), 2);
/// assert!(result[0].is_stopped());
/// assert!(!result[1].is_stopped());
/// ```
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The set of stop words to remove
    stop_words: Arc<HashSet<String>>,
    /// Whether to remove stopped tokens entirely or just mark them as stopped
    remove_stopped: bool,
}

impl StopFilter {
    /// Create a new stop filter with the default French stop words.
    pub fn new() -> Self {
        Self::with_stop_words(DEFAULT_FRENCH_STOP_WORDS_SET.clone())
    }

    /// Create a new stop filter with custom stop words.
    pub fn with_stop_words(stop_words: HashSet<String>) -> Self {
        StopFilter {
            stop_words: Arc::new(stop_words),
            remove_stopped: true,
        }
    }

    /// Create a new stop filter from a list of stop words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = words.into_iter().map(|s| s.into()).collect();
        Self::with_stop_words(stop_words)
    }

    /// Set whether to remove stopped tokens entirely or just mark them.
    pub fn remove_stopped(mut self, remove: bool) -> Self {
        self.remove_stopped = remove;
        self
    }

    /// Check if a word is a stop word (its lowercase form is in the set).
    pub fn is_stop_word(&self, word: &str) -> bool {
        if self.stop_words.contains(word) {
            return true;
        }
        if word.chars().any(|c| c.is_uppercase()) {
            return self.stop_words.contains(word.to_lowercase().as_str());
        }
        false
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenFilter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let remove_stopped = self.remove_stopped;
        let filtered_tokens: Vec<Token> = tokens
            .filter_map(|token| {
                // Tokens can arrive pre-flagged (model-backed tokenizers).
                if token.is_stopped() || self.is_stop_word(&token.text) {
                    if remove_stopped {
                        None
                    } else {
                        Some(token.stop())
                    }
                } else {
                    Some(token)
                }
            })
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
