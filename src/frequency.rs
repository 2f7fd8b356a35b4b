//! Frequency counting with first-occurrence ordering.
//!
//! [`FrequencyTable`] maps each distinct n-gram to its occurrence count
//! while explicitly tracking the order in which distinct keys first
//! appeared. That order is load-bearing: the reporter uses it to break
//! count ties, so two runs over the same input always rank equal-count
//! n-grams identically.

use ahash::AHashMap;

use crate::ngram::NGram;

/// Occurrence counts per distinct n-gram, iterable in first-occurrence order.
///
/// The hash map alone would lose arrival order, so distinct keys are also
/// kept in an insertion-order vector.
#[derive(Clone, Debug, Default)]
pub struct FrequencyTable {
    counts: AHashMap<NGram, usize>,
    order: Vec<NGram>,
    total: usize,
}

impl FrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every n-gram produced by an iterator.
    pub fn count_ngrams<I>(ngrams: I) -> Self
    where
        I: IntoIterator<Item = NGram>,
    {
        let mut table = Self::new();
        for gram in ngrams {
            table.add(gram);
        }
        table
    }

    /// Record one occurrence of an n-gram.
    pub fn add(&mut self, gram: NGram) {
        self.add_count(gram, 1);
    }

    fn add_count(&mut self, gram: NGram, count: usize) {
        self.total += count;
        match self.counts.get_mut(&gram) {
            Some(existing) => *existing += count,
            None => {
                self.order.push(gram.clone());
                self.counts.insert(gram, count);
            }
        }
    }

    /// Fold another table into this one.
    ///
    /// Keys new to this table are appended after its existing keys, in the
    /// other table's order, so merging per-document tables in document
    /// order reproduces the first-occurrence order of a sequential run.
    pub fn merge(&mut self, other: FrequencyTable) {
        for gram in other.order {
            let count = other.counts[&gram];
            self.add_count(gram, count);
        }
    }

    /// The count recorded for an n-gram (zero if absent).
    pub fn get(&self, gram: &NGram) -> usize {
        self.counts.get(gram).copied().unwrap_or(0)
    }

    /// Number of distinct n-grams.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if no n-grams were counted.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Total number of occurrences counted (the sum of all counts).
    pub fn total(&self) -> usize {
        self.total
    }

    /// Iterate over `(ngram, count)` in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&NGram, usize)> {
        self.order.iter().map(|gram| (gram, self.counts[gram]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ngram::ngrams;

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|s| s.to_string()).collect()
    }

    fn gram(words: &[&str]) -> NGram {
        words.iter().copied().collect()
    }

    #[test]
    fn test_counting() {
        let tokens = toks(&["le", "chat", "noir", "le", "chat", "noir", "dort"]);
        let table = FrequencyTable::count_ngrams(ngrams(&tokens, 2).unwrap());

        assert_eq!(table.get(&gram(&["le", "chat"])), 2);
        assert_eq!(table.get(&gram(&["chat", "noir"])), 2);
        assert_eq!(table.get(&gram(&["noir", "le"])), 1);
        assert_eq!(table.get(&gram(&["noir", "dort"])), 1);
        assert_eq!(table.get(&gram(&["dort", "le"])), 0);
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_first_occurrence_order() {
        let tokens = toks(&["b", "a", "b", "c", "a"]);
        let table = FrequencyTable::count_ngrams(ngrams(&tokens, 1).unwrap());

        let keys: Vec<String> = table.iter().map(|(g, _)| g.to_string()).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_total_equals_ngram_count() {
        let tokens = toks(&["le", "chat", "noir", "le", "chat", "noir", "dort"]);
        let generated = ngrams(&tokens, 2).unwrap().count();
        let table = FrequencyTable::count_ngrams(ngrams(&tokens, 2).unwrap());

        assert_eq!(table.total(), generated);
        assert_eq!(table.total(), table.iter().map(|(_, c)| c).sum::<usize>());
    }

    #[test]
    fn test_empty() {
        let table = FrequencyTable::new();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert_eq!(table.total(), 0);
    }

    #[test]
    fn test_merge_preserves_order() {
        let mut first = FrequencyTable::count_ngrams(
            ngrams(&toks(&["chat", "noir"]), 1).unwrap(),
        );
        let second = FrequencyTable::count_ngrams(
            ngrams(&toks(&["noir", "dort"]), 1).unwrap(),
        );

        first.merge(second);

        let keys: Vec<String> = first.iter().map(|(g, _)| g.to_string()).collect();
        assert_eq!(keys, vec!["chat", "noir", "dort"]);
        assert_eq!(first.get(&gram(&["noir"])), 2);
        assert_eq!(first.total(), 4);
    }
}
