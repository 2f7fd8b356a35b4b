//! Top-k insight reporting.
//!
//! [`InsightReport`] selects the most frequent n-grams from a
//! [`FrequencyTable`] and renders them for downstream consumers: a
//! formatted text block, `[ngram_text, count]` rows for tabular exporters,
//! or the entries themselves for chart renderers.
//!
//! # Examples
//!
//! ```
//! use apercu::frequency::FrequencyTable;
//! use apercu::ngram::ngrams;
//! use apercu::report::InsightReport;
//!
//! let tokens: Vec<String> = ["le", "chat", "le", "chat", "dort"]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//!
//! let table = FrequencyTable::count_ngrams(ngrams(&tokens, 2).unwrap());
//! let report = InsightReport::from_table(&table, 2).unwrap();
//!
//! assert_eq!(report.entries()[0].0.to_string(), "le chat");
//! assert_eq!(report.entries()[0].1, 2);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ApercuError, Result};
use crate::frequency::FrequencyTable;
use crate::ngram::NGram;

/// Ranked `(ngram, count)` entries, count-descending, ties broken by
/// first occurrence in the source.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InsightReport {
    /// The n-gram length this report was built over
    ngram_size: usize,
    /// The requested number of entries
    top_n: usize,
    /// Ranked entries, at most `top_n` of them
    entries: Vec<(NGram, usize)>,
}

impl InsightReport {
    /// Build the top-`top_n` report from a frequency table.
    ///
    /// Returns `InvalidParameter` if `top_n == 0` and `EmptyInput` if the
    /// table contains no n-grams: a report with nothing to say is an error,
    /// not an empty artifact. Fewer than `top_n` distinct n-grams is fine;
    /// the report is simply shorter.
    pub fn from_table(table: &FrequencyTable, top_n: usize) -> Result<Self> {
        if top_n == 0 {
            return Err(ApercuError::invalid_parameter("top_n must be at least 1"));
        }
        if table.is_empty() {
            return Err(ApercuError::empty_input(
                "no n-grams to report: corpus was empty or fully filtered",
            ));
        }

        let mut entries: Vec<(NGram, usize)> =
            table.iter().map(|(g, c)| (g.clone(), c)).collect();

        // Stable sort over the first-occurrence order: equal counts keep
        // their earlier-first ranking.
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(top_n);

        let ngram_size = entries[0].0.len();

        Ok(InsightReport {
            ngram_size,
            top_n,
            entries,
        })
    }

    /// The n-gram length this report covers.
    pub fn ngram_size(&self) -> usize {
        self.ngram_size
    }

    /// The requested number of entries.
    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// The ranked entries, most frequent first.
    pub fn entries(&self) -> &[(NGram, usize)] {
        &self.entries
    }

    /// Export as `[ngram_text, count]` rows for tabular sinks.
    pub fn to_rows(&self) -> Vec<(String, usize)> {
        self.entries
            .iter()
            .map(|(gram, count)| (gram.to_string(), *count))
            .collect()
    }
}

impl fmt::Display for InsightReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Top {} {}-grams:", self.top_n, self.ngram_size)?;
        for (gram, count) in &self.entries {
            write!(f, "\n{gram}: {count}")?;
        }
        Ok(())
    }
}
