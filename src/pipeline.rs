//! Corpus-level insight pipeline.
//!
//! Ties the stages together: each document goes through the analyzer, the
//! retained token texts feed n-gram generation, per-document counts are
//! merged in document order, and the merged table is ranked into an
//! [`InsightReport`].
//!
//! Documents are independent, so the per-document work can fan out over a
//! rayon pool. The merge step always runs in document order, which makes
//! the parallel run byte-for-byte identical to the sequential one.
//!
//! # Examples
//!
//! ```
//! use apercu::pipeline::{InsightPipeline, PipelineConfig};
//!
//! let pipeline = InsightPipeline::french(PipelineConfig::default()).unwrap();
//! let corpus = vec![
//!     "Le chat noir dort.".to_string(),
//!     "Le chat noir mange.".to_string(),
//! ];
//!
//! let report = pipeline.run(&corpus).unwrap();
//! assert_eq!(report.entries()[0].0.to_string(), "chat noir");
//! ```

use std::sync::Arc;

use log::debug;
use rayon::prelude::*;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::french::FrenchAnalyzer;
use crate::error::{ApercuError, Result};
use crate::frequency::FrequencyTable;
use crate::ngram::ngrams;
use crate::report::InsightReport;

/// Pipeline parameters.
#[derive(Clone, Copy, Debug)]
pub struct PipelineConfig {
    /// Window size for n-gram generation (must be ≥ 1)
    pub ngram_size: usize,
    /// Number of entries to report (must be ≥ 1)
    pub top_n: usize,
    /// Process documents on the rayon pool
    pub parallel: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            ngram_size: 2,
            top_n: 10,
            parallel: false,
        }
    }
}

/// The full normalization → tokenization → n-gram → count → report pipeline.
///
/// Holds no per-run state: every invocation builds its own tables, so one
/// pipeline can serve many corpora (or threads) safely.
pub struct InsightPipeline {
    analyzer: Arc<dyn Analyzer>,
    config: PipelineConfig,
}

impl InsightPipeline {
    /// Create a pipeline around an analyzer.
    ///
    /// Parameters are validated here so a misconfigured run fails before
    /// touching any document.
    pub fn new(analyzer: Arc<dyn Analyzer>, config: PipelineConfig) -> Result<Self> {
        if config.ngram_size == 0 {
            return Err(ApercuError::invalid_parameter("ngram_size must be at least 1"));
        }
        if config.top_n == 0 {
            return Err(ApercuError::invalid_parameter("top_n must be at least 1"));
        }
        Ok(InsightPipeline { analyzer, config })
    }

    /// Create a pipeline with the default French analyzer.
    pub fn french(config: PipelineConfig) -> Result<Self> {
        Self::new(Arc::new(FrenchAnalyzer::new()?), config)
    }

    /// The configuration this pipeline runs with.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Analyze one document into its retained token texts, in source order.
    pub fn tokens(&self, document: &str) -> Result<Vec<String>> {
        Ok(self.analyzer.analyze(document)?.map(|t| t.text).collect())
    }

    fn document_table(&self, document: &str, n: usize) -> Result<FrequencyTable> {
        let tokens = self.tokens(document)?;
        Ok(FrequencyTable::count_ngrams(ngrams(&tokens, n)?))
    }

    fn corpus_table(&self, corpus: &[String], n: usize) -> Result<FrequencyTable> {
        let tables: Vec<FrequencyTable> = if self.config.parallel {
            corpus
                .par_iter()
                .map(|doc| self.document_table(doc, n))
                .collect::<Result<_>>()?
        } else {
            corpus
                .iter()
                .map(|doc| self.document_table(doc, n))
                .collect::<Result<_>>()?
        };

        let mut merged = FrequencyTable::new();
        for table in tables {
            merged.merge(table);
        }

        debug!(
            "counted {} n-grams ({} distinct) across {} documents",
            merged.total(),
            merged.len(),
            corpus.len()
        );

        Ok(merged)
    }

    /// Count the configured n-grams over the whole corpus.
    pub fn frequency_table(&self, corpus: &[String]) -> Result<FrequencyTable> {
        self.corpus_table(corpus, self.config.ngram_size)
    }

    /// Count single retained words over the whole corpus.
    ///
    /// This is the table word-cloud and visualization consumers want: raw
    /// token text mapped to its count, stopwords and punctuation excluded.
    pub fn word_frequencies(&self, corpus: &[String]) -> Result<FrequencyTable> {
        self.corpus_table(corpus, 1)
    }

    /// Run the full pipeline and rank the result.
    pub fn run(&self, corpus: &[String]) -> Result<InsightReport> {
        let table = self.frequency_table(corpus)?;
        InsightReport::from_table(&table, self.config.top_n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(docs: &[&str]) -> Vec<String> {
        docs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_end_to_end() {
        let pipeline = InsightPipeline::french(PipelineConfig::default()).unwrap();
        let report = pipeline
            .run(&corpus(&["Le chat noir dort.", "Le chat noir mange."]))
            .unwrap();

        assert_eq!(report.entries()[0].0.to_string(), "chat noir");
        assert_eq!(report.entries()[0].1, 2);
    }

    #[test]
    fn test_invalid_parameters_rejected_up_front() {
        let config = PipelineConfig {
            ngram_size: 0,
            ..PipelineConfig::default()
        };
        assert!(InsightPipeline::french(config).is_err());

        let config = PipelineConfig {
            top_n: 0,
            ..PipelineConfig::default()
        };
        assert!(InsightPipeline::french(config).is_err());
    }

    #[test]
    fn test_empty_corpus_is_empty_input() {
        let pipeline = InsightPipeline::french(PipelineConfig::default()).unwrap();
        let result = pipeline.run(&[]);
        assert!(matches!(result, Err(ApercuError::EmptyInput(_))));
    }

    #[test]
    fn test_fully_filtered_corpus_is_empty_input() {
        let pipeline = InsightPipeline::french(PipelineConfig::default()).unwrap();
        // Stopwords and digits only: nothing survives analysis.
        let result = pipeline.run(&corpus(&["le la les 42", "et ou 7"]));
        assert!(matches!(result, Err(ApercuError::EmptyInput(_))));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let docs = corpus(&[
            "Le chat noir dort sur le toit.",
            "Un chien blanc mange une pomme rouge.",
            "Le chat noir mange la pomme.",
            "Le toit rouge du chien blanc.",
        ]);

        let sequential = InsightPipeline::french(PipelineConfig {
            parallel: false,
            ..PipelineConfig::default()
        })
        .unwrap()
        .run(&docs)
        .unwrap();

        let parallel = InsightPipeline::french(PipelineConfig {
            parallel: true,
            ..PipelineConfig::default()
        })
        .unwrap()
        .run(&docs)
        .unwrap();

        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_ngrams_never_cross_documents() {
        let pipeline = InsightPipeline::french(PipelineConfig::default()).unwrap();
        let table = pipeline
            .frequency_table(&corpus(&["chat noir", "souris grise"]))
            .unwrap();

        let crossing: crate::ngram::NGram = ["noir", "souris"].into_iter().collect();
        assert_eq!(table.get(&crossing), 0);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_word_frequencies() {
        let pipeline = InsightPipeline::french(PipelineConfig::default()).unwrap();
        let table = pipeline
            .word_frequencies(&corpus(&["Le chat et le chat."]))
            .unwrap();

        let chat: crate::ngram::NGram = ["chat"].into_iter().collect();
        assert_eq!(table.get(&chat), 2);
    }
}
