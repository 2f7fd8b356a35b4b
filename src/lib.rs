//! # Apercu
//!
//! Ranked n-gram frequency insights for French text.
//!
//! ## Features
//!
//! - Deterministic normalization of messy exports (case, broken accents,
//!   punctuation, digits, whitespace)
//! - Pluggable tokenization: lexical splitters or an injected
//!   linguistic-model tagger
//! - French stopword filtering with custom list support
//! - Sliding-window n-gram generation
//! - Frequency counting with first-occurrence tie-breaking
//! - Top-k reports renderable as text, rows, or JSON
//!
//! ## Quick start
//!
//! ```
//! use apercu::pipeline::{InsightPipeline, PipelineConfig};
//!
//! let pipeline = InsightPipeline::french(PipelineConfig::default()).unwrap();
//! let corpus = vec!["Le chat noir dort, le chat noir rêve.".to_string()];
//!
//! let report = pipeline.run(&corpus).unwrap();
//! println!("{report}");
//! ```

pub mod analysis;
pub mod cli;
pub mod error;
pub mod frequency;
pub mod ngram;
pub mod pipeline;
pub mod report;

pub mod prelude {
    //! Commonly used types, importable in one line.

    pub use crate::analysis::analyzer::{Analyzer, FrenchAnalyzer, PipelineAnalyzer};
    pub use crate::error::{ApercuError, Result};
    pub use crate::frequency::FrequencyTable;
    pub use crate::ngram::{NGram, ngrams};
    pub use crate::pipeline::{InsightPipeline, PipelineConfig};
    pub use crate::report::InsightReport;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
