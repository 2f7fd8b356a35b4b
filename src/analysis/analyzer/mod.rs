//! Analyzer implementations that combine char filters, tokenizers, and token filters.

pub mod analyzer;
pub mod french;
pub mod pipeline;

pub use analyzer::Analyzer;
pub use french::FrenchAnalyzer;
pub use pipeline::PipelineAnalyzer;
