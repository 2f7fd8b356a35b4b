//! Command implementations for the apercu CLI.

use std::collections::HashSet;
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use log::info;

use crate::analysis::analyzer::french::FrenchAnalyzer;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::pipeline::{InsightPipeline, PipelineConfig};
use crate::report::InsightReport;

/// Execute a CLI command.
pub fn execute_command(args: ApercuArgs) -> Result<()> {
    match &args.command {
        Command::Analyze(analyze_args) => analyze(analyze_args.clone(), &args),
        Command::Words(words_args) => words(words_args.clone(), &args),
    }
}

/// Report the most frequent n-grams of the corpus.
fn analyze(args: AnalyzeArgs, cli_args: &ApercuArgs) -> Result<()> {
    let corpus = read_corpus(&args.corpus.files)?;
    let pipeline = build_pipeline(&args.corpus, args.ngram_size, args.top_n)?;

    info!(
        "analyzing {} documents (n={}, top_n={})",
        corpus.len(),
        args.ngram_size,
        args.top_n
    );

    let table = pipeline.frequency_table(&corpus)?;
    let report = InsightReport::from_table(&table, args.top_n)?;

    let result = AnalyzeResult::new(&report, &table, corpus.len());
    output_result(&report.to_string(), &result, &result.entries, cli_args)
}

/// Report word frequencies over the filtered token stream.
fn words(args: WordsArgs, cli_args: &ApercuArgs) -> Result<()> {
    let corpus = read_corpus(&args.corpus.files)?;
    let pipeline = build_pipeline(&args.corpus, 1, args.top_n)?;

    info!("counting words across {} documents", corpus.len());

    let table = pipeline.word_frequencies(&corpus)?;
    let report = InsightReport::from_table(&table, args.top_n)?;

    let result = WordsResult::new(&report, &table, corpus.len());
    output_result(&report.to_string(), &result, &result.entries, cli_args)
}

/// Build the pipeline described by the corpus-level flags.
fn build_pipeline(
    corpus_args: &CorpusArgs,
    ngram_size: usize,
    top_n: usize,
) -> Result<InsightPipeline> {
    let analyzer = if corpus_args.keep_stopwords {
        FrenchAnalyzer::with_stop_words(HashSet::new())?
    } else if let Some(path) = &corpus_args.stopwords {
        FrenchAnalyzer::with_stop_words(load_stopwords(path)?)?
    } else {
        FrenchAnalyzer::new()?
    };

    let config = PipelineConfig {
        ngram_size,
        top_n,
        parallel: !corpus_args.sequential,
    };

    InsightPipeline::new(Arc::new(analyzer), config)
}

/// Read the corpus: one document per non-empty line, from files or stdin.
fn read_corpus(files: &[PathBuf]) -> Result<Vec<String>> {
    let mut corpus = Vec::new();

    if files.is_empty() {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        collect_documents(&buffer, &mut corpus);
    } else {
        for path in files {
            let content = fs::read_to_string(path)?;
            collect_documents(&content, &mut corpus);
        }
    }

    Ok(corpus)
}

fn collect_documents(content: &str, corpus: &mut Vec<String>) {
    for line in content.lines() {
        let line = line.trim();
        if !line.is_empty() {
            corpus.push(line.to_string());
        }
    }
}

/// Load a newline-delimited stopword file.
fn load_stopwords(path: &PathBuf) -> Result<HashSet<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect())
}
