//! Command line argument parsing for the apercu CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Apercu - ranked n-gram frequency insights for French text
#[derive(Parser, Debug, Clone)]
#[command(name = "apercu")]
#[command(about = "Ranked n-gram frequency insights for French text")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct ApercuArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl ApercuArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Report the most frequent n-grams of a corpus
    Analyze(AnalyzeArgs),

    /// Report word frequencies (for word clouds and charts)
    Words(WordsArgs),
}

/// Arguments shared by corpus-reading commands
#[derive(Parser, Debug, Clone)]
pub struct CorpusArgs {
    /// Input text files, one document per line (stdin when omitted)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Custom stopword file, one word per line
    #[arg(long, value_name = "STOPWORD_FILE")]
    pub stopwords: Option<PathBuf>,

    /// Do not filter stopwords at all
    #[arg(long)]
    pub keep_stopwords: bool,

    /// Process documents sequentially instead of on the thread pool
    #[arg(long)]
    pub sequential: bool,
}

/// Arguments for the analyze command
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// N-gram window size
    #[arg(short = 'n', long, default_value = "2", value_name = "N")]
    pub ngram_size: usize,

    /// Number of entries to report
    #[arg(short = 't', long = "top", default_value = "10", value_name = "TOP_N")]
    pub top_n: usize,
}

/// Arguments for the words command
#[derive(Parser, Debug, Clone)]
pub struct WordsArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Number of words to report
    #[arg(short = 't', long = "top", default_value = "50", value_name = "TOP_N")]
    pub top_n: usize,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Human,
    /// JSON
    Json,
    /// CSV rows (`ngram,count`)
    Csv,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_default() {
        let args = ApercuArgs::parse_from(["apercu", "analyze"]);
        assert_eq!(args.verbosity(), 1);
    }

    #[test]
    fn test_verbosity_quiet_wins() {
        let args = ApercuArgs::parse_from(["apercu", "-q", "-vv", "analyze"]);
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_analyze_defaults() {
        let args = ApercuArgs::parse_from(["apercu", "analyze", "corpus.txt"]);
        match args.command {
            Command::Analyze(a) => {
                assert_eq!(a.ngram_size, 2);
                assert_eq!(a.top_n, 10);
                assert_eq!(a.corpus.files.len(), 1);
                assert!(!a.corpus.keep_stopwords);
            }
            _ => panic!("expected analyze command"),
        }
    }

    #[test]
    fn test_analyze_options() {
        let args = ApercuArgs::parse_from([
            "apercu", "-f", "json", "analyze", "-n", "3", "--top", "5", "a.txt", "b.txt",
        ]);
        assert_eq!(args.output_format, OutputFormat::Json);
        match args.command {
            Command::Analyze(a) => {
                assert_eq!(a.ngram_size, 3);
                assert_eq!(a.top_n, 5);
                assert_eq!(a.corpus.files.len(), 2);
            }
            _ => panic!("expected analyze command"),
        }
    }
}
