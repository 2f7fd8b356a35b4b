//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{ApercuArgs, OutputFormat};
use crate::error::Result;
use crate::frequency::FrequencyTable;
use crate::report::InsightReport;

/// One ranked row of a report.
#[derive(Debug, Serialize, Deserialize)]
pub struct ReportRow {
    pub ngram: String,
    pub count: usize,
}

/// Result structure for the analyze command.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeResult {
    pub ngram_size: usize,
    pub top_n: usize,
    pub documents: usize,
    pub total_ngrams: usize,
    pub distinct_ngrams: usize,
    pub entries: Vec<ReportRow>,
}

/// Result structure for the words command.
#[derive(Debug, Serialize, Deserialize)]
pub struct WordsResult {
    pub documents: usize,
    pub total_words: usize,
    pub distinct_words: usize,
    pub entries: Vec<ReportRow>,
}

impl AnalyzeResult {
    pub fn new(
        report: &InsightReport,
        table: &FrequencyTable,
        documents: usize,
    ) -> Self {
        AnalyzeResult {
            ngram_size: report.ngram_size(),
            top_n: report.top_n(),
            documents,
            total_ngrams: table.total(),
            distinct_ngrams: table.len(),
            entries: rows(report),
        }
    }
}

impl WordsResult {
    pub fn new(report: &InsightReport, table: &FrequencyTable, documents: usize) -> Self {
        WordsResult {
            documents,
            total_words: table.total(),
            distinct_words: table.len(),
            entries: rows(report),
        }
    }
}

fn rows(report: &InsightReport) -> Vec<ReportRow> {
    report
        .to_rows()
        .into_iter()
        .map(|(ngram, count)| ReportRow { ngram, count })
        .collect()
}

/// Output a serializable result in the selected format.
///
/// `human` is the caller-provided rendering; JSON and CSV are derived from
/// the structure itself.
pub fn output_result<T: Serialize>(
    human: &str,
    result: &T,
    entries: &[ReportRow],
    args: &ApercuArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            println!("{human}");
        }
        OutputFormat::Json => {
            let json = if args.pretty {
                serde_json::to_string_pretty(result)?
            } else {
                serde_json::to_string(result)?
            };
            println!("{json}");
        }
        OutputFormat::Csv => {
            println!("ngram,count");
            for row in entries {
                println!("{},{}", csv_field(&row.ngram), row.count);
            }
        }
    }
    Ok(())
}

/// Quote a CSV field when it contains a separator or quote.
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_field_plain() {
        assert_eq!(csv_field("le chat"), "le chat");
    }

    #[test]
    fn test_csv_field_quoted() {
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("a\"b"), "\"a\"\"b\"");
    }
}
