// File analyzer: counts lines and words in a text file and writes a short
// report to an output file. Independent of the booking registry.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use thiserror::Error;

// Error types for file analysis
#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("input file not found or not a regular file: {0}")]
    InputNotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FileSummary {
    pub lines: usize,
    pub words: usize,
}

/// Counts lines and words in the input file and writes the summary report to
/// the output file. A word is a maximal run of non-whitespace characters.
pub trait FileAnalyzer {
    fn count_lines_and_words(
        &self,
        input: &Path,
        output: &Path,
    ) -> Result<FileSummary, AnalyzerError>;
}

fn check_input(path: &Path) -> Result<(), AnalyzerError> {
    if !path.is_file() {
        return Err(AnalyzerError::InputNotFound(path.display().to_string()));
    }
    Ok(())
}

fn write_report(path: &Path, summary: FileSummary) -> Result<(), AnalyzerError> {
    let mut out = File::create(path)?;
    writeln!(out, "Total lines: {}", summary.lines)?;
    writeln!(out, "Total words: {}", summary.words)?;
    Ok(())
}

/// Reads the input one buffered line at a time; memory use is bounded by the
/// longest line.
pub struct StreamingAnalyzer;

impl FileAnalyzer for StreamingAnalyzer {
    fn count_lines_and_words(
        &self,
        input: &Path,
        output: &Path,
    ) -> Result<FileSummary, AnalyzerError> {
        check_input(input)?;

        let reader = BufReader::new(File::open(input)?);
        let mut summary = FileSummary::default();

        for line in reader.lines() {
            let line = line?;
            summary.lines += 1;
            summary.words += line.split_whitespace().count();
        }

        write_report(output, summary)?;
        tracing::debug!(lines = summary.lines, words = summary.words, "report written");

        Ok(summary)
    }
}

/// Reads the whole input into memory before counting.
pub struct EagerAnalyzer;

impl FileAnalyzer for EagerAnalyzer {
    fn count_lines_and_words(
        &self,
        input: &Path,
        output: &Path,
    ) -> Result<FileSummary, AnalyzerError> {
        check_input(input)?;

        let content = fs::read_to_string(input)?;
        let summary = FileSummary {
            lines: content.lines().count(),
            words: content
                .lines()
                .map(|line| line.split_whitespace().count())
                .sum(),
        };

        write_report(output, summary)?;
        tracing::debug!(lines = summary.lines, words = summary.words, "report written");

        Ok(summary)
    }
}
