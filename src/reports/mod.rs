//! Report generation for scoring results.
//!
//! This module provides multiple output formats for a [`ScoringReport`]:
//! - Summary: Compact shell-friendly output
//! - Table: Aligned tabular terminal output with the full ranking
//! - JSON: Structured data for programmatic integration
//! - CSV: The ranked reviews for spreadsheet import
//! - Markdown: Human-readable documentation
//!
//! Reviewer names and summaries are untrusted input; reporters embedding
//! them in Markdown go through the [`escape`] helpers.

mod csv;
pub mod escape;
mod json;
mod markdown;
mod summary;
mod types;

pub use csv::CsvReporter;
pub use json::JsonReporter;
pub use markdown::MarkdownReporter;
pub use summary::{SummaryReporter, TableReporter};
pub use types::{ReportConfig, ReportFormat, ReportMetadata, ScoringReport};

use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render a scoring report
    fn generate(&self, report: &ScoringReport, config: &ReportConfig)
        -> Result<String, ReportError>;

    /// Write report to a writer
    fn write_report(
        &self,
        report: &ScoringReport,
        config: &ReportConfig,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let rendered = self.generate(report, config)?;
        writer.write_all(rendered.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator with color control
#[must_use]
pub fn create_reporter_with_options(
    format: ReportFormat,
    use_color: bool,
) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
        ReportFormat::Table => {
            if use_color {
                Box::new(TableReporter::new())
            } else {
                Box::new(TableReporter::new().no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Csv => Box::new(CsvReporter::new()),
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
    }
}
