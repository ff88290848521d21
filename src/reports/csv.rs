//! CSV report generator.
//!
//! Emits the ranked reviews as one header row plus one row per review,
//! suitable for spreadsheet import and data analysis pipelines.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator, ScoringReport};

const HEADER: [&str; 13] = [
    "rank",
    "row",
    "product_id",
    "rating",
    "reviewer",
    "summary",
    "helpful_yes",
    "helpful_no",
    "total_vote",
    "score_pos_neg_diff",
    "score_average_rating",
    "wilson_lower_bound",
    "weighted_avg_score",
];

/// CSV report generator.
pub struct CsvReporter {
    delimiter: u8,
}

impl CsvReporter {
    pub const fn new() -> Self {
        Self { delimiter: b',' }
    }

    /// Use a different field delimiter
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

impl Default for CsvReporter {
    fn default() -> Self {
        Self::new()
    }
}

fn csv_error(err: ::csv::Error) -> ReportError {
    ReportError::SerializationError(err.to_string())
}

impl ReportGenerator for CsvReporter {
    fn generate(
        &self,
        report: &ScoringReport,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut writer = ::csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_writer(Vec::new());
        writer.write_record(HEADER).map_err(csv_error)?;

        let product_id = report.selection.product_id.as_str();
        let weighted = format!("{:.6}", report.product_score.weighted_avg_score);
        let limit = config.row_limit(report.ranking.rows.len());

        for row in report.ranking.rows.iter().take(limit) {
            writer
                .write_record([
                    row.rank.to_string().as_str(),
                    row.row.to_string().as_str(),
                    product_id,
                    row.rating.to_string().as_str(),
                    row.reviewer.as_deref().unwrap_or(""),
                    row.summary.as_deref().unwrap_or(""),
                    row.helpful_yes.to_string().as_str(),
                    row.helpful_no.to_string().as_str(),
                    row.total_vote.to_string().as_str(),
                    row.score_pos_neg_diff.to_string().as_str(),
                    format!("{:.6}", row.score_average_rating).as_str(),
                    format!("{:.6}", row.wilson_lower_bound).as_str(),
                    weighted.as_str(),
                ])
                .map_err(csv_error)?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| ReportError::IoError(e.into_error()))?;
        String::from_utf8(bytes).map_err(|e| ReportError::SerializationError(e.to_string()))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Csv
    }
}
