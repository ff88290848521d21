//! JSON report generator.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator, ScoringReport};
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Whether to only include the product score and vote totals
    summary_only: bool,
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self {
            summary_only: false,
            pretty: true,
        }
    }

    /// Create a summary-only reporter
    #[must_use]
    pub const fn summary_only() -> Self {
        Self {
            summary_only: true,
            pretty: true,
        }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn to_json<T: Serialize>(&self, value: &T) -> Result<String, ReportError> {
        let out = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        out.map_err(|e| ReportError::SerializationError(e.to_string()))
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct JsonSummary<'a> {
    metadata: &'a super::ReportMetadata,
    selection: &'a crate::scoring::ProductSelection,
    simple_avg_score: f64,
    weighted_avg_score: f64,
    empty_buckets: &'a [usize],
    votes: &'a crate::model::VoteTotals,
}

impl ReportGenerator for JsonReporter {
    fn generate(
        &self,
        report: &ScoringReport,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        if self.summary_only {
            return self.to_json(&JsonSummary {
                metadata: &report.metadata,
                selection: &report.selection,
                simple_avg_score: report.product_score.simple_avg_score,
                weighted_avg_score: report.product_score.weighted_avg_score,
                empty_buckets: &report.product_score.empty_buckets,
                votes: &report.votes,
            });
        }

        let limit = config.row_limit(report.ranking.rows.len());
        if limit == report.ranking.rows.len() {
            return self.to_json(report);
        }

        let mut trimmed = report.clone();
        trimmed.ranking.rows.truncate(limit);
        self.to_json(&trimmed)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::test_support::sample_report;

    #[test]
    fn test_full_report_structure() {
        let report = sample_report();
        let out = JsonReporter::new()
            .generate(&report, &ReportConfig::default())
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["selection"]["product_id"], "B00TEST");
        assert_eq!(value["product_score"]["review_count"], 4);
        assert_eq!(value["votes"]["total_vote"], 16);
        assert_eq!(value["ranking"]["rows"].as_array().unwrap().len(), 4);
        assert_eq!(value["ranking"]["sort_by"], "wilson");
        assert_eq!(value["product_score"]["empty_bucket_policy"], "renormalize");
        assert_eq!(value["ranking"]["rows"][0]["rank"], 1);
    }

    #[test]
    fn test_row_limit_applied() {
        let report = sample_report();
        let config = ReportConfig {
            max_rows: Some(2),
            ..Default::default()
        };
        let out = JsonReporter::new().pretty(false).generate(&report, &config).unwrap();
        assert!(!out.contains('\n'));
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["ranking"]["rows"].as_array().unwrap().len(), 2);
        assert_eq!(value["ranking"]["total_candidates"], 4);
    }

    #[test]
    fn test_summary_only() {
        let out = JsonReporter::summary_only()
            .generate(&sample_report(), &ReportConfig::default())
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(value.get("ranking").is_none());
        assert!(value["weighted_avg_score"].as_f64().unwrap() > 0.0);
    }
}
