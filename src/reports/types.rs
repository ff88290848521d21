//! Report type definitions.

use crate::model::VoteTotals;
use crate::scoring::{ProductScore, ProductSelection, Ranking};
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ReportFormat {
    /// Brief summary output
    #[default]
    Summary,
    /// Compact table for terminal (colored)
    Table,
    /// Structured JSON output
    Json,
    /// CSV of the ranked reviews for spreadsheet import
    Csv,
    /// Human-readable Markdown
    Markdown,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Summary => write!(f, "summary"),
            ReportFormat::Table => write!(f, "table"),
            ReportFormat::Json => write!(f, "json"),
            ReportFormat::Csv => write!(f, "csv"),
            ReportFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// Configuration for report generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Title for the report
    pub title: Option<String>,
    /// Include the per-bucket breakdown of the product score
    pub include_buckets: bool,
    /// Maximum ranked rows to render (all when unset)
    pub max_rows: Option<usize>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: None,
            include_buckets: true,
            max_rows: None,
        }
    }
}

impl ReportConfig {
    /// Title, falling back to a generic one
    pub fn title_or_default(&self) -> &str {
        self.title.as_deref().unwrap_or("Review Score Report")
    }

    /// Number of ranked rows to render out of `available`
    pub fn row_limit(&self, available: usize) -> usize {
        self.max_rows.map_or(available, |m| m.min(available))
    }
}

/// Metadata included in reports
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Tool version
    pub tool_version: String,
    /// Generation timestamp (RFC 3339)
    pub generated_at: Option<String>,
    /// Dataset file path
    pub dataset_path: Option<String>,
    /// Rows in the dataset
    pub dataset_rows: usize,
}

impl ReportMetadata {
    pub fn new() -> Self {
        Self {
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Some(chrono::Utc::now().to_rfc3339()),
            ..Default::default()
        }
    }
}

/// Everything a run produces, in pipeline order.
#[derive(Debug, Clone, Serialize)]
pub struct ScoringReport {
    pub metadata: ReportMetadata,
    pub selection: ProductSelection,
    pub product_score: ProductScore,
    pub votes: VoteTotals,
    pub ranking: Ranking,
}
