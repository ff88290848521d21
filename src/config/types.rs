//! Configuration types for review-scorer runs.
//!
//! Every tunable constant of a scoring run lives here so it can be set from
//! a config file or the command line instead of being hard-coded.

use super::defaults;
use crate::reports::ReportFormat;
use crate::scoring::{EmptyBucketPolicy, RankingKey};
use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// File values are loaded first and CLI flags are layered on top with
/// [`AppConfig::apply_overrides`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// How to read the input file
    pub dataset: DatasetConfig,
    /// Product selection and recency weighting
    pub scoring: ScoringConfig,
    /// Helpfulness ranking
    pub ranking: RankingConfig,
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the "now" anchor for recency weighting.
    pub const fn reference_date(mut self, date: NaiveDate) -> Self {
        self.config.scoring.reference_date = date;
        self
    }

    /// Set the four recency bucket weights, most recent first.
    pub const fn bucket_weights(mut self, weights: [f64; 4]) -> Self {
        self.config.scoring.bucket_weights = weights;
        self
    }

    /// Set how empty recency buckets are handled.
    pub const fn empty_buckets(mut self, policy: EmptyBucketPolicy) -> Self {
        self.config.scoring.empty_buckets = policy;
        self
    }

    /// Score an explicit product instead of the most reviewed one.
    pub fn product(mut self, product: impl Into<String>) -> Self {
        self.config.scoring.product = Some(product.into());
        self
    }

    /// Set the Wilson confidence level.
    pub const fn confidence(mut self, confidence: f64) -> Self {
        self.config.ranking.confidence = confidence;
        self
    }

    /// Set the display cutoff.
    pub const fn top_n(mut self, top_n: usize) -> Self {
        self.config.ranking.top_n = top_n;
        self
    }

    /// Set the ranking key.
    pub const fn sort_by(mut self, key: RankingKey) -> Self {
        self.config.ranking.sort_by = key;
        self
    }

    /// Set the input delimiter.
    pub const fn delimiter(mut self, delimiter: char) -> Self {
        self.config.dataset.delimiter = delimiter;
        self
    }

    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Disable colored output.
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Section configs
// ============================================================================

/// Column mapping and parsing options for the input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DatasetConfig {
    /// Field delimiter (single ASCII character)
    pub delimiter: char,
    /// Header of the product identifier column
    pub product_column: String,
    /// Header of the star rating column
    pub rating_column: String,
    /// Header of the review date column
    pub date_column: String,
    /// Header of the packed helpfulness vote column
    pub helpful_column: String,
    /// Optional header of a reviewer name column
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewer_column: Option<String>,
    /// Optional header of a review summary column
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_column: Option<String>,
    /// Explicit `chrono` date format; day-first formats are tried when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_format: Option<String>,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            product_column: defaults::DEFAULT_PRODUCT_COLUMN.to_string(),
            rating_column: defaults::DEFAULT_RATING_COLUMN.to_string(),
            date_column: defaults::DEFAULT_DATE_COLUMN.to_string(),
            helpful_column: defaults::DEFAULT_HELPFUL_COLUMN.to_string(),
            reviewer_column: Some(defaults::DEFAULT_REVIEWER_COLUMN.to_string()),
            summary_column: Some(defaults::DEFAULT_SUMMARY_COLUMN.to_string()),
            date_format: None,
        }
    }
}

/// Product selection and recency-weighted scoring options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ScoringConfig {
    /// Fixed "now" for the dataset snapshot (YYYY-MM-DD)
    #[schemars(with = "String")]
    pub reference_date: NaiveDate,
    /// Weights of the four recency buckets, most recent first; must sum to 1
    pub bucket_weights: [f64; 4],
    /// What to do when a recency bucket has no reviews
    pub empty_buckets: EmptyBucketPolicy,
    /// Score this product instead of the most reviewed one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            reference_date: defaults::default_reference_date(),
            bucket_weights: defaults::DEFAULT_BUCKET_WEIGHTS,
            empty_buckets: EmptyBucketPolicy::default(),
            product: None,
        }
    }
}

/// Helpfulness ranking options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct RankingConfig {
    /// Confidence level of the Wilson interval, in (0, 1)
    pub confidence: f64,
    /// Number of reviews to keep for display
    pub top_n: usize,
    /// Column the ranking is sorted by
    pub sort_by: RankingKey,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            confidence: defaults::DEFAULT_CONFIDENCE,
            top_n: defaults::DEFAULT_TOP_N,
            sort_by: RankingKey::default(),
        }
    }
}

/// Output-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
    /// Report title (a generic one when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

// ============================================================================
// CLI overrides
// ============================================================================

/// Values given on the command line; `None` leaves the file/default value.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub product: Option<String>,
    pub reference_date: Option<NaiveDate>,
    pub bucket_weights: Option<[f64; 4]>,
    pub empty_buckets: Option<EmptyBucketPolicy>,
    pub confidence: Option<f64>,
    pub top_n: Option<usize>,
    pub sort_by: Option<RankingKey>,
    pub delimiter: Option<char>,
    pub date_format: Option<String>,
    pub format: Option<ReportFormat>,
    pub output_file: Option<PathBuf>,
    pub no_color: bool,
}
