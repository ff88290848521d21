//! **Recency-weighted product scoring and helpfulness ranking for review datasets.**
//!
//! `review-scorer` reads a table of product reviews, picks one product, and
//! produces two results for it:
//!
//! - a **product score**: the plain mean star rating, and a mean that weights
//!   recent reviews more heavily by splitting them into four age quartiles;
//! - a **review ranking**: the reviews ordered by the lower bound of the
//!   Wilson score interval on their helpful/unhelpful votes, cut to the top N.
//!
//! It powers both a command-line interface (`review-scorer`) and a Rust
//! library for programmatic use.
//!
//! ## Core Concepts & Modules
//!
//! - **[`parsers`]**: Loads a delimited review file into a [`Dataset`] and
//!   decodes the packed `[helpful, total]` vote field.
//! - **[`model`]**: Review rows, the per-product [`ProductSubset`] and the
//!   vote records derived from it.
//! - **[`scoring`]**: Product selection, the [`RecencyScorer`], the Wilson
//!   estimator and the [`HelpfulnessRanker`].
//! - **[`pipeline`]**: Runs the stages in order and tags failures with the
//!   stage that produced them.
//! - **[`reports`]**: Summary, table, JSON, CSV and Markdown output.
//! - **[`config`]**: Layered YAML/CLI configuration with validation.
//!
//! ## Getting Started
//!
//! ```no_run
//! use std::path::Path;
//! use review_scorer::{parse_dataset, run_pipeline, AppConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::default();
//!     let dataset = parse_dataset(Path::new("reviews.csv"), &config.dataset)?;
//!     let report = run_pipeline(&dataset, &config)?;
//!
//!     println!(
//!         "{}: simple {:.3}, weighted {:.3}",
//!         report.selection.product_id,
//!         report.product_score.simple_avg_score,
//!         report.product_score.weighted_avg_score
//!     );
//!     for row in &report.ranking.rows {
//!         println!("#{} row {} wilson {:.4}", row.rank, row.row, row.wilson_lower_bound);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ### Scoring a single review
//!
//! ```
//! use review_scorer::scoring::wilson_lower_bound;
//!
//! let score = wilson_lower_bound(10, 0, 0.95).unwrap();
//! assert!(score > 0.72 && score < 0.73);
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
// Pedantic lints: allow categories that are design choices for this codebase
#![allow(
    // Count-to-float casts in the statistics code; counts stay far below 2^52
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::similar_names
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod parsers;
pub mod pipeline;
pub mod reports;
pub mod scoring;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigOverrides, OutputConfig};
pub use config::{ConfigError, Validatable};
pub use error::{ErrorContext, Result, ReviewScoreError};
pub use model::{Dataset, HelpfulVotes, ProductSubset, RankedReview, Review, VotedReview};
pub use parsers::{parse_dataset, parse_dataset_str, parse_vote_field};
pub use pipeline::{run_pipeline, PipelineError};
pub use reports::{ReportFormat, ReportGenerator, ScoringReport};
pub use scoring::{
    wilson_lower_bound, EmptyBucketPolicy, HelpfulnessRanker, ProductScore, Ranking, RankingKey,
    RecencyScorer,
};
