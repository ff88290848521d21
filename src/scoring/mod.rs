//! Product and review scoring.
//!
//! Two independent scores are computed for the selected product:
//!
//! - **Product score**: the mean star rating, and a recency-weighted mean that
//!   splits reviews into four age quartiles and favours the recent ones.
//! - **Review ranking**: each review's helpfulness votes are turned into the
//!   lower bound of the Wilson score interval, and the top N are kept.
//!
//! # Usage
//!
//! ```no_run
//! use review_scorer::config::AppConfig;
//! use review_scorer::model::ProductSubset;
//! use review_scorer::parsers::{parse_dataset, parse_votes};
//! use review_scorer::scoring::{select_most_reviewed, HelpfulnessRanker, RecencyScorer};
//! use std::path::Path;
//!
//! let config = AppConfig::default();
//! let dataset = parse_dataset(Path::new("reviews.csv"), &config.dataset).unwrap();
//! let selection = select_most_reviewed(&dataset).unwrap();
//! let subset = ProductSubset::from_dataset(&dataset, &selection.product_id).unwrap();
//!
//! let score = RecencyScorer::from_config(&config.scoring).score(&subset).unwrap();
//! println!("weighted: {:.3}", score.weighted_avg_score);
//!
//! let ranker = HelpfulnessRanker::from_config(&config.ranking).unwrap();
//! let ranking = ranker.rank(&parse_votes(&subset).unwrap());
//! for row in &ranking.rows {
//!     println!("{} {:.4}", row.rank, row.wilson_lower_bound);
//! }
//! ```

mod helpfulness;
mod normal;
mod quantile;
mod recency;
mod selector;
mod wilson;

pub use helpfulness::{HelpfulnessRanker, Ranking};
pub use normal::{normal_quantile, z_for_confidence};
pub use quantile::{quantile_sorted, Quartiles};
pub use recency::{BucketStats, ProductScore, RecencyScorer, BUCKET_COUNT};
pub use selector::{
    product_counts, select_most_reviewed, select_product, ProductCount, ProductSelection,
};
pub use wilson::{score_average_rating, score_pos_neg_diff, wilson_lower_bound, WilsonScorer};

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// What to do with a recency bucket that holds no reviews.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum EmptyBucketPolicy {
    /// Drop the bucket and rescale the remaining weights to sum to 1
    #[default]
    Renormalize,
    /// Fail the run
    Strict,
    /// Count the bucket's mean as 0
    Zero,
}

impl std::fmt::Display for EmptyBucketPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Renormalize => write!(f, "renormalize"),
            Self::Strict => write!(f, "strict"),
            Self::Zero => write!(f, "zero"),
        }
    }
}

/// Key the review ranking is sorted by (descending).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum RankingKey {
    /// Lower bound of the Wilson score interval
    #[default]
    Wilson,
    /// Helpful votes minus unhelpful votes
    PosNegDiff,
    /// Share of helpful votes
    AverageRating,
}

impl std::fmt::Display for RankingKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Wilson => write!(f, "wilson"),
            Self::PosNegDiff => write!(f, "pos-neg-diff"),
            Self::AverageRating => write!(f, "average-rating"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_serde_names() {
        let policy: EmptyBucketPolicy = serde_json::from_str("\"renormalize\"").unwrap();
        assert_eq!(policy, EmptyBucketPolicy::Renormalize);
        assert_eq!(
            serde_json::to_string(&EmptyBucketPolicy::Strict).unwrap(),
            "\"strict\""
        );
    }

    #[test]
    fn test_ranking_key_names_match_cli() {
        for key in RankingKey::value_variants() {
            let cli_name = key.to_possible_value().unwrap().get_name().to_string();
            assert_eq!(cli_name, key.to_string());
            let json = serde_json::to_string(key).unwrap();
            assert_eq!(json, format!("\"{cli_name}\""));
        }
    }
}
