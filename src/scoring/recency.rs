//! Recency-weighted product score.
//!
//! Reviews are split into four buckets by age, using the quartiles of their
//! age in days as cut points:
//!
//! | bucket | age (days)        | default weight |
//! |--------|-------------------|----------------|
//! | 1      | `(-inf, q1]`      | 0.28           |
//! | 2      | `(q1, q2]`        | 0.26           |
//! | 3      | `(q2, q3]`        | 0.24           |
//! | 4      | `(q3, +inf)`      | 0.22           |
//!
//! The weighted score is the weight-averaged mean rating of the buckets.

use super::quantile::Quartiles;
use super::EmptyBucketPolicy;
use crate::config::ScoringConfig;
use crate::error::{Result, ReviewScoreError, ScoringErrorKind};
use crate::model::ProductSubset;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of recency buckets.
pub const BUCKET_COUNT: usize = 4;

/// One recency bucket after scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketStats {
    /// 1-based bucket number, 1 is the most recent
    pub index: usize,
    /// Exclusive lower bound on age in days, `None` for the first bucket
    pub lower_days: Option<f64>,
    /// Inclusive upper bound on age in days, `None` for the last bucket
    pub upper_days: Option<f64>,
    /// Configured weight
    pub weight: f64,
    /// Weight actually applied after the empty-bucket policy
    pub effective_weight: f64,
    pub review_count: usize,
    /// Mean rating, `None` when the bucket is empty
    pub mean_rating: Option<f64>,
}

impl BucketStats {
    /// Weighted contribution to the product score.
    #[must_use]
    pub fn contribution(&self) -> f64 {
        self.mean_rating.unwrap_or(0.0) * self.effective_weight
    }
}

/// Plain and recency-weighted scores of one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductScore {
    pub product_id: String,
    pub review_count: usize,
    /// Mean of all ratings
    pub simple_avg_score: f64,
    /// Bucket means combined with the recency weights
    pub weighted_avg_score: f64,
    /// Age quartiles in days
    pub quartiles: Quartiles,
    pub buckets: [BucketStats; BUCKET_COUNT],
    /// 1-based numbers of the buckets that held no reviews
    pub empty_buckets: Vec<usize>,
    pub empty_bucket_policy: EmptyBucketPolicy,
    pub reference_date: NaiveDate,
}

/// Computes [`ProductScore`]s.
#[derive(Debug, Clone)]
pub struct RecencyScorer {
    reference_date: NaiveDate,
    weights: [f64; BUCKET_COUNT],
    policy: EmptyBucketPolicy,
}

impl RecencyScorer {
    /// Create a scorer. Weights are ordered most recent bucket first.
    #[must_use]
    pub const fn new(
        reference_date: NaiveDate,
        weights: [f64; BUCKET_COUNT],
        policy: EmptyBucketPolicy,
    ) -> Self {
        Self {
            reference_date,
            weights,
            policy,
        }
    }

    #[must_use]
    pub const fn from_config(config: &ScoringConfig) -> Self {
        Self::new(
            config.reference_date,
            config.bucket_weights,
            config.empty_buckets,
        )
    }

    #[must_use]
    pub const fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    /// Age of each review in days, in subset order.
    ///
    /// Fails on the first review dated after the reference date.
    pub fn day_diffs(&self, subset: &ProductSubset) -> Result<Vec<i64>> {
        subset
            .reviews()
            .iter()
            .map(|review| {
                let days = review.days_before(self.reference_date);
                if days < 0 {
                    return Err(ReviewScoreError::scoring(
                        "computing review age",
                        ScoringErrorKind::ReviewAfterReferenceDate {
                            row: review.row,
                            review_date: review.review_date,
                            reference_date: self.reference_date,
                        },
                    ));
                }
                Ok(days)
            })
            .collect()
    }

    /// Mean rating of the subset.
    #[must_use]
    pub fn simple_average(subset: &ProductSubset) -> f64 {
        if subset.is_empty() {
            return 0.0;
        }
        subset.reviews().iter().map(|r| r.rating).sum::<f64>() / subset.len() as f64
    }

    /// Score `subset`.
    ///
    /// The simple average is logged before the weighted computation starts,
    /// so it is visible even if weighting fails.
    pub fn score(&self, subset: &ProductSubset) -> Result<ProductScore> {
        let simple_avg_score = Self::simple_average(subset);
        tracing::info!(
            product = subset.product_id(),
            "Simple average rating: {simple_avg_score:.4}"
        );

        let days = self.day_diffs(subset)?;
        let ages: Vec<f64> = days.iter().map(|&d| d as f64).collect();
        let quartiles = Quartiles::of(&ages).ok_or_else(|| {
            ReviewScoreError::empty_dataset(format!(
                "no reviews for product '{}'",
                subset.product_id()
            ))
        })?;
        let cuts = quartiles.as_array();

        let mut sums = [0.0_f64; BUCKET_COUNT];
        let mut counts = [0_usize; BUCKET_COUNT];
        for (review, age) in subset.reviews().iter().zip(&ages) {
            let bucket = bucket_for(*age, cuts);
            sums[bucket] += review.rating;
            counts[bucket] += 1;
        }

        let empty_buckets: Vec<usize> = (0..BUCKET_COUNT)
            .filter(|&i| counts[i] == 0)
            .map(|i| i + 1)
            .collect();
        let effective = self.effective_weights(&counts, &empty_buckets)?;

        let buckets: [BucketStats; BUCKET_COUNT] = std::array::from_fn(|i| BucketStats {
            index: i + 1,
            lower_days: i.checked_sub(1).map(|prev| cuts[prev]),
            upper_days: cuts.get(i).copied(),
            weight: self.weights[i],
            effective_weight: effective[i],
            review_count: counts[i],
            mean_rating: (counts[i] > 0).then(|| sums[i] / counts[i] as f64),
        });

        let weighted_avg_score = buckets.iter().map(BucketStats::contribution).sum();
        tracing::info!(
            product = subset.product_id(),
            "Recency-weighted rating: {weighted_avg_score:.4}"
        );

        Ok(ProductScore {
            product_id: subset.product_id().to_string(),
            review_count: subset.len(),
            simple_avg_score,
            weighted_avg_score,
            quartiles,
            buckets,
            empty_buckets,
            empty_bucket_policy: self.policy,
            reference_date: self.reference_date,
        })
    }

    /// Apply the empty-bucket policy to the configured weights.
    fn effective_weights(
        &self,
        counts: &[usize; BUCKET_COUNT],
        empty_buckets: &[usize],
    ) -> Result<[f64; BUCKET_COUNT]> {
        if empty_buckets.is_empty() {
            return Ok(self.weights);
        }

        match self.policy {
            EmptyBucketPolicy::Strict => Err(ReviewScoreError::scoring(
                "weighting recency buckets",
                ScoringErrorKind::InsufficientBucketData {
                    bucket: empty_buckets[0],
                },
            )),
            EmptyBucketPolicy::Zero => {
                tracing::warn!("Empty recency buckets {empty_buckets:?} contribute 0");
                Ok(self.weights)
            }
            EmptyBucketPolicy::Renormalize => {
                tracing::warn!(
                    "Empty recency buckets {empty_buckets:?} excluded; remaining weights rescaled"
                );
                Ok(renormalize(&self.weights, counts))
            }
        }
    }
}

/// Bucket index (0-based) for an age given the three quartile cut points.
fn bucket_for(age: f64, cuts: [f64; 3]) -> usize {
    cuts.iter().position(|&cut| age <= cut).unwrap_or(BUCKET_COUNT - 1)
}

/// Rescale the weights of non-empty buckets to sum to 1; empty buckets get 0.
fn renormalize(
    weights: &[f64; BUCKET_COUNT],
    counts: &[usize; BUCKET_COUNT],
) -> [f64; BUCKET_COUNT] {
    let total_available: f64 = weights
        .iter()
        .zip(counts)
        .filter(|&(_, c)| *c > 0)
        .map(|(w, _)| w)
        .sum();

    if total_available <= 0.0 {
        return [0.0; BUCKET_COUNT];
    }

    let scale = 1.0 / total_available;
    let mut result = [0.0_f64; BUCKET_COUNT];
    for (i, (&w, &c)) in weights.iter().zip(counts).enumerate() {
        result[i] = if c > 0 { w * scale } else { 0.0 };
    }
    result
}
