//! Per-review helpfulness scores.

use super::normal::z_for_confidence;
use crate::error::{Result, ReviewScoreError};

/// Wilson score interval lower bound at a fixed confidence level.
///
/// Holds the precomputed critical value so ranking many reviews does not
/// re-evaluate the normal quantile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WilsonScorer {
    confidence: f64,
    z: f64,
}

impl WilsonScorer {
    /// Create a scorer for `confidence`, which must lie strictly between 0 and 1.
    pub fn new(confidence: f64) -> Result<Self> {
        let z = z_for_confidence(confidence).ok_or_else(|| {
            ReviewScoreError::config(format!(
                "confidence must be strictly between 0 and 1, got {confidence}"
            ))
        })?;
        Ok(Self { confidence, z })
    }

    #[must_use]
    pub const fn confidence(&self) -> f64 {
        self.confidence
    }

    /// Critical value `z` for the configured confidence.
    #[must_use]
    pub const fn z(&self) -> f64 {
        self.z
    }

    /// Lower bound for `pos` helpful out of `pos + neg` votes, in `[0, 1]`.
    ///
    /// A review without votes scores 0.
    #[must_use]
    pub fn lower_bound(&self, pos: u64, neg: u64) -> f64 {
        let n = pos as f64 + neg as f64;
        if n == 0.0 {
            return 0.0;
        }

        let z2 = self.z * self.z;
        let phat = pos as f64 / n;
        let centre = phat + z2 / (2.0 * n);
        let spread = self.z * ((phat * (1.0 - phat) + z2 / (4.0 * n)) / n).sqrt();
        ((centre - spread) / (1.0 + z2 / n)).clamp(0.0, 1.0)
    }
}

/// Wilson lower bound for a single review.
///
/// Fails only for a confidence outside `(0, 1)`.
pub fn wilson_lower_bound(pos: u64, neg: u64, confidence: f64) -> Result<f64> {
    Ok(WilsonScorer::new(confidence)?.lower_bound(pos, neg))
}

/// Helpful votes minus unhelpful votes.
#[must_use]
pub fn score_pos_neg_diff(pos: u64, neg: u64) -> i64 {
    let pos = i64::try_from(pos).unwrap_or(i64::MAX);
    let neg = i64::try_from(neg).unwrap_or(i64::MAX);
    pos.saturating_sub(neg)
}

/// Share of helpful votes, 0 without votes.
#[must_use]
pub fn score_average_rating(pos: u64, neg: u64) -> f64 {
    let n = pos as f64 + neg as f64;
    if n == 0.0 {
        0.0
    } else {
        pos as f64 / n
    }
}
