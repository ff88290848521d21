//! Review ranking by helpfulness.

use super::wilson::{score_average_rating, score_pos_neg_diff, WilsonScorer};
use super::RankingKey;
use crate::config::RankingConfig;
use crate::error::Result;
use crate::model::{RankedReview, VotedReview};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// The top reviews of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    /// Ranked rows, best first, at most `top_n` long
    pub rows: Vec<RankedReview>,
    /// Reviews considered before truncation
    pub total_candidates: usize,
    pub top_n: usize,
    pub sort_by: RankingKey,
    pub confidence: f64,
}

impl Ranking {
    /// The best review, if any.
    #[must_use]
    pub fn best(&self) -> Option<&RankedReview> {
        self.rows.first()
    }
}

/// Scores voted reviews and keeps the best `top_n`.
#[derive(Debug, Clone)]
pub struct HelpfulnessRanker {
    wilson: WilsonScorer,
    top_n: usize,
    sort_by: RankingKey,
}

impl HelpfulnessRanker {
    /// Create a ranker. Fails for a confidence outside `(0, 1)`.
    pub fn new(confidence: f64, top_n: usize, sort_by: RankingKey) -> Result<Self> {
        Ok(Self {
            wilson: WilsonScorer::new(confidence)?,
            top_n,
            sort_by,
        })
    }

    pub fn from_config(config: &RankingConfig) -> Result<Self> {
        Self::new(config.confidence, config.top_n, config.sort_by)
    }

    /// Compute every score for one review. The rank is left at 0.
    #[must_use]
    pub fn score_review(&self, review: &VotedReview) -> RankedReview {
        let pos = review.votes.helpful_yes();
        let neg = review.votes.helpful_no();
        RankedReview {
            rank: 0,
            row: review.row,
            rating: review.rating,
            reviewer: review.reviewer.clone(),
            summary: review.summary.clone(),
            helpful_yes: pos,
            helpful_no: neg,
            total_vote: review.votes.total_vote(),
            score_pos_neg_diff: score_pos_neg_diff(pos, neg),
            score_average_rating: score_average_rating(pos, neg),
            wilson_lower_bound: self.wilson.lower_bound(pos, neg),
        }
    }

    /// Score all reviews, sort descending by the ranking key and keep the
    /// first `top_n`.
    ///
    /// The sort is stable: reviews with equal keys stay in input order.
    #[must_use]
    pub fn rank(&self, reviews: &[VotedReview]) -> Ranking {
        let mut rows: Vec<RankedReview> = reviews.iter().map(|r| self.score_review(r)).collect();
        let sort_by = self.sort_by;
        rows.sort_by(|a, b| compare_desc(sort_by, a, b));
        rows.truncate(self.top_n);
        for (i, row) in rows.iter_mut().enumerate() {
            row.rank = i + 1;
        }

        tracing::debug!(
            "Ranked {} of {} reviews by {}",
            rows.len(),
            reviews.len(),
            sort_by
        );

        Ranking {
            rows,
            total_candidates: reviews.len(),
            top_n: self.top_n,
            sort_by,
            confidence: self.wilson.confidence(),
        }
    }
}

fn compare_desc(key: RankingKey, a: &RankedReview, b: &RankedReview) -> Ordering {
    match key {
        RankingKey::Wilson => b.wilson_lower_bound.total_cmp(&a.wilson_lower_bound),
        RankingKey::PosNegDiff => b.score_pos_neg_diff.cmp(&a.score_pos_neg_diff),
        RankingKey::AverageRating => b.score_average_rating.total_cmp(&a.score_average_rating),
    }
}
