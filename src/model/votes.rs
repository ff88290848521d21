//! Helpfulness vote records.

use serde::{Deserialize, Serialize};

/// Helpful and total vote counts for one review.
///
/// Construction goes through [`HelpfulVotes::new`], which rejects
/// `helpful_yes > total_vote`, so `helpful_no` is never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct HelpfulVotes {
    helpful_yes: u64,
    total_vote: u64,
}

impl HelpfulVotes {
    /// Create a vote pair, or `None` when more helpful votes than total votes.
    #[must_use]
    pub const fn new(helpful_yes: u64, total_vote: u64) -> Option<Self> {
        if helpful_yes > total_vote {
            None
        } else {
            Some(Self {
                helpful_yes,
                total_vote,
            })
        }
    }

    /// Votes marking the review helpful.
    #[must_use]
    pub const fn helpful_yes(&self) -> u64 {
        self.helpful_yes
    }

    /// Votes marking the review not helpful.
    #[must_use]
    pub const fn helpful_no(&self) -> u64 {
        self.total_vote - self.helpful_yes
    }

    /// All votes cast.
    #[must_use]
    pub const fn total_vote(&self) -> u64 {
        self.total_vote
    }
}

/// A review of the selected product after its vote field was parsed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VotedReview {
    /// Source row of the review
    pub row: usize,
    /// Star rating carried through for display
    pub rating: f64,
    /// Reviewer display name, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewer: Option<String>,
    /// Review headline, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Parsed vote counts
    pub votes: HelpfulVotes,
}

/// One line of the helpfulness ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedReview {
    /// 1-based position in the ranking
    pub rank: usize,
    /// Source row of the review
    pub row: usize,
    pub rating: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub helpful_yes: u64,
    pub helpful_no: u64,
    pub total_vote: u64,
    /// `helpful_yes - helpful_no`
    pub score_pos_neg_diff: i64,
    /// `helpful_yes / total_vote`, 0 without votes
    pub score_average_rating: f64,
    /// Lower bound of the Wilson score interval
    pub wilson_lower_bound: f64,
}

/// Column sums over a set of voted reviews.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct VoteTotals {
    /// Reviews summed over
    pub reviews: usize,
    pub helpful_yes: u64,
    pub helpful_no: u64,
    pub total_vote: u64,
}

impl VoteTotals {
    /// Sum the vote columns of `reviews`.
    ///
    /// Returns `None` when a column sum does not fit in a `u64`.
    #[must_use]
    pub fn from_reviews(reviews: &[VotedReview]) -> Option<Self> {
        reviews.iter().try_fold(
            Self {
                reviews: reviews.len(),
                ..Self::default()
            },
            |acc, r| {
                Some(Self {
                    helpful_yes: acc.helpful_yes.checked_add(r.votes.helpful_yes())?,
                    helpful_no: acc.helpful_no.checked_add(r.votes.helpful_no())?,
                    total_vote: acc.total_vote.checked_add(r.votes.total_vote())?,
                    ..acc
                })
            },
        )
    }

    /// Whether `total_vote` equals `helpful_yes + helpful_no`.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.helpful_yes.checked_add(self.helpful_no) == Some(self.total_vote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helpful_no_derivation() {
        let votes = HelpfulVotes::new(12, 15).unwrap();
        assert_eq!(votes.helpful_yes(), 12);
        assert_eq!(votes.total_vote(), 15);
        assert_eq!(votes.helpful_no(), 3);
        assert_eq!(votes.helpful_yes() + votes.helpful_no(), votes.total_vote());
    }

    #[test]
    fn test_rejects_more_helpful_than_total() {
        assert!(HelpfulVotes::new(5, 4).is_none());
        assert!(HelpfulVotes::new(0, 0).is_some());
    }

    fn voted(pairs: &[(u64, u64)]) -> Vec<VotedReview> {
        pairs
            .iter()
            .enumerate()
            .map(|(row, &(yes, total))| VotedReview {
                row,
                rating: 5.0,
                reviewer: None,
                summary: None,
                votes: HelpfulVotes::new(yes, total).unwrap(),
            })
            .collect()
    }

    #[test]
    fn test_vote_totals() {
        let totals = VoteTotals::from_reviews(&voted(&[(12, 15), (0, 0), (3, 3)])).unwrap();
        assert_eq!(totals.reviews, 3);
        assert_eq!(totals.helpful_yes, 15);
        assert_eq!(totals.helpful_no, 3);
        assert_eq!(totals.total_vote, 18);
        assert!(totals.is_consistent());
    }

    #[test]
    fn test_vote_totals_overflow_is_none() {
        let reviews = voted(&[(0, u64::MAX), (0, u64::MAX)]);
        assert_eq!(VoteTotals::from_reviews(&reviews), None);

        // A single maximal row still sums
        let totals = VoteTotals::from_reviews(&voted(&[(0, u64::MAX)])).unwrap();
        assert!(totals.is_consistent());
    }

    #[test]
    fn test_inconsistent_totals_do_not_overflow() {
        let totals = VoteTotals {
            reviews: 2,
            helpful_yes: u64::MAX,
            helpful_no: 1,
            total_vote: 0,
        };
        assert!(!totals.is_consistent());
    }
}
