//! Packed helpfulness vote parsing.
//!
//! The vote column holds a bracketed pair such as `[12, 15]`: 12 users found
//! the review helpful out of 15 who voted.

use crate::error::{Result, ReviewScoreError, ScoringErrorKind};
use crate::model::{HelpfulVotes, ProductSubset, VoteTotals, VotedReview};

/// Parse one packed vote field.
///
/// The field is split on the first `,`; `[` is stripped from the first half
/// and `]` from the second, and both halves must be non-negative integers
/// with `helpful_yes <= total_vote`. Anything else is a
/// [`ReviewScoreError::MalformedVoteField`] for `row`.
pub fn parse_vote_field(row: usize, raw: &str) -> Result<HelpfulVotes> {
    let malformed = |reason: &str| ReviewScoreError::malformed_vote(row, raw, reason);

    let (yes_part, total_part) = raw
        .split_once(',')
        .ok_or_else(|| malformed("missing ',' delimiter"))?;

    let yes_part = yes_part.trim();
    let yes_part = yes_part.strip_prefix('[').unwrap_or(yes_part);
    let total_part = total_part.trim();
    let total_part = total_part.strip_suffix(']').unwrap_or(total_part);

    let helpful_yes = parse_count(yes_part)
        .ok_or_else(|| malformed("helpful count is not a non-negative integer"))?;
    let total_vote = parse_count(total_part).ok_or_else(|| {
        if total_part.contains(',') {
            malformed("expected exactly two integers")
        } else {
            malformed("total count is not a non-negative integer")
        }
    })?;

    HelpfulVotes::new(helpful_yes, total_vote)
        .ok_or_else(|| malformed("helpful count exceeds total count"))
}

fn parse_count(s: &str) -> Option<u64> {
    let s = s.trim();
    if s.is_empty() || s.starts_with('+') {
        return None;
    }
    s.parse::<u64>().ok()
}

/// Parse the vote field of every review in `subset`.
///
/// Stops at the first malformed field; a partially parsed subset is never
/// returned.
pub fn parse_votes(subset: &ProductSubset) -> Result<Vec<VotedReview>> {
    subset
        .reviews()
        .iter()
        .map(|review| {
            let votes = parse_vote_field(review.row, &review.helpful_raw)?;
            Ok(VotedReview {
                row: review.row,
                rating: review.rating,
                reviewer: review.reviewer.clone(),
                summary: review.summary.clone(),
                votes,
            })
        })
        .collect()
}

/// Cross-check that `sum(total_vote) == sum(helpful_yes) + sum(helpful_no)`.
///
/// Returns the column sums on success. Sums too large for a `u64` are a
/// [`ScoringErrorKind::VoteTotalsOverflow`].
pub fn check_vote_consistency(reviews: &[VotedReview]) -> Result<VoteTotals> {
    let totals = VoteTotals::from_reviews(reviews).ok_or_else(|| {
        ReviewScoreError::scoring(
            "vote consistency check",
            ScoringErrorKind::VoteTotalsOverflow {
                reviews: reviews.len(),
            },
        )
    })?;
    if totals.is_consistent() {
        tracing::debug!(
            reviews = totals.reviews,
            total_vote = totals.total_vote,
            "Vote totals consistent"
        );
        Ok(totals)
    } else {
        Err(ReviewScoreError::scoring(
            "vote consistency check",
            ScoringErrorKind::VoteTotalsMismatch {
                total_vote: totals.total_vote,
                helpful_yes: totals.helpful_yes,
                helpful_no: totals.helpful_no,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Dataset, Review};
    use chrono::NaiveDate;

    fn assert_malformed(raw: &str) {
        match parse_vote_field(9, raw) {
            Err(ReviewScoreError::MalformedVoteField { row, value, .. }) => {
                assert_eq!(row, 9);
                assert_eq!(value, raw);
            }
            other => panic!("{raw:?} should be malformed, got {other:?}"),
        }
    }

    #[test]
    fn test_parses_bracketed_pair() {
        let votes = parse_vote_field(0, "[12, 15]").unwrap();
        assert_eq!(votes.helpful_yes(), 12);
        assert_eq!(votes.total_vote(), 15);
        assert_eq!(votes.helpful_no(), 3);
    }

    #[test]
    fn test_tolerates_whitespace_and_missing_brackets() {
        let votes = parse_vote_field(0, "  [0,0] ").unwrap();
        assert_eq!(votes.total_vote(), 0);
        let votes = parse_vote_field(0, "3, 4").unwrap();
        assert_eq!((votes.helpful_yes(), votes.helpful_no()), (3, 1));
    }

    #[test]
    fn test_rejects_malformed_fields() {
        assert_malformed("12-15");
        assert_malformed("");
        assert_malformed("[12]");
        assert_malformed("[a, 15]");
        assert_malformed("[12, b]");
        assert_malformed("[-1, 15]");
        assert_malformed("[1, 2, 3]");
        assert_malformed("[16, 15]");
        assert_malformed("[1.5, 2]");
        assert_malformed("[, 2]");
    }

    #[test]
    fn test_extra_values_reason() {
        let err = parse_vote_field(0, "[1, 2, 3]").unwrap_err();
        assert!(err.to_string().contains("exactly two"), "{err}");
    }

    #[test]
    fn test_parse_votes_over_subset() {
        let date = NaiveDate::from_ymd_opt(2014, 1, 1).unwrap();
        let ds = Dataset::new(vec![
            Review::new(0, "A", 5.0, date, "[2, 3]").with_reviewer("Ann"),
            Review::new(1, "B", 4.0, date, "broken"),
            Review::new(2, "A", 3.0, date, "[0, 0]"),
        ]);
        let subset = ProductSubset::from_dataset(&ds, "A").unwrap();
        let voted = parse_votes(&subset).unwrap();

        assert_eq!(voted.len(), 2);
        assert_eq!(voted[0].reviewer.as_deref(), Some("Ann"));
        assert_eq!(voted[1].row, 2);

        let totals = check_vote_consistency(&voted).unwrap();
        assert_eq!(totals.total_vote, 3);
        assert_eq!(totals.helpful_yes + totals.helpful_no, totals.total_vote);
    }

    #[test]
    fn test_huge_vote_totals_are_an_error() {
        let date = NaiveDate::from_ymd_opt(2014, 1, 1).unwrap();
        let ds = Dataset::new(vec![
            Review::new(0, "A", 5.0, date, "[0, 18446744073709551615]"),
            Review::new(1, "A", 4.0, date, "[0, 18446744073709551615]"),
        ]);
        let subset = ProductSubset::from_dataset(&ds, "A").unwrap();
        let voted = parse_votes(&subset).unwrap();

        let err = check_vote_consistency(&voted).unwrap_err();
        assert!(matches!(
            err,
            ReviewScoreError::Scoring {
                source: ScoringErrorKind::VoteTotalsOverflow { reviews: 2 },
                ..
            }
        ));
    }

    #[test]
    fn test_parse_votes_reports_failing_row() {
        let date = NaiveDate::from_ymd_opt(2014, 1, 1).unwrap();
        let ds = Dataset::new(vec![
            Review::new(0, "A", 5.0, date, "[2, 3]"),
            Review::new(1, "A", 4.0, date, "12-15"),
        ]);
        let subset = ProductSubset::from_dataset(&ds, "A").unwrap();
        let err = parse_votes(&subset).unwrap_err();
        assert_eq!(err.row(), Some(1));
    }
}
