//! Property-based tests for scoring and ranking.
//!
//! Ensures the scoring functions handle arbitrary input without panicking,
//! and that their key invariants hold across random inputs.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use review_scorer::model::{Dataset, HelpfulVotes, ProductSubset, Review, VotedReview};
use review_scorer::parsers::parse_vote_field;
use review_scorer::scoring::{
    wilson_lower_bound, EmptyBucketPolicy, HelpfulnessRanker, Quartiles, RankingKey,
    RecencyScorer,
};

fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2014, 12, 8).unwrap()
}

fn subset_from(ages_and_ratings: &[(i64, u8)]) -> (Dataset, ProductSubset) {
    let reviews = ages_and_ratings
        .iter()
        .enumerate()
        .map(|(row, &(age, rating))| {
            Review::new(
                row,
                "P",
                f64::from(rating),
                reference_date() - Duration::days(age),
                "[0, 0]",
            )
        })
        .collect();
    let dataset = Dataset::new(reviews);
    let subset = ProductSubset::from_dataset(&dataset, "P").unwrap();
    (dataset, subset)
}

fn voted(votes: &[(u64, u64)]) -> Vec<VotedReview> {
    votes
        .iter()
        .enumerate()
        .map(|(row, &(yes, no))| VotedReview {
            row,
            rating: 5.0,
            reviewer: None,
            summary: None,
            votes: HelpfulVotes::new(yes, yes + no).unwrap(),
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn wilson_is_bounded_by_observed_ratio(pos in 0u64..5_000, neg in 0u64..5_000) {
        let lb = wilson_lower_bound(pos, neg, 0.95).unwrap();
        prop_assert!((0.0..=1.0).contains(&lb));
        if pos + neg > 0 {
            let phat = pos as f64 / (pos + neg) as f64;
            prop_assert!(lb <= phat + 1e-12, "lb {} > phat {}", lb, phat);
        } else {
            prop_assert_eq!(lb, 0.0);
        }
    }

    #[test]
    fn wilson_grows_with_positive_votes(pos in 0u64..2_000, neg in 0u64..2_000) {
        let before = wilson_lower_bound(pos, neg, 0.95).unwrap();
        let after = wilson_lower_bound(pos + 1, neg, 0.95).unwrap();
        prop_assert!(after >= before - 1e-12);
    }

    #[test]
    fn wilson_tightens_with_lower_confidence(pos in 1u64..1_000, neg in 0u64..1_000) {
        let wide = wilson_lower_bound(pos, neg, 0.99).unwrap();
        let narrow = wilson_lower_bound(pos, neg, 0.80).unwrap();
        prop_assert!(narrow >= wide - 1e-12);
    }

    #[test]
    fn wilson_bounds_hold_at_any_confidence(
        pos in 0u64..2_000,
        neg in 0u64..2_000,
        confidence in 0.5f64..0.999,
    ) {
        let lb = wilson_lower_bound(pos, neg, confidence).unwrap();
        prop_assert!((0.0..=1.0).contains(&lb));
        if pos + neg > 0 {
            let phat = pos as f64 / (pos + neg) as f64;
            prop_assert!(lb <= phat + 1e-12, "lb {} > phat {} at {}", lb, phat, confidence);
        }
    }

    #[test]
    fn wilson_grows_with_positive_votes_at_any_confidence(
        pos in 0u64..2_000,
        neg in 0u64..2_000,
        confidence in 0.5f64..0.999,
    ) {
        let before = wilson_lower_bound(pos, neg, confidence).unwrap();
        let after = wilson_lower_bound(pos + 1, neg, confidence).unwrap();
        prop_assert!(after >= before - 1e-12);
    }

    #[test]
    fn wilson_falls_with_negative_votes(
        pos in 0u64..2_000,
        neg in 0u64..2_000,
        confidence in 0.5f64..0.999,
    ) {
        let before = wilson_lower_bound(pos, neg, confidence).unwrap();
        let after = wilson_lower_bound(pos, neg + 1, confidence).unwrap();
        prop_assert!(after <= before + 1e-12, "{} -> {} at {}", before, after, confidence);
    }

    #[test]
    fn wilson_all_positive_stays_below_one(pos in 1u64..100_000, confidence in 0.5f64..0.999) {
        let lb = wilson_lower_bound(pos, 0, confidence).unwrap();
        prop_assert!(lb > 0.0);
        prop_assert!(lb < 1.0, "lb {} at pos {} confidence {}", lb, pos, confidence);
    }

    #[test]
    fn quartiles_are_ordered(values in prop::collection::vec(0.0f64..5_000.0, 1..200)) {
        let q = Quartiles::of(&values).unwrap();
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(min <= q.q1 && q.q1 <= q.q2 && q.q2 <= q.q3 && q.q3 <= max);
    }

    #[test]
    fn every_review_lands_in_one_bucket(
        reviews in prop::collection::vec((0i64..3_000, 1u8..=5), 1..150)
    ) {
        let (_dataset, subset) = subset_from(&reviews);
        let scorer = RecencyScorer::new(
            reference_date(),
            [0.28, 0.26, 0.24, 0.22],
            EmptyBucketPolicy::Renormalize,
        );
        let score = scorer.score(&subset).unwrap();

        let counted: usize = score.buckets.iter().map(|b| b.review_count).sum();
        prop_assert_eq!(counted, reviews.len());

        let applied: f64 = score.buckets.iter().map(|b| b.effective_weight).sum();
        prop_assert!((applied - 1.0).abs() < 1e-9, "weights sum to {}", applied);

        // A weighted mean of bucket means stays within the rating range
        prop_assert!(score.weighted_avg_score >= 1.0 - 1e-9);
        prop_assert!(score.weighted_avg_score <= 5.0 + 1e-9);
        prop_assert!(score.simple_avg_score >= 1.0 && score.simple_avg_score <= 5.0);
    }

    #[test]
    fn ranking_is_sorted_and_truncated(
        votes in prop::collection::vec((0u64..500, 0u64..500), 0..80),
        top_n in 0usize..40,
    ) {
        let reviews = voted(&votes);
        let ranker = HelpfulnessRanker::new(0.95, top_n, RankingKey::Wilson).unwrap();
        let ranking = ranker.rank(&reviews);

        prop_assert_eq!(ranking.rows.len(), top_n.min(reviews.len()));
        prop_assert_eq!(ranking.total_candidates, reviews.len());
        prop_assert!(ranking
            .rows
            .windows(2)
            .all(|w| w[0].wilson_lower_bound >= w[1].wilson_lower_bound));
        for (i, row) in ranking.rows.iter().enumerate() {
            prop_assert_eq!(row.rank, i + 1);
            prop_assert_eq!(row.helpful_yes + row.helpful_no, row.total_vote);
        }
    }

    #[test]
    fn vote_field_parser_doesnt_panic(s in "\\PC{0,40}") {
        let _ = parse_vote_field(0, &s);
    }

    #[test]
    fn vote_field_accepts_valid_pairs(yes in 0u64..100_000, extra in 0u64..100_000) {
        let total = yes + extra;
        let votes = parse_vote_field(0, &format!("[{yes}, {total}]")).unwrap();
        prop_assert_eq!(votes.helpful_yes(), yes);
        prop_assert_eq!(votes.helpful_no(), extra);
    }
}
