//! Default values for review-scorer configuration.
//!
//! The defaults reproduce the reference analysis of the Amazon review dump:
//! a snapshot date of 2014-12-08, recency weights 28/26/24/22 percent,
//! 95% Wilson confidence and a top-20 display cutoff.

use chrono::NaiveDate;

/// Weights of the recency buckets, most recent quartile first.
pub const DEFAULT_BUCKET_WEIGHTS: [f64; 4] = [0.28, 0.26, 0.24, 0.22];

/// Confidence level of the Wilson lower bound.
pub const DEFAULT_CONFIDENCE: f64 = 0.95;

/// Number of reviews shown on the product page.
pub const DEFAULT_TOP_N: usize = 20;

/// Snapshot date used as "now" when computing `day_diff`.
pub const DEFAULT_REFERENCE_DATE: (i32, u32, u32) = (2014, 12, 8);

pub const DEFAULT_PRODUCT_COLUMN: &str = "asin";
pub const DEFAULT_RATING_COLUMN: &str = "overall";
pub const DEFAULT_DATE_COLUMN: &str = "reviewTime";
pub const DEFAULT_HELPFUL_COLUMN: &str = "helpful";
pub const DEFAULT_REVIEWER_COLUMN: &str = "reviewerName";
pub const DEFAULT_SUMMARY_COLUMN: &str = "summary";

/// Tolerance when checking that bucket weights sum to one.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// [`DEFAULT_REFERENCE_DATE`] as a date.
#[must_use]
pub fn default_reference_date() -> NaiveDate {
    let (y, m, d) = DEFAULT_REFERENCE_DATE;
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        let sum: f64 = DEFAULT_BUCKET_WEIGHTS.iter().sum();
        assert!((sum - 1.0).abs() < WEIGHT_SUM_TOLERANCE, "sum = {sum}");
    }

    #[test]
    fn test_default_weights_favor_recent_reviews() {
        assert!(DEFAULT_BUCKET_WEIGHTS.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_default_reference_date_is_valid() {
        assert_eq!(default_reference_date().to_string(), "2014-12-08");
    }
}
