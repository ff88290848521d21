//! Review rows and the loaded dataset.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One row of the input table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Zero-based data row position in the source file
    pub row: usize,
    /// Product identifier the review belongs to
    pub product_id: String,
    /// Star rating (1-5 in the observed domain)
    pub rating: f64,
    /// Calendar date of the review
    pub review_date: NaiveDate,
    /// Packed helpfulness literal, e.g. `"[12, 15]"`
    pub helpful_raw: String,
    /// Reviewer display name, when the file carries one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewer: Option<String>,
    /// Review headline, when the file carries one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl Review {
    /// Create a review with only the required columns populated.
    pub fn new(
        row: usize,
        product_id: impl Into<String>,
        rating: f64,
        review_date: NaiveDate,
        helpful_raw: impl Into<String>,
    ) -> Self {
        Self {
            row,
            product_id: product_id.into(),
            rating,
            review_date,
            helpful_raw: helpful_raw.into(),
            reviewer: None,
            summary: None,
        }
    }

    /// Attach a reviewer name.
    #[must_use]
    pub fn with_reviewer(mut self, reviewer: impl Into<String>) -> Self {
        self.reviewer = Some(reviewer.into());
        self
    }

    /// Attach a summary line.
    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Whole days between `reference` and the review date.
    ///
    /// Negative when the review postdates the reference date.
    #[must_use]
    pub fn days_before(&self, reference: NaiveDate) -> i64 {
        reference.signed_duration_since(self.review_date).num_days()
    }
}

/// The full review table, loaded once per run.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// Where the rows were read from, if from a file
    pub source: Option<PathBuf>,
    /// Rows in file order
    pub reviews: Vec<Review>,
}

impl Dataset {
    /// Create a dataset from rows already in memory.
    #[must_use]
    pub const fn new(reviews: Vec<Review>) -> Self {
        Self {
            source: None,
            reviews,
        }
    }

    /// Record the file the rows came from.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    /// Whether the dataset has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    /// Rows in file order.
    #[must_use]
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }
}
