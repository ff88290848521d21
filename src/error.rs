//! Unified error types for review-scorer.
//!
//! This module provides the error hierarchy for the library, with
//! row-level context so a failed run reports which stage and row broke.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for review-scorer operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReviewScoreError {
    /// Errors while reading the review dataset
    #[error("Failed to load dataset: {context}")]
    Load {
        context: String,
        #[source]
        source: LoadErrorKind,
    },

    /// No rows available to select a product from
    #[error("No data: {0}")]
    EmptyDataset(String),

    /// A packed helpfulness field that is not two non-negative integers
    #[error("Malformed vote field at row {row}: {value:?} ({reason})")]
    MalformedVoteField {
        row: usize,
        value: String,
        reason: String,
    },

    /// Errors during score computation
    #[error("Scoring failed: {context}")]
    Scoring {
        context: String,
        #[source]
        source: ScoringErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Specific dataset load error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum LoadErrorKind {
    #[error("Missing required column '{column}' (found: {available})")]
    MissingColumn { column: String, available: String },

    #[error("Invalid rating {value:?} at row {row}")]
    InvalidRating { row: usize, value: String },

    #[error("Invalid review date {value:?} at row {row}")]
    InvalidDate { row: usize, value: String },

    #[error("CSV error: {0}")]
    Csv(String),
}

/// Specific scoring error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ScoringErrorKind {
    #[error("Recency bucket {bucket} has no reviews; cannot compute its mean rating")]
    InsufficientBucketData { bucket: usize },

    #[error("Review at row {row} is dated {review_date}, after reference date {reference_date}")]
    ReviewAfterReferenceDate {
        row: usize,
        review_date: chrono::NaiveDate,
        reference_date: chrono::NaiveDate,
    },

    #[error(
        "Vote totals disagree: total_vote sum {total_vote} != helpful_yes {helpful_yes} + helpful_no {helpful_no}"
    )]
    VoteTotalsMismatch {
        total_vote: u64,
        helpful_yes: u64,
        helpful_no: u64,
    },

    #[error("Vote totals over {reviews} reviews exceed the u64 range")]
    VoteTotalsOverflow { reviews: usize },
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for review-scorer operations
pub type Result<T> = std::result::Result<T, ReviewScoreError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl ReviewScoreError {
    /// Create a load error with context
    pub fn load(context: impl Into<String>, source: LoadErrorKind) -> Self {
        Self::Load {
            context: context.into(),
            source,
        }
    }

    /// Create a load error for a missing column
    pub fn missing_column(column: impl Into<String>, available: &[String]) -> Self {
        Self::load(
            "resolving header",
            LoadErrorKind::MissingColumn {
                column: column.into(),
                available: available.join(", "),
            },
        )
    }

    /// Create an empty-dataset error
    pub fn empty_dataset(message: impl Into<String>) -> Self {
        Self::EmptyDataset(message.into())
    }

    /// Create a malformed vote field error
    pub fn malformed_vote(row: usize, value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedVoteField {
            row,
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a scoring error with context
    pub fn scoring(context: impl Into<String>, source: ScoringErrorKind) -> Self {
        Self::Scoring {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Row the error refers to, when it is tied to a single input row.
    #[must_use]
    pub fn row(&self) -> Option<usize> {
        match self {
            Self::MalformedVoteField { row, .. }
            | Self::Load {
                source:
                    LoadErrorKind::InvalidRating { row, .. } | LoadErrorKind::InvalidDate { row, .. },
                ..
            }
            | Self::Scoring {
                source: ScoringErrorKind::ReviewAfterReferenceDate { row, .. },
                ..
            } => Some(*row),
            _ => None,
        }
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for ReviewScoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<csv::Error> for ReviewScoreError {
    fn from(err: csv::Error) -> Self {
        Self::load("reading CSV", LoadErrorKind::Csv(err.to_string()))
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// The context string is chained in front of whatever context the error
/// already carries, so a failure deep in a stage reads like a path:
/// `"loading reviews.csv: reading CSV"`.
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure (lazy evaluation).
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<ReviewScoreError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: ReviewScoreError, new_ctx: &str) -> ReviewScoreError {
    match err {
        ReviewScoreError::Load {
            context: existing,
            source,
        } => ReviewScoreError::Load {
            context: chain_context(new_ctx, &existing),
            source,
        },
        ReviewScoreError::Scoring {
            context: existing,
            source,
        } => ReviewScoreError::Scoring {
            context: chain_context(new_ctx, &existing),
            source,
        },
        ReviewScoreError::Io {
            path,
            message,
            source,
        } => ReviewScoreError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        ReviewScoreError::EmptyDataset(msg) => {
            ReviewScoreError::EmptyDataset(chain_context(new_ctx, &msg))
        }
        ReviewScoreError::Config(msg) => ReviewScoreError::Config(chain_context(new_ctx, &msg)),
        // Row-level vote errors already name the row and value
        other @ ReviewScoreError::MalformedVoteField { .. } => other,
    }
}

/// Chain two context strings together.
///
/// If the existing context is empty, returns just the new context.
/// Otherwise, returns "`new_context`: `existing_context`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
