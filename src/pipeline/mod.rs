//! Pipeline orchestration for review scoring.
//!
//! This module provides the load → select → score → votes → rank → report
//! workflow shared by the CLI command handlers. Every stage failure is
//! wrapped in a [`PipelineError`] that names the stage.

mod load;
mod output;
mod report_stage;
mod score_stage;

pub use load::load_dataset_with_context;
pub use output::{should_use_color, write_output, OutputTarget};
pub use report_stage::{build_report_config, output_report, render_report};
pub use score_stage::{run_pipeline, select_stage};

use crate::error::ReviewScoreError;

/// Structured pipeline error types for better diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Failed to read or parse the dataset file
    #[error("Load failed for {path}: {source}")]
    LoadFailed {
        path: String,
        #[source]
        source: ReviewScoreError,
    },

    /// No product could be selected
    #[error("Product selection failed: {source}")]
    SelectFailed {
        #[source]
        source: ReviewScoreError,
    },

    /// Product score computation failed
    #[error("Product scoring failed: {source}")]
    ScoreFailed {
        #[source]
        source: ReviewScoreError,
    },

    /// A vote field could not be parsed or the totals disagree
    #[error("Vote parsing failed: {source}")]
    VotesFailed {
        #[source]
        source: ReviewScoreError,
    },

    /// Review ranking failed
    #[error("Ranking failed: {source}")]
    RankFailed {
        #[source]
        source: ReviewScoreError,
    },
}

impl PipelineError {
    /// Short name of the stage that failed
    #[must_use]
    pub const fn stage(&self) -> &'static str {
        match self {
            Self::LoadFailed { .. } => "load",
            Self::SelectFailed { .. } => "select",
            Self::ScoreFailed { .. } => "score",
            Self::VotesFailed { .. } => "votes",
            Self::RankFailed { .. } => "rank",
        }
    }

    /// The underlying library error
    #[must_use]
    pub const fn inner(&self) -> &ReviewScoreError {
        match self {
            Self::LoadFailed { source, .. }
            | Self::SelectFailed { source }
            | Self::ScoreFailed { source }
            | Self::VotesFailed { source }
            | Self::RankFailed { source } => source,
        }
    }
}

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success
    pub const SUCCESS: i32 = 0;
    /// Weighted product score fell below `--min-score`
    pub const BELOW_THRESHOLD: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 2;
}
