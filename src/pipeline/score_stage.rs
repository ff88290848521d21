//! Selection, scoring and ranking stages.

use super::PipelineError;
use crate::config::AppConfig;
use crate::model::{Dataset, ProductSubset};
use crate::parsers::{check_vote_consistency, parse_votes};
use crate::reports::{ReportMetadata, ScoringReport};
use crate::scoring::{
    select_most_reviewed, select_product, HelpfulnessRanker, ProductSelection, RecencyScorer,
};

/// Choose the product to score and build its subset.
///
/// Uses the configured product when one is set, the most reviewed product
/// otherwise.
pub fn select_stage(
    dataset: &Dataset,
    config: &AppConfig,
) -> Result<(ProductSelection, ProductSubset), PipelineError> {
    let selection = match config.scoring.product.as_deref() {
        Some(product_id) => select_product(dataset, product_id),
        None => select_most_reviewed(dataset),
    }
    .map_err(|source| PipelineError::SelectFailed { source })?;

    let subset = ProductSubset::from_dataset(dataset, &selection.product_id)
        .map_err(|source| PipelineError::SelectFailed { source })?;

    Ok((selection, subset))
}

/// Run every stage after loading and collect the results.
///
/// Stages run strictly in order; the first failure aborts the run, so a
/// report is never built from a partial ranking.
pub fn run_pipeline(dataset: &Dataset, config: &AppConfig) -> Result<ScoringReport, PipelineError> {
    let (selection, subset) = select_stage(dataset, config)?;

    let product_score = RecencyScorer::from_config(&config.scoring)
        .score(&subset)
        .map_err(|source| PipelineError::ScoreFailed { source })?;

    let voted = parse_votes(&subset).map_err(|source| PipelineError::VotesFailed { source })?;
    let votes =
        check_vote_consistency(&voted).map_err(|source| PipelineError::VotesFailed { source })?;

    let ranking = HelpfulnessRanker::from_config(&config.ranking)
        .map_err(|source| PipelineError::RankFailed { source })?
        .rank(&voted);

    tracing::info!(
        "Ranked top {} of {} reviews by {}",
        ranking.rows.len(),
        ranking.total_candidates,
        ranking.sort_by
    );

    let metadata = ReportMetadata {
        dataset_path: dataset.source.as_ref().map(|p| p.display().to_string()),
        dataset_rows: dataset.len(),
        ..ReportMetadata::new()
    };

    Ok(ScoringReport {
        metadata,
        selection,
        product_score,
        votes,
        ranking,
    })
}
