//! Dataset loading stage.

use super::PipelineError;
use crate::config::DatasetConfig;
use crate::model::Dataset;
use std::path::Path;

/// Load the dataset at `path`, tagging failures with the load stage.
pub fn load_dataset_with_context(
    path: &Path,
    config: &DatasetConfig,
    quiet: bool,
) -> Result<Dataset, PipelineError> {
    if !quiet {
        tracing::info!("Loading reviews: {:?}", path);
    }

    let dataset =
        crate::parsers::parse_dataset(path, config).map_err(|source| PipelineError::LoadFailed {
            path: path.display().to_string(),
            source,
        })?;

    if !quiet {
        tracing::info!("Loaded {} reviews", dataset.len());
    }
    Ok(dataset)
}
