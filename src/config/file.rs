//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::{AppConfig, ConfigOverrides};
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".review-scorer.yaml",
    ".review-scorer.yml",
    "review-scorer.yaml",
    "review-scorer.yml",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. Git repository root (if in a repo)
/// 4. User config directory (~/.config/review-scorer/)
/// 5. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    if let Ok(cwd) = std::env::current_dir() {
        if let Some(path) = find_config_in_dir(&cwd) {
            return Some(path);
        }
    }

    if let Some(git_root) = find_git_root() {
        if let Some(path) = find_config_in_dir(&git_root) {
            return Some(path);
        }
    }

    if let Some(config_dir) = dirs::config_dir() {
        if let Some(path) = find_config_in_dir(&config_dir.join("review-scorer")) {
            return Some(path);
        }
    }

    dirs::home_dir().and_then(|home| find_config_in_dir(&home))
}

/// Directories searched for a config file, in order.
#[must_use]
pub fn config_search_paths() -> Vec<PathBuf> {
    [
        std::env::current_dir().ok(),
        find_git_root(),
        dirs::config_dir().map(|p| p.join("review-scorer")),
        dirs::home_dir(),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Find the git repository root by walking up the directory tree.
fn find_git_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let mut current = cwd.as_path();

    loop {
        if current.join(".git").exists() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    /// File not found
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// IO error reading file
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// YAML parsing error
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => {
                tracing::debug!("Loaded config from {}", path.display());
                (config, Some(path))
            }
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl AppConfig {
    /// Layer command-line values over this configuration.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if overrides.product.is_some() {
            self.scoring.product.clone_from(&overrides.product);
        }
        if let Some(date) = overrides.reference_date {
            self.scoring.reference_date = date;
        }
        if let Some(weights) = overrides.bucket_weights {
            self.scoring.bucket_weights = weights;
        }
        if let Some(policy) = overrides.empty_buckets {
            self.scoring.empty_buckets = policy;
        }

        if let Some(confidence) = overrides.confidence {
            self.ranking.confidence = confidence;
        }
        if let Some(top_n) = overrides.top_n {
            self.ranking.top_n = top_n;
        }
        if let Some(key) = overrides.sort_by {
            self.ranking.sort_by = key;
        }

        if let Some(delimiter) = overrides.delimiter {
            self.dataset.delimiter = delimiter;
        }
        if overrides.date_format.is_some() {
            self.dataset.date_format.clone_from(&overrides.date_format);
        }

        if let Some(format) = overrides.format {
            self.output.format = format;
        }
        if overrides.output_file.is_some() {
            self.output.file.clone_from(&overrides.output_file);
        }
        if overrides.no_color {
            self.output.no_color = true;
        }
    }

    /// Load from file and layer CLI overrides on top.
    #[must_use]
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        overrides: &ConfigOverrides,
    ) -> (Self, Option<PathBuf>) {
        let (mut config, loaded_from) = load_or_default(config_path);
        config.apply_overrides(overrides);
        (config, loaded_from)
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_full_example_config() -> String {
    r"# review-scorer configuration
# ============================
#
# Place this file at:
#   - .review-scorer.yaml in your project root
#   - ~/.config/review-scorer/review-scorer.yaml for global config
#
# CLI arguments always override file settings.

# Input file layout
dataset:
  delimiter: ','
  product_column: asin
  rating_column: overall
  date_column: reviewTime
  helpful_column: helpful
  reviewer_column: reviewerName
  summary_column: summary
  # Explicit chrono format; day-first formats are tried when omitted
  # date_format: '%d/%m/%Y'

# Product score
scoring:
  # Snapshot date treated as 'now'
  reference_date: 2014-12-08
  # Recency bucket weights, most recent quartile first (must sum to 1)
  bucket_weights: [0.28, 0.26, 0.24, 0.22]
  # Empty bucket handling: renormalize, strict, zero
  empty_buckets: renormalize
  # Score a specific product instead of the most reviewed one
  # product: B007WTAJTO

# Review ranking
ranking:
  confidence: 0.95
  top_n: 20
  # Sort key: wilson, pos-neg-diff, average-rating
  sort_by: wilson

# Output configuration
output:
  # Format: summary, table, json, csv, markdown
  format: summary
  # file: report.json
  no_color: false
  # title: Weekly review digest
"
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================
