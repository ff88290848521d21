//! Configuration module for review-scorer.
//!
//! This module provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//! - CLI argument layering
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use review_scorer::config::AppConfig;
//!
//! // Use defaults (reference date 2014-12-08, weights 28/26/24/22, 95%, top 20)
//! let config = AppConfig::default();
//!
//! // Use builder
//! let config = AppConfig::builder()
//!     .confidence(0.99)
//!     .top_n(10)
//!     .build();
//!
//! // Load from file
//! use review_scorer::config::load_or_default;
//! let (config, loaded_from) = load_or_default(None);
//! ```
//!
//! # Configuration File
//!
//! Place a `.review-scorer.yaml` file in your project root or
//! `~/.config/review-scorer/`:
//!
//! ```yaml
//! scoring:
//!   reference_date: 2014-12-08
//!   bucket_weights: [0.28, 0.26, 0.24, 0.22]
//! ranking:
//!   top_n: 20
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{
    default_reference_date, DEFAULT_BUCKET_WEIGHTS, DEFAULT_CONFIDENCE, DEFAULT_TOP_N,
    WEIGHT_SUM_TOLERANCE,
};
pub use types::{
    AppConfig, AppConfigBuilder, ConfigOverrides, DatasetConfig, OutputConfig, RankingConfig,
    ScoringConfig,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    config_search_paths, discover_config_file, generate_full_example_config, load_config_file,
    load_or_default, ConfigFileError, CONFIG_FILE_NAMES,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// This schema documents all configuration options that can be set in
/// `.review-scorer.yaml` config files.
pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}
