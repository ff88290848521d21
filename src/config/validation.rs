//! Configuration validation for review-scorer.
//!
//! Provides validation traits and implementations for all configuration types.

use super::defaults::WEIGHT_SUM_TOLERANCE;
use super::types::{AppConfig, DatasetConfig, OutputConfig, RankingConfig, ScoringConfig};

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.dataset.validate());
        errors.extend(self.scoring.validate());
        errors.extend(self.ranking.validate());
        errors.extend(self.output.validate());
        errors
    }
}

impl Validatable for DatasetConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if !self.delimiter.is_ascii() {
            errors.push(ConfigError::new(
                "dataset.delimiter",
                format!("Delimiter must be a single ASCII character, got {:?}", self.delimiter),
            ));
        }

        let required = [
            ("dataset.product_column", &self.product_column),
            ("dataset.rating_column", &self.rating_column),
            ("dataset.date_column", &self.date_column),
            ("dataset.helpful_column", &self.helpful_column),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                errors.push(ConfigError::new(field, "Column name must not be empty"));
            }
        }

        errors
    }
}

impl Validatable for ScoringConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Some(w) = self.bucket_weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
            errors.push(ConfigError::new(
                "scoring.bucket_weights",
                format!("Weights must be finite and non-negative, got {w}"),
            ));
        }

        let sum: f64 = self.bucket_weights.iter().sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            errors.push(ConfigError::new(
                "scoring.bucket_weights",
                format!("Weights must sum to 1.0, got {sum}"),
            ));
        }

        if let Some(ref product) = self.product {
            if product.trim().is_empty() {
                errors.push(ConfigError::new(
                    "scoring.product",
                    "Product identifier must not be empty",
                ));
            }
        }

        errors
    }
}

impl Validatable for RankingConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if !(self.confidence > 0.0 && self.confidence < 1.0) {
            errors.push(ConfigError::new(
                "ranking.confidence",
                format!(
                    "Confidence must be strictly between 0.0 and 1.0, got {}",
                    self.confidence
                ),
            ));
        }

        if self.top_n == 0 {
            errors.push(ConfigError::new("ranking.top_n", "top_n must be at least 1"));
        }

        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Some(parent) = self.file.as_ref().and_then(|f| f.parent()) {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                errors.push(ConfigError::new(
                    "output.file",
                    format!("Parent directory does not exist: {}", parent.display()),
                ));
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.is_valid(), "{:?}", config.validate());
    }

    #[test]
    fn test_weights_must_sum_to_one() {
        let config = ScoringConfig {
            bucket_weights: [0.3, 0.3, 0.3, 0.3],
            ..Default::default()
        };
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "scoring.bucket_weights");
    }

    #[test]
    fn test_negative_weight_rejected() {
        let config = ScoringConfig {
            bucket_weights: [1.2, -0.2, 0.0, 0.0],
            ..Default::default()
        };
        assert!(config
            .validate()
            .iter()
            .any(|e| e.message.contains("non-negative")));
    }

    #[test]
    fn test_confidence_bounds() {
        for confidence in [0.0, 1.0, -0.5, 1.5, f64::NAN] {
            let config = RankingConfig {
                confidence,
                ..Default::default()
            };
            assert!(!config.is_valid(), "confidence {confidence} should be rejected");
        }
        let config = RankingConfig {
            confidence: 0.99,
            ..Default::default()
        };
        assert!(config.is_valid());
    }

    #[test]
    fn test_top_n_zero_rejected() {
        let config = RankingConfig {
            top_n: 0,
            ..Default::default()
        };
        assert_eq!(config.validate()[0].field, "ranking.top_n");
    }

    #[test]
    fn test_empty_column_rejected() {
        let config = DatasetConfig {
            helpful_column: "  ".to_string(),
            ..Default::default()
        };
        assert_eq!(config.validate()[0].field, "dataset.helpful_column");
    }

    #[test]
    fn test_non_ascii_delimiter_rejected() {
        let config = DatasetConfig {
            delimiter: '§',
            ..Default::default()
        };
        assert_eq!(config.validate()[0].field, "dataset.delimiter");
    }

    #[test]
    fn test_output_parent_must_exist() {
        let config = OutputConfig {
            file: Some(PathBuf::from("/nonexistent-dir-for-test/report.json")),
            ..Default::default()
        };
        assert!(!config.is_valid());
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::new("ranking.top_n", "too small");
        assert_eq!(err.to_string(), "ranking.top_n: too small");
    }
}
