//! Score command handler.
//!
//! Implements the `score` subcommand: the full load → score → rank → report
//! run for one product.

use crate::config::AppConfig;
use crate::pipeline::{exit_codes, load_dataset_with_context, output_report, run_pipeline};
use anyhow::Result;
use std::path::PathBuf;

/// Inputs of one `score` run.
#[derive(Debug, Clone)]
pub struct ScoreCommand {
    /// Review file to read
    pub dataset: PathBuf,
    /// Effective configuration (defaults, file and flags merged)
    pub config: AppConfig,
    /// Fail with [`exit_codes::BELOW_THRESHOLD`] when the weighted score is lower
    pub min_score: Option<f64>,
    pub quiet: bool,
}

/// Run the score command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_score(command: &ScoreCommand) -> Result<i32> {
    let dataset =
        load_dataset_with_context(&command.dataset, &command.config.dataset, command.quiet)?;
    let report = run_pipeline(&dataset, &command.config)?;

    output_report(&report, &command.config.output, command.quiet)?;

    Ok(determine_exit_code(
        report.product_score.weighted_avg_score,
        command.min_score,
    ))
}

/// Exit code for a finished run given the optional score threshold.
fn determine_exit_code(weighted_avg_score: f64, min_score: Option<f64>) -> i32 {
    match min_score {
        Some(min) if weighted_avg_score < min => {
            tracing::warn!("Weighted score {weighted_avg_score:.4} is below the minimum {min}");
            exit_codes::BELOW_THRESHOLD
        }
        _ => exit_codes::SUCCESS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::ReportFormat;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn dataset_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "asin,overall,reviewTime,helpful").unwrap();
        writeln!(file, "A,5,01/01/2014,\"[1, 1]\"").unwrap();
        writeln!(file, "A,4,01/03/2014,\"[2, 3]\"").unwrap();
        writeln!(file, "A,3,01/06/2014,\"[0, 0]\"").unwrap();
        writeln!(file, "A,2,01/09/2014,\"[0, 4]\"").unwrap();
        file
    }

    #[test]
    fn test_threshold() {
        assert_eq!(determine_exit_code(3.0, None), exit_codes::SUCCESS);
        assert_eq!(determine_exit_code(3.0, Some(2.5)), exit_codes::SUCCESS);
        assert_eq!(determine_exit_code(3.0, Some(3.5)), exit_codes::BELOW_THRESHOLD);
    }

    #[test]
    fn test_run_score_to_file() {
        let input = dataset_file();
        let out_dir = TempDir::new().unwrap();
        let out = out_dir.path().join("report.json");
        let config = AppConfig::builder()
            .output_format(ReportFormat::Json)
            .output_file(Some(out.clone()))
            .build();
        let command = ScoreCommand {
            dataset: input.path().to_path_buf(),
            config,
            min_score: Some(5.0),
            quiet: true,
        };

        assert_eq!(run_score(&command).unwrap(), exit_codes::BELOW_THRESHOLD);
        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(out).unwrap()).unwrap();
        assert_eq!(value["product_score"]["review_count"], 4);
    }

    #[test]
    fn test_run_score_missing_file() {
        let command = ScoreCommand {
            dataset: PathBuf::from("/nonexistent/reviews.csv"),
            config: AppConfig::default(),
            min_score: None,
            quiet: true,
        };
        assert!(run_score(&command).is_err());
    }
}
