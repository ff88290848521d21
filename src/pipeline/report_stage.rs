//! Report output stage.
//!
//! Handles rendering a scoring report and writing it to stdout or a file.

use crate::config::OutputConfig;
use crate::reports::{create_reporter_with_options, ReportConfig, ScoringReport};
use anyhow::{Context, Result};

use super::{should_use_color, write_output, OutputTarget};

/// Report options derived from the output configuration.
#[must_use]
pub fn build_report_config(config: &OutputConfig) -> ReportConfig {
    ReportConfig {
        title: config.title.clone(),
        ..Default::default()
    }
}

/// Render `report` in the configured format.
pub fn render_report(
    report: &ScoringReport,
    config: &OutputConfig,
    use_color: bool,
) -> Result<String> {
    let reporter = create_reporter_with_options(config.format, use_color);
    reporter
        .generate(report, &build_report_config(config))
        .with_context(|| format!("Failed to render {} report", config.format))
}

/// Output a scoring report to the configured destination.
pub fn output_report(report: &ScoringReport, config: &OutputConfig, quiet: bool) -> Result<()> {
    let target = OutputTarget::from_option(config.file.clone());
    let use_color = should_use_color(config.no_color, &target);
    let rendered = render_report(report, config, use_color)?;
    write_output(&rendered, &target, quiet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::test_support::sample_report;
    use crate::reports::ReportFormat;
    use tempfile::TempDir;

    #[test]
    fn test_output_report_to_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.json");
        let config = OutputConfig {
            format: ReportFormat::Json,
            file: Some(path.clone()),
            ..Default::default()
        };
        output_report(&sample_report(), &config, true).unwrap();

        let content = std::fs::read_to_string(path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["selection"]["product_id"], "B00TEST");
    }

    #[test]
    fn test_render_honours_title() {
        let config = OutputConfig {
            format: ReportFormat::Markdown,
            title: Some("Weekly review digest".to_string()),
            ..Default::default()
        };
        let md = render_report(&sample_report(), &config, false).unwrap();
        assert!(md.starts_with("# Weekly review digest"));
    }
}
