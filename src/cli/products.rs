//! Products command handler.
//!
//! Implements the `products` subcommand, which lists review counts per
//! product so a product can be chosen for `score --product`.

use crate::config::DatasetConfig;
use crate::pipeline::{exit_codes, load_dataset_with_context, write_output, OutputTarget};
use crate::reports::ReportFormat;
use crate::scoring::{product_counts, ProductCount};
use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::path::PathBuf;

/// Inputs of one `products` run.
#[derive(Debug, Clone)]
pub struct ProductsCommand {
    pub dataset: PathBuf,
    pub dataset_config: DatasetConfig,
    /// Rows to print, all when unset
    pub limit: Option<usize>,
    pub format: ReportFormat,
    pub output_file: Option<PathBuf>,
    pub quiet: bool,
}

/// Run the products command, returning the desired exit code.
pub fn run_products(command: &ProductsCommand) -> Result<i32> {
    let dataset =
        load_dataset_with_context(&command.dataset, &command.dataset_config, command.quiet)?;

    let mut counts = product_counts(&dataset);
    let distinct = counts.len();
    if let Some(limit) = command.limit {
        counts.truncate(limit);
    }

    let rendered = render_counts(&counts, distinct, dataset.len(), command.format)?;
    let target = OutputTarget::from_option(command.output_file.clone());
    write_output(&rendered, &target, command.quiet)?;
    Ok(exit_codes::SUCCESS)
}

fn render_counts(
    counts: &[ProductCount],
    distinct: usize,
    total_reviews: usize,
    format: ReportFormat,
) -> Result<String> {
    match format {
        ReportFormat::Json => {
            serde_json::to_string_pretty(counts).context("Failed to serialize product counts")
        }
        ReportFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer.write_record(["product_id", "review_count"])?;
            for c in counts {
                writer.write_record([c.product_id.as_str(), c.review_count.to_string().as_str()])?;
            }
            let bytes = writer
                .into_inner()
                .map_err(|e| e.into_error())
                .context("Failed to flush CSV")?;
            String::from_utf8(bytes).context("CSV output is not UTF-8")
        }
        ReportFormat::Markdown => {
            let mut out = String::from("| Product | Reviews |\n|---------|--------:|\n");
            for c in counts {
                writeln!(out, "| `{}` | {} |", c.product_id, c.review_count)?;
            }
            Ok(out)
        }
        ReportFormat::Summary | ReportFormat::Table => {
            let width = counts
                .iter()
                .map(|c| c.product_id.len())
                .max()
                .unwrap_or(0)
                .max("product".len());
            let mut out = format!("{:<width$}  {:>8}\n", "product", "reviews");
            for c in counts {
                writeln!(out, "{:<width$}  {:>8}", c.product_id, c.review_count)?;
            }
            write!(out, "{distinct} products, {total_reviews} reviews")?;
            Ok(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts() -> Vec<ProductCount> {
        vec![
            ProductCount {
                product_id: "B007WTAJTO".to_string(),
                review_count: 3,
            },
            ProductCount {
                product_id: "A1".to_string(),
                review_count: 1,
            },
        ]
    }

    #[test]
    fn test_text_table() {
        let out = render_counts(&counts(), 2, 4, ReportFormat::Table).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert!(lines[0].starts_with("product"));
        assert!(lines[1].starts_with("B007WTAJTO"));
        assert!(lines[1].ends_with('3'));
        assert_eq!(lines[3], "2 products, 4 reviews");
    }

    #[test]
    fn test_json_and_csv() {
        let json = render_counts(&counts(), 2, 4, ReportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["review_count"], 3);

        let csv = render_counts(&counts(), 2, 4, ReportFormat::Csv).unwrap();
        assert_eq!(csv.lines().next(), Some("product_id,review_count"));
        assert_eq!(csv.lines().count(), 3);
    }

    #[test]
    fn test_markdown() {
        let md = render_counts(&counts(), 2, 4, ReportFormat::Markdown).unwrap();
        assert!(md.contains("| `A1` | 1 |"));
    }
}
