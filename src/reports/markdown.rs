//! Markdown report generator.

use super::escape::{escape_markdown_table, escape_md_opt};
use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator, ScoringReport};
use std::fmt::Write;

/// Markdown report generator
pub struct MarkdownReporter {
    /// Include table of contents
    include_toc: bool,
}

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { include_toc: true }
    }

    /// Set whether to include table of contents
    #[must_use]
    pub const fn include_toc(mut self, include: bool) -> Self {
        self.include_toc = include;
        self
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(
        &self,
        report: &ScoringReport,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut md = String::new();
        let score = &report.product_score;

        writeln!(md, "# {}\n", escape_markdown_table(config.title_or_default()))?;
        writeln!(
            md,
            "**Product:** `{}` · **Reviews:** {} · **Reference date:** {}\n",
            report.selection.product_id, report.selection.review_count, score.reference_date
        )?;
        if let Some(path) = &report.metadata.dataset_path {
            writeln!(
                md,
                "_Dataset: {} ({} rows), review-scorer {}_\n",
                escape_markdown_table(path),
                report.metadata.dataset_rows,
                report.metadata.tool_version
            )?;
        }

        if self.include_toc {
            writeln!(md, "## Contents\n")?;
            writeln!(md, "- [Product Score](#product-score)")?;
            writeln!(md, "- [Helpful Reviews](#helpful-reviews)\n")?;
        }

        writeln!(md, "## Product Score\n")?;
        writeln!(md, "| Metric | Value |")?;
        writeln!(md, "|--------|-------|")?;
        writeln!(md, "| Simple average | {:.4} |", score.simple_avg_score)?;
        writeln!(md, "| Recency-weighted average | {:.4} |", score.weighted_avg_score)?;
        writeln!(
            md,
            "| Age quartiles (days) | {:.1} / {:.1} / {:.1} |\n",
            score.quartiles.q1, score.quartiles.q2, score.quartiles.q3
        )?;

        if config.include_buckets {
            writeln!(md, "| Bucket | Reviews | Mean rating | Weight | Effective weight |")?;
            writeln!(md, "|-------:|--------:|------------:|-------:|-----------------:|")?;
            for b in &score.buckets {
                let mean = b
                    .mean_rating
                    .map_or_else(|| "-".to_string(), |m| format!("{m:.4}"));
                writeln!(
                    md,
                    "| {} | {} | {} | {:.2} | {:.3} |",
                    b.index, b.review_count, mean, b.weight, b.effective_weight
                )?;
            }
            writeln!(md)?;
            if !score.empty_buckets.is_empty() {
                writeln!(
                    md,
                    "> Empty buckets {:?} handled with the `{}` policy.\n",
                    score.empty_buckets, score.empty_bucket_policy
                )?;
            }
        }

        writeln!(md, "## Helpful Reviews\n")?;
        writeln!(
            md,
            "Ranked by `{}` at {:.0}% confidence; {} helpful of {} votes.\n",
            report.ranking.sort_by,
            report.ranking.confidence * 100.0,
            report.votes.helpful_yes,
            report.votes.total_vote
        )?;
        writeln!(
            md,
            "| Rank | Row | Rating | Reviewer | Summary | Yes | No | Diff | Ratio | Wilson |"
        )?;
        writeln!(
            md,
            "|-----:|----:|-------:|----------|---------|----:|---:|-----:|------:|-------:|"
        )?;
        let limit = config.row_limit(report.ranking.rows.len());
        for row in report.ranking.rows.iter().take(limit) {
            writeln!(
                md,
                "| {} | {} | {:.1} | {} | {} | {} | {} | {} | {:.3} | {:.4} |",
                row.rank,
                row.row,
                row.rating,
                escape_md_opt(row.reviewer.as_deref()),
                escape_md_opt(row.summary.as_deref()),
                row.helpful_yes,
                row.helpful_no,
                row.score_pos_neg_diff,
                row.score_average_rating,
                row.wilson_lower_bound
            )?;
        }

        Ok(md)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Markdown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::test_support::sample_report;

    #[test]
    fn test_markdown_sections() {
        let report = sample_report();
        let md = MarkdownReporter::new()
            .generate(&report, &ReportConfig::default())
            .unwrap();
        assert!(md.starts_with("# Review Score Report"));
        assert!(md.contains("## Product Score"));
        assert!(md.contains("## Helpful Reviews"));
        assert!(md.contains("[Product Score](#product-score)"));

        let section = md.split("## Helpful Reviews").nth(1).unwrap();
        let ranked_lines = section.lines().filter(|l| l.starts_with("| ")).count();
        // Header row plus one line per ranked review
        assert_eq!(ranked_lines, report.ranking.rows.len() + 1);
    }

    #[test]
    fn test_untrusted_text_escaped() {
        let md = MarkdownReporter::new()
            .include_toc(false)
            .generate(&sample_report(), &ReportConfig::default())
            .unwrap();
        assert!(md.contains("Ann \\| Co"));
        assert!(!md.contains("## Contents"));
    }
}
