//! Summary and table report generators for shell output.

use super::escape::truncate_cell;
use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator, ScoringReport};
use crate::model::RankedReview;
use std::fmt::Write as _;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Color a 1-5 star score by how good it is.
fn score_color(score: f64) -> &'static str {
    if score >= 4.0 {
        "green"
    } else if score >= 3.0 {
        "yellow"
    } else {
        "red"
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate(
        &self,
        report: &ScoringReport,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();
        let score = &report.product_score;

        lines.push(self.color(config.title_or_default(), "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));

        let how = if report.selection.explicit {
            "selected"
        } else {
            "most reviewed"
        };
        lines.push(format!(
            "{}  {} ({}, {} of {} products)",
            self.color("Product:", "cyan"),
            report.selection.product_id,
            how,
            report.selection.review_count,
            report.selection.distinct_products
        ));
        lines.push(format!(
            "{}  as of {}",
            self.color("Reference:", "cyan"),
            score.reference_date
        ));
        lines.push(String::new());

        lines.push(self.color("Product score:", "bold"));
        lines.push(format!(
            "  simple average    {}",
            self.color(
                &format!("{:.4}", score.simple_avg_score),
                score_color(score.simple_avg_score)
            )
        ));
        lines.push(format!(
            "  recency weighted  {}",
            self.color(
                &format!("{:.4}", score.weighted_avg_score),
                score_color(score.weighted_avg_score)
            )
        ));
        if !score.empty_buckets.is_empty() {
            lines.push(format!(
                "  {}",
                self.color(
                    &format!(
                        "empty buckets {:?} ({})",
                        score.empty_buckets, score.empty_bucket_policy
                    ),
                    "yellow"
                )
            ));
        }
        lines.push(String::new());

        lines.push(self.color("Helpfulness:", "bold"));
        lines.push(format!(
            "  {} votes, {} helpful, {} not helpful",
            report.votes.total_vote, report.votes.helpful_yes, report.votes.helpful_no
        ));
        match report.ranking.best() {
            Some(best) => lines.push(format!(
                "  top review: row {} (wilson {:.4}, {}/{} helpful)",
                best.row, best.wilson_lower_bound, best.helpful_yes, best.total_vote
            )),
            None => lines.push(format!("  {}", self.color("No reviews ranked", "dim"))),
        }

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}

/// Table reporter for terminal output
pub struct TableReporter {
    /// Use colored output
    colored: bool,
}

impl TableReporter {
    /// Create a new table reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn ranking_row(row: &RankedReview) -> String {
        let who = row.reviewer.as_deref().unwrap_or("-");
        let summary = row.summary.as_deref().unwrap_or("");
        format!(
            "{:>4}  {:>6}  {:>4.1}  {:>5}  {:>5}  {:>6}  {:>6.3}  {:>7.4}  {:<18}  {}",
            row.rank,
            row.row,
            row.rating,
            row.helpful_yes,
            row.helpful_no,
            row.score_pos_neg_diff,
            row.score_average_rating,
            row.wilson_lower_bound,
            truncate_cell(who, 18),
            truncate_cell(summary, 40)
        )
    }
}

impl Default for TableReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for TableReporter {
    fn generate(
        &self,
        report: &ScoringReport,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut out = String::new();
        let score = &report.product_score;

        writeln!(
            out,
            "{}",
            self.color(
                &format!(
                    "{} · {} ({} reviews)",
                    config.title_or_default(),
                    report.selection.product_id,
                    report.selection.review_count
                ),
                "bold"
            )
        )?;
        writeln!(
            out,
            "simple {:.4}  weighted {:.4}  reference {}",
            score.simple_avg_score, score.weighted_avg_score, score.reference_date
        )?;

        if config.include_buckets {
            writeln!(out)?;
            let header = format!(
                "{:>6}  {:>10}  {:>10}  {:>6}  {:>8}  {:>6}  {:>6}",
                "bucket", "after", "up to", "count", "mean", "weight", "eff."
            );
            writeln!(out, "{}", self.color(&header, "cyan"))?;
            for b in &score.buckets {
                let bound = |v: Option<f64>| v.map_or_else(|| "-".to_string(), |d| format!("{d:.1}d"));
                let mean = b
                    .mean_rating
                    .map_or_else(|| "-".to_string(), |m| format!("{m:.4}"));
                let line = format!(
                    "{:>6}  {:>10}  {:>10}  {:>6}  {:>8}  {:>6.2}  {:>6.3}",
                    b.index,
                    bound(b.lower_days),
                    bound(b.upper_days),
                    b.review_count,
                    mean,
                    b.weight,
                    b.effective_weight
                );
                if b.review_count == 0 {
                    writeln!(out, "{}", self.color(&line, "dim"))?;
                } else {
                    writeln!(out, "{line}")?;
                }
            }
        }

        writeln!(out)?;
        let header = format!(
            "{:>4}  {:>6}  {:>4}  {:>5}  {:>5}  {:>6}  {:>6}  {:>7}  {:<18}  {}",
            "rank", "row", "star", "yes", "no", "diff", "ratio", "wilson", "reviewer", "summary"
        );
        writeln!(out, "{}", self.color(&header, "cyan"))?;

        let limit = config.row_limit(report.ranking.rows.len());
        for row in report.ranking.rows.iter().take(limit) {
            writeln!(out, "{}", Self::ranking_row(row))?;
        }
        write!(
            out,
            "{}",
            self.color(
                &format!(
                    "{} of {} reviews, sorted by {} at {:.0}% confidence",
                    limit,
                    report.ranking.total_candidates,
                    report.ranking.sort_by,
                    report.ranking.confidence * 100.0
                ),
                "dim"
            )
        )?;

        Ok(out)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::test_support::sample_report;

    #[test]
    fn test_summary_plain() {
        let out = SummaryReporter::new()
            .no_color()
            .generate(&sample_report(), &ReportConfig::default())
            .unwrap();
        assert!(out.contains("B00TEST"));
        assert!(out.contains("most reviewed"));
        assert!(out.contains("recency weighted"));
        assert!(out.contains("16 votes"));
        assert!(!out.contains('\x1b'));
    }

    #[test]
    fn test_summary_colored() {
        let out = SummaryReporter::new()
            .generate(&sample_report(), &ReportConfig::default())
            .unwrap();
        assert!(out.contains("\x1b[1m"));
    }

    #[test]
    fn test_table_lists_every_ranked_row() {
        let report = sample_report();
        let out = TableReporter::new()
            .no_color()
            .generate(&report, &ReportConfig::default())
            .unwrap();
        for row in &report.ranking.rows {
            assert!(
                out.lines().any(|l| l.trim_start().starts_with(&format!("{}  ", row.rank))),
                "rank {} missing:\n{out}",
                row.rank
            );
        }
        assert!(out.contains("sorted by wilson at 95% confidence"));
        assert!(out.contains("bucket"));
    }

    #[test]
    fn test_table_without_buckets() {
        let config = ReportConfig {
            include_buckets: false,
            max_rows: Some(1),
            ..Default::default()
        };
        let out = TableReporter::new()
            .no_color()
            .generate(&sample_report(), &config)
            .unwrap();
        assert!(!out.contains("bucket"));
        assert!(out.contains("1 of 4 reviews"));
    }

    #[test]
    fn test_ansi_color_helper() {
        assert_eq!(ansi_color("x", "red", false), "x");
        assert_eq!(ansi_color("x", "red", true), "\x1b[31mx\x1b[0m");
        assert_eq!(score_color(4.2), "green");
        assert_eq!(score_color(1.0), "red");
    }
}
