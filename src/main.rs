//! review-scorer: recency-weighted product scores and helpful-review ranking
//!
//! Reads a review dataset, scores the most reviewed product and ranks its
//! reviews by the Wilson lower bound of their helpfulness votes.

#![allow(clippy::struct_excessive_bools, clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use review_scorer::{
    cli::{self, parse_delimiter, parse_weights, ProductsCommand, ScoreCommand},
    config::{
        config_search_paths, discover_config_file, generate_full_example_config,
        generate_json_schema, load_or_default, AppConfig, ConfigOverrides, Validatable,
        CONFIG_FILE_NAMES,
    },
    pipeline::exit_codes,
    reports::ReportFormat,
    scoring::{EmptyBucketPolicy, RankingKey},
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with defaults info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nDefaults:",
        "\n  reference date  2014-12-08",
        "\n  bucket weights  0.28, 0.26, 0.24, 0.22 (most recent first)",
        "\n  confidence      0.95",
        "\n  top-n           20",
        "\n\nOutput Formats:",
        "\n  summary, table, json, csv, markdown"
    )
}

#[derive(Parser)]
#[command(name = "review-scorer")]
#[command(author = "review-scorer contributors")]
#[command(version, long_version = build_long_version())]
#[command(
    about = "Recency-weighted product scoring and Wilson lower-bound review ranking",
    long_about = None
)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  Weighted score below --min-score
    2  Error occurred

EXAMPLES:
    # Score the most reviewed product
    review-scorer score reviews.csv

    # Full ranking table for one product
    review-scorer score reviews.csv --product B007WTAJTO -o table

    # CI gate on the weighted score
    review-scorer score reviews.csv --min-score 4.0 -o json -O score.json

    # Which products have the most reviews?
    review-scorer products reviews.csv --limit 10")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "REVIEW_SCORER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

// ============================================================================
// Command argument structs
// ============================================================================

/// Input layout flags shared by commands that read a dataset
#[derive(Parser)]
struct DatasetArgs {
    /// Path to the review file (CSV with a header row)
    dataset: PathBuf,

    /// Field delimiter (single character, or `tab`)
    #[arg(long, value_parser = parse_delimiter)]
    delimiter: Option<char>,

    /// Explicit chrono date format for the review date column (e.g. "%d/%m/%Y")
    #[arg(long)]
    date_format: Option<String>,
}

/// Arguments for the `score` subcommand
#[derive(Parser)]
struct ScoreArgs {
    #[command(flatten)]
    input: DatasetArgs,

    /// Score this product instead of the most reviewed one
    #[arg(short, long)]
    product: Option<String>,

    /// Date treated as "now" when computing review age (YYYY-MM-DD)
    #[arg(long)]
    reference_date: Option<NaiveDate>,

    /// Recency bucket weights, most recent first (e.g. 0.28,0.26,0.24,0.22)
    #[arg(long, value_parser = parse_weights, allow_hyphen_values = true)]
    weights: Option<[f64; 4]>,

    /// How to treat recency buckets without reviews
    #[arg(long, value_enum)]
    empty_buckets: Option<EmptyBucketPolicy>,

    /// Confidence level of the Wilson interval, in (0, 1)
    #[arg(long)]
    confidence: Option<f64>,

    /// Number of reviews to keep in the ranking
    #[arg(short = 'n', long)]
    top_n: Option<usize>,

    /// Ranking key
    #[arg(long, value_enum)]
    sort_by: Option<RankingKey>,

    /// Output format
    #[arg(short, long, value_enum)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Exit with code 1 if the weighted score is below this value
    #[arg(long)]
    min_score: Option<f64>,
}

/// Arguments for the `products` subcommand
#[derive(Parser)]
struct ProductsArgs {
    #[command(flatten)]
    input: DatasetArgs,

    /// Show only the N most reviewed products
    #[arg(short, long)]
    limit: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a product and rank its reviews by helpfulness
    Score(ScoreArgs),

    /// List review counts per product
    Products(ProductsArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .review-scorer.yaml in the current directory
    Init,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    let exit_code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            exit_codes::ERROR
        }
    };
    std::process::exit(exit_code);
}

/// Dispatch to command handlers, returning the process exit code.
fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Score(args) => {
            let overrides = ConfigOverrides {
                product: args.product,
                reference_date: args.reference_date,
                bucket_weights: args.weights,
                empty_buckets: args.empty_buckets,
                confidence: args.confidence,
                top_n: args.top_n,
                sort_by: args.sort_by,
                delimiter: args.input.delimiter,
                date_format: args.input.date_format,
                format: args.output,
                output_file: args.output_file,
                no_color: cli.no_color,
            };
            let config = effective_config(cli.config.as_deref(), &overrides)?;

            cli::run_score(&ScoreCommand {
                dataset: args.input.dataset,
                config,
                min_score: args.min_score,
                quiet: cli.quiet,
            })
        }

        Commands::Products(args) => {
            let overrides = ConfigOverrides {
                delimiter: args.input.delimiter,
                date_format: args.input.date_format,
                ..Default::default()
            };
            let config = effective_config(cli.config.as_deref(), &overrides)?;

            cli::run_products(&ProductsCommand {
                dataset: args.input.dataset,
                dataset_config: config.dataset,
                limit: args.limit,
                format: args.output,
                output_file: args.output_file,
                quiet: cli.quiet,
            })
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "review-scorer", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema { output } => {
            let schema = generate_json_schema().context("failed to generate schema")?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) = load_or_default(cli.config.as_deref());
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Path => {
                eprintln!("Config file search paths (in order):");
                for path in config_search_paths() {
                    eprintln!("  {}", path.display());
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in CONFIG_FILE_NAMES {
                    eprintln!("  {name}");
                }
                eprintln!();
                match discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".review-scorer.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                std::fs::write(&target, generate_full_example_config())
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(exit_codes::SUCCESS)
            }
        },
    }
}

/// Defaults, then the config file, then CLI flags; rejected if invalid.
fn effective_config(
    config_path: Option<&std::path::Path>,
    overrides: &ConfigOverrides,
) -> Result<AppConfig> {
    let (config, loaded_from) = AppConfig::from_file_with_overrides(config_path, overrides);
    if let Some(path) = loaded_from {
        tracing::debug!("Using config file {}", path.display());
    }

    let errors = config.validate();
    if !errors.is_empty() {
        let details: Vec<String> = errors.iter().map(ToString::to_string).collect();
        anyhow::bail!("invalid configuration:\n  {}", details.join("\n  "));
    }
    Ok(config)
}
