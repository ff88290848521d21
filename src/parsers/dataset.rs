//! Delimited review file loader.

use super::dates::parse_review_date;
use crate::config::DatasetConfig;
use crate::error::{ErrorContext, LoadErrorKind, Result, ReviewScoreError};
use crate::model::{Dataset, Review};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::io::Read;
use std::path::Path;

/// Positions of the configured columns within the header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnIndices {
    product: usize,
    rating: usize,
    date: usize,
    helpful: usize,
    reviewer: Option<usize>,
    summary: Option<usize>,
}

impl ColumnIndices {
    fn resolve(headers: &StringRecord, config: &DatasetConfig) -> Result<Self> {
        let names: Vec<String> = headers.iter().map(str::to_string).collect();
        let find = |name: &str| names.iter().position(|h| h == name);
        let require = |name: &str| {
            find(name).ok_or_else(|| ReviewScoreError::missing_column(name, &names))
        };
        let optional = |name: &Option<String>| {
            let idx = name.as_deref().and_then(find);
            if idx.is_none() {
                if let Some(name) = name {
                    tracing::debug!("Optional column '{name}' not present");
                }
            }
            idx
        };

        Ok(Self {
            product: require(&config.product_column)?,
            rating: require(&config.rating_column)?,
            date: require(&config.date_column)?,
            helpful: require(&config.helpful_column)?,
            reviewer: optional(&config.reviewer_column),
            summary: optional(&config.summary_column),
        })
    }
}

/// Load a review file from disk.
pub fn parse_dataset(path: &Path, config: &DatasetConfig) -> Result<Dataset> {
    let file = std::fs::File::open(path).map_err(|e| ReviewScoreError::io(path, e))?;
    let dataset = parse_dataset_reader(file, config)
        .with_context(|| format!("loading {}", path.display()))?;
    Ok(dataset.with_source(path))
}

/// Load reviews from an in-memory string.
pub fn parse_dataset_str(content: &str, config: &DatasetConfig) -> Result<Dataset> {
    parse_dataset_reader(content.as_bytes(), config)
}

/// Load reviews from any reader producing delimited text with a header row.
///
/// Fails with [`ReviewScoreError::EmptyDataset`] when the input has a header
/// but no data rows.
pub fn parse_dataset_reader<R: Read>(reader: R, config: &DatasetConfig) -> Result<Dataset> {
    let delimiter = u8::try_from(config.delimiter).map_err(|_| {
        ReviewScoreError::config(format!(
            "delimiter {:?} is not a single-byte character",
            config.delimiter
        ))
    })?;

    let mut rdr = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .trim(Trim::Headers)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let columns = ColumnIndices::resolve(&headers, config)?;

    let mut reviews = Vec::new();
    for (row, record) in rdr.records().enumerate() {
        let record = record.with_context(|| format!("row {row}"))?;
        reviews.push(parse_record(row, &record, columns, config)?);
    }

    if reviews.is_empty() {
        return Err(ReviewScoreError::empty_dataset("input has no data rows"));
    }

    tracing::debug!("Loaded {} review rows", reviews.len());
    Ok(Dataset::new(reviews))
}

fn parse_record(
    row: usize,
    record: &StringRecord,
    columns: ColumnIndices,
    config: &DatasetConfig,
) -> Result<Review> {
    let field = |idx: usize| record.get(idx).unwrap_or("").trim();
    let optional = |idx: Option<usize>| {
        idx.map(field)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    };

    let rating_raw = field(columns.rating);
    let rating = rating_raw
        .parse::<f64>()
        .ok()
        .filter(|r| r.is_finite())
        .ok_or_else(|| {
            ReviewScoreError::load(
                "parsing rating",
                LoadErrorKind::InvalidRating {
                    row,
                    value: rating_raw.to_string(),
                },
            )
        })?;

    let date_raw = field(columns.date);
    let review_date =
        parse_review_date(date_raw, config.date_format.as_deref()).ok_or_else(|| {
            ReviewScoreError::load(
                "parsing review date",
                LoadErrorKind::InvalidDate {
                    row,
                    value: date_raw.to_string(),
                },
            )
        })?;

    Ok(Review {
        row,
        product_id: field(columns.product).to_string(),
        rating,
        review_date,
        helpful_raw: field(columns.helpful).to_string(),
        reviewer: optional(columns.reviewer),
        summary: optional(columns.summary),
    })
}
