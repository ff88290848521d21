//! Review dataset parsers.
//!
//! Reads a delimited review file with a header row into a [`Dataset`],
//! and decodes the packed `[yes, total]` helpfulness field.
//!
//! ## Usage
//!
//! ```no_run
//! use review_scorer::config::DatasetConfig;
//! use review_scorer::parsers::parse_dataset;
//! use std::path::Path;
//!
//! let dataset = parse_dataset(Path::new("reviews.csv"), &DatasetConfig::default()).unwrap();
//! println!("{} rows", dataset.len());
//! ```
//!
//! [`Dataset`]: crate::model::Dataset

mod dataset;
pub mod dates;
pub mod votes;

pub use dataset::{parse_dataset, parse_dataset_reader, parse_dataset_str};
pub use dates::{parse_review_date, DAY_FIRST_FORMATS};
pub use votes::{check_vote_consistency, parse_vote_field, parse_votes};
