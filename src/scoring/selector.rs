//! Product selection.

use crate::error::{Result, ReviewScoreError};
use crate::model::Dataset;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Number of reviews for one product identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCount {
    pub product_id: String,
    pub review_count: usize,
}

/// The product chosen for scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSelection {
    pub product_id: String,
    pub review_count: usize,
    /// Distinct products in the dataset
    pub distinct_products: usize,
    /// Whether the product was named by the caller rather than picked by count
    pub explicit: bool,
}

/// Review counts per product, most reviewed first.
///
/// Ties are ordered by identifier so the result does not depend on row order.
#[must_use]
pub fn product_counts(dataset: &Dataset) -> Vec<ProductCount> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for review in dataset.reviews() {
        *counts.entry(review.product_id.as_str()).or_insert(0) += 1;
    }

    let mut table: Vec<ProductCount> = counts
        .into_iter()
        .map(|(id, review_count)| ProductCount {
            product_id: id.to_string(),
            review_count,
        })
        .collect();
    table.sort_by(|a, b| {
        b.review_count
            .cmp(&a.review_count)
            .then_with(|| a.product_id.cmp(&b.product_id))
    });
    table
}

/// Pick the product with the most reviews.
///
/// When several products share the maximum count, the lexicographically
/// lowest identifier wins.
pub fn select_most_reviewed(dataset: &Dataset) -> Result<ProductSelection> {
    let counts = product_counts(dataset);
    let distinct_products = counts.len();
    let top = counts
        .into_iter()
        .next()
        .ok_or_else(|| ReviewScoreError::empty_dataset("no reviews to select a product from"))?;

    tracing::info!(
        "Selected most reviewed product {} ({} reviews, {} products)",
        top.product_id,
        top.review_count,
        distinct_products
    );

    Ok(ProductSelection {
        product_id: top.product_id,
        review_count: top.review_count,
        distinct_products,
        explicit: false,
    })
}

/// Select a product by identifier.
pub fn select_product(dataset: &Dataset, product_id: &str) -> Result<ProductSelection> {
    let counts = product_counts(dataset);
    let distinct_products = counts.len();
    let review_count = counts
        .iter()
        .find(|c| c.product_id == product_id)
        .map(|c| c.review_count)
        .ok_or_else(|| {
            ReviewScoreError::empty_dataset(format!("no reviews for product '{product_id}'"))
        })?;

    tracing::info!("Selected product {product_id} ({review_count} reviews)");

    Ok(ProductSelection {
        product_id: product_id.to_string(),
        review_count,
        distinct_products,
        explicit: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Review;
    use chrono::NaiveDate;

    fn dataset(ids: &[&str]) -> Dataset {
        let date = NaiveDate::from_ymd_opt(2014, 1, 1).unwrap();
        Dataset::new(
            ids.iter()
                .enumerate()
                .map(|(row, id)| Review::new(row, *id, 5.0, date, "[0, 0]"))
                .collect(),
        )
    }

    #[test]
    fn test_counts_sorted() {
        let ds = dataset(&["C", "A", "C", "B", "A", "C"]);
        let counts = product_counts(&ds);
        let ids: Vec<_> = counts.iter().map(|c| c.product_id.as_str()).collect();
        assert_eq!(ids, ["C", "A", "B"]);
        assert_eq!(counts[0].review_count, 3);
    }

    #[test]
    fn test_most_reviewed() {
        let ds = dataset(&["X", "Y", "Y"]);
        let sel = select_most_reviewed(&ds).unwrap();
        assert_eq!(sel.product_id, "Y");
        assert_eq!(sel.review_count, 2);
        assert_eq!(sel.distinct_products, 2);
        assert!(!sel.explicit);
    }

    #[test]
    fn test_tie_break_lowest_identifier() {
        // "B" appears first but "A" sorts lower
        let ds = dataset(&["B", "A", "B", "A"]);
        assert_eq!(select_most_reviewed(&ds).unwrap().product_id, "A");
    }

    #[test]
    fn test_empty_dataset() {
        let ds = Dataset::new(Vec::new());
        assert!(matches!(
            select_most_reviewed(&ds),
            Err(ReviewScoreError::EmptyDataset(_))
        ));
    }

    #[test]
    fn test_explicit_selection() {
        let ds = dataset(&["X", "Y", "Y"]);
        let sel = select_product(&ds, "X").unwrap();
        assert_eq!(sel.review_count, 1);
        assert!(sel.explicit);

        assert!(matches!(
            select_product(&ds, "Z"),
            Err(ReviewScoreError::EmptyDataset(_))
        ));
    }
}
