//! The per-product view every downstream stage works on.

use super::{Dataset, Review};
use crate::error::{Result, ReviewScoreError};

/// Reviews of a single product, in original row order.
///
/// Built by filtering a [`Dataset`]; the dataset itself is left untouched.
#[derive(Debug, Clone)]
pub struct ProductSubset {
    product_id: String,
    reviews: Vec<Review>,
}

impl ProductSubset {
    /// Filter `dataset` down to the rows of `product_id`.
    ///
    /// Fails with [`ReviewScoreError::EmptyDataset`] when no row matches.
    pub fn from_dataset(dataset: &Dataset, product_id: &str) -> Result<Self> {
        let reviews: Vec<Review> = dataset
            .reviews()
            .iter()
            .filter(|r| r.product_id == product_id)
            .cloned()
            .collect();

        if reviews.is_empty() {
            return Err(ReviewScoreError::empty_dataset(format!(
                "no reviews for product '{product_id}'"
            )));
        }

        Ok(Self {
            product_id: product_id.to_string(),
            reviews,
        })
    }

    /// The product this subset belongs to.
    #[must_use]
    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    /// Rows of the product, in original order.
    #[must_use]
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    /// Number of reviews.
    #[must_use]
    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    /// Always false for a constructed subset; kept for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }
}
