//! In-memory data model for review scoring.
//!
//! A run loads a [`Dataset`] once, derives a [`ProductSubset`] for the
//! selected product, and from there produces new immutable records for
//! every derived quantity ([`VotedReview`], [`RankedReview`]). Nothing in
//! the loaded dataset is mutated after loading.

mod review;
mod subset;
mod votes;

pub use review::*;
pub use subset::*;
pub use votes::*;
