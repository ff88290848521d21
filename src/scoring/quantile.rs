//! Sample quantiles with linear interpolation.

use serde::{Deserialize, Serialize};

/// Quantile `p` of an ascending slice.
///
/// Position `h = (n - 1) * p`; the result interpolates linearly between the
/// values either side of `h`. Returns `None` for an empty slice or `p`
/// outside `[0, 1]`.
#[must_use]
pub fn quantile_sorted(sorted: &[f64], p: f64) -> Option<f64> {
    if sorted.is_empty() || !(0.0..=1.0).contains(&p) {
        return None;
    }

    let h = (sorted.len() - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    let frac = h - lo as f64;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

/// The three quartile cut points of a sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quartiles {
    pub q1: f64,
    pub q2: f64,
    pub q3: f64,
}

impl Quartiles {
    /// Quartiles of `values` in any order, `None` when empty.
    #[must_use]
    pub fn of(values: &[f64]) -> Option<Self> {
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        Some(Self {
            q1: quantile_sorted(&sorted, 0.25)?,
            q2: quantile_sorted(&sorted, 0.50)?,
            q3: quantile_sorted(&sorted, 0.75)?,
        })
    }

    /// Cut points in ascending order.
    #[must_use]
    pub const fn as_array(&self) -> [f64; 3] {
        [self.q1, self.q2, self.q3]
    }
}
