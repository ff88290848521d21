//! Critical values of the standard normal distribution.

use statrs::distribution::{ContinuousCDF, Normal};

/// `Φ⁻¹(p)`: the point below which a standard normal variable falls with
/// probability `p`.
///
/// Returns `None` unless `0 < p < 1`.
#[must_use]
pub fn normal_quantile(p: f64) -> Option<f64> {
    if !(p > 0.0 && p < 1.0) {
        return None;
    }
    let standard = Normal::new(0.0, 1.0).ok()?;
    Some(standard.inverse_cdf(p))
}

/// Two-sided critical value for a confidence level: `Φ⁻¹(1 - (1 - c) / 2)`.
///
/// Returns `None` unless `0 < confidence < 1`.
#[must_use]
pub fn z_for_confidence(confidence: f64) -> Option<f64> {
    if !(confidence > 0.0 && confidence < 1.0) {
        return None;
    }
    normal_quantile(1.0 - (1.0 - confidence) / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_critical_values() {
        let cases = [
            (0.80, 1.281_551_565_5),
            (0.90, 1.644_853_626_9),
            (0.95, 1.959_963_984_5),
            (0.99, 2.575_829_303_5),
        ];
        for (confidence, expected) in cases {
            let z = z_for_confidence(confidence).unwrap();
            assert!((z - expected).abs() < 1e-6, "{confidence}: {z} != {expected}");
        }
    }

    #[test]
    fn test_symmetry_and_center() {
        assert!(normal_quantile(0.5).unwrap().abs() < 1e-9);
        for p in [0.001, 0.01, 0.2, 0.4] {
            let lo = normal_quantile(p).unwrap();
            let hi = normal_quantile(1.0 - p).unwrap();
            assert!((lo + hi).abs() < 1e-8, "p={p}");
            assert!(lo < 0.0);
        }
    }

    #[test]
    fn test_tail_region() {
        // Φ⁻¹(0.001) ≈ -3.090232
        let x = normal_quantile(0.001).unwrap();
        assert!((x + 3.090_232_306).abs() < 1e-6, "{x}");
    }

    #[test]
    fn test_out_of_range() {
        for p in [0.0, 1.0, -0.1, 1.1, f64::NAN] {
            assert_eq!(normal_quantile(p), None);
            assert_eq!(z_for_confidence(p), None);
        }
    }
}
