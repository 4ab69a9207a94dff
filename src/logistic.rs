//! The logistic transform shared by all fragility models.
//!
//! Every model in this crate computes a polynomial logit `g` and maps it to
//! a probability through the standard logistic function.

/// Logistic (inverse-logit) transform.
///
/// ```text
/// logistic(g) = 1 / (1 + exp(-g)) = exp(g) / (1 + exp(g))
/// ```
///
/// Maps any finite logit to the open interval (0, 1). The `exp(-g)` form is
/// used so large positive logits cannot overflow the numerator.
///
/// # Examples
///
/// ```
/// use berth_fragility::logistic::logistic;
/// assert!((logistic(0.0) - 0.5).abs() < 1e-15);
/// assert!(logistic(-4.42) < 0.012);
/// ```
///
/// # Reference
/// McCullagh & Nelder (1989), *Generalized Linear Models*, 2nd ed., Ch. 4.
pub fn logistic(g: f64) -> f64 {
    1.0 / (1.0 + (-g).exp())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoint() {
        assert!((logistic(0.0) - 0.5).abs() < 1e-15);
    }

    #[test]
    fn test_symmetry() {
        for g in [0.1, 1.0, 4.42, 10.0, 27.06] {
            let sum = logistic(g) + logistic(-g);
            assert!(
                (sum - 1.0).abs() < 1e-12,
                "logistic({}) + logistic(-{}) = {}, expected 1.0",
                g,
                g,
                sum
            );
        }
    }

    #[test]
    fn test_monotone_increasing() {
        let mut prev = logistic(-20.0);
        for i in -19..=20 {
            let p = logistic(i as f64);
            assert!(p > prev, "logistic should be strictly increasing at g={}", i);
            prev = p;
        }
    }

    #[test]
    fn test_saturation_stays_in_unit_interval() {
        // Extreme logits saturate to 0.0 / 1.0 in f64 but never leave [0, 1].
        for g in [-1e3, -745.0, 745.0, 1e3] {
            let p = logistic(g);
            assert!((0.0..=1.0).contains(&p), "logistic({}) = {}", g, p);
        }
    }

    #[test]
    fn test_known_value() {
        // logistic(-4.42) computed independently.
        let p = logistic(-4.42);
        assert!(
            (p - 0.011891131644386993).abs() < 1e-15,
            "logistic(-4.42) = {}",
            p
        );
    }
}
