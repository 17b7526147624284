//! Logarithmic mean with defined limiting behavior at equality and at zero.
//!
//! The log mean `L(x, y) = (y - x) / (ln y - ln x)` is the unique weight that
//! makes the additive log-ratio decomposition exact. It has a removable
//! singularity at `x = y` and is undefined when either side is zero; the
//! degenerate branches below resolve both cases to finite values.

use lmdi_core::constants::EPSILON;

/// Logarithmic mean of two non-negative numbers, with [`EPSILON`] tolerance.
pub fn log_mean(x: f64, y: f64) -> f64 {
    log_mean_eps(x, y, EPSILON)
}

/// Logarithmic mean with an explicit tolerance.
///
/// Branch policy, in priority order:
/// 1. `|x - y| < eps`: arithmetic mean `(x + y) / 2` (removable singularity).
/// 2. both `~0`: `0`.
/// 3. exactly one `~0`: the non-zero value divided by
///    `ln(non-zero) - ln(eps)`. This uses `eps` as a numerical floor in place
///    of true zero; the true mathematical limit is 0. Kept deliberately for
///    output compatibility with the reference results.
/// 4. otherwise: `(y - x) / (ln y - ln x)`.
///
/// For `x, y >= 0` the result is symmetric, non-negative, equals `x` at
/// `x = y`, and lies between `min(x, y)` and `max(x, y)` on branch 4.
pub fn log_mean_eps(x: f64, y: f64, eps: f64) -> f64 {
    if (x - y).abs() < eps {
        return (x + y) / 2.0;
    }
    if x.abs() < eps && y.abs() < eps {
        return 0.0;
    }
    if x.abs() < eps {
        return y / (y.ln() - eps.ln());
    }
    if y.abs() < eps {
        return x / (x.ln() - eps.ln());
    }
    (y - x) / (y.ln() - x.ln())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn equal_values_return_arithmetic_mean() {
        assert_eq!(log_mean(5.0, 5.0), 5.0);
        assert_eq!(log_mean(0.0, 0.0), 0.0);
    }

    #[test]
    fn near_equal_values_return_arithmetic_mean() {
        let x = 10.0;
        let y = 10.0 + 1e-12;
        assert!((log_mean(x, y) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn standard_branch_value() {
        // L(100, 180) = 80 / ln(1.8)
        let l = log_mean(100.0, 180.0);
        let expected = 80.0 / (1.8f64).ln();
        assert!((l - expected).abs() < 1e-9, "got {l}, expected {expected}");
    }

    #[test]
    fn one_sided_branch_uses_epsilon_floor() {
        // x ~ 0: y / (ln y - ln eps), not the true limit 0.
        let y = 100.0;
        let l = log_mean(0.0, y);
        let expected = y / (y.ln() - EPSILON.ln());
        assert!((l - expected).abs() < 1e-9, "got {l}, expected {expected}");
        assert!(l > 0.0);
    }

    #[test]
    fn one_sided_branch_symmetric() {
        let a = log_mean(0.0, 42.0);
        let b = log_mean(42.0, 0.0);
        assert!((a - b).abs() < 1e-12);
    }

    #[test]
    fn bounded_by_min_and_max() {
        let (x, y) = (7.0, 300.0);
        let l = log_mean(x, y);
        assert!(l >= x && l <= y, "L({x},{y}) = {l} out of bounds");
    }

    #[test]
    fn between_geometric_and_arithmetic() {
        // Classical mean ordering: geometric <= logarithmic <= arithmetic.
        let (x, y) = (4.0_f64, 9.0_f64);
        let l = log_mean(x, y);
        let geometric = (x * y).sqrt();
        let arithmetic = (x + y) / 2.0;
        assert!(l > geometric);
        assert!(l < arithmetic);
    }

    proptest! {
        #[test]
        fn symmetric(x in 0.0f64..1e9, y in 0.0f64..1e9) {
            let a = log_mean(x, y);
            let b = log_mean(y, x);
            prop_assert!((a - b).abs() <= 1e-9 * a.abs().max(1.0));
        }

        #[test]
        fn identity_at_equality(x in 0.0f64..1e9) {
            prop_assert_eq!(log_mean(x, x), x);
        }

        #[test]
        fn non_negative(x in 0.0f64..1e9, y in 0.0f64..1e9) {
            prop_assert!(log_mean(x, y) >= 0.0);
        }

        #[test]
        fn bounded_on_standard_branch(x in 1e-3f64..1e9, y in 1e-3f64..1e9) {
            prop_assume!((x - y).abs() >= 1e-9);
            let l = log_mean(x, y);
            let (lo, hi) = if x < y { (x, y) } else { (y, x) };
            prop_assert!(l >= lo && l <= hi, "L({}, {}) = {}", x, y, l);
        }
    }
}
