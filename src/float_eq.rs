//! Utilities to compare floating-point numbers.

use float_cmp::ApproxEq;

// Rendering backends in the Cairo family keep coordinates in 24.8
// fixed-point internally, so 1/256 is the smallest distance they can
// tell apart.

const FIXED_FRAC_BITS: u64 = 8;

/// The double that corresponds to (the number one in fixed-point representation)
const FIXED_ONE_DOUBLE: f64 = (1 << FIXED_FRAC_BITS) as f64;

/// Checks whether two floating-point numbers are approximately equal,
/// considering the backend's limitations on numeric representation.
///
/// We implement this trait for `f64`, so that two numbers can be
/// considered "close enough to equal" if their absolute difference is
/// smaller than the smallest fixed-point fraction the backend can
/// represent.
///
/// Note that this trait is reliable even if the given numbers are
/// outside of the range that the fixed-point format can represent.  In
/// that case, we check for the absolute difference, and finally allow a
/// difference of 1 unit-in-the-last-place (ULP) for very large f64
/// values.
pub trait ApproxEqFixed: ApproxEq {
    fn approx_eq_fixed(self, other: Self) -> bool;
}

impl ApproxEqFixed for f64 {
    fn approx_eq_fixed(self, other: f64) -> bool {
        let smallest_fraction = 1.0 / FIXED_ONE_DOUBLE;
        self.approx_eq(other, (smallest_fraction, 1))
    }
}

// Macro for usage in unit tests
#[doc(hidden)]
#[macro_export]
macro_rules! assert_approx_eq_fixed {
    ($left:expr, $right:expr) => {{
        match ($left, $right) {
            (l, r) => {
                if !l.approx_eq_fixed(r) {
                    panic!(
                        r#"assertion failed: `(left == right)`
  left: `{:?}`,
 right: `{:?}`"#,
                        l, r
                    )
                }
            }
        }
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_approx_equal() {
        // 0 == 1/256 - the backend can represent it, so not equal
        assert!(!0.0_f64.approx_eq_fixed(0.00390635_f64));

        // 1 == 1 + 1/256 - the backend can represent it, so not equal
        assert!(!1.0_f64.approx_eq_fixed(1.00390635_f64));

        // 0 == -1/256 - the backend can represent it, so not equal
        assert!(!0.0_f64.approx_eq_fixed(-0.00390635_f64));

        // 1 == 1 - 1/256 - the backend can represent it, so not equal
        assert!(!1.0_f64.approx_eq_fixed(0.99609365_f64));

        // 0 == 1/512 - the backend approximates to 0, so equal
        assert!(0.0_f64.approx_eq_fixed(0.001953125_f64));

        // 1 == 1 + 1/512 - the backend approximates to 1, so equal
        assert!(1.0_f64.approx_eq_fixed(1.001953125_f64));

        // 0 == -1/512 - the backend approximates to 0, so equal
        assert!(0.0_f64.approx_eq_fixed(-0.001953125_f64));

        // 1 == 1 - 1/512 - the backend approximates to 1, so equal
        assert!(1.0_f64.approx_eq_fixed(0.998046875_f64));

        // 2^53 and (2^53 + 2) are 1 ULP apart as f64, and we accept a
        // difference of 1 ULP for very large values; (2^53 + 4) is
        // 2 ULPs away and we don't consider it equal.
        assert!(9_007_199_254_740_992.0.approx_eq_fixed(9_007_199_254_740_994.0));
        assert!(!9_007_199_254_740_992.0.approx_eq_fixed(9_007_199_254_740_996.0));
    }

    #[test]
    fn assert_approx_eq_fixed_should_not_panic() {
        assert_approx_eq_fixed!(42_f64, 42_f64);
    }

    #[test]
    #[should_panic]
    fn assert_approx_eq_fixed_should_panic() {
        assert_approx_eq_fixed!(3_f64, 42_f64);
    }
}
