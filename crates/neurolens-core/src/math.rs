//! Trigonometric approximation without a math library.
//!
//! Angles enter as degrees, are converted to radians, normalized into
//! `[-PI, PI]` with a floating-point modulo and evaluated with a truncated
//! Taylor series (sine up to x^7, cosine up to x^6).
//!
//! # Accuracy
//!
//! The polynomials are accurate near zero and drift away from it. The
//! normalized angle is folded into `[-PI/2, PI/2]` before evaluation, which
//! keeps the absolute error below [`TRIG_TOLERANCE`] for every finite input.
//! These are not general-purpose trig functions: use them for pixel
//! remapping, not for numerics.

/// Pi to 21 significant digits (rounded to `f64` on use).
pub const PI: f64 = 3.141_592_653_589_793_238_46;

/// Maximum absolute error of [`sin_approx`] and [`cos_approx`].
pub const TRIG_TOLERANCE: f64 = 1e-3;

const FACTORIAL_2: f64 = 2.0;
const FACTORIAL_3: f64 = 6.0;
const FACTORIAL_4: f64 = 24.0;
const FACTORIAL_5: f64 = 120.0;
const FACTORIAL_6: f64 = 720.0;
const FACTORIAL_7: f64 = 5040.0;

/// Convert degrees to radians.
#[inline]
pub fn to_radians(degrees: f64) -> f64 {
    degrees * (PI / 180.0)
}

/// Floating-point remainder of `x / y`.
///
/// The truncated remainder `x - y * trunc(x / y)` is corrected once by adding
/// `y` when it ends up with the opposite sign of `y`, so the result lies in
/// `[0, y)` for positive `y`. A zero divisor returns `0.0`.
pub fn float_mod(x: f64, y: f64) -> f64 {
    if y == 0.0 {
        return 0.0;
    }

    let mut remainder = x - y * (x / y).trunc();
    if remainder * y < 0.0 {
        remainder += y;
    }
    remainder
}

/// Normalize an angle in radians into `[-PI, PI]`.
#[inline]
pub fn normalize_radians(x: f64) -> f64 {
    float_mod(x + PI, 2.0 * PI) - PI
}

/// Raise `base` to an integer power by repeated squaring.
///
/// `exponent == 0` returns `1.0`. A negative exponent returns the reciprocal
/// of the positive power, so `power(0.0, -1)` divides by zero and yields
/// `f64::INFINITY`.
pub fn power(base: f64, exponent: i32) -> f64 {
    if exponent == 0 {
        return 1.0;
    }
    if exponent < 0 {
        return 1.0 / power_unsigned(base, exponent.unsigned_abs());
    }
    power_unsigned(base, exponent.unsigned_abs())
}

fn power_unsigned(mut base: f64, mut exponent: u32) -> f64 {
    let mut result = 1.0;
    while exponent > 0 {
        if exponent % 2 == 1 {
            result *= base;
        }
        base *= base;
        exponent /= 2;
    }
    result
}

/// Approximate the sine of an angle given in degrees.
pub fn sin_approx(degrees: f64) -> f64 {
    let x = normalize_radians(to_radians(degrees));

    // sin(PI - x) == sin(x)
    let x = if x > PI / 2.0 {
        PI - x
    } else if x < -PI / 2.0 {
        -PI - x
    } else {
        x
    };

    x - power(x, 3) / FACTORIAL_3 + power(x, 5) / FACTORIAL_5 - power(x, 7) / FACTORIAL_7
}

/// Approximate the cosine of an angle given in degrees.
pub fn cos_approx(degrees: f64) -> f64 {
    let x = normalize_radians(to_radians(degrees));

    // cos(PI - x) == -cos(x)
    let (x, sign) = if x > PI / 2.0 {
        (PI - x, -1.0)
    } else if x < -PI / 2.0 {
        (-PI - x, -1.0)
    } else {
        (x, 1.0)
    };

    sign * (1.0 - power(x, 2) / FACTORIAL_2 + power(x, 4) / FACTORIAL_4
        - power(x, 6) / FACTORIAL_6)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_to_radians() {
        assert_abs_diff_eq!(to_radians(0.0), 0.0);
        assert_abs_diff_eq!(to_radians(180.0), PI, epsilon = 1e-12);
        assert_abs_diff_eq!(to_radians(-90.0), -PI / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_power() {
        assert_abs_diff_eq!(power(2.0, 10), 1024.0);
        assert_abs_diff_eq!(power(2.0, 0), 1.0);
        assert_abs_diff_eq!(power(2.0, -2), 0.25);
        assert_abs_diff_eq!(power(-3.0, 3), -27.0);
        assert_abs_diff_eq!(power(1.5, 1), 1.5);
    }

    #[test]
    fn test_power_zero_base_negative_exponent() {
        assert!(power(0.0, -1).is_infinite());
        assert_abs_diff_eq!(power(0.0, 0), 1.0);
    }

    #[test]
    fn test_power_extreme_exponent() {
        // i32::MIN has no positive counterpart in i32
        assert_abs_diff_eq!(power(1.0, i32::MIN), 1.0);
    }

    #[test]
    fn test_float_mod_sign_correction() {
        assert_abs_diff_eq!(float_mod(7.0, 3.0), 1.0);
        assert_abs_diff_eq!(float_mod(-7.0, 3.0), 2.0);
        assert_abs_diff_eq!(float_mod(6.0, 3.0), 0.0);
    }

    #[test]
    fn test_float_mod_zero_divisor() {
        assert_abs_diff_eq!(float_mod(5.0, 0.0), 0.0);
    }

    #[test]
    fn test_normalize_radians_range() {
        for degrees in [-720.0, -450.0, -180.0, -1.0, 0.0, 1.0, 179.0, 181.0, 540.0, 1e6] {
            let x = normalize_radians(to_radians(degrees));
            assert!((-PI..=PI).contains(&x), "{degrees} normalized to {x}");
        }
    }

    #[test]
    fn test_sin_cos_reference_points() {
        assert_abs_diff_eq!(sin_approx(90.0), 1.0, epsilon = TRIG_TOLERANCE);
        assert_abs_diff_eq!(cos_approx(180.0), -1.0, epsilon = TRIG_TOLERANCE);
        assert_abs_diff_eq!(sin_approx(0.0), 0.0);
        assert_abs_diff_eq!(cos_approx(0.0), 1.0);
        assert_abs_diff_eq!(sin_approx(-90.0), -1.0, epsilon = TRIG_TOLERANCE);
        assert_abs_diff_eq!(cos_approx(90.0), 0.0, epsilon = TRIG_TOLERANCE);
    }

    #[test]
    fn test_periodicity() {
        assert_abs_diff_eq!(sin_approx(360.0), sin_approx(0.0), epsilon = 1e-9);
        assert_abs_diff_eq!(cos_approx(360.0), cos_approx(0.0), epsilon = 1e-9);
        assert_abs_diff_eq!(sin_approx(405.0), sin_approx(45.0), epsilon = 1e-9);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: the approximation stays within the documented tolerance.
        #[test]
        fn prop_sin_within_tolerance(degrees in -3600.0f64..=3600.0) {
            let exact = degrees.to_radians().sin();
            prop_assert!((sin_approx(degrees) - exact).abs() <= TRIG_TOLERANCE);
        }

        #[test]
        fn prop_cos_within_tolerance(degrees in -3600.0f64..=3600.0) {
            let exact = degrees.to_radians().cos();
            prop_assert!((cos_approx(degrees) - exact).abs() <= TRIG_TOLERANCE);
        }

        /// Property: sin^2 + cos^2 stays close to 1.
        #[test]
        fn prop_pythagorean_identity(degrees in -720.0f64..=720.0) {
            let s = sin_approx(degrees);
            let c = cos_approx(degrees);
            prop_assert!((s * s + c * c - 1.0).abs() < 4.0 * TRIG_TOLERANCE);
        }

        /// Property: a non-zero divisor gives a remainder smaller than it.
        #[test]
        fn prop_float_mod_bounded(x in -1e4f64..=1e4, y in 0.1f64..=100.0) {
            let r = float_mod(x, y);
            prop_assert!(r >= -1e-9 && r <= y + 1e-9, "float_mod({}, {}) = {}", x, y, r);
        }

        /// Property: integer powers match repeated multiplication.
        #[test]
        fn prop_power_matches_powi(base in -4.0f64..=4.0, exponent in -8i32..=8) {
            prop_assume!(base.abs() > 1e-3);
            let expected = base.powi(exponent);
            prop_assert!((power(base, exponent) - expected).abs() <= 1e-9 * expected.abs().max(1.0));
        }
    }
}
