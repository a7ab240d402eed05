//! Mathematical utility functions

use rust_decimal::prelude::*;

/// `numerator / denominator`, or zero when the divisor is zero or the
/// quotient does not fit.
pub fn safe_ratio(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator.is_zero() {
        return Decimal::ZERO;
    }
    numerator.checked_div(denominator).unwrap_or(Decimal::ZERO)
}

/// Clamp that maps NaN to `min` instead of propagating it.
pub fn clamp_finite(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        return min;
    }
    value.clamp(min, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_safe_ratio_zero_divisor() {
        assert_eq!(safe_ratio(dec!(5), dec!(0)), Decimal::ZERO);
        assert_eq!(safe_ratio(dec!(5), dec!(2)), dec!(2.5));
        assert_eq!(safe_ratio(dec!(-3), dec!(4)), dec!(-0.75));
    }

    #[test]
    fn test_clamp_finite() {
        assert_eq!(clamp_finite(f64::NAN, 50.0, 99.5), 50.0);
        assert_eq!(clamp_finite(f64::INFINITY, 50.0, 99.5), 99.5);
        assert_eq!(clamp_finite(120.0, 50.0, 99.5), 99.5);
        assert_eq!(clamp_finite(72.25, 50.0, 99.5), 72.25);
    }
}
