//! Output rounding.
//!
//! Converts the exact binary value of an `f64` into a fixed-scale `Decimal`,
//! rounding half away from zero. A value such as `1.005` is stored as
//! `1.00499999999999989...` and therefore rounds down, the same way
//! fixed-precision number formatting does.

use rust_decimal::{Decimal, RoundingStrategy};

/// Round `value` to exactly `scale` decimal places
///
/// Returns `None` for NaN, infinities, and magnitudes whose digits plus
/// `scale` decimal places do not fit in a `Decimal` mantissa.
///
/// A result that rounds to zero is always positive zero, so `-0.00001` at
/// four places prints `0.0000`. Fixed-precision JavaScript formatting would
/// print `-0.0000` here.
///
/// # Examples
/// ```
/// # use riskcalc_engine::rounding::to_fixed;
/// assert_eq!(to_fixed(5.0, 2).unwrap().to_string(), "5.00");
/// assert_eq!(to_fixed(0.758385, 4).unwrap().to_string(), "0.7584");
/// assert!(to_fixed(f64::NAN, 4).is_none());
/// ```
pub fn to_fixed(value: f64, scale: u32) -> Option<Decimal> {
    let mut rounded = Decimal::from_f64_retain(value)?
        .round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(scale);
    if rounded.scale() != scale {
        return None;
    }
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    Some(rounded)
}
