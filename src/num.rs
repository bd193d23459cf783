use num_traits::Float;

/// Round `value` to `digits` decimal places.
///
/// `digits = 0` rounds to the nearest whole number.
#[inline]
pub fn round_to<F: Float>(value: F, digits: i32) -> F {
    let factor = F::from(10.0).unwrap().powi(digits);
    (value * factor).round() / factor
}
