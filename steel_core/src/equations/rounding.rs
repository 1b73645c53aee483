//! # Rounding Helpers
//!
//! Result values leave the engine pre-rounded; display layers assume that.
//! All rounding is half away from zero at a fixed number of decimal places.

/// Round `value` to `places` decimal places, half away from zero.
///
/// # Example
/// ```rust
/// use steel_core::equations::rounding::round_to;
///
/// assert_eq!(round_to(141.3042, 2), 141.3);
/// assert_eq!(round_to(-2.5, 0), -3.0);
/// assert_eq!(round_to(4604.73, 0), 4605.0);
/// ```
#[inline]
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Round to 2 decimal places (lengths, areas, radii, weights)
#[inline]
pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}

/// Round to a whole number (moments of inertia, section moduli)
#[inline]
pub fn round0(value: f64) -> f64 {
    value.round()
}
