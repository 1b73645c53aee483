//! # Sheet-Metal Bending Formulas
//!
//! Flat-pattern geometry for press-brake bends. All lengths in mm, angles in
//! degrees. Edge lengths are outer (mold-line) dimensions.
//!
//! ```text
//!      A (outer)
//!   ├────────┤
//!   ┌────────╮  ─┬─
//!   │ T      │ R │
//!   └──────╮ │   │ B (outer)
//!          │ │   │
//!          └─┘  ─┴─
//! ```
//!
//! ## Notation
//!
//! - `T` = material thickness
//! - `R` = inner bend radius
//! - `K` = K-factor, neutral axis location as a fraction of `T`
//! - `θ` = bend angle in degrees
//! - `BA` = bend allowance, arc length of the neutral axis through the bend

use std::f64::consts::PI;

/// Bend angle converted to radians, π·θ/180.
#[inline]
pub fn bend_angle_radians(angle_deg: f64) -> f64 {
    PI * angle_deg / 180.0
}

/// Radius of the neutral axis, R + K·T.
#[inline]
pub fn neutral_radius(inner_radius: f64, k_factor: f64, thickness: f64) -> f64 {
    inner_radius + k_factor * thickness
}

/// Bend allowance.
///
/// # Formula
/// BA = (π·θ/180)·(R + K·T)
///
/// # Example
/// ```rust
/// use steel_core::equations::bending::bend_allowance;
///
/// // 90° bend, R = 3, K = 0.33, T = 5
/// let ba = bend_allowance(90.0, 3.0, 0.33, 5.0);
/// assert!((ba - 7.3042).abs() < 1e-4);
/// ```
#[inline]
pub fn bend_allowance(angle_deg: f64, inner_radius: f64, k_factor: f64, thickness: f64) -> f64 {
    bend_angle_radians(angle_deg) * neutral_radius(inner_radius, k_factor, thickness)
}

/// Straight (flat) portion of an edge that meets a single bend.
///
/// # Formula
/// A' = A − (R + T)
#[inline]
pub fn straight_edge_single_bend(outer_edge: f64, inner_radius: f64, thickness: f64) -> f64 {
    outer_edge - (inner_radius + thickness)
}

/// Straight portion of an edge in a two-bend (channel) profile.
///
/// # Formula
/// A' = A − (2R + T)
#[inline]
pub fn straight_edge_double_bend(outer_edge: f64, inner_radius: f64, thickness: f64) -> f64 {
    outer_edge - (2.0 * inner_radius + thickness)
}

/// Bend-line offset measured from the free end of a straight edge: the bend
/// line sits at the middle of the bend allowance.
#[inline]
pub fn bend_line_offset(straight_edge: f64, bend_allowance: f64) -> f64 {
    straight_edge + bend_allowance / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quarter_turn_radians() {
        assert!((bend_angle_radians(90.0) - PI / 2.0).abs() < 1e-12);
        assert!((bend_angle_radians(180.0) - PI).abs() < 1e-12);
    }

    #[test]
    fn test_zero_radius_bend() {
        // Sharp bend: BA depends only on K·T
        let ba = bend_allowance(90.0, 0.0, 0.5, 2.0);
        assert!((ba - PI / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_straight_edges() {
        assert_eq!(straight_edge_single_bend(100.0, 3.0, 5.0), 92.0);
        assert_eq!(straight_edge_double_bend(100.0, 3.0, 5.0), 89.0);
    }

    #[test]
    fn test_bend_line_offset() {
        assert!((bend_line_offset(89.0, 7.3) - 92.65).abs() < 1e-9);
    }
}
