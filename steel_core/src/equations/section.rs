//! # H-Section Property Formulas
//!
//! Closed-form geometric properties of a doubly-symmetric H (wide flange)
//! section, ignoring the root fillets. Inputs are in one consistent length
//! unit; outputs are in the matching powers of that unit.
//!
//! ```text
//!     ┌───────────────┐  ─┬─
//!     └─────┐   ┌─────┘   │ t2 (flange)
//!           │   │         │
//!           │ t1│ (web)   H
//!           │   │         │
//!     ┌─────┘   └─────┐   │
//!     └───────────────┘  ─┴─
//!     ├───────B───────┤
//! ```
//!
//! ## Notation
//!
//! - `H` = overall height, `B` = flange width
//! - `t1` = web thickness, `t2` = flange thickness
//! - `A` = area, `I` = second moment of area, `W` = section modulus,
//!   `i` = radius of gyration
//!
//! ## Preconditions
//!
//! `H > 2·t2`, `B > 0`, `t1 > 0`, `t2 > 0`, `A > 0`. None of these functions
//! check them; out-of-domain input yields negative or NaN output.

/// Moment of inertia about the strong (x) axis.
///
/// # Formula
/// Ix = 2·B·t2·((H − t2)/2)² + t1·(H − 2·t2)³/12
///
/// Flange own-axis terms are neglected; the web is taken between flanges.
///
/// # Example
/// ```rust
/// use steel_core::equations::section::h_section_ix;
///
/// // HW 200×200×8×12, in cm
/// let ix = h_section_ix(20.0, 20.0, 0.8, 1.2);
/// assert!((ix - 4604.73).abs() < 0.01);
/// ```
#[inline]
pub fn h_section_ix(h: f64, b: f64, t1: f64, t2: f64) -> f64 {
    let flange_arm = (h - t2) / 2.0;
    let web_height = h - 2.0 * t2;
    2.0 * b * t2 * flange_arm.powi(2) + t1 * web_height.powi(3) / 12.0
}

/// Moment of inertia about the weak (y) axis.
///
/// # Formula
/// Iy = 2·t2·B³/12 + (H − 2·t2)·t1³/12
///
/// # Example
/// ```rust
/// use steel_core::equations::section::h_section_iy;
///
/// let iy = h_section_iy(20.0, 20.0, 0.8, 1.2);
/// assert!((iy - 1600.75).abs() < 0.01);
/// ```
#[inline]
pub fn h_section_iy(h: f64, b: f64, t1: f64, t2: f64) -> f64 {
    let web_height = h - 2.0 * t2;
    2.0 * t2 * b.powi(3) / 12.0 + web_height * t1.powi(3) / 12.0
}

/// Elastic section modulus W = I / c, with c the distance to the extreme fiber.
///
/// For the strong axis c = H/2, for the weak axis c = B/2.
#[inline]
pub fn section_modulus(moment_of_inertia: f64, depth: f64) -> f64 {
    moment_of_inertia / (depth / 2.0)
}

/// Radius of gyration i = √(I/A)
///
/// # Example
/// ```rust
/// use steel_core::equations::section::radius_of_gyration;
///
/// let i = radius_of_gyration(4604.73, 63.53);
/// assert!((i - 8.51).abs() < 0.01);
/// ```
#[inline]
pub fn radius_of_gyration(moment_of_inertia: f64, area: f64) -> f64 {
    (moment_of_inertia / area).sqrt()
}

/// Painting/surface area per unit length, taken as the outline perimeter 2·(H + B).
#[inline]
pub fn outline_perimeter(h: f64, b: f64) -> f64 {
    2.0 * (h + b)
}

/// Estimated area used by the free-form calculator when no tabulated area
/// is available. Dimensions in mm.
///
/// # Formula
/// A = (B·t1 + (H − t1)·t2) / 10
#[inline]
pub fn h_section_area_estimate(h_mm: f64, b_mm: f64, t1_mm: f64, t2_mm: f64) -> f64 {
    (b_mm * t1_mm + (h_mm - t1_mm) * t2_mm) / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPSILON: f64 = 0.01;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON || (a - b).abs() / b.abs().max(1.0) < 1e-9
    }

    fn rel_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1e-12)
    }

    #[test]
    fn test_hw200_properties() {
        let (h, b, t1, t2) = (20.0, 20.0, 0.8, 1.2);
        let ix = h_section_ix(h, b, t1, t2);
        let iy = h_section_iy(h, b, t1, t2);
        assert!(approx_eq(ix, 4604.73), "Ix = {} (expected 4604.73)", ix);
        assert!(approx_eq(iy, 1600.75), "Iy = {} (expected 1600.75)", iy);

        let wx = section_modulus(ix, h);
        assert!(approx_eq(wx, 460.47), "Wx = {} (expected 460.47)", wx);
    }

    #[test]
    fn test_outline_perimeter() {
        assert!(approx_eq(outline_perimeter(200.0, 200.0), 800.0));
    }

    #[test]
    fn test_area_estimate() {
        // (200·8 + 192·12) / 10
        let a = h_section_area_estimate(200.0, 200.0, 8.0, 12.0);
        assert!(approx_eq(a, 390.4), "A = {}", a);
    }

    #[test]
    fn test_radius_consistency() {
        // I = A·i²
        let ix = h_section_ix(30.0, 15.0, 0.65, 0.9);
        let a = 46.78;
        let i = radius_of_gyration(ix, a);
        assert!(approx_eq(a * i * i, ix));
    }

    fn valid_dims() -> impl Strategy<Value = (f64, f64, f64, f64)> {
        (1.0f64..100.0, 0.5f64..60.0, 0.05f64..0.9, 0.05f64..5.0)
            .prop_map(|(web_h, b, t1, t2)| (web_h + 2.0 * t2, b, t1, t2))
    }

    proptest! {
        #[test]
        fn prop_inertia_positive((h, b, t1, t2) in valid_dims()) {
            prop_assert!(h_section_ix(h, b, t1, t2) > 0.0);
            prop_assert!(h_section_iy(h, b, t1, t2) > 0.0);
        }

        #[test]
        fn prop_dimensional_scaling((h, b, t1, t2) in valid_dims(), k in 0.1f64..10.0) {
            let area = h_section_area_estimate(h, b, t1, t2);
            let area_k = h_section_area_estimate(k * h, k * b, k * t1, k * t2);
            prop_assert!(rel_eq(area_k, area * k.powi(2)));

            let ix = h_section_ix(h, b, t1, t2);
            let iy = h_section_iy(h, b, t1, t2);
            let ix_k = h_section_ix(k * h, k * b, k * t1, k * t2);
            let iy_k = h_section_iy(k * h, k * b, k * t1, k * t2);
            prop_assert!(rel_eq(ix_k, ix * k.powi(4)));
            prop_assert!(rel_eq(iy_k, iy * k.powi(4)));

            prop_assert!(rel_eq(section_modulus(ix_k, k * h), section_modulus(ix, h) * k.powi(3)));
            prop_assert!(rel_eq(section_modulus(iy_k, k * b), section_modulus(iy, b) * k.powi(3)));

            // Gross area of flanges plus web, always positive for valid dims
            let gross = 2.0 * b * t2 + (h - 2.0 * t2) * t1;
            let gross_k = gross * k.powi(2);
            prop_assert!(rel_eq(radius_of_gyration(ix_k, gross_k), radius_of_gyration(ix, gross) * k));
            prop_assert!(rel_eq(radius_of_gyration(iy_k, gross_k), radius_of_gyration(iy, gross) * k));
        }
    }
}
