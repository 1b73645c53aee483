//! # H-Beam Section Properties
//!
//! Derives area, weight, moments of inertia, section moduli, radii of
//! gyration and surface area of a hot-rolled H-beam from its four outer
//! dimensions.
//!
//! Two entry points:
//!
//! - [`compute_section_properties`] - area comes from the reference table
//!   (the standard's listed value). Total over well-formed input; the
//!   geometry preconditions are documented, not checked.
//! - [`calculate_from_dimensions`] - free-form input: validates the
//!   dimensions, estimates the area itself, then runs the same formulas.
//!
//! ## Units
//!
//! Dimensions are entered in mm and evaluated in cm. Results:
//! A in cm², weight in kg/m, I in cm⁴, W in cm³, i in cm, S in m²/m.
//!
//! ## Example
//!
//! ```rust
//! use steel_core::calculations::section_properties::{compute_section_properties, BeamDimensions};
//!
//! let dims = BeamDimensions::new(200.0, 200.0, 8.0, 12.0);
//! let props = compute_section_properties(&dims, 63.53);
//!
//! assert_eq!(props.ix_cm4, 4605.0);
//! assert_eq!(props.wx_cm3, 460.0);
//! assert_eq!(props.rx_cm, 8.51);
//! assert_eq!(props.surface_area_m2_per_m, 0.8);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::equations::rounding::{round0, round2};
use crate::equations::section::{
    h_section_area_estimate, h_section_ix, h_section_iy, outline_perimeter, radius_of_gyration,
    section_modulus,
};
use crate::errors::{CalcError, CalcResult};
use crate::materials::steel::steel_weight_kg_per_m;
use crate::units::{Centimeters, Meters, Millimeters};

/// Outer dimensions of an H-beam, all in mm.
///
/// ## JSON Example
///
/// ```json
/// {
///   "height_mm": 200.0,
///   "width_mm": 200.0,
///   "web_thickness_mm": 8.0,
///   "flange_thickness_mm": 12.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeamDimensions {
    /// Overall height H (mm)
    pub height_mm: f64,

    /// Flange width B (mm)
    pub width_mm: f64,

    /// Web thickness t1 (mm)
    pub web_thickness_mm: f64,

    /// Flange thickness t2 (mm)
    pub flange_thickness_mm: f64,
}

impl BeamDimensions {
    pub fn new(height_mm: f64, width_mm: f64, web_thickness_mm: f64, flange_thickness_mm: f64) -> Self {
        Self {
            height_mm,
            width_mm,
            web_thickness_mm,
            flange_thickness_mm,
        }
    }

    /// Check that every dimension is positive and the flanges leave room for a web.
    pub fn validate(&self) -> CalcResult<()> {
        let fields = [
            ("height_mm", self.height_mm, "Height must be positive"),
            ("width_mm", self.width_mm, "Width must be positive"),
            ("web_thickness_mm", self.web_thickness_mm, "Web thickness must be positive"),
            ("flange_thickness_mm", self.flange_thickness_mm, "Flange thickness must be positive"),
        ];
        for (field, value, reason) in fields {
            // Written so NaN is rejected too
            if !(value > 0.0) {
                return Err(CalcError::invalid_input(field, value.to_string(), reason));
            }
        }
        if self.height_mm <= 2.0 * self.flange_thickness_mm {
            return Err(CalcError::invalid_geometry(format!(
                "height {} mm must exceed twice the flange thickness ({} mm)",
                self.height_mm,
                2.0 * self.flange_thickness_mm
            )));
        }
        Ok(())
    }

    /// Dimensions converted to cm: (H, B, t1, t2)
    fn in_centimeters(&self) -> (f64, f64, f64, f64) {
        let cm = |mm: f64| Centimeters::from(Millimeters(mm)).value();
        (
            cm(self.height_mm),
            cm(self.width_mm),
            cm(self.web_thickness_mm),
            cm(self.flange_thickness_mm),
        )
    }
}

/// Derived section properties, pre-rounded for display.
///
/// Precision: area and weight 2 places, I and W whole numbers, i and S
/// 2 places.
///
/// ## JSON Example
///
/// ```json
/// {
///   "area_cm2": 63.53,
///   "weight_kg_per_m": 49.87,
///   "ix_cm4": 4605.0,
///   "iy_cm4": 1601.0,
///   "wx_cm3": 460.0,
///   "wy_cm3": 160.0,
///   "rx_cm": 8.51,
///   "ry_cm": 5.02,
///   "surface_area_m2_per_m": 0.8
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionProperties {
    /// Cross-sectional area A (cm²)
    pub area_cm2: f64,

    /// Theoretical weight (kg/m)
    pub weight_kg_per_m: f64,

    /// Moment of inertia about the strong axis Ix (cm⁴)
    pub ix_cm4: f64,

    /// Moment of inertia about the weak axis Iy (cm⁴)
    pub iy_cm4: f64,

    /// Section modulus about the strong axis Wx (cm³)
    pub wx_cm3: f64,

    /// Section modulus about the weak axis Wy (cm³)
    pub wy_cm3: f64,

    /// Radius of gyration about the strong axis, ix (cm)
    pub rx_cm: f64,

    /// Radius of gyration about the weak axis, iy (cm)
    pub ry_cm: f64,

    /// Outer surface area per meter S (m²/m)
    pub surface_area_m2_per_m: f64,
}

impl SectionProperties {
    /// Governing (minimum) radius of gyration
    pub fn r_min(&self) -> f64 {
        self.rx_cm.min(self.ry_cm)
    }
}

/// Compute section properties from dimensions and the tabulated area.
///
/// # Preconditions
///
/// `H > 2·t2`, `B > 0`, `t1 > 0`, `t2 > 0`, `area_cm2 > 0`. These are not
/// checked; violating them yields negative or NaN values. Use
/// [`try_compute_section_properties`] for free-form input.
pub fn compute_section_properties(dimensions: &BeamDimensions, area_cm2: f64) -> SectionProperties {
    let (h, b, t1, t2) = dimensions.in_centimeters();

    let ix = h_section_ix(h, b, t1, t2);
    let iy = h_section_iy(h, b, t1, t2);
    let wx = section_modulus(ix, h);
    let wy = section_modulus(iy, b);
    let rx = radius_of_gyration(ix, area_cm2);
    let ry = radius_of_gyration(iy, area_cm2);

    let perimeter = Millimeters(outline_perimeter(dimensions.height_mm, dimensions.width_mm));
    let surface = Meters::from(perimeter).value();

    debug!(
        height_mm = dimensions.height_mm,
        width_mm = dimensions.width_mm,
        area_cm2,
        ix,
        iy,
        "section properties"
    );

    SectionProperties {
        area_cm2: round2(area_cm2),
        weight_kg_per_m: round2(steel_weight_kg_per_m(area_cm2)),
        ix_cm4: round0(ix),
        iy_cm4: round0(iy),
        wx_cm3: round0(wx),
        wy_cm3: round0(wy),
        rx_cm: round2(rx),
        ry_cm: round2(ry),
        surface_area_m2_per_m: round2(surface),
    }
}

/// Checked variant of [`compute_section_properties`].
///
/// # Returns
///
/// * `Ok(SectionProperties)` - Calculation results
/// * `Err(CalcError)` - If a dimension or the area is non-positive, or H ≤ 2·t2
pub fn try_compute_section_properties(dimensions: &BeamDimensions, area_cm2: f64) -> CalcResult<SectionProperties> {
    dimensions.validate()?;
    if !(area_cm2 > 0.0) {
        return Err(CalcError::invalid_input(
            "section_area_cm2",
            area_cm2.to_string(),
            "Area must be positive",
        ));
    }
    Ok(compute_section_properties(dimensions, area_cm2))
}

/// Free-form calculation: validate the dimensions, estimate the area as
/// `(B·t1 + (H − t1)·t2) / 10`, then derive everything else from it.
pub fn calculate_from_dimensions(dimensions: &BeamDimensions) -> CalcResult<SectionProperties> {
    dimensions.validate()?;
    let area = h_section_area_estimate(
        dimensions.height_mm,
        dimensions.width_mm,
        dimensions.web_thickness_mm,
        dimensions.flange_thickness_mm,
    );
    try_compute_section_properties(dimensions, area)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hw200() -> BeamDimensions {
        BeamDimensions::new(200.0, 200.0, 8.0, 12.0)
    }

    #[test]
    fn test_hw200_with_listed_area() {
        let props = compute_section_properties(&hw200(), 63.53);
        assert_eq!(props.area_cm2, 63.53);
        assert_eq!(props.weight_kg_per_m, 49.87);
        assert_eq!(props.ix_cm4, 4605.0);
        assert_eq!(props.iy_cm4, 1601.0);
        assert_eq!(props.wx_cm3, 460.0);
        assert_eq!(props.wy_cm3, 160.0);
        assert_eq!(props.rx_cm, 8.51);
        assert_eq!(props.ry_cm, 5.02);
        assert_eq!(props.surface_area_m2_per_m, 0.8);
        assert_eq!(props.r_min(), 5.02);
    }

    #[test]
    fn test_free_form_uses_estimated_area() {
        let props = calculate_from_dimensions(&hw200()).unwrap();
        // (200·8 + 192·12) / 10 = 390.4
        assert_eq!(props.area_cm2, 390.4);
        // 390.4 × 7.85 / 10 = 306.464
        assert_eq!(props.weight_kg_per_m, 306.46);
        // Inertia does not depend on the area
        assert_eq!(props.ix_cm4, 4605.0);
    }

    #[test]
    fn test_invalid_dimension() {
        let mut dims = hw200();
        dims.web_thickness_mm = 0.0;
        let err = calculate_from_dimensions(&dims).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");

        dims.web_thickness_mm = f64::NAN;
        assert!(dims.validate().is_err());
    }

    #[test]
    fn test_flanges_fill_height() {
        let dims = BeamDimensions::new(20.0, 100.0, 6.0, 10.0);
        let err = try_compute_section_properties(&dims, 10.0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_GEOMETRY");
    }

    #[test]
    fn test_non_positive_area() {
        let err = try_compute_section_properties(&hw200(), 0.0).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "section_area_cm2"));
    }

    #[test]
    fn test_unchecked_path_with_flanges_overlapping() {
        // H = t2 in cm: flange arm 0, web height -1, so only the web term remains
        let props = compute_section_properties(&BeamDimensions::new(10.0, 10.0, 60.0, 10.0), 0.0);
        // Ix = 6·(-1)³/12 = -0.5
        assert_eq!(props.ix_cm4, -1.0);
        // Iy = 2·1·1³/12 + (-1)·6³/12 = -17.83
        assert_eq!(props.iy_cm4, -18.0);
        // √(-0.5 / 0)
        assert!(props.rx_cm.is_nan());
        assert_eq!(props.area_cm2, 0.0);
    }

    #[test]
    fn test_serialization() {
        let props = compute_section_properties(&hw200(), 63.53);
        let json = serde_json::to_string(&props).unwrap();
        let roundtrip: SectionProperties = serde_json::from_str(&json).unwrap();
        assert_eq!(props, roundtrip);
    }
}
