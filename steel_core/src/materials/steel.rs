//! Hot-Rolled H-Beam Reference Rows
//!
//! Types describing one row of the national-standard hot-rolled H-beam
//! table (GB/T 11263). Loading the table is the caller's business; these
//! types give a row a typed shape and connect it to the section calculator.
//!
//! ## Categories
//!
//! - **HW**: wide flange (B ≈ H)
//! - **HM**: medium flange
//! - **HN**: narrow flange (beam sections)
//! - **HT**: thin wall
//!
//! ## Example
//!
//! ```rust
//! use steel_core::materials::steel::{HBeamCategory, HBeamSection};
//!
//! let row = HBeamSection {
//!     model: "200×200".to_string(),
//!     category: HBeamCategory::WideFlange,
//!     height_mm: 200.0,
//!     width_mm: 200.0,
//!     web_thickness_mm: 8.0,
//!     flange_thickness_mm: 12.0,
//!     corner_radius_mm: 13.0,
//!     section_area_cm2: 63.53,
//!     theoretical_weight_kg_per_m: 49.9,
//! };
//!
//! let props = row.properties();
//! assert_eq!(props.ix_cm4, 4605.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::section_properties::{compute_section_properties, BeamDimensions, SectionProperties};

/// Density of structural steel (g/cm³)
pub const STEEL_DENSITY_G_PER_CM3: f64 = 7.85;

/// Weight per meter of a steel bar with the given cross-sectional area.
///
/// A (cm²) × ρ (g/cm³) gives g/cm; dividing by 10 gives kg/m.
#[inline]
pub fn steel_weight_kg_per_m(area_cm2: f64) -> f64 {
    area_cm2 * STEEL_DENSITY_G_PER_CM3 / 10.0
}

/// H-beam flange category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HBeamCategory {
    /// HW - wide flange
    #[serde(rename = "HW_wide_flange")]
    WideFlange,
    /// HM - medium flange
    #[serde(rename = "HM_medium_flange")]
    MediumFlange,
    /// HN - narrow flange
    #[serde(rename = "HN_narrow_flange")]
    NarrowFlange,
    /// HT - thin wall
    #[serde(rename = "HT_thin_wall")]
    ThinWall,
}

impl HBeamCategory {
    /// All categories for iteration
    pub const ALL: [HBeamCategory; 4] = [
        HBeamCategory::WideFlange,
        HBeamCategory::MediumFlange,
        HBeamCategory::NarrowFlange,
        HBeamCategory::ThinWall,
    ];

    /// Table code as it appears in the reference data
    pub fn code(&self) -> &'static str {
        match self {
            HBeamCategory::WideFlange => "HW_wide_flange",
            HBeamCategory::MediumFlange => "HM_medium_flange",
            HBeamCategory::NarrowFlange => "HN_narrow_flange",
            HBeamCategory::ThinWall => "HT_thin_wall",
        }
    }

    /// Short prefix (HW, HM, HN, HT)
    pub fn prefix(&self) -> &'static str {
        match self {
            HBeamCategory::WideFlange => "HW",
            HBeamCategory::MediumFlange => "HM",
            HBeamCategory::NarrowFlange => "HN",
            HBeamCategory::ThinWall => "HT",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            HBeamCategory::WideFlange => "HW (wide flange)",
            HBeamCategory::MediumFlange => "HM (medium flange)",
            HBeamCategory::NarrowFlange => "HN (narrow flange)",
            HBeamCategory::ThinWall => "HT (thin wall)",
        }
    }

    /// Parse from a table code or a bare prefix
    pub fn from_code(s: &str) -> Option<Self> {
        let s = s.trim();
        HBeamCategory::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(s) || c.prefix().eq_ignore_ascii_case(s))
    }
}

impl std::fmt::Display for HBeamCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Display label for a raw category code; unknown codes are passed through.
pub fn category_label(code: &str) -> String {
    HBeamCategory::from_code(code)
        .map(|c| c.display_name().to_string())
        .unwrap_or_else(|| code.to_string())
}

/// One row of the H-beam reference table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HBeamSection {
    /// Model designation (e.g., "200×200")
    pub model: String,

    /// Flange category
    pub category: HBeamCategory,

    /// Overall height H (mm)
    pub height_mm: f64,

    /// Flange width B (mm)
    pub width_mm: f64,

    /// Web thickness t1 (mm)
    pub web_thickness_mm: f64,

    /// Flange thickness t2 (mm)
    pub flange_thickness_mm: f64,

    /// Root fillet radius r (mm); informational, not used by the formulas
    pub corner_radius_mm: f64,

    /// Listed cross-sectional area (cm²), authoritative over any estimate
    pub section_area_cm2: f64,

    /// Listed theoretical weight (kg/m)
    pub theoretical_weight_kg_per_m: f64,
}

impl HBeamSection {
    /// The four outer dimensions of this row
    pub fn dimensions(&self) -> BeamDimensions {
        BeamDimensions {
            height_mm: self.height_mm,
            width_mm: self.width_mm,
            web_thickness_mm: self.web_thickness_mm,
            flange_thickness_mm: self.flange_thickness_mm,
        }
    }

    /// Derived section properties using the listed area
    pub fn properties(&self) -> SectionProperties {
        compute_section_properties(&self.dimensions(), self.section_area_cm2)
    }
}

impl std::fmt::Display for HBeamSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} (A={:.2} cm², {:.2} kg/m)",
            self.category.prefix(),
            self.model,
            self.section_area_cm2,
            self.theoretical_weight_kg_per_m
        )
    }
}
