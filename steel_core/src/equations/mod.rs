//! # Engineering Equations
//!
//! All closed-form formulas used by the calculators live here, so they can be
//! checked against references in one place and reused by both calculation
//! paths.
//!
//! ## Modules
//!
//! - [`section`] - H-section geometric properties (I, W, i, perimeter)
//! - [`bending`] - Sheet-metal bend allowance and straight-edge geometry
//! - [`rounding`] - Fixed-precision rounding applied to every reported value

pub mod bending;
pub mod rounding;
pub mod section;

// Re-export commonly used items
pub use bending::{
    bend_allowance,
    bend_angle_radians,
    bend_line_offset,
    neutral_radius,
    straight_edge_double_bend,
    straight_edge_single_bend,
};

pub use rounding::{round0, round2, round_to};

pub use section::{
    h_section_area_estimate,
    h_section_ix,
    h_section_iy,
    outline_perimeter,
    radius_of_gyration,
    section_modulus,
};
