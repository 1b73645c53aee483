//! # Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` / dimension types - Input parameters (JSON-serializable)
//! - `*Result` / property types - Results (JSON-serializable)
//! - a pure function from one to the other
//!
//! ## Available Calculations
//!
//! - [`section_properties`] - H-beam section properties
//! - [`unfold`] - Sheet-metal flat length, empirical or K-factor
//! - [`validation`] - Blocking/advisory classification of unfold input

pub mod section_properties;
pub mod unfold;
pub mod validation;

// Re-export commonly used types
pub use section_properties::{
    calculate_from_dimensions, compute_section_properties, try_compute_section_properties, BeamDimensions,
    SectionProperties,
};
pub use unfold::{
    calculate_by_experience, calculate_by_kfactor, calculate_unfold_length, BendDirection, BendLine, BendTemplate,
    CalculationResult, Edge, ExperienceInput, KFactorInput, UnfoldInput, UnfoldMode,
};
pub use validation::{validate, Field, Severity, ValidationWarning};
