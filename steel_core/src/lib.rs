//! # steel_core - Structural Steel Calculation Engine
//!
//! `steel_core` holds the numeric logic behind the steel section reference
//! tool: H-beam section properties and sheet-metal unfold length. All inputs
//! and outputs are JSON-serializable so any front end (desktop UI, CLI,
//! scripts) can drive it.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Errors as data**: Unfold input problems come back as classified
//!   findings, never as panics
//!
//! ## Quick Start
//!
//! ```rust
//! use steel_core::calculations::{
//!     calculate_unfold_length, compute_section_properties, BeamDimensions, BendTemplate, ExperienceInput,
//!     UnfoldInput,
//! };
//! use steel_core::materials::MaterialId;
//!
//! let props = compute_section_properties(&BeamDimensions::new(200.0, 200.0, 8.0, 12.0), 63.53);
//! assert_eq!(props.weight_kg_per_m, 49.87);
//!
//! let input = UnfoldInput::Experience(ExperienceInput::new(
//!     BendTemplate::u(100.0, 50.0, 50.0),
//!     5.0,
//!     MaterialId::Carbon5mm,
//! ));
//! let result = calculate_unfold_length(&input);
//! assert_eq!(result.length_mm(), Some(183.0));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Section properties, unfold length, validation
//! - [`equations`] - Closed-form formulas and rounding
//! - [`materials`] - Deduction table, steel density, H-beam reference rows
//! - [`units`] - Type-safe length wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod materials;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate_unfold_length, compute_section_properties, validate, CalculationResult};
pub use errors::{CalcError, CalcResult};
