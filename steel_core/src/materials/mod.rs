//! # Materials and Reference Data
//!
//! Constant tables the calculators read from.
//!
//! - [`deductions`] - empirical per-bend deductions for sheet metal
//! - [`steel`] - steel density and H-beam reference rows
//!
//! ## Example
//!
//! ```rust
//! use steel_core::materials::{resolve_deduction, MaterialId};
//!
//! assert_eq!(resolve_deduction(MaterialId::Carbon5mm, None), 8.5);
//! assert_eq!(resolve_deduction(MaterialId::Stainless, Some(4.2)), 4.2);
//! ```

pub mod deductions;
pub mod steel;

pub use deductions::{resolve_deduction, MaterialDeduction, MaterialId, DEDUCTION_DATABASE};
pub use steel::{category_label, steel_weight_kg_per_m, HBeamCategory, HBeamSection, STEEL_DENSITY_G_PER_CM3};
