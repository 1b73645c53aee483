//! # Unit Types
//!
//! Type-safe wrappers for the metric lengths used by the engine. They are
//! plain f64 newtypes so JSON stays clean (just numbers).
//!
//! The engine only ever converts between millimeters, centimeters and meters,
//! and only where a formula fixes the unit:
//! - Section dimensions are entered in mm and evaluated in cm
//! - Surface area per meter is a perimeter expressed in m
//! - Sheet-metal lengths stay in mm throughout
//!
//! ## Example
//!
//! ```rust
//! use steel_core::units::{Centimeters, Meters, Millimeters};
//!
//! let height = Millimeters(200.0);
//! let height_cm: Centimeters = height.into();
//! assert_eq!(height_cm.0, 20.0);
//!
//! let perimeter: Meters = Millimeters(1600.0).into();
//! assert_eq!(perimeter.0, 1.6);
//! ```

use serde::{Deserialize, Serialize};

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Length in centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centimeters(pub f64);

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

impl From<Millimeters> for Centimeters {
    fn from(mm: Millimeters) -> Self {
        Centimeters(mm.0 / 10.0)
    }
}

impl From<Centimeters> for Millimeters {
    fn from(cm: Centimeters) -> Self {
        Millimeters(cm.0 * 10.0)
    }
}

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

impl From<Centimeters> for Meters {
    fn from(cm: Centimeters) -> Self {
        Meters(cm.0 / 100.0)
    }
}

macro_rules! impl_value {
    ($($type:ty),*) => {
        $(
            impl $type {
                /// Get the raw f64 value
                pub fn value(self) -> f64 {
                    self.0
                }
            }
        )*
    };
}

impl_value!(Millimeters, Centimeters, Meters);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mm_to_cm_and_back() {
        let cm: Centimeters = Millimeters(125.0).into();
        assert_eq!(cm.0, 12.5);
        let mm: Millimeters = cm.into();
        assert_eq!(mm.0, 125.0);
    }

    #[test]
    fn test_to_meters() {
        let from_mm: Meters = Millimeters(2500.0).into();
        let from_cm: Meters = Centimeters(250.0).into();
        assert_eq!(from_mm, from_cm);
    }

    #[test]
    fn test_value() {
        assert_eq!(Centimeters::from(Millimeters(8.0)).value(), 0.8);
        assert_eq!(Meters::from(Millimeters(800.0)).value(), 0.8);
    }

    #[test]
    fn test_serialization() {
        let mm = Millimeters(12.5);
        let json = serde_json::to_string(&mm).unwrap();
        assert_eq!(json, "12.5");
    }
}
