//! Empirical Bend Deduction Table
//!
//! Shop-floor deduction values for the empirical unfold method. Each bend
//! subtracts one deduction from the sum of the outer edge lengths. Materials
//! without a tabulated constant need a caller-supplied value.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

use crate::errors::{CalcError, CalcResult};

/// Material identifier for the deduction table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MaterialId {
    /// 5 mm carbon steel
    #[default]
    #[serde(rename = "carbon_5mm")]
    Carbon5mm,
    /// 10 mm carbon steel
    #[serde(rename = "carbon_10mm")]
    Carbon10mm,
    /// Stainless steel (no tabulated value)
    #[serde(rename = "stainless")]
    Stainless,
    /// Aluminum sheet (no tabulated value)
    #[serde(rename = "aluminum")]
    Aluminum,
    /// User-defined deduction
    #[serde(rename = "custom")]
    Custom,
}

impl MaterialId {
    /// All material identifiers for iteration
    pub const ALL: [MaterialId; 5] = [
        MaterialId::Carbon5mm,
        MaterialId::Carbon10mm,
        MaterialId::Stainless,
        MaterialId::Aluminum,
        MaterialId::Custom,
    ];

    /// Wire code, as used in JSON and on the command line
    pub fn code(&self) -> &'static str {
        match self {
            MaterialId::Carbon5mm => "carbon_5mm",
            MaterialId::Carbon10mm => "carbon_10mm",
            MaterialId::Stainless => "stainless",
            MaterialId::Aluminum => "aluminum",
            MaterialId::Custom => "custom",
        }
    }

    /// Table entry for this material
    pub fn deduction(&self) -> &'static MaterialDeduction {
        match self {
            MaterialId::Carbon5mm => &CARBON_5MM,
            MaterialId::Carbon10mm => &CARBON_10MM,
            MaterialId::Stainless => &STAINLESS,
            MaterialId::Aluminum => &ALUMINUM,
            MaterialId::Custom => &CUSTOM,
        }
    }
}

impl std::fmt::Display for MaterialId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for MaterialId {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        let code = s.trim().to_lowercase();
        DEDUCTION_DATABASE
            .get(code.as_str())
            .map(|row| row.material)
            .ok_or_else(|| CalcError::material_not_found(s))
    }
}

/// One row of the deduction table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaterialDeduction {
    /// Material identifier
    pub material: MaterialId,

    /// Nominal sheet thickness the value was measured at (mm), if any
    pub thickness_mm: Option<f64>,

    /// Deduction per bend (mm); `None` means the caller must supply one
    pub deduction_mm: Option<f64>,

    /// Human-readable description
    pub description: &'static str,
}

impl MaterialDeduction {
    /// Whether this material needs a caller-supplied deduction
    pub fn requires_override(&self) -> bool {
        self.deduction_mm.is_none()
    }
}

static CARBON_5MM: MaterialDeduction = MaterialDeduction {
    material: MaterialId::Carbon5mm,
    thickness_mm: Some(5.0),
    deduction_mm: Some(8.5),
    description: "5 mm carbon steel",
};

static CARBON_10MM: MaterialDeduction = MaterialDeduction {
    material: MaterialId::Carbon10mm,
    thickness_mm: Some(10.0),
    deduction_mm: Some(17.0),
    description: "10 mm carbon steel",
};

static STAINLESS: MaterialDeduction = MaterialDeduction {
    material: MaterialId::Stainless,
    thickness_mm: None,
    deduction_mm: None,
    description: "Stainless steel (custom value required)",
};

static ALUMINUM: MaterialDeduction = MaterialDeduction {
    material: MaterialId::Aluminum,
    thickness_mm: None,
    deduction_mm: None,
    description: "Aluminum sheet (custom value required)",
};

static CUSTOM: MaterialDeduction = MaterialDeduction {
    material: MaterialId::Custom,
    thickness_mm: None,
    deduction_mm: None,
    description: "Custom",
};

/// Process-wide deduction table, keyed by wire code
pub static DEDUCTION_DATABASE: Lazy<HashMap<&'static str, &'static MaterialDeduction>> = Lazy::new(|| {
    MaterialId::ALL
        .into_iter()
        .map(|material| (material.code(), material.deduction()))
        .collect()
});

/// Resolve the deduction for one bend: a positive override wins, otherwise the
/// tabulated value, otherwise 0 (which validation rejects).
pub fn resolve_deduction(material: MaterialId, custom_deduction_mm: Option<f64>) -> f64 {
    match custom_deduction_mm {
        Some(custom) if custom > 0.0 => custom,
        _ => material.deduction().deduction_mm.unwrap_or(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_all_materials() {
        assert_eq!(DEDUCTION_DATABASE.len(), MaterialId::ALL.len());
        for material in MaterialId::ALL {
            assert_eq!(material.deduction().material, material);
            assert_eq!(DEDUCTION_DATABASE[material.code()], material.deduction());
        }
    }

    #[test]
    fn test_carbon_values() {
        assert_eq!(MaterialId::Carbon5mm.deduction().deduction_mm, Some(8.5));
        assert_eq!(MaterialId::Carbon10mm.deduction().deduction_mm, Some(17.0));
        assert!(MaterialId::Stainless.deduction().requires_override());
    }

    #[test]
    fn test_resolve_deduction() {
        assert_eq!(resolve_deduction(MaterialId::Carbon5mm, None), 8.5);
        assert_eq!(resolve_deduction(MaterialId::Carbon5mm, Some(6.0)), 6.0);
        // Non-positive override falls back to the table
        assert_eq!(resolve_deduction(MaterialId::Carbon10mm, Some(0.0)), 17.0);
        assert_eq!(resolve_deduction(MaterialId::Aluminum, None), 0.0);
        assert_eq!(resolve_deduction(MaterialId::Custom, Some(-2.0)), 0.0);
    }

    #[test]
    fn test_parse_material() {
        assert_eq!("carbon_5mm".parse::<MaterialId>().unwrap(), MaterialId::Carbon5mm);
        assert_eq!(" Stainless ".parse::<MaterialId>().unwrap(), MaterialId::Stainless);
        let err = "brass".parse::<MaterialId>().unwrap_err();
        assert_eq!(err.error_code(), "MATERIAL_NOT_FOUND");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&MaterialId::Carbon10mm).unwrap();
        assert_eq!(json, "\"carbon_10mm\"");
    }
}
