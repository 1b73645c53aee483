//! # Unfold Input Validation
//!
//! Classifies every input problem as blocking ([`Severity::Error`]) or
//! advisory ([`Severity::Warning`]). Problems are collected exhaustively so a
//! form can highlight every offending field at once; nothing here returns
//! `Err` or panics.

use serde::{Deserialize, Serialize};

use super::unfold::{BendTemplate, ExperienceInput, KFactorInput, UnfoldInput};
use crate::equations::rounding::round2;
use crate::materials::deductions::resolve_deduction;

/// Minimum recommended flange length as a multiple of thickness
pub const MIN_BEND_EDGE_THICKNESS_RATIO: f64 = 3.0;

/// Inner radius above this multiple of thickness counts as a large-radius bend
pub const LARGE_RADIUS_THICKNESS_RATIO: f64 = 2.0;

/// Upper bound of the K-factor (neutral axis at mid-thickness)
pub const MAX_K_FACTOR: f64 = 0.5;

/// Upper bound of the bend angle in degrees
pub const MAX_BEND_ANGLE_DEG: f64 = 180.0;

/// Whether an issue blocks the calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks computation
    Error,
    /// Advisory; the result is still produced
    Warning,
}

/// Input field an issue refers to. Serialized with the form field names the
/// UI uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    EdgeA,
    EdgeB,
    EdgeC,
    Thickness,
    Angle,
    InnerRadius,
    KFactor,
    CustomDeduction,
}

impl Field {
    /// Form field name
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::EdgeA => "edgeA",
            Field::EdgeB => "edgeB",
            Field::EdgeC => "edgeC",
            Field::Thickness => "thickness",
            Field::Angle => "angle",
            Field::InnerRadius => "innerRadius",
            Field::KFactor => "kFactor",
            Field::CustomDeduction => "customDeduction",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One validation finding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationWarning {
    /// Offending field
    pub field: Field,

    /// Human-readable message
    pub message: String,

    /// Blocking or advisory
    pub severity: Severity,
}

impl ValidationWarning {
    pub fn error(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
            severity: Severity::Error,
        }
    }

    pub fn warning(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
            severity: Severity::Warning,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// True if any finding blocks computation
pub fn has_errors(findings: &[ValidationWarning]) -> bool {
    findings.iter().any(ValidationWarning::is_error)
}

/// Validate an unfold request. The variant selects the mode-specific rules.
pub fn validate(input: &UnfoldInput) -> Vec<ValidationWarning> {
    match input {
        UnfoldInput::Experience(exp) => validate_experience(exp),
        UnfoldInput::KFactor(kf) => validate_kfactor(kf),
    }
}

/// Finite and strictly positive. NaN fails.
fn is_positive_length(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Rules shared by both modes: edge lengths, thickness, minimum flange.
fn validate_geometry(template: &BendTemplate, thickness_mm: f64, findings: &mut Vec<ValidationWarning>) {
    if !is_positive_length(template.edge_a_mm()) {
        findings.push(ValidationWarning::error(Field::EdgeA, "Edge A must be greater than 0"));
    }

    match template {
        BendTemplate::U { edge_b_mm, edge_c_mm, .. } => {
            if !is_positive_length(*edge_b_mm) {
                findings.push(ValidationWarning::error(Field::EdgeB, "Edge B must be greater than 0"));
            }
            if !is_positive_length(*edge_c_mm) {
                findings.push(ValidationWarning::error(Field::EdgeC, "Edge C must be greater than 0"));
            }
        }
        // L edge B is only range-checked for being a real number
        BendTemplate::L { edge_b_mm, .. } => {
            if !edge_b_mm.is_finite() {
                findings.push(ValidationWarning::error(Field::EdgeB, "Edge B must be a finite number"));
            }
        }
    }

    if !is_positive_length(thickness_mm) {
        findings.push(ValidationWarning::error(Field::Thickness, "Thickness must be greater than 0"));
    }

    // Only the L profile is checked against the minimum flange rule
    let min_bend_edge = thickness_mm * MIN_BEND_EDGE_THICKNESS_RATIO;
    if let BendTemplate::L { edge_a_mm, .. } = template {
        if *edge_a_mm < min_bend_edge {
            findings.push(ValidationWarning::warning(
                Field::EdgeA,
                format!(
                    "Edge A should be at least {}mm (thickness × 3)",
                    round2(min_bend_edge)
                ),
            ));
        }
    }
}

/// Validate input for the empirical deduction method.
pub fn validate_experience(input: &ExperienceInput) -> Vec<ValidationWarning> {
    let mut findings = Vec::new();
    validate_geometry(&input.template, input.thickness_mm, &mut findings);

    let deduction = resolve_deduction(input.material, input.custom_deduction_mm);
    if !is_positive_length(deduction) {
        findings.push(ValidationWarning::error(
            Field::CustomDeduction,
            "Deduction must be greater than 0; pick a tabulated material or enter a custom value",
        ));
    }

    findings
}

/// Validate input for the K-factor method.
pub fn validate_kfactor(input: &KFactorInput) -> Vec<ValidationWarning> {
    let mut findings = Vec::new();
    validate_geometry(&input.template, input.thickness_mm, &mut findings);

    if !(input.angle_deg > 0.0 && input.angle_deg <= MAX_BEND_ANGLE_DEG) {
        findings.push(ValidationWarning::error(
            Field::Angle,
            "Bend angle must be within (0, 180] degrees",
        ));
    }

    if !(input.inner_radius_mm >= 0.0 && input.inner_radius_mm.is_finite()) {
        findings.push(ValidationWarning::error(
            Field::InnerRadius,
            "Inner radius must be a finite number, not negative",
        ));
    }

    if !(input.k_factor > 0.0 && input.k_factor <= MAX_K_FACTOR) {
        findings.push(ValidationWarning::error(Field::KFactor, "K-factor must be within (0, 0.5]"));
    }

    if input.inner_radius_mm > input.thickness_mm * LARGE_RADIUS_THICKNESS_RATIO {
        findings.push(ValidationWarning::warning(
            Field::InnerRadius,
            "Large-radius bend (R > 2T); confirm the K-factor with a test bend",
        ));
    }

    findings
}
