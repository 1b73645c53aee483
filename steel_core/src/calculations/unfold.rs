//! # Sheet-Metal Unfold Length
//!
//! Flat-pattern length of L- and U-shaped bent profiles, by either of two
//! methods:
//!
//! - **Empirical deduction** ([`calculate_by_experience`]): sum of outer edges
//!   minus a tabulated per-bend deduction.
//! - **K-factor** ([`calculate_by_kfactor`]): straight edges plus the bend
//!   allowance BA = (π·θ/180)·(R + K·T) for each bend.
//!
//! Every calculation validates first (see [`validation`](super::validation)).
//! Blocking problems produce [`CalculationResult::Invalid`]; otherwise the
//! result carries the total, an ordered derivation trace and any advisory
//! warnings.
//!
//! ## Example
//!
//! ```rust
//! use steel_core::calculations::unfold::{calculate_unfold_length, BendTemplate, KFactorInput, UnfoldInput};
//!
//! let input = UnfoldInput::KFactor(KFactorInput::new(BendTemplate::l(100.0, 50.0), 5.0, 90.0, 3.0, 0.33));
//! let result = calculate_unfold_length(&input);
//!
//! assert!(result.is_valid());
//! assert_eq!(result.length_mm(), Some(141.3));
//! ```
//!
//! ## Assumptions
//!
//! - Edge lengths are outer dimensions
//! - All bends of a profile share one angle and inner radius
//! - Bend direction only affects which face a drawing treats as reference

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::validation::{has_errors, validate_experience, validate_kfactor, ValidationWarning};
use crate::equations::bending::{
    bend_allowance, bend_angle_radians, bend_line_offset, neutral_radius, straight_edge_double_bend,
    straight_edge_single_bend,
};
use crate::equations::rounding::round2;
use crate::materials::deductions::{resolve_deduction, MaterialId};

/// Bent profile shape with its outer edge lengths (mm).
///
/// ## JSON Example
///
/// ```json
/// { "template": "U", "edge_a_mm": 100.0, "edge_b_mm": 50.0, "edge_c_mm": 50.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "template")]
pub enum BendTemplate {
    /// One bend, two edges
    L { edge_a_mm: f64, edge_b_mm: f64 },
    /// Two bends, three edges; B is the web between them
    U {
        edge_a_mm: f64,
        edge_b_mm: f64,
        edge_c_mm: f64,
    },
}

impl BendTemplate {
    /// Create an L profile
    pub fn l(edge_a_mm: f64, edge_b_mm: f64) -> Self {
        BendTemplate::L { edge_a_mm, edge_b_mm }
    }

    /// Create a U profile
    pub fn u(edge_a_mm: f64, edge_b_mm: f64, edge_c_mm: f64) -> Self {
        BendTemplate::U {
            edge_a_mm,
            edge_b_mm,
            edge_c_mm,
        }
    }

    /// Edge A, present on every template
    pub fn edge_a_mm(&self) -> f64 {
        match *self {
            BendTemplate::L { edge_a_mm, .. } | BendTemplate::U { edge_a_mm, .. } => edge_a_mm,
        }
    }

    /// Number of bends in the profile
    pub fn bend_count(&self) -> u8 {
        match self {
            BendTemplate::L { .. } => 1,
            BendTemplate::U { .. } => 2,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BendTemplate::L { .. } => "L",
            BendTemplate::U { .. } => "U",
        }
    }
}

/// Bend direction relative to the drawing's reference face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BendDirection {
    #[default]
    Up,
    Down,
}

/// Input for the empirical deduction method.
///
/// ## JSON Example
///
/// ```json
/// {
///   "template": { "template": "L", "edge_a_mm": 100.0, "edge_b_mm": 50.0 },
///   "thickness_mm": 5.0,
///   "material": "carbon_5mm",
///   "custom_deduction_mm": null,
///   "direction": "up"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceInput {
    /// Profile and outer edge lengths
    pub template: BendTemplate,

    /// Sheet thickness T (mm)
    pub thickness_mm: f64,

    /// Material for the deduction table lookup
    pub material: MaterialId,

    /// Per-bend deduction (mm); used instead of the table when positive
    #[serde(default)]
    pub custom_deduction_mm: Option<f64>,

    #[serde(default)]
    pub direction: BendDirection,
}

impl ExperienceInput {
    pub fn new(template: BendTemplate, thickness_mm: f64, material: MaterialId) -> Self {
        Self {
            template,
            thickness_mm,
            material,
            custom_deduction_mm: None,
            direction: BendDirection::default(),
        }
    }

    /// Use a caller-supplied deduction
    pub fn with_custom_deduction(mut self, deduction_mm: f64) -> Self {
        self.custom_deduction_mm = Some(deduction_mm);
        self
    }

    /// Deduction that will be applied per bend
    pub fn deduction_mm(&self) -> f64 {
        resolve_deduction(self.material, self.custom_deduction_mm)
    }

    pub fn validate(&self) -> Vec<ValidationWarning> {
        validate_experience(self)
    }
}

/// Input for the K-factor method.
///
/// ## JSON Example
///
/// ```json
/// {
///   "template": { "template": "L", "edge_a_mm": 100.0, "edge_b_mm": 50.0 },
///   "thickness_mm": 5.0,
///   "angle_deg": 90.0,
///   "inner_radius_mm": 3.0,
///   "k_factor": 0.33,
///   "direction": "up"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KFactorInput {
    /// Profile and outer edge lengths
    pub template: BendTemplate,

    /// Sheet thickness T (mm)
    pub thickness_mm: f64,

    /// Bend angle θ in degrees, (0, 180]
    pub angle_deg: f64,

    /// Inner bend radius R (mm)
    pub inner_radius_mm: f64,

    /// K-factor, (0, 0.5]
    pub k_factor: f64,

    #[serde(default)]
    pub direction: BendDirection,
}

impl KFactorInput {
    pub fn new(template: BendTemplate, thickness_mm: f64, angle_deg: f64, inner_radius_mm: f64, k_factor: f64) -> Self {
        Self {
            template,
            thickness_mm,
            angle_deg,
            inner_radius_mm,
            k_factor,
            direction: BendDirection::default(),
        }
    }

    pub fn validate(&self) -> Vec<ValidationWarning> {
        validate_kfactor(self)
    }
}

/// Calculation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnfoldMode {
    Experience,
    KFactor,
}

/// An unfold request; the variant selects the method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum UnfoldInput {
    /// Empirical deduction method
    Experience(ExperienceInput),
    /// K-factor bend allowance method
    KFactor(KFactorInput),
}

impl UnfoldInput {
    pub fn mode(&self) -> UnfoldMode {
        match self {
            UnfoldInput::Experience(_) => UnfoldMode::Experience,
            UnfoldInput::KFactor(_) => UnfoldMode::KFactor,
        }
    }

    pub fn template(&self) -> &BendTemplate {
        match self {
            UnfoldInput::Experience(input) => &input.template,
            UnfoldInput::KFactor(input) => &input.template,
        }
    }
}

/// Edge label on a bent profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edge {
    A,
    B,
    C,
}

/// Bend-line marking position on the flat blank, measured from the free
/// end of `edge`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BendLine {
    pub edge: Edge,

    /// Straight edge + BA/2 (mm), rounded to 2 places
    pub position_mm: f64,

    /// Substituted calculation, e.g. "92 + 3.65 = 95.65mm"
    pub calculation: String,
}

/// Outcome of an unfold calculation.
///
/// The two states are exclusive: a valid result always has a non-empty
/// trace, an invalid one never has a length. On the wire it is a flat
/// record with an `is_valid` flag and a `total_length_mm` of 0 for invalid
/// results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "ResultRecord", try_from = "ResultRecord")]
pub enum CalculationResult {
    Valid {
        /// Flat length (mm), rounded to 2 places
        total_length_mm: f64,
        /// Derivation trace in computation order
        breakdown: Vec<String>,
        /// Advisory messages
        warnings: Vec<String>,
        /// Bend-line positions (K-factor method only)
        bend_lines: Vec<BendLine>,
    },
    Invalid {
        /// Every blocking finding
        errors: Vec<ValidationWarning>,
    },
}

impl CalculationResult {
    fn invalid(findings: Vec<ValidationWarning>) -> Self {
        CalculationResult::Invalid {
            errors: findings.into_iter().filter(ValidationWarning::is_error).collect(),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, CalculationResult::Valid { .. })
    }

    /// Flat length, `None` for an invalid result
    pub fn length_mm(&self) -> Option<f64> {
        match self {
            CalculationResult::Valid { total_length_mm, .. } => Some(*total_length_mm),
            CalculationResult::Invalid { .. } => None,
        }
    }

    /// Flat length with the wire sentinel 0 for an invalid result. Check
    /// [`is_valid`](Self::is_valid) before displaying it.
    pub fn total_length_mm(&self) -> f64 {
        self.length_mm().unwrap_or(0.0)
    }

    pub fn breakdown(&self) -> &[String] {
        match self {
            CalculationResult::Valid { breakdown, .. } => breakdown,
            CalculationResult::Invalid { .. } => &[],
        }
    }

    /// Advisory messages of a valid result
    pub fn warnings(&self) -> &[String] {
        match self {
            CalculationResult::Valid { warnings, .. } => warnings,
            CalculationResult::Invalid { .. } => &[],
        }
    }

    pub fn bend_lines(&self) -> &[BendLine] {
        match self {
            CalculationResult::Valid { bend_lines, .. } => bend_lines,
            CalculationResult::Invalid { .. } => &[],
        }
    }

    /// Blocking findings of an invalid result
    pub fn errors(&self) -> &[ValidationWarning] {
        match self {
            CalculationResult::Valid { .. } => &[],
            CalculationResult::Invalid { errors } => errors,
        }
    }

    pub fn error_messages(&self) -> Vec<&str> {
        self.errors().iter().map(|e| e.message.as_str()).collect()
    }
}

/// Flat wire form of [`CalculationResult`]
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ResultRecord {
    total_length_mm: f64,
    breakdown: Vec<String>,
    is_valid: bool,
    warnings: Vec<String>,
    #[serde(default)]
    errors: Vec<ValidationWarning>,
    #[serde(default)]
    bend_lines: Vec<BendLine>,
}

impl From<CalculationResult> for ResultRecord {
    fn from(result: CalculationResult) -> Self {
        match result {
            CalculationResult::Valid {
                total_length_mm,
                breakdown,
                warnings,
                bend_lines,
            } => ResultRecord {
                total_length_mm,
                breakdown,
                is_valid: true,
                warnings,
                errors: Vec::new(),
                bend_lines,
            },
            CalculationResult::Invalid { errors } => ResultRecord {
                total_length_mm: 0.0,
                breakdown: Vec::new(),
                is_valid: false,
                warnings: errors.iter().map(|e| e.message.clone()).collect(),
                errors,
                bend_lines: Vec::new(),
            },
        }
    }
}

impl TryFrom<ResultRecord> for CalculationResult {
    type Error = String;

    fn try_from(record: ResultRecord) -> Result<Self, Self::Error> {
        if !record.is_valid {
            return Ok(CalculationResult::Invalid { errors: record.errors });
        }
        if record.breakdown.is_empty() {
            return Err("valid result must carry a breakdown".to_string());
        }
        Ok(CalculationResult::Valid {
            total_length_mm: record.total_length_mm,
            breakdown: record.breakdown,
            warnings: record.warnings,
            bend_lines: record.bend_lines,
        })
    }
}

/// Advisory messages out of a validated finding list
fn advisory_messages(findings: &[ValidationWarning]) -> Vec<String> {
    findings
        .iter()
        .filter(|f| !f.is_error())
        .map(|f| f.message.clone())
        .collect()
}

/// Run either method according to the request variant.
pub fn calculate_unfold_length(input: &UnfoldInput) -> CalculationResult {
    match input {
        UnfoldInput::Experience(exp) => calculate_by_experience(exp),
        UnfoldInput::KFactor(kf) => calculate_by_kfactor(kf),
    }
}

/// Empirical deduction method.
///
/// - L: total = A + B (the deduction is listed in the trace only)
/// - U: total = A + B + C − 2·d
pub fn calculate_by_experience(input: &ExperienceInput) -> CalculationResult {
    let findings = validate_experience(input);
    if has_errors(&findings) {
        debug!(mode = "experience", errors = findings.len(), "unfold input rejected");
        return CalculationResult::invalid(findings);
    }

    let deduction = input.deduction_mm();
    let mut breakdown = Vec::new();

    let total_length_mm = match input.template {
        BendTemplate::L { edge_a_mm, edge_b_mm } => {
            let total = round2(edge_a_mm + edge_b_mm);
            breakdown.push(format!("Edge A: {}mm", round2(edge_a_mm)));
            breakdown.push(format!("Edge B: {}mm", round2(edge_b_mm)));
            breakdown.push(format!("Deduction: {}mm", round2(deduction)));
            breakdown.push(format!("Flat length: {}mm", total));
            total
        }
        BendTemplate::U {
            edge_a_mm,
            edge_b_mm,
            edge_c_mm,
        } => {
            let total = round2(edge_a_mm + edge_b_mm + edge_c_mm - 2.0 * deduction);
            breakdown.push(format!("Edge A: {}mm", round2(edge_a_mm)));
            breakdown.push(format!("Edge B: {}mm", round2(edge_b_mm)));
            breakdown.push(format!("Edge C: {}mm", round2(edge_c_mm)));
            breakdown.push(format!(
                "Deduction: {}mm × 2 = {}mm",
                round2(deduction),
                round2(2.0 * deduction)
            ));
            breakdown.push(format!("Flat length: {}mm", total));
            total
        }
    };

    debug!(
        mode = "experience",
        template = input.template.name(),
        material = %input.material,
        deduction,
        total_length_mm,
        "unfold length"
    );

    CalculationResult::Valid {
        total_length_mm,
        breakdown,
        warnings: advisory_messages(&findings),
        bend_lines: Vec::new(),
    }
}

/// Trace lines for the bend allowance: formula, factored form, value.
fn bend_allowance_trace(input: &KFactorInput, rounded_ba: f64) -> [String; 3] {
    [
        format!(
            "Bend allowance BA = (π × {} / 180) × ({} + {} × {})",
            round2(input.angle_deg),
            round2(input.inner_radius_mm),
            round2(input.k_factor),
            round2(input.thickness_mm)
        ),
        format!(
            "= {} × {}",
            round2(bend_angle_radians(input.angle_deg)),
            round2(neutral_radius(input.inner_radius_mm, input.k_factor, input.thickness_mm))
        ),
        format!("= {}mm", rounded_ba),
    ]
}

fn bend_line(edge: Edge, straight_edge: f64, rounded_ba: f64) -> BendLine {
    let position_mm = round2(bend_line_offset(straight_edge, rounded_ba));
    BendLine {
        edge,
        position_mm,
        calculation: format!(
            "{} + {} = {}mm",
            round2(straight_edge),
            round2(rounded_ba / 2.0),
            position_mm
        ),
    }
}

/// K-factor method.
///
/// - L: A' = A − (R + T), B' = B − (R + T), total = A' + B' + BA
/// - U: X' = X − (2R + T) for each edge, total = A' + B' + C' + 2·BA
///
/// The total uses the unrounded BA; the trace and bend lines show the BA
/// rounded to 2 places.
pub fn calculate_by_kfactor(input: &KFactorInput) -> CalculationResult {
    let findings = validate_kfactor(input);
    if has_errors(&findings) {
        debug!(mode = "kfactor", errors = findings.len(), "unfold input rejected");
        return CalculationResult::invalid(findings);
    }

    let r = input.inner_radius_mm;
    let t = input.thickness_mm;
    let ba = bend_allowance(input.angle_deg, r, input.k_factor, t);
    let rounded_ba = round2(ba);

    let mut breakdown = Vec::new();
    let mut bend_lines = Vec::new();

    let total_length_mm = match input.template {
        BendTemplate::L { edge_a_mm, edge_b_mm } => {
            let straight_a = straight_edge_single_bend(edge_a_mm, r, t);
            let straight_b = straight_edge_single_bend(edge_b_mm, r, t);
            let total = round2(straight_a + straight_b + ba);

            breakdown.push(format!("Outer edge A: {}mm", round2(edge_a_mm)));
            breakdown.push(format!("Outer edge B: {}mm", round2(edge_b_mm)));
            for (label, outer, straight) in [("A", edge_a_mm, straight_a), ("B", edge_b_mm, straight_b)] {
                breakdown.push(format!(
                    "Straight edge {label}' = {label} - (R + T) = {} - ({} + {}) = {}mm",
                    round2(outer),
                    round2(r),
                    round2(t),
                    round2(straight)
                ));
            }
            breakdown.extend(bend_allowance_trace(input, rounded_ba));
            breakdown.push(format!(
                "Flat length L = A' + B' + BA = {} + {} + {} = {}mm",
                round2(straight_a),
                round2(straight_b),
                rounded_ba,
                total
            ));

            bend_lines.push(bend_line(Edge::A, straight_a, rounded_ba));
            bend_lines.push(bend_line(Edge::B, straight_b, rounded_ba));
            total
        }
        BendTemplate::U {
            edge_a_mm,
            edge_b_mm,
            edge_c_mm,
        } => {
            let straight_a = straight_edge_double_bend(edge_a_mm, r, t);
            let straight_b = straight_edge_double_bend(edge_b_mm, r, t);
            let straight_c = straight_edge_double_bend(edge_c_mm, r, t);
            let total = round2(straight_a + straight_b + straight_c + 2.0 * ba);

            breakdown.push(format!("Outer edge A: {}mm", round2(edge_a_mm)));
            breakdown.push(format!("Outer edge B: {}mm", round2(edge_b_mm)));
            breakdown.push(format!("Outer edge C: {}mm", round2(edge_c_mm)));
            for (label, outer, straight) in [
                ("A", edge_a_mm, straight_a),
                ("B", edge_b_mm, straight_b),
                ("C", edge_c_mm, straight_c),
            ] {
                breakdown.push(format!(
                    "Straight edge {label}' = {label} - (2R + T) = {} - (2 × {} + {}) = {}mm",
                    round2(outer),
                    round2(r),
                    round2(t),
                    round2(straight)
                ));
            }
            breakdown.extend(bend_allowance_trace(input, rounded_ba));
            breakdown.push(format!(
                "Flat length L = A' + B' + C' + 2 × BA = {} + {} + {} + 2 × {} = {}mm",
                round2(straight_a),
                round2(straight_b),
                round2(straight_c),
                rounded_ba,
                total
            ));

            // B is the web between both bends and gets no bend line of its own
            bend_lines.push(bend_line(Edge::A, straight_a, rounded_ba));
            bend_lines.push(bend_line(Edge::C, straight_c, rounded_ba));
            total
        }
    };

    debug!(
        mode = "kfactor",
        template = input.template.name(),
        bend_allowance = ba,
        total_length_mm,
        "unfold length"
    );

    CalculationResult::Valid {
        total_length_mm,
        breakdown,
        warnings: advisory_messages(&findings),
        bend_lines,
    }
}
