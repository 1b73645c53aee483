//! End-to-end checks of the public calculator API.

use proptest::prelude::*;

use steel_core::calculations::{
    calculate_by_experience, calculate_by_kfactor, calculate_unfold_length, compute_section_properties, validate,
    BeamDimensions, BendTemplate, ExperienceInput, Field, KFactorInput, Severity, UnfoldInput,
};
use steel_core::materials::{HBeamCategory, HBeamSection, MaterialId};

/// `scaled` matches `base · factor` within the rounding of both values.
fn within_rounding(scaled: f64, base: f64, factor: f64, half_step: f64) -> bool {
    let expected = base * factor;
    (scaled - expected).abs() <= half_step * (1.0 + factor) + 1e-9 * expected.abs().max(1.0)
}

fn assert_result_shape(result: &steel_core::CalculationResult) {
    if result.is_valid() {
        assert!(!result.breakdown().is_empty());
        assert!(result.errors().is_empty());
    } else {
        assert_eq!(result.total_length_mm(), 0.0);
        assert!(result.breakdown().is_empty());
        assert!(!result.errors().is_empty());
    }
}

#[test]
fn experience_u_carbon_5mm() {
    let input = ExperienceInput::new(BendTemplate::u(100.0, 50.0, 50.0), 5.0, MaterialId::Carbon5mm);
    let result = calculate_by_experience(&input);
    assert_eq!(result.length_mm(), Some(183.0));
    assert_result_shape(&result);
}

#[test]
fn experience_l_total_independent_of_deduction() {
    for deduction in [1.0, 8.5, 30.0] {
        let input = ExperienceInput::new(BendTemplate::l(100.0, 50.0), 5.0, MaterialId::Custom)
            .with_custom_deduction(deduction);
        assert_eq!(calculate_by_experience(&input).length_mm(), Some(150.0));
    }
}

#[test]
fn kfactor_l_reference_case() {
    let input = KFactorInput::new(BendTemplate::l(100.0, 50.0), 5.0, 90.0, 3.0, 0.33);
    let result = calculate_by_kfactor(&input);
    assert_eq!(result.length_mm(), Some(141.3));
    assert_result_shape(&result);
}

#[test]
fn live_validation_matches_calculation() {
    let input = UnfoldInput::KFactor(KFactorInput::new(BendTemplate::u(100.0, 0.0, 50.0), 5.0, 90.0, 3.0, 0.33));
    let findings = validate(&input);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].field, Field::EdgeB);
    assert_eq!(findings[0].severity, Severity::Error);

    let result = calculate_unfold_length(&input);
    assert_eq!(result.error_messages(), vec![findings[0].message.as_str()]);
}

#[test]
fn reference_row_properties() {
    let row = HBeamSection {
        model: "300×150".to_string(),
        category: HBeamCategory::NarrowFlange,
        height_mm: 300.0,
        width_mm: 150.0,
        web_thickness_mm: 6.5,
        flange_thickness_mm: 9.0,
        corner_radius_mm: 13.0,
        section_area_cm2: 46.78,
        theoretical_weight_kg_per_m: 36.7,
    };
    let props = row.properties();
    assert!(props.ix_cm4 > props.iy_cm4);
    assert_eq!(props.surface_area_m2_per_m, 0.9);
}

proptest! {
    #[test]
    fn kfactor_out_of_range_always_invalid(
        a in -50.0f64..500.0,
        b in -50.0f64..500.0,
        t in -1.0f64..20.0,
        r in -5.0f64..30.0,
        angle in -10.0f64..360.0,
        k in 0.5000001f64..5.0,
    ) {
        let result = calculate_by_kfactor(&KFactorInput::new(BendTemplate::l(a, b), t, angle, r, k));
        prop_assert!(!result.is_valid());
        prop_assert!(result.errors().iter().any(|e| e.field == Field::KFactor));
    }

    #[test]
    fn angle_over_180_always_invalid(
        u_profile in any::<bool>(),
        angle in 180.0001f64..720.0,
        k in 0.01f64..0.5,
    ) {
        let template = if u_profile {
            BendTemplate::u(100.0, 50.0, 50.0)
        } else {
            BendTemplate::l(100.0, 50.0)
        };
        let result = calculate_by_kfactor(&KFactorInput::new(template, 5.0, angle, 3.0, k));
        prop_assert!(!result.is_valid());
        prop_assert!(result.errors().iter().any(|e| e.field == Field::Angle));
    }

    #[test]
    fn results_are_well_formed(
        a in -10.0f64..300.0,
        b in -10.0f64..300.0,
        c in -10.0f64..300.0,
        t in -1.0f64..10.0,
        deduction in proptest::option::of(-5.0f64..20.0),
    ) {
        let mut input = ExperienceInput::new(BendTemplate::u(a, b, c), t, MaterialId::Stainless);
        input.custom_deduction_mm = deduction;
        let result = calculate_by_experience(&input);
        assert_result_shape(&result);
    }

    #[test]
    fn kfactor_is_pure(a in 20.0f64..300.0, b in 20.0f64..300.0, r in 0.0f64..10.0, k in 0.01f64..0.5) {
        let input = KFactorInput::new(BendTemplate::l(a, b), 4.0, 90.0, r, k);
        prop_assert_eq!(calculate_by_kfactor(&input), calculate_by_kfactor(&input));
    }

    #[test]
    fn tabulated_inertia_positive(
        web_h in 50.0f64..900.0,
        b in 50.0f64..400.0,
        t1 in 3.0f64..20.0,
        t2 in 5.0f64..40.0,
        area in 5.0f64..500.0,
    ) {
        let dims = BeamDimensions::new(web_h + 2.0 * t2, b, t1, t2);
        let props = compute_section_properties(&dims, area);
        prop_assert!(props.ix_cm4 > 0.0);
        prop_assert!(props.iy_cm4 > 0.0);
    }

    #[test]
    fn section_properties_scale_with_dimensions(
        web_h in 50.0f64..900.0,
        b in 50.0f64..400.0,
        t1 in 3.0f64..20.0,
        t2 in 5.0f64..40.0,
        area in 5.0f64..500.0,
        k in 0.5f64..4.0,
    ) {
        let h = web_h + 2.0 * t2;
        let base = compute_section_properties(&BeamDimensions::new(h, b, t1, t2), area);
        let scaled = compute_section_properties(&BeamDimensions::new(k * h, k * b, k * t1, k * t2), area * k * k);

        prop_assert!(within_rounding(scaled.area_cm2, base.area_cm2, k.powi(2), 0.005));
        prop_assert!(within_rounding(scaled.weight_kg_per_m, base.weight_kg_per_m, k.powi(2), 0.005));
        prop_assert!(within_rounding(scaled.ix_cm4, base.ix_cm4, k.powi(4), 0.5));
        prop_assert!(within_rounding(scaled.iy_cm4, base.iy_cm4, k.powi(4), 0.5));
        prop_assert!(within_rounding(scaled.wx_cm3, base.wx_cm3, k.powi(3), 0.5));
        prop_assert!(within_rounding(scaled.wy_cm3, base.wy_cm3, k.powi(3), 0.5));
        prop_assert!(within_rounding(scaled.rx_cm, base.rx_cm, k, 0.005));
        prop_assert!(within_rounding(scaled.ry_cm, base.ry_cm, k, 0.005));
        prop_assert!(within_rounding(scaled.surface_area_m2_per_m, base.surface_area_m2_per_m, k, 0.005));
    }
}
