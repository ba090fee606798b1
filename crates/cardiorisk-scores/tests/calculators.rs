use cardiorisk_core::{Gender, InputSnapshot, Race};
use cardiorisk_scores::calculators::ascvd::{self, Ascvd, PooledCohortInputs, ten_year_risk};
use cardiorisk_scores::calculators::bmi::{self, Bmi};
use cardiorisk_scores::calculators::cha2ds2_vasc::{self, Cha2ds2Vasc, StrokeRiskFactors};
use cardiorisk_scores::calculators::egfr::{self, Egfr, ckd_epi_2021};
use cardiorisk_scores::calculators::has_bled::{self, BleedingRiskFactors, Component, HasBled};
use cardiorisk_scores::scoring::{Locale, Score};
use cardiorisk_scores::{Calculator, CalculatorId, all_calculators, get_calculator};

// ── BMI ──

#[test]
fn bmi_reference_value() {
    let snapshot = InputSnapshot {
        weight: Some(70.0),
        height: Some(175.0),
        ..Default::default()
    };
    let score = Bmi.calculate(&snapshot).unwrap();
    assert_eq!(score.value, 22.9);
    assert_eq!(score.formatted, "22.9");
    assert_eq!(score.category.label(Locale::En), "Normal");
}

#[test]
fn bmi_is_absent_without_both_measurements() {
    let no_height = InputSnapshot {
        weight: Some(70.0),
        ..Default::default()
    };
    let zero_height = InputSnapshot {
        weight: Some(70.0),
        height: Some(0.0),
        ..Default::default()
    };
    assert!(Bmi.calculate(&no_height).is_none());
    assert!(Bmi.calculate(&zero_height).is_none());
}

#[test]
fn bmi_category_bounds_are_exclusive_upper() {
    assert_eq!(bmi::categorize(18.49), bmi::UNDERWEIGHT);
    assert_eq!(bmi::categorize(18.5), bmi::NORMAL);
    assert_eq!(bmi::categorize(25.0), bmi::OVERWEIGHT);
    assert_eq!(bmi::categorize(30.0), bmi::OBESE);
    assert_eq!(bmi::OBESE.label(Locale::Id), "Obesitas");
}

// ── eGFR ──

#[test]
fn egfr_reference_male() {
    let snapshot = InputSnapshot {
        creatinine: Some(1.0),
        age: Some(50),
        gender: Some(Gender::Male),
        ..Default::default()
    };
    let score = Egfr.calculate(&snapshot).unwrap();
    assert!((score.value - 91.0).abs() <= 1.0, "got {}", score.value);
    assert_eq!(score.category, egfr::NORMAL);
}

#[test]
fn egfr_female_uses_female_constants() {
    let male = ckd_epi_2021(1.0, 50, Gender::Male);
    let female = ckd_epi_2021(1.0, 50, Gender::Female);
    assert!((female - 68.6).abs() < 0.1, "got {female}");
    assert!(female < male);
}

#[test]
fn egfr_gates_on_creatinine_age_and_gender() {
    let base = InputSnapshot {
        creatinine: Some(1.0),
        age: Some(50),
        gender: Some(Gender::Female),
        ..Default::default()
    };
    assert!(Egfr.calculate(&base).is_some());
    assert!(Egfr.calculate(&InputSnapshot { creatinine: None, ..base.clone() }).is_none());
    assert!(Egfr.calculate(&InputSnapshot { creatinine: Some(0.0), ..base.clone() }).is_none());
    assert!(Egfr.calculate(&InputSnapshot { age: Some(0), ..base.clone() }).is_none());
    assert!(Egfr.calculate(&InputSnapshot { gender: None, ..base }).is_none());
}

#[test]
fn egfr_ignores_race() {
    let snapshot = InputSnapshot {
        creatinine: Some(1.3),
        age: Some(61),
        gender: Some(Gender::Male),
        ..Default::default()
    };
    let black = InputSnapshot {
        race: Race::Black,
        ..snapshot.clone()
    };
    assert_eq!(Egfr.calculate(&snapshot), Egfr.calculate(&black));
}

#[test]
fn egfr_stays_finite_for_any_age() {
    for age in [2_147_483_647, 2_147_483_648, u32::MAX] {
        let snapshot = InputSnapshot {
            creatinine: Some(1.0),
            age: Some(age),
            gender: Some(Gender::Male),
            ..Default::default()
        };
        let score = Egfr.calculate(&snapshot).unwrap();
        assert!(score.value.is_finite(), "age {age}: {}", score.value);
        assert_eq!(score.value, 0.0);
        assert_eq!(score.category, egfr::STAGE_5);
    }
}

#[test]
fn non_finite_values_are_never_published() {
    for raw in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
        assert_eq!(Score::rounded(CalculatorId::Egfr, raw, 0, egfr::NORMAL), None);
    }
    let score = Score::rounded(CalculatorId::Bmi, 22.857, 1, bmi::NORMAL).unwrap();
    assert_eq!(score.value, 22.9);
    assert_eq!(score.formatted, "22.9");
}

#[test]
fn egfr_stage_bounds() {
    assert_eq!(egfr::categorize(90.0), egfr::NORMAL);
    assert_eq!(egfr::categorize(89.9), egfr::STAGE_2);
    assert_eq!(egfr::categorize(60.0), egfr::STAGE_2);
    assert_eq!(egfr::categorize(30.0), egfr::STAGE_3);
    assert_eq!(egfr::categorize(15.0), egfr::STAGE_4);
    assert_eq!(egfr::categorize(14.9), egfr::STAGE_5);
}

// ── ASCVD ──

fn reference_male() -> InputSnapshot {
    InputSnapshot {
        age: Some(55),
        gender: Some(Gender::Male),
        race: Race::NonBlack,
        total_chol: Some(213.0),
        hdl: Some(50.0),
        sbp: Some(120.0),
        ..Default::default()
    }
}

#[test]
fn ascvd_reference_white_male() {
    // Published PCE reference for this profile is 5.3%.
    let inputs = PooledCohortInputs::from_snapshot(&reference_male()).unwrap();
    let risk = ten_year_risk(&inputs);
    assert!((risk - 5.3).abs() <= 0.1, "got {risk}");

    let score = Ascvd.calculate(&reference_male()).unwrap();
    assert_eq!(score.formatted, "5.4");
    assert_eq!(score.category, ascvd::BORDERLINE);
}

#[test]
fn ascvd_white_female_uses_negative_mean() {
    let inputs = PooledCohortInputs {
        age: 55.0,
        total_chol: 213.0,
        hdl: 50.0,
        sbp: 120.0,
        gender: Gender::Female,
        race: Race::NonBlack,
        treated_hypertension: false,
        smoker: false,
        diabetic: false,
    };
    let risk = ten_year_risk(&inputs);
    assert!((risk - 2.05).abs() < 0.05, "got {risk}");
}

#[test]
fn ascvd_risk_factors_raise_risk() {
    let baseline = Ascvd.calculate(&reference_male()).unwrap().value;
    let smoker = InputSnapshot {
        smoking: true,
        ..reference_male()
    };
    let diabetic = InputSnapshot {
        fbg: Some(140.0),
        ..reference_male()
    };
    let treated = InputSnapshot {
        on_hypertension_treatment: true,
        ..reference_male()
    };
    assert!(Ascvd.calculate(&smoker).unwrap().value > baseline);
    assert!(Ascvd.calculate(&diabetic).unwrap().value > baseline);
    assert!(Ascvd.calculate(&treated).unwrap().value > baseline);
}

#[test]
fn ascvd_every_cohort_is_within_bounds() {
    for gender in [Gender::Male, Gender::Female] {
        for race in [Race::Black, Race::NonBlack] {
            let snapshot = InputSnapshot {
                gender: Some(gender),
                race,
                ..reference_male()
            };
            let value = Ascvd.calculate(&snapshot).unwrap().value;
            assert!((0.0..=100.0).contains(&value), "{gender:?}/{race:?}: {value}");
        }
    }
}

#[test]
fn ascvd_gates_on_required_inputs() {
    assert!(Ascvd.calculate(&InputSnapshot { hdl: None, ..reference_male() }).is_none());
    assert!(Ascvd.calculate(&InputSnapshot { total_chol: Some(0.0), ..reference_male() }).is_none());
    assert!(Ascvd.calculate(&InputSnapshot { gender: None, ..reference_male() }).is_none());
    assert!(Ascvd.calculate(&InputSnapshot { age: None, ..reference_male() }).is_none());
}

#[test]
fn ascvd_category_bounds() {
    assert_eq!(ascvd::categorize(4.9), ascvd::LOW);
    assert_eq!(ascvd::categorize(5.0), ascvd::BORDERLINE);
    assert_eq!(ascvd::categorize(7.5), ascvd::INTERMEDIATE);
    assert_eq!(ascvd::categorize(20.0), ascvd::HIGH);
}

// ── CHA₂DS₂-VASc ──

#[test]
fn stroke_risk_elderly_female_with_heart_failure() {
    let snapshot = InputSnapshot {
        age: Some(75),
        gender: Some(Gender::Female),
        has_heart_failure: true,
        ..Default::default()
    };
    let score = Cha2ds2Vasc.calculate(&snapshot).unwrap();
    assert_eq!(score.value, 4.0);
    assert_eq!(score.formatted, "4");
    assert_eq!(score.category.label(Locale::En), "High");
}

#[test]
fn stroke_risk_is_never_absent() {
    let score = Cha2ds2Vasc.calculate(&InputSnapshot::default()).unwrap();
    assert_eq!(score.value, 0.0);
    assert_eq!(score.category, cha2ds2_vasc::LOW);
}

#[test]
fn stroke_risk_counts_detected_conditions_and_history() {
    let factors = StrokeRiskFactors {
        hypertension: true,
        diabetes: true,
        stroke_history: true,
        vascular_disease: true,
        ..Default::default()
    };
    assert_eq!(cha2ds2_vasc::score(&factors), 5);
}

#[test]
fn stroke_risk_age_bucket_replaces_rather_than_adds() {
    let at = |age| {
        cha2ds2_vasc::score(&StrokeRiskFactors {
            age,
            ..Default::default()
        })
    };
    assert_eq!(at(64), 0);
    assert_eq!(at(65), 1);
    assert_eq!(at(74), 1);
    assert_eq!(at(75), 2);
}

#[test]
fn stroke_risk_categories() {
    assert_eq!(cha2ds2_vasc::categorize(0), cha2ds2_vasc::LOW);
    assert_eq!(cha2ds2_vasc::categorize(1), cha2ds2_vasc::LOW_INTERMEDIATE);
    assert_eq!(cha2ds2_vasc::categorize(2), cha2ds2_vasc::INTERMEDIATE);
    assert_eq!(cha2ds2_vasc::categorize(3), cha2ds2_vasc::INTERMEDIATE);
    assert_eq!(cha2ds2_vasc::categorize(4), cha2ds2_vasc::HIGH);
}

// ── HAS-BLED ──

#[test]
fn bleeding_risk_reference_factors() {
    let factors = BleedingRiskFactors {
        sbp: 170.0,
        gfr: 25.0,
        age: 70,
        liver_disease: true,
        ..Default::default()
    };
    let points = has_bled::score(&factors);
    assert_eq!(points, 4);
    assert_eq!(has_bled::categorize(points).label(Locale::En), "High (≥3)");
}

#[test]
fn bleeding_risk_reads_computed_egfr() {
    // Male, 70, creatinine 3.0 → eGFR ≈ 22.
    let snapshot = InputSnapshot {
        sbp: Some(170.0),
        age: Some(70),
        gender: Some(Gender::Male),
        creatinine: Some(3.0),
        liver_disease: true,
        ..Default::default()
    };
    let score = HasBled.calculate(&snapshot).unwrap();
    assert_eq!(score.value, 4.0);
}

#[test]
fn bleeding_risk_defaults_unknown_gfr_to_normal() {
    let factors = BleedingRiskFactors::from_snapshot(&InputSnapshot::default());
    assert_eq!(factors.gfr, has_bled::DEFAULT_GFR);
    assert_eq!(has_bled::score(&factors), 0);
}

#[test]
fn bleeding_risk_thresholds_are_strict() {
    let edge = BleedingRiskFactors {
        sbp: 160.0,
        gfr: 30.0,
        age: 65,
        ..Default::default()
    };
    assert_eq!(has_bled::score(&edge), 0);
}

#[test]
fn bleeding_risk_categories() {
    assert_eq!(has_bled::categorize(1), has_bled::LOW);
    assert_eq!(has_bled::categorize(2), has_bled::INTERMEDIATE);
    assert_eq!(has_bled::categorize(3), has_bled::HIGH);
    assert_eq!(has_bled::HIGH.label(Locale::Id), "Risiko Tinggi (≥3)");
}

#[test]
fn bleeding_indicators_mirror_score_components() {
    let snapshot = InputSnapshot {
        sbp: Some(165.0),
        age: Some(66),
        has_stroke_history: true,
        ..Default::default()
    };
    let indicators = has_bled::indicators(&snapshot);
    let active: Vec<Component> = indicators
        .iter()
        .filter(|i| i.active)
        .map(|i| i.component)
        .collect();
    assert_eq!(
        active,
        vec![Component::Hypertension, Component::Stroke, Component::Elderly]
    );
    assert_eq!(indicators[0].label(Locale::En), "Yes (+1)");
    assert_eq!(indicators[1].label(Locale::Id), "Tidak");
}

// ── registry ──

#[test]
fn registry_is_in_execution_order() {
    let ids: Vec<CalculatorId> = all_calculators().iter().map(|c| c.id()).collect();
    assert_eq!(ids, CalculatorId::ALL.to_vec());
    for id in CalculatorId::ALL {
        assert_eq!(get_calculator(id).id(), id);
        assert_eq!(id.as_str().parse::<CalculatorId>().unwrap(), id);
    }
    assert!("framingham".parse::<CalculatorId>().is_err());
}

#[test]
fn upstream_calculators_run_first() {
    for calculator in all_calculators() {
        for upstream in calculator.upstream() {
            assert!(*upstream < calculator.id(), "{} before {}", upstream, calculator.id());
        }
    }
}
