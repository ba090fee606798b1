use cardiorisk_core::{Gender, InputSnapshot, Race};
use cardiorisk_scores::calculators::ascvd::{PooledCohortInputs, ten_year_risk};
use cardiorisk_scores::calculators::cha2ds2_vasc::{self, StrokeRiskFactors};
use cardiorisk_scores::{Calculator, all_calculators};
use proptest::prelude::*;

fn gender() -> impl Strategy<Value = Gender> {
    prop_oneof![Just(Gender::Male), Just(Gender::Female)]
}

fn race() -> impl Strategy<Value = Race> {
    prop_oneof![Just(Race::Black), Just(Race::NonBlack)]
}

proptest! {
    #[test]
    fn ascvd_risk_is_a_percentage(
        age in 20.0f64..100.0,
        total_chol in 100.0f64..400.0,
        hdl in 15.0f64..120.0,
        sbp in 80.0f64..220.0,
        gender in gender(),
        race in race(),
        treated in any::<bool>(),
        smoker in any::<bool>(),
        diabetic in any::<bool>(),
    ) {
        let risk = ten_year_risk(&PooledCohortInputs {
            age,
            total_chol,
            hdl,
            sbp,
            gender,
            race,
            treated_hypertension: treated,
            smoker,
            diabetic,
        });
        prop_assert!((0.0..=100.0).contains(&risk), "risk {risk}");
    }

    #[test]
    fn stroke_risk_never_drops_with_age(
        age in 0u32..110,
        female in any::<bool>(),
        heart_failure in any::<bool>(),
        hypertension in any::<bool>(),
        diabetes in any::<bool>(),
        stroke_history in any::<bool>(),
        vascular_disease in any::<bool>(),
    ) {
        let factors = StrokeRiskFactors {
            age,
            female,
            heart_failure,
            hypertension,
            diabetes,
            stroke_history,
            vascular_disease,
        };
        let older = StrokeRiskFactors { age: age + 1, ..factors };
        prop_assert!(cha2ds2_vasc::score(&older) >= cha2ds2_vasc::score(&factors));
    }

    #[test]
    fn calculators_are_deterministic(
        age in proptest::option::of(0u32..100),
        creatinine in proptest::option::of(0.0f64..10.0),
        sbp in proptest::option::of(0.0f64..250.0),
        weight in proptest::option::of(0.0f64..200.0),
        height in proptest::option::of(0.0f64..220.0),
        gender in proptest::option::of(gender()),
    ) {
        let snapshot = InputSnapshot {
            age,
            creatinine,
            sbp,
            weight,
            height,
            gender,
            total_chol: Some(190.0),
            hdl: Some(45.0),
            ..Default::default()
        };
        for calculator in all_calculators() {
            prop_assert_eq!(calculator.calculate(&snapshot), calculator.calculate(&snapshot));
        }
    }
}

#[test]
fn stroke_risk_age_steps() {
    let at = |age| {
        cha2ds2_vasc::score(&StrokeRiskFactors {
            age,
            female: true,
            ..Default::default()
        })
    };
    assert!(at(65) >= at(64));
    assert_eq!(at(75) - at(74), 1);
}
