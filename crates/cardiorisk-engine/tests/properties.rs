use cardiorisk_core::{Field, FieldChange, Gender, InputSnapshot};
use cardiorisk_engine::{OutputEvent, Session};
use cardiorisk_scores::scoring::Locale;
use cardiorisk_scores::{Calculator, get_calculator};
use proptest::prelude::*;

fn snapshot() -> impl Strategy<Value = InputSnapshot> {
    (
        proptest::option::of(18u32..95),
        proptest::option::of(prop_oneof![Just(Gender::Male), Just(Gender::Female)]),
        proptest::option::of(90.0f64..200.0),
        proptest::option::of(0.4f64..6.0),
        proptest::option::of(130.0f64..320.0),
        proptest::option::of(25.0f64..90.0),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(
            |(age, gender, sbp, creatinine, total_chol, hdl, smoking, stroke)| InputSnapshot {
                age,
                gender,
                sbp,
                creatinine,
                total_chol,
                hdl,
                smoking,
                has_stroke_history: stroke,
                ..Default::default()
            },
        )
}

fn raw_value() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("abc".to_string()),
        (0.0f64..250.0).prop_map(|v| format!("{v:.1}")),
        Just("male".to_string()),
        Just("female".to_string()),
        Just("on".to_string()),
    ]
}

proptest! {
    /// After any change, every score published in the pass equals a fresh
    /// computation over the updated snapshot.
    #[test]
    fn published_scores_are_never_stale(
        start in snapshot(),
        field_index in 0usize..Field::ALL.len(),
        raw in raw_value(),
    ) {
        let field = Field::ALL[field_index];
        let mut session = Session::new(start, Locale::En);
        let events = session.apply(&FieldChange::from_raw(field, &raw)).unwrap();

        for event in &events {
            match event {
                OutputEvent::Score(score) => {
                    let fresh = get_calculator(score.calculator)
                        .calculate(session.snapshot())
                        .map(|s| s.value);
                    prop_assert_eq!(fresh, Some(score.value));
                }
                OutputEvent::ScoreAbsent { calculator } => {
                    prop_assert!(get_calculator(*calculator).calculate(session.snapshot()).is_none());
                }
                _ => {}
            }
        }

        let again = session.apply(&FieldChange::from_raw(field, &raw)).unwrap();
        prop_assert_eq!(events, again);
    }
}
