use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::field::{Field, FieldChange, FieldKind, FieldValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum Race {
    Black,
    #[default]
    NonBlack,
}

impl Race {
    pub fn as_str(self) -> &'static str {
        match self {
            Race::Black => "black",
            Race::NonBlack => "non-black",
        }
    }
}

/// The current raw values of the patient form.
///
/// Numeric fields are `None` when the form field is empty or unparseable;
/// that is "unknown", not zero. Each calculator decides how to treat an
/// unknown value. Checkboxes are plain booleans (unchecked is `false`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct InputSnapshot {
    // ── demographics ──
    pub name: Option<String>,
    pub age: Option<u32>,
    pub gender: Option<Gender>,
    pub race: Race,

    // ── vitals ──
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub sbp: Option<f64>,
    pub dbp: Option<f64>,
    pub hr: Option<f64>,

    // ── labs ──
    pub fbg: Option<f64>,
    pub hba1c: Option<f64>,
    pub total_chol: Option<f64>,
    pub hdl: Option<f64>,
    pub ldl: Option<f64>,
    pub creatinine: Option<f64>,
    pub ef: Option<f64>,
    pub troponin: Option<f64>,
    pub potassium: Option<f64>,

    // ── history ──
    pub smoking: bool,
    pub cad: bool,

    // ── manual risk factors and comorbidities ──
    pub on_hypertension_treatment: bool,
    pub has_heart_failure: bool,
    pub has_stroke_history: bool,
    pub has_vascular_disease: bool,
    #[serde(rename = "liver_disease")]
    pub liver_disease: bool,
    pub has_bleeding_history: bool,
    #[serde(rename = "hasLabileINR")]
    pub has_labile_inr: bool,
    pub takes_antiplatelet: bool,
    pub takes_alcohol: bool,
    pub asthma: bool,
    pub pregnancy: bool,

    pub symptoms: Vec<String>,
}

impl InputSnapshot {
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read one field as a [`FieldValue`].
    pub fn get(&self, field: Field) -> FieldValue {
        match field.kind() {
            FieldKind::Text => self
                .name
                .clone()
                .map_or(FieldValue::Absent, FieldValue::Text),
            FieldKind::Integer => self
                .age
                .map_or(FieldValue::Absent, |a| FieldValue::Number(f64::from(a))),
            FieldKind::Gender => self.gender.map_or(FieldValue::Absent, FieldValue::Gender),
            FieldKind::Race => FieldValue::Race(self.race),
            FieldKind::Number => self
                .number_slot(field)
                .and_then(|slot| *slot)
                .map_or(FieldValue::Absent, FieldValue::Number),
            FieldKind::Flag => FieldValue::Flag(self.flag(field)),
        }
    }

    /// Store one field. `Absent` clears it (numbers, text and gender become
    /// unknown, flags become unchecked, race falls back to `non-black`).
    pub fn set(&mut self, field: Field, value: FieldValue) -> Result<(), CoreError> {
        match (field.kind(), value) {
            (FieldKind::Text, FieldValue::Absent) => self.name = None,
            (FieldKind::Text, FieldValue::Text(s)) => self.name = Some(s),

            (FieldKind::Integer, FieldValue::Absent) => self.age = None,
            (FieldKind::Integer, FieldValue::Number(v)) => {
                self.age = (v.is_finite() && v >= 0.0).then(|| v.trunc() as u32);
            }

            (FieldKind::Number, FieldValue::Absent) => self.put_number(field, None),
            (FieldKind::Number, FieldValue::Number(v)) => {
                self.put_number(field, Some(v).filter(|v| v.is_finite()));
            }

            (FieldKind::Flag, FieldValue::Absent) => self.put_flag(field, false),
            (FieldKind::Flag, FieldValue::Flag(b)) => self.put_flag(field, b),

            (FieldKind::Gender, FieldValue::Absent) => self.gender = None,
            (FieldKind::Gender, FieldValue::Gender(g)) => self.gender = Some(g),

            (FieldKind::Race, FieldValue::Absent) => self.race = Race::default(),
            (FieldKind::Race, FieldValue::Race(r)) => self.race = r,

            (_, value) => return Err(CoreError::FieldKind { field, value }),
        }
        Ok(())
    }

    pub fn apply(&mut self, change: &FieldChange) -> Result<(), CoreError> {
        self.set(change.field, change.value.clone())
    }

    pub fn is_female(&self) -> bool {
        self.gender == Some(Gender::Female)
    }

    fn number_slot(&self, field: Field) -> Option<&Option<f64>> {
        Some(match field {
            Field::Weight => &self.weight,
            Field::Height => &self.height,
            Field::Sbp => &self.sbp,
            Field::Dbp => &self.dbp,
            Field::HeartRate => &self.hr,
            Field::Fbg => &self.fbg,
            Field::Hba1c => &self.hba1c,
            Field::TotalChol => &self.total_chol,
            Field::Hdl => &self.hdl,
            Field::Ldl => &self.ldl,
            Field::Creatinine => &self.creatinine,
            Field::EjectionFraction => &self.ef,
            Field::Troponin => &self.troponin,
            Field::Potassium => &self.potassium,
            _ => return None,
        })
    }

    fn put_number(&mut self, field: Field, value: Option<f64>) {
        let slot = match field {
            Field::Weight => &mut self.weight,
            Field::Height => &mut self.height,
            Field::Sbp => &mut self.sbp,
            Field::Dbp => &mut self.dbp,
            Field::HeartRate => &mut self.hr,
            Field::Fbg => &mut self.fbg,
            Field::Hba1c => &mut self.hba1c,
            Field::TotalChol => &mut self.total_chol,
            Field::Hdl => &mut self.hdl,
            Field::Ldl => &mut self.ldl,
            Field::Creatinine => &mut self.creatinine,
            Field::EjectionFraction => &mut self.ef,
            Field::Troponin => &mut self.troponin,
            Field::Potassium => &mut self.potassium,
            _ => return,
        };
        *slot = value;
    }

    fn flag(&self, field: Field) -> bool {
        match field {
            Field::Smoking => self.smoking,
            Field::Cad => self.cad,
            Field::OnHypertensionTreatment => self.on_hypertension_treatment,
            Field::HasHeartFailure => self.has_heart_failure,
            Field::HasStrokeHistory => self.has_stroke_history,
            Field::HasVascularDisease => self.has_vascular_disease,
            Field::LiverDisease => self.liver_disease,
            Field::HasBleedingHistory => self.has_bleeding_history,
            Field::HasLabileInr => self.has_labile_inr,
            Field::TakesAntiplatelet => self.takes_antiplatelet,
            Field::TakesAlcohol => self.takes_alcohol,
            Field::Asthma => self.asthma,
            Field::Pregnancy => self.pregnancy,
            _ => false,
        }
    }

    fn put_flag(&mut self, field: Field, value: bool) {
        let slot = match field {
            Field::Smoking => &mut self.smoking,
            Field::Cad => &mut self.cad,
            Field::OnHypertensionTreatment => &mut self.on_hypertension_treatment,
            Field::HasHeartFailure => &mut self.has_heart_failure,
            Field::HasStrokeHistory => &mut self.has_stroke_history,
            Field::HasVascularDisease => &mut self.has_vascular_disease,
            Field::LiverDisease => &mut self.liver_disease,
            Field::HasBleedingHistory => &mut self.has_bleeding_history,
            Field::HasLabileInr => &mut self.has_labile_inr,
            Field::TakesAntiplatelet => &mut self.takes_antiplatelet,
            Field::TakesAlcohol => &mut self.takes_alcohol,
            Field::Asthma => &mut self.asthma,
            Field::Pregnancy => &mut self.pregnancy,
            _ => return,
        };
        *slot = value;
    }
}
