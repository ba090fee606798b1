use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::snapshot::{Gender, Race};

/// Identifier of one input on the patient form.
///
/// The serialized name is the wire key used by the form, snapshot files and
/// the downstream payload, so mixed casing (`totalChol`, `liver_disease`) is
/// intentional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Field {
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "age")]
    Age,
    #[serde(rename = "gender")]
    Gender,
    #[serde(rename = "race")]
    Race,
    #[serde(rename = "weight")]
    Weight,
    #[serde(rename = "height")]
    Height,
    #[serde(rename = "sbp")]
    Sbp,
    #[serde(rename = "dbp")]
    Dbp,
    #[serde(rename = "hr")]
    HeartRate,
    #[serde(rename = "fbg")]
    Fbg,
    #[serde(rename = "hba1c")]
    Hba1c,
    #[serde(rename = "totalChol")]
    TotalChol,
    #[serde(rename = "hdl")]
    Hdl,
    #[serde(rename = "ldl")]
    Ldl,
    #[serde(rename = "creatinine")]
    Creatinine,
    #[serde(rename = "ef")]
    EjectionFraction,
    #[serde(rename = "troponin")]
    Troponin,
    #[serde(rename = "potassium")]
    Potassium,
    #[serde(rename = "smoking")]
    Smoking,
    #[serde(rename = "cad")]
    Cad,
    #[serde(rename = "onHypertensionTreatment")]
    OnHypertensionTreatment,
    #[serde(rename = "hasHeartFailure")]
    HasHeartFailure,
    #[serde(rename = "hasStrokeHistory")]
    HasStrokeHistory,
    #[serde(rename = "hasVascularDisease")]
    HasVascularDisease,
    #[serde(rename = "liver_disease")]
    LiverDisease,
    #[serde(rename = "hasBleedingHistory")]
    HasBleedingHistory,
    #[serde(rename = "hasLabileINR")]
    HasLabileInr,
    #[serde(rename = "takesAntiplatelet")]
    TakesAntiplatelet,
    #[serde(rename = "takesAlcohol")]
    TakesAlcohol,
    #[serde(rename = "asthma")]
    Asthma,
    #[serde(rename = "pregnancy")]
    Pregnancy,
}

/// The shape of value a field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Whole years; fractional input is truncated.
    Integer,
    Number,
    Flag,
    Gender,
    Race,
}

impl Field {
    pub const ALL: [Field; 31] = [
        Field::Name,
        Field::Age,
        Field::Gender,
        Field::Race,
        Field::Weight,
        Field::Height,
        Field::Sbp,
        Field::Dbp,
        Field::HeartRate,
        Field::Fbg,
        Field::Hba1c,
        Field::TotalChol,
        Field::Hdl,
        Field::Ldl,
        Field::Creatinine,
        Field::EjectionFraction,
        Field::Troponin,
        Field::Potassium,
        Field::Smoking,
        Field::Cad,
        Field::OnHypertensionTreatment,
        Field::HasHeartFailure,
        Field::HasStrokeHistory,
        Field::HasVascularDisease,
        Field::LiverDisease,
        Field::HasBleedingHistory,
        Field::HasLabileInr,
        Field::TakesAntiplatelet,
        Field::TakesAlcohol,
        Field::Asthma,
        Field::Pregnancy,
    ];

    /// Wire key of this field (e.g. `"totalChol"`).
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Age => "age",
            Field::Gender => "gender",
            Field::Race => "race",
            Field::Weight => "weight",
            Field::Height => "height",
            Field::Sbp => "sbp",
            Field::Dbp => "dbp",
            Field::HeartRate => "hr",
            Field::Fbg => "fbg",
            Field::Hba1c => "hba1c",
            Field::TotalChol => "totalChol",
            Field::Hdl => "hdl",
            Field::Ldl => "ldl",
            Field::Creatinine => "creatinine",
            Field::EjectionFraction => "ef",
            Field::Troponin => "troponin",
            Field::Potassium => "potassium",
            Field::Smoking => "smoking",
            Field::Cad => "cad",
            Field::OnHypertensionTreatment => "onHypertensionTreatment",
            Field::HasHeartFailure => "hasHeartFailure",
            Field::HasStrokeHistory => "hasStrokeHistory",
            Field::HasVascularDisease => "hasVascularDisease",
            Field::LiverDisease => "liver_disease",
            Field::HasBleedingHistory => "hasBleedingHistory",
            Field::HasLabileInr => "hasLabileINR",
            Field::TakesAntiplatelet => "takesAntiplatelet",
            Field::TakesAlcohol => "takesAlcohol",
            Field::Asthma => "asthma",
            Field::Pregnancy => "pregnancy",
        }
    }

    /// Look up a field by its wire key.
    pub fn from_key(key: &str) -> Result<Field, CoreError> {
        Field::ALL
            .into_iter()
            .find(|f| f.key() == key)
            .ok_or_else(|| CoreError::UnknownField(key.to_string()))
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Field::Name => FieldKind::Text,
            Field::Age => FieldKind::Integer,
            Field::Gender => FieldKind::Gender,
            Field::Race => FieldKind::Race,
            Field::Weight
            | Field::Height
            | Field::Sbp
            | Field::Dbp
            | Field::HeartRate
            | Field::Fbg
            | Field::Hba1c
            | Field::TotalChol
            | Field::Hdl
            | Field::Ldl
            | Field::Creatinine
            | Field::EjectionFraction
            | Field::Troponin
            | Field::Potassium => FieldKind::Number,
            _ => FieldKind::Flag,
        }
    }

    /// Parse raw form text into a value for this field.
    ///
    /// Never fails: empty or unparseable text is [`FieldValue::Absent`] for
    /// numeric, text and gender fields. Flags read any of `true`, `on`,
    /// `yes`, `1` or `checked` as set and everything else as unset. Race
    /// falls back to `non-black`.
    pub fn parse(self, raw: &str) -> FieldValue {
        let raw = raw.trim();
        match self.kind() {
            FieldKind::Text if raw.is_empty() => FieldValue::Absent,
            FieldKind::Text => FieldValue::Text(raw.to_string()),
            FieldKind::Integer => match parse_number(raw) {
                Some(v) if v >= 0.0 => FieldValue::Number(v.trunc()),
                _ => FieldValue::Absent,
            },
            FieldKind::Number => parse_number(raw).map_or(FieldValue::Absent, FieldValue::Number),
            FieldKind::Flag => FieldValue::Flag(matches!(
                raw.to_ascii_lowercase().as_str(),
                "true" | "on" | "yes" | "1" | "checked"
            )),
            FieldKind::Gender => match raw.to_ascii_lowercase().as_str() {
                "male" => FieldValue::Gender(Gender::Male),
                "female" => FieldValue::Gender(Gender::Female),
                _ => FieldValue::Absent,
            },
            FieldKind::Race => match raw.to_ascii_lowercase().as_str() {
                "black" => FieldValue::Race(Race::Black),
                _ => FieldValue::Race(Race::NonBlack),
            },
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// A parsed field value. `Absent` is a first-class value, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
#[ts(export)]
pub enum FieldValue {
    Absent,
    Number(f64),
    Flag(bool),
    Gender(Gender),
    Race(Race),
    Text(String),
}

impl FieldValue {
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Absent => "absent",
            FieldValue::Number(_) => "number",
            FieldValue::Flag(_) => "flag",
            FieldValue::Gender(_) => "gender",
            FieldValue::Race(_) => "race",
            FieldValue::Text(_) => "text",
        }
    }
}

/// A single change notification from the input boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldChange {
    pub field: Field,
    pub value: FieldValue,
}

impl FieldChange {
    pub fn new(field: Field, value: FieldValue) -> Self {
        Self { field, value }
    }

    /// Build a change from raw form text, parsed per [`Field::parse`].
    pub fn from_raw(field: Field, raw: &str) -> Self {
        Self {
            field,
            value: field.parse(raw),
        }
    }
}
