//! Auto-detected conditions derived from lab values and vitals.
//!
//! Both detectors treat an unknown value as 0, so an empty snapshot is
//! neither diabetic nor hypertensive.

use cardiorisk_core::{Field, InputSnapshot};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::scoring::{Locale, colors};

/// Fasting blood glucose threshold, mg/dL.
pub const DIABETES_FBG: f64 = 126.0;
/// HbA1c threshold, %.
pub const DIABETES_HBA1C: f64 = 6.5;
pub const HYPERTENSION_SBP: f64 = 140.0;
pub const HYPERTENSION_DBP: f64 = 90.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Condition {
    #[serde(rename = "hasDiabetes")]
    Diabetes,
    #[serde(rename = "hasHypertension")]
    Hypertension,
}

impl Condition {
    /// Evaluation order within a pass.
    pub const ALL: [Condition; 2] = [Condition::Diabetes, Condition::Hypertension];

    pub fn key(self) -> &'static str {
        match self {
            Condition::Diabetes => "hasDiabetes",
            Condition::Hypertension => "hasHypertension",
        }
    }

    /// Fields whose change re-runs this detector.
    pub fn inputs(self) -> &'static [Field] {
        match self {
            Condition::Diabetes => &[Field::Fbg, Field::Hba1c],
            Condition::Hypertension => &[Field::Sbp, Field::Dbp],
        }
    }

    pub fn detect(self, snapshot: &InputSnapshot) -> bool {
        match self {
            Condition::Diabetes => has_diabetes(snapshot),
            Condition::Hypertension => has_hypertension(snapshot),
        }
    }
}

pub fn has_diabetes(snapshot: &InputSnapshot) -> bool {
    snapshot.fbg.unwrap_or(0.0) >= DIABETES_FBG || snapshot.hba1c.unwrap_or(0.0) >= DIABETES_HBA1C
}

pub fn has_hypertension(snapshot: &InputSnapshot) -> bool {
    snapshot.sbp.unwrap_or(0.0) >= HYPERTENSION_SBP
        || snapshot.dbp.unwrap_or(0.0) >= HYPERTENSION_DBP
}

/// Badge text for a detected flag.
pub fn flag_label(flag: bool, locale: Locale) -> &'static str {
    match (flag, locale) {
        (true, Locale::En) => "Yes ✓",
        (false, Locale::En) => "No",
        (true, Locale::Id) => "Ya ✓",
        (false, Locale::Id) => "Tidak",
    }
}

pub fn flag_color(flag: bool) -> &'static str {
    if flag { colors::RED } else { colors::GREEN }
}
