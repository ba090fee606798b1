//! The request body sent to the diagnosis service.
//!
//! Field names and grouping follow the service's existing contract. Unknown
//! vitals, labs and scores are omitted rather than sent as null; unknown age
//! (or zero) is sent as null and unknown gender as an empty string.

use cardiorisk_core::InputSnapshot;
use cardiorisk_scores::Calculator;
use cardiorisk_scores::calculators::ascvd::Ascvd;
use cardiorisk_scores::calculators::bmi::Bmi;
use cardiorisk_scores::calculators::cha2ds2_vasc::Cha2ds2Vasc;
use cardiorisk_scores::calculators::egfr::Egfr;
use cardiorisk_scores::calculators::has_bled::HasBled;
use cardiorisk_scores::conditions::{has_diabetes, has_hypertension};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisPayload {
    pub demographics: Demographics,
    pub vitals: Vitals,
    pub labs: Labs,
    pub scores: Scores,
    pub symptoms: Vec<String>,
    pub comorbid: Comorbidities,
    pub history: History,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Demographics {
    pub name: String,
    pub age: Option<u32>,
    pub gender: String,
    pub race: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vitals {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sbp: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dbp: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hr: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bmi: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fbg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hba1c: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ldl: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hdl: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ef: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub troponin: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gfr: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub potassium: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creatinine: Option<f64>,
    #[serde(rename = "totalChol", skip_serializing_if = "Option::is_none")]
    pub total_chol: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scores {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ascvd: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cha2ds2vasc: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hasbled: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comorbidities {
    pub asthma: bool,
    pub pregnancy: bool,
    #[serde(rename = "liver_disease")]
    pub liver_disease: bool,
    pub on_hypertension_treatment: bool,
    pub has_heart_failure: bool,
    pub has_stroke_history: bool,
    pub has_vascular_disease: bool,
    pub has_bleeding_history: bool,
    #[serde(rename = "hasLabileINR")]
    pub has_labile_inr: bool,
    pub takes_antiplatelet: bool,
    pub takes_alcohol: bool,
    pub has_diabetes: bool,
    pub has_hypertension: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct History {
    pub smoking: bool,
    pub cad: bool,
}

impl DiagnosisPayload {
    /// Build the request from the snapshot, computing every score and
    /// detected condition fresh.
    pub fn assemble(snapshot: &InputSnapshot) -> Self {
        Self {
            demographics: Demographics {
                name: snapshot.name.clone().unwrap_or_default(),
                age: snapshot.age.filter(|a| *a > 0),
                gender: snapshot.gender.map(|g| g.as_str()).unwrap_or_default().to_string(),
                race: snapshot.race.as_str().to_string(),
            },
            vitals: Vitals {
                sbp: snapshot.sbp,
                dbp: snapshot.dbp,
                hr: snapshot.hr,
                bmi: published(&Bmi, snapshot),
                weight: snapshot.weight,
                height: snapshot.height,
            },
            labs: Labs {
                fbg: snapshot.fbg,
                hba1c: snapshot.hba1c,
                ldl: snapshot.ldl,
                hdl: snapshot.hdl,
                ef: snapshot.ef,
                troponin: snapshot.troponin,
                gfr: published(&Egfr, snapshot),
                potassium: snapshot.potassium,
                creatinine: snapshot.creatinine,
                total_chol: snapshot.total_chol,
            },
            scores: Scores {
                ascvd: published(&Ascvd, snapshot),
                cha2ds2vasc: published(&Cha2ds2Vasc, snapshot),
                hasbled: published(&HasBled, snapshot),
            },
            symptoms: snapshot.symptoms.clone(),
            comorbid: Comorbidities {
                asthma: snapshot.asthma,
                pregnancy: snapshot.pregnancy,
                liver_disease: snapshot.liver_disease,
                on_hypertension_treatment: snapshot.on_hypertension_treatment,
                has_heart_failure: snapshot.has_heart_failure,
                has_stroke_history: snapshot.has_stroke_history,
                has_vascular_disease: snapshot.has_vascular_disease,
                has_bleeding_history: snapshot.has_bleeding_history,
                has_labile_inr: snapshot.has_labile_inr,
                takes_antiplatelet: snapshot.takes_antiplatelet,
                takes_alcohol: snapshot.takes_alcohol,
                has_diabetes: has_diabetes(snapshot),
                has_hypertension: has_hypertension(snapshot),
            },
            history: History {
                smoking: snapshot.smoking,
                cad: snapshot.cad,
            },
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

fn published(calculator: &dyn Calculator, snapshot: &InputSnapshot) -> Option<f64> {
    calculator.calculate(snapshot).map(|score| score.value)
}
