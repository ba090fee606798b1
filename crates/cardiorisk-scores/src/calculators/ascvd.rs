use cardiorisk_core::{Field, Gender, InputSnapshot, Race};

use crate::conditions::{Condition, has_diabetes};
use crate::scoring::{Category, Score, colors};
use crate::{Calculator, CalculatorId};

/// 10-year ASCVD risk by the Pooled Cohort Equations, in percent.
/// Sex/race-stratified; diabetes is auto-detected from the labs.
pub struct Ascvd;

pub const LOW: Category = Category {
    key: "low",
    severity: 0,
    color: colors::GREEN,
    label_en: "Low",
    label_id: "Rendah",
};
pub const BORDERLINE: Category = Category {
    key: "borderline",
    severity: 1,
    color: colors::YELLOW,
    label_en: "Borderline",
    label_id: "Borderline",
};
pub const INTERMEDIATE: Category = Category {
    key: "intermediate",
    severity: 2,
    color: colors::ORANGE,
    label_en: "Intermediate",
    label_id: "Menengah",
};
pub const HIGH: Category = Category {
    key: "high",
    severity: 3,
    color: colors::RED,
    label_en: "High",
    label_id: "Tinggi",
};

/// Coefficients of one Pooled Cohort Equation. Terms absent from a cohort's
/// published equation are zero.
struct Cohort {
    baseline_survival: f64,
    mean: f64,
    ln_age: f64,
    ln_age_sq: f64,
    ln_tc: f64,
    ln_age_ln_tc: f64,
    ln_hdl: f64,
    ln_age_ln_hdl: f64,
    /// (treated, untreated)
    ln_sbp: (f64, f64),
    /// (treated, untreated)
    ln_age_ln_sbp: (f64, f64),
    smoker: f64,
    ln_age_smoker: f64,
    diabetes: f64,
}

const WHITE_FEMALE: Cohort = Cohort {
    baseline_survival: 0.9665,
    mean: -29.18,
    ln_age: -29.799,
    ln_age_sq: 4.884,
    ln_tc: 13.540,
    ln_age_ln_tc: -3.114,
    ln_hdl: -13.578,
    ln_age_ln_hdl: 3.149,
    ln_sbp: (2.019, 1.957),
    ln_age_ln_sbp: (0.0, 0.0),
    smoker: 7.574,
    ln_age_smoker: -1.665,
    diabetes: 0.661,
};

const BLACK_FEMALE: Cohort = Cohort {
    baseline_survival: 0.9533,
    mean: 86.61,
    ln_age: 17.114,
    ln_age_sq: 0.0,
    ln_tc: 0.940,
    ln_age_ln_tc: 0.0,
    ln_hdl: -18.920,
    ln_age_ln_hdl: 4.475,
    ln_sbp: (29.291, 27.820),
    ln_age_ln_sbp: (-6.432, -6.087),
    smoker: 0.691,
    ln_age_smoker: 0.0,
    diabetes: 0.874,
};

const WHITE_MALE: Cohort = Cohort {
    baseline_survival: 0.9144,
    mean: 61.18,
    ln_age: 12.344,
    ln_age_sq: 0.0,
    ln_tc: 11.853,
    ln_age_ln_tc: -2.664,
    ln_hdl: -7.990,
    ln_age_ln_hdl: 1.769,
    ln_sbp: (1.797, 1.764),
    ln_age_ln_sbp: (0.0, 0.0),
    smoker: 7.837,
    ln_age_smoker: -1.795,
    diabetes: 0.658,
};

const BLACK_MALE: Cohort = Cohort {
    baseline_survival: 0.8954,
    mean: 19.54,
    ln_age: 2.469,
    ln_age_sq: 0.0,
    ln_tc: 0.302,
    ln_age_ln_tc: 0.0,
    ln_hdl: -0.307,
    ln_age_ln_hdl: 0.0,
    ln_sbp: (1.916, 1.809),
    ln_age_ln_sbp: (0.0, 0.0),
    smoker: 0.549,
    ln_age_smoker: 0.0,
    diabetes: 0.645,
};

/// Everything the equation needs, already validated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PooledCohortInputs {
    pub age: f64,
    pub total_chol: f64,
    pub hdl: f64,
    pub sbp: f64,
    pub gender: Gender,
    pub race: Race,
    pub treated_hypertension: bool,
    pub smoker: bool,
    pub diabetic: bool,
}

impl PooledCohortInputs {
    /// `None` when a gating input is unknown or not positive.
    pub fn from_snapshot(snapshot: &InputSnapshot) -> Option<Self> {
        let age = snapshot.age.filter(|a| *a > 0)?;
        let total_chol = snapshot.total_chol.filter(|v| *v > 0.0)?;
        let hdl = snapshot.hdl.filter(|v| *v > 0.0)?;
        let sbp = snapshot.sbp.filter(|v| *v > 0.0)?;
        let gender = snapshot.gender?;

        Some(Self {
            age: f64::from(age),
            total_chol,
            hdl,
            sbp,
            gender,
            race: snapshot.race,
            treated_hypertension: snapshot.on_hypertension_treatment,
            smoker: snapshot.smoking,
            diabetic: has_diabetes(snapshot),
        })
    }
}

impl Calculator for Ascvd {
    fn id(&self) -> CalculatorId {
        CalculatorId::Ascvd
    }

    fn name(&self) -> &str {
        "ASCVD 10-year risk (PCE)"
    }

    fn inputs(&self) -> &[Field] {
        &[
            Field::Age,
            Field::Gender,
            Field::Race,
            Field::TotalChol,
            Field::Hdl,
            Field::Sbp,
            Field::OnHypertensionTreatment,
            Field::Smoking,
        ]
    }

    fn conditions(&self) -> &[Condition] {
        &[Condition::Diabetes]
    }

    fn calculate(&self, snapshot: &InputSnapshot) -> Option<Score> {
        let inputs = PooledCohortInputs::from_snapshot(snapshot)?;
        let risk = ten_year_risk(&inputs);
        Score::rounded(CalculatorId::Ascvd, risk, 1, categorize(risk))
    }
}

/// 10-year risk in percent, clamped to `[0, 100]`.
pub fn ten_year_risk(inputs: &PooledCohortInputs) -> f64 {
    let cohort = match (inputs.gender, inputs.race) {
        (Gender::Female, Race::NonBlack) => &WHITE_FEMALE,
        (Gender::Female, Race::Black) => &BLACK_FEMALE,
        (Gender::Male, Race::NonBlack) => &WHITE_MALE,
        (Gender::Male, Race::Black) => &BLACK_MALE,
    };

    let ln_age = inputs.age.ln();
    let ln_tc = inputs.total_chol.ln();
    let ln_hdl = inputs.hdl.ln();
    let ln_sbp = inputs.sbp.ln();
    let smoker = if inputs.smoker { 1.0 } else { 0.0 };
    let diabetic = if inputs.diabetic { 1.0 } else { 0.0 };
    let (sbp_coef, age_sbp_coef) = if inputs.treated_hypertension {
        (cohort.ln_sbp.0, cohort.ln_age_ln_sbp.0)
    } else {
        (cohort.ln_sbp.1, cohort.ln_age_ln_sbp.1)
    };

    let sum = cohort.ln_age * ln_age
        + cohort.ln_age_sq * ln_age * ln_age
        + cohort.ln_tc * ln_tc
        + cohort.ln_age_ln_tc * ln_age * ln_tc
        + cohort.ln_hdl * ln_hdl
        + cohort.ln_age_ln_hdl * ln_age * ln_hdl
        + sbp_coef * ln_sbp
        + age_sbp_coef * ln_age * ln_sbp
        + cohort.smoker * smoker
        + cohort.ln_age_smoker * ln_age * smoker
        + cohort.diabetes * diabetic;

    let risk = (1.0 - cohort.baseline_survival.powf((sum - cohort.mean).exp())) * 100.0;
    risk.clamp(0.0, 100.0)
}

pub fn categorize(risk: f64) -> Category {
    if risk < 5.0 {
        LOW
    } else if risk < 7.5 {
        BORDERLINE
    } else if risk < 20.0 {
        INTERMEDIATE
    } else {
        HIGH
    }
}
