use cardiorisk_core::{Field, Gender, InputSnapshot};

use crate::scoring::{Category, Score, colors};
use crate::{Calculator, CalculatorId};

/// eGFR by the race-free CKD-EPI 2021 creatinine equation, mL/min/1.73m².
///
/// Race is declared as an input so a race change re-runs the calculator,
/// but it does not enter the 2021 equation.
pub struct Egfr;

pub const NORMAL: Category = Category {
    key: "normal",
    severity: 0,
    color: colors::GREEN,
    label_en: "Normal",
    label_id: "Normal",
};
pub const STAGE_2: Category = Category {
    key: "ckd_stage_2",
    severity: 1,
    color: colors::YELLOW,
    label_en: "CKD Stage 2",
    label_id: "CKD Stage 2",
};
pub const STAGE_3: Category = Category {
    key: "ckd_stage_3",
    severity: 2,
    color: colors::ORANGE,
    label_en: "CKD Stage 3",
    label_id: "CKD Stage 3",
};
pub const STAGE_4: Category = Category {
    key: "ckd_stage_4",
    severity: 3,
    color: colors::DARK_ORANGE,
    label_en: "CKD Stage 4",
    label_id: "CKD Stage 4",
};
pub const STAGE_5: Category = Category {
    key: "ckd_stage_5",
    severity: 4,
    color: colors::RED,
    label_en: "CKD Stage 5",
    label_id: "CKD Stage 5",
};

impl Calculator for Egfr {
    fn id(&self) -> CalculatorId {
        CalculatorId::Egfr
    }

    fn name(&self) -> &str {
        "eGFR (CKD-EPI 2021)"
    }

    fn inputs(&self) -> &[Field] {
        &[Field::Creatinine, Field::Age, Field::Gender, Field::Race]
    }

    fn calculate(&self, snapshot: &InputSnapshot) -> Option<Score> {
        let creatinine = snapshot.creatinine?;
        let age = snapshot.age?;
        let gender = snapshot.gender?;
        if creatinine <= 0.0 || age == 0 {
            return None;
        }

        let egfr = ckd_epi_2021(creatinine, age, gender);
        Score::rounded(CalculatorId::Egfr, egfr, 0, categorize(egfr))
    }
}

pub fn ckd_epi_2021(creatinine: f64, age: u32, gender: Gender) -> f64 {
    let (kappa, alpha, sex_coef) = match gender {
        Gender::Female => (0.7, -0.241, 1.012),
        Gender::Male => (0.9, -0.302, 1.0),
    };

    let scr_k = creatinine / kappa;
    142.0
        * scr_k.min(1.0).powf(alpha)
        * scr_k.max(1.0).powf(-1.200)
        * 0.9938f64.powf(f64::from(age))
        * sex_coef
}

pub fn categorize(egfr: f64) -> Category {
    if egfr >= 90.0 {
        NORMAL
    } else if egfr >= 60.0 {
        STAGE_2
    } else if egfr >= 30.0 {
        STAGE_3
    } else if egfr >= 15.0 {
        STAGE_4
    } else {
        STAGE_5
    }
}
