use cardiorisk_core::{Field, InputSnapshot};

use crate::conditions::{Condition, has_diabetes, has_hypertension};
use crate::scoring::{Category, Score, colors};
use crate::{Calculator, CalculatorId};

/// CHA₂DS₂-VASc stroke-risk score for atrial fibrillation.
/// Never gated: an unknown age scores as 0.
pub struct Cha2ds2Vasc;

pub const LOW: Category = Category {
    key: "low",
    severity: 0,
    color: colors::GREEN,
    label_en: "Low",
    label_id: "Risiko Rendah",
};
pub const LOW_INTERMEDIATE: Category = Category {
    key: "low_intermediate",
    severity: 1,
    color: colors::YELLOW,
    label_en: "Low-Intermediate",
    label_id: "Risiko Rendah-Menengah",
};
pub const INTERMEDIATE: Category = Category {
    key: "intermediate",
    severity: 2,
    color: colors::ORANGE,
    label_en: "Intermediate",
    label_id: "Risiko Menengah",
};
pub const HIGH: Category = Category {
    key: "high",
    severity: 3,
    color: colors::RED,
    label_en: "High",
    label_id: "Risiko Tinggi",
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StrokeRiskFactors {
    pub age: u32,
    pub female: bool,
    pub heart_failure: bool,
    pub hypertension: bool,
    pub diabetes: bool,
    pub stroke_history: bool,
    pub vascular_disease: bool,
}

impl StrokeRiskFactors {
    pub fn from_snapshot(snapshot: &InputSnapshot) -> Self {
        Self {
            age: snapshot.age.unwrap_or(0),
            female: snapshot.is_female(),
            heart_failure: snapshot.has_heart_failure,
            hypertension: has_hypertension(snapshot),
            diabetes: has_diabetes(snapshot),
            stroke_history: snapshot.has_stroke_history,
            vascular_disease: snapshot.has_vascular_disease,
        }
    }
}

impl Calculator for Cha2ds2Vasc {
    fn id(&self) -> CalculatorId {
        CalculatorId::StrokeRisk
    }

    fn name(&self) -> &str {
        "CHA₂DS₂-VASc"
    }

    fn inputs(&self) -> &[Field] {
        &[
            Field::Age,
            Field::Gender,
            Field::HasHeartFailure,
            Field::HasStrokeHistory,
            Field::HasVascularDisease,
        ]
    }

    fn conditions(&self) -> &[Condition] {
        &[Condition::Hypertension, Condition::Diabetes]
    }

    fn calculate(&self, snapshot: &InputSnapshot) -> Option<Score> {
        let points = score(&StrokeRiskFactors::from_snapshot(snapshot));
        Some(Score::points(CalculatorId::StrokeRisk, points, categorize(points)))
    }
}

pub fn score(factors: &StrokeRiskFactors) -> u8 {
    let mut points = 0;
    if factors.heart_failure {
        points += 1;
    }
    if factors.hypertension {
        points += 1;
    }
    // A₂ and A are one bucket: 75+ scores 2, 65–74 scores 1.
    if factors.age >= 75 {
        points += 2;
    } else if factors.age >= 65 {
        points += 1;
    }
    if factors.diabetes {
        points += 1;
    }
    if factors.stroke_history {
        points += 2;
    }
    if factors.vascular_disease {
        points += 1;
    }
    if factors.female {
        points += 1;
    }
    points
}

pub fn categorize(points: u8) -> Category {
    match points {
        0 => LOW,
        1 => LOW_INTERMEDIATE,
        2 | 3 => INTERMEDIATE,
        _ => HIGH,
    }
}
