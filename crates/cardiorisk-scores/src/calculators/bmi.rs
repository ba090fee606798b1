use cardiorisk_core::{Field, InputSnapshot};

use crate::scoring::{Category, Score, colors};
use crate::{Calculator, CalculatorId};

/// Body-mass index: weight (kg) over height (m) squared, one decimal.
pub struct Bmi;

pub const UNDERWEIGHT: Category = Category {
    key: "underweight",
    severity: 1,
    color: colors::BLUE,
    label_en: "Underweight",
    label_id: "Underweight",
};
pub const NORMAL: Category = Category {
    key: "normal",
    severity: 0,
    color: colors::GREEN,
    label_en: "Normal",
    label_id: "Normal",
};
pub const OVERWEIGHT: Category = Category {
    key: "overweight",
    severity: 2,
    color: colors::ORANGE,
    label_en: "Overweight",
    label_id: "Overweight",
};
pub const OBESE: Category = Category {
    key: "obese",
    severity: 3,
    color: colors::RED,
    label_en: "Obese",
    label_id: "Obesitas",
};

impl Calculator for Bmi {
    fn id(&self) -> CalculatorId {
        CalculatorId::Bmi
    }

    fn name(&self) -> &str {
        "BMI"
    }

    fn inputs(&self) -> &[Field] {
        &[Field::Weight, Field::Height]
    }

    fn calculate(&self, snapshot: &InputSnapshot) -> Option<Score> {
        let bmi = body_mass_index(snapshot.weight?, snapshot.height?)?;
        Score::rounded(CalculatorId::Bmi, bmi, 1, categorize(bmi))
    }
}

/// `None` unless both measurements are positive.
pub fn body_mass_index(weight_kg: f64, height_cm: f64) -> Option<f64> {
    if weight_kg <= 0.0 || height_cm <= 0.0 {
        return None;
    }
    let height_m = height_cm / 100.0;
    Some(weight_kg / (height_m * height_m))
}

pub fn categorize(bmi: f64) -> Category {
    if bmi < 18.5 {
        UNDERWEIGHT
    } else if bmi < 25.0 {
        NORMAL
    } else if bmi < 30.0 {
        OVERWEIGHT
    } else {
        OBESE
    }
}
