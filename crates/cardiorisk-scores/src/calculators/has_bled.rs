use cardiorisk_core::{Field, InputSnapshot};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::calculators::egfr::Egfr;
use crate::scoring::{Category, Locale, Score, colors};
use crate::{Calculator, CalculatorId};

/// HAS-BLED bleeding-risk score for patients on anticoagulation.
///
/// Renal function comes from the published eGFR. Unlike the other
/// calculators, an unknown eGFR is not a gate: it counts as a normal 100.
/// Unknown systolic pressure and age count as 0.
pub struct HasBled;

/// eGFR assumed when it cannot be computed.
pub const DEFAULT_GFR: f64 = 100.0;

pub const LOW: Category = Category {
    key: "low",
    severity: 0,
    color: colors::GREEN,
    label_en: "Low",
    label_id: "Risiko Rendah",
};
pub const INTERMEDIATE: Category = Category {
    key: "intermediate",
    severity: 1,
    color: colors::ORANGE,
    label_en: "Intermediate",
    label_id: "Risiko Menengah",
};
pub const HIGH: Category = Category {
    key: "high",
    severity: 2,
    color: colors::RED,
    label_en: "High (≥3)",
    label_id: "Risiko Tinggi (≥3)",
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BleedingRiskFactors {
    pub sbp: f64,
    pub gfr: f64,
    pub age: u32,
    pub liver_disease: bool,
    pub stroke_history: bool,
    pub bleeding_history: bool,
    pub labile_inr: bool,
    pub antiplatelet: bool,
    pub alcohol: bool,
}

impl Default for BleedingRiskFactors {
    fn default() -> Self {
        Self {
            sbp: 0.0,
            gfr: DEFAULT_GFR,
            age: 0,
            liver_disease: false,
            stroke_history: false,
            bleeding_history: false,
            labile_inr: false,
            antiplatelet: false,
            alcohol: false,
        }
    }
}

impl BleedingRiskFactors {
    pub fn from_snapshot(snapshot: &InputSnapshot) -> Self {
        let gfr = Egfr
            .calculate(snapshot)
            .map_or(DEFAULT_GFR, |egfr| egfr.value);
        Self {
            sbp: snapshot.sbp.unwrap_or(0.0),
            gfr,
            age: snapshot.age.unwrap_or(0),
            liver_disease: snapshot.liver_disease,
            stroke_history: snapshot.has_stroke_history,
            bleeding_history: snapshot.has_bleeding_history,
            labile_inr: snapshot.has_labile_inr,
            antiplatelet: snapshot.takes_antiplatelet,
            alcohol: snapshot.takes_alcohol,
        }
    }

    fn uncontrolled_hypertension(&self) -> bool {
        self.sbp > 160.0
    }

    fn abnormal_renal(&self) -> bool {
        self.gfr < 30.0
    }

    fn elderly(&self) -> bool {
        self.age > 65
    }
}

impl Calculator for HasBled {
    fn id(&self) -> CalculatorId {
        CalculatorId::BleedingRisk
    }

    fn name(&self) -> &str {
        "HAS-BLED"
    }

    fn inputs(&self) -> &[Field] {
        &[
            Field::Sbp,
            Field::Age,
            Field::LiverDisease,
            Field::HasStrokeHistory,
            Field::HasBleedingHistory,
            Field::HasLabileInr,
            Field::TakesAntiplatelet,
            Field::TakesAlcohol,
        ]
    }

    fn upstream(&self) -> &[CalculatorId] {
        &[CalculatorId::Egfr]
    }

    fn calculate(&self, snapshot: &InputSnapshot) -> Option<Score> {
        let points = score(&BleedingRiskFactors::from_snapshot(snapshot));
        Some(Score::points(CalculatorId::BleedingRisk, points, categorize(points)))
    }
}

pub fn score(factors: &BleedingRiskFactors) -> u8 {
    [
        factors.uncontrolled_hypertension(),
        factors.abnormal_renal(),
        factors.liver_disease,
        factors.stroke_history,
        factors.bleeding_history,
        factors.labile_inr,
        factors.elderly(),
        factors.antiplatelet,
        factors.alcohol,
    ]
    .into_iter()
    .filter(|hit| *hit)
    .count() as u8
}

pub fn categorize(points: u8) -> Category {
    match points {
        0 | 1 => LOW,
        2 => INTERMEDIATE,
        _ => HIGH,
    }
}

/// The auto-detected HAS-BLED letters shown next to the manual checkboxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Component {
    #[serde(rename = "H")]
    Hypertension,
    #[serde(rename = "A-renal")]
    AbnormalRenal,
    #[serde(rename = "A-liver")]
    AbnormalLiver,
    #[serde(rename = "S")]
    Stroke,
    #[serde(rename = "E")]
    Elderly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    pub component: Component,
    pub active: bool,
}

impl Indicator {
    pub fn label(&self, locale: Locale) -> &'static str {
        match (self.active, locale) {
            (true, Locale::En) => "Yes (+1)",
            (false, Locale::En) => "No",
            (true, Locale::Id) => "Ya (+1)",
            (false, Locale::Id) => "Tidak",
        }
    }

    pub fn color(&self) -> &'static str {
        if self.active { colors::RED } else { colors::GREEN }
    }
}

/// Status of each auto-detected component, in display order.
pub fn indicators(snapshot: &InputSnapshot) -> [Indicator; 5] {
    let factors = BleedingRiskFactors::from_snapshot(snapshot);
    [
        Indicator {
            component: Component::Hypertension,
            active: factors.uncontrolled_hypertension(),
        },
        Indicator {
            component: Component::AbnormalRenal,
            active: factors.abnormal_renal(),
        },
        Indicator {
            component: Component::AbnormalLiver,
            active: factors.liver_disease,
        },
        Indicator {
            component: Component::Stroke,
            active: factors.stroke_history,
        },
        Indicator {
            component: Component::Elderly,
            active: factors.elderly(),
        },
    ]
}
