//! cardiorisk-scores
//!
//! Clinical risk-score calculators and condition detectors. Pure functions of
//! an [`InputSnapshot`], no I/O. Each calculator declares the fields,
//! conditions and upstream scores it reads so the engine can derive its
//! recomputation graph from the declarations.

pub mod calculators;
pub mod conditions;
pub mod error;
pub mod scoring;

use cardiorisk_core::{Field, InputSnapshot};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use conditions::Condition;
use error::ScoreError;
use scoring::Score;

/// Identifies a calculator. The declaration order is the fixed execution
/// order of a cascade pass, and every upstream calculator comes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CalculatorId {
    Bmi,
    Egfr,
    Ascvd,
    StrokeRisk,
    BleedingRisk,
}

impl CalculatorId {
    pub const ALL: [CalculatorId; 5] = [
        CalculatorId::Bmi,
        CalculatorId::Egfr,
        CalculatorId::Ascvd,
        CalculatorId::StrokeRisk,
        CalculatorId::BleedingRisk,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CalculatorId::Bmi => "bmi",
            CalculatorId::Egfr => "egfr",
            CalculatorId::Ascvd => "ascvd",
            CalculatorId::StrokeRisk => "stroke_risk",
            CalculatorId::BleedingRisk => "bleeding_risk",
        }
    }
}

impl std::fmt::Display for CalculatorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CalculatorId {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CalculatorId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| ScoreError::UnknownCalculator(s.to_string()))
    }
}

/// Trait implemented by each risk-score calculator.
pub trait Calculator: Send + Sync {
    fn id(&self) -> CalculatorId;

    /// Human-readable name (e.g., "CHA₂DS₂-VASc").
    fn name(&self) -> &str;

    /// Snapshot fields read directly by the formula.
    fn inputs(&self) -> &[Field];

    /// Detected conditions the formula consumes.
    fn conditions(&self) -> &[Condition] {
        &[]
    }

    /// Calculators whose published value this one reads.
    fn upstream(&self) -> &[CalculatorId] {
        &[]
    }

    /// Compute the score, or `None` when the gating inputs are missing.
    fn calculate(&self, snapshot: &InputSnapshot) -> Option<Score>;
}

/// Return all registered calculators in execution order.
pub fn all_calculators() -> Vec<Box<dyn Calculator>> {
    vec![
        Box::new(calculators::bmi::Bmi),
        Box::new(calculators::egfr::Egfr),
        Box::new(calculators::ascvd::Ascvd),
        Box::new(calculators::cha2ds2_vasc::Cha2ds2Vasc),
        Box::new(calculators::has_bled::HasBled),
    ]
}

/// Look up a calculator by ID.
pub fn get_calculator(id: CalculatorId) -> Box<dyn Calculator> {
    match id {
        CalculatorId::Bmi => Box::new(calculators::bmi::Bmi),
        CalculatorId::Egfr => Box::new(calculators::egfr::Egfr),
        CalculatorId::Ascvd => Box::new(calculators::ascvd::Ascvd),
        CalculatorId::StrokeRisk => Box::new(calculators::cha2ds2_vasc::Cha2ds2Vasc),
        CalculatorId::BleedingRisk => Box::new(calculators::has_bled::HasBled),
    }
}
