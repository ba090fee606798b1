use cardiorisk_scores::CalculatorId;
use cardiorisk_scores::calculators::has_bled::{Component, Indicator};
use cardiorisk_scores::conditions::{Condition, flag_color, flag_label};
use cardiorisk_scores::scoring::{Locale, Score};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Something the presentation layer should display.
///
/// A pass publishes events instead of touching the UI; the binding layer
/// decides which element each one updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum OutputEvent {
    Condition(ConditionEvent),
    Score(ScoreEvent),
    /// Gating failed; any previously shown value must be cleared.
    ScoreAbsent { calculator: CalculatorId },
    BleedingIndicators { indicators: Vec<IndicatorEvent> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConditionEvent {
    pub condition: Condition,
    pub flag: bool,
    pub label: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreEvent {
    pub calculator: CalculatorId,
    pub value: f64,
    pub formatted_value: String,
    pub category: String,
    pub category_key: String,
    pub category_color: String,
    pub severity: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct IndicatorEvent {
    pub component: Component,
    pub active: bool,
    pub label: String,
    pub color: String,
}

impl OutputEvent {
    pub fn condition(condition: Condition, flag: bool, locale: Locale) -> Self {
        OutputEvent::Condition(ConditionEvent {
            condition,
            flag,
            label: flag_label(flag, locale).to_string(),
            color: flag_color(flag).to_string(),
        })
    }

    pub fn score(score: &Score, locale: Locale) -> Self {
        OutputEvent::Score(ScoreEvent {
            calculator: score.calculator,
            value: score.value,
            formatted_value: score.formatted.clone(),
            category: score.category.label(locale).to_string(),
            category_key: score.category.key.to_string(),
            category_color: score.category.color.to_string(),
            severity: score.category.severity,
        })
    }

    pub fn indicators(indicators: &[Indicator], locale: Locale) -> Self {
        OutputEvent::BleedingIndicators {
            indicators: indicators
                .iter()
                .map(|i| IndicatorEvent {
                    component: i.component,
                    active: i.active,
                    label: i.label(locale).to_string(),
                    color: i.color().to_string(),
                })
                .collect(),
        }
    }

    /// The calculator this event reports on, if any.
    pub fn calculator(&self) -> Option<CalculatorId> {
        match self {
            OutputEvent::Score(e) => Some(e.calculator),
            OutputEvent::ScoreAbsent { calculator } => Some(*calculator),
            _ => None,
        }
    }
}
