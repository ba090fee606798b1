use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::CalculatorId;

/// Language used for every label the engine publishes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Locale {
    #[default]
    En,
    /// Bahasa Indonesia.
    Id,
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "id" => Ok(Locale::Id),
            other => Err(format!("unsupported locale '{other}' (expected en or id)")),
        }
    }
}

/// Status colours shared by the detectors, categories and indicators.
pub mod colors {
    pub const GREEN: &str = "#27ae60";
    pub const YELLOW: &str = "#f1c40f";
    pub const ORANGE: &str = "#f39c12";
    pub const DARK_ORANGE: &str = "#e67e22";
    pub const RED: &str = "#e74c3c";
    pub const BLUE: &str = "#3498db";
}

/// One band of a score's categorisation table.
///
/// `severity` ranks bands within a single calculator, 0 being the least
/// concerning. Ranks are not comparable across calculators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub key: &'static str,
    pub severity: u8,
    pub color: &'static str,
    pub label_en: &'static str,
    pub label_id: &'static str,
}

impl Category {
    pub fn label(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.label_en,
            Locale::Id => self.label_id,
        }
    }
}

/// A computed score as published to the UI and to dependent calculators.
#[derive(Debug, Clone, PartialEq)]
pub struct Score {
    pub calculator: CalculatorId,
    /// The rounded value the form field shows.
    pub value: f64,
    pub formatted: String,
    /// Chosen from the unrounded value.
    pub category: Category,
}

impl Score {
    /// Publish `raw` rounded to `decimals` places. `None` when `raw` is
    /// NaN or infinite.
    pub fn rounded(
        calculator: CalculatorId,
        raw: f64,
        decimals: usize,
        category: Category,
    ) -> Option<Self> {
        if !raw.is_finite() {
            return None;
        }
        let factor = 10f64.powi(decimals as i32);
        let value = (raw * factor).round() / factor;
        Some(Self {
            calculator,
            value,
            formatted: format!("{value:.decimals$}"),
            category,
        })
    }

    /// Publish an integer point score.
    pub fn points(calculator: CalculatorId, points: u8, category: Category) -> Self {
        Self {
            calculator,
            value: f64::from(points),
            formatted: points.to_string(),
            category,
        }
    }
}
