use std::collections::{BTreeMap, BTreeSet};

use cardiorisk_core::Field;
use cardiorisk_scores::conditions::Condition;
use cardiorisk_scores::{Calculator, CalculatorId, all_calculators};
use serde::Serialize;

/// One unit of work in a cascade pass.
///
/// The derived ordering is the execution order: every detector, then every
/// calculator in [`CalculatorId`] order, then the HAS-BLED indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(tag = "rule", content = "id", rename_all = "snake_case")]
pub enum Rule {
    Condition(Condition),
    Calculator(CalculatorId),
    BleedingIndicators,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::Condition(c) => write!(f, "condition:{}", c.key()),
            Rule::Calculator(id) => write!(f, "calculator:{id}"),
            Rule::BleedingIndicators => f.write_str("bleeding_indicators"),
        }
    }
}

/// An ordered set of rules to run in one pass.
pub type Schedule = BTreeSet<Rule>;

/// Field → rules map derived from the calculators' own declarations.
///
/// A calculator is affected by a field when it reads the field directly,
/// consumes a condition whose detector reads it, or reads the published
/// value of an affected upstream calculator. Conditions consumed by an
/// affected calculator are scheduled too, so their badges are republished
/// ahead of it.
pub struct DependencyGraph {
    calculators: Vec<Box<dyn Calculator>>,
    edges: BTreeMap<Field, Schedule>,
}

impl Default for DependencyGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyGraph {
    pub fn new() -> Self {
        let calculators = all_calculators();
        let edges = Field::ALL
            .into_iter()
            .map(|field| (field, affected_by(&calculators, field)))
            .collect();
        Self { calculators, edges }
    }

    /// Rules to run after `field` changes. Empty for pass-through fields.
    pub fn affected(&self, field: Field) -> Schedule {
        self.edges.get(&field).cloned().unwrap_or_default()
    }

    /// Every rule, for an initial load or a full refresh.
    pub fn full(&self) -> Schedule {
        Condition::ALL
            .into_iter()
            .map(Rule::Condition)
            .chain(self.calculators.iter().map(|c| Rule::Calculator(c.id())))
            .chain(std::iter::once(Rule::BleedingIndicators))
            .collect()
    }

    pub fn calculator(&self, id: CalculatorId) -> Option<&dyn Calculator> {
        self.calculators
            .iter()
            .find(|c| c.id() == id)
            .map(|c| c.as_ref())
    }
}

fn affected_by(calculators: &[Box<dyn Calculator>], field: Field) -> Schedule {
    let triggered: BTreeSet<Condition> = Condition::ALL
        .into_iter()
        .filter(|c| c.inputs().contains(&field))
        .collect();

    // `calculators` is in execution order and upstreams come first, so one
    // forward sweep reaches the transitive closure.
    let mut hit: BTreeSet<CalculatorId> = BTreeSet::new();
    for calc in calculators {
        let direct = calc.inputs().contains(&field);
        let via_condition = calc.conditions().iter().any(|c| triggered.contains(c));
        let via_upstream = calc.upstream().iter().any(|u| hit.contains(u));
        if direct || via_condition || via_upstream {
            hit.insert(calc.id());
        }
    }

    let mut schedule: Schedule = triggered.into_iter().map(Rule::Condition).collect();
    for calc in calculators.iter().filter(|c| hit.contains(&c.id())) {
        schedule.extend(calc.conditions().iter().copied().map(Rule::Condition));
        schedule.insert(Rule::Calculator(calc.id()));
    }
    if hit.contains(&CalculatorId::StrokeRisk) || hit.contains(&CalculatorId::BleedingRisk) {
        schedule.insert(Rule::BleedingIndicators);
    }
    schedule
}
