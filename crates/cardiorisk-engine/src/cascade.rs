use cardiorisk_core::{Field, InputSnapshot};
use cardiorisk_scores::Calculator;
use cardiorisk_scores::calculators::has_bled;
use cardiorisk_scores::scoring::Locale;
use tracing::{debug, debug_span, trace};

use crate::events::OutputEvent;
use crate::graph::{DependencyGraph, Rule, Schedule};

/// Runs cascade passes over a borrowed snapshot.
///
/// A pass is synchronous and reads the snapshot only, so the same snapshot
/// always yields the same events. Every rule re-derives what it needs from
/// the snapshot (detectors included) instead of reading results cached by
/// an earlier rule.
pub struct Cascade {
    graph: DependencyGraph,
    locale: Locale,
}

impl Cascade {
    pub fn new(locale: Locale) -> Self {
        Self {
            graph: DependencyGraph::new(),
            locale,
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    /// The pass triggered by a change to `field`.
    pub fn on_change(&self, snapshot: &InputSnapshot, field: Field) -> Vec<OutputEvent> {
        let schedule = self.graph.affected(field);
        let _span = debug_span!("cascade_pass", trigger = %field, rules = schedule.len()).entered();
        self.run(snapshot, &schedule)
    }

    /// Run every rule, e.g. after loading a whole snapshot.
    pub fn recompute_all(&self, snapshot: &InputSnapshot) -> Vec<OutputEvent> {
        let schedule = self.graph.full();
        let _span = debug_span!("cascade_pass", trigger = "all", rules = schedule.len()).entered();
        self.run(snapshot, &schedule)
    }

    /// Run `schedule` in rule order. Every scheduled calculator yields
    /// either a score or an absent event.
    pub fn run(&self, snapshot: &InputSnapshot, schedule: &Schedule) -> Vec<OutputEvent> {
        let mut events = Vec::with_capacity(schedule.len());
        for rule in schedule {
            trace!(%rule, "running rule");
            match *rule {
                Rule::Condition(condition) => {
                    let flag = condition.detect(snapshot);
                    events.push(OutputEvent::condition(condition, flag, self.locale));
                }
                Rule::Calculator(id) => {
                    let Some(calculator) = self.graph.calculator(id) else {
                        continue;
                    };
                    match calculator.calculate(snapshot) {
                        Some(score) => {
                            debug!(calculator = %id, value = %score.formatted, category = score.category.key, "score published");
                            events.push(OutputEvent::score(&score, self.locale));
                        }
                        None => {
                            debug!(calculator = %id, "inputs insufficient; score absent");
                            events.push(OutputEvent::ScoreAbsent { calculator: id });
                        }
                    }
                }
                Rule::BleedingIndicators => {
                    let indicators = has_bled::indicators(snapshot);
                    events.push(OutputEvent::indicators(&indicators, self.locale));
                }
            }
        }
        events
    }
}
