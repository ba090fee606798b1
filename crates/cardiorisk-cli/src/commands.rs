use std::io::Write;
use std::path::Path;

use cardiorisk_core::{Field, InputSnapshot};
use cardiorisk_engine::{DependencyGraph, OutputEvent, Rule, Session};
use cardiorisk_scores::scoring::Locale;
use eyre::WrapErr;
use serde::{Deserialize, Serialize};

/// One raw edit as a form would report it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawChange {
    pub field: String,
    pub raw: String,
}

/// The events of one replayed change.
#[derive(Debug, Serialize)]
struct Pass<'a> {
    field: &'a str,
    raw: &'a str,
    events: Vec<OutputEvent>,
}

#[derive(Debug, Serialize)]
struct Edge {
    field: Field,
    rules: Vec<Rule>,
}

pub fn load_snapshot(path: &Path) -> eyre::Result<InputSnapshot> {
    let text = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read snapshot {}", path.display()))?;
    InputSnapshot::from_json(&text)
        .wrap_err_with(|| format!("invalid snapshot {}", path.display()))
}

pub fn load_changes(path: &Path) -> eyre::Result<Vec<RawChange>> {
    let text = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read changes {}", path.display()))?;
    serde_json::from_str(&text).wrap_err_with(|| format!("invalid changes {}", path.display()))
}

/// Full recompute, one event per line.
pub fn eval(snapshot: InputSnapshot, locale: Locale, out: &mut impl Write) -> eyre::Result<()> {
    let session = Session::new(snapshot, locale);
    for event in session.refresh() {
        writeln!(out, "{}", serde_json::to_string(&event)?)?;
    }
    Ok(())
}

/// Apply `changes` in order, one line per pass.
///
/// Stops at the first rejected change; earlier passes have already been
/// written.
pub fn replay(
    snapshot: InputSnapshot,
    changes: &[RawChange],
    locale: Locale,
    out: &mut impl Write,
) -> eyre::Result<()> {
    let mut session = Session::new(snapshot, locale);
    for (index, change) in changes.iter().enumerate() {
        let events = session
            .apply_raw(&change.field, &change.raw)
            .wrap_err_with(|| format!("change #{index} rejected"))?;
        tracing::debug!(index, field = %change.field, events = events.len(), "replayed change");
        let pass = Pass {
            field: &change.field,
            raw: &change.raw,
            events,
        };
        writeln!(out, "{}", serde_json::to_string(&pass)?)?;
    }
    Ok(())
}

pub fn payload(snapshot: InputSnapshot, out: &mut impl Write) -> eyre::Result<()> {
    let session = Session::new(snapshot, Locale::default());
    writeln!(out, "{}", session.payload().to_json_pretty()?)?;
    Ok(())
}

/// Print the field → rule table, skipping pass-through fields.
pub fn graph(out: &mut impl Write) -> eyre::Result<()> {
    let graph = DependencyGraph::new();
    for field in Field::ALL {
        let rules: Vec<Rule> = graph.affected(field).into_iter().collect();
        if rules.is_empty() {
            continue;
        }
        writeln!(out, "{}", serde_json::to_string(&Edge { field, rules })?)?;
    }
    Ok(())
}
