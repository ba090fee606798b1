use cardiorisk_core::{CoreError, Field, FieldChange, InputSnapshot};
use cardiorisk_scores::scoring::Locale;

use crate::cascade::Cascade;
use crate::events::OutputEvent;
use crate::payload::DiagnosisPayload;

/// Owns the current snapshot on behalf of the binding layer and runs one
/// pass per accepted change.
pub struct Session {
    snapshot: InputSnapshot,
    cascade: Cascade,
}

impl Session {
    pub fn new(snapshot: InputSnapshot, locale: Locale) -> Self {
        Self {
            snapshot,
            cascade: Cascade::new(locale),
        }
    }

    pub fn snapshot(&self) -> &InputSnapshot {
        &self.snapshot
    }

    /// Events for every rule over the current snapshot.
    pub fn refresh(&self) -> Vec<OutputEvent> {
        self.cascade.recompute_all(&self.snapshot)
    }

    /// Store the change, then run the pass it triggers.
    ///
    /// A rejected change leaves the snapshot untouched and runs nothing.
    pub fn apply(&mut self, change: &FieldChange) -> Result<Vec<OutputEvent>, CoreError> {
        self.snapshot.apply(change)?;
        Ok(self.cascade.on_change(&self.snapshot, change.field))
    }

    /// Parse raw form text for the field with wire key `key` and apply it.
    pub fn apply_raw(&mut self, key: &str, raw: &str) -> Result<Vec<OutputEvent>, CoreError> {
        let field = Field::from_key(key)?;
        self.apply(&FieldChange::from_raw(field, raw))
    }

    /// Replace the symptom list. Symptoms feed only the payload, so no pass
    /// runs.
    pub fn set_symptoms(&mut self, symptoms: Vec<String>) {
        self.snapshot.symptoms = symptoms;
    }

    pub fn payload(&self) -> DiagnosisPayload {
        DiagnosisPayload::assemble(&self.snapshot)
    }
}
