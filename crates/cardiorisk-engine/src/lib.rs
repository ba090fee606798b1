//! cardiorisk-engine
//!
//! The recomputation cascade: a dependency graph derived from the calculator
//! declarations, a scheduler that runs the affected detectors and
//! calculators in a fixed order, and the events it publishes. Also
//! assembles the request body for the downstream diagnosis service.

pub mod cascade;
pub mod events;
pub mod graph;
pub mod payload;
pub mod session;

pub use cascade::Cascade;
pub use events::OutputEvent;
pub use graph::{DependencyGraph, Rule, Schedule};
pub use payload::DiagnosisPayload;
pub use session::Session;
