//! Threat Engine
//!
//! Classifies active weather alerts and the categorical storm-risk code
//! into a single threat level for display:
//! - risk code → risk category (`translator`)
//! - alerts → general alerts, active warnings, winter status (`classifier`)
//! - both → threat level and description (`resolver`)
//!
//! Every function is pure; the engine holds no mutable state and is safe to
//! share across threads.

pub mod synonyms;
pub mod translator;
pub mod classifier;
pub mod resolver;
pub mod feed;
pub mod report;
pub mod engine;

pub use classifier::{classify, AlertClassification};
pub use engine::{ThreatEngine, ThreatEngineConfig};
pub use report::ThreatReport;
pub use resolver::resolve;
pub use translator::translate;
