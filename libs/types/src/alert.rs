//! Weather alert records
//!
//! One record per alert delivered by the upstream alert feed. Records are
//! read-only input to the classifier; nothing in the engine mutates them.

use serde::{Deserialize, Serialize};

/// A single active weather alert
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertRecord {
    /// Free-text event classification, e.g. "Winter Storm Warning"
    pub event: String,
    /// Free-text severity, e.g. "Severe", "Moderate", "Minor"
    pub severity: String,
    /// Display headline, carried through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    /// Affected area description, carried through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_desc: Option<String>,
}

impl AlertRecord {
    /// Create an alert with just the fields classification looks at
    pub fn new(event: impl Into<String>, severity: impl Into<String>) -> Self {
        Self {
            event: event.into(),
            severity: severity.into(),
            headline: None,
            area_desc: None,
        }
    }

    pub fn with_headline(mut self, headline: impl Into<String>) -> Self {
        self.headline = Some(headline.into());
        self
    }

    pub fn with_area_desc(mut self, area_desc: impl Into<String>) -> Self {
        self.area_desc = Some(area_desc.into());
        self
    }

    /// Lower-cased event name for case-insensitive matching
    pub fn event_lower(&self) -> String {
        self.event.to_lowercase()
    }

    /// Lower-cased severity for case-insensitive matching
    pub fn severity_lower(&self) -> String {
        self.severity.to_lowercase()
    }
}

/// Ordered collection of alerts; order never affects classification
pub type AlertCollection = Vec<AlertRecord>;
