//! Alert classification
//!
//! Filters raw alerts into recognized hazard alerts, detects pure warnings,
//! and derives the winter-weather status. All matching is case-insensitive
//! substring containment over small fixed tables.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use types::alert::AlertRecord;
use types::errors::ConfigError;
use types::threat::WinterStatus;

use crate::synonyms::{self, contains_any};

/// Matching tables used by the classifier
///
/// Entries are stored lower-cased and trimmed; see [`MatchRules::normalized`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchRules {
    /// Severities accepted for general hazard alerts
    pub allowed_severities: Vec<String>,
    /// Event keywords marking a general hazard alert
    pub hazard_keywords: Vec<String>,
    /// Winter-hazard event phrases
    pub winter_synonyms: Vec<String>,
}

impl Default for MatchRules {
    fn default() -> Self {
        let owned = |table: &[&str]| -> Vec<String> {
            table.iter().map(|s| s.to_string()).collect()
        };
        Self {
            allowed_severities: owned(synonyms::ALLOWED_SEVERITIES),
            hazard_keywords: owned(synonyms::HAZARD_KEYWORDS),
            winter_synonyms: owned(synonyms::WINTER_SYNONYMS),
        }
    }
}

impl MatchRules {
    /// Keys accepted in a serialized rule set
    pub const FIELDS: &'static [&'static str] =
        &["allowed_severities", "hazard_keywords", "winter_synonyms"];

    /// Lower-case and trim every entry.
    pub fn normalized(self) -> Self {
        let normalize = |table: Vec<String>| -> Vec<String> {
            table.into_iter().map(|s| s.trim().to_lowercase()).collect()
        };
        Self {
            allowed_severities: normalize(self.allowed_severities),
            hazard_keywords: normalize(self.hazard_keywords),
            winter_synonyms: normalize(self.winter_synonyms),
        }
    }

    /// Reject empty tables and blank entries.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let tables = [
            ("allowed_severities", &self.allowed_severities),
            ("hazard_keywords", &self.hazard_keywords),
            ("winter_synonyms", &self.winter_synonyms),
        ];
        for (name, table) in tables {
            if table.is_empty() {
                return Err(ConfigError::EmptyTable {
                    table: name.to_string(),
                });
            }
            if table.iter().any(|entry| entry.trim().is_empty()) {
                return Err(ConfigError::BlankEntry {
                    table: name.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Recognized hazard alert: hazard keyword in the event name AND an
    /// allowed severity. Both conditions are required.
    pub fn is_hazard_alert(&self, alert: &AlertRecord) -> bool {
        let severity = alert.severity_lower();
        contains_any(&alert.event_lower(), &self.hazard_keywords)
            && self
                .allowed_severities
                .iter()
                .any(|s| s.trim().to_lowercase() == severity)
    }

    /// Whether the event name contains any winter synonym.
    pub fn is_winter_relevant(&self, event: &str) -> bool {
        !event.is_empty() && contains_any(&event.to_lowercase(), &self.winter_synonyms)
    }

    /// Winter status contributed by a single alert.
    pub fn winter_contribution(&self, alert: &AlertRecord) -> WinterStatus {
        if !self.is_winter_relevant(&alert.event) {
            return WinterStatus::NONE;
        }
        winter_tier(&alert.event)
    }
}

/// Default rules, built once
pub fn default_rules() -> &'static MatchRules {
    static DEFAULT: OnceLock<MatchRules> = OnceLock::new();
    DEFAULT.get_or_init(MatchRules::default)
}

/// Result of classifying an alert collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertClassification {
    /// Recognized hazard alerts, in input order
    pub general_alerts: Vec<AlertRecord>,
    /// Aggregated winter-weather status
    pub winter_status: WinterStatus,
    /// Pure warnings found anywhere in the input, in input order
    pub active_warnings: Vec<AlertRecord>,
}

impl AlertClassification {
    pub fn has_active_warnings(&self) -> bool {
        !self.active_warnings.is_empty()
    }
}

/// Classify alerts with the default tables.
pub fn classify(alerts: &[AlertRecord]) -> AlertClassification {
    classify_with(alerts, default_rules())
}

/// Classify alerts with the given tables.
///
/// Winter status is the strongest contribution of any alert: a single
/// warning-tier alert outranks any number of advisory-tier ones.
pub fn classify_with(alerts: &[AlertRecord], rules: &MatchRules) -> AlertClassification {
    let general_alerts = alerts
        .iter()
        .filter(|alert| rules.is_hazard_alert(alert))
        .cloned()
        .collect();

    let active_warnings = alerts
        .iter()
        .filter(|alert| is_pure_warning(&alert.event))
        .cloned()
        .collect();

    let winter_status = alerts
        .iter()
        .map(|alert| rules.winter_contribution(alert))
        .max()
        .unwrap_or_default();

    AlertClassification {
        general_alerts,
        winter_status,
        active_warnings,
    }
}

/// Whether `event` names a winter-weather hazard under the default tables.
///
/// Empty input is never winter-relevant.
pub fn is_winter_weather_alert(event: &str) -> bool {
    default_rules().is_winter_relevant(event)
}

/// Pure warning: "warning" without "watch" or "advisory".
///
/// Unlike [`winter_tier`], "statement" is not excluded here.
pub fn is_pure_warning(event: &str) -> bool {
    let lower = event.to_lowercase();
    lower.contains("warning") && !lower.contains("watch") && !lower.contains("advisory")
}

/// Whether any alert is a pure warning.
pub fn has_active_warnings(alerts: &[AlertRecord]) -> bool {
    alerts.iter().any(|alert| is_pure_warning(&alert.event))
}

/// Tier of a winter-relevant event name.
///
/// Warning-tier needs "warning" and none of "watch", "advisory",
/// "statement"; otherwise any of those three makes it advisory-tier.
pub fn winter_tier(event: &str) -> WinterStatus {
    let lower = event.to_lowercase();
    let qualified = ["watch", "advisory", "statement"]
        .iter()
        .any(|word| lower.contains(word));

    if lower.contains("warning") && !qualified {
        WinterStatus::WARNING
    } else if qualified {
        WinterStatus::ADVISORY
    } else {
        WinterStatus::NONE
    }
}
