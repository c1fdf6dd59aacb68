//! Threat Engine orchestrator
//!
//! Ties together risk code translation, alert classification and threat
//! resolution into one call per dashboard refresh.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};
use types::alert::AlertRecord;
use types::errors::ConfigError;
use types::risk::RiskCode;

use crate::classifier::{self, MatchRules};
use crate::feed;
use crate::report::ThreatReport;
use crate::resolver;
use crate::translator;

/// Threat engine configuration
///
/// Defaults reproduce the fixed matching tables exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreatEngineConfig {
    /// Matching tables for the alert classifier
    #[serde(flatten)]
    pub rules: MatchRules,
}

impl ThreatEngineConfig {
    /// Load and validate a configuration from JSON text.
    ///
    /// Missing tables fall back to their defaults. Unrecognized keys are
    /// rejected so a misspelled table name cannot silently keep a default.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_json::from_str(text)?;
        if let Some(map) = value.as_object() {
            let unknown = map
                .keys()
                .find(|key| !MatchRules::FIELDS.contains(&key.as_str()));
            if let Some(key) = unknown {
                warn!(%key, "Rejecting config with unknown key");
                return Err(ConfigError::UnknownKey { key: key.clone() });
            }
        }
        let config: ThreatEngineConfig = serde_json::from_value(value)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.rules.validate()
    }
}

/// Threat engine service
///
/// Holds only its immutable tables; every call is independent.
#[derive(Debug, Clone)]
pub struct ThreatEngine {
    rules: MatchRules,
}

impl ThreatEngine {
    /// Create a new threat engine with default configuration
    pub fn new() -> Self {
        Self {
            rules: MatchRules::default(),
        }
    }

    /// Create a new threat engine with custom configuration
    ///
    /// Tables are normalized before validation, so an entry that trims to
    /// nothing is rejected rather than matching every event.
    pub fn with_config(config: ThreatEngineConfig) -> Result<Self, ConfigError> {
        let rules = config.rules.normalized();
        rules.validate()?;
        if rules != MatchRules::default() {
            info!(
                severities = rules.allowed_severities.len(),
                keywords = rules.hazard_keywords.len(),
                winter_synonyms = rules.winter_synonyms.len(),
                "Threat engine using custom matching tables"
            );
        }
        Ok(Self { rules })
    }

    pub fn rules(&self) -> &MatchRules {
        &self.rules
    }

    /// Run the full pipeline over already-decoded input.
    pub fn assess(&self, alerts: &[AlertRecord], risk_code: Option<RiskCode>) -> ThreatReport {
        let risk_category = translator::translate(risk_code);
        let classification = classifier::classify_with(alerts, &self.rules);
        let rule = resolver::select_rule(
            classification.has_active_warnings(),
            risk_category,
            classification.winter_status,
        );

        debug!(
            alerts = alerts.len(),
            general_alerts = classification.general_alerts.len(),
            active_warnings = classification.active_warnings.len(),
            risk_category = %risk_category,
            winter_status = %classification.winter_status,
            level = %rule.level(),
            ?rule,
            "Threat assessed"
        );

        ThreatReport {
            assessment: rule.assessment(),
            rule,
            risk_category,
            winter_status: classification.winter_status,
            general_alerts: classification.general_alerts,
            active_warnings: classification.active_warnings,
        }
    }

    /// Run the full pipeline over raw upstream JSON.
    ///
    /// Malformed feeds are treated as empty; see [`feed`].
    pub fn assess_feed(&self, alert_feed: &Value, risk: &Value) -> ThreatReport {
        let alerts = feed::alerts_from_value(alert_feed);
        let risk_code = feed::risk_code_from_value(risk);
        self.assess(&alerts, risk_code)
    }
}

impl Default for ThreatEngine {
    fn default() -> Self {
        Self::new()
    }
}
