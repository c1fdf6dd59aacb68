//! Threat report
//!
//! Everything the presentation layer needs from one classification call.

use serde::{Deserialize, Serialize};
use types::alert::AlertRecord;
use types::risk::RiskCategory;
use types::threat::{ThreatAssessment, ThreatLevel, WinterStatus};

use crate::resolver::ThreatRule;

/// Output of one pass through the pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreatReport {
    pub assessment: ThreatAssessment,
    /// Rule that produced the assessment
    pub rule: ThreatRule,
    pub risk_category: RiskCategory,
    pub winter_status: WinterStatus,
    /// Recognized hazard alerts for display
    pub general_alerts: Vec<AlertRecord>,
    /// Pure warnings that drove the active-warning flag
    pub active_warnings: Vec<AlertRecord>,
}

impl ThreatReport {
    pub fn level(&self) -> ThreatLevel {
        self.assessment.level
    }

    pub fn description(&self) -> &str {
        &self.assessment.description
    }

    pub fn has_active_warnings(&self) -> bool {
        !self.active_warnings.is_empty()
    }
}
