//! Threat level resolution
//!
//! Combines the active-warning flag, the risk category and the winter
//! status into one assessment. The rule order below is the whole policy;
//! the first rule that applies wins.

use serde::{Deserialize, Serialize};
use types::risk::RiskCategory;
use types::threat::{ThreatAssessment, ThreatLevel, WinterStatus};

pub const WINTER_WARNING_DESCRIPTION: &str = "Winter Precipitation Imminent and/or Occurring";
pub const ACTIVE_WARNINGS_DESCRIPTION: &str = "Active weather warnings in effect";
pub const WINTER_ADVISORY_DESCRIPTION: &str = "Monitor for Winter Conditions";
pub const ELEVATED_RISK_DESCRIPTION: &str = "Elevated severe weather risk";
pub const LOW_RISK_DESCRIPTION: &str = "Monitor conditions";
pub const NO_THREAT_DESCRIPTION: &str = "No severe weather expected";

/// The rule that produced an assessment, in precedence order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreatRule {
    /// Active warnings with a winter warning
    WinterWarning,
    /// Active warnings, no winter warning
    ActiveWarnings,
    /// Winter advisory, regardless of risk category
    WinterAdvisory,
    /// ENH, MDT or HIGH risk
    ElevatedRisk,
    /// MRGL or SLGT risk
    LowRisk,
    /// Nothing applies
    NoThreat,
}

impl ThreatRule {
    pub fn level(&self) -> ThreatLevel {
        match self {
            ThreatRule::WinterWarning | ThreatRule::ActiveWarnings => ThreatLevel::WARNING,
            ThreatRule::ElevatedRisk => ThreatLevel::CAUTION,
            ThreatRule::WinterAdvisory | ThreatRule::LowRisk => ThreatLevel::MONITOR,
            ThreatRule::NoThreat => ThreatLevel::SAFE,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ThreatRule::WinterWarning => WINTER_WARNING_DESCRIPTION,
            ThreatRule::ActiveWarnings => ACTIVE_WARNINGS_DESCRIPTION,
            ThreatRule::WinterAdvisory => WINTER_ADVISORY_DESCRIPTION,
            ThreatRule::ElevatedRisk => ELEVATED_RISK_DESCRIPTION,
            ThreatRule::LowRisk => LOW_RISK_DESCRIPTION,
            ThreatRule::NoThreat => NO_THREAT_DESCRIPTION,
        }
    }

    pub fn assessment(&self) -> ThreatAssessment {
        ThreatAssessment::new(self.level(), self.description())
    }
}

/// Select the first applicable rule.
///
/// 1. warnings + winter warning
/// 2. warnings
/// 3. winter advisory (beats any risk category)
/// 4. ENH / MDT / HIGH
/// 5. MRGL / SLGT
/// 6. otherwise
pub fn select_rule(
    has_active_warnings: bool,
    risk_category: RiskCategory,
    winter_status: WinterStatus,
) -> ThreatRule {
    match (has_active_warnings, winter_status, risk_category) {
        (true, WinterStatus::WARNING, _) => ThreatRule::WinterWarning,
        (true, _, _) => ThreatRule::ActiveWarnings,
        (false, WinterStatus::ADVISORY, _) => ThreatRule::WinterAdvisory,
        (false, _, RiskCategory::ENH | RiskCategory::MDT | RiskCategory::HIGH) => {
            ThreatRule::ElevatedRisk
        }
        (false, _, RiskCategory::MRGL | RiskCategory::SLGT) => ThreatRule::LowRisk,
        (false, _, RiskCategory::TSTM | RiskCategory::NONE) => ThreatRule::NoThreat,
    }
}

/// Resolve the final threat assessment.
pub fn resolve(
    has_active_warnings: bool,
    risk_category: RiskCategory,
    winter_status: WinterStatus,
) -> ThreatAssessment {
    select_rule(has_active_warnings, risk_category, winter_status).assessment()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn any_category() -> impl Strategy<Value = RiskCategory> {
        proptest::sample::select(RiskCategory::ALL.to_vec())
    }

    fn any_winter() -> impl Strategy<Value = WinterStatus> {
        proptest::sample::select(vec![
            WinterStatus::NONE,
            WinterStatus::ADVISORY,
            WinterStatus::WARNING,
        ])
    }

    #[test]
    fn test_warnings_override_risk() {
        let result = resolve(true, RiskCategory::HIGH, WinterStatus::NONE);
        assert_eq!(result.level, ThreatLevel::WARNING);
        assert_eq!(result.description, ACTIVE_WARNINGS_DESCRIPTION);
    }

    #[test]
    fn test_warnings_with_winter_advisory_stay_general() {
        let result = resolve(true, RiskCategory::NONE, WinterStatus::ADVISORY);
        assert_eq!(result.level, ThreatLevel::WARNING);
        assert_eq!(result.description, ACTIVE_WARNINGS_DESCRIPTION);
    }

    #[test]
    fn test_risk_categories() {
        let cases = [
            (RiskCategory::ENH, ThreatLevel::CAUTION),
            (RiskCategory::MDT, ThreatLevel::CAUTION),
            (RiskCategory::HIGH, ThreatLevel::CAUTION),
            (RiskCategory::MRGL, ThreatLevel::MONITOR),
            (RiskCategory::SLGT, ThreatLevel::MONITOR),
            (RiskCategory::TSTM, ThreatLevel::SAFE),
            (RiskCategory::NONE, ThreatLevel::SAFE),
        ];
        for (category, expected) in cases {
            let result = resolve(false, category, WinterStatus::NONE);
            assert_eq!(result.level, expected, "{category}");
        }
    }

    #[test]
    fn test_winter_advisory_beats_high_risk() {
        let result = resolve(false, RiskCategory::HIGH, WinterStatus::ADVISORY);
        assert_eq!(
            result,
            ThreatAssessment::new(ThreatLevel::MONITOR, WINTER_ADVISORY_DESCRIPTION)
        );
    }

    #[test]
    fn test_winter_warning_without_general_warnings_falls_through() {
        let result = resolve(false, RiskCategory::SLGT, WinterStatus::WARNING);
        assert_eq!(result.level, ThreatLevel::MONITOR);
        assert_eq!(result.description, LOW_RISK_DESCRIPTION);
    }

    #[test]
    fn test_nothing_is_safe() {
        let result = resolve(false, RiskCategory::NONE, WinterStatus::NONE);
        assert_eq!(
            result,
            ThreatAssessment::new(ThreatLevel::SAFE, NO_THREAT_DESCRIPTION)
        );
    }

    proptest! {
        #[test]
        fn prop_winter_warning_dominates(category in any_category()) {
            let result = resolve(true, category, WinterStatus::WARNING);
            prop_assert_eq!(result.level, ThreatLevel::WARNING);
            prop_assert_eq!(result.description, WINTER_WARNING_DESCRIPTION);
        }

        #[test]
        fn prop_winter_advisory_monitors(category in any_category()) {
            let result = resolve(false, category, WinterStatus::ADVISORY);
            prop_assert_eq!(result.level, ThreatLevel::MONITOR);
            prop_assert_eq!(result.description, WINTER_ADVISORY_DESCRIPTION);
        }

        #[test]
        fn prop_warnings_never_below_warning(category in any_category(), winter in any_winter()) {
            prop_assert_eq!(resolve(true, category, winter).level, ThreatLevel::WARNING);
            prop_assert!(resolve(false, category, winter).level < ThreatLevel::WARNING);
        }
    }
}
