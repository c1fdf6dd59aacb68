//! Threat levels and assessments
//!
//! The engine's final output: a four-way threat level plus free-text
//! description, and the winter-weather status derived from the alerts.

use crate::errors::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Threat level in increasing order of urgency
///
/// `SAFE < MONITOR < CAUTION < WARNING`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ThreatLevel {
    /// No severe weather expected
    SAFE,
    /// Conditions worth watching
    MONITOR,
    /// Elevated severe weather risk
    CAUTION,
    /// Warnings in effect
    WARNING,
}

impl ThreatLevel {
    pub const ALL: [ThreatLevel; 4] = [
        ThreatLevel::SAFE,
        ThreatLevel::MONITOR,
        ThreatLevel::CAUTION,
        ThreatLevel::WARNING,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThreatLevel::SAFE => "SAFE",
            ThreatLevel::MONITOR => "MONITOR",
            ThreatLevel::CAUTION => "CAUTION",
            ThreatLevel::WARNING => "WARNING",
        }
    }
}

impl fmt::Display for ThreatLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThreatLevel {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ThreatLevel::ALL
            .iter()
            .copied()
            .find(|level| level.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseError::UnknownThreatLevel(trimmed.to_string()))
    }
}

/// Winter-weather status derived from the active alerts
///
/// Recomputed on every classification call, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WinterStatus {
    /// No winter-relevant alert
    #[default]
    NONE,
    /// At least one winter advisory, watch or statement
    ADVISORY,
    /// At least one winter warning
    WARNING,
}

impl WinterStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WinterStatus::NONE => "none",
            WinterStatus::ADVISORY => "advisory",
            WinterStatus::WARNING => "warning",
        }
    }
}

impl fmt::Display for WinterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WinterStatus {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Ok(WinterStatus::NONE),
            "advisory" => Ok(WinterStatus::ADVISORY),
            "warning" => Ok(WinterStatus::WARNING),
            other => Err(ParseError::UnknownWinterStatus(other.to_string())),
        }
    }
}

/// Final threat assessment handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThreatAssessment {
    pub level: ThreatLevel,
    pub description: String,
}

impl ThreatAssessment {
    pub fn new(level: ThreatLevel, description: impl Into<String>) -> Self {
        Self {
            level,
            description: description.into(),
        }
    }
}
