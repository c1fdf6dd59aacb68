//! Categorical storm-risk types
//!
//! The upstream outlook delivers a small integer per forecast area. The
//! engine translates it into one of the symbolic categories below, with
//! `NONE` standing in for "no code" and "unrecognized code" alike.

use crate::errors::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Integer categorical risk code as delivered by the outlook source
///
/// Any integer is representable; only a handful are meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RiskCode(i64);

impl RiskCode {
    pub fn new(code: i64) -> Self {
        Self(code)
    }

    /// Get the raw integer code
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for RiskCode {
    fn from(code: i64) -> Self {
        Self(code)
    }
}

impl fmt::Display for RiskCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Symbolic risk category, ordered by increasing severe-weather risk
///
/// `NONE` is the explicit unmatched variant: it is produced when no code
/// was supplied or the code is outside the known table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskCategory {
    /// No code, or an unrecognized one
    #[default]
    NONE,
    /// General thunderstorms
    TSTM,
    /// Marginal
    MRGL,
    /// Slight
    SLGT,
    /// Enhanced
    ENH,
    /// Moderate
    MDT,
    /// High
    HIGH,
}

impl RiskCategory {
    /// All categories in ascending order of risk
    pub const ALL: [RiskCategory; 7] = [
        RiskCategory::NONE,
        RiskCategory::TSTM,
        RiskCategory::MRGL,
        RiskCategory::SLGT,
        RiskCategory::ENH,
        RiskCategory::MDT,
        RiskCategory::HIGH,
    ];

    /// Short symbol used on the wire and in the dashboard
    pub fn symbol(&self) -> &'static str {
        match self {
            RiskCategory::NONE => "NONE",
            RiskCategory::TSTM => "TSTM",
            RiskCategory::MRGL => "MRGL",
            RiskCategory::SLGT => "SLGT",
            RiskCategory::ENH => "ENH",
            RiskCategory::MDT => "MDT",
            RiskCategory::HIGH => "HIGH",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            RiskCategory::NONE => "No Risk",
            RiskCategory::TSTM => "General Thunderstorms",
            RiskCategory::MRGL => "Marginal",
            RiskCategory::SLGT => "Slight",
            RiskCategory::ENH => "Enhanced",
            RiskCategory::MDT => "Moderate",
            RiskCategory::HIGH => "High",
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, RiskCategory::NONE)
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for RiskCategory {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(RiskCategory::NONE);
        }

        RiskCategory::ALL
            .iter()
            .copied()
            .find(|category| category.symbol().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseError::UnknownRiskCategory(trimmed.to_string()))
    }
}
