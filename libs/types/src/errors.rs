//! Error types for the threat engine
//!
//! Classification never fails; these errors cover parsing symbolic values
//! from text and loading engine configuration.

use thiserror::Error;

/// Errors parsing symbolic values from text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown risk category: {0}")]
    UnknownRiskCategory(String),

    #[error("Unknown threat level: {0}")]
    UnknownThreatLevel(String),

    #[error("Unknown winter status: {0}")]
    UnknownWinterStatus(String),
}

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid config JSON: {0}")]
    InvalidJson(String),

    #[error("Config table {table} must not be empty")]
    EmptyTable { table: String },

    #[error("Config table {table} contains a blank entry")]
    BlankEntry { table: String },

    #[error("Unknown config key: {key}")]
    UnknownKey { key: String },
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::InvalidJson(err.to_string())
    }
}
