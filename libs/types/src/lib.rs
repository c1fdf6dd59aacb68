//! Types library for the severe-weather threat engine
//!
//! This library provides the data model shared by the classification
//! services: the categorical storm-risk code, the alert record, and the
//! threat levels handed to the presentation layer.
//!
//! All values are transient and immutable. They are created fresh for
//! every classification call and never persisted.
//!
//! # Modules
//! - `risk`: Categorical risk codes and risk categories
//! - `alert`: Weather alert records
//! - `threat`: Threat levels, assessments and winter status
//! - `errors`: Error taxonomy

pub mod risk;
pub mod alert;
pub mod threat;
pub mod errors;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::risk::*;
    pub use crate::alert::*;
    pub use crate::threat::*;
    pub use crate::errors::*;
}
