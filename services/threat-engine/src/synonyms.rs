//! Fixed matching tables
//!
//! Lower-case phrase tables used by the alert classifier. Every entry is
//! matched as a case-insensitive substring of the full event name.

/// Event-name keywords that make an alert a recognized hazard alert
pub const HAZARD_KEYWORDS: &[&str] = &["warning", "watch", "advisory"];

/// Severities accepted for recognized hazard alerts
pub const ALLOWED_SEVERITIES: &[&str] = &["severe", "moderate", "minor"];

/// Canonical winter-hazard event phrases
pub const WINTER_SYNONYMS: &[&str] = &[
    // Advisories
    "winter weather advisory",
    "freezing rain advisory",
    "snow advisory",
    "wind chill advisory",
    "frost advisory",
    "lake effect snow advisory",
    "winter weather statement",
    // Warnings
    "winter storm warning",
    "winter weather warning",
    "ice storm warning",
    "blizzard warning",
    "wind chill warning",
    "freeze warning",
    "freezing rain warning",
    "snow squall warning",
    "lake effect snow warning",
    "extreme cold warning",
    "hard freeze warning",
    // Watches
    "winter storm watch",
    "ice storm watch",
    "blizzard watch",
    "wind chill watch",
    "extreme cold watch",
    "freeze watch",
    "freezing rain watch",
    "lake effect snow watch",
];

/// Case-insensitive containment of any of `needles` in an already
/// lower-cased haystack. Needles are lower-cased here, so callers may pass
/// tables in any case.
pub(crate) fn contains_any<S: AsRef<str>>(haystack_lower: &str, needles: &[S]) -> bool {
    needles
        .iter()
        .any(|needle| haystack_lower.contains(needle.as_ref().to_lowercase().as_str()))
}
