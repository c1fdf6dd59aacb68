//! Upstream feed adapter
//!
//! Turns the JSON delivered by the alert and outlook sources into engine
//! input. Nothing here fails: missing keys, wrong shapes and unparseable
//! text all degrade to "no alerts" or "no risk code".

use serde_json::Value;
use tracing::{debug, warn};
use types::alert::AlertRecord;
use types::risk::RiskCode;

/// Extract alert records from an alert feed.
///
/// Accepts `{"features": [...]}` or a bare feature array. Features without
/// a `properties.event` string are skipped.
pub fn alerts_from_value(feed: &Value) -> Vec<AlertRecord> {
    let features = match feed {
        Value::Array(items) => items.as_slice(),
        Value::Object(map) => match map.get("features") {
            Some(Value::Array(items)) => items.as_slice(),
            Some(other) => {
                debug!(kind = value_kind(other), "Alert feed features is not an array");
                return Vec::new();
            }
            None => {
                debug!("Alert feed has no features");
                return Vec::new();
            }
        },
        other => {
            debug!(kind = value_kind(other), "Alert feed has unexpected shape");
            return Vec::new();
        }
    };

    features
        .iter()
        .enumerate()
        .filter_map(|(index, feature)| {
            let alert = alert_from_feature(feature);
            if alert.is_none() {
                debug!(index, "Skipping malformed alert feature");
            }
            alert
        })
        .collect()
}

/// Parse alert feed text; invalid JSON yields no alerts.
pub fn alerts_from_str(text: &str) -> Vec<AlertRecord> {
    match serde_json::from_str::<Value>(text) {
        Ok(feed) => alerts_from_value(&feed),
        Err(err) => {
            warn!(error = %err, "Alert feed is not valid JSON");
            Vec::new()
        }
    }
}

fn alert_from_feature(feature: &Value) -> Option<AlertRecord> {
    let properties = feature.get("properties")?.as_object()?;
    let event = properties.get("event")?.as_str()?;
    let severity = properties
        .get("severity")
        .and_then(Value::as_str)
        .unwrap_or_default();

    let mut alert = AlertRecord::new(event, severity);
    if let Some(headline) = properties.get("headline").and_then(Value::as_str) {
        alert = alert.with_headline(headline);
    }
    if let Some(area) = properties.get("areaDesc").and_then(Value::as_str) {
        alert = alert.with_area_desc(area);
    }
    Some(alert)
}

/// Extract a risk code from the outlook source.
///
/// Accepts an integer, an integral float, an integer string, or an object
/// carrying `DN` directly or under `properties`. Anything else is `None`.
pub fn risk_code_from_value(value: &Value) -> Option<RiskCode> {
    match value {
        Value::Number(number) => {
            if let Some(code) = number.as_i64() {
                return Some(RiskCode::new(code));
            }
            let float = number.as_f64()?;
            let integral = float.fract() == 0.0 && float.abs() <= i64::MAX as f64;
            integral.then(|| RiskCode::new(float as i64))
        }
        Value::String(text) => text.trim().parse::<i64>().ok().map(RiskCode::new),
        Value::Object(map) => {
            let dn = map
                .get("DN")
                .or_else(|| map.get("properties").and_then(|p| p.get("DN")))?;
            match dn {
                Value::Object(_) => None,
                inner => risk_code_from_value(inner),
            }
        }
        Value::Null | Value::Bool(_) | Value::Array(_) => None,
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
