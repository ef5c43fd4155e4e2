//! Views — typed, default-filling readers over the backend payload.
//!
//! DESIGN
//! ======
//! The backend schema is owned by the n8n workflow and changes without
//! notice, so payloads stay an open mapping and every field is read through
//! the helpers below. A missing or mistyped field falls back to a display
//! default ('-', 0, empty list) instead of failing the whole view.
//!
//! | helper            | accepts                              | fallback        |
//! |-------------------|--------------------------------------|-----------------|
//! | `text_or`         | string, number, bool                 | given default   |
//! | `number_or`       | number, numeric string               | given default   |
//! | `string_list`     | array of scalars                     | empty list      |
//! | `object_or_empty` | object                               | empty mapping   |
//! | `object_list`     | array (non-object items skipped)     | empty list      |

pub mod deep_dive;
pub mod narrative;
pub mod quant;

pub use deep_dive::{DeepDiveView, RiskSeverity, Scenario, ScenarioMatrix, Tokenomics};
pub use narrative::{Narrative, NarrativeView, Velocity};
pub use quant::QuantView;

use serde_json::Value;

use crate::gateway::Payload;

/// Display placeholder for missing text.
pub const PLACEHOLDER: &str = "-";

#[must_use]
pub fn text_or(payload: &Payload, key: &str, default: &str) -> String {
    payload
        .get(key)
        .and_then(scalar_text)
        .unwrap_or_else(|| default.to_string())
}

#[must_use]
pub fn number_or(payload: &Payload, key: &str, default: f64) -> f64 {
    let number = match payload.get(key) {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|n| n.is_finite()).unwrap_or(default)
}

#[must_use]
pub fn string_list(payload: &Payload, key: &str) -> Vec<String> {
    payload
        .get(key)
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(scalar_text).collect())
        .unwrap_or_default()
}

#[must_use]
pub fn object_or_empty(payload: &Payload, key: &str) -> Payload {
    payload
        .get(key)
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default()
}

#[must_use]
pub fn object_list(payload: &Payload, key: &str) -> Vec<Payload> {
    payload
        .get(key)
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Value::as_object).cloned().collect())
        .unwrap_or_default()
}

/// Render a number without a trailing `.0` when it is integral.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.fract().abs() < f64::EPSILON && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
