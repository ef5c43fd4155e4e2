//! Deep dive — fundamental, tokenomics, and scenario audit of one asset.
//!
//! Besides reading fields, this view carries the few formatting decisions
//! the dashboard makes from free text: risk severity, unlock alerts, and
//! the score bar.

use super::{PLACEHOLDER, format_number, number_or, object_or_empty, string_list, text_or};
use crate::gateway::Payload;

pub const UNKNOWN_RISK: &str = "Unknown";
pub const MAX_SCORE: f64 = 10.0;

// The workflow writes unlock warnings in Indonesian: "danger", "large".
const UNLOCK_DANGER_MARKER: &str = "Bahaya";
const UNLOCK_LARGE_MARKER: &str = "besar";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskSeverity {
    Normal,
    /// Risk label mentions "High" or "Extreme".
    Elevated,
}

impl RiskSeverity {
    #[must_use]
    pub fn classify(label: &str) -> Self {
        if label.contains("High") || label.contains("Extreme") {
            Self::Elevated
        } else {
            Self::Normal
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tokenomics {
    pub inflation_status: String,
    pub unlock_warning: String,
    pub fdv_analysis: String,
}

impl Tokenomics {
    #[must_use]
    pub fn from_payload(audit: &Payload) -> Self {
        Self {
            inflation_status: text_or(audit, "inflation_status", PLACEHOLDER),
            unlock_warning: text_or(audit, "unlock_warning", PLACEHOLDER),
            fdv_analysis: text_or(audit, "fdv_analysis", PLACEHOLDER),
        }
    }

    /// Whether the unlock schedule should be shown as an alert.
    #[must_use]
    pub fn unlock_alert(&self) -> bool {
        self.unlock_warning.contains(UNLOCK_DANGER_MARKER)
            || self.unlock_warning.to_lowercase().contains(UNLOCK_LARGE_MARKER)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub target: String,
    pub condition: String,
}

impl Scenario {
    #[must_use]
    pub fn from_payload(case: &Payload) -> Self {
        Self {
            target: text_or(case, "target", PLACEHOLDER),
            condition: text_or(case, "condition", PLACEHOLDER),
        }
    }
}

/// 6–12 month projections.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioMatrix {
    pub bull: Scenario,
    pub base: Scenario,
    pub bear: Scenario,
}

impl ScenarioMatrix {
    #[must_use]
    pub fn from_payload(analysis: &Payload) -> Self {
        Self {
            bull: Scenario::from_payload(&object_or_empty(analysis, "bull_case")),
            base: Scenario::from_payload(&object_or_empty(analysis, "base_case")),
            bear: Scenario::from_payload(&object_or_empty(analysis, "bear_case")),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeepDiveView {
    pub project_name: String,
    /// Fundamental score out of [`MAX_SCORE`], as sent.
    pub score: String,
    /// Numeric reading of `score` for the bar; 0 when not a number.
    pub score_value: f64,
    pub risk_level: String,
    pub verdict: String,
    pub tokenomics: Tokenomics,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub scenarios: ScenarioMatrix,
}

impl DeepDiveView {
    /// Read a deep-dive payload. `query` stands in for a missing project name.
    #[must_use]
    pub fn from_payload(payload: &Payload, query: &str) -> Self {
        Self {
            project_name: text_or(payload, "project_name", query),
            score: text_or(payload, "score", "0"),
            score_value: number_or(payload, "score", 0.0),
            risk_level: text_or(payload, "risk_level", UNKNOWN_RISK),
            verdict: text_or(payload, "verdict", PLACEHOLDER),
            tokenomics: Tokenomics::from_payload(&object_or_empty(payload, "tokenomics_audit")),
            pros: string_list(payload, "pros"),
            cons: string_list(payload, "cons"),
            scenarios: ScenarioMatrix::from_payload(&object_or_empty(payload, "scenario_analysis")),
        }
    }

    #[must_use]
    pub fn risk_severity(&self) -> RiskSeverity {
        RiskSeverity::classify(&self.risk_level)
    }

    /// Score bar fill, clamped to `0.0..=1.0`.
    #[must_use]
    pub fn score_fraction(&self) -> f64 {
        (self.score_value / MAX_SCORE).clamp(0.0, 1.0)
    }

    /// e.g. `8/10`.
    #[must_use]
    pub fn score_display(&self) -> String {
        format!("{}/{}", self.score, format_number(MAX_SCORE))
    }
}

#[cfg(test)]
#[path = "deep_dive_test.rs"]
mod tests;
