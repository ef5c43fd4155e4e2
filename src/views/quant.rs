//! Pre-market context: regime, fear & greed, BTC dominance.

use super::{PLACEHOLDER, text_or};
use crate::gateway::Payload;

pub const NO_SUMMARY: &str = "No summary.";

#[derive(Debug, Clone, PartialEq)]
pub struct QuantView {
    pub regime: String,
    /// Fear & greed index as sent, normally 0–100.
    pub sentiment_score: String,
    pub sentiment_label: String,
    pub btc_dominance_trend: String,
    pub analysis_summary: String,
}

impl QuantView {
    #[must_use]
    pub fn from_payload(payload: &Payload) -> Self {
        Self {
            regime: text_or(payload, "regime", PLACEHOLDER),
            sentiment_score: text_or(payload, "sentiment_score", "0"),
            sentiment_label: text_or(payload, "sentiment_label", PLACEHOLDER),
            btc_dominance_trend: text_or(payload, "btc_dominance_trend", PLACEHOLDER),
            analysis_summary: text_or(payload, "analysis_summary", NO_SUMMARY),
        }
    }

    /// e.g. `72/100`.
    #[must_use]
    pub fn sentiment_display(&self) -> String {
        format!("{}/100", self.sentiment_score)
    }
}

#[cfg(test)]
#[path = "quant_test.rs"]
mod tests;
