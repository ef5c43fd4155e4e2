//! Dashboard flows — what each user trigger fetches.
//!
//! DESIGN
//! ======
//! "Sync market data" pulls the quant context and the narrative radar back
//! to back; "analyze coin" pulls one deep dive. Both go through
//! [`MarketIntel`] so they can be exercised without a network. Each
//! envelope fails independently: a broken narrative workflow still leaves
//! the quant section usable.

use serde_json::Value;
use tracing::info;

use crate::gateway::{Envelope, MarketIntel};

/// Result of one "sync market data" trigger.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketSnapshot {
    pub quant: Envelope,
    pub narrative: Envelope,
}

impl MarketSnapshot {
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.quant.is_error() || self.narrative.is_error()
    }

    /// `{"quant": ..., "narrative": ...}` in presenter wire shape.
    #[must_use]
    pub fn to_value(&self) -> Value {
        serde_json::json!({
            "quant": self.quant.to_value(),
            "narrative": self.narrative.to_value(),
        })
    }
}

/// Fetch quant context, then narrative trends.
pub async fn sync_market_data(intel: &dyn MarketIntel) -> MarketSnapshot {
    let quant = intel.fetch_quant_context().await;
    let narrative = intel.fetch_narrative_trends().await;

    info!(
        quant_ok = !quant.is_error(),
        narrative_ok = !narrative.is_error(),
        "dashboard: market data synced"
    );

    MarketSnapshot { quant, narrative }
}

/// Run a deep dive for one coin.
pub async fn analyze_coin(intel: &dyn MarketIntel, query: &str) -> Envelope {
    let envelope = intel.fetch_deep_dive(query).await;
    info!(query, ok = !envelope.is_error(), "dashboard: deep dive finished");
    envelope
}

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod tests;
