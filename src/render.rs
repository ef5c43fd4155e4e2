//! Plain-text rendering of envelopes for the terminal.
//!
//! Error envelopes render as one inline `error:` line; nothing here
//! panics on a partial payload.

use crate::dashboard::MarketSnapshot;
use crate::gateway::Envelope;
use crate::views::{DeepDiveView, NarrativeView, QuantView, RiskSeverity, Velocity};

const BAR_WIDTH: u32 = 10;

#[must_use]
pub fn render_snapshot(snapshot: &MarketSnapshot) -> String {
    format!("{}\n\n{}", render_quant(&snapshot.quant), render_narrative(&snapshot.narrative))
}

#[must_use]
pub fn render_quant(envelope: &Envelope) -> String {
    let mut lines = vec!["== Pre-Market Context ==".to_string()];
    match envelope.payload() {
        None => lines.push(error_line(envelope)),
        Some(payload) => {
            let view = QuantView::from_payload(payload);
            lines.push(format!("Market Regime:  {}", view.regime));
            lines.push(format!("Fear & Greed:   {} ({})", view.sentiment_display(), view.sentiment_label));
            lines.push(format!("BTC Dominance:  {}", view.btc_dominance_trend));
            lines.push(format!("Analyst Note:   {}", view.analysis_summary));
        }
    }
    lines.join("\n")
}

#[must_use]
pub fn render_narrative(envelope: &Envelope) -> String {
    let mut lines = vec!["== Narrative & Trends ==".to_string()];
    let Some(payload) = envelope.payload() else {
        lines.push(error_line(envelope));
        return lines.join("\n");
    };

    let view = NarrativeView::from_payload(payload);
    if view.is_empty() {
        lines.push("No narrative data available.".into());
    }
    for item in &view.narratives {
        let badge = match item.velocity_tone() {
            Velocity::Hot => "[HOT]",
            Velocity::Rising => "[UP] ",
            Velocity::Neutral => "[--] ",
        };
        lines.push(format!("{badge} {} ({})", item.name, item.velocity));
        lines.push(format!(
            "      Phase: {} {}",
            item.maturity,
            progress_bar(f64::from(item.maturity_progress()) / 100.0)
        ));
        lines.push(format!("      {}", item.insight));
    }
    lines.join("\n")
}

#[must_use]
pub fn render_deep_dive(envelope: &Envelope, query: &str) -> String {
    let Some(payload) = envelope.payload() else {
        return format!("== Deep Dive: {query} ==\n{}", error_line(envelope));
    };

    let view = DeepDiveView::from_payload(payload, query);
    let risk_marker = match view.risk_severity() {
        RiskSeverity::Elevated => " (!)",
        RiskSeverity::Normal => "",
    };
    let unlock_marker = if view.tokenomics.unlock_alert() { "(!) " } else { "" };

    let mut lines = vec![
        format!("== Audit Report: {} ==", view.project_name),
        format!("Fundamental Score:  {} {}", view.score_display(), progress_bar(view.score_fraction())),
        format!("Supply Risk Level:  {}{risk_marker}", view.risk_level),
        format!("Verdict:            {}", view.verdict),
        String::new(),
        "-- Tokenomics & Supply --".into(),
        format!("Inflation / Emission:  {}", view.tokenomics.inflation_status),
        format!("Unlock Schedule:       {unlock_marker}{}", view.tokenomics.unlock_warning),
        format!("FDV vs Market Cap:     {}", view.tokenomics.fdv_analysis),
        String::new(),
        "-- Strengths --".into(),
    ];
    lines.extend(bullets(&view.pros));
    lines.push("-- Risks --".into());
    lines.extend(bullets(&view.cons));
    lines.push(String::new());
    lines.push("-- Scenarios (6-12 months) --".into());
    for (label, scenario) in [
        ("Bull", &view.scenarios.bull),
        ("Base", &view.scenarios.base),
        ("Bear", &view.scenarios.bear),
    ] {
        lines.push(format!("{label}: {}  if {}", scenario.target, scenario.condition));
    }
    lines.join("\n")
}

fn error_line(envelope: &Envelope) -> String {
    format!("error: {}", envelope.error().unwrap_or_default())
}

fn bullets(items: &[String]) -> Vec<String> {
    if items.is_empty() {
        return vec!["  (none)".into()];
    }
    items.iter().map(|item| format!("  - {item}")).collect()
}

fn progress_bar(fraction: f64) -> String {
    let width = f64::from(BAR_WIDTH);
    let cells: String = (0..BAR_WIDTH)
        .map(|i| if (f64::from(i) + 0.5) / width <= fraction { '#' } else { '.' })
        .collect();
    format!("[{cells}]")
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
