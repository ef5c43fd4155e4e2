use super::*;
use serde_json::json;

fn payload(value: serde_json::Value) -> Payload {
    value.as_object().cloned().unwrap()
}

fn full_report() -> Payload {
    payload(json!({
        "project_name": "Solana",
        "score": 8,
        "risk_level": "Medium",
        "verdict": "Strong L1 with sticky users.",
        "tokenomics_audit": {
            "inflation_status": "~5% annual, declining",
            "unlock_warning": "No major unlocks in 6 months",
            "fdv_analysis": "FDV close to market cap"
        },
        "pros": ["Throughput", "Developer traction"],
        "cons": ["Validator concentration"],
        "scenario_analysis": {
            "bull_case": { "target": "$350", "condition": "ETF approval" },
            "base_case": { "target": "$200", "condition": "Steady growth" },
            "bear_case": { "target": "$90", "condition": "Network outage" }
        }
    }))
}

#[test]
fn reads_full_report() {
    let view = DeepDiveView::from_payload(&full_report(), "sol");
    assert_eq!(view.project_name, "Solana");
    assert_eq!(view.score_display(), "8/10");
    assert!((view.score_fraction() - 0.8).abs() < 1e-9);
    assert_eq!(view.risk_level, "Medium");
    assert_eq!(view.risk_severity(), RiskSeverity::Normal);
    assert_eq!(view.verdict, "Strong L1 with sticky users.");
    assert_eq!(view.tokenomics.fdv_analysis, "FDV close to market cap");
    assert!(!view.tokenomics.unlock_alert());
    assert_eq!(view.pros, vec!["Throughput", "Developer traction"]);
    assert_eq!(view.cons, vec!["Validator concentration"]);
    assert_eq!(view.scenarios.bull, Scenario { target: "$350".into(), condition: "ETF approval".into() });
    assert_eq!(view.scenarios.bear.target, "$90");
}

#[test]
fn empty_payload_uses_defaults() {
    let view = DeepDiveView::from_payload(&Payload::new(), "Bitcoin");
    assert_eq!(view.project_name, "Bitcoin");
    assert_eq!(view.score, "0");
    assert!(view.score_value.abs() < f64::EPSILON);
    assert_eq!(view.risk_level, UNKNOWN_RISK);
    assert_eq!(view.verdict, "-");
    assert_eq!(view.tokenomics.inflation_status, "-");
    assert!(view.pros.is_empty());
    assert!(view.cons.is_empty());
    let dash = Scenario { target: "-".into(), condition: "-".into() };
    assert_eq!(view.scenarios, ScenarioMatrix { bull: dash.clone(), base: dash.clone(), bear: dash });
}

#[test]
fn partial_scenarios_default_per_field() {
    let view = DeepDiveView::from_payload(
        &payload(json!({ "scenario_analysis": { "base_case": { "target": "$1" } } })),
        "x",
    );
    assert_eq!(view.scenarios.base.target, "$1");
    assert_eq!(view.scenarios.base.condition, "-");
    assert_eq!(view.scenarios.bull.target, "-");
}

#[test]
fn risk_severity_classification() {
    assert_eq!(RiskSeverity::classify("High"), RiskSeverity::Elevated);
    assert_eq!(RiskSeverity::classify("Extreme (unlock cliff)"), RiskSeverity::Elevated);
    assert_eq!(RiskSeverity::classify("Low"), RiskSeverity::Normal);
    assert_eq!(RiskSeverity::classify(UNKNOWN_RISK), RiskSeverity::Normal);
}

#[test]
fn unlock_alert_markers() {
    let alert = |text: &str| Tokenomics {
        inflation_status: "-".into(),
        unlock_warning: text.into(),
        fdv_analysis: "-".into(),
    }
    .unlock_alert();
    assert!(alert("Bahaya: 20% supply unlock next month"));
    assert!(alert("Unlock BESAR minggu depan"));
    assert!(!alert("bahaya lowercase does not count"));
    assert!(!alert("No scheduled unlocks"));
}

#[test]
fn score_fraction_is_clamped() {
    let high = DeepDiveView::from_payload(&payload(json!({ "score": 14 })), "x");
    let low = DeepDiveView::from_payload(&payload(json!({ "score": -2 })), "x");
    assert!((high.score_fraction() - 1.0).abs() < f64::EPSILON);
    assert!(low.score_fraction().abs() < f64::EPSILON);
}

#[test]
fn string_score_is_parsed() {
    let view = DeepDiveView::from_payload(&payload(json!({ "score": "7.5" })), "x");
    assert_eq!(view.score_display(), "7.5/10");
}

#[test]
fn non_numeric_score_is_shown_as_sent() {
    let view = DeepDiveView::from_payload(&payload(json!({ "score": "N/A" })), "x");
    assert_eq!(view.score, "N/A");
    assert_eq!(view.score_display(), "N/A/10");
    assert!(view.score_fraction().abs() < f64::EPSILON);
}
