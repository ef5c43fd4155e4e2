//! Webhook client for the market-intelligence backend.
//!
//! Thin HTTP wrapper: one POST per call, no retries. Every failure is
//! folded into an error [`Envelope`]. Pure parsing in `parse_body` for
//! testability.

use std::time::{Duration, Instant};

use reqwest::Url;
use serde_json::Value;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::config::GatewayConfig;
use super::types::{Action, Envelope, GatewayError, MarketIntel, Payload};

const EXPECTED_STATUS: u16 = 200;

// =============================================================================
// CLIENT
// =============================================================================

pub struct GatewayClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl GatewayClient {
    /// Build a client bound to the configured webhook.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::HttpClientBuild`] if the HTTP client fails to
    /// initialize (e.g. TLS backend unavailable).
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| GatewayError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, endpoint: config.endpoint })
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn dispatch(&self, body: ActionRequest<'_>) -> Envelope {
        let request_id = Uuid::new_v4();
        let started = Instant::now();
        debug!(%request_id, action = %body.action, "gateway: sending");

        let result = self.send(&body).await;
        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        match result {
            Ok(payload) => {
                info!(%request_id, action = %body.action, elapsed_ms, keys = payload.len(), "gateway: ok");
                Envelope::Payload(payload)
            }
            Err(e) => {
                warn!(
                    %request_id,
                    action = %body.action,
                    elapsed_ms,
                    code = e.error_code(),
                    error = %e,
                    "gateway: request failed"
                );
                e.into()
            }
        }
    }

    async fn send(&self, body: &ActionRequest<'_>) -> Result<Payload, GatewayError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(body)
            .send()
            .await
            .map_err(|e| GatewayError::Connection(e.to_string()))?;

        let status = response.status().as_u16();
        if status != EXPECTED_STATUS {
            return Err(GatewayError::Status { status });
        }

        let text = response
            .text()
            .await
            .map_err(|e| GatewayError::Connection(e.to_string()))?;

        parse_body(&text)
    }
}

#[async_trait::async_trait]
impl MarketIntel for GatewayClient {
    async fn fetch_quant_context(&self) -> Envelope {
        self.dispatch(ActionRequest { action: Action::Quant, query: None })
            .await
    }

    async fn fetch_narrative_trends(&self) -> Envelope {
        self.dispatch(ActionRequest { action: Action::Narrative, query: None })
            .await
    }

    async fn fetch_deep_dive(&self, query: &str) -> Envelope {
        if query.trim().is_empty() {
            warn!(action = %Action::DeepDive, "gateway: blank query rejected before dispatch");
            return GatewayError::InvalidQuery("coin name must not be empty".into()).into();
        }
        self.dispatch(ActionRequest { action: Action::DeepDive, query: Some(query) })
            .await
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(serde::Serialize)]
struct ActionRequest<'a> {
    action: Action,
    #[serde(skip_serializing_if = "Option::is_none")]
    query: Option<&'a str>,
}

// =============================================================================
// PARSING
// =============================================================================

fn parse_body(text: &str) -> Result<Payload, GatewayError> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(payload)) => Ok(payload),
        Ok(other) => Err(GatewayError::Connection(format!(
            "malformed response body: expected a JSON object, got {}",
            json_kind(&other)
        ))),
        Err(e) => Err(GatewayError::Connection(format!("malformed response body: {e}"))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
