//! Gateway types — actions, the normalized envelope, and errors.
//!
//! The backend payload is schema-less, so a successful response is kept as
//! an open [`Payload`] mapping. Typed reading happens later in `views`.

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

/// Open mapping returned by the backend on success.
pub type Payload = Map<String, Value>;

// =============================================================================
// ACTION
// =============================================================================

/// Workflow selector sent as the `action` field of every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Pre-market context: regime, sentiment, dominance.
    Quant,
    /// Narrative radar: trending sectors and their velocity.
    Narrative,
    /// Fundamental and tokenomics audit of one asset. Requires a query.
    DeepDive,
}

impl Action {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Quant => "quant",
            Self::Narrative => "narrative",
            Self::DeepDive => "deep_dive",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced while configuring or calling the webhook.
///
/// Configuration variants are fatal at startup. The rest are folded into an
/// [`Envelope::Error`] and their `Display` text is what the user sees.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The webhook URL environment variable is absent or blank.
    #[error("missing webhook URL: env var {var} not set")]
    MissingEndpoint { var: String },

    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The request was rejected locally before dispatch.
    #[error("Query Error: {0}")]
    InvalidQuery(String),

    /// DNS, connect, timeout, or an unreadable/malformed response body.
    #[error("Connection Error: {0}")]
    Connection(String),

    /// The webhook answered with something other than 200.
    #[error("HTTP Status: {status}")]
    Status { status: u16 },
}

impl GatewayError {
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingEndpoint { .. } => "E_MISSING_ENDPOINT",
            Self::ConfigParse(_) => "E_CONFIG_PARSE",
            Self::HttpClientBuild(_) => "E_HTTP_CLIENT_BUILD",
            Self::InvalidQuery(_) => "E_INVALID_QUERY",
            Self::Connection(_) => "E_CONNECTION",
            Self::Status { .. } => "E_HTTP_STATUS",
        }
    }

    /// `true` for errors that can only happen before the first request.
    #[must_use]
    pub fn is_config(&self) -> bool {
        matches!(self, Self::MissingEndpoint { .. } | Self::ConfigParse(_) | Self::HttpClientBuild(_))
    }
}

// =============================================================================
// ENVELOPE
// =============================================================================

/// Message shown when the backend sets `error` to something without text.
pub const UNSPECIFIED_BACKEND_ERROR: &str = "Backend reported an unspecified error";

/// Normalized result of one webhook call: a payload or an error message.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    /// Verbatim JSON object returned with HTTP 200.
    Payload(Payload),
    /// Locally synthesized error (transport, status, or query).
    Error(String),
}

impl Envelope {
    /// The error message to show, if any.
    ///
    /// A payload carrying its own `error` key counts as an error: the remote
    /// workflow reports failures that way with a 200 status.
    #[must_use]
    pub fn error(&self) -> Option<String> {
        match self {
            Self::Error(message) => Some(message.clone()),
            Self::Payload(payload) => payload.get("error").map(|value| match value {
                Value::String(s) => s.clone(),
                Value::Null => UNSPECIFIED_BACKEND_ERROR.to_string(),
                other => other.to_string(),
            }),
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        match self {
            Self::Error(_) => true,
            Self::Payload(payload) => payload.contains_key("error"),
        }
    }

    /// The success payload, when there is no error to show.
    #[must_use]
    pub fn payload(&self) -> Option<&Payload> {
        match self {
            Self::Payload(payload) if !payload.contains_key("error") => Some(payload),
            _ => None,
        }
    }

    /// Wire shape handed to presenters: the payload, or `{"error": msg}`.
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Self::Payload(payload) => Value::Object(payload.clone()),
            Self::Error(message) => serde_json::json!({ "error": message }),
        }
    }
}

impl From<GatewayError> for Envelope {
    fn from(err: GatewayError) -> Self {
        Self::Error(err.to_string())
    }
}

// =============================================================================
// MARKET INTEL TRAIT
// =============================================================================

/// The three backend actions. Enables mocking the gateway in tests.
///
/// Implementations never fail: every problem comes back as an error
/// [`Envelope`].
#[async_trait::async_trait]
pub trait MarketIntel: Send + Sync {
    /// Send `{"action": "quant"}`.
    async fn fetch_quant_context(&self) -> Envelope;

    /// Send `{"action": "narrative"}`.
    async fn fetch_narrative_trends(&self) -> Envelope;

    /// Send `{"action": "deep_dive", "query": query}`.
    ///
    /// A blank query is rejected without touching the network.
    async fn fetch_deep_dive(&self, query: &str) -> Envelope;
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
