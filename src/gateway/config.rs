//! Gateway configuration parsed from environment variables.

use reqwest::Url;

use super::types::GatewayError;

pub const ENDPOINT_VAR: &str = "N8N_CRYPTO_WEBHOOK_URL";
pub const REQUEST_TIMEOUT_VAR: &str = "INSIGHTFLOW_REQUEST_TIMEOUT_SECS";
pub const CONNECT_TIMEOUT_VAR: &str = "INSIGHTFLOW_CONNECT_TIMEOUT_SECS";

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GatewayTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for GatewayTimeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

/// Immutable webhook settings, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub endpoint: Url,
    pub timeouts: GatewayTimeouts,
}

impl GatewayConfig {
    /// Validate an endpoint URL and pair it with timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::ConfigParse`] if the URL does not parse or is
    /// not http/https.
    pub fn new(endpoint: &str, timeouts: GatewayTimeouts) -> Result<Self, GatewayError> {
        let endpoint = Url::parse(endpoint.trim())
            .map_err(|e| GatewayError::ConfigParse(format!("invalid {ENDPOINT_VAR}: {e}")))?;

        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(GatewayError::ConfigParse(format!(
                "unsupported scheme '{}' in {ENDPOINT_VAR} (expected http or https)",
                endpoint.scheme()
            )));
        }

        Ok(Self { endpoint, timeouts })
    }

    /// Build typed gateway config from environment variables.
    ///
    /// Required:
    /// - `N8N_CRYPTO_WEBHOOK_URL`
    ///
    /// Optional:
    /// - `INSIGHTFLOW_REQUEST_TIMEOUT_SECS`: default 60
    /// - `INSIGHTFLOW_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns an error if the webhook URL is missing or invalid.
    pub fn from_env() -> Result<Self, GatewayError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`GatewayConfig::from_env`] but reads through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns an error if the webhook URL is missing or invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, GatewayError> {
        let endpoint = lookup(ENDPOINT_VAR)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| GatewayError::MissingEndpoint { var: ENDPOINT_VAR.into() })?;

        let timeouts = GatewayTimeouts {
            request_secs: parse_secs(lookup(REQUEST_TIMEOUT_VAR), DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: parse_secs(lookup(CONNECT_TIMEOUT_VAR), DEFAULT_CONNECT_TIMEOUT_SECS),
        };

        Self::new(&endpoint, timeouts)
    }
}

fn parse_secs(raw: Option<String>, default: u64) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
