//! Gateway — the only component that talks to the backend.
//!
//! DESIGN
//! ======
//! All analytics live in a remote n8n workflow behind a single webhook.
//! Requests differ only in the `action` discriminator (plus `query` for a
//! deep dive). The client normalizes every outcome into an [`Envelope`] so
//! the presentation side has exactly one branch: error or payload.

pub mod client;
pub mod config;
pub mod types;

pub use client::GatewayClient;
pub use config::{GatewayConfig, GatewayTimeouts};
pub use types::{Action, Envelope, GatewayError, MarketIntel, Payload};
