//! InsightFlow — crypto market intelligence from an n8n webhook.
//!
//! DESIGN
//! ======
//! All analysis runs in a remote workflow. This crate sends one POST per
//! user action (`gateway`), reads the schema-less answer through
//! default-filling views (`views`), and renders it as plain text
//! (`render`). `dashboard` ties the two user triggers together.

pub mod dashboard;
pub mod gateway;
pub mod render;
pub mod views;
