//! Narrative radar: trending sectors with velocity and maturity.

use super::{PLACEHOLDER, object_list, text_or};
use crate::gateway::Payload;

pub const UNKNOWN_NAME: &str = "Unknown";

/// Badge tone derived from the free-text velocity label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Velocity {
    /// Label mentions "Exploding".
    Hot,
    /// Label mentions "Rising".
    Rising,
    Neutral,
}

impl Velocity {
    #[must_use]
    pub fn classify(label: &str) -> Self {
        if label.contains("Exploding") {
            Self::Hot
        } else if label.contains("Rising") {
            Self::Rising
        } else {
            Self::Neutral
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Narrative {
    pub name: String,
    pub velocity: String,
    pub maturity: String,
    pub insight: String,
}

impl Narrative {
    #[must_use]
    pub fn from_payload(item: &Payload) -> Self {
        Self {
            name: text_or(item, "name", UNKNOWN_NAME),
            velocity: text_or(item, "velocity", PLACEHOLDER),
            maturity: text_or(item, "maturity", PLACEHOLDER),
            insight: text_or(item, "insight", PLACEHOLDER),
        }
    }

    #[must_use]
    pub fn velocity_tone(&self) -> Velocity {
        Velocity::classify(&self.velocity)
    }

    /// Cycle progress in percent: 90 once the phase reads as hype, else 50.
    #[must_use]
    pub fn maturity_progress(&self) -> u8 {
        if self.maturity.contains("Hype") { 90 } else { 50 }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NarrativeView {
    pub narratives: Vec<Narrative>,
}

impl NarrativeView {
    #[must_use]
    pub fn from_payload(payload: &Payload) -> Self {
        let narratives = object_list(payload, "narratives")
            .iter()
            .map(Narrative::from_payload)
            .collect();
        Self { narratives }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.narratives.is_empty()
    }
}

#[cfg(test)]
#[path = "narrative_test.rs"]
mod tests;
