//! Persistent affect state

use serde::{Deserialize, Serialize};
use crate::types::{Emotion, Intent};
use crate::{INITIAL_ENERGY, INITIAL_OPENNESS, INITIAL_TRUST};

/// Emotional and trust state carried across turns.
///
/// `energy` and `openness` are part of the state shape but no rule moves
/// them yet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AffectState {
    /// Emotion of the most recent turn
    pub emotion: Emotion,
    /// 0.0-1.0
    pub energy: f64,
    /// 0.0-1.0, moved by every turn
    pub trust: f64,
    /// 0.0-1.0
    pub openness: f64,
    /// Intent of the most recent turn, None before the first
    pub last_intent: Option<Intent>,
}

impl Default for AffectState {
    fn default() -> Self {
        Self::new()
    }
}

impl AffectState {
    /// Fresh state as at process start
    pub fn new() -> Self {
        Self {
            emotion: Emotion::Neutral,
            energy: INITIAL_ENERGY,
            trust: INITIAL_TRUST,
            openness: INITIAL_OPENNESS,
            last_intent: None,
        }
    }

    /// Start from a given trust level (clamped)
    pub fn with_trust(trust: f64) -> Self {
        Self {
            trust: trust.clamp(0.0, 1.0),
            ..Self::new()
        }
    }

    /// All scalar fields inside [0, 1]
    pub fn is_bounded(&self) -> bool {
        [self.energy, self.trust, self.openness]
            .iter()
            .all(|v| (0.0..=1.0).contains(v))
    }
}
