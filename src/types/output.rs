//! Inference results and wire payloads

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use crate::types::{AffectState, DirectiveBundle, Signals};

/// Full result of one pass through the pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inference {
    /// When this was computed
    pub timestamp: DateTime<Utc>,
    pub signals: Signals,
    pub directives: DirectiveBundle,
    /// Names of the rules that fired, in evaluation order
    pub fired: Vec<String>,
    /// State after this turn was applied
    pub state: AffectState,
    /// Rendered directive block
    pub system_prompt: String,
}

impl Inference {
    /// Shape returned by `POST /infer`
    pub fn to_response(&self) -> InferResponse {
        InferResponse {
            ok: true,
            system_prompt: self.system_prompt.clone(),
            debug: DebugPayload {
                signals: self.signals,
                constraints: self.directives.constraints.clone(),
                next_actions: self.directives.next_actions.clone(),
                style: self.directives.style.clone(),
                state: self.state,
            },
        }
    }

    /// Shape pushed to live subscribers
    pub fn to_update(&self) -> InferenceUpdate {
        InferenceUpdate {
            timestamp: self.timestamp,
            signals: self.signals,
            fired: self.fired.clone(),
            state: self.state,
        }
    }

    /// One-line summary for the CLI
    pub fn to_parseable_string(&self) -> String {
        format!(
            "emotion={} | intent={} | trust={:.2} | rules={}",
            self.signals.emotion,
            self.signals.intent,
            self.state.trust,
            self.fired.join(",")
        )
    }
}

/// Response body of `POST /infer`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InferResponse {
    pub ok: bool,
    pub system_prompt: String,
    pub debug: DebugPayload,
}

/// Raw data behind the rendered prompt
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugPayload {
    pub signals: Signals,
    pub constraints: Vec<String>,
    pub next_actions: Vec<String>,
    pub style: Vec<String>,
    pub state: AffectState,
}

/// Live update message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceUpdate {
    pub timestamp: DateTime<Utc>,
    pub signals: Signals,
    pub fired: Vec<String>,
    pub state: AffectState,
}
