//! Newton pipeline: extract → match → update → render
//!
//! The pipeline holds no state of its own. The caller owns the
//! `AffectState` and decides how writers are serialized.

use chrono::Utc;
use tracing::debug;
use crate::core::extractor::SignalExtractor;
use crate::core::renderer::render;
use crate::core::rules::RuleSet;
use crate::core::tracker::update_state;
use crate::types::{AffectState, Inference};

#[derive(Debug, Default, Clone, Copy)]
pub struct Newton {
    extractor: SignalExtractor,
    rules: RuleSet,
}

impl Newton {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one turn. Mutates `state` exactly once.
    pub fn infer(&self, state: &mut AffectState, text: &str) -> Inference {
        let signals = self.extractor.extract(text);
        let matched = self.rules.apply(&signals);

        update_state(state, &signals);

        let system_prompt = render(&signals, &matched.bundle, state);

        debug!(
            emotion = %signals.emotion,
            intent = %signals.intent,
            trust = state.trust,
            fired = ?matched.fired,
            "inference"
        );

        Inference {
            timestamp: Utc::now(),
            signals,
            directives: matched.bundle,
            fired: matched.fired.iter().map(|name| name.to_string()).collect(),
            state: *state,
            system_prompt,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Emotion, Intent};

    #[test]
    fn test_infer_updates_state_once() {
        let newton = Newton::new();
        let mut state = AffectState::new();
        let result = newton.infer(&mut state, "estou com medo");

        assert_eq!(state.emotion, Emotion::Anxious);
        assert_eq!(state.last_intent, Some(Intent::Statement));
        assert!((state.trust - 0.72).abs() < 1e-9);
        assert_eq!(result.state, state);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let newton = Newton::new();
        let mut state = AffectState::new();
        let first = newton.infer(&mut state, "você errou");
        newton.infer(&mut state, "você errou");
        assert!(first.state.trust > state.trust);
    }

    #[test]
    fn test_prompt_mentions_signals() {
        let newton = Newton::new();
        let mut state = AffectState::new();
        let result = newton.infer(&mut state, "como eu faço isso?");
        assert!(result.system_prompt.contains("Intenção: question"));
        assert!(result.system_prompt.contains("- claro"));
    }
}
