//! Affect Tracker: persistent emotion/trust state
//!
//! Per turn:
//! - emotion and last intent follow the current signals
//! - trust drops 0.05 on conflict, otherwise rises 0.02, clamped to [0, 1]
//! - energy and openness stay put

use crate::core::engine::Newton;
use crate::types::{AffectState, Inference, Intent, Signals};
use crate::{TRUST_CONFLICT_PENALTY, TRUST_GAIN};

/// Apply one turn's signals to a state in place
pub fn update_state(state: &mut AffectState, signals: &Signals) {
    state.emotion = signals.emotion;
    state.last_intent = Some(signals.intent);
    state.trust = (state.trust + trust_delta(signals.intent)).clamp(0.0, 1.0);
}

/// Trust change caused by a turn with this intent
pub fn trust_delta(intent: Intent) -> f64 {
    if intent == Intent::Conflict {
        -TRUST_CONFLICT_PENALTY
    } else {
        TRUST_GAIN
    }
}

/// Owner of the single state instance
#[derive(Debug, Default)]
pub struct AffectTracker {
    state: AffectState,
    update_count: u64,
}

impl AffectTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing state
    pub fn with_state(state: AffectState) -> Self {
        Self {
            state,
            update_count: 0,
        }
    }

    /// Apply a turn and return the new snapshot
    pub fn update(&mut self, signals: &Signals) -> AffectState {
        update_state(&mut self.state, signals);
        self.update_count += 1;
        self.state
    }

    /// Run a full pipeline turn against the owned state
    pub fn turn(&mut self, newton: &Newton, text: &str) -> Inference {
        let inference = newton.infer(&mut self.state, text);
        self.update_count += 1;
        inference
    }

    pub fn state(&self) -> &AffectState {
        &self.state
    }

    pub fn update_count(&self) -> u64 {
        self.update_count
    }

    /// Back to process-start values
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Emotion;
    use crate::INITIAL_TRUST;

    const EPS: f64 = 1e-9;

    fn signals(emotion: Emotion, intent: Intent) -> Signals {
        Signals::new(emotion, intent)
    }

    #[test]
    fn test_initial_state() {
        let tracker = AffectTracker::new();
        let s = tracker.state();
        assert_eq!(s.emotion, Emotion::Neutral);
        assert_eq!(s.last_intent, None);
        assert!((s.trust - 0.7).abs() < EPS);
        assert!((s.energy - 0.5).abs() < EPS);
        assert!((s.openness - 0.6).abs() < EPS);
    }

    #[test]
    fn test_non_conflict_raises_trust() {
        let mut tracker = AffectTracker::new();
        let s = tracker.update(&signals(Emotion::Sad, Intent::Statement));
        assert!((s.trust - (INITIAL_TRUST + 0.02)).abs() < EPS);
        assert_eq!(s.emotion, Emotion::Sad);
        assert_eq!(s.last_intent, Some(Intent::Statement));
    }

    #[test]
    fn test_conflict_lowers_trust() {
        let mut tracker = AffectTracker::new();
        let s = tracker.update(&signals(Emotion::Neutral, Intent::Conflict));
        assert!((s.trust - (INITIAL_TRUST - 0.05)).abs() < EPS);
    }

    #[test]
    fn test_trust_clamped_at_zero() {
        let mut tracker = AffectTracker::with_state(AffectState::with_trust(0.0));
        let s = tracker.update(&signals(Emotion::Angry, Intent::Conflict));
        assert_eq!(s.trust, 0.0);
    }

    #[test]
    fn test_trust_clamped_at_one() {
        let mut tracker = AffectTracker::with_state(AffectState::with_trust(1.0));
        let s = tracker.update(&signals(Emotion::Excited, Intent::Plan));
        assert_eq!(s.trust, 1.0);
    }

    #[test]
    fn test_energy_and_openness_untouched() {
        let mut tracker = AffectTracker::new();
        for intent in Intent::ALL {
            tracker.update(&signals(Emotion::Anxious, intent));
        }
        assert!((tracker.state().energy - 0.5).abs() < EPS);
        assert!((tracker.state().openness - 0.6).abs() < EPS);
    }

    #[test]
    fn test_turn_counts_updates() {
        let newton = Newton::new();
        let mut tracker = AffectTracker::new();
        tracker.turn(&newton, "oi");
        let inference = tracker.turn(&newton, "oi");
        assert_eq!(tracker.update_count(), 2);
        assert_eq!(inference.state, *tracker.state());
    }

    #[test]
    fn test_reset() {
        let mut tracker = AffectTracker::new();
        tracker.update(&signals(Emotion::Angry, Intent::Conflict));
        tracker.reset();
        assert_eq!(*tracker.state(), AffectState::new());
        assert_eq!(tracker.update_count(), 0);
    }
}
