//! Integration tests for the inference pipeline
//!
//! Tests the full path: text → extractor → rules → tracker → renderer

use newton::core::{AffectTracker, Newton, HEADER};
use newton::types::{AffectState, Emotion, Intent};
use newton::{INITIAL_TRUST, TRUST_CONFLICT_PENALTY, TRUST_GAIN};
use pretty_assertions::assert_eq;

const EPS: f64 = 1e-9;

#[test]
fn test_sad_statement_scenario() {
    let newton = Newton::new();
    let mut state = AffectState::new();
    let before = state.trust;

    let result = newton.infer(&mut state, "estou muito triste e cansado");

    assert_eq!(result.signals.emotion, Emotion::Sad);
    assert_eq!(result.signals.intent, Intent::Statement);
    assert_eq!(result.fired, vec!["distress", "baseline"]);
    assert!(result.directives.style.contains(&"calmo".to_string()));
    assert!((state.trust - (before + TRUST_GAIN)).abs() < EPS);
}

#[test]
fn test_conflict_scenario() {
    let newton = Newton::new();
    let mut state = AffectState::new();

    let result = newton.infer(&mut state, "você errou, isso é uma merda");

    assert_eq!(result.signals.intent, Intent::Conflict);
    assert_eq!(result.fired, vec!["friction", "baseline"]);
    assert!((state.trust - (INITIAL_TRUST - TRUST_CONFLICT_PENALTY)).abs() < EPS);
}

#[test]
fn test_conflict_at_zero_trust_stays_zero() {
    let newton = Newton::new();
    let mut state = AffectState::with_trust(0.0);

    newton.infer(&mut state, "você errou, isso é uma merda");

    assert_eq!(state.trust, 0.0);
}

#[test]
fn test_question_scenario() {
    let newton = Newton::new();
    let mut state = AffectState::new();

    let result = newton.infer(&mut state, "como eu faço isso?");

    assert_eq!(result.signals.intent, Intent::Question);
    assert_eq!(result.fired, vec!["question", "baseline"]);
    assert_eq!(
        result.directives.next_actions,
        vec!["Responder", "Checar entendimento", "Responder normalmente"]
    );
}

#[test]
fn test_empty_input_scenario() {
    let newton = Newton::new();
    let mut state = AffectState::new();

    let result = newton.infer(&mut state, "");

    assert_eq!(result.signals.emotion, Emotion::Neutral);
    assert_eq!(result.signals.intent, Intent::Statement);
    assert_eq!(result.fired, vec!["baseline"]);
    assert_eq!(result.directives.constraints, vec!["Manter naturalidade"]);
    assert_eq!(result.directives.next_actions, vec!["Responder normalmente"]);
    assert_eq!(result.directives.style, vec!["humano"]);
}

#[test]
fn test_state_records_last_turn() {
    let newton = Newton::new();
    let mut state = AffectState::new();
    assert_eq!(state.last_intent, None);

    newton.infer(&mut state, "quero organizar minha semana");
    assert_eq!(state.last_intent, Some(Intent::Plan));

    newton.infer(&mut state, "estou animado");
    assert_eq!(state.emotion, Emotion::Excited);
    assert_eq!(state.last_intent, Some(Intent::Statement));
}

#[test]
fn test_repeated_turns_push_trust_to_one() {
    let newton = Newton::new();
    let mut tracker = AffectTracker::new();
    let mut previous = tracker.state().trust;

    for _ in 0..30 {
        let result = tracker.turn(&newton, "estou feliz");
        assert!(result.state.trust >= previous);
        previous = result.state.trust;
    }

    assert_eq!(tracker.state().trust, 1.0);
    assert_eq!(tracker.update_count(), 30);
}

#[test]
fn test_prompt_structure() {
    let newton = Newton::new();
    let mut state = AffectState::new();

    let prompt = newton.infer(&mut state, "decidi mudar de cidade").system_prompt;

    let style = prompt.find("Estilo recomendado:").unwrap();
    let constraints = prompt.find("Restrições:").unwrap();
    let actions = prompt.find("Próximas ações:").unwrap();
    assert!(prompt.starts_with(HEADER));
    assert!(style < constraints && constraints < actions);
    assert!(prompt.contains("Estado emocional: neutral\nIntenção: plan"));
    assert!(prompt.contains("- estratégico\n- prático\n- humano"));
}

#[test]
fn test_response_json_shape() {
    let newton = Newton::new();
    let mut state = AffectState::new();

    let response = newton.infer(&mut state, "me ajuda").to_response();
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["ok"], true);
    assert!(json["systemPrompt"].is_string());
    assert_eq!(json["debug"]["signals"]["emotion"], "neutral");
    assert_eq!(json["debug"]["signals"]["intent"], "help");
    assert!(json["debug"]["nextActions"].is_array());
    assert_eq!(json["debug"]["state"]["lastIntent"], "help");
    assert!(json["debug"]["state"]["trust"].is_number());
}
