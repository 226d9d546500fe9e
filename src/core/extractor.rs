//! Signal Extractor: coarse emotion and intent from raw text
//!
//! Plain substring matching on the lower-cased input. Both classifications
//! are first-match-wins over a fixed priority order.

use lazy_static::lazy_static;
use regex::Regex;
use crate::types::{Emotion, Intent, Signals};

lazy_static! {
    // =========================================================================
    // Emotion, in priority order
    // =========================================================================
    static ref RE_SAD: Regex = Regex::new(r"triste|cansado|brox").unwrap();
    static ref RE_ANGRY: Regex = Regex::new(r"raiva|ódio|foda-se").unwrap();
    static ref RE_ANXIOUS: Regex = Regex::new(r"ansioso|medo").unwrap();
    static ref RE_EXCITED: Regex = Regex::new(r"animado|feliz").unwrap();

    // =========================================================================
    // Intent, in priority order
    // Question also covers a trailing '?', checked outside the regex
    // =========================================================================
    static ref RE_QUESTION_OPENER: Regex = Regex::new(r"^(por que|como)").unwrap();
    static ref RE_PLAN: Regex = Regex::new(r"quero|vamos|decidi").unwrap();
    static ref RE_HELP: Regex = Regex::new(r"me ajuda|o que eu faço").unwrap();
    static ref RE_CONFLICT: Regex = Regex::new(r"isso é uma merda|você errou").unwrap();

    static ref EMOTION_TABLE: [(&'static Regex, Emotion); 4] = [
        (&*RE_SAD, Emotion::Sad),
        (&*RE_ANGRY, Emotion::Angry),
        (&*RE_ANXIOUS, Emotion::Anxious),
        (&*RE_EXCITED, Emotion::Excited),
    ];

    static ref INTENT_TABLE: [(&'static Regex, Intent); 3] = [
        (&*RE_PLAN, Intent::Plan),
        (&*RE_HELP, Intent::Help),
        (&*RE_CONFLICT, Intent::Conflict),
    ];
}

/// Keyword classifier for emotion and intent
#[derive(Debug, Default, Clone, Copy)]
pub struct SignalExtractor;

impl SignalExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Classify text. Total: unmatched or empty text is neutral/statement.
    pub fn extract(&self, text: &str) -> Signals {
        let lowered = text.to_lowercase();
        Signals::new(classify_emotion(&lowered), classify_intent(&lowered))
    }
}

fn classify_emotion(text: &str) -> Emotion {
    EMOTION_TABLE
        .iter()
        .find(|(re, _)| re.is_match(text))
        .map(|(_, emotion)| *emotion)
        .unwrap_or(Emotion::Neutral)
}

fn classify_intent(text: &str) -> Intent {
    if text.ends_with('?') || RE_QUESTION_OPENER.is_match(text) {
        return Intent::Question;
    }
    INTENT_TABLE
        .iter()
        .find(|(re, _)| re.is_match(text))
        .map(|(_, intent)| *intent)
        .unwrap_or(Intent::Statement)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> Signals {
        SignalExtractor::new().extract(text)
    }

    #[test]
    fn test_empty_input() {
        let s = extract("");
        assert_eq!(s.emotion, Emotion::Neutral);
        assert_eq!(s.intent, Intent::Statement);
    }

    #[test]
    fn test_sad_statement() {
        let s = extract("estou muito triste e cansado");
        assert_eq!(s, Signals::new(Emotion::Sad, Intent::Statement));
    }

    #[test]
    fn test_sad_wins_over_angry() {
        // both keyword sets present, sadness has priority
        let s = extract("tô triste e com raiva");
        assert_eq!(s.emotion, Emotion::Sad);
    }

    #[test]
    fn test_angry_wins_over_anxious() {
        assert_eq!(extract("raiva e medo").emotion, Emotion::Angry);
    }

    #[test]
    fn test_anxious_and_excited() {
        assert_eq!(extract("estou ansioso").emotion, Emotion::Anxious);
        assert_eq!(extract("estou feliz hoje").emotion, Emotion::Excited);
    }

    #[test]
    fn test_keywords_match_inside_words() {
        assert_eq!(extract("fiquei broxado").emotion, Emotion::Sad);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(extract("TRISTE").emotion, Emotion::Sad);
        assert_eq!(extract("ÓDIO disso").emotion, Emotion::Angry);
        assert_eq!(extract("Como funciona").intent, Intent::Question);
    }

    #[test]
    fn test_question_mark_and_openers() {
        assert_eq!(extract("isso funciona?").intent, Intent::Question);
        assert_eq!(extract("por que o céu é azul").intent, Intent::Question);
        assert_eq!(extract("como eu faço isso?").intent, Intent::Question);
    }

    #[test]
    fn test_question_outranks_plan() {
        assert_eq!(extract("vamos sair?").intent, Intent::Question);
    }

    #[test]
    fn test_opener_must_be_at_start() {
        assert_eq!(extract("não sei como").intent, Intent::Statement);
    }

    #[test]
    fn test_plan_help_conflict() {
        assert_eq!(extract("quero aprender rust").intent, Intent::Plan);
        assert_eq!(extract("decidi mudar de emprego").intent, Intent::Plan);
        assert_eq!(extract("me ajuda aqui").intent, Intent::Help);
        assert_eq!(extract("você errou, isso é uma merda").intent, Intent::Conflict);
    }

    #[test]
    fn test_plan_outranks_conflict() {
        assert_eq!(extract("quero dizer que você errou").intent, Intent::Plan);
    }

    #[test]
    fn test_determinism() {
        let text = "quero saber por que estou ansioso";
        assert_eq!(extract(text), extract(text));
    }
}
