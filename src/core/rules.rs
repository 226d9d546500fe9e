//! Rule Set: condition → effect pairs merged into a directive bundle
//!
//! Unlike signal extraction this is not first-match: every rule whose
//! condition holds contributes, in declaration order.

use crate::types::{DirectiveBundle, Effect, Emotion, Intent, Signals};

/// One condition/effect pair
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub when: fn(&Signals) -> bool,
    pub effect: Effect,
}

impl Rule {
    pub fn applies(&self, signals: &Signals) -> bool {
        (self.when)(signals)
    }
}

/// Declared rules, in evaluation order. The last one always fires.
pub static RULES: [Rule; 5] = [
    Rule {
        name: "distress",
        when: |s| s.emotion.is_distress(),
        effect: Effect {
            constraints: &[
                "Acolher antes de orientar",
                "Resposta curta",
                "Evitar julgamento",
            ],
            next_actions: &["Refletir sentimento", "Perguntar objetivo imediato"],
            style: &["calmo", "humano", "direto"],
        },
    },
    Rule {
        name: "friction",
        when: |s| s.intent == Intent::Conflict || s.emotion == Emotion::Angry,
        effect: Effect {
            constraints: &["Não defensivo", "Reconhecer frustração"],
            next_actions: &["Validar ponto", "Oferecer dois caminhos"],
            style: &["firme", "respeitoso"],
        },
    },
    Rule {
        name: "question",
        when: |s| s.intent == Intent::Question,
        effect: Effect {
            constraints: &["Responder objetivamente primeiro", "Não filosofar demais"],
            next_actions: &["Responder", "Checar entendimento"],
            style: &["claro", "didático"],
        },
    },
    Rule {
        name: "plan",
        when: |s| s.intent == Intent::Plan,
        effect: Effect {
            constraints: &["Transformar em passos", "Definir escopo"],
            next_actions: &["Listar 3–5 passos", "Definir próximo passo imediato"],
            style: &["estratégico", "prático"],
        },
    },
    Rule {
        name: "baseline",
        when: |_| true,
        effect: Effect {
            constraints: &["Manter naturalidade"],
            next_actions: &["Responder normalmente"],
            style: &["humano"],
        },
    },
];

/// Outcome of evaluating the rule set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleMatch {
    pub bundle: DirectiveBundle,
    pub fired: Vec<&'static str>,
}

/// Evaluates an ordered rule list against signals
#[derive(Debug, Clone, Copy)]
pub struct RuleSet {
    rules: &'static [Rule],
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleSet {
    /// The declared rule set
    pub fn new() -> Self {
        Self { rules: &RULES }
    }

    /// Evaluate every rule and merge the effects of those that fire
    pub fn apply(&self, signals: &Signals) -> RuleMatch {
        let mut result = RuleMatch::default();
        for rule in self.rules.iter().filter(|r| r.applies(signals)) {
            result.bundle.absorb(&rule.effect);
            result.fired.push(rule.name);
        }
        result
    }
}

// =============================================================================
// TESTS
// =============================================================================
