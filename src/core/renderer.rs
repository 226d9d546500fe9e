//! Directive Renderer: bundle → system prompt text

use crate::types::{AffectState, ChatMessage, DirectiveBundle, Signals};

/// First line of every rendered block
pub const HEADER: &str = "Newton — Orientação Causal Interna";

/// Persona system message used when the caller has none
pub const DEFAULT_PERSONA: &str = "Você é o Paradox, um assistente introspectivo, direto e empático, \
que fala de um jeito humano.
Responda sempre em até 3 parágrafos, com linguagem natural.";

/// Render the directive block injected ahead of the conversation.
///
/// Sections always appear, even with an empty list. No escaping is done.
pub fn render(signals: &Signals, bundle: &DirectiveBundle, _state: &AffectState) -> String {
    format!(
        "{header}\n\n\
         Estado emocional: {emotion}\n\
         Intenção: {intent}\n\n\
         Estilo recomendado:\n{style}\n\n\
         Restrições:\n{constraints}\n\n\
         Próximas ações:\n{next_actions}",
        header = HEADER,
        emotion = signals.emotion,
        intent = signals.intent,
        style = bullets(&bundle.style),
        constraints = bullets(&bundle.constraints),
        next_actions = bullets(&bundle.next_actions),
    )
    .trim()
    .to_string()
}

fn bullets(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("- {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the message list for the language model:
/// persona, directive block, history, then the new user turn.
pub fn compose_messages(
    persona: &str,
    directives: &str,
    history: &[ChatMessage],
    user_text: &str,
) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(history.len() + 3);
    messages.push(ChatMessage::system(persona));
    if !directives.trim().is_empty() {
        messages.push(ChatMessage::system(directives));
    }
    messages.extend_from_slice(history);
    messages.push(ChatMessage::user(user_text));
    messages
}

// =============================================================================
// TESTS
// =============================================================================
