//! Directive effects and the merged bundle

use serde::{Deserialize, Serialize};

/// What a single rule contributes when it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Effect {
    pub constraints: &'static [&'static str],
    pub next_actions: &'static [&'static str],
    pub style: &'static [&'static str],
}

/// Merged directives of every fired rule.
///
/// Each list keeps the first occurrence of a directive and drops repeats.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectiveBundle {
    pub constraints: Vec<String>,
    pub next_actions: Vec<String>,
    pub style: Vec<String>,
}

impl DirectiveBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an effect's lists, skipping entries already present
    pub fn absorb(&mut self, effect: &Effect) {
        push_unique(&mut self.constraints, effect.constraints);
        push_unique(&mut self.next_actions, effect.next_actions);
        push_unique(&mut self.style, effect.style);
    }
}

fn push_unique(list: &mut Vec<String>, items: &[&str]) {
    for item in items {
        if !list.iter().any(|existing| existing == item) {
            list.push((*item).to_string());
        }
    }
}
