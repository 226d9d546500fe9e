//! Signal structures for the extractor

use serde::{Deserialize, Serialize};

/// Coarse emotion read from the text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    #[default]
    Neutral,
    Sad,
    Angry,
    Anxious,
    Excited,
}

impl Emotion {
    pub const ALL: [Emotion; 5] = [
        Emotion::Neutral,
        Emotion::Sad,
        Emotion::Angry,
        Emotion::Anxious,
        Emotion::Excited,
    ];

    /// Wire name, also used in the rendered prompt
    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Neutral => "neutral",
            Emotion::Sad => "sad",
            Emotion::Angry => "angry",
            Emotion::Anxious => "anxious",
            Emotion::Excited => "excited",
        }
    }

    /// Terminal color for CLI display
    pub fn color(&self) -> colored::Color {
        match self {
            Emotion::Neutral => colored::Color::BrightBlack,
            Emotion::Sad => colored::Color::Blue,
            Emotion::Angry => colored::Color::Red,
            Emotion::Anxious => colored::Color::Yellow,
            Emotion::Excited => colored::Color::Green,
        }
    }

    /// Distress emotions call for acknowledgement before advice
    pub fn is_distress(&self) -> bool {
        matches!(self, Emotion::Sad | Emotion::Anxious)
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the user is trying to do with the turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Question,
    Plan,
    Help,
    Conflict,
    #[default]
    Statement,
}

impl Intent {
    pub const ALL: [Intent; 5] = [
        Intent::Question,
        Intent::Plan,
        Intent::Help,
        Intent::Conflict,
        Intent::Statement,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Question => "question",
            Intent::Plan => "plan",
            Intent::Help => "help",
            Intent::Conflict => "conflict",
            Intent::Statement => "statement",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-turn classification of the input text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Signals {
    pub emotion: Emotion,
    pub intent: Intent,
}

impl Signals {
    pub fn new(emotion: Emotion, intent: Intent) -> Self {
        Self { emotion, intent }
    }
}
