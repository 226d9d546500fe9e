//! Core types for Newton

mod signals;
mod state;
mod directives;
mod output;
mod message;

pub use signals::{Emotion, Intent, Signals};
pub use state::AffectState;
pub use directives::{DirectiveBundle, Effect};
pub use output::{Inference, InferResponse, DebugPayload, InferenceUpdate};
pub use message::{ChatMessage, Role};
