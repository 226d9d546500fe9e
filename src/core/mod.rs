//! Core modules for Newton

pub mod extractor;
pub mod rules;
pub mod tracker;
pub mod renderer;
pub mod engine;
pub mod api;

pub use extractor::SignalExtractor;
pub use rules::{Rule, RuleMatch, RuleSet, RULES};
pub use tracker::{AffectTracker, update_state, trust_delta};
pub use renderer::{render, compose_messages, DEFAULT_PERSONA, HEADER};
pub use engine::Newton;
pub use api::{create_router, create_router_with_state, run_server};
