//! Newton: causal guidance for the Paradox chat assistant
//!
//! Turns a user utterance into an updated affect/trust state and a block of
//! behavioural directives that is injected as a system message before the
//! language model is called.
//!
//! Pipeline: text → signal extractor → rule set → affect tracker → renderer

pub mod core;
pub mod error;
pub mod types;

pub use error::NewtonError;

// =============================================================================
// INITIAL STATE
// =============================================================================

/// Energy at process start
pub const INITIAL_ENERGY: f64 = 0.5;

/// Trust at process start
pub const INITIAL_TRUST: f64 = 0.7;

/// Openness at process start
pub const INITIAL_OPENNESS: f64 = 0.6;

// =============================================================================
// TRUST DYNAMICS
// =============================================================================

/// Trust lost on a conflict turn
pub const TRUST_CONFLICT_PENALTY: f64 = 0.05;

/// Trust gained on any other turn
pub const TRUST_GAIN: f64 = 0.02;

// =============================================================================
// SERVICE
// =============================================================================

/// Default listen address of the HTTP service
pub const DEFAULT_ADDR: &str = "127.0.0.1:3939";

/// Capacity of the live-update broadcast channel
pub const UPDATE_CHANNEL_CAPACITY: usize = 100;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
