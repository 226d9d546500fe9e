//! Error types
//!
//! The inference pipeline itself is total; errors only come from the
//! transport around it.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NewtonError {
    /// Could not bind the listen address
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The server loop stopped with an I/O error
    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),

    /// Request body was not a JSON object
    #[error("malformed request body: {0}")]
    MalformedRequest(String),
}

impl NewtonError {
    /// Whether the caller is at fault
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::MalformedRequest(_))
    }
}
