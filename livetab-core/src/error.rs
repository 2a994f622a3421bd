//! Error types for the livetab core

use thiserror::Error;

/// Errors that end a session.
///
/// Neither variant is fatal to the process; the session that observed it
/// closes and the host decides what happens next.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The client sent a message that is not a valid inbound event
    #[error("Protocol error: {0}")]
    Protocol(#[from] serde_json::Error),

    /// Reading from or writing to the connection failed
    #[error("Transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SessionError {
    pub fn transport<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        SessionError::Transport(Box::new(err))
    }
}

/// Result type using SessionError
pub type Result<T> = std::result::Result<T, SessionError>;
