use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;

/// Errors that end [`App::run`](crate::App::run).
#[derive(Debug, Error)]
pub enum ServeError {
    #[error("failed to bind {addr}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("server task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("shutdown did not complete within {0:?}")]
    ShutdownTimeout(Duration),
}

pub type Result<T> = std::result::Result<T, ServeError>;
