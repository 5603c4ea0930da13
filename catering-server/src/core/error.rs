use thiserror::Error;

/// Startup and serving failures of the process itself
///
/// Request-level failures use [`AppError`](crate::utils::AppError) instead.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Database initialization failed: {0}")]
    Database(String),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Result alias for server lifecycle operations
pub type Result<T> = std::result::Result<T, ServerError>;
