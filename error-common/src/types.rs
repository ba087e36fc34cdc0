use thiserror::Error;

/// Errors that stop the service from starting or serving
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Network communication errors
    #[error("Network error: {0}")]
    NetworkError(String),

    /// HTTP server failures
    #[error("Server error: {0}")]
    ServerError(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl ServiceError {
    /// Short category name used as a log field
    pub fn kind(&self) -> &'static str {
        match self {
            ServiceError::NetworkError(_) => "network",
            ServiceError::ServerError(_) => "server",
            ServiceError::ConfigError(_) => "config",
        }
    }
}

/// Result type alias for service operations
pub type Result<T> = std::result::Result<T, ServiceError>;

/// Log a fatal service error with its context
pub fn log_error(context: &str, error: &ServiceError) {
    tracing::error!(
        context = context,
        kind = error.kind(),
        error = %error,
        "TokenLine service error"
    );
}
