//! Error types for the fxcoach domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each bounded context has its own error enum.
//!
//! Only two error classes are ever fatal: configuration errors and session
//! errors raised before the event loop starts. Everything that goes wrong
//! while answering a request is converted to an in-band text response at
//! the handler boundary and never reaches this taxonomy's callers.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("API request failed: {message} (status: {status_code})")]
    ApiError { status_code: u16, message: String },

    #[error("Rate limited by provider, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Network error: {0}")]
    Network(String),
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Broker authentication failed: {0}")]
    AuthFailed(String),

    #[error("Failed to connect to broker at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Broker connection lost: {0}")]
    ConnectionLost(String),

    #[error("Registration rejected by broker: {0}")]
    RegistrationRejected(String),

    #[error("Protocol error: {0}")]
    Protocol(String),
}
