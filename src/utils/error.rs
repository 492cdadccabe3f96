use thiserror::Error;

/// Error taxonomy for the middleware. The boundary layer maps variants to
/// transport responses with an exhaustive match, so failure kinds are carried
/// in the type, not in message text.
#[derive(Error, Debug)]
pub enum MiddlewareError {
    /// A structurally-required domain parameter is missing or empty.
    /// Raised before any outbound call; never retried.
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Session credentials are missing; the caller cannot be authenticated
    /// against the legacy system and must re-authenticate.
    #[error("Missing session credentials: {message}")]
    InvalidState { message: String },

    /// The outbound call to the legacy system failed (network, HTTP status,
    /// or undecodable body).
    #[error("Legacy request failed: {0}")]
    UpstreamError(#[from] reqwest::Error),

    /// The legacy response decoded but violated a shape the endpoint
    /// guarantees (e.g. a mandatory wrapper object was absent).
    #[error("Legacy contract violation: {message}")]
    ContractError { message: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

pub type Result<T> = std::result::Result<T, MiddlewareError>;
