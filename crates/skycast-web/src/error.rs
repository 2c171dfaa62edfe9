use thiserror::Error;

/// Process-level failures while bringing up the server.
///
/// Request-level validation failures never surface here; they are part of
/// the normal response contract, not errors.
#[derive(Debug, Error)]
pub enum WebError {
    #[error("invalid listen address '{value}', expected host:port")]
    InvalidAddr { value: String },

    #[error("invalid allowed origin '{value}'")]
    InvalidOrigin { value: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
