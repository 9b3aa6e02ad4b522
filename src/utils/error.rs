use thiserror::Error;

/// Errors returned by the compare client. Every variant is a typed result the
/// caller can branch on; nothing here is meant to crash the process.
#[derive(Error, Debug)]
pub enum CompareError {
    #[error("compare service address not configured")]
    ConfigError,

    #[error("failed to build compare request: {0}")]
    RequestError(#[from] url::ParseError),

    #[error("failed to marshal compare request: {0}")]
    SerializationError(#[source] serde_json::Error),

    #[error("compare service request failed: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("{}", remote_message(.status, .message))]
    RemoteError {
        status: u16,
        message: Option<String>,
    },

    #[error("failed to decode compare response: {0}")]
    DecodeError(#[source] serde_json::Error),

    #[error("compare request cancelled: {0}")]
    Cancelled(#[from] tokio::time::error::Elapsed),
}

// Falls back to a status-code-only message when the service supplied no error
// text in its body.
fn remote_message(status: &u16, message: &Option<String>) -> String {
    match message {
        Some(msg) => format!("compare service error: {msg}"),
        None => format!("compare service returned status {status}"),
    }
}

pub type Result<T> = std::result::Result<T, CompareError>;
