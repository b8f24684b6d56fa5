use thiserror::Error;

/// Failure of a call against the catalog API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Failed to send request: {0}")]
    Network(String),

    #[error("HTTP {status}")]
    Http {
        status: u16,
        /// `message` field of the error body, when the server sent one
        message: Option<String>,
    },

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Failed to serialize request: {0}")]
    Encode(String),
}

impl ApiError {
    /// Text shown to the operator: the server's message if present,
    /// otherwise the error's own description.
    pub fn message(&self) -> String {
        match self {
            ApiError::Http {
                message: Some(message),
                ..
            } => message.clone(),
            other => other.to_string(),
        }
    }
}
