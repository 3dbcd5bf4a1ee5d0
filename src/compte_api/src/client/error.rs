use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// No response was received (connection refused, DNS failure, reset...)
    #[error("network error: {0}")]
    Transport(#[source] reqwest::Error),
    /// The backend answered with a non-success status
    #[error("{code} - {message}")]
    Status { code: u16, message: String },
    /// The backend answered with a success status but an unreadable body
    #[error("could not decode response body: {0}")]
    Decode(#[source] reqwest::Error),
}

impl ClientError {
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ClientError::Status { code, .. } => Some(*code),
            _ => None,
        }
    }
}
