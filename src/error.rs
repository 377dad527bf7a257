use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("invalid response: {0}")]
    Decode(String),

    /// The backend answered, but with a failure status or `success: false`.
    #[error("request rejected with status {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Rejected { status: u16, message: Option<String> },
}

impl ApiError {
    /// Text for the snackbar: the server's own message when it sent one,
    /// otherwise `rejected` for business failures and `transport` for the rest.
    pub fn user_message(&self, rejected: &str, transport: &str) -> String {
        match self {
            ApiError::Rejected {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            ApiError::Rejected { .. } => rejected.to_owned(),
            ApiError::Network(_) | ApiError::Decode(_) => transport.to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CameraError {
    #[error("camera API not available in this browser")]
    Unsupported,

    #[error("camera request failed: {0}")]
    Unavailable(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecoderError {
    #[error("video element `{0}` not found")]
    MissingVideo(String),
}
