//! Error types for the console client

/// Errors produced by the HTTP client layer and response handling
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Transport-level failure: DNS, refused connection, aborted fetch
    #[error("request failed: {0}")]
    Fetch(String),

    /// Non-2xx response; the body is kept as plain text for display
    #[error("{status} {status_text}")]
    Request {
        status: u16,
        status_text: String,
        description: String,
    },

    #[error("JSON parse error: {0}")]
    Json(String),
}

impl ApiError {
    /// Body text of a non-2xx response, when there is one
    pub fn description(&self) -> Option<&str> {
        match self {
            ApiError::Request { description, .. } if !description.is_empty() => Some(description),
            _ => None,
        }
    }
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ApiError>;
