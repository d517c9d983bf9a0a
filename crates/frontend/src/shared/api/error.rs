use thiserror::Error;

/// Failure of one backend call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Transport(String),

    /// Non-2xx response. `message` is the server's own message when the
    /// body carried one, otherwise the per-operation fallback.
    #[error("{message} (HTTP {status})")]
    Status { status: u16, message: String },

    #[error("unexpected response: {0}")]
    Decode(String),

    /// Client-side validation stopped the request before it was sent.
    #[error("{}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("{operation} is not available for {resource}")]
    Unsupported {
        operation: &'static str,
        resource: &'static str,
    },
}

impl ApiError {
    /// Text shown to the user for this failure.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status { message, .. } => message.clone(),
            ApiError::Validation(problems) => problems.join("; "),
            ApiError::Unsupported { .. } => self.to_string(),
            ApiError::Transport(_) | ApiError::Decode(_) => fallback.to_string(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_wins_over_fallback() {
        let err = ApiError::Status {
            status: 409,
            message: "Code already exists".into(),
        };
        assert_eq!(err.user_message("Failed to create discount"), "Code already exists");
        assert_eq!(err.to_string(), "Code already exists (HTTP 409)");
    }

    #[test]
    fn transport_failures_use_the_fallback() {
        let err = ApiError::Transport("TypeError: Failed to fetch".into());
        assert_eq!(err.user_message("Failed to load products"), "Failed to load products");
    }
}
