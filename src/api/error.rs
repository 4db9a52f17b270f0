use thiserror::Error;

/// Every failure the notes client can surface.
///
/// `Clone` because one list response is shared by every reader of a
/// deduplicated request.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub(crate) enum NoteError {
    /// Missing or unusable startup configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),

    /// The bearer token was rejected (401/403).
    #[error("unauthorized: {0}")]
    Auth(String),

    /// 5xx, unexpected status, or an undecodable body.
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// The server refused the payload.
    #[error("rejected: {0}")]
    Validation(String),

    #[error("not found: {0}")]
    NotFound(String),
}

pub(crate) type NoteResult<T> = Result<T, NoteError>;

impl NoteError {
    /// Classify a non-success HTTP status.
    pub(crate) fn from_status(status: u16, message: String) -> Self {
        match status {
            401 | 403 => Self::Auth(message),
            404 => Self::NotFound(message),
            400..=499 => Self::Validation(message),
            _ => Self::Server { status, message },
        }
    }

    pub(crate) fn network(e: reqwest::Error) -> Self {
        Self::Network(e.to_string())
    }

    pub(crate) fn malformed(e: impl std::fmt::Display) -> Self {
        Self::Server {
            status: 200,
            message: format!("malformed response: {e}"),
        }
    }

    /// Text shown to the user. Auth failures read like network failures.
    pub(crate) fn user_message(&self) -> String {
        match self {
            Self::Config(msg) => format!("The app is not configured: {msg}"),
            Self::Network(_) | Self::Auth(_) => {
                "Could not reach the notes service. Please try again.".to_string()
            }
            Self::Server { .. } => "The notes service failed to respond. Please try again later.".to_string(),
            Self::Validation(_) => "The note could not be saved. Please check the form and try again.".to_string(),
            Self::NotFound(_) => "That note no longer exists.".to_string(),
        }
    }
}

/// Extract a human message from an error body.
///
/// NoteHub answers errors with `{"message": "..."}`; anything else is passed
/// through trimmed.
pub(crate) fn error_body_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}
