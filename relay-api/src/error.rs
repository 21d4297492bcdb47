// relay-api/src/error.rs
use crate::http::HttpError;
use thiserror::Error;

/// Failure of a single relay API operation
#[derive(Debug, Error)]
pub enum RelayError {
    /// Network, DNS, TLS or timeout failure before a response arrived.
    #[error(transparent)]
    Transport(#[from] HttpError),

    /// The caller's cancellation token fired while the request was in flight.
    #[error("request cancelled")]
    Cancelled,

    /// The service answered with a status >= 400. The body is kept verbatim
    /// because error payloads differ between endpoints.
    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    /// A success response whose body did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl RelayError {
    /// Status code for API errors
    pub fn status(&self) -> Option<u16> {
        match self {
            RelayError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, RelayError::Transport(_) | RelayError::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_keeps_status_and_body() {
        let err = RelayError::Api {
            status: 404,
            body: r#"{"detail": "Not found."}"#.to_string(),
        };
        assert_eq!(err.status(), Some(404));
        assert!(!err.is_transport());
        assert!(err.to_string().contains("Not found."));
    }

    #[test]
    fn test_cancelled_is_transport() {
        assert!(RelayError::Cancelled.is_transport());
        assert_eq!(RelayError::Cancelled.status(), None);
    }
}
