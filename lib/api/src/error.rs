//! Error types for gateway calls.

use std::fmt;

/// Errors from a single gateway call.
///
/// Failures are terminal: the call returns this error, the caller surfaces
/// it, and nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The API answered with an unexpected status code.
    Rejected {
        /// The status code the API returned.
        status: u16,
        /// The server's `detail` message, when the body carried one.
        detail: Option<String>,
    },
    /// The request never produced a response (connection refused, DNS,
    /// aborted fetch).
    Transport { reason: String },
    /// The response body did not parse as the expected shape.
    Decode { reason: String },
}

impl ApiError {
    /// The message to surface to the user.
    ///
    /// Prefers the server's own wording; falls back to a generic line with
    /// the status code.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Rejected {
                detail: Some(detail),
                ..
            } => detail.clone(),
            Self::Rejected { status, .. } => {
                format!("the server rejected the request (status {status})")
            }
            Self::Transport { .. } => "could not reach the server, try again later".to_string(),
            Self::Decode { .. } => "the server answered with an unexpected response".to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected { status, detail } => match detail {
                Some(detail) => write!(f, "rejected with status {status}: {detail}"),
                None => write!(f, "rejected with status {status}"),
            },
            Self::Transport { reason } => {
                write!(f, "transport error: {reason}")
            }
            Self::Decode { reason } => {
                write!(f, "undecodable response: {reason}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_display_includes_detail() {
        let err = ApiError::Rejected {
            status: 401,
            detail: Some("No account found for this email".to_string()),
        };
        assert!(err.to_string().contains("401"));
        assert!(err.to_string().contains("No account found"));
    }

    #[test]
    fn rejected_message_prefers_server_detail() {
        let err = ApiError::Rejected {
            status: 400,
            detail: Some("Passwords do not match".to_string()),
        };
        assert_eq!(err.message(), "Passwords do not match");
    }

    #[test]
    fn rejected_message_falls_back_to_status() {
        let err = ApiError::Rejected {
            status: 500,
            detail: None,
        };
        assert!(err.message().contains("500"));
    }

    #[test]
    fn transport_message_is_user_safe() {
        let err = ApiError::Transport {
            reason: "dns error".to_string(),
        };
        assert!(!err.message().contains("dns"));
        assert!(err.to_string().contains("dns"));
    }
}
