//! Error types for the campus-access crate.

use std::fmt;

/// Errors from session establishment and rehydration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The access token is not shaped like a JWT or its payload is not
    /// valid base64url.
    InvalidToken { reason: String },
    /// The token payload decoded but its claims did not parse (missing
    /// fields, unknown role value).
    MalformedClaims { reason: String },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidToken { reason } => {
                write!(f, "invalid token: {reason}")
            }
            Self::MalformedClaims { reason } => {
                write!(f, "malformed claims: {reason}")
            }
        }
    }
}

impl std::error::Error for SessionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_token_display() {
        let err = SessionError::InvalidToken {
            reason: "two segments".to_string(),
        };
        assert!(err.to_string().contains("invalid token"));
        assert!(err.to_string().contains("two segments"));
    }

    #[test]
    fn malformed_claims_display() {
        let err = SessionError::MalformedClaims {
            reason: "unknown variant `dean`".to_string(),
        };
        assert!(err.to_string().contains("malformed claims"));
        assert!(err.to_string().contains("dean"));
    }
}
