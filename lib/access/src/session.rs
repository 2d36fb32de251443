//! The active session: token pair plus decoded claims.
//!
//! A session is created from a successful login response (or rehydrated
//! from storage) and destroyed by logout. There is exactly one per client.
//! The role claim is fixed at creation; no mutator exists, so changing role
//! always means a new login.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::claims::UserClaims;
use crate::role::Role;
use crate::token::TokenPair;

/// An authenticated session held by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer tokens attached to every authenticated request.
    tokens: TokenPair,
    /// Decoded identity of the logged-in user.
    claims: UserClaims,
    /// When this client established the session.
    established_at: DateTime<Utc>,
}

impl Session {
    /// Creates a session from tokens and their claims.
    #[must_use]
    pub fn new(tokens: TokenPair, claims: UserClaims) -> Self {
        Self {
            tokens,
            claims,
            established_at: Utc::now(),
        }
    }

    /// Returns the bearer token pair.
    #[must_use]
    pub fn tokens(&self) -> &TokenPair {
        &self.tokens
    }

    /// Returns the decoded user claims.
    #[must_use]
    pub fn claims(&self) -> &UserClaims {
        &self.claims
    }

    /// Returns the session's role claim.
    #[must_use]
    pub fn role(&self) -> Role {
        self.claims.role
    }

    /// Returns when the client established the session.
    #[must_use]
    pub fn established_at(&self) -> DateTime<Utc> {
        self.established_at
    }

    /// Returns true when the access token's `exp` claim is in the past.
    ///
    /// Tokens without an `exp` claim never report expired; the API is the
    /// authority either way and will reject a stale token itself.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        match self.claims.exp {
            Some(exp) => Utc::now().timestamp() >= exp,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_core::UserId;

    fn test_session(role: Role, exp: Option<i64>) -> Session {
        Session::new(
            TokenPair::new("access", "refresh"),
            UserClaims::new(UserId::new(5), role).with_exp(exp),
        )
    }

    #[test]
    fn new_session_carries_tokens_and_claims() {
        let before = Utc::now();
        let session = test_session(Role::Student, None);
        let after = Utc::now();

        assert_eq!(session.tokens().access(), "access");
        assert_eq!(session.claims().id, UserId::new(5));
        assert_eq!(session.role(), Role::Student);
        assert!(session.established_at() >= before);
        assert!(session.established_at() <= after);
    }

    #[test]
    fn session_without_exp_never_expires() {
        let session = test_session(Role::Teacher, None);
        assert!(!session.is_expired());
    }

    #[test]
    fn session_with_past_exp_is_expired() {
        let session = test_session(Role::Teacher, Some(Utc::now().timestamp() - 60));
        assert!(session.is_expired());
    }

    #[test]
    fn session_with_future_exp_is_valid() {
        let session = test_session(Role::Secretary, Some(Utc::now().timestamp() + 3600));
        assert!(!session.is_expired());
    }

    #[test]
    fn session_serialization_roundtrip() {
        let session = test_session(Role::Secretary, Some(100));
        let json = serde_json::to_string(&session).expect("serialize");
        let parsed: Session = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(session, parsed);
    }
}
