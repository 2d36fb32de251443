//! User claims decoded from the access token.
//!
//! The API signs its tokens; the client does not verify the signature, it
//! only reads the payload segment to learn who is logged in and as what
//! role. Claims are also delivered directly in the login response body,
//! which is the authoritative source at login time — decoding only happens
//! on rehydration.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use campus_core::UserId;
use serde::{Deserialize, Serialize};

use crate::error::SessionError;
use crate::role::Role;

/// Claim set identifying the authenticated user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserClaims {
    /// The account's primary key on the API side.
    pub id: UserId,
    /// The role discriminant; decides which dashboard subtree mounts.
    pub role: Role,
    /// Email address, when the token carries one.
    #[serde(default)]
    pub email: Option<String>,
    /// Display name, when the token carries one.
    #[serde(default)]
    pub name: Option<String>,
    /// Expiry as a unix timestamp, when the token carries one.
    #[serde(default)]
    pub exp: Option<i64>,
}

impl UserClaims {
    /// Creates a claim set with only the required fields.
    #[must_use]
    pub fn new(id: UserId, role: Role) -> Self {
        Self {
            id,
            role,
            email: None,
            name: None,
            exp: None,
        }
    }

    /// Sets the email claim.
    #[must_use]
    pub fn with_email(mut self, email: Option<String>) -> Self {
        self.email = email;
        self
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    /// Sets the expiry timestamp.
    #[must_use]
    pub fn with_exp(mut self, exp: Option<i64>) -> Self {
        self.exp = exp;
        self
    }

    /// Decodes the claim payload out of a JWT-shaped access token.
    ///
    /// The token is treated as `header.payload.signature`; only the payload
    /// is base64url-decoded and parsed. No signature verification happens
    /// here — the token came from the API over the same channel every other
    /// response did.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidToken`] when the token is not
    /// three-segment or the payload is not valid base64, and
    /// [`SessionError::MalformedClaims`] when the payload JSON does not
    /// carry the expected claims (including an unknown role value).
    pub fn decode(token: &str) -> Result<Self, SessionError> {
        let segments: Vec<&str> = token.split('.').collect();
        let [_header, payload, _signature] = segments.as_slice() else {
            return Err(SessionError::InvalidToken {
                reason: "token is not in header.payload.signature form".to_string(),
            });
        };

        let raw = URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|e| SessionError::InvalidToken {
                reason: format!("payload is not base64url: {e}"),
            })?;

        serde_json::from_slice(&raw).map_err(|e| SessionError::MalformedClaims {
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a JWT-shaped token around the given payload JSON.
    fn token_with_payload(payload: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(b"{\"alg\":\"HS256\",\"typ\":\"JWT\"}");
        let body = URL_SAFE_NO_PAD.encode(payload.as_bytes());
        format!("{header}.{body}.signature")
    }

    #[test]
    fn decode_full_claim_set() {
        let token = token_with_payload(
            r#"{"id":12,"role":"teacher","email":"t@example.edu","name":"T. Rivas","exp":1900000000}"#,
        );

        let claims = UserClaims::decode(&token).expect("decode");
        assert_eq!(claims.id, UserId::new(12));
        assert_eq!(claims.role, Role::Teacher);
        assert_eq!(claims.email.as_deref(), Some("t@example.edu"));
        assert_eq!(claims.name.as_deref(), Some("T. Rivas"));
        assert_eq!(claims.exp, Some(1900000000));
    }

    #[test]
    fn decode_minimal_claim_set() {
        let token = token_with_payload(r#"{"id":3,"role":"student"}"#);

        let claims = UserClaims::decode(&token).expect("decode");
        assert_eq!(claims.id, UserId::new(3));
        assert_eq!(claims.role, Role::Student);
        assert!(claims.email.is_none());
        assert!(claims.exp.is_none());
    }

    #[test]
    fn decode_rejects_two_segment_token() {
        let err = UserClaims::decode("only.two").unwrap_err();
        assert!(matches!(err, SessionError::InvalidToken { .. }));
    }

    #[test]
    fn decode_rejects_bad_base64() {
        let err = UserClaims::decode("h.!!not-base64!!.s").unwrap_err();
        assert!(matches!(err, SessionError::InvalidToken { .. }));
    }

    #[test]
    fn decode_rejects_unknown_role() {
        let token = token_with_payload(r#"{"id":3,"role":"dean"}"#);
        let err = UserClaims::decode(&token).unwrap_err();
        assert!(matches!(err, SessionError::MalformedClaims { .. }));
    }

    #[test]
    fn decode_rejects_missing_id() {
        let token = token_with_payload(r#"{"role":"student"}"#);
        let err = UserClaims::decode(&token).unwrap_err();
        assert!(matches!(err, SessionError::MalformedClaims { .. }));
    }

    #[test]
    fn builder_sets_optional_fields() {
        let claims = UserClaims::new(UserId::new(1), Role::Secretary)
            .with_email(Some("s@example.edu".to_string()))
            .with_name(Some("Sam".to_string()))
            .with_exp(Some(42));

        assert_eq!(claims.email.as_deref(), Some("s@example.edu"));
        assert_eq!(claims.name.as_deref(), Some("Sam"));
        assert_eq!(claims.exp, Some(42));
    }
}
