//! Bearer token pair issued by the API's token endpoint.

use serde::{Deserialize, Serialize};

/// The access/refresh token pair returned by a successful login.
///
/// Tokens are opaque to the client apart from the access token's claim
/// payload, which [`crate::claims::UserClaims::decode`] can read. There is
/// no refresh flow: once the API rejects the access token the user has to
/// log in again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    access: String,
    refresh: String,
}

impl TokenPair {
    /// Creates a token pair from raw token strings.
    #[must_use]
    pub fn new(access: impl Into<String>, refresh: impl Into<String>) -> Self {
        Self {
            access: access.into(),
            refresh: refresh.into(),
        }
    }

    /// Returns the access token used for `Authorization: Bearer`.
    #[must_use]
    pub fn access(&self) -> &str {
        &self.access
    }

    /// Returns the refresh token.
    #[must_use]
    pub fn refresh(&self) -> &str {
        &self.refresh
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_pair_accessors() {
        let pair = TokenPair::new("acc", "ref");
        assert_eq!(pair.access(), "acc");
        assert_eq!(pair.refresh(), "ref");
    }

    #[test]
    fn token_pair_wire_field_names() {
        let pair = TokenPair::new("a", "r");
        let json = serde_json::to_value(&pair).expect("serialize");
        assert_eq!(json["access"], "a");
        assert_eq!(json["refresh"], "r");
    }
}
