//! Persistence-backed session store.
//!
//! The store owns the single persisted session slot. Backends are trivial
//! string stores: the browser backend lives in the web crate (localStorage
//! is a wasm-only API); [`MemoryStorage`] serves native code and tests.
//! Rehydration is synchronous so claims exist before the first render.

use crate::claims::UserClaims;
use crate::session::Session;
use crate::token::TokenPair;

/// Durable storage for the serialized token pair.
pub trait SessionStorage {
    /// Loads the persisted record, if any.
    fn load(&self) -> Option<String>;

    /// Persists the record, replacing any previous one.
    fn save(&self, raw: &str);

    /// Removes the persisted record.
    fn clear(&self);
}

/// In-memory storage backend for native use and tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: std::sync::Mutex<Option<String>>,
}

impl SessionStorage for MemoryStorage {
    fn load(&self) -> Option<String> {
        self.slot.lock().expect("storage lock").clone()
    }

    fn save(&self, raw: &str) {
        *self.slot.lock().expect("storage lock") = Some(raw.to_string());
    }

    fn clear(&self) {
        *self.slot.lock().expect("storage lock") = None;
    }
}

/// Session store over a storage backend.
///
/// Only the token pair is persisted; claims are rederived from the access
/// token on rehydration, so a stale or tampered record simply fails to
/// decode and the client starts logged out.
#[derive(Debug)]
pub struct SessionStore<S> {
    backend: S,
}

impl<S: SessionStorage> SessionStore<S> {
    /// Creates a store over the given backend.
    #[must_use]
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Establishes a session from a login response and persists it.
    pub fn establish(&self, tokens: TokenPair, claims: UserClaims) -> Session {
        match serde_json::to_string(&tokens) {
            Ok(raw) => self.backend.save(&raw),
            Err(e) => {
                // Session still works for this page load; it just won't
                // survive a reload.
                tracing::warn!(error = %e, "failed to persist session tokens");
            }
        }
        Session::new(tokens, claims)
    }

    /// Rehydrates the persisted session, if one exists and still decodes.
    ///
    /// Any failure — unreadable record, token that is not JWT-shaped,
    /// claims that no longer parse — clears the slot and reports
    /// logged-out, so a corrupt record cannot wedge every later load.
    pub fn rehydrate(&self) -> Option<Session> {
        let raw = self.backend.load()?;

        let tokens: TokenPair = match serde_json::from_str(&raw) {
            Ok(tokens) => tokens,
            Err(e) => {
                tracing::warn!(error = %e, "persisted session record is unreadable, clearing");
                self.backend.clear();
                return None;
            }
        };

        match UserClaims::decode(tokens.access()) {
            Ok(claims) => Some(Session::new(tokens, claims)),
            Err(e) => {
                tracing::warn!(error = %e, "persisted access token no longer decodes, clearing");
                self.backend.clear();
                None
            }
        }
    }

    /// Destroys the persisted session.
    pub fn clear(&self) {
        self.backend.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::Role;
    use base64::Engine as _;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use campus_core::UserId;

    fn decodable_token(payload: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(b"{\"alg\":\"HS256\"}");
        let body = URL_SAFE_NO_PAD.encode(payload.as_bytes());
        format!("{header}.{body}.sig")
    }

    fn store() -> SessionStore<MemoryStorage> {
        SessionStore::new(MemoryStorage::default())
    }

    #[test]
    fn establish_persists_the_token_pair() {
        let store = store();
        let tokens = TokenPair::new("acc", "ref");
        let claims = UserClaims::new(UserId::new(1), Role::Student);

        let session = store.establish(tokens.clone(), claims);

        assert_eq!(session.tokens(), &tokens);
        let raw = store.backend.load().expect("persisted record");
        let persisted: TokenPair = serde_json::from_str(&raw).expect("parse");
        assert_eq!(persisted, tokens);
    }

    #[test]
    fn rehydrate_restores_claims_from_the_access_token() {
        let store = store();
        let access = decodable_token(r#"{"id":9,"role":"teacher","email":"t@example.edu"}"#);
        store.establish(
            TokenPair::new(access, "ref"),
            UserClaims::new(UserId::new(9), Role::Teacher),
        );

        let session = store.rehydrate().expect("session");
        assert_eq!(session.claims().id, UserId::new(9));
        assert_eq!(session.role(), Role::Teacher);
        assert_eq!(session.claims().email.as_deref(), Some("t@example.edu"));
    }

    #[test]
    fn rehydrate_with_empty_storage_is_logged_out() {
        assert!(store().rehydrate().is_none());
    }

    #[test]
    fn rehydrate_with_unreadable_record_clears_storage() {
        let store = store();
        store.backend.save("not json");

        assert!(store.rehydrate().is_none());
        assert!(store.backend.load().is_none());
    }

    #[test]
    fn rehydrate_with_undecodable_token_clears_storage() {
        let store = store();
        store.establish(
            TokenPair::new("opaque-token", "ref"),
            UserClaims::new(UserId::new(1), Role::Student),
        );

        assert!(store.rehydrate().is_none());
        assert!(store.backend.load().is_none());
    }

    #[test]
    fn clear_destroys_the_persisted_session() {
        let store = store();
        let access = decodable_token(r#"{"id":2,"role":"student"}"#);
        store.establish(
            TokenPair::new(access, "ref"),
            UserClaims::new(UserId::new(2), Role::Student),
        );

        store.clear();

        assert!(store.backend.load().is_none());
        assert!(store.rehydrate().is_none());
    }

    #[test]
    fn establish_replaces_any_previous_session() {
        // At most one session per client: the slot is single-occupancy.
        let store = store();
        let first = decodable_token(r#"{"id":1,"role":"student"}"#);
        let second = decodable_token(r#"{"id":2,"role":"secretary"}"#);

        store.establish(
            TokenPair::new(first, "r1"),
            UserClaims::new(UserId::new(1), Role::Student),
        );
        store.establish(
            TokenPair::new(second, "r2"),
            UserClaims::new(UserId::new(2), Role::Secretary),
        );

        let session = store.rehydrate().expect("session");
        assert_eq!(session.claims().id, UserId::new(2));
        assert_eq!(session.role(), Role::Secretary);
    }
}
