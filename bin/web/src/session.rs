//! Session context for the app tree.
//!
//! Owns the single reactive session slot. The provider rehydrates
//! synchronously, so a returning visitor's claims exist before the first
//! render; pages call [`SessionContext::login`]/[`SessionContext::logout`]
//! and handle the presentation side (toast, navigation) themselves.

use campus_access::{AccessState, Role, Session, SessionStore};
use campus_api::{ApiClient, ApiError, AuthGateway, RegisterRequest};
use leptos::prelude::*;

use crate::config::WebConfig;
use crate::storage::{self, DefaultStorage};

/// Reactive session state provided as context to the whole app.
#[derive(Clone, Copy)]
pub struct SessionContext {
    current: RwSignal<Option<Session>>,
}

/// Rehydrates the persisted session and provides the context.
pub fn provide_session() -> SessionContext {
    let context = SessionContext {
        current: RwSignal::new(session_store().rehydrate()),
    };
    provide_context(context);
    context
}

/// Returns the session context from context.
///
/// Panics when called outside the app tree, which is a programming error.
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}

fn session_store() -> SessionStore<DefaultStorage> {
    SessionStore::new(DefaultStorage::default())
}

fn api_base_url() -> String {
    WebConfig::default().api_base_url
}

impl SessionContext {
    /// The current session, tracked.
    pub fn current(&self) -> Option<Session> {
        self.current.get()
    }

    /// The current session, untracked.
    pub fn current_untracked(&self) -> Option<Session> {
        self.current.get_untracked()
    }

    /// The access state driving the role router, tracked.
    pub fn state(&self) -> AccessState {
        AccessState::from_session(self.current.get().as_ref())
    }

    /// An API client carrying the session's bearer token and the CSRF
    /// token, ready for gateway use.
    pub fn client(&self) -> ApiClient {
        let mut client =
            ApiClient::new(api_base_url()).with_csrf_token(storage::csrf_token());
        if let Some(session) = self.current.get_untracked() {
            client = client.with_bearer(session.tokens().access());
        }
        client
    }

    /// Exchanges credentials for a session.
    ///
    /// On success the session is persisted and published to the app; the
    /// returned role tells the caller where to navigate. On failure the
    /// session is untouched and the error carries the server's message.
    /// Never retried.
    pub async fn login(self, email: &str, password: &str) -> Result<Role, ApiError> {
        let gateway = AuthGateway::new(ApiClient::new(api_base_url()));
        let response = gateway.login(email, password).await?;

        let (tokens, claims) = response.into_parts();
        let session = session_store().establish(tokens, claims);
        let role = session.role();

        tracing::info!(role = %role, "session established");
        self.current.set(Some(session));
        Ok(role)
    }

    /// Registers a new account; the caller sends the user to the login
    /// page on success.
    pub async fn register(self, request: &RegisterRequest) -> Result<(), ApiError> {
        let client = ApiClient::new(api_base_url()).with_csrf_token(storage::csrf_token());
        AuthGateway::new(client).register(request).await
    }

    /// Destroys the session locally.
    ///
    /// The API holds no revocation contract, so no server call is made;
    /// the tokens simply stop being presented.
    pub fn logout(self) {
        session_store().clear();
        self.current.set(None);
        tracing::info!("session cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_access::{TokenPair, UserClaims};
    use campus_core::UserId;

    fn context_with(session: Option<Session>) -> SessionContext {
        SessionContext {
            current: RwSignal::new(session),
        }
    }

    fn session(role: Role) -> Session {
        Session::new(
            TokenPair::new("acc", "ref"),
            UserClaims::new(UserId::new(1), role),
        )
    }

    #[test]
    fn empty_context_is_anonymous() {
        let context = context_with(None);
        assert_eq!(context.state(), AccessState::Anonymous);
        assert!(context.current().is_none());
    }

    #[test]
    fn state_follows_the_session_role() {
        let context = context_with(Some(session(Role::Teacher)));
        assert_eq!(context.state(), AccessState::Teacher);
    }

    #[test]
    fn logout_clears_the_published_session() {
        let context = context_with(Some(session(Role::Student)));
        context.logout();
        assert_eq!(context.state(), AccessState::Anonymous);
        assert!(context.current().is_none());
    }

    #[test]
    fn client_points_at_the_configured_api() {
        let client = context_with(None).client();
        assert_eq!(client.base_url(), WebConfig::default().api_base_url);
    }
}
