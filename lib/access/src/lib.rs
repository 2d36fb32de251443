//! Session and access management for the campus front-end.
//!
//! This crate provides:
//! - Role handling (`Role`, decoded from the API's role claim)
//! - Bearer token types (`TokenPair`, `UserClaims`)
//! - Session management (`Session`, `SessionStore`)
//! - The access-state machine that drives role routing (`AccessState`)
//!
//! # Access Control Model
//!
//! The client holds a single session at a time. A session is created from a
//! successful login response, persisted to durable client storage, and
//! rehydrated on the next load by decoding the persisted access token. The
//! role claim inside a session never changes; moving between roles requires
//! a fresh login.
//!
//! # Example
//!
//! ```
//! use campus_access::{MemoryStorage, Role, SessionStore, TokenPair, UserClaims};
//! use campus_core::UserId;
//!
//! let claims = UserClaims::new(UserId::new(1), Role::Student)
//!     .with_email(Some("alice@example.edu".to_string()))
//!     .with_name(Some("Alice Martin".to_string()));
//! let tokens = TokenPair::new("access-token", "refresh-token");
//!
//! let store = SessionStore::new(MemoryStorage::default());
//! let session = store.establish(tokens, claims);
//!
//! assert!(session.role().is_student());
//! assert_eq!(session.claims().email.as_deref(), Some("alice@example.edu"));
//! ```

pub mod claims;
pub mod error;
pub mod role;
pub mod session;
pub mod state;
pub mod store;
pub mod token;

// Re-export main types at crate root
pub use claims::UserClaims;
pub use error::SessionError;
pub use role::Role;
pub use session::Session;
pub use state::AccessState;
pub use store::{MemoryStorage, SessionStorage, SessionStore};
pub use token::TokenPair;
