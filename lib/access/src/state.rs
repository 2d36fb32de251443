//! The access-state machine behind role routing.
//!
//! The front-end is always in exactly one of four states: anonymous, or
//! authenticated as one of the three roles. The only transition out of
//! anonymous is a successful login; the only transition between roles is a
//! logout followed by a fresh login. This module derives the state from
//! the session so the router never inspects tokens itself.

use crate::role::Role;
use crate::session::Session;

/// Where the client currently stands with the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessState {
    /// No session: every protected route redirects to login.
    Anonymous,
    /// Logged in as a student.
    Student,
    /// Logged in as a teacher.
    Teacher,
    /// Logged in as a secretary.
    Secretary,
}

impl AccessState {
    /// Derives the state from the current session, if any.
    #[must_use]
    pub fn from_session(session: Option<&Session>) -> Self {
        match session {
            Some(session) => session.role().into(),
            None => Self::Anonymous,
        }
    }

    /// Returns the role for authenticated states.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        match self {
            Self::Anonymous => None,
            Self::Student => Some(Role::Student),
            Self::Teacher => Some(Role::Teacher),
            Self::Secretary => Some(Role::Secretary),
        }
    }

    /// Returns true when a session is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        !matches!(self, Self::Anonymous)
    }
}

impl From<Role> for AccessState {
    fn from(role: Role) -> Self {
        match role {
            Role::Student => Self::Student,
            Role::Teacher => Self::Teacher,
            Role::Secretary => Self::Secretary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claims::UserClaims;
    use crate::token::TokenPair;
    use campus_core::UserId;

    fn session_with_role(role: Role) -> Session {
        Session::new(
            TokenPair::new("acc", "ref"),
            UserClaims::new(UserId::new(1), role),
        )
    }

    #[test]
    fn no_session_is_anonymous() {
        let state = AccessState::from_session(None);
        assert_eq!(state, AccessState::Anonymous);
        assert!(!state.is_authenticated());
        assert!(state.role().is_none());
    }

    #[test]
    fn each_role_maps_to_its_own_state() {
        let cases = [
            (Role::Student, AccessState::Student),
            (Role::Teacher, AccessState::Teacher),
            (Role::Secretary, AccessState::Secretary),
        ];

        for (role, expected) in cases {
            let session = session_with_role(role);
            let state = AccessState::from_session(Some(&session));
            assert_eq!(state, expected);
            assert!(state.is_authenticated());
            assert_eq!(state.role(), Some(role));
        }
    }

    #[test]
    fn state_tracks_the_session_not_history() {
        // A role change is only observable through a replacement session;
        // deriving from the new session is the whole transition.
        let student = session_with_role(Role::Student);
        assert_eq!(
            AccessState::from_session(Some(&student)),
            AccessState::Student
        );

        let teacher = session_with_role(Role::Teacher);
        assert_eq!(
            AccessState::from_session(Some(&teacher)),
            AccessState::Teacher
        );

        assert_eq!(AccessState::from_session(None), AccessState::Anonymous);
    }
}
