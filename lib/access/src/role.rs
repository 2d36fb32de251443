//! Role types for front-end access control.
//!
//! Every authenticated user carries exactly one role claim issued by the
//! API at login. The role decides which dashboard subtree the router
//! mounts; it cannot change without a fresh login.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Account role decoded from the token's role claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Enrolled student: sees their courses, grades, and exercises.
    Student,
    /// Teaching staff: sees their courses, rosters, and grade entry.
    Teacher,
    /// Administrative staff: manages the catalog and accounts.
    Secretary,
}

impl Role {
    /// Returns true for student accounts.
    #[must_use]
    pub fn is_student(&self) -> bool {
        matches!(self, Self::Student)
    }

    /// Returns true for teaching accounts.
    #[must_use]
    pub fn is_teacher(&self) -> bool {
        matches!(self, Self::Teacher)
    }

    /// Returns true for secretary accounts.
    #[must_use]
    pub fn is_secretary(&self) -> bool {
        matches!(self, Self::Secretary)
    }

    /// The route a freshly logged-in user of this role is sent to.
    ///
    /// All roles share the dashboard entry; the role router mounts the
    /// matching subtree once there.
    #[must_use]
    pub fn entry_path(&self) -> &'static str {
        "/dashboard"
    }

    /// The wire value of the role claim.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Teacher => "teacher",
            Self::Secretary => "secretary",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_predicates() {
        assert!(Role::Student.is_student());
        assert!(!Role::Student.is_teacher());
        assert!(Role::Teacher.is_teacher());
        assert!(Role::Secretary.is_secretary());
        assert!(!Role::Secretary.is_student());
    }

    #[test]
    fn role_serialization_format() {
        let json = serde_json::to_string(&Role::Student).expect("serialize");
        assert_eq!(json, "\"student\"");

        let json = serde_json::to_string(&Role::Secretary).expect("serialize");
        assert_eq!(json, "\"secretary\"");
    }

    #[test]
    fn role_deserializes_from_wire_value() {
        let role: Role = serde_json::from_str("\"teacher\"").expect("deserialize");
        assert_eq!(role, Role::Teacher);
    }

    #[test]
    fn unknown_role_is_rejected() {
        let result: Result<Role, _> = serde_json::from_str("\"dean\"");
        assert!(result.is_err());
    }

    #[test]
    fn every_role_enters_at_the_dashboard() {
        for role in [Role::Student, Role::Teacher, Role::Secretary] {
            assert_eq!(role.entry_path(), "/dashboard");
        }
    }

    #[test]
    fn role_display_matches_wire_value() {
        assert_eq!(Role::Teacher.to_string(), "teacher");
    }
}
