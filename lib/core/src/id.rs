//! Strongly-typed ID types for domain entities.
//!
//! The upstream REST API issues integer primary keys, so every ID wraps an
//! `i64`. The newtypes exist to keep a course ID from ever being handed to
//! an endpoint that expects a student ID.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Error returned when parsing an ID from a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    /// The type of ID that failed to parse.
    pub id_type: &'static str,
    /// The reason for the parse failure.
    pub reason: String,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse {}: {}", self.id_type, self.reason)
    }
}

impl std::error::Error for ParseIdError {}

/// Macro to generate a strongly-typed ID wrapper around the API's integer keys.
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Creates an ID from a raw integer key.
            #[must_use]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Returns the underlying integer key.
            #[must_use]
            pub const fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<i64>()
                    .map(Self)
                    .map_err(|e: ParseIntError| ParseIdError {
                        id_type: stringify!($name),
                        reason: e.to_string(),
                    })
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(
    /// Unique identifier for a user (student, teacher, or secretary account).
    UserId
);

define_id!(
    /// Unique identifier for a course in the catalog.
    CourseId
);

define_id!(
    /// Unique identifier for an enrollment linking a student to a course.
    EnrollmentId
);

define_id!(
    /// Unique identifier for a grade record.
    GradeId
);

define_id!(
    /// Unique identifier for a scheduled class session.
    ClassSessionId
);

define_id!(
    /// Unique identifier for an exercise attached to a course.
    ExerciseId
);

define_id!(
    /// Unique identifier for an exercise submission.
    SubmissionId
);

define_id!(
    /// Unique identifier for a question posted against a class session.
    QuestionId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_display_format() {
        let id = UserId::new(42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn parse_valid_id() {
        let id: CourseId = "17".parse().expect("should parse");
        assert_eq!(id.as_i64(), 17);
    }

    #[test]
    fn parse_invalid_id() {
        let result: Result<CourseId, _> = "not_a_number".parse();
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.id_type, "CourseId");
    }

    #[test]
    fn id_equality() {
        let id1 = UserId::new(7);
        let id2 = UserId::from(7);
        assert_eq!(id1, id2);
    }

    #[test]
    fn id_hash() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(CourseId::new(1));
        set.insert(CourseId::new(2));
        set.insert(CourseId::new(1)); // duplicate

        assert_eq!(set.len(), 2);
    }

    #[test]
    fn id_serde_is_transparent() {
        let id = EnrollmentId::new(9);
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "9");
        let parsed: EnrollmentId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(id, parsed);
    }
}
