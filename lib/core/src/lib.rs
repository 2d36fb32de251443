//! Core domain types and utilities for the campus platform.
//!
//! This crate provides the foundational types, error handling, and shared
//! utilities used throughout the campus university-management front-end.

pub mod error;
pub mod id;

pub use error::Result;
pub use id::{
    ClassSessionId, CourseId, EnrollmentId, ExerciseId, GradeId, QuestionId, SubmissionId, UserId,
};
