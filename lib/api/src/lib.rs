//! Authenticated REST gateways for the campus front-end.
//!
//! Every gateway wraps one resource of the upstream API behind a shared
//! [`ApiClient`] that attaches the bearer token, adds the CSRF header on
//! state-changing verbs, and interprets status codes directly (200/201/204
//! per verb; anything else is a rejection carrying the server's `detail`
//! message). There is no retry, deduplication, or cancellation: each call
//! is one request, and the caller decides what a failure means.

pub mod auth;
pub mod class_sessions;
pub mod client;
pub mod courses;
pub mod enrollments;
pub mod error;
pub mod exercises;
pub mod grades;
pub mod questions;
pub mod students;
pub mod teachers;
pub mod types;

// Re-export main types at crate root
pub use auth::{AuthGateway, LoginResponse, RegisterRequest};
pub use class_sessions::ClassSessionsGateway;
pub use client::ApiClient;
pub use courses::CoursesGateway;
pub use enrollments::EnrollmentsGateway;
pub use error::ApiError;
pub use exercises::ExercisesGateway;
pub use grades::GradesGateway;
pub use questions::QuestionsGateway;
pub use students::StudentsGateway;
pub use teachers::TeachersGateway;
