//! Gateway for exercises and their submissions.

use campus_core::{CourseId, ExerciseId};
use reqwest::StatusCode;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::{Exercise, ExerciseDraft, Submission, SubmissionDraft};

const EXERCISES_PATH: &str = "/api/exercises/";
const SUBMISSIONS_PATH: &str = "/api/submissions/";

fn exercises_by_course_path(course: CourseId) -> String {
    format!("/api/exercises/?course={course}")
}

fn submissions_by_exercise_path(exercise: ExerciseId) -> String {
    format!("/api/submissions/?exercise={exercise}")
}

/// Gateway for exercise and submission operations.
#[derive(Debug, Clone)]
pub struct ExercisesGateway {
    client: ApiClient,
}

impl ExercisesGateway {
    /// Creates the gateway over the given client.
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Lists the exercises published for one course.
    pub async fn list_by_course(&self, course: CourseId) -> Result<Vec<Exercise>, ApiError> {
        self.client.get_json(&exercises_by_course_path(course)).await
    }

    /// Publishes an exercise.
    pub async fn create(&self, draft: &ExerciseDraft) -> Result<Exercise, ApiError> {
        self.client
            .post_json(EXERCISES_PATH, draft, StatusCode::CREATED)
            .await
    }

    /// Lists the submissions handed in for one exercise.
    pub async fn submissions(&self, exercise: ExerciseId) -> Result<Vec<Submission>, ApiError> {
        self.client
            .get_json(&submissions_by_exercise_path(exercise))
            .await
    }

    /// Hands in a submission.
    pub async fn submit(&self, draft: &SubmissionDraft) -> Result<Submission, ApiError> {
        self.client
            .post_json(SUBMISSIONS_PATH, draft, StatusCode::CREATED)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_filter_uses_a_query_parameter() {
        assert_eq!(
            exercises_by_course_path(CourseId::new(9)),
            "/api/exercises/?course=9"
        );
    }

    #[test]
    fn exercise_filter_uses_a_query_parameter() {
        assert_eq!(
            submissions_by_exercise_path(ExerciseId::new(2)),
            "/api/submissions/?exercise=2"
        );
    }
}
