//! Gateway for course enrollments.

use campus_core::{CourseId, EnrollmentId, UserId};
use reqwest::StatusCode;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::{Enrollment, EnrollmentDraft};

const LIST_PATH: &str = "/api/enrollments/";

fn detail_path(id: EnrollmentId) -> String {
    format!("/api/enrollments/{id}/")
}

fn by_course_path(course: CourseId) -> String {
    format!("/api/enrollments/?course={course}")
}

fn by_student_path(student: UserId) -> String {
    format!("/api/enrollments/?student={student}")
}

/// Gateway for enrollment operations.
#[derive(Debug, Clone)]
pub struct EnrollmentsGateway {
    client: ApiClient,
}

impl EnrollmentsGateway {
    /// Creates the gateway over the given client.
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Lists the enrollments for one course — the course roster.
    pub async fn list_by_course(&self, course: CourseId) -> Result<Vec<Enrollment>, ApiError> {
        self.client.get_json(&by_course_path(course)).await
    }

    /// Lists the enrollments of one student.
    pub async fn list_by_student(&self, student: UserId) -> Result<Vec<Enrollment>, ApiError> {
        self.client.get_json(&by_student_path(student)).await
    }

    /// Enrolls a student in a course.
    pub async fn create(&self, draft: &EnrollmentDraft) -> Result<Enrollment, ApiError> {
        self.client
            .post_json(LIST_PATH, draft, StatusCode::CREATED)
            .await
    }

    /// Withdraws an enrollment.
    pub async fn delete(&self, id: EnrollmentId) -> Result<(), ApiError> {
        self.client.delete(&detail_path(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_filter_uses_a_query_parameter() {
        assert_eq!(
            by_course_path(CourseId::new(3)),
            "/api/enrollments/?course=3"
        );
    }

    #[test]
    fn student_filter_uses_a_query_parameter() {
        assert_eq!(
            by_student_path(UserId::new(5)),
            "/api/enrollments/?student=5"
        );
    }

    #[test]
    fn detail_path_embeds_the_id() {
        assert_eq!(detail_path(EnrollmentId::new(44)), "/api/enrollments/44/");
    }
}
