//! Gateway for the course catalog.

use campus_core::{CourseId, UserId};
use reqwest::StatusCode;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::{Course, CourseDraft};

const LIST_PATH: &str = "/api/courses/";

fn detail_path(id: CourseId) -> String {
    format!("/api/courses/{id}/")
}

fn by_teacher_path(teacher: UserId) -> String {
    format!("/api/courses/?teacher={teacher}")
}

/// Gateway for course catalog operations.
#[derive(Debug, Clone)]
pub struct CoursesGateway {
    client: ApiClient,
}

impl CoursesGateway {
    /// Creates the gateway over the given client.
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Lists the whole catalog.
    pub async fn list(&self) -> Result<Vec<Course>, ApiError> {
        self.client.get_json(LIST_PATH).await
    }

    /// Lists the courses taught by one teacher.
    pub async fn list_by_teacher(&self, teacher: UserId) -> Result<Vec<Course>, ApiError> {
        self.client.get_json(&by_teacher_path(teacher)).await
    }

    /// Fetches a single course.
    pub async fn get(&self, id: CourseId) -> Result<Course, ApiError> {
        self.client.get_json(&detail_path(id)).await
    }

    /// Adds a course to the catalog.
    pub async fn create(&self, draft: &CourseDraft) -> Result<Course, ApiError> {
        self.client
            .post_json(LIST_PATH, draft, StatusCode::CREATED)
            .await
    }

    /// Replaces a course's fields.
    pub async fn update(&self, id: CourseId, draft: &CourseDraft) -> Result<Course, ApiError> {
        self.client.put_json(&detail_path(id), draft).await
    }

    /// Removes a course from the catalog.
    pub async fn delete(&self, id: CourseId) -> Result<(), ApiError> {
        self.client.delete(&detail_path(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_path_embeds_the_id() {
        assert_eq!(detail_path(CourseId::new(12)), "/api/courses/12/");
    }

    #[test]
    fn teacher_filter_uses_a_query_parameter() {
        assert_eq!(by_teacher_path(UserId::new(4)), "/api/courses/?teacher=4");
    }
}
