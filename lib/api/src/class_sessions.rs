//! Gateway for scheduled class sessions.

use campus_core::{ClassSessionId, CourseId};
use reqwest::StatusCode;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::{ClassSession, ClassSessionDraft};

const LIST_PATH: &str = "/api/class-sessions/";

fn detail_path(id: ClassSessionId) -> String {
    format!("/api/class-sessions/{id}/")
}

fn by_course_path(course: CourseId) -> String {
    format!("/api/class-sessions/?course={course}")
}

/// Gateway for class session operations.
#[derive(Debug, Clone)]
pub struct ClassSessionsGateway {
    client: ApiClient,
}

impl ClassSessionsGateway {
    /// Creates the gateway over the given client.
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Lists the sessions scheduled for one course.
    pub async fn list_by_course(&self, course: CourseId) -> Result<Vec<ClassSession>, ApiError> {
        self.client.get_json(&by_course_path(course)).await
    }

    /// Schedules a session.
    pub async fn create(&self, draft: &ClassSessionDraft) -> Result<ClassSession, ApiError> {
        self.client
            .post_json(LIST_PATH, draft, StatusCode::CREATED)
            .await
    }

    /// Cancels a session.
    pub async fn delete(&self, id: ClassSessionId) -> Result<(), ApiError> {
        self.client.delete(&detail_path(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_filter_uses_a_query_parameter() {
        assert_eq!(
            by_course_path(CourseId::new(6)),
            "/api/class-sessions/?course=6"
        );
    }

    #[test]
    fn detail_path_embeds_the_id() {
        assert_eq!(
            detail_path(ClassSessionId::new(10)),
            "/api/class-sessions/10/"
        );
    }
}
