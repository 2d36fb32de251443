//! Gateway for grade records.

use campus_core::UserId;
use reqwest::StatusCode;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::{Grade, GradeDraft};

const LIST_PATH: &str = "/api/grades/";

fn by_student_path(student: UserId) -> String {
    format!("/api/grades/?student={student}")
}

/// Gateway for grade operations.
#[derive(Debug, Clone)]
pub struct GradesGateway {
    client: ApiClient,
}

impl GradesGateway {
    /// Creates the gateway over the given client.
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Lists the grades of one student.
    pub async fn list_by_student(&self, student: UserId) -> Result<Vec<Grade>, ApiError> {
        self.client.get_json(&by_student_path(student)).await
    }

    /// Records a grade.
    pub async fn create(&self, draft: &GradeDraft) -> Result<Grade, ApiError> {
        self.client
            .post_json(LIST_PATH, draft, StatusCode::CREATED)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn student_filter_uses_a_query_parameter() {
        assert_eq!(by_student_path(UserId::new(2)), "/api/grades/?student=2");
    }
}
