//! Gateway for student account administration.

use campus_core::UserId;
use reqwest::StatusCode;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::{StudentDraft, StudentRecord};

const LIST_PATH: &str = "/api/students/";

fn detail_path(id: UserId) -> String {
    format!("/api/students/{id}/")
}

/// Gateway for student account operations.
#[derive(Debug, Clone)]
pub struct StudentsGateway {
    client: ApiClient,
}

impl StudentsGateway {
    /// Creates the gateway over the given client.
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Lists every student account.
    pub async fn list(&self) -> Result<Vec<StudentRecord>, ApiError> {
        self.client.get_json(LIST_PATH).await
    }

    /// Fetches one student account.
    pub async fn get(&self, id: UserId) -> Result<StudentRecord, ApiError> {
        self.client.get_json(&detail_path(id)).await
    }

    /// Creates a student account.
    pub async fn create(&self, draft: &StudentDraft) -> Result<StudentRecord, ApiError> {
        self.client
            .post_json(LIST_PATH, draft, StatusCode::CREATED)
            .await
    }

    /// Replaces a student account's fields.
    pub async fn update(&self, id: UserId, draft: &StudentDraft) -> Result<StudentRecord, ApiError> {
        self.client.put_json(&detail_path(id), draft).await
    }

    /// Removes a student account.
    pub async fn delete(&self, id: UserId) -> Result<(), ApiError> {
        self.client.delete(&detail_path(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_path_embeds_the_id() {
        assert_eq!(detail_path(UserId::new(31)), "/api/students/31/");
    }
}
