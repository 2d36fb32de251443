//! Gateway for teacher account administration.

use campus_core::UserId;
use reqwest::StatusCode;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::{TeacherDraft, TeacherRecord};

const LIST_PATH: &str = "/api/teachers/";

fn detail_path(id: UserId) -> String {
    format!("/api/teachers/{id}/")
}

/// Gateway for teacher account operations.
#[derive(Debug, Clone)]
pub struct TeachersGateway {
    client: ApiClient,
}

impl TeachersGateway {
    /// Creates the gateway over the given client.
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Lists every teacher account.
    pub async fn list(&self) -> Result<Vec<TeacherRecord>, ApiError> {
        self.client.get_json(LIST_PATH).await
    }

    /// Creates a teacher account.
    pub async fn create(&self, draft: &TeacherDraft) -> Result<TeacherRecord, ApiError> {
        self.client
            .post_json(LIST_PATH, draft, StatusCode::CREATED)
            .await
    }

    /// Removes a teacher account.
    pub async fn delete(&self, id: UserId) -> Result<(), ApiError> {
        self.client.delete(&detail_path(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_path_embeds_the_id() {
        assert_eq!(detail_path(UserId::new(8)), "/api/teachers/8/");
    }
}
