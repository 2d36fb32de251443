//! Gateway for questions posted against class sessions.
//!
//! This is the messaging surface of the platform: students post questions
//! on a session, teachers read them from the session view.

use campus_core::ClassSessionId;
use reqwest::StatusCode;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::{Question, QuestionDraft};

const LIST_PATH: &str = "/api/questions/";

fn by_class_session_path(class_session: ClassSessionId) -> String {
    format!("/api/questions/?class_session={class_session}")
}

/// Gateway for question operations.
#[derive(Debug, Clone)]
pub struct QuestionsGateway {
    client: ApiClient,
}

impl QuestionsGateway {
    /// Creates the gateway over the given client.
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Lists the questions posted on one class session.
    pub async fn list_by_class_session(
        &self,
        class_session: ClassSessionId,
    ) -> Result<Vec<Question>, ApiError> {
        self.client
            .get_json(&by_class_session_path(class_session))
            .await
    }

    /// Posts a question.
    pub async fn post(&self, draft: &QuestionDraft) -> Result<Question, ApiError> {
        self.client
            .post_json(LIST_PATH, draft, StatusCode::CREATED)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_session_filter_uses_a_query_parameter() {
        assert_eq!(
            by_class_session_path(ClassSessionId::new(13)),
            "/api/questions/?class_session=13"
        );
    }
}
