//! Login and registration against the API's token endpoints.

use campus_access::{Role, TokenPair, UserClaims};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::ApiError;

const TOKEN_PATH: &str = "/api/token/";
const REGISTER_PATH: &str = "/api/register/";

/// Body of a successful login: the token pair plus the user's claims,
/// delivered directly so the client does not need to decode the token at
/// login time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access: String,
    pub refresh: String,
    pub user: UserClaims,
}

impl LoginResponse {
    /// Splits the response into the token pair and the claims.
    #[must_use]
    pub fn into_parts(self) -> (TokenPair, UserClaims) {
        (TokenPair::new(self.access, self.refresh), self.user)
    }
}

/// Registration payload.
///
/// Students carry a study year, teachers a position; the API validates
/// that the field matching the requested role is present.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    pub role: Role,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub study_year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

impl RegisterRequest {
    /// Creates a request with the required fields.
    #[must_use]
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        password_confirm: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            password_confirm: password_confirm.into(),
            role,
            name: None,
            phone: None,
            study_year: None,
            position: None,
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    /// Sets the phone number.
    #[must_use]
    pub fn with_phone(mut self, phone: Option<String>) -> Self {
        self.phone = phone;
        self
    }

    /// Sets the study year (student registrations).
    #[must_use]
    pub fn with_study_year(mut self, study_year: Option<String>) -> Self {
        self.study_year = study_year;
        self
    }

    /// Sets the position (teacher registrations).
    #[must_use]
    pub fn with_position(mut self, position: Option<String>) -> Self {
        self.position = position;
        self
    }
}

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

/// Gateway for the unauthenticated auth endpoints.
#[derive(Debug, Clone)]
pub struct AuthGateway {
    client: ApiClient,
}

impl AuthGateway {
    /// Creates the gateway over the given client.
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Exchanges credentials for a token pair and claims.
    ///
    /// A 200 is the only success; any other status carries the server's
    /// `detail` (wrong password, unknown account) back to the caller.
    /// Never retried.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        self.client
            .post_json(TOKEN_PATH, &Credentials { email, password }, StatusCode::OK)
            .await
    }

    /// Registers a new account.
    ///
    /// A 201 means the account exists and the user can now log in; the
    /// response body is not needed.
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        self.client
            .post_unit(REGISTER_PATH, request, StatusCode::CREATED)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_core::UserId;

    #[test]
    fn login_response_splits_into_tokens_and_claims() {
        let response = LoginResponse {
            access: "acc".to_string(),
            refresh: "ref".to_string(),
            user: UserClaims::new(UserId::new(3), Role::Student),
        };

        let (tokens, claims) = response.into_parts();
        assert_eq!(tokens.access(), "acc");
        assert_eq!(tokens.refresh(), "ref");
        assert_eq!(claims.id, UserId::new(3));
    }

    #[test]
    fn login_response_parses_the_wire_shape() {
        let json = r#"{
            "access": "a.b.c",
            "refresh": "d.e.f",
            "user": {"id": 2, "role": "secretary", "email": "sec@example.edu"}
        }"#;

        let response: LoginResponse = serde_json::from_str(json).expect("deserialize");
        assert_eq!(response.user.role, Role::Secretary);
        assert_eq!(response.user.email.as_deref(), Some("sec@example.edu"));
    }

    #[test]
    fn student_registration_omits_the_position_field() {
        let request = RegisterRequest::new("s@example.edu", "pw", "pw", Role::Student)
            .with_study_year(Some("L2".to_string()));

        let json = serde_json::to_value(&request).expect("serialize");
        assert_eq!(json["role"], "student");
        assert_eq!(json["study_year"], "L2");
        assert!(json.get("position").is_none());
    }

    #[test]
    fn teacher_registration_omits_the_study_year_field() {
        let request = RegisterRequest::new("t@example.edu", "pw", "pw", Role::Teacher)
            .with_position(Some("Lecturer".to_string()));

        let json = serde_json::to_value(&request).expect("serialize");
        assert_eq!(json["role"], "teacher");
        assert_eq!(json["position"], "Lecturer");
        assert!(json.get("study_year").is_none());
    }
}
