//! Shared HTTP client for all gateways.
//!
//! Wraps a `reqwest::Client` with the three pieces of ambient request
//! state every gateway needs: the API base URL, the bearer token, and the
//! CSRF token the API hands out in a cookie. On wasm targets reqwest
//! delegates to the browser's fetch, so the same gateways serve both
//! native and hydrated builds.

use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Header the API checks on state-changing requests.
const CSRF_HEADER: &str = "X-CSRFToken";

/// Error body shape used across the API.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Authenticated HTTP client shared by the gateways.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    bearer: Option<String>,
    csrf: Option<String>,
}

impl ApiClient {
    /// Creates a client for the given API base URL.
    ///
    /// Trailing slashes are trimmed so gateway paths can always start with
    /// `/`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self {
            http: reqwest::Client::new(),
            base_url,
            bearer: None,
            csrf: None,
        }
    }

    /// Attaches the bearer token sent as `Authorization: Bearer <token>`.
    #[must_use]
    pub fn with_bearer(mut self, token: impl Into<String>) -> Self {
        self.bearer = Some(token.into());
        self
    }

    /// Attaches the CSRF token sent on state-changing verbs.
    #[must_use]
    pub fn with_csrf_token(mut self, token: Option<String>) -> Self {
        self.csrf = token;
        self
    }

    /// Returns the configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let needs_csrf = csrf_required(&method);
        let mut builder = self
            .http
            .request(method, self.url(path))
            .header(CONTENT_TYPE, "application/json");

        if let Some(token) = &self.bearer {
            builder = builder.bearer_auth(token);
        }

        if needs_csrf {
            if let Some(csrf) = &self.csrf {
                builder = builder.header(CSRF_HEADER, csrf);
            }
        }

        builder
    }

    /// GET expecting 200 with a JSON body.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = send(self.request(Method::GET, path)).await?;
        expect_json(response, StatusCode::OK).await
    }

    /// POST expecting the given status with a JSON body.
    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        expected: StatusCode,
    ) -> Result<T, ApiError> {
        let response = send(self.request(Method::POST, path).json(body)).await?;
        expect_json(response, expected).await
    }

    /// POST expecting the given status, body discarded.
    pub(crate) async fn post_unit<B: Serialize>(
        &self,
        path: &str,
        body: &B,
        expected: StatusCode,
    ) -> Result<(), ApiError> {
        let response = send(self.request(Method::POST, path).json(body)).await?;
        expect_unit(response, expected).await
    }

    /// PUT expecting 200 with a JSON body.
    pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = send(self.request(Method::PUT, path).json(body)).await?;
        expect_json(response, StatusCode::OK).await
    }

    /// DELETE expecting 204.
    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = send(self.request(Method::DELETE, path)).await?;
        expect_unit(response, StatusCode::NO_CONTENT).await
    }
}

/// True for the verbs the API requires a CSRF header on.
fn csrf_required(method: &Method) -> bool {
    matches!(*method, Method::POST | Method::PUT | Method::PATCH | Method::DELETE)
}

async fn send(builder: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
    builder.send().await.map_err(|e| {
        tracing::debug!(error = %e, "request did not complete");
        ApiError::Transport {
            reason: e.to_string(),
        }
    })
}

async fn expect_json<T: DeserializeOwned>(
    response: reqwest::Response,
    expected: StatusCode,
) -> Result<T, ApiError> {
    let status = response.status();
    if status != expected {
        return Err(rejection(status, response).await);
    }

    response.json().await.map_err(|e| ApiError::Decode {
        reason: e.to_string(),
    })
}

async fn expect_unit(response: reqwest::Response, expected: StatusCode) -> Result<(), ApiError> {
    let status = response.status();
    if status != expected {
        return Err(rejection(status, response).await);
    }
    Ok(())
}

/// Builds the rejection error, pulling the server's `detail` out of the
/// body when it has one.
async fn rejection(status: StatusCode, response: reqwest::Response) -> ApiError {
    let detail = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.detail);

    ApiError::Rejected {
        status: status.as_u16(),
        detail,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::new("http://127.0.0.1:8000")
    }

    #[test]
    fn base_url_trailing_slashes_are_trimmed() {
        let client = ApiClient::new("http://127.0.0.1:8000///");
        assert_eq!(client.base_url(), "http://127.0.0.1:8000");
        assert_eq!(client.url("/api/courses/"), "http://127.0.0.1:8000/api/courses/");
    }

    #[test]
    fn csrf_required_only_for_state_changing_verbs() {
        assert!(!csrf_required(&Method::GET));
        assert!(!csrf_required(&Method::HEAD));
        assert!(csrf_required(&Method::POST));
        assert!(csrf_required(&Method::PUT));
        assert!(csrf_required(&Method::PATCH));
        assert!(csrf_required(&Method::DELETE));
    }

    #[test]
    fn bearer_header_is_attached_when_present() {
        let request = client()
            .with_bearer("token-123")
            .request(Method::GET, "/api/courses/")
            .build()
            .expect("build request");

        let auth = request.headers().get("authorization").expect("header");
        assert_eq!(auth.to_str().expect("ascii"), "Bearer token-123");
    }

    #[test]
    fn bearer_header_is_absent_without_a_token() {
        let request = client()
            .request(Method::GET, "/api/courses/")
            .build()
            .expect("build request");

        assert!(request.headers().get("authorization").is_none());
    }

    #[test]
    fn csrf_header_is_attached_on_post_only() {
        let client = client().with_csrf_token(Some("csrf-abc".to_string()));

        let post = client
            .request(Method::POST, "/api/courses/")
            .build()
            .expect("build request");
        assert_eq!(
            post.headers().get(CSRF_HEADER).expect("header"),
            "csrf-abc"
        );

        let get = client
            .request(Method::GET, "/api/courses/")
            .build()
            .expect("build request");
        assert!(get.headers().get(CSRF_HEADER).is_none());
    }

    #[test]
    fn requests_are_json_typed() {
        let request = client()
            .request(Method::GET, "/api/students/")
            .build()
            .expect("build request");

        assert_eq!(
            request.headers().get("content-type").expect("header"),
            "application/json"
        );
    }
}
