use crate::http::server::router;
use crate::http::state::HttpServerState;
use crate::http::views::SessionView;
use crate::session::SessionStore;
/// HTTP testing utilities
use anyhow::Result;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt; // for `oneshot` and `ready`

/// HTTP test client for making requests to our app
pub struct TestApp {
    app: axum::Router,
    sessions: Arc<SessionStore>,
}

impl TestApp {
    /// Create a new test app with a default session store
    pub fn new() -> Self {
        Self::with_sessions(SessionStore::default())
    }

    /// Create a new test app around the provided session store
    pub fn with_sessions(sessions: SessionStore) -> Self {
        let sessions = Arc::new(sessions);
        let state = HttpServerState {
            name: Arc::new("AttrGen Test".to_string()),
            sessions: sessions.clone(),
        };

        // Same routes as production, without the transport middleware
        Self {
            app: router(state),
            sessions,
        }
    }

    pub fn sessions(&self) -> Arc<SessionStore> {
        self.sessions.clone()
    }

    async fn send(&self, method: &str, path: &str, body: Option<String>) -> Result<TestResponse> {
        let builder = Request::builder().method(method).uri(path);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json))?,
            None => builder.body(Body::empty())?,
        };

        let response = self.app.clone().oneshot(request).await?;
        Ok(TestResponse::new(response).await)
    }

    /// Send a GET request
    pub async fn get(&self, path: &str) -> Result<TestResponse> {
        self.send("GET", path, None).await
    }

    /// Send a POST request without body
    pub async fn post(&self, path: &str) -> Result<TestResponse> {
        self.send("POST", path, None).await
    }

    /// Send a PUT request with JSON data
    pub async fn put_json(&self, path: &str, json_data: &str) -> Result<TestResponse> {
        self.send("PUT", path, Some(json_data.to_string())).await
    }

    /// Send a DELETE request
    pub async fn delete(&self, path: &str) -> Result<TestResponse> {
        self.send("DELETE", path, None).await
    }

    /// Start a session and return its view
    pub async fn create_session(&self) -> Result<SessionView> {
        let response = self.post("/api/v1/sessions").await?;
        response.assert_status(StatusCode::CREATED);
        response.json()
    }

    /// Fill attribute fields 1..=n with the given texts, adding fields as needed
    pub async fn fill_fields(&self, session: &SessionView, texts: &[&str]) -> Result<()> {
        let base = format!("/api/v1/sessions/{}", session.session_id);
        for _ in session.field_count..texts.len() {
            self.post(&format!("{}/fields", base))
                .await?
                .assert_status(StatusCode::OK);
        }
        for (idx, text) in texts.iter().enumerate() {
            self.put_json(
                &format!("{}/fields/{}", base, idx + 1),
                &json!({ "text": text }).to_string(),
            )
            .await?
            .assert_status(StatusCode::OK);
        }
        Ok(())
    }

    /// Set the prefix of a session
    pub async fn set_prefix(&self, session: &SessionView, prefix: &str) -> Result<TestResponse> {
        self.put_json(
            &format!("/api/v1/sessions/{}/prefix", session.session_id),
            &json!({ "prefix": prefix }).to_string(),
        )
        .await
    }

    /// Trigger generation for a session
    pub async fn generate(&self, session: &SessionView) -> Result<TestResponse> {
        self.post(&format!("/api/v1/sessions/{}/generate", session.session_id))
            .await
    }

    /// Download the workbook of a session
    pub async fn download(&self, session: &SessionView) -> Result<TestResponse> {
        self.get(&format!("/api/v1/sessions/{}/download", session.session_id))
            .await
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Test response wrapper for easier assertions
pub struct TestResponse {
    status: StatusCode,
    headers: HeaderMap,
    body_bytes: Vec<u8>,
    body: String,
}

impl TestResponse {
    async fn new(response: axum::response::Response) -> Self {
        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap_or_default()
            .to_vec();
        let body = String::from_utf8_lossy(&body_bytes).to_string();

        Self {
            status,
            headers,
            body_bytes,
            body,
        }
    }

    /// Get response status
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Get response body as string
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Get response body as raw bytes
    pub fn body_bytes(&self) -> &[u8] {
        &self.body_bytes
    }

    /// Check if response is successful (2xx)
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Parse response body as JSON
    pub fn json<T>(&self) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        serde_json::from_str(&self.body).map_err(Into::into)
    }

    /// Assert status code
    pub fn assert_status(&self, expected: StatusCode) -> &Self {
        assert_eq!(
            self.status, expected,
            "Expected status {}, got {}. Body: {}",
            expected, self.status, self.body
        );
        self
    }

    /// Assert response body contains text
    pub fn assert_body_contains(&self, text: &str) -> &Self {
        assert!(
            self.body.contains(text),
            "Expected body to contain '{}', but body was: {}",
            text,
            self.body
        );
        self
    }

    /// Get response headers
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Assert specific header value
    pub fn assert_header(&self, name: &str, expected: &str) -> &Self {
        let actual = self
            .headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("<missing>");
        assert_eq!(
            actual, expected,
            "Expected header '{}' to be '{}', but was '{}'",
            name, expected, actual
        );
        self
    }

    /// Assert content-type header
    pub fn assert_content_type(&self, expected: &str) -> &Self {
        self.assert_header("content-type", expected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_helpers() {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", "application/json".parse().unwrap());

        let response = TestResponse {
            status: StatusCode::OK,
            headers,
            body_bytes: b"test body".to_vec(),
            body: "test body".to_string(),
        };

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.body(), "test body");
        assert_eq!(response.body_bytes(), b"test body");
        assert!(response.is_success());
        response.assert_content_type("application/json");
    }
}
