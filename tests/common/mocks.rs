//! Mock implementations for test fixtures.
//!
//! This module re-exports the mock implementations from
//! `mindnest::adapters::mock` and adds builder-style configuration.

pub use mindnest::adapters::mock::{InMemoryStorage, MockHttpClient, MockResponse};
pub use mindnest::traits::HttpError;

/// Configuration for setting up mock HTTP responses.
pub struct MockHttpConfig {
    client: MockHttpClient,
}

impl MockHttpConfig {
    /// Creates a new mock HTTP configuration.
    pub fn new() -> Self {
        Self {
            client: MockHttpClient::new(),
        }
    }

    /// Configures a JSON response for a method and path under the test base URL.
    pub fn with_json(self, method: &str, path: &str, status: u16, json: serde_json::Value) -> Self {
        self.client.set_method_response(
            method,
            &format!("{}{}", super::BASE_URL, path),
            MockResponse::json(status, json),
        );
        self
    }

    /// Configures a transport failure for a method and path.
    pub fn with_connection_error(self, method: &str, path: &str) -> Self {
        self.client.set_method_response(
            method,
            &format!("{}{}", super::BASE_URL, path),
            MockResponse::Error(HttpError::Connect("connection refused".to_string())),
        );
        self
    }

    /// Configures the response for unmatched requests.
    #[allow(dead_code)]
    pub fn with_default(self, status: u16, json: serde_json::Value) -> Self {
        self.client
            .set_default_response(MockResponse::json(status, json));
        self
    }

    /// Builds the configured MockHttpClient.
    pub fn build(self) -> MockHttpClient {
        self.client
    }
}

impl Default for MockHttpConfig {
    fn default() -> Self {
        Self::new()
    }
}
