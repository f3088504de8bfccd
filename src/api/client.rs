//! REST client for the MindNest backend.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

use super::types::{
    ChangePasswordRequest, ChatReply, ChatRequest, EmailRequest, LoginRequest, LoginResponse,
    MessageResponse, RegisterRequest, RegisterResponse, ResetPasswordRequest, SecurityQuestions,
};
use crate::adapters::ReqwestHttpClient;
use crate::config::AppConfig;
use crate::error::{MindnestResult, NetworkError};
use crate::models::{ChatMessage, Language, ResourceItem, UserProfile};
use crate::storage;
use crate::traits::{HttpClient, KeyValueStore, Method, Request};

/// Client for the backend REST API.
///
/// Every request carries `Content-Type: application/json` and, when a user
/// id is stored, `Authorization: Bearer <user_id>`. The credential is read
/// from storage per request, so logging in or out takes effect immediately.
#[derive(Clone)]
pub struct ApiClient {
    http: Arc<dyn HttpClient>,
    store: Arc<dyn KeyValueStore>,
    base_url: String,
    timeout_secs: u64,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ApiClient {
    /// Create a client over an arbitrary transport.
    pub fn new(
        http: Arc<dyn HttpClient>,
        store: Arc<dyn KeyValueStore>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            http,
            store,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout_secs: crate::config::REQUEST_TIMEOUT.as_secs(),
        }
    }

    /// Create a reqwest-backed client from the app configuration.
    pub fn from_config(config: &AppConfig, store: Arc<dyn KeyValueStore>) -> MindnestResult<Self> {
        let http = ReqwestHttpClient::with_timeout(config.request_timeout)
            .map_err(|e| NetworkError::Other(e.to_string()))?;
        let mut client = Self::new(Arc::new(http), store, config.base_url());
        client.timeout_secs = config.request_timeout.as_secs();
        Ok(client)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The storage the credential is read from.
    pub fn store(&self) -> &Arc<dyn KeyValueStore> {
        &self.store
    }

    /// Start a request with the JSON content type and, when a user id is
    /// stored, the bearer credential.
    ///
    /// A storage failure is logged and the request goes out unauthenticated.
    async fn request(&self, method: Method, path: &str) -> Request {
        let request = Request::new(method, format!("{}{}", self.base_url, path))
            .header("Content-Type", "application/json");

        match storage::load_string(self.store.as_ref(), storage::USER_ID).await {
            Ok(Some(user_id)) => request.header("Authorization", format!("Bearer {}", user_id)),
            Ok(None) => request,
            Err(e) => {
                warn!("Error reading token: {}", e);
                request
            }
        }
    }

    /// Send, then turn transport failures and non-2xx answers into errors
    /// and decode the body.
    async fn call<T: DeserializeOwned>(&self, request: Request) -> MindnestResult<T> {
        debug!("{} {}", request.method, request.url);
        let url = request.url.clone();
        let response = self
            .http
            .send(request)
            .await
            .map_err(|e| NetworkError::from_transport(e, &url, self.timeout_secs))?;

        if !response.is_success() {
            debug!(status = response.status, url = %url, "request rejected");
            return Err(NetworkError::Rejected {
                status: response.status,
                body: response.text(),
            }
            .into());
        }
        response
            .json()
            .map_err(|e| NetworkError::Malformed(e.to_string()).into())
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> MindnestResult<T> {
        let request = self.request(Method::Get, path).await;
        self.call(request).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> MindnestResult<T> {
        let request = self.request(Method::Delete, path).await;
        self.call(request).await
    }

    async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> MindnestResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_string(body).map_err(|e| NetworkError::Other(e.to_string()))?;
        let request = self.request(method, path).await.body(body);
        self.call(request).await
    }

    // ------------------------------------------------------------------
    // Chat
    // ------------------------------------------------------------------

    /// `GET /chat/history`
    pub async fn fetch_history(&self) -> MindnestResult<Vec<ChatMessage>> {
        let history: Option<Vec<ChatMessage>> = self.get("/chat/history").await?;
        Ok(history.unwrap_or_default())
    }

    /// `POST /chat`
    pub async fn send_chat(&self, message: &str) -> MindnestResult<ChatReply> {
        self.send_json(Method::Post, "/chat", &ChatRequest { message }).await
    }

    /// `DELETE /chat/history`
    pub async fn delete_history(&self) -> MindnestResult<MessageResponse> {
        self.delete("/chat/history").await
    }

    // ------------------------------------------------------------------
    // Auth
    // ------------------------------------------------------------------

    /// `POST /auth/login`
    pub async fn login(&self, email: &str, password: &str) -> MindnestResult<LoginResponse> {
        self.send_json(Method::Post, "/auth/login", &LoginRequest { email, password })
            .await
    }

    /// `POST /auth/register`
    pub async fn register(&self, request: &RegisterRequest) -> MindnestResult<RegisterResponse> {
        self.send_json(Method::Post, "/auth/register", request).await
    }

    /// `GET /auth/me`
    pub async fn fetch_profile(&self) -> MindnestResult<UserProfile> {
        self.get("/auth/me").await
    }

    /// `PUT /auth/me`
    pub async fn update_profile(&self, profile: &UserProfile) -> MindnestResult<serde_json::Value> {
        self.send_json(Method::Put, "/auth/me", profile).await
    }

    /// `DELETE /auth/me`
    pub async fn delete_account(&self) -> MindnestResult<MessageResponse> {
        self.delete("/auth/me").await
    }

    /// `POST /auth/change-password`
    pub async fn change_password(
        &self,
        user_id: &str,
        old_password: &str,
        new_password: &str,
    ) -> MindnestResult<MessageResponse> {
        self.send_json(
            Method::Post,
            "/auth/change-password",
            &ChangePasswordRequest {
                user_id,
                old_password,
                new_password,
            },
        )
        .await
    }

    /// `POST /auth/security-questions`
    pub async fn security_questions(&self, email: &str) -> MindnestResult<SecurityQuestions> {
        self.send_json(Method::Post, "/auth/security-questions", &EmailRequest { email })
            .await
    }

    /// `POST /auth/reset-password`
    pub async fn reset_password(
        &self,
        email: &str,
        answer_1: &str,
        answer_2: &str,
        new_password: &str,
    ) -> MindnestResult<MessageResponse> {
        self.send_json(
            Method::Post,
            "/auth/reset-password",
            &ResetPasswordRequest {
                email,
                security_answer_1: answer_1,
                security_answer_2: answer_2,
                new_password,
            },
        )
        .await
    }

    // ------------------------------------------------------------------
    // Resources
    // ------------------------------------------------------------------

    /// `GET /resources/?language=<code>`
    ///
    /// A body that is not an array reads as an empty list.
    pub async fn fetch_resources(&self, language: Language) -> MindnestResult<Vec<ResourceItem>> {
        let path = format!(
            "/resources/?language={}",
            urlencoding::encode(language.code())
        );
        let value: serde_json::Value = self.get(&path).await?;
        if !value.is_array() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_value(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{InMemoryStorage, MockHttpClient, MockResponse};
    use crate::error::MindnestError;
    use crate::traits::HttpError;
    use serde_json::json;

    const BASE: &str = "http://api.test";

    fn client_with(store: InMemoryStorage) -> (ApiClient, Arc<MockHttpClient>) {
        let http = Arc::new(MockHttpClient::new());
        let client = ApiClient::new(http.clone(), Arc::new(store), format!("{}/", BASE));
        (client, http)
    }

    #[tokio::test]
    async fn test_bearer_header_from_stored_user_id() {
        let (client, http) = client_with(InMemoryStorage::with_entries(&[("user_id", "u-1")]));
        http.set_default_response(MockResponse::json(200, json!([])));

        client.fetch_history().await.unwrap();

        let requests = http.get_requests();
        assert_eq!(requests[0].url, "http://api.test/chat/history");
        assert_eq!(
            requests[0].headers.get("Authorization").map(String::as_str),
            Some("Bearer u-1")
        );
        assert_eq!(
            requests[0].headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
    }

    #[tokio::test]
    async fn test_unauthenticated_when_no_user_id_or_read_fails() {
        let store = InMemoryStorage::new();
        let (client, http) = client_with(store.clone());
        http.set_default_response(MockResponse::json(200, json!([])));

        client.fetch_history().await.unwrap();
        store.set_read_should_fail(true);
        client.fetch_history().await.unwrap();

        for request in http.get_requests() {
            assert!(!request.headers.contains_key("Authorization"));
        }
    }

    #[tokio::test]
    async fn test_non_2xx_is_rejected_with_detail() {
        let (client, http) = client_with(InMemoryStorage::new());
        http.set_method_response(
            "POST",
            "http://api.test/auth/login",
            MockResponse::json(400, json!({"detail": "Invalid email or password"})),
        );

        let err = client.login("a@b.c", "nope").await.unwrap_err();
        assert_eq!(err.detail().as_deref(), Some("Invalid email or password"));
        match err {
            MindnestError::Network(NetworkError::Rejected { status, .. }) => {
                assert_eq!(status, 400)
            }
            other => panic!("Expected a rejection, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_transport_error_is_classified() {
        let (client, http) = client_with(InMemoryStorage::new());
        http.set_default_response(MockResponse::Error(HttpError::Timeout("slow".to_string())));

        let err = client.send_chat("hi").await.unwrap_err();
        assert!(matches!(
            err,
            MindnestError::Network(NetworkError::Timeout { secs: 10, .. })
        ));
    }

    #[tokio::test]
    async fn test_send_chat_body() {
        let (client, http) = client_with(InMemoryStorage::new());
        http.set_default_response(MockResponse::json(
            200,
            json!({"response": "I hear you", "severity": "LOW"}),
        ));

        let reply = client.send_chat("feeling low").await.unwrap();
        assert_eq!(reply.response, "I hear you");

        let request = &http.get_requests()[0];
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.json_body(), Some(json!({"message": "feeling low"})));
    }

    #[tokio::test]
    async fn test_fetch_resources_query_and_non_array() {
        let (client, http) = client_with(InMemoryStorage::new());
        http.set_default_response(MockResponse::json(200, json!({"unexpected": true})));

        let resources = client.fetch_resources(Language::Th).await.unwrap();
        assert!(resources.is_empty());
        assert_eq!(
            http.get_requests()[0].url,
            "http://api.test/resources/?language=th"
        );
    }

    #[tokio::test]
    async fn test_null_history_reads_as_empty() {
        let (client, http) = client_with(InMemoryStorage::new());
        http.set_default_response(MockResponse::json(200, json!(null)));
        assert!(client.fetch_history().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_body_is_invalid_response() {
        let (client, http) = client_with(InMemoryStorage::new());
        http.set_default_response(MockResponse::json(200, json!({"not": "a list"})));

        let err = client.fetch_history().await.unwrap_err();
        assert!(matches!(
            err,
            MindnestError::Network(NetworkError::Malformed(_))
        ));
    }
}
