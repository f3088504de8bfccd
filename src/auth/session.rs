//! Login state kept in local storage.

use tracing::{info, warn};

use crate::api::ApiClient;
use crate::error::{MindnestResult, NetworkError, ValidationError};
use crate::models::Language;
use crate::storage;
use crate::traits::StorageError;

/// The stored identity after a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggedInUser {
    pub user_id: String,
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Login, logout and "who is logged in".
#[derive(Debug, Clone)]
pub struct Session {
    api: ApiClient,
}

impl Session {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Log in and store the returned identity.
    ///
    /// The stored `user_id` doubles as the bearer credential for every
    /// later request.
    pub async fn login(&self, email: &str, password: &str) -> MindnestResult<LoggedInUser> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(ValidationError::MissingFields.into());
        }

        let response = self.api.login(email, password).await?;
        let user_id = match response.user_id.filter(|id| !id.trim().is_empty()) {
            Some(id) => id,
            None => {
                return Err(NetworkError::Malformed("No user ID received".to_string()).into())
            }
        };

        let store = self.api.store().as_ref();
        store.set_item(storage::USER_ID, &user_id).await?;
        let name = response.name.filter(|n| !n.trim().is_empty());
        if let Some(name) = &name {
            store.set_item(storage::USER_NAME, name).await?;
        }
        let email = response.email.filter(|e| !e.trim().is_empty());
        if let Some(email) = &email {
            store.set_item(storage::USER_EMAIL, email).await?;
        }

        info!("Logged in");
        Ok(LoggedInUser {
            user_id,
            name,
            email,
        })
    }

    /// Forget the stored identity.
    pub async fn logout(&self) -> Result<(), StorageError> {
        self.api.store().multi_remove(&storage::USER_KEYS).await
    }

    pub async fn user_id(&self) -> Result<Option<String>, StorageError> {
        storage::load_string(self.api.store().as_ref(), storage::USER_ID).await
    }

    /// Whether a user id is stored. A storage failure counts as logged out.
    pub async fn is_logged_in(&self) -> bool {
        match self.user_id().await {
            Ok(id) => id.is_some(),
            Err(e) => {
                warn!("Error reading user id: {}", e);
                false
            }
        }
    }

    /// Stored display name, or a localized "Friend".
    pub async fn display_name(&self, language: Language) -> String {
        match storage::load_string(self.api.store().as_ref(), storage::USER_NAME).await {
            Ok(Some(name)) => name.trim().to_string(),
            Ok(None) => friend(language).to_string(),
            Err(e) => {
                warn!("Error loading user data: {}", e);
                friend(language).to_string()
            }
        }
    }
}

fn friend(language: Language) -> &'static str {
    match language {
        Language::En => "Friend",
        Language::Th => "เพื่อน",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{InMemoryStorage, MockHttpClient, MockResponse};
    use crate::error::MindnestError;
    use crate::traits::KeyValueStore;
    use serde_json::json;
    use std::sync::Arc;

    fn setup() -> (Session, Arc<MockHttpClient>, InMemoryStorage) {
        let http = Arc::new(MockHttpClient::new());
        let store = InMemoryStorage::new();
        let api = ApiClient::new(http.clone(), Arc::new(store.clone()), "http://api.test");
        (Session::new(api), http, store)
    }

    #[tokio::test]
    async fn test_login_requires_fields() {
        let (session, http, _store) = setup();
        let err = session.login("  ", "pw").await.unwrap_err();
        assert_eq!(err.as_validation(), Some(&ValidationError::MissingFields));
        assert!(session.login("a@b.c", "").await.is_err());
        assert_eq!(http.request_count(), 0);
    }

    #[tokio::test]
    async fn test_login_stores_identity() {
        let (session, http, store) = setup();
        http.set_default_response(MockResponse::json(
            200,
            json!({"message": "Login successful", "user_id": "u1", "name": "Mali", "email": "m@x.th"}),
        ));

        let user = session.login(" m@x.th ", "secret1").await.unwrap();
        assert_eq!(user.user_id, "u1");
        assert_eq!(store.snapshot("user_id").as_deref(), Some("u1"));
        assert_eq!(store.snapshot("user_name").as_deref(), Some("Mali"));
        assert_eq!(store.snapshot("user_email").as_deref(), Some("m@x.th"));
        assert!(session.is_logged_in().await);
        assert_eq!(session.display_name(Language::En).await, "Mali");

        let body = http.get_requests()[0].json_body().unwrap();
        assert_eq!(body, json!({"email": "m@x.th", "password": "secret1"}));
    }

    #[tokio::test]
    async fn test_login_without_user_id() {
        let (session, http, store) = setup();
        http.set_default_response(MockResponse::json(200, json!({"message": "ok"})));

        let err = session.login("a@b.c", "secret1").await.unwrap_err();
        assert!(matches!(
            err,
            MindnestError::Network(NetworkError::Malformed(_))
        ));
        assert!(!store.contains("user_id"));
    }

    #[tokio::test]
    async fn test_logout_removes_user_keys_only() {
        let (session, _http, store) = setup();
        for (k, v) in [("user_id", "u1"), ("user_name", "M"), ("user_email", "e"), ("theme_mode", "dark")] {
            store.set_item(k, v).await.unwrap();
        }

        session.logout().await.unwrap();
        assert!(!session.is_logged_in().await);
        assert!(!store.contains("user_name"));
        assert!(store.contains("theme_mode"));
        assert_eq!(session.display_name(Language::Th).await, "เพื่อน");
    }
}
