//! Common test utilities for integration tests.
//!
//! # Example
//!
//! ```ignore
//! let (api, http, store) = TestApi::new()
//!     .with_http(MockHttpConfig::new().with_json("GET", "/chat/history", 200, json!([])))
//!     .logged_in("u1")
//!     .build();
//! ```

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use chrono::{DateTime, TimeZone, Utc};
use mindnest::api::ApiClient;
use mindnest::models::ChatMessage;
use std::sync::Arc;

/// Base URL used by every mock-backed client.
pub const BASE_URL: &str = "http://api.test";

/// Builder for an `ApiClient` over mock transport and storage.
#[derive(Default)]
pub struct TestApi {
    http: Option<MockHttpClient>,
    entries: Vec<(String, String)>,
}

impl TestApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_http(mut self, config: MockHttpConfig) -> Self {
        self.http = Some(config.build());
        self
    }

    /// Store a user id so requests carry a bearer credential.
    pub fn logged_in(self, user_id: &str) -> Self {
        self.with_entry("user_id", user_id)
    }

    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.push((key.to_string(), value.to_string()));
        self
    }

    pub fn build(self) -> (ApiClient, Arc<MockHttpClient>, InMemoryStorage) {
        let http = Arc::new(self.http.unwrap_or_default());
        let pairs: Vec<(&str, &str)> = self
            .entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        let store = InMemoryStorage::with_entries(&pairs);
        let api = ApiClient::new(http.clone(), Arc::new(store.clone()), BASE_URL);
        (api, http, store)
    }
}

/// An instant in October 2026, UTC.
pub fn at(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, day, hour, minute, 0).unwrap()
}

/// A dated message fixture.
pub fn message(id: &str, text: &str, is_user: bool, created: DateTime<Utc>) -> ChatMessage {
    if is_user {
        ChatMessage::user(id, text, created)
    } else {
        ChatMessage::assistant(id, text, created)
    }
}
