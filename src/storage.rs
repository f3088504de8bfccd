//! Persisted storage keys and typed JSON helpers.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::traits::{KeyValueStore, StorageError};

/// Logged-in user's id, also used as the bearer credential.
pub const USER_ID: &str = "user_id";
/// Logged-in user's display name.
pub const USER_NAME: &str = "user_name";
/// Logged-in user's email.
pub const USER_EMAIL: &str = "user_email";
/// JSON array of chat messages.
pub const CHAT_HISTORY: &str = "chat_history";
/// `light` or `dark`.
pub const THEME_MODE: &str = "theme_mode";
/// `en` or `th`.
pub const APP_LANGUAGE: &str = "app_language";
pub const EMERGENCY_NUMBER: &str = "emergency_number";
pub const SESSION_LENGTH_MINUTES: &str = "session_length_minutes";
/// JSON array of mood check-ins, newest first.
pub const MOOD_CHECKINS: &str = "mood_checkins";
pub const DAILY_REMINDER_ENABLED: &str = "daily_reminder_enabled";
pub const DAILY_REMINDER_TIME: &str = "daily_reminder_time";

/// Keys cleared on logout and account deletion.
pub const USER_KEYS: [&str; 3] = [USER_ID, USER_NAME, USER_EMAIL];

/// Read and deserialize a JSON value stored under `key`.
///
/// A missing key reads as `None`; a value that does not parse is an error.
pub async fn load_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, StorageError> {
    match store.get_item(key).await? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Serialize `value` as JSON under `key`.
pub async fn save_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value)?;
    store.set_item(key, &raw).await
}

/// Read a non-blank string value.
pub async fn load_string(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<String>, StorageError> {
    Ok(store
        .get_item(key)
        .await?
        .filter(|value| !value.trim().is_empty()))
}
