//! Preferred length of a self-care session.

use tracing::warn;

use crate::error::ValidationError;
use crate::storage;
use crate::traits::{KeyValueStore, StorageError};

pub const DEFAULT_SESSION_MINUTES: u32 = 10;

/// One day.
pub const MAX_SESSION_MINUTES: u32 = 24 * 60;

/// Parse a whole number of minutes between 1 and [`MAX_SESSION_MINUTES`].
pub fn parse_session_minutes(value: &str) -> Result<u32, ValidationError> {
    match value.trim().parse::<u32>() {
        Ok(minutes) if (1..=MAX_SESSION_MINUTES).contains(&minutes) => Ok(minutes),
        _ => Err(ValidationError::InvalidDuration(value.to_string())),
    }
}

/// `"45 min"`, `"1 hr"`, `"1 hr 30 min"`.
pub fn format_session_length(minutes: u32) -> String {
    if minutes < 60 {
        return format!("{} min", minutes);
    }
    let hours = minutes / 60;
    let remaining = minutes % 60;
    if remaining == 0 {
        format!("{} hr", hours)
    } else {
        format!("{} hr {} min", hours, remaining)
    }
}

/// Stored length, or the default when missing, unreadable or out of range.
pub async fn load_session_length(store: &dyn KeyValueStore) -> u32 {
    match store.get_item(storage::SESSION_LENGTH_MINUTES).await {
        Ok(Some(value)) => parse_session_minutes(&value).unwrap_or(DEFAULT_SESSION_MINUTES),
        Ok(None) => DEFAULT_SESSION_MINUTES,
        Err(e) => {
            warn!("Error loading session length: {}", e);
            DEFAULT_SESSION_MINUTES
        }
    }
}

pub async fn save_session_length(
    store: &dyn KeyValueStore,
    minutes: u32,
) -> Result<(), StorageError> {
    store
        .set_item(storage::SESSION_LENGTH_MINUTES, &minutes.to_string())
        .await
}
