//! Personal emergency number used by crisis mode.

use tracing::warn;

use crate::storage;
use crate::traits::{KeyValueStore, StorageError};

/// Strip everything but digits, keeping a leading `+`.
///
/// Returns an empty string when no digits remain.
pub fn normalize_phone_number(value: &str) -> String {
    let trimmed = value.trim();
    let digits: String = trimmed.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return String::new();
    }
    if trimmed.starts_with('+') {
        format!("+{}", digits)
    } else {
        digits
    }
}

/// Stored number, if any. Read failures count as unset.
pub async fn load_emergency_number(store: &dyn KeyValueStore) -> Option<String> {
    match storage::load_string(store, storage::EMERGENCY_NUMBER).await {
        Ok(number) => number.map(|n| n.trim().to_string()),
        Err(e) => {
            warn!("Error loading emergency number: {}", e);
            None
        }
    }
}

/// Store the trimmed number, or remove it when blank.
///
/// Returns the value now in effect.
pub async fn save_emergency_number(
    store: &dyn KeyValueStore,
    value: &str,
) -> Result<Option<String>, StorageError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        store.remove_item(storage::EMERGENCY_NUMBER).await?;
        return Ok(None);
    }
    store.set_item(storage::EMERGENCY_NUMBER, trimmed).await?;
    Ok(Some(trimmed.to_string()))
}

/// The number crisis mode should dial, or `None` when nothing usable is stored.
pub async fn crisis_dial_target(store: &dyn KeyValueStore) -> Option<String> {
    load_emergency_number(store)
        .await
        .map(|n| normalize_phone_number(&n))
        .filter(|n| !n.is_empty())
}
